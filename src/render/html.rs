// src/render/html.rs
use crate::cv::{Certification, CvDocument, ExperienceEntry, LanguageEntry};
use html_escape::{encode_double_quoted_attribute, encode_text};

const STYLESHEET: &str = "\
.cv-wrapper { max-width: 800px; margin: 2rem auto; font-family: Georgia, serif; color: #222; }
.cv-name { margin-bottom: 0.25rem; }
.cv-contact-full { display: flex; justify-content: space-between; align-items: center; }
.cv-contact { color: #555; }
.cv-profile-image { width: 110px; height: 110px; border-radius: 50%; object-fit: cover; }
.cv-section-title { border-bottom: 1px solid #999; font-size: 1.1rem; letter-spacing: 0.05em; }
.cv-period { float: right; color: #777; }
.cv-paragraph { margin: 0.3rem 0 0.8rem; line-height: 1.4; }
.cv-experience-item, .cv-education { margin-bottom: 0.8rem; }
";

/// Options for the rendered page that are not part of the CV text itself.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Image URL or path shown next to the contact details.
    pub photo: Option<String>,
}

/// Renders the document as a standalone HTML page. Sections without content
/// are left out entirely.
pub fn render_document(doc: &CvDocument, options: &RenderOptions) -> String {
    let title = doc.profile_field("name").unwrap_or("CV");
    let mut body = String::new();

    if doc.is_empty() {
        body.push_str("<p class=\"cv-paragraph\">No CV content found.</p>\n");
    } else {
        push_header(&mut body, doc, options);
        push_about(&mut body, &doc.about);
        push_experience(&mut body, &doc.experience);
        push_education(&mut body, doc);
        push_skills(&mut body, &doc.skills);
        push_certifications(&mut body, &doc.certifications);
        push_languages(&mut body, &doc.languages);
    }

    wrap_page(title, &body)
}

/// Page shown when the CV text could not be loaded at all.
pub fn render_error_page(message: &str) -> String {
    let body = format!("<p class=\"cv-paragraph\">Error: {}</p>\n", encode_text(message));
    wrap_page("CV", &body)
}

fn wrap_page(title: &str, body: &str) -> String {
    let mut page = String::from("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", encode_text(title)));
    page.push_str("<style>\n");
    page.push_str(STYLESHEET);
    page.push_str("</style>\n</head>\n<body>\n<div class=\"cv-wrapper\">\n");
    page.push_str(body);
    page.push_str("</div>\n</body>\n</html>\n");
    page
}

fn section_title(out: &mut String, title: &str) {
    out.push_str(&format!("<h2 class=\"cv-section-title\">{}</h2>\n", title));
}

fn push_header(out: &mut String, doc: &CvDocument, options: &RenderOptions) {
    let field = |key: &str| encode_text(doc.profile_field(key).unwrap_or_default()).into_owned();

    if let Some(name) = doc.profile_field("name") {
        out.push_str(&format!("<h1 class=\"cv-name\">{}</h1>\n", encode_text(name)));
    }

    let location_phone: Vec<String> = ["location", "phone"]
        .into_iter()
        .filter(|key| doc.profile_field(key).is_some_and(|v| !v.is_empty()))
        .map(field)
        .collect();
    let email = field("email");
    if location_phone.is_empty() && email.is_empty() && options.photo.is_none() {
        return;
    }

    out.push_str("<div class=\"cv-contact-full\">\n<div class=\"cv-contact\">\n");
    if !location_phone.is_empty() {
        out.push_str(&format!("{}<br>\n", location_phone.join(" | ")));
    }
    if !email.is_empty() {
        out.push_str(&format!("{}\n", email));
    }
    out.push_str("</div>\n");
    if let Some(photo) = &options.photo {
        out.push_str(&format!(
            "<img src=\"{}\" alt=\"Profile\" class=\"cv-profile-image\">\n",
            encode_double_quoted_attribute(photo),
        ));
    }
    out.push_str("</div>\n");
}

fn push_about(out: &mut String, about: &str) {
    if about.is_empty() {
        return;
    }
    section_title(out, "SUMMARY");
    out.push_str(&format!("<p class=\"cv-paragraph\">{}</p>\n", encode_text(about)));
}

fn push_experience(out: &mut String, experience: &[ExperienceEntry]) {
    if experience.is_empty() {
        return;
    }
    section_title(out, "WORK EXPERIENCE");
    for job in experience {
        out.push_str(&format!(
            "<div class=\"cv-experience-item\">\n<strong>{}</strong> | {}\n<span class=\"cv-period\">{}</span>\n",
            encode_text(&job.title),
            encode_text(&job.company),
            encode_text(&job.period),
        ));
        if !job.description.is_empty() {
            out.push_str(&format!("<p class=\"cv-paragraph\">{}</p>\n", encode_text(&job.description)));
        }
        out.push_str("</div>\n");
    }
}

fn push_education(out: &mut String, doc: &CvDocument) {
    if doc.education.is_empty() {
        return;
    }
    section_title(out, "EDUCATION");
    out.push_str("<div class=\"cv-education\">\n");
    if let Some(degree) = doc.education_field("degree") {
        out.push_str(&format!("<strong>{}</strong>\n", encode_text(degree)));
    }
    if let Some(university) = doc.education_field("university") {
        out.push_str(&format!("<div>{}</div>\n", encode_text(university)));
    }
    if let Some(period) = doc.education_field("period") {
        out.push_str(&format!("<div class=\"cv-period\">{}</div>\n", encode_text(period)));
    }
    if let Some(description) = doc.education_field("description") {
        out.push_str(&format!("<p class=\"cv-paragraph\">{}</p>\n", encode_text(description)));
    }
    out.push_str("</div>\n");
}

fn push_skills(out: &mut String, skills: &[String]) {
    if skills.is_empty() {
        return;
    }
    section_title(out, "SKILLS");
    out.push_str(&format!("<p class=\"cv-paragraph\">{}</p>\n", encode_text(&skills.join(", "))));
}

fn push_certifications(out: &mut String, certifications: &[Certification]) {
    if certifications.is_empty() {
        return;
    }
    section_title(out, "CERTIFICATIONS");
    for cert in certifications {
        out.push_str(&format!(
            "<div class=\"cv-paragraph\">• <strong>{}</strong> ({})</div>\n",
            encode_text(&cert.name),
            encode_text(&cert.date),
        ));
    }
}

fn push_languages(out: &mut String, languages: &[LanguageEntry]) {
    if languages.is_empty() {
        return;
    }
    section_title(out, "LANGUAGES");
    for lang in languages {
        out.push_str(&format!(
            "<div class=\"cv-paragraph\">• {} — {}</div>\n",
            encode_text(&lang.name),
            encode_text(&lang.level),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cv::parse_cv;

    #[test]
    fn empty_sections_are_hidden() {
        let doc = parse_cv("[profile]\nName: Ada Lovelace\n[skills]\nSkill: Analysis");
        let page = render_document(&doc, &RenderOptions::default());

        assert!(page.contains("<h1 class=\"cv-name\">Ada Lovelace</h1>"));
        assert!(page.contains("SKILLS"));
        assert!(!page.contains("SUMMARY"));
        assert!(!page.contains("WORK EXPERIENCE"));
        assert!(!page.contains("EDUCATION"));
        assert!(!page.contains("CERTIFICATIONS"));
        assert!(!page.contains("LANGUAGES"));
    }

    #[test]
    fn values_are_escaped() {
        let doc = parse_cv("[about]\n<script>alert(1)</script> & more");
        let page = render_document(&doc, &RenderOptions::default());

        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
        assert!(!page.contains("<script>"));
    }

    #[test]
    fn empty_document_shows_notice() {
        let page = render_document(&CvDocument::default(), &RenderOptions::default());
        assert!(page.contains("No CV content found."));
        assert!(!page.contains("cv-section-title\">"));
    }

    #[test]
    fn renders_entries_in_order() {
        let doc = parse_cv(
            "[experience]\nJob: Engineer | Acme | 2020-2022\nDescription: Built things\n\
             [certifications]\nCert: CKA | 2023\n[languages]\nLanguage: French | B2",
        );
        let page = render_document(&doc, &RenderOptions::default());

        assert!(page.contains("<strong>Engineer</strong> | Acme"));
        assert!(page.contains("<span class=\"cv-period\">2020-2022</span>"));
        assert!(page.contains("Built things"));
        assert!(page.contains("• <strong>CKA</strong> (2023)"));
        assert!(page.contains("• French — B2"));
    }

    #[test]
    fn contact_line_and_photo() {
        let doc = parse_cv("[profile]\nName: Ada\nLocation: London\nPhone: 123\nEmail: ada@example.com");
        let options = RenderOptions {
            photo: Some("me \"1\".jpg".to_string()),
        };
        let page = render_document(&doc, &options);

        assert!(page.contains("London | 123<br>"));
        assert!(page.contains("ada@example.com"));
        assert!(page.contains("src=\"me &quot;1&quot;.jpg\""));
    }

    #[test]
    fn error_page_shows_message() {
        let page = render_error_page("Failed to load CV data");
        assert!(page.contains("Error: Failed to load CV data"));
    }
}

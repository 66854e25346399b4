// src/cv/parser.rs

// --- Imports ---
use crate::cv::models::{Certification, CvDocument, ExperienceEntry, LanguageEntry};

// --- Sections ---
/// The sections the parser knows how to fill. Any other header name leaves
/// the parser in an "ignore" state until the next header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Profile,
    About,
    Experience,
    Skills,
    Education,
    Certifications,
    Languages,
}

impl Section {
    /// Maps the text between `[` and `]` to a section. Matching is
    /// case-insensitive; surrounding spaces are significant.
    pub fn from_header(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "profile" => Some(Self::Profile),
            "about" => Some(Self::About),
            "experience" => Some(Self::Experience),
            "skills" => Some(Self::Skills),
            "education" => Some(Self::Education),
            "certifications" => Some(Self::Certifications),
            "languages" => Some(Self::Languages),
            _ => None,
        }
    }

    /// Applies one key/value line to the document. `line` is the full trimmed
    /// line, used by `[about]` which ignores the key split.
    fn apply(self, doc: &mut CvDocument, line: &str, key: &str, value: &str) -> bool {
        let key_lower = key.to_lowercase();
        match self {
            Self::Profile => {
                doc.profile.insert(key_lower, value.to_string());
                true
            }
            Self::Education => {
                doc.education.insert(key_lower, value.to_string());
                true
            }
            Self::About => {
                if !doc.about.is_empty() {
                    doc.about.push(' ');
                }
                doc.about.push_str(line);
                true
            }
            Self::Experience => match key_lower.as_str() {
                "job" => {
                    let [title, company, period] = split_pipes(value);
                    doc.experience.push(ExperienceEntry {
                        title,
                        company,
                        period,
                        description: String::new(),
                    });
                    true
                }
                // Orphaned descriptions (no job yet) fall through to `false`.
                "description" => match doc.experience.last_mut() {
                    Some(entry) => {
                        entry.description = value.to_string();
                        true
                    }
                    None => false,
                },
                _ => false,
            },
            Self::Skills if key_lower == "skill" => {
                doc.skills.push(value.to_string());
                true
            }
            Self::Certifications if key_lower == "cert" => {
                let [name, date] = split_pipes(value);
                doc.certifications.push(Certification { name, date });
                true
            }
            Self::Languages if key_lower == "language" => {
                let [name, level] = split_pipes(value);
                doc.languages.push(LanguageEntry { name, level });
                true
            }
            Self::Skills | Self::Certifications | Self::Languages => false,
        }
    }
}

// --- Line Classification ---
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Header(&'a str),
    Field { key: &'a str, value: &'a str },
}

fn classify(line: &str) -> Line<'_> {
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }
    if line.len() >= 2 && line.starts_with('[') && line.ends_with(']') {
        return Line::Header(&line[1..line.len() - 1]);
    }
    let (key, value) = line.split_once(':').unwrap_or((line, ""));
    Line::Field {
        key: key.trim(),
        value: value.trim(),
    }
}

/// Splits a `a | b | c` value into exactly `N` trimmed segments. Missing
/// segments are empty, surplus segments are dropped.
fn split_pipes<const N: usize>(value: &str) -> [String; N] {
    let mut parts = value.split('|').map(str::trim);
    std::array::from_fn(|_| parts.next().unwrap_or_default().to_string())
}

// --- Parser ---
/// Parses the section-based CV text format into a [`CvDocument`].
///
/// This never fails: blank lines and `#` comments are skipped, lines outside
/// a known section are discarded, and malformed values degrade to empty
/// fields. Revisiting a section appends to what it already holds. A leading
/// UTF-8 byte-order mark is ignored.
pub fn parse_cv(text: &str) -> CvDocument {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    let mut doc = CvDocument::default();
    let mut current: Option<Section> = None;
    let mut applied = 0usize;
    let mut discarded = 0usize;

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        match classify(line) {
            Line::Blank | Line::Comment => {}
            Line::Header(name) => {
                current = Section::from_header(name);
                if current.is_none() {
                    tracing::trace!("Line {}: unknown section '{}', ignoring its lines", idx + 1, name);
                }
            }
            Line::Field { key, value } => {
                let used = current.is_some_and(|section| section.apply(&mut doc, line, key, value));
                if used {
                    applied += 1;
                } else {
                    discarded += 1;
                    tracing::trace!("Line {}: discarded '{}'", idx + 1, line);
                }
            }
        }
    }

    tracing::debug!(
        "Parsed CV text: {} lines applied, {} discarded ({} jobs, {} skills, {} certifications, {} languages)",
        applied,
        discarded,
        doc.experience.len(),
        doc.skills.len(),
        doc.certifications.len(),
        doc.languages.len()
    );
    doc
}

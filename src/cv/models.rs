// src/cv/models.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The structured résumé produced by [`crate::cv::parse_cv`].
///
/// All seven fields are always present; sections missing from the source
/// text are simply empty. Mapping keys are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvDocument {
    pub profile: BTreeMap<String, String>,
    pub about: String,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    pub education: BTreeMap<String, String>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<LanguageEntry>,
}

/// One `Job:` line, optionally completed by a following `Description:` line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub level: String,
}

impl CvDocument {
    /// True when nothing at all was extracted ("loaded but empty").
    pub fn is_empty(&self) -> bool {
        self.profile.is_empty()
            && self.about.is_empty()
            && self.experience.is_empty()
            && self.skills.is_empty()
            && self.education.is_empty()
            && self.certifications.is_empty()
            && self.languages.is_empty()
    }

    /// Case-insensitive profile lookup, e.g. `profile_field("Name")`.
    pub fn profile_field(&self, key: &str) -> Option<&str> {
        self.profile.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Case-insensitive education lookup, e.g. `education_field("degree")`.
    pub fn education_field(&self, key: &str) -> Option<&str> {
        self.education.get(&key.to_lowercase()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_document_is_empty() {
        assert!(CvDocument::default().is_empty());
    }

    #[test]
    fn any_populated_field_makes_it_non_empty() {
        let mut doc = CvDocument::default();
        doc.skills.push("Rust".to_string());
        assert!(!doc.is_empty());
    }

    #[test]
    fn field_lookups_ignore_case() {
        let mut doc = CvDocument::default();
        doc.profile.insert("email".to_string(), "a@b.c".to_string());
        doc.education.insert("degree".to_string(), "BSc".to_string());

        assert_eq!(doc.profile_field("EMAIL"), Some("a@b.c"));
        assert_eq!(doc.education_field("Degree"), Some("BSc"));
        assert_eq!(doc.profile_field("phone"), None);
    }

    #[test]
    fn empty_document_serializes_every_field() {
        let json = serde_json::to_value(CvDocument::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in [
            "profile",
            "about",
            "experience",
            "skills",
            "education",
            "certifications",
            "languages",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
    }
}

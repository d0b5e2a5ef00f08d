//! Localized presentation values for a mentor profile.

use serde::Serialize;

use crate::{Language, Mentor};

/// Resolved, display-ready profile text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MentorDisplay {
    pub name: String,
    pub description: String,
    pub position: String,
    pub location: String,
    pub company: String,
}

fn localized(
    lang: Language,
    en: Option<&str>,
    ko: Option<&str>,
    placeholder: &str,
) -> String {
    let preferred = match lang {
        Language::En => en,
        Language::Ko => ko,
    };

    [preferred, en, ko]
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

impl MentorDisplay {
    /// Fallback chain per field: requested language, then English, then
    /// Korean, then a placeholder ("No Name" for the name, empty
    /// otherwise).
    pub fn resolve(mentor: &Mentor, lang: Language) -> Self {
        Self {
            name: localized(
                lang,
                mentor.name_en.as_deref(),
                mentor.name_ko.as_deref(),
                "No Name",
            ),
            description: localized(
                lang,
                mentor.description_en.as_deref(),
                mentor.description_ko.as_deref(),
                "",
            ),
            position: localized(
                lang,
                mentor.position_en.as_deref(),
                mentor.position_ko.as_deref(),
                "",
            ),
            location: localized(
                lang,
                mentor.location_en.as_deref(),
                mentor.location_ko.as_deref(),
                "",
            ),
            company: localized(
                lang,
                mentor.company_en.as_deref(),
                mentor.company_ko.as_deref(),
                "",
            ),
        }
    }
}

/// Default a bare host/path to https so stored profile links stay
/// clickable ("linkedin.com/in/x" -> "https://linkedin.com/in/x").
pub fn ensure_protocol(url: &str) -> String {
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_requested_language() {
        let mentor = Mentor {
            name_en: Some("Jane".into()),
            name_ko: Some("제인".into()),
            ..Mentor::default()
        };

        assert_eq!(MentorDisplay::resolve(&mentor, Language::En).name, "Jane");
        assert_eq!(MentorDisplay::resolve(&mentor, Language::Ko).name, "제인");
    }

    #[test]
    fn falls_back_english_then_korean() {
        let mentor = Mentor {
            position_ko: Some("개발자".into()),
            ..Mentor::default()
        };

        let display = MentorDisplay::resolve(&mentor, Language::En);
        assert_eq!(display.position, "개발자");
    }

    #[test]
    fn empty_strings_fall_through_like_missing_values() {
        let mentor = Mentor {
            company_en: Some(String::new()),
            company_ko: Some("스타트업".into()),
            ..Mentor::default()
        };

        assert_eq!(
            MentorDisplay::resolve(&mentor, Language::En).company,
            "스타트업"
        );
    }

    #[test]
    fn missing_name_gets_placeholder_other_fields_stay_empty() {
        let display = MentorDisplay::resolve(&Mentor::default(), Language::Ko);
        assert_eq!(display.name, "No Name");
        assert_eq!(display.description, "");
        assert_eq!(display.location, "");
    }

    #[test]
    fn ensure_protocol_only_prefixes_bare_urls() {
        assert_eq!(ensure_protocol("linkedin.com/in/x"), "https://linkedin.com/in/x");
        assert_eq!(ensure_protocol("https://cal.com/x"), "https://cal.com/x");
        assert_eq!(ensure_protocol("http://cal.com/x"), "http://cal.com/x");
        assert_eq!(ensure_protocol(""), "");
    }
}

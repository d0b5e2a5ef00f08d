//! Free-text search over mentor profiles.

use crate::Mentor;

/// Case-insensitive substring match of `query` against a mentor's
/// searchable text: both name variants, both location variants, both
/// position variants, and every tag, space-joined. Empty or missing
/// fields are skipped. No tokenization, no stemming, diacritic-sensitive;
/// an empty query matches everything.
pub fn matches_search(mentor: &Mentor, query: &str) -> bool {
    let query = query.to_lowercase();

    let haystack = [
        mentor.name_en.as_deref(),
        mentor.name_ko.as_deref(),
        mentor.location_en.as_deref(),
        mentor.location_ko.as_deref(),
        mentor.position_en.as_deref(),
        mentor.position_ko.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .chain(mentor.tags.iter().cloned())
    .filter(|text| !text.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase();

    haystack.contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mentor() -> Mentor {
        Mentor {
            name_en: Some("Jane Kim".into()),
            name_ko: Some("김제인".into()),
            position_en: Some("Staff Engineer".into()),
            location_ko: Some("서울".into()),
            tags: vec!["Java".into(), "Backend".into()],
            ..Mentor::default()
        }
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_search(&mentor(), ""));
        assert!(matches_search(&Mentor::default(), ""));
    }

    #[test]
    fn matches_across_localized_fields_and_tags() {
        let m = mentor();
        assert!(matches_search(&m, "jane"));
        assert!(matches_search(&m, "김제인"));
        assert!(matches_search(&m, "서울"));
        assert!(matches_search(&m, "staff engineer"));
        assert!(matches_search(&m, "backend"));
    }

    #[test]
    fn query_case_is_ignored() {
        assert!(matches_search(&mentor(), "JAVA"));
        assert!(matches_search(&mentor(), "jAnE"));
    }

    #[test]
    fn substring_can_span_the_space_join() {
        // Joined haystack is "Jane Kim 김제인 서울 Staff Engineer Java Backend".
        assert!(matches_search(&mentor(), "kim 김제인"));
    }

    #[test]
    fn description_and_company_are_not_searched() {
        let m = Mentor {
            description_en: Some("quant finance veteran".into()),
            company_en: Some("Acme Corp".into()),
            ..Mentor::default()
        };
        assert!(!matches_search(&m, "quant"));
        assert!(!matches_search(&m, "acme"));
    }

    #[test]
    fn no_match_when_query_absent() {
        assert!(!matches_search(&mentor(), "rust"));
        assert!(!matches_search(&Mentor::default(), "anything"));
    }
}

//! Tag canonicalization for the expertise facet.
//!
//! Mentors enter tags as free text, so the same concept shows up as
//! "Java", "java " or "JAVA". Grouping and matching run on a normalized
//! key; the literal tag list stored on a mentor is never rewritten.

/// Grouping key for a tag: lowercase with all whitespace removed.
///
/// "Java", "java" and "JAVA " collapse to the same key. Covers fullwidth
/// spaces (U+3000) as well, which Korean input methods produce.
pub fn normalize_tag(tag: &str) -> String {
    tag.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether `candidate` should replace `current` as the spelling shown to
/// users, given both normalize to the same key.
///
/// A spelling containing a space wins over one without; among equal
/// space-ness, a spelling starting with an uppercase letter wins over one
/// that doesn't. Any remaining tie keeps the incumbent (first seen).
pub fn prefer_display_name(candidate: &str, current: &str) -> bool {
    let candidate_has_space = candidate.contains(' ');
    let current_has_space = current.contains(' ');

    if candidate_has_space && !current_has_space {
        return true;
    }
    if !candidate_has_space && current_has_space {
        return false;
    }

    let candidate_is_title = candidate.chars().next().is_some_and(char::is_uppercase);
    let current_is_title = current.chars().next().is_some_and(char::is_uppercase);
    candidate_is_title && !current_is_title
}

/// Split comma-joined form input ("Java, Spring , ") into trimmed tags.
pub fn split_tag_input(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_case_and_whitespace() {
        assert_eq!(normalize_tag("Java"), "java");
        assert_eq!(normalize_tag("JAVA "), "java");
        assert_eq!(normalize_tag("machine learning"), "machinelearning");
        assert_eq!(normalize_tag("Machine\tLearning"), "machinelearning");
    }

    #[test]
    fn normalize_handles_fullwidth_space_and_hangul() {
        assert_eq!(normalize_tag("데이터\u{3000}분석"), "데이터분석");
        assert_eq!(normalize_tag("데이터 분석"), "데이터분석");
    }

    #[test]
    fn case_and_whitespace_variants_share_a_key() {
        for (a, b) in [
            ("Java", "java"),
            ("JAVA ", " java"),
            ("Machine Learning", "machinelearning"),
        ] {
            assert_eq!(normalize_tag(a), normalize_tag(b));
        }
    }

    #[test]
    fn spaced_spelling_beats_unspaced() {
        assert!(prefer_display_name("Machine Learning", "machinelearning"));
        assert!(!prefer_display_name("machinelearning", "Machine Learning"));
    }

    #[test]
    fn title_case_beats_lowercase_at_equal_spaceness() {
        assert!(prefer_display_name("Java", "java"));
        assert!(!prefer_display_name("java", "Java"));
        assert!(!prefer_display_name("JAVA", "Java"));
    }

    #[test]
    fn unresolved_tie_keeps_incumbent() {
        assert!(!prefer_display_name("Java", "JAVA"));
        assert!(!prefer_display_name("", "java"));
    }

    #[test]
    fn splits_comma_joined_form_input() {
        assert_eq!(
            split_tag_input("Java, Spring ,  , Backend"),
            vec!["Java", "Spring", "Backend"]
        );
        assert!(split_tag_input("  ").is_empty());
    }
}

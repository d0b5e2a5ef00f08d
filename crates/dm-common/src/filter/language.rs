//! Audience-language gate for the public listing.

use crate::{Language, Mentor};

/// Whether a mentor declares support for the requested display language.
///
/// Declared languages are free text ("Korean", "한국어", "en", ...), so the
/// check is lowercase substring containment, not an enum. A mentor with no
/// declared languages never matches: this is a strict inclusion filter.
///
/// The two-letter needles can over-match inside unrelated words ("Tokyo"
/// contains "ko"); that looseness is accepted so short codes like "ko"
/// and "en-US" keep matching.
pub fn matches_language(mentor: &Mentor, lang: Language) -> bool {
    let needles: &[&str] = match lang {
        Language::Ko => &["korean", "한국어", "ko"],
        Language::En => &["english", "영어", "en"],
    };

    mentor.languages.iter().any(|declared| {
        let declared = declared.to_lowercase();
        needles.iter().any(|needle| declared.contains(needle))
    })
}

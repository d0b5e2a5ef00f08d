//! Combines the language, search, expertise, location, session and price
//! predicates into the listing filter, and derives the sidebar facets.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::language::matches_language;
use super::search::matches_search;
use super::tags::{normalize_tag, prefer_display_name};
use crate::{FilterState, Language, Mentor};

/// User-selectable filter dimensions derived from the mentor collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    /// Preferred display spellings, most frequent first.
    pub available_tags: Vec<String>,
    /// Distinct display-language locations, sorted.
    pub available_locations: Vec<String>,
}

/// Display-language location with fallback: requested variant, then
/// English, then Korean, then empty. Location filtering compares this
/// exact string, not a normalized form.
pub fn mentor_location(mentor: &Mentor, lang: Language) -> String {
    let preferred = match lang {
        Language::En => mentor.location_en.as_deref(),
        Language::Ko => mentor.location_ko.as_deref(),
    };

    [preferred, mentor.location_en.as_deref(), mentor.location_ko.as_deref()]
        .into_iter()
        .flatten()
        .find(|loc| !loc.is_empty())
        .unwrap_or_default()
        .to_string()
}

/// Derive the facet option lists from the full collection.
///
/// Tags are grouped by normalized key, counted per group, and listed by
/// their preferred display spelling, ordered by descending count with
/// ties broken lexicographically. Which spelling represents a group can
/// depend on the order mentors arrive in (the listing shuffles), so a
/// tie not settled by [`prefer_display_name`] keeps the first-seen form.
///
/// Facets are a function of the collection and the display language only:
/// the current search text and filter selection never narrow them.
pub fn derive_facets(mentors: &[Mentor], lang: Language) -> Facets {
    struct TagGroup {
        display: String,
        count: usize,
    }

    let mut tag_groups: HashMap<String, TagGroup> = HashMap::new();
    let mut locations = BTreeSet::new();

    for mentor in mentors {
        for tag in &mentor.tags {
            let key = normalize_tag(tag);
            match tag_groups.get_mut(&key) {
                Some(group) => {
                    group.count += 1;
                    if prefer_display_name(tag, &group.display) {
                        group.display = tag.clone();
                    }
                }
                None => {
                    tag_groups.insert(
                        key,
                        TagGroup {
                            display: tag.clone(),
                            count: 1,
                        },
                    );
                }
            }
        }

        let location = mentor_location(mentor, lang);
        if !location.is_empty() {
            locations.insert(location);
        }
    }

    let mut tags: Vec<TagGroup> = tag_groups.into_values().collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.display.cmp(&b.display)));

    Facets {
        available_tags: tags.into_iter().map(|group| group.display).collect(),
        available_locations: locations.into_iter().collect(),
    }
}

/// Apply every filter to the collection, preserving input order.
///
/// Predicates short-circuit per mentor in the order language, search,
/// expertise, location, session length, price; the order only affects
/// evaluation cost, never the result set.
pub fn apply_filters(
    mentors: &[Mentor],
    search: &str,
    lang: Language,
    filters: &FilterState,
) -> Vec<Mentor> {
    let selected_tag_keys: Vec<String> =
        filters.expertise.iter().map(|tag| normalize_tag(tag)).collect();

    mentors
        .iter()
        .filter(|mentor| {
            if !matches_language(mentor, lang) {
                return false;
            }

            if !search.is_empty() && !matches_search(mentor, search) {
                return false;
            }

            // Expertise: OR over normalized keys.
            if !selected_tag_keys.is_empty() {
                let mentor_keys: Vec<String> =
                    mentor.tags.iter().map(|tag| normalize_tag(tag)).collect();
                if !selected_tag_keys.iter().any(|key| mentor_keys.contains(key)) {
                    return false;
                }
            }

            // Location: exact string equality against the display value.
            if !filters.locations.is_empty()
                && !filters.locations.contains(&mentor_location(mentor, lang))
            {
                return false;
            }

            // Session length: exact match; a mentor with no session time
            // set fails any selected length.
            if let Some(length) = filters.session_length {
                if mentor.session_time_minutes != Some(length) {
                    return false;
                }
            }

            // Price: only enforced for mentors that have a price. A
            // priceless mentor is never excluded here, asymmetric with
            // the session-length rule above.
            if let Some(price) = mentor.session_price_usd {
                let (min, max) = filters.price_range;
                if price < min || price > max {
                    return false;
                }
            }

            true
        })
        .cloned()
        .collect()
}

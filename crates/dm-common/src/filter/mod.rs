pub mod engine;
pub mod language;
pub mod search;
pub mod tags;

pub use engine::{apply_filters, derive_facets, mentor_location, Facets};
pub use language::matches_language;
pub use search::matches_search;
pub use tags::{normalize_tag, prefer_display_name, split_tag_input};

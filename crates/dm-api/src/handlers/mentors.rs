use axum::{
    Json,
    extract::{Query, State},
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use dm_common::filter::{apply_filters, derive_facets, split_tag_input, Facets};
use dm_common::{FilterState, Language, Mentor};

use crate::SharedState;
use crate::error::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct MentorListQuery {
    pub lang: Option<Language>,
    #[serde(default)]
    pub search: String,
    /// Comma-joined display tags, as offered by the facet list.
    pub expertise: Option<String>,
    /// Pipe-joined locations; location strings themselves may contain commas.
    pub locations: Option<String>,
    pub session_length: Option<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}

impl MentorListQuery {
    fn filter_state(&self) -> FilterState {
        let mut filters = FilterState {
            expertise: self
                .expertise
                .as_deref()
                .map(split_tag_input)
                .unwrap_or_default(),
            locations: self
                .locations
                .as_deref()
                .map(|raw| {
                    raw.split('|')
                        .map(str::trim)
                        .filter(|loc| !loc.is_empty())
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
            session_length: self.session_length,
            ..FilterState::default()
        };

        // Apply min before max so a contradictory pair resolves the same
        // way the sidebar does: the bound edited last wins.
        if let Some(min) = self.price_min {
            filters.set_price_min(min);
        }
        if let Some(max) = self.price_max {
            filters.set_price_max(max);
        }

        filters
    }
}

#[derive(Debug, Serialize)]
pub struct MentorListResponse {
    pub mentors: Vec<Mentor>,
    pub total: usize,
    pub active_filter_count: u8,
}

#[derive(Debug, Default, Deserialize)]
pub struct FacetQuery {
    pub lang: Option<Language>,
}

/// Public listing: active mentors, shuffled for even exposure, then
/// narrowed by the filter engine.
pub async fn list_mentors(
    State(state): State<SharedState>,
    Query(query): Query<MentorListQuery>,
) -> Result<Json<MentorListResponse>, ApiError> {
    let lang = query
        .lang
        .unwrap_or_else(|| state.prefs.get().default_language);
    let filters = query.filter_state();

    let mut mentors = dm_common::db::fetch_active_mentors(&state.pool).await?;
    mentors.shuffle(&mut rand::thread_rng());

    let filtered = apply_filters(&mentors, &query.search, lang, &filters);

    Ok(Json(MentorListResponse {
        total: filtered.len(),
        active_filter_count: filters.active_filter_count(),
        mentors: filtered,
    }))
}

/// Sidebar facet options. A function of the active collection and the
/// display language only; the caller's current search/filter state
/// deliberately plays no part.
pub async fn list_facets(
    State(state): State<SharedState>,
    Query(query): Query<FacetQuery>,
) -> Result<Json<Facets>, ApiError> {
    let lang = query
        .lang
        .unwrap_or_else(|| state.prefs.get().default_language);

    let mentors = dm_common::db::fetch_active_mentors(&state.pool).await?;
    Ok(Json(derive_facets(&mentors, lang)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_splits_expertise_and_locations() {
        let query = MentorListQuery {
            expertise: Some("Java, Machine Learning".into()),
            locations: Some("서울 | Seoul, South Korea".into()),
            ..MentorListQuery::default()
        };

        let filters = query.filter_state();
        assert_eq!(filters.expertise, vec!["Java", "Machine Learning"]);
        assert_eq!(filters.locations, vec!["서울", "Seoul, South Korea"]);
    }

    #[test]
    fn query_price_bounds_keep_the_range_ordered() {
        let query = MentorListQuery {
            price_min: Some(60.0),
            price_max: Some(40.0),
            ..MentorListQuery::default()
        };

        // Max is applied last, so it drags min down.
        assert_eq!(query.filter_state().price_range, (40.0, 40.0));
    }

    #[test]
    fn absent_params_mean_default_filters() {
        let filters = MentorListQuery::default().filter_state();
        assert_eq!(filters, FilterState::default());
        assert_eq!(filters.active_filter_count(), 0);
    }
}

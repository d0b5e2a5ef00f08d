pub mod api;
pub mod db;
pub mod display;
pub mod filter;
pub mod logging;
pub mod prefs;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

/// Audience language a visitor browses the directory in.
///
/// The public site boots in Korean; query strings carry `ko` / `en`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

// Directory entry as persisted in dm.mentors. Every localized field is
// independently nullable; display fallback lives in `display`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mentor {
    pub id: Option<Uuid>,
    pub name_en: Option<String>,
    pub name_ko: Option<String>,
    pub description_en: Option<String>,
    pub description_ko: Option<String>,
    pub position_en: Option<String>,
    pub position_ko: Option<String>,
    pub location_en: Option<String>,
    pub location_ko: Option<String>,
    pub company_en: Option<String>,
    pub company_ko: Option<String>,
    pub picture_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub calendly_url: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    pub session_time_minutes: Option<i32>,
    pub session_price_usd: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full default donation range shown by the sidebar slider.
pub const DEFAULT_PRICE_RANGE: (f64, f64) = (0.0, 100.0);

/// Ephemeral, client-driven filter selection. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub expertise: Vec<String>,
    pub locations: Vec<String>,
    pub session_length: Option<i32>,
    pub price_range: (f64, f64),
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            expertise: Vec::new(),
            locations: Vec::new(),
            session_length: None,
            price_range: DEFAULT_PRICE_RANGE,
        }
    }
}

impl FilterState {
    /// Set the lower bound, dragging the upper bound along when the edit
    /// would invert the range (min <= max always holds).
    pub fn set_price_min(&mut self, min: f64) {
        self.price_range.0 = min;
        if self.price_range.0 > self.price_range.1 {
            self.price_range.1 = self.price_range.0;
        }
    }

    /// Set the upper bound, dragging the lower bound along when the edit
    /// would invert the range.
    pub fn set_price_max(&mut self, max: f64) {
        self.price_range.1 = max;
        if self.price_range.1 < self.price_range.0 {
            self.price_range.0 = self.price_range.1;
        }
    }

    pub fn price_range_is_default(&self) -> bool {
        self.price_range.0 <= DEFAULT_PRICE_RANGE.0 && self.price_range.1 >= DEFAULT_PRICE_RANGE.1
    }

    /// Categorical count (0-4) of filter groups in a non-default state.
    pub fn active_filter_count(&self) -> u8 {
        let mut count = 0;
        if !self.expertise.is_empty() {
            count += 1;
        }
        if !self.locations.is_empty() {
            count += 1;
        }
        if self.session_length.is_some() {
            count += 1;
        }
        if !self.price_range_is_default() {
            count += 1;
        }
        count
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_filter_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_parses_query_values() {
        assert_eq!("ko".parse::<Language>().unwrap(), Language::Ko);
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!(Language::En.to_string(), "en");
        assert!("jp".parse::<Language>().is_err());
    }

    #[test]
    fn default_filter_state_is_inactive() {
        let filters = FilterState::default();
        assert_eq!(filters.active_filter_count(), 0);
        assert!(!filters.has_active_filters());
        assert_eq!(filters.price_range, (0.0, 100.0));
    }

    #[test]
    fn raising_min_above_max_drags_max_up() {
        let mut filters = FilterState::default();
        filters.set_price_max(40.0);
        filters.set_price_min(60.0);
        assert_eq!(filters.price_range, (60.0, 60.0));
    }

    #[test]
    fn lowering_max_below_min_drags_min_down() {
        let mut filters = FilterState::default();
        filters.set_price_min(50.0);
        filters.set_price_max(20.0);
        assert_eq!(filters.price_range, (20.0, 20.0));
    }

    #[test]
    fn counts_each_filter_group_once() {
        let filters = FilterState {
            expertise: vec!["Java".into(), "Rust".into()],
            locations: vec!["Seoul".into()],
            session_length: Some(30),
            price_range: (10.0, 100.0),
        };
        assert_eq!(filters.active_filter_count(), 4);
    }

    #[test]
    fn price_range_counts_when_either_bound_moved() {
        let mut filters = FilterState::default();
        filters.set_price_max(90.0);
        assert_eq!(filters.active_filter_count(), 1);

        let mut filters = FilterState::default();
        filters.set_price_min(1.0);
        assert_eq!(filters.active_filter_count(), 1);
    }
}

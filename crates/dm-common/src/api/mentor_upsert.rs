use serde::Deserialize;

/// Create/update payload for the admin panel. Field-for-field what the
/// admin form submits; `languages` and `tags` arrive as arrays, already
/// split from the comma-joined form inputs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorUpsert {
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
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    pub session_time_minutes: Option<i32>,
    pub session_price_usd: Option<f64>,
}

const fn default_is_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_active_defaults_to_true() {
        let upsert: MentorUpsert = serde_json::from_str(r#"{"name_en": "Jane"}"#).unwrap();
        assert!(upsert.is_active);
        assert!(upsert.tags.is_empty());
    }

    #[test]
    fn accepts_the_full_admin_form() {
        let upsert: MentorUpsert = serde_json::from_str(
            r#"{
                "name_en": "Jane Kim",
                "name_ko": "김제인",
                "languages": ["Korean", "English"],
                "tags": ["Java", "Backend"],
                "is_active": false,
                "session_time_minutes": 45,
                "session_price_usd": 30.0
            }"#,
        )
        .unwrap();

        assert_eq!(upsert.languages.len(), 2);
        assert!(!upsert.is_active);
        assert_eq!(upsert.session_time_minutes, Some(45));
    }
}

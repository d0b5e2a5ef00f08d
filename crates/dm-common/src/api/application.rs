use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use crate::api::mentor_upsert::MentorUpsert;

// Shape check only; deliverability is the mail provider's problem.
static RE_EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationValidationError {
    #[error("at least one of name_en / name_ko is required")]
    MissingName,
    #[error("a contact email is required")]
    MissingEmail,
    #[error("contact email is not a valid address")]
    InvalidEmail,
}

/// Self-service mentor application from the public form. Same profile
/// fields as [`MentorUpsert`] minus the visibility flag: applications
/// always land inactive and wait for admin review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MentorApplication {
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
    pub session_time_minutes: Option<i32>,
    pub session_price_usd: Option<f64>,
}

impl MentorApplication {
    pub fn validate(&self) -> Result<(), ApplicationValidationError> {
        let has_name = [self.name_en.as_deref(), self.name_ko.as_deref()]
            .into_iter()
            .flatten()
            .any(|name| !name.trim().is_empty());
        if !has_name {
            return Err(ApplicationValidationError::MissingName);
        }

        match self.email.as_deref().map(str::trim) {
            None | Some("") => Err(ApplicationValidationError::MissingEmail),
            Some(email) if !RE_EMAIL.is_match(email) => {
                Err(ApplicationValidationError::InvalidEmail)
            }
            Some(_) => Ok(()),
        }
    }

    /// Applications are stored as ordinary mentor rows, just invisible
    /// until an admin flips them on.
    pub fn into_upsert(self) -> MentorUpsert {
        MentorUpsert {
            name_en: self.name_en,
            name_ko: self.name_ko,
            description_en: self.description_en,
            description_ko: self.description_ko,
            position_en: self.position_en,
            position_ko: self.position_ko,
            location_en: self.location_en,
            location_ko: self.location_ko,
            company_en: self.company_en,
            company_ko: self.company_ko,
            picture_url: self.picture_url,
            linkedin_url: self.linkedin_url,
            calendly_url: self.calendly_url,
            email: self.email,
            languages: self.languages,
            tags: self.tags,
            is_active: false,
            session_time_minutes: self.session_time_minutes,
            session_price_usd: self.session_price_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_application() -> MentorApplication {
        MentorApplication {
            name_ko: Some("김제인".into()),
            email: Some("jane@example.com".into()),
            ..MentorApplication::default()
        }
    }

    #[test]
    fn valid_application_passes() {
        assert_eq!(valid_application().validate(), Ok(()));
    }

    #[test]
    fn either_name_variant_satisfies_the_name_rule() {
        let mut app = valid_application();
        app.name_ko = None;
        app.name_en = Some("Jane".into());
        assert_eq!(app.validate(), Ok(()));
    }

    #[test]
    fn blank_names_are_rejected() {
        let mut app = valid_application();
        app.name_ko = Some("   ".into());
        assert_eq!(app.validate(), Err(ApplicationValidationError::MissingName));
    }

    #[test]
    fn email_is_required_and_shape_checked() {
        let mut app = valid_application();
        app.email = None;
        assert_eq!(app.validate(), Err(ApplicationValidationError::MissingEmail));

        app.email = Some("not-an-email".into());
        assert_eq!(app.validate(), Err(ApplicationValidationError::InvalidEmail));

        app.email = Some("a b@example.com".into());
        assert_eq!(app.validate(), Err(ApplicationValidationError::InvalidEmail));
    }

    #[test]
    fn applications_land_inactive() {
        let upsert = valid_application().into_upsert();
        assert!(!upsert.is_active);
        assert_eq!(upsert.email.as_deref(), Some("jane@example.com"));
    }
}

//! New-application notification mail.
//!
//! Delivery goes through an HTTP mail provider. When the provider is not
//! configured the notice is logged and reported as simulated; an
//! application must never be lost because mail credentials are absent.

use std::env;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

use dm_common::api::MentorApplication;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("mail request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("mail provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailDelivery {
    Sent,
    Simulated,
}

#[derive(Debug, Clone, Default)]
pub struct EmailConfig {
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl EmailConfig {
    /// Reads `DM_EMAIL_ENDPOINT` / `DM_EMAIL_TOKEN` / `DM_EMAIL_FROM` /
    /// `DM_EMAIL_TO`. Any missing piece downgrades delivery to simulation.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("DM_EMAIL_ENDPOINT").ok(),
            token: env::var("DM_EMAIL_TOKEN").ok(),
            from: env::var("DM_EMAIL_FROM").ok(),
            to: env::var("DM_EMAIL_TO").ok(),
        }
    }

    fn credentials(&self) -> Option<(&str, &str, &str, &str)> {
        Some((
            self.endpoint.as_deref()?,
            self.token.as_deref()?,
            self.from.as_deref()?,
            self.to.as_deref()?,
        ))
    }
}

#[derive(Debug, Serialize)]
struct OutboundMessage<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    text: String,
}

pub struct Mailer {
    config: EmailConfig,
    http: reqwest::Client,
}

fn application_subject(application: &MentorApplication) -> String {
    format!(
        "[Donation Mentoring] New Mentor Application: {} ({})",
        application.name_ko.as_deref().unwrap_or("-"),
        application.name_en.as_deref().unwrap_or("-"),
    )
}

fn application_body(application: &MentorApplication) -> String {
    format!(
        "New Mentor Application Received:\n\n\
         Name: {} / {}\n\
         Email: {}\n\
         Position: {}\n\
         Company: {}\n\n\
         Please check the admin panel to review and approve.",
        application.name_ko.as_deref().unwrap_or("-"),
        application.name_en.as_deref().unwrap_or("-"),
        application.email.as_deref().unwrap_or("-"),
        application.position_ko.as_deref().unwrap_or("-"),
        application.company_ko.as_deref().unwrap_or("-"),
    )
}

impl Mailer {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    #[instrument(skip(self, application))]
    pub async fn send_application_notice(
        &self,
        application: &MentorApplication,
    ) -> Result<EmailDelivery, MailerError> {
        let subject = application_subject(application);

        let Some((endpoint, token, from, to)) = self.config.credentials() else {
            warn!(%subject, "mail credentials missing; simulating email send");
            return Ok(EmailDelivery::Simulated);
        };

        let message = OutboundMessage {
            from,
            to,
            subject,
            text: application_body(application),
        };

        let response = self
            .http
            .post(endpoint)
            .bearer_auth(token)
            .json(&message)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(MailerError::Rejected { status, body });
        }

        info!("application notice sent");
        Ok(EmailDelivery::Sent)
    }
}

pub mod application;
pub mod mentor_upsert;

pub use application::{ApplicationValidationError, MentorApplication};
pub use mentor_upsert::MentorUpsert;

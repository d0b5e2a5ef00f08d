pub mod mentors;
pub mod migrations;
pub mod pool;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use mentors::{
    delete_mentor, fetch_active_mentors, get_mentor, insert_mentor, list_mentors,
    set_mentor_active, update_mentor, MentorStorageError,
};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool_from_url, create_pool_from_url_checked, DbPoolError, PgPool};

use crate::config::ConfigurationError;
use crate::documents::DocumentError;
use thiserror::Error;

/// Crate-level error for application code wiring the pieces together
///
/// Query helpers in [`crate::repository`] return `sqlx::Error` unchanged so that
/// [`map_error`](crate::repository::map_error) can still inspect it; domain
/// repositories map that into their own errors, which convert into this one.
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

pub type Result<T> = std::result::Result<T, FolioError>;

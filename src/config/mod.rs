//! # Folio Configuration
//!
//! Layered configuration: built-in defaults, then an optional file, then
//! `FOLIO__`-prefixed environment variables. Loaded configuration is validated
//! before it is handed out, so bad page sizes fail at startup instead of per request.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use folio_query::config::ConfigLoader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigLoader::load()?;
//! let max = config.pagination.max_page_size;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use error::{ConfigResult, ConfigurationError};
pub use loader::ConfigLoader;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl FolioConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.database.validate()?;
        self.pagination.validate()
    }
}

/// Database connection and pooling configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/folio_development".to_string(),
            max_connections: 10,
            acquire_timeout_seconds: 30,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.url.is_empty() {
            return Err(ConfigurationError::missing_required_field(
                "database.url",
                "database configuration",
            ));
        }

        if self.max_connections == 0 {
            return Err(ConfigurationError::invalid_value(
                "database.max_connections",
                "0",
                "pool size must be greater than 0",
            ));
        }

        Ok(())
    }
}

/// Page size bounds applied by [`PageRequest::normalize`](crate::query_builder::PageRequest::normalize)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(ConfigurationError::invalid_value(
                "pagination.default_page_size",
                "0",
                "default page size must be greater than 0",
            ));
        }

        if self.max_page_size == 0 {
            return Err(ConfigurationError::invalid_value(
                "pagination.max_page_size",
                "0",
                "max page size must be greater than 0",
            ));
        }

        if self.default_page_size > self.max_page_size {
            return Err(ConfigurationError::invalid_value(
                "pagination.default_page_size",
                self.default_page_size.to_string(),
                format!(
                    "default page size must not exceed max page size ({})",
                    self.max_page_size
                ),
            ));
        }

        Ok(())
    }
}

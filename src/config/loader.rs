//! Configuration Loader
//!
//! Environment-aware loading: optional `config/folio.toml`, an optional
//! `config/folio.<environment>.toml` overlay, then `FOLIO__SECTION__KEY`
//! environment variables.

use super::error::ConfigResult;
use super::FolioConfig;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct ConfigLoader;

impl ConfigLoader {
    pub const ENV_PREFIX: &'static str = "FOLIO";

    /// Load from the default config directory with environment auto-detection
    pub fn load() -> ConfigResult<FolioConfig> {
        Self::load_from(None)
    }

    /// Load from an explicit file, which must then exist
    pub fn load_from(path: Option<&Path>) -> ConfigResult<FolioConfig> {
        Self::load_with_environment(path, Self::environment_source())
    }

    /// Load with a caller-supplied environment source
    ///
    /// Tests pass `Environment::source` maps here instead of mutating process env.
    pub fn load_with_environment(
        path: Option<&Path>,
        environment: Environment,
    ) -> ConfigResult<FolioConfig> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                builder = builder.add_source(File::from(path).required(true));
            }
            None => {
                let app_env = detect_environment();
                let directory = PathBuf::from("config");
                debug!(
                    "Loading configuration for environment '{}' from directory: {}",
                    app_env,
                    directory.display()
                );
                builder = builder
                    .add_source(File::from(directory.join("folio.toml")).required(false))
                    .add_source(
                        File::from(directory.join(format!("folio.{app_env}.toml")))
                            .required(false),
                    );
            }
        }

        let config: FolioConfig = builder
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        config.validate()?;

        info!(
            default_page_size = config.pagination.default_page_size,
            max_page_size = config.pagination.max_page_size,
            max_connections = config.database.max_connections,
            "Configuration loaded successfully"
        );

        Ok(config)
    }

    /// `FOLIO__PAGINATION__MAX_PAGE_SIZE=50` style overrides
    pub fn environment_source() -> Environment {
        Environment::with_prefix(Self::ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }
}

/// Current environment from `FOLIO_ENV`, then `APP_ENV`, defaulting to development
pub fn detect_environment() -> String {
    env::var("FOLIO_ENV")
        .or_else(|_| env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

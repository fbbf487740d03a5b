//! # quiz-config
//!
//! Layered configuration loading for quizlint using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`QUIZLINT_*` prefix, `__` as separator)
//! 2. Project-level `.quizlint/config.toml`
//! 3. User-level `~/.config/quizlint/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `QUIZLINT_SITES__DEFAULT` -> `sites.default`,
//! `QUIZLINT_URLS__STATUS_SERVICE_URL` -> `urls.status_service_url`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use quiz_config::QuizConfig;
//!
//! let config = QuizConfig::load().expect("config");
//! println!("default site: {}", config.sites.default);
//! ```

mod error;
mod http;
mod sites;
mod urls;

pub use error::ConfigError;
pub use http::HttpConfig;
pub use sites::SitesConfig;
pub use urls::UrlsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".quizlint/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub sites: SitesConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub urls: UrlsConfig,
}

impl QuizConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("QUIZLINT_").split("__"))
    }

    /// Reject values that would stall or break the URL checker.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TooSmall`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let minimums: [(&'static str, u64); 3] = [
            ("http.concurrency", self.http.concurrency as u64),
            ("http.timeout_secs", self.http.timeout_secs),
            ("urls.batch_size", self.urls.batch_size as u64),
        ];
        for (field, found) in minimums {
            if found == 0 {
                return Err(ConfigError::TooSmall {
                    field,
                    min: 1,
                    found,
                });
            }
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("quizlint").join("config.toml"))
    }
}

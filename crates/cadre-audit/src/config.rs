//! Activity log configuration.
//!
//! Page sizes for audit queries. Configuration is loaded from environment
//! variables with defaults suitable for interactive listings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue {
        /// Configuration key.
        key: String,
        /// Error message.
        message: String,
    },
}

/// Activity log settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityLogConfig {
    /// Page size used when a query asks for zero entries.
    pub default_page_size: usize,

    /// Upper bound on any single page.
    pub max_page_size: usize,
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 50,
            max_page_size: 200,
        }
    }
}

impl ActivityLogConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CADRE_AUDIT_DEFAULT_PAGE_SIZE`: Page size when none is requested (default: 50)
    /// - `CADRE_AUDIT_MAX_PAGE_SIZE`: Largest page a query may return (default: 200)
    ///
    /// Unparsable values fall back to the defaults. The result is not
    /// validated; [`crate::ActivityLog::with_config`] rejects unusable sizes.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// raw value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let read = |key: &str, fallback: usize| {
            lookup(key)
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            default_page_size: read("CADRE_AUDIT_DEFAULT_PAGE_SIZE", default.default_page_size),
            max_page_size: read("CADRE_AUDIT_MAX_PAGE_SIZE", default.max_page_size),
        }
    }

    /// Check that both page sizes are usable together.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CADRE_AUDIT_MAX_PAGE_SIZE".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CADRE_AUDIT_DEFAULT_PAGE_SIZE".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::InvalidValue {
                key: "CADRE_AUDIT_DEFAULT_PAGE_SIZE".to_string(),
                message: format!("must not exceed max page size {}", self.max_page_size),
            });
        }
        Ok(())
    }

    /// Effective page size for a requested limit.
    ///
    /// Zero selects the default page size; anything else is capped at the
    /// maximum.
    pub fn page_size(&self, requested: usize) -> usize {
        if requested == 0 {
            self.default_page_size.min(self.max_page_size)
        } else {
            requested.min(self.max_page_size)
        }
    }
}

//! Service configuration with TOML file support.

use serde::{Deserialize, Serialize};
use tally_types::ChainParams;

use crate::ServiceError;

/// Configuration for a ledger service instance.
///
/// Can be loaded from a TOML file via [`ServiceConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Required leading hex-zero characters in every block hash.
    #[serde(default = "default_difficulty")]
    pub difficulty: u32,

    /// Optional cap on nonces tried per block. Unset means unbounded.
    #[serde(default)]
    pub max_seal_attempts: Option<u64>,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_difficulty() -> u32 {
    ChainParams::standard().difficulty
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl ServiceConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &str) -> Result<Self, ServiceError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ServiceError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ServiceError> {
        toml::from_str(s).map_err(|e| ServiceError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("ServiceConfig is always serializable to TOML")
    }

    /// The chain parameters this configuration selects.
    pub fn chain_params(&self) -> ChainParams {
        ChainParams {
            difficulty: self.difficulty,
            max_seal_attempts: self.max_seal_attempts,
        }
    }

    /// Config with a custom difficulty and defaults everywhere else.
    pub fn with_difficulty(difficulty: u32) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            difficulty: default_difficulty(),
            max_seal_attempts: None,
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

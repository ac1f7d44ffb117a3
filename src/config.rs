use crate::utils::constants::{LOOM_METADATA_URL, YARN_VERSIONS_URL};
use std::env;

/// Endpoints the lookups are made against. Both can be pointed at a
/// mirror through the environment (or a .env file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub yarn_versions_url: String,
    pub loom_metadata_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            yarn_versions_url: YARN_VERSIONS_URL.to_string(),
            loom_metadata_url: LOOM_METADATA_URL.to_string(),
        }
    }
}

impl Config {
    /// Reads `YARN_VERSIONS_URL` and `LOOM_METADATA_URL` falling back
    /// to the fabric defaults when unset or empty
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            yarn_versions_url: env_or("YARN_VERSIONS_URL", defaults.yarn_versions_url),
            loom_metadata_url: env_or("LOOM_METADATA_URL", defaults.loom_metadata_url),
        }
    }
}

fn env_or(key: &str, default: String) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default,
    }
}

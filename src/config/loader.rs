use super::error::ConfigError;
use crate::constants::{
    CONFIG_PATH, DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_API_PATH, DEFAULT_GEMINI_ENDPOINT,
    DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS, ENV_PATH,
};
use dotenvy::from_filename;
use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::{debug, warn};

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    endpoint: Option<String>,
    api_path: Option<String>,
    model: Option<String>,
    api_key_env: Option<String>,
    timeout_secs: Option<u64>,
}

/// Upstream relay configuration, fixed at process start
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream API base URL
    pub endpoint: String,
    /// Path between the endpoint and the model name
    pub api_path: String,
    /// Model identifier used in the generateContent URL
    pub model: String,
    /// Name of the environment variable holding the upstream API key
    pub api_key_env: String,
    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

impl AppConfig {
    /// Load configuration from a file path, falling back to defaults when
    /// the file does not exist so the relay can run from environment alone.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        ensure_env_loaded();
        let config_path = path.unwrap_or_else(|| Path::new(CONFIG_PATH));

        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                debug!(path = %config_path.display(), "No configuration file, using defaults");
                return Self::from_raw(RawConfig::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: config_path.to_path_buf(),
                    source,
                });
            }
        };

        debug!(path = %config_path.display(), "Reading relay configuration file");
        let parsed: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })?;

        Self::from_raw(parsed)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let timeout_secs = raw.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout);
        }

        Ok(Self {
            endpoint: raw
                .endpoint
                .unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.to_string()),
            api_path: raw
                .api_path
                .unwrap_or_else(|| DEFAULT_GEMINI_API_PATH.to_string()),
            model: raw.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key_env: raw
                .api_key_env
                .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
            timeout_secs,
        })
    }

    /// Resolve the upstream API key from the configured environment variable.
    ///
    /// Absence is tolerated here; the server reports it per request as a
    /// configuration error without leaking the variable name to callers.
    pub fn resolve_api_key(&self) -> Option<String> {
        match env::var(&self.api_key_env) {
            Ok(value) if !value.trim().is_empty() => Some(value),
            Ok(_) => {
                warn!(
                    env_var = self.api_key_env.as_str(),
                    "API key environment variable is set but empty"
                );
                None
            }
            Err(_) => {
                warn!(
                    env_var = self.api_key_env.as_str(),
                    "API key environment variable is not set"
                );
                None
            }
        }
    }
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

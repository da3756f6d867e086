//! Application constants
//!
//! Single source of truth for paths and upstream defaults.

/// Default configuration file path
pub const CONFIG_PATH: &str = "config/promptforge.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable holding the upstream API key, unless overridden
/// by `api_key_env` in the configuration file
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default Gemini endpoint
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

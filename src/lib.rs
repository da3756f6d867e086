//! PromptForge relay
//!
//! A stateless REST relay: frames a user's text with a fixed instruction
//! template selected by a tool identifier, forwards the composed prompt to
//! the Gemini generateContent API, and relays the JSON response (or a
//! structured error) back to the caller.

pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use cli::Cli;
pub use config::AppConfig;
pub use infrastructure::{model, server};

use infrastructure::model::GeminiClient;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    init_tracing();
    info!("Starting promptforge");
    debug!(config = ?cli.config, addr = %cli.addr, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path");
    }
    debug!(
        endpoint = config.endpoint.as_str(),
        model = config.model.as_str(),
        timeout_secs = config.timeout_secs,
        "Upstream configuration resolved"
    );

    let provider = Arc::new(GeminiClient::from_config(&config)?);

    info!(addr = %cli.addr, "Starting REST server");
    server::serve(provider, cli.addr).await?;
    info!("Server execution finished");
    Ok(())
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

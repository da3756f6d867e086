//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::traits::ModelProvider;
use super::types::ModelError;
use crate::config::AppConfig;

/// HTTP client for the Gemini generateContent endpoint
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    endpoint: String,
    api_path: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build a client from configuration, resolving the API key from the
    /// configured environment variable.
    pub fn from_config(config: &AppConfig) -> Result<Self, reqwest::Error> {
        Self::with_api_key(config, config.resolve_api_key())
    }

    /// Build a client with an explicitly injected API key, bypassing the
    /// process environment.
    pub fn with_api_key(
        config: &AppConfig,
        api_key: Option<String>,
    ) -> Result<Self, reqwest::Error> {
        if api_key.is_none() {
            warn!("Starting without an upstream API key; generation requests will fail");
        }
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_path: config.api_path.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn build_model_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{}:generateContent", self.api_path, self.model)
    }

    fn require_api_key(&self) -> Result<&str, ModelError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ModelError::MissingApiKey)
    }
}

#[async_trait]
impl ModelProvider for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Value, ModelError> {
        let api_key = self.require_api_key()?;
        let url = format!("{}?key={}", self.build_model_url(), api_key);

        let payload = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });

        info!(
            model = self.model.as_str(),
            prompt_len = prompt.len(),
            "Sending generation request to Gemini"
        );

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(ModelError::network)?;

        let status = response.status();
        let body = response.text().await.map_err(ModelError::network)?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(Value::as_str)
                        .map(str::to_string)
                })
                .unwrap_or_else(|| {
                    format!("upstream request failed with status {}", status.as_u16())
                });
            return Err(ModelError::upstream(status.as_u16(), message));
        }

        debug!("Received response from Gemini");
        serde_json::from_str(&body).map_err(|source| ModelError::invalid_response(source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            endpoint: "https://generativelanguage.googleapis.com/".to_string(),
            api_path: "v1beta/models".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key_env: "PROMPTFORGE_UNUSED".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn model_url_joins_endpoint_path_and_model() {
        let client =
            GeminiClient::with_api_key(&config(), Some("k".to_string())).expect("build client");
        assert_eq!(
            client.build_model_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent"
        );
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let client =
            GeminiClient::with_api_key(&config(), Some("   ".to_string())).expect("build client");
        assert!(matches!(
            client.require_api_key(),
            Err(ModelError::MissingApiKey)
        ));
    }
}

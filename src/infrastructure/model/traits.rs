//! Model traits

use super::types::ModelError;
use async_trait::async_trait;
use serde_json::Value;

/// Seam between the relay handler and the upstream generation API.
///
/// The response body is opaque: whatever JSON the upstream returns is
/// relayed unchanged, so implementations return a raw `Value`.
#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Submit a composed prompt as a single-turn generation request
    async fn generate(&self, prompt: &str) -> Result<Value, ModelError>;
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound body for the generate endpoint.
///
/// Fields are optional at the serde level so the handler can report which
/// one is missing instead of failing with a generic deserialization error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Raw user text to frame with the selected tool's instruction
    pub user_input: Option<String>,
    /// Tool identifier selecting the instruction template
    pub active_tool: Option<String>,
}

/// Error body relayed to callers: `{ "error": { "message": ... } }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                message: message.into(),
            },
        }
    }
}

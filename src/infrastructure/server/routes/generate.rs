use super::super::dto::{ErrorResponse, GenerateRequest};
use super::super::error::ApiError;
use super::super::state::ServerState;
use crate::domain::templates;
use crate::infrastructure::model::ModelProvider;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Upstream response body relayed unchanged"),
        (status = 400, description = "Missing field or unknown tool", body = ErrorResponse),
        (status = 500, description = "Server misconfiguration or internal failure", body = ErrorResponse),
        (status = 502, description = "Upstream API reported an error", body = ErrorResponse)
    )
)]
pub(crate) async fn generate_handler<P: ModelProvider>(
    State(state): State<Arc<ServerState<P>>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        error!(%rejection, "Rejecting request with unreadable body");
        ApiError::InvalidBody(rejection.body_text())
    })?;

    let Some(tool) = payload.active_tool.as_deref() else {
        error!("Rejecting request without 'activeTool'");
        return Err(ApiError::MissingField("activeTool"));
    };
    let Some(user_input) = payload.user_input.as_deref() else {
        error!(tool, "Rejecting request without 'userInput'");
        return Err(ApiError::MissingField("userInput"));
    };

    info!(tool, "Received generate request");

    if user_input.trim().is_empty() {
        error!(tool, "Rejecting request with blank 'userInput'");
        return Err(ApiError::EmptyField("userInput"));
    }

    let Some(instruction) = templates::instruction_for(tool) else {
        error!(tool, "Rejecting request for unmapped tool");
        return Err(ApiError::UnknownTool(tool.to_string()));
    };

    let prompt = templates::compose_prompt(instruction, user_input);
    debug!(tool, prompt_len = prompt.len(), "Issuing upstream call");

    match state.provider().generate(&prompt).await {
        Ok(body) => {
            info!(tool, "Upstream call completed");
            Ok(Json(body))
        }
        Err(err) => {
            error!(tool, %err, "Upstream call failed");
            Err(ApiError::from(err))
        }
    }
}

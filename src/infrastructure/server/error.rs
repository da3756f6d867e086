use super::dto::ErrorResponse;
use crate::infrastructure::model::ModelError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to bind HTTP listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Request-level failures, each terminating in exactly one structured
/// JSON response.
#[derive(Debug)]
pub enum ApiError {
    /// A required field is absent from the request body
    MissingField(&'static str),
    /// A required field is present but blank
    EmptyField(&'static str),
    /// The tool identifier has no template entry
    UnknownTool(String),
    /// The request body could not be read as JSON
    InvalidBody(String),
    /// The upstream credential is not configured; callers get a generic
    /// message, operators get the detail in the server log
    Configuration,
    /// The upstream API reported an error; its message is relayed
    Upstream(String),
    /// Any other failure during composition or network I/O
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_)
            | ApiError::EmptyField(_)
            | ApiError::UnknownTool(_)
            | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Configuration | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MissingField(field) => format!("missing required field '{field}'"),
            ApiError::EmptyField(field) => format!("field '{field}' cannot be empty"),
            ApiError::UnknownTool(tool) => format!("unknown tool '{tool}'"),
            ApiError::InvalidBody(detail) => format!("invalid request body: {detail}"),
            ApiError::Configuration => {
                "An internal server error occurred: the server is not configured for upstream access"
                    .to_string()
            }
            ApiError::Upstream(message) => message.clone(),
            ApiError::Internal(detail) => format!("An internal server error occurred: {detail}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorResponse::new(self.message()))).into_response()
    }
}

impl From<ModelError> for ApiError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingApiKey => ApiError::Configuration,
            ModelError::Upstream { message, .. } => ApiError::Upstream(message),
            ModelError::Network { source } => ApiError::Internal(source.to_string()),
            ModelError::InvalidResponse { reason } => ApiError::Internal(reason),
        }
    }
}

//! REST server for the prompt relay

pub mod dto;
pub mod error;
pub mod routes;
mod state;

pub use error::{ApiError, ServerError};

use crate::infrastructure::model::ModelProvider;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::{Json, Router};
use routes::generate::generate_handler;
use state::ServerState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::generate::generate_handler),
    components(schemas(dto::GenerateRequest, dto::ErrorResponse, dto::ErrorDetail)),
    tags(
        (name = "generate", description = "Prompt relay to the upstream generation API")
    )
)]
struct ApiDoc;

/// Build the application router around a model provider.
///
/// Split from [`serve`] so tests can drive the router in-process with a
/// stubbed provider.
pub fn router<P>(provider: Arc<P>) -> Router
where
    P: ModelProvider + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin([
            HeaderValue::from_static("http://localhost:5173"),
            HeaderValue::from_static("http://127.0.0.1:5173"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let state = Arc::new(ServerState::new(provider));
    Router::new()
        .route("/api/generate", post(generate_handler::<P>))
        .route("/api-doc/openapi.json", get(openapi_handler))
        .layer(cors)
        .with_state(state)
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn serve<P>(provider: Arc<P>, addr: SocketAddr) -> Result<(), ServerError>
where
    P: ModelProvider + 'static,
{
    info!(%addr, "Binding REST server");
    let app = router(provider);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!(%addr, "REST server ready to accept connections");

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}

mod http;

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tokio_util::sync::CancellationToken;

use typecast_engine::Converter;

pub use http::{ConvertRequest, ConvertResponse, ServerInfo, TypesResponse};

#[derive(Debug, thiserror::Error)]
pub enum ApiServerError {
    #[error("bind api {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("axum serve: {0}")]
    Serve(#[source] std::io::Error),
}

#[derive(Clone)]
struct AppState {
    converter: Converter,
}

/// HTTP routes over the conversion engine.
///
/// - `GET  /`        server info
/// - `GET  /health`  liveness
/// - `GET  /types`   supported descriptors
/// - `POST /convert` `{value, type, delimiter?}` → `{success, result?, error?}`
///
/// Every response carries permissive CORS headers; `OPTIONS` answers 204.
pub fn router(converter: Converter) -> Router {
    Router::new()
        .route("/", get(http::handle_info))
        .route("/health", get(http::handle_health))
        .route("/types", get(http::handle_types))
        .route("/convert", post(http::handle_convert))
        .layer(middleware::from_fn(http::cors))
        .with_state(AppState { converter })
}

/// Serve `router(converter)` on `host:port` until `shutdown` is cancelled.
pub async fn run(
    host: &str,
    port: u16,
    converter: Converter,
    shutdown: CancellationToken,
) -> Result<(), ApiServerError> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ApiServerError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, "api server listening");

    axum::serve(listener, router(converter))
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(ApiServerError::Serve)?;

    tracing::info!("api server stopped");
    Ok(())
}

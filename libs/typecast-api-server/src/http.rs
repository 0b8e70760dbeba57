use axum::extract::rejection::JsonRejection;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use typecast_engine::Value;

use super::AppState;

const SERVICE_NAME: &str = "typecast";

// ═══════════════════════════════════════════════════════════════
//  Wire types
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub value: String,
    #[serde(rename = "type")]
    pub descriptor: String,
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl ConvertRequest {
    /// The delimiter path is taken only for a non-empty delimiter and a
    /// slice descriptor.
    fn delimiter(&self) -> Option<&str> {
        match self.delimiter.as_deref() {
            Some(d) if !d.is_empty() && self.descriptor.len() > 2 && self.descriptor.starts_with("[]") => Some(d),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    fn ok(result: Value) -> Self {
        Self { success: true, result: Some(result), error: None }
    }

    fn failed(error: String) -> Self {
        Self { success: false, result: None, error: Some(error) }
    }
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub success: bool,
    pub types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: Vec<&'static str>,
}

// ═══════════════════════════════════════════════════════════════
//  GET / , GET /health , GET /types
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_info() -> impl IntoResponse {
    Json(ServerInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        description: "String to typed value converter API",
        endpoints: vec!["GET  /health", "GET  /types", "POST /convert"],
    })
}

pub(crate) async fn handle_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": SERVICE_NAME,
    }))
}

pub(crate) async fn handle_types(State(state): State<AppState>) -> impl IntoResponse {
    Json(TypesResponse {
        success: true,
        types: state.converter.supported_types(),
    })
}

// ═══════════════════════════════════════════════════════════════
//  POST /convert
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_convert(
    State(state): State<AppState>,
    body: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "invalid convert request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ConvertResponse::failed(format!("Invalid request: {}", rejection.body_text()))),
            )
                .into_response();
        }
    };

    let result = match req.delimiter() {
        Some(delimiter) => state
            .converter
            .convert_with_delimiter(&req.value, &req.descriptor, delimiter),
        None => state.converter.convert(&req.value, &req.descriptor),
    };

    match result {
        Ok(value) => {
            tracing::debug!(descriptor = %req.descriptor, "converted");
            (StatusCode::OK, Json(ConvertResponse::ok(value))).into_response()
        }
        Err(e) => {
            tracing::warn!(descriptor = %req.descriptor, kind = ?e.kind(), error = %e, "conversion rejected");
            (StatusCode::BAD_REQUEST, Json(ConvertResponse::failed(e.to_string()))).into_response()
        }
    }
}

// ═══════════════════════════════════════════════════════════════
//  CORS
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        allow_any_origin(response.headers_mut());
        return response;
    }
    let mut response = next.run(request).await;
    allow_any_origin(response.headers_mut());
    response
}

fn allow_any_origin(headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
}

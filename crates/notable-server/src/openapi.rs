use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use utoipa::openapi::OpenApi;

pub fn yaml_route(spec: Arc<OpenApi>) -> Router {
    Router::new().route(
        "/openapi.yaml",
        get(move || {
            let spec = spec.clone();
            async move { openapi_yaml(spec).await }
        }),
    )
}

async fn openapi_yaml(spec: Arc<OpenApi>) -> impl IntoResponse {
    match spec.to_yaml() {
        Ok(yaml) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/yaml")], yaml).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to serialize YAML: {e}"),
        )
            .into_response(),
    }
}

use crate::state::AppState;
use crate::{api, auth, home, logging, openapi};
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "notable API",
        description = "notable 笔记服务 REST API",
    ),
    tags(
        (name = "Health", description = "服务健康检查"),
        (name = "Notes", description = "笔记增删改查"),
        (name = "Auth", description = "用户注册与登录")
    )
)]
struct ApiDoc;

pub fn build_http_app(state: AppState) -> Router {
    let (public_router, public_spec) = api::public_routes().split_for_parts();
    let (note_router, note_spec) = api::notes::note_routes().split_for_parts();
    let (auth_router, auth_spec) = auth::auth_routes().split_for_parts();

    let mut merged_spec = ApiDoc::openapi();
    merged_spec.merge(public_spec);
    merged_spec.merge(note_spec);
    merged_spec.merge(auth_spec);
    let spec = Arc::new(merged_spec.clone());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    public_router
        .merge(note_router)
        .merge(auth_router)
        .route("/", get(home::home))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", merged_spec))
        .merge(openapi::yaml_route(spec))
        .layer(cors)
        .layer(middleware::from_fn(logging::request_logging))
}

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod section_titles;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health, admin section titles, lookup and docs
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/section-titles/lookup", get(section_titles::lookup));

    let admin_routes = Router::new()
        .route(
            "/admin/section-titles",
            get(section_titles::list).post(section_titles::submit),
        )
        .route("/admin/section-titles/:section_id", get(section_titles::render));

    let docs = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    public
        .merge(admin_routes)
        .with_state(state)
        .merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}


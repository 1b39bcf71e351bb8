use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    Json,
};
use models::form::SubmittedSections;
use models::Section;
use serde::Deserialize;
use service::sections::{SectionForm, SubmitResult};
use tracing::info;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub path: String,
}

#[utoipa::path(get, path = "/admin/section-titles", tag = "section-titles", responses((status = 200, description = "All section titles in order"), (status = 500, description = "Storage failure")))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Section>>, ApiError> {
    let sections = state.sections.list().await?;
    info!(count = sections.len(), "list section titles");
    Ok(Json(sections))
}

#[utoipa::path(get, path = "/admin/section-titles/{section_id}", tag = "section-titles", params(("section_id" = String, Path, description = "Position of the section, or `_new`")), responses((status = 200, description = "Form descriptor; unknown ids yield a blank row")))]
pub async fn render(
    State(state): State<ServerState>,
    Path(section_id): Path<String>,
) -> Result<Json<SectionForm>, ApiError> {
    Ok(Json(state.sections.render(&section_id).await?))
}

#[utoipa::path(post, path = "/admin/section-titles", tag = "section-titles", request_body = crate::openapi::SubmitRequestDoc, responses((status = 200, description = "Saved"), (status = 400, description = "Bad Request"), (status = 500, description = "Storage failure")))]
pub async fn submit(
    State(state): State<ServerState>,
    payload: Result<Json<SubmittedSections>, JsonRejection>,
) -> Result<Json<SubmitResult>, ApiError> {
    let Json(values) = payload?;
    let result = state.sections.submit(values).await?;
    info!(id = result.section.id, outcome = ?result.outcome, "section title submitted");
    Ok(Json(result))
}

#[utoipa::path(get, path = "/section-titles/lookup", tag = "section-titles", params(("path" = String, Query, description = "Request path to resolve")), responses((status = 200, description = "Matching section"), (status = 404, description = "No section applies")))]
pub async fn lookup(
    State(state): State<ServerState>,
    Query(q): Query<LookupQuery>,
) -> Result<Json<Section>, ApiError> {
    match state.sections.section_for_path(&q.path).await? {
        Some(section) => Ok(Json(section)),
        None => Err(ApiError::NotFound(format!("no section title applies to {}", q.path))),
    }
}

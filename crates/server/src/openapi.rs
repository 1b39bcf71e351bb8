use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct SectionDoc {
    pub id: u32,
    pub title: String,
    pub link: bool,
    pub link_path: String,
    /// One path pattern per line; `*` wildcard, `<front>` for the front page.
    pub paths: String,
}

/// The single edited row; `id` is empty for a new section.
#[derive(Serialize, ToSchema)]
pub struct SubmittedSectionDoc {
    pub id: Option<String>,
    pub title: String,
    pub link: bool,
    pub link_path: String,
    pub paths: String,
}

#[derive(Serialize, ToSchema)]
pub struct SubmittedRowsDoc {
    #[serde(rename = "_new")]
    pub new: SubmittedSectionDoc,
}

#[derive(ToSchema)]
pub struct SubmitRequestDoc {
    pub sections: SubmittedRowsDoc,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::section_titles::list,
        crate::routes::section_titles::render,
        crate::routes::section_titles::submit,
        crate::routes::section_titles::lookup,
    ),
    components(
        schemas(
            HealthResponse,
            SectionDoc,
            SubmittedSectionDoc,
            SubmittedRowsDoc,
            SubmitRequestDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "section-titles")
    )
)]
pub struct ApiDoc;

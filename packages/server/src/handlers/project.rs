use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{NewProject, Project};
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::project::*;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List showcase projects",
    description = "Returns projects, most recently created first. `type` narrows to `professional` or `personal`; `status` narrows to `completed`, `working` or `failed`; `search` matches title, description and technologies case-insensitively.",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "Projects", body = Vec<Project>),
        (status = 400, description = "Unknown type or status (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<Project>>, AppError> {
    let kind = query.parsed_kind()?;
    let status = query.parsed_status()?;
    let search = query.search.as_deref().unwrap_or_default();

    let projects = match kind {
        Some(kind) => state.store.projects_by_type(kind),
        None => state.store.list_projects(),
    };
    let projects: Vec<Project> = projects
        .into_iter()
        .filter(|p| status.is_none_or(|s| p.status == s))
        .filter(|p| p.matches_search(search))
        .collect();

    Ok(Json(projects))
}

#[utoipa::path(
    get,
    path = "/{slug}",
    tag = "Projects",
    operation_id = "getProject",
    summary = "Get a project by slug",
    description = "Returns the full project write-up, including its Markdown content. Slug matching is exact and case-sensitive.",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Project", body = Project),
        (status = 404, description = "Project not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, AppError> {
    state
        .store
        .project_by_slug(&slug)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Project not found".into()))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Projects",
    operation_id = "createProject",
    summary = "Add a showcase project",
    description = "Stores a new project. The id and `createdAt` are assigned by the server. Omitted links are stored as null.",
    request_body = NewProject,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Slug already in use (CONFLICT)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(slug = %payload.slug))]
pub async fn create_project(
    State(state): State<AppState>,
    AppJson(mut payload): AppJson<NewProject>,
) -> Result<impl IntoResponse, AppError> {
    validate_new_project(&payload)?;
    payload.title = payload.title.trim().to_string();

    let project = state.store.create_project(payload)?;
    tracing::info!(id = %project.id, kind = %project.kind, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}

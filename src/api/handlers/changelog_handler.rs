//! Changelog handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, patch},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::{ValidatedJson, ValidatedPath};
use crate::api::AppState;
use crate::config::ROUTE_CHANGELOGS;
use crate::domain::{ChangelogChanges, ChangelogPartialResponse, ChangelogResponse, NewChangelog};
use crate::errors::{AppResult, ResultExt};
use crate::types::{Accepted, Created, Deleted};

/// Changelog creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChangelogRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    #[schema(example = "Certificates can now be downloaded as PDF")]
    pub content: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    #[schema(example = "feature")]
    pub change_type: String,
}

/// Changelog update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChangelogRequest {
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Type is required"))]
    pub change_type: String,
    #[serde(default)]
    pub was_read: bool,
}

/// Create changelog routes
pub fn changelog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_changelogs).post(create_changelog))
        .route(
            "/:id",
            get(get_changelog)
                .put(update_changelog)
                .delete(delete_changelog),
        )
        .route("/:id/read", patch(mark_changelog_read))
}

/// List changelog entries, newest first
#[utoipa::path(
    get,
    path = "/changelogs",
    tag = "Changelogs",
    responses((status = 200, description = "All changelog entries", body = Vec<ChangelogResponse>))
)]
pub async fn list_changelogs(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChangelogResponse>>> {
    let changelogs = state.changelog_service.list_changelogs().await?;
    Ok(Json(changelogs.into_iter().map(ChangelogResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/changelogs/{id}",
    tag = "Changelogs",
    params(("id" = Uuid, Path, description = "Changelog ID")),
    responses(
        (status = 200, description = "Changelog entry", body = ChangelogResponse),
        (status = 404, description = "Changelog not found")
    )
)]
pub async fn get_changelog(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<ChangelogResponse>> {
    let changelog = state.changelog_service.get_changelog(id).await?;
    Ok(Json(ChangelogResponse::from(changelog)))
}

#[utoipa::path(
    post,
    path = "/changelogs",
    tag = "Changelogs",
    request_body = CreateChangelogRequest,
    responses(
        (status = 201, description = "Changelog posted", body = ChangelogPartialResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_changelog(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateChangelogRequest>,
) -> AppResult<Created<ChangelogPartialResponse>> {
    let changelog = state
        .changelog_service
        .create_changelog(NewChangelog {
            content: payload.content,
            change_type: payload.change_type,
        })
        .await?;

    Ok(Created::at(
        ROUTE_CHANGELOGS,
        changelog.id,
        ChangelogPartialResponse::from(changelog),
    ))
}

#[utoipa::path(
    put,
    path = "/changelogs/{id}",
    tag = "Changelogs",
    params(("id" = Uuid, Path, description = "Changelog ID")),
    request_body = UpdateChangelogRequest,
    responses(
        (status = 202, description = "Changelog updated", body = ChangelogResponse),
        (status = 400, description = "Validation error or changelog does not exist")
    )
)]
pub async fn update_changelog(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateChangelogRequest>,
) -> AppResult<Accepted<ChangelogResponse>> {
    let changes = ChangelogChanges {
        content: payload.content,
        change_type: payload.change_type,
        was_read: payload.was_read,
    };

    let changelog = state
        .changelog_service
        .update_changelog(id, changes)
        .await
        .or_bad_request("Changelog")?;

    Ok(Accepted(ChangelogResponse::from(changelog)))
}

/// Flag a changelog entry as read
#[utoipa::path(
    patch,
    path = "/changelogs/{id}/read",
    tag = "Changelogs",
    params(("id" = Uuid, Path, description = "Changelog ID")),
    responses(
        (status = 200, description = "Changelog marked read", body = ChangelogResponse),
        (status = 400, description = "Changelog does not exist")
    )
)]
pub async fn mark_changelog_read(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Json<ChangelogResponse>> {
    let changelog = state
        .changelog_service
        .mark_read(id)
        .await
        .or_bad_request("Changelog")?;

    Ok(Json(ChangelogResponse::from(changelog)))
}

#[utoipa::path(
    delete,
    path = "/changelogs/{id}",
    tag = "Changelogs",
    params(("id" = Uuid, Path, description = "Changelog ID")),
    responses(
        (status = 202, description = "Changelog deleted"),
        (status = 400, description = "Changelog does not exist")
    )
)]
pub async fn delete_changelog(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> AppResult<Deleted> {
    state
        .changelog_service
        .delete_changelog(id)
        .await
        .or_bad_request("Changelog")?;

    Ok(Deleted)
}

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewTag, Tag};
use crate::storage::{SharedStorage, Storage};

use super::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTagRequest {
    /// Tag name (1-30 characters)
    #[validate(length(min = 1, max = 30))]
    pub name: String,
    /// URL slug (1-30 characters)
    #[validate(length(min = 1, max = 30))]
    pub slug: String,
    /// Display color tag, "gray" when omitted
    #[validate(length(min = 1, max = 20))]
    pub color: Option<String>,
}

impl From<CreateTagRequest> for NewTag {
    fn from(req: CreateTagRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
            color: req.color,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/tags",
    responses(
        (status = 200, description = "All tags", body = Vec<Tag>),
    ),
    tag = "tags"
)]
pub async fn list_tags(Extension(storage): Extension<SharedStorage>) -> AppResult<impl IntoResponse> {
    let tags = storage.read().tags();
    Ok(Json(tags))
}

#[utoipa::path(
    get,
    path = "/api/tags/{slug}",
    params(("slug" = String, Path, description = "Tag slug")),
    responses(
        (status = 200, description = "Tag details", body = Tag),
        (status = 404, description = "Tag not found", body = AppError),
    ),
    tag = "tags"
)]
pub async fn get_tag(
    Extension(storage): Extension<SharedStorage>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tag = storage
        .read()
        .tag_by_slug(&slug)
        .ok_or(AppError::NotFound("Tag"))?;
    Ok(Json(tag))
}

#[utoipa::path(
    post,
    path = "/api/tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = Tag),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Tag already exists", body = AppError),
    ),
    tag = "tags"
)]
pub async fn create_tag(
    Extension(storage): Extension<SharedStorage>,
    AppJson(payload): AppJson<CreateTagRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid tag data", e))?;

    let tag = storage.write().create_tag(payload.into())?;
    Ok((StatusCode::CREATED, Json(tag)))
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/tags/{tag_id}",
    params(
        ("id" = i32, Path, description = "Post ID"),
        ("tag_id" = i32, Path, description = "Tag ID"),
    ),
    responses(
        (status = 200, description = "Tag attached to post", body = serde_json::Value),
        (status = 404, description = "Post or tag not found", body = AppError),
    ),
    tag = "tags"
)]
pub async fn tag_post(
    Extension(storage): Extension<SharedStorage>,
    Path((post_id, tag_id)): Path<(i32, i32)>,
) -> AppResult<impl IntoResponse> {
    storage.write().tag_post(post_id, tag_id)?;
    Ok(Json(json!({ "success": true })))
}

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Comment, CommentWithAuthor, NewComment};
use crate::storage::{SharedStorage, Storage};

use super::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    /// Comment body (1-2000 characters)
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    pub post_id: i32,
    pub author_id: Option<i32>,
    /// Parent comment when replying in a thread
    pub parent_id: Option<i32>,
}

impl From<CreateCommentRequest> for NewComment {
    fn from(req: CreateCommentRequest) -> Self {
        Self {
            content: req.content,
            post_id: Some(req.post_id),
            author_id: req.author_id,
            parent_id: req.parent_id,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Comments on the post, oldest first", body = Vec<CommentWithAuthor>),
    ),
    tag = "comments"
)]
pub async fn list_comments(
    Extension(storage): Extension<SharedStorage>,
    Path(post_id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let comments = storage.read().comments_by_post(post_id);
    Ok(Json(comments))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "comments"
)]
pub async fn create_comment(
    Extension(storage): Extension<SharedStorage>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid comment data", e))?;

    let comment = storage.write().create_comment(payload.into());
    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 200, description = "Comment deleted", body = serde_json::Value),
        (status = 404, description = "Comment not found", body = AppError),
    ),
    tag = "comments"
)]
pub async fn delete_comment(
    Extension(storage): Extension<SharedStorage>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    if !storage.write().delete_comment(id) {
        return Err(AppError::NotFound("Comment"));
    }
    Ok(Json(json!({ "success": true })))
}

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Contributor, NewUser, User, UserPatch};
use crate::storage::{SharedStorage, Storage};

use super::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Username (3-30 characters)
    #[validate(length(min = 3, max = 30))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// Avatar initials or image reference
    #[validate(length(max = 200))]
    pub avatar: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
    /// Display title, e.g. "Energy Policy Researcher"
    #[validate(length(max = 100))]
    pub title: Option<String>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            avatar: req.avatar,
            bio: req.bio,
            title: req.title,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 30))]
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 200))]
    pub avatar: Option<String>,
    #[validate(length(max = 500))]
    pub bio: Option<String>,
    #[validate(length(max = 100))]
    pub title: Option<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            avatar: req.avatar,
            bio: req.bio,
            title: req.title,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TopContributorsQuery {
    /// Number of contributors to return (default 10)
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/users/top-contributors",
    params(("limit" = Option<usize>, Query, description = "Number of contributors (default 10)")),
    responses(
        (status = 200, description = "Users ranked by authored-post count", body = Vec<Contributor>),
    ),
    tag = "users"
)]
pub async fn top_contributors(
    Extension(storage): Extension<SharedStorage>,
    Query(params): Query<TopContributorsQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(10);
    let contributors = storage.read().top_contributors(limit);
    Ok(Json(contributors))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "User profile", body = User),
        (status = 404, description = "User not found", body = AppError),
    ),
    tag = "users"
)]
pub async fn get_user(
    Extension(storage): Extension<SharedStorage>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = storage
        .read()
        .user_by_username(&username)
        .ok_or(AppError::NotFound("User"))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Username or email already taken", body = AppError),
    ),
    tag = "users"
)]
pub async fn create_user(
    Extension(storage): Extension<SharedStorage>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid user data", e))?;

    let user = storage.write().create_user(payload.into())?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "User not found", body = AppError),
        (status = 409, description = "Username or email already taken", body = AppError),
    ),
    tag = "users"
)]
pub async fn update_user(
    Extension(storage): Extension<SharedStorage>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdateUserRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid user data", e))?;

    let user = storage.write().update_user(id, payload.into())?;
    Ok(Json(user))
}

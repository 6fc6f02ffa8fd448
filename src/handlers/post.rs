use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{NewPost, Post, PostPatch, PostWithDetails};
use crate::storage::{PostFilter, SharedStorage, Storage};

use super::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    /// Post title (1-200 characters)
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    /// Post body
    #[validate(length(min = 1))]
    pub content: String,
    /// Short summary shown in listings (1-500 characters)
    #[validate(length(min = 1, max = 500))]
    pub excerpt: String,
    /// Cover image URL
    #[validate(url)]
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    /// Defaults to false
    pub featured: Option<bool>,
    /// Defaults to true
    pub published: Option<bool>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(req: CreatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            cover_image: req.cover_image,
            category_id: req.category_id,
            author_id: req.author_id,
            featured: req.featured.unwrap_or(false),
            published: req.published.unwrap_or(true),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub content: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub excerpt: Option<String>,
    #[validate(url)]
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

impl From<UpdatePostRequest> for PostPatch {
    fn from(req: UpdatePostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            cover_image: req.cover_image,
            category_id: req.category_id,
            author_id: req.author_id,
            featured: req.featured,
            published: req.published,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostListQuery {
    /// Filter by category ID
    pub category: Option<i32>,
    /// Case-insensitive text search over title, content and excerpt
    pub search: Option<String>,
    /// Filter by the featured flag
    pub featured: Option<bool>,
    /// Maximum number of posts to return
    pub limit: Option<usize>,
    /// Number of posts to skip
    pub offset: Option<usize>,
}

impl From<PostListQuery> for PostFilter {
    fn from(params: PostListQuery) -> Self {
        Self {
            category_id: params.category,
            search: params.search,
            featured: params.featured,
            limit: params.limit,
            offset: params.offset,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(
        ("category" = Option<i32>, Query, description = "Filter by category ID"),
        ("search" = Option<String>, Query, description = "Case-insensitive text search"),
        ("featured" = Option<bool>, Query, description = "Filter by featured flag"),
        ("limit" = Option<usize>, Query, description = "Maximum number of posts"),
        ("offset" = Option<usize>, Query, description = "Number of posts to skip"),
    ),
    responses(
        (status = 200, description = "Published posts, newest first", body = Vec<PostWithDetails>),
    ),
    tag = "posts"
)]
pub async fn list_posts(
    Extension(storage): Extension<SharedStorage>,
    Query(params): Query<PostListQuery>,
) -> AppResult<impl IntoResponse> {
    let posts = storage.read().posts(&params.into());
    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post details", body = PostWithDetails),
        (status = 404, description = "Post not found", body = AppError),
    ),
    tag = "posts"
)]
pub async fn get_post(
    Extension(storage): Extension<SharedStorage>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let post = storage
        .read()
        .post_by_slug(&slug)
        .ok_or(AppError::NotFound("Post"))?;

    // the response carries the count from before this view
    storage.write().increment_post_views(post.post.id);

    Ok(Json(post))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 400, description = "Validation error", body = AppError),
    ),
    tag = "posts"
)]
pub async fn create_post(
    Extension(storage): Extension<SharedStorage>,
    AppJson(payload): AppJson<CreatePostRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid post data", e))?;

    let post = storage.write().create_post(payload.into());
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdatePostRequest,
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "Validation error", body = AppError),
        (status = 404, description = "Post not found", body = AppError),
    ),
    tag = "posts"
)]
pub async fn update_post(
    Extension(storage): Extension<SharedStorage>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<UpdatePostRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid post data", e))?;

    let post = storage.write().update_post(id, payload.into())?;
    Ok(Json(post))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post deleted", body = serde_json::Value),
        (status = 404, description = "Post not found", body = AppError),
    ),
    tag = "posts"
)]
pub async fn delete_post(
    Extension(storage): Extension<SharedStorage>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    if !storage.write().delete_post(id) {
        return Err(AppError::NotFound("Post"));
    }
    Ok(Json(json!({ "success": true })))
}

#[utoipa::path(
    post,
    path = "/api/posts/{id}/like",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Like recorded", body = serde_json::Value),
    ),
    tag = "posts"
)]
pub async fn like_post(
    Extension(storage): Extension<SharedStorage>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    storage.write().increment_post_likes(id);
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchQuery {
    /// Search text
    pub q: Option<String>,
    /// Filter by category ID
    pub category: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(
        ("q" = String, Query, description = "Search text"),
        ("category" = Option<i32>, Query, description = "Filter by category ID"),
    ),
    responses(
        (status = 200, description = "Matching posts", body = Vec<PostWithDetails>),
        (status = 400, description = "Missing search query", body = AppError),
    ),
    tag = "posts"
)]
pub async fn search_posts(
    Extension(storage): Extension<SharedStorage>,
    Query(params): Query<SearchQuery>,
) -> AppResult<impl IntoResponse> {
    let q = params.q.unwrap_or_default();
    if q.trim().is_empty() {
        return Err(AppError::BadRequest("Search query is required".to_string()));
    }

    let filter = PostFilter {
        search: Some(q),
        category_id: params.category,
        ..Default::default()
    };
    Ok(Json(storage.read().posts(&filter)))
}

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Category, NewCategory};
use crate::storage::{SharedStorage, Storage};

use super::AppJson;

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    /// Category name (1-50 characters)
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    /// URL slug (1-50 characters)
    #[validate(length(min = 1, max = 50))]
    pub slug: String,
    /// Display color tag
    #[validate(length(min = 1, max = 20))]
    pub color: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
            color: req.color,
            description: req.description,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>),
    ),
    tag = "categories"
)]
pub async fn list_categories(
    Extension(storage): Extension<SharedStorage>,
) -> AppResult<impl IntoResponse> {
    let categories = storage.read().categories();
    Ok(Json(categories))
}

#[utoipa::path(
    get,
    path = "/api/categories/{slug}",
    params(("slug" = String, Path, description = "Category slug")),
    responses(
        (status = 200, description = "Category details", body = Category),
        (status = 404, description = "Category not found", body = AppError),
    ),
    tag = "categories"
)]
pub async fn get_category(
    Extension(storage): Extension<SharedStorage>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = storage
        .read()
        .category_by_slug(&slug)
        .ok_or(AppError::NotFound("Category"))?;
    Ok(Json(category))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Validation error", body = AppError),
        (status = 409, description = "Category already exists", body = AppError),
    ),
    tag = "categories"
)]
pub async fn create_category(
    Extension(storage): Extension<SharedStorage>,
    AppJson(payload): AppJson<CreateCategoryRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::validation("Invalid category data", e))?;

    let category = storage.write().create_category(payload.into())?;
    Ok((StatusCode::CREATED, Json(category)))
}

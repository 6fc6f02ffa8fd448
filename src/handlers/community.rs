use axum::extract::Query;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::models::{Activity, CommunityStats};
use crate::storage::{SharedStorage, Storage};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecentActivityQuery {
    /// Number of activity entries to return (default 10)
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/community/stats",
    responses(
        (status = 200, description = "Community aggregates (partly heuristic)", body = CommunityStats),
    ),
    tag = "community"
)]
pub async fn community_stats(
    Extension(storage): Extension<SharedStorage>,
) -> AppResult<impl IntoResponse> {
    let stats = storage.read().community_stats();
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/community/recent-activity",
    params(("limit" = Option<usize>, Query, description = "Number of entries (default 10)")),
    responses(
        (status = 200, description = "Recent posts and comments, newest first", body = Vec<Activity>),
    ),
    tag = "community"
)]
pub async fn recent_activity(
    Extension(storage): Extension<SharedStorage>,
    Query(params): Query<RecentActivityQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(10);
    let activity = storage.read().recent_activity(limit);
    Ok(Json(activity))
}

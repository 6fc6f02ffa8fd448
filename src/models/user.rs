use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub title: Option<String>,
    pub posts_count: i32,
    pub followers_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Field set accepted when registering a user. Counters and timestamps
/// are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub title: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub title: Option<String>,
}

/// A user ranked by authored-post count, with likes/views aggregated
/// over their posts as secondary display stats.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contributor {
    #[serde(flatten)]
    pub user: User,
    pub total_posts: i32,
    pub total_likes: i32,
    pub total_views: i32,
    /// 1-based position in the ranking.
    pub rank: usize,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display-oriented community aggregates. Active-member and monthly-post
/// figures are heuristic estimates, not measured quantities.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommunityStats {
    pub active_members: usize,
    pub monthly_posts: usize,
    pub co2_saved: String,
    pub total_posts: usize,
    pub total_members: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Post,
    Comment,
}

/// One entry of the recent-activity feed.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Activity {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Username of the acting user.
    pub user: String,
    pub action: String,
    /// Title of the post acted upon.
    pub target: String,
    pub timestamp: DateTime<Utc>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i32,
    pub content: String,
    /// Weak reference to the post being commented on.
    pub post_id: Option<i32>,
    /// Weak reference to the commenting user.
    pub author_id: Option<i32>,
    /// Weak self-reference enabling reply threads.
    pub parent_id: Option<i32>,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub content: String,
    pub post_id: Option<i32>,
    pub author_id: Option<i32>,
    pub parent_id: Option<i32>,
}

/// A comment with its author resolved for display; `null` when the
/// author reference dangles.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<User>,
}

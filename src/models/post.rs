use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Category, Tag, User};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    /// Weak reference; may point at a category that no longer exists.
    pub category_id: Option<i32>,
    /// Weak reference; may point at a user that no longer exists.
    pub author_id: Option<i32>,
    /// Estimated reading time in minutes, derived from the content.
    pub read_time: i32,
    pub likes: i32,
    pub views: i32,
    pub featured: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Field set accepted when creating a post. Slug, counters, read time
/// and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    pub featured: bool,
    pub published: bool,
}

/// Partial update; absent fields are left untouched. The slug is never
/// regenerated, even when the title changes.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<i32>,
    pub author_id: Option<i32>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// A post enriched with its resolved relations for listing and detail
/// views. Dangling author/category references surface as `null`.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostWithDetails {
    #[serde(flatten)]
    pub post: Post,
    pub author: Option<User>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
    pub comments_count: usize,
}

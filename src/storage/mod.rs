use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::models::{
    Activity, Category, Comment, CommentWithAuthor, CommunityStats, Contributor, NewCategory,
    NewComment, NewPost, NewTag, NewUser, Post, PostPatch, PostWithDetails, Tag, User, UserPatch,
};

mod memory;
mod seed;

pub use memory::MemStorage;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),
}

/// Filter applied by [`Storage::posts`]. Only published posts are ever
/// returned; every field here narrows the result further.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub category_id: Option<i32>,
    /// Case-insensitive substring match against title, content or excerpt.
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// The storage interface: per-entity CRUD plus the aggregate views the
/// API serves. One implementation exists ([`MemStorage`]); handlers only
/// ever see this trait.
pub trait Storage: Send + Sync {
    // Users
    fn user(&self, id: i32) -> Option<User>;
    fn user_by_username(&self, username: &str) -> Option<User>;
    fn create_user(&mut self, new: NewUser) -> Result<User, StorageError>;
    fn update_user(&mut self, id: i32, patch: UserPatch) -> Result<User, StorageError>;
    fn top_contributors(&self, limit: usize) -> Vec<Contributor>;

    // Categories
    fn categories(&self) -> Vec<Category>;
    fn category_by_slug(&self, slug: &str) -> Option<Category>;
    fn create_category(&mut self, new: NewCategory) -> Result<Category, StorageError>;

    // Posts
    fn posts(&self, filter: &PostFilter) -> Vec<PostWithDetails>;
    fn post(&self, id: i32) -> Option<PostWithDetails>;
    fn post_by_slug(&self, slug: &str) -> Option<PostWithDetails>;
    fn create_post(&mut self, new: NewPost) -> Post;
    fn update_post(&mut self, id: i32, patch: PostPatch) -> Result<Post, StorageError>;
    fn delete_post(&mut self, id: i32) -> bool;
    fn increment_post_views(&mut self, id: i32);
    fn increment_post_likes(&mut self, id: i32);

    // Comments
    fn comments_by_post(&self, post_id: i32) -> Vec<CommentWithAuthor>;
    fn create_comment(&mut self, new: NewComment) -> Comment;
    fn delete_comment(&mut self, id: i32) -> bool;

    // Tags
    fn tags(&self) -> Vec<Tag>;
    fn tag_by_slug(&self, slug: &str) -> Option<Tag>;
    fn create_tag(&mut self, new: NewTag) -> Result<Tag, StorageError>;
    fn tag_post(&mut self, post_id: i32, tag_id: i32) -> Result<(), StorageError>;

    // Aggregates
    fn community_stats(&self) -> CommunityStats;
    fn recent_activity(&self, limit: usize) -> Vec<Activity>;
}

/// Shared handle to the store, constructed once in the entry point and
/// injected into handlers via `Extension`. Handlers hold the lock for
/// the duration of a single storage call and never across an await.
#[derive(Clone)]
pub struct SharedStorage {
    inner: Arc<RwLock<dyn Storage>>,
}

impl SharedStorage {
    pub fn new<S: Storage + 'static>(storage: S) -> Self {
        Self {
            inner: Arc::new(RwLock::new(storage)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, dyn Storage> {
        // recover the guard if a previous writer panicked
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, dyn Storage + 'static> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

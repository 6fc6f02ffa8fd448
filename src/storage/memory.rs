use std::collections::BTreeMap;

use chrono::Utc;

use crate::models::{
    Activity, ActivityKind, Category, Comment, CommentWithAuthor, CommunityStats, Contributor,
    NewCategory, NewComment, NewPost, NewTag, NewUser, Post, PostPatch, PostWithDetails, Tag,
    User, UserPatch,
};
use crate::utils::{estimate_read_time, slugify};

use super::{seed, PostFilter, Storage, StorageError};

/// Fixed display estimate shown alongside the exact community totals.
const CO2_SAVED_DISPLAY: &str = "1.2k tons";

/// In-memory store: one ordered map per entity keyed by id, ids issued
/// per entity starting at 1. Single-writer semantics come from the
/// `RwLock` in [`super::SharedStorage`]; nothing in here blocks or
/// suspends mid-mutation.
pub struct MemStorage {
    users: BTreeMap<i32, User>,
    categories: BTreeMap<i32, Category>,
    posts: BTreeMap<i32, Post>,
    comments: BTreeMap<i32, Comment>,
    tags: BTreeMap<i32, Tag>,
    /// post id -> tag ids, insertion-ordered
    post_tags: BTreeMap<i32, Vec<i32>>,
    next_user_id: i32,
    next_category_id: i32,
    next_post_id: i32,
    next_comment_id: i32,
    next_tag_id: i32,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            categories: BTreeMap::new(),
            posts: BTreeMap::new(),
            comments: BTreeMap::new(),
            tags: BTreeMap::new(),
            post_tags: BTreeMap::new(),
            next_user_id: 1,
            next_category_id: 1,
            next_post_id: 1,
            next_comment_id: 1,
            next_tag_id: 1,
        }
    }

    /// A store pre-loaded with the demo community content.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.load(seed::demo_data());
        store
    }

    fn load(&mut self, data: seed::SeedData) {
        for user in data.users {
            self.next_user_id = self.next_user_id.max(user.id + 1);
            self.users.insert(user.id, user);
        }
        for category in data.categories {
            self.next_category_id = self.next_category_id.max(category.id + 1);
            self.categories.insert(category.id, category);
        }
        for tag in data.tags {
            self.next_tag_id = self.next_tag_id.max(tag.id + 1);
            self.tags.insert(tag.id, tag);
        }
        for post in data.posts {
            self.next_post_id = self.next_post_id.max(post.id + 1);
            self.posts.insert(post.id, post);
        }
        for (post_id, tag_ids) in data.post_tags {
            self.post_tags.insert(post_id, tag_ids);
        }
    }

    fn enrich(&self, post: &Post) -> PostWithDetails {
        let author = post.author_id.and_then(|id| self.users.get(&id)).cloned();
        let category = post
            .category_id
            .and_then(|id| self.categories.get(&id))
            .cloned();
        let tags = self
            .post_tags
            .get(&post.id)
            .map(|ids| ids.iter().filter_map(|id| self.tags.get(id)).cloned().collect())
            .unwrap_or_default();
        let comments_count = self
            .comments
            .values()
            .filter(|c| c.post_id == Some(post.id))
            .count();

        PostWithDetails {
            post: post.clone(),
            author,
            category,
            tags,
            comments_count,
        }
    }

    /// First free slug derived from `base`, disambiguated with a numeric
    /// suffix when another post already claimed it.
    fn unique_slug(&self, base: &str) -> String {
        if !self.posts.values().any(|p| p.slug == base) {
            return base.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.posts.values().any(|p| p.slug == candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemStorage {
    fn user(&self, id: i32) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn user_by_username(&self, username: &str) -> Option<User> {
        self.users.values().find(|u| u.username == username).cloned()
    }

    fn create_user(&mut self, new: NewUser) -> Result<User, StorageError> {
        if self.users.values().any(|u| u.username == new.username) {
            return Err(StorageError::Conflict(format!(
                "Username '{}' is already taken",
                new.username
            )));
        }
        if self.users.values().any(|u| u.email == new.email) {
            return Err(StorageError::Conflict(format!(
                "Email '{}' is already registered",
                new.email
            )));
        }

        let user = User {
            id: self.next_user_id,
            username: new.username,
            email: new.email,
            avatar: new.avatar,
            bio: new.bio,
            title: new.title,
            posts_count: 0,
            followers_count: 0,
            created_at: Utc::now(),
        };
        self.next_user_id += 1;
        self.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn update_user(&mut self, id: i32, patch: UserPatch) -> Result<User, StorageError> {
        if let Some(username) = &patch.username {
            if self.users.values().any(|u| u.id != id && &u.username == username) {
                return Err(StorageError::Conflict(format!(
                    "Username '{username}' is already taken"
                )));
            }
        }
        if let Some(email) = &patch.email {
            if self.users.values().any(|u| u.id != id && &u.email == email) {
                return Err(StorageError::Conflict(format!(
                    "Email '{email}' is already registered"
                )));
            }
        }

        let user = self.users.get_mut(&id).ok_or(StorageError::NotFound("User"))?;
        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(avatar) = patch.avatar {
            user.avatar = Some(avatar);
        }
        if let Some(bio) = patch.bio {
            user.bio = Some(bio);
        }
        if let Some(title) = patch.title {
            user.title = Some(title);
        }
        Ok(user.clone())
    }

    fn top_contributors(&self, limit: usize) -> Vec<Contributor> {
        let mut users: Vec<&User> = self.users.values().collect();
        // stable sort: ties on posts_count keep ascending-id order
        users.sort_by(|a, b| b.posts_count.cmp(&a.posts_count));

        users
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, user)| {
                let authored: Vec<&Post> = self
                    .posts
                    .values()
                    .filter(|p| p.author_id == Some(user.id))
                    .collect();
                Contributor {
                    user: user.clone(),
                    total_posts: user.posts_count,
                    total_likes: authored.iter().map(|p| p.likes).sum(),
                    total_views: authored.iter().map(|p| p.views).sum(),
                    rank: index + 1,
                }
            })
            .collect()
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.values().cloned().collect()
    }

    fn category_by_slug(&self, slug: &str) -> Option<Category> {
        self.categories.values().find(|c| c.slug == slug).cloned()
    }

    fn create_category(&mut self, new: NewCategory) -> Result<Category, StorageError> {
        if self
            .categories
            .values()
            .any(|c| c.name == new.name || c.slug == new.slug)
        {
            return Err(StorageError::Conflict(format!(
                "Category '{}' already exists",
                new.name
            )));
        }

        let category = Category {
            id: self.next_category_id,
            name: new.name,
            slug: new.slug,
            color: new.color,
            description: new.description,
        };
        self.next_category_id += 1;
        self.categories.insert(category.id, category.clone());
        Ok(category)
    }

    fn posts(&self, filter: &PostFilter) -> Vec<PostWithDetails> {
        let mut posts: Vec<&Post> = self.posts.values().filter(|p| p.published).collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if let Some(category_id) = filter.category_id {
            posts.retain(|p| p.category_id == Some(category_id));
        }
        if let Some(featured) = filter.featured {
            posts.retain(|p| p.featured == featured);
        }
        if let Some(search) = filter.search.as_deref() {
            let needle = search.to_lowercase();
            posts.retain(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
            });
        }

        posts
            .into_iter()
            .skip(filter.offset.unwrap_or(0))
            .take(filter.limit.unwrap_or(usize::MAX))
            .map(|p| self.enrich(p))
            .collect()
    }

    fn post(&self, id: i32) -> Option<PostWithDetails> {
        self.posts.get(&id).map(|p| self.enrich(p))
    }

    fn post_by_slug(&self, slug: &str) -> Option<PostWithDetails> {
        self.posts
            .values()
            .find(|p| p.slug == slug)
            .map(|p| self.enrich(p))
    }

    fn create_post(&mut self, new: NewPost) -> Post {
        let slug = self.unique_slug(&slugify(&new.title));
        let read_time = estimate_read_time(&new.content);
        let now = Utc::now();

        let post = Post {
            id: self.next_post_id,
            title: new.title,
            slug,
            content: new.content,
            excerpt: new.excerpt,
            cover_image: new.cover_image,
            category_id: new.category_id,
            author_id: new.author_id,
            read_time,
            likes: 0,
            views: 0,
            featured: new.featured,
            published: new.published,
            created_at: now,
            updated_at: now,
        };
        self.next_post_id += 1;
        self.posts.insert(post.id, post.clone());

        if let Some(author_id) = post.author_id {
            if let Some(author) = self.users.get_mut(&author_id) {
                author.posts_count += 1;
            }
        }

        post
    }

    fn update_post(&mut self, id: i32, patch: PostPatch) -> Result<Post, StorageError> {
        let post = self.posts.get_mut(&id).ok_or(StorageError::NotFound("Post"))?;

        if let Some(title) = patch.title {
            post.title = title;
        }
        if let Some(content) = patch.content {
            post.read_time = estimate_read_time(&content);
            post.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            post.excerpt = excerpt;
        }
        if let Some(cover_image) = patch.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(category_id) = patch.category_id {
            post.category_id = Some(category_id);
        }
        if let Some(author_id) = patch.author_id {
            post.author_id = Some(author_id);
        }
        if let Some(featured) = patch.featured {
            post.featured = featured;
        }
        if let Some(published) = patch.published {
            post.published = published;
        }
        post.updated_at = Utc::now();

        Ok(post.clone())
    }

    fn delete_post(&mut self, id: i32) -> bool {
        self.post_tags.remove(&id);
        self.posts.remove(&id).is_some()
    }

    fn increment_post_views(&mut self, id: i32) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.views += 1;
        }
    }

    fn increment_post_likes(&mut self, id: i32) {
        if let Some(post) = self.posts.get_mut(&id) {
            post.likes += 1;
        }
    }

    fn comments_by_post(&self, post_id: i32) -> Vec<CommentWithAuthor> {
        let mut comments: Vec<&Comment> = self
            .comments
            .values()
            .filter(|c| c.post_id == Some(post_id))
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        comments
            .into_iter()
            .map(|c| CommentWithAuthor {
                author: c.author_id.and_then(|id| self.users.get(&id)).cloned(),
                comment: c.clone(),
            })
            .collect()
    }

    fn create_comment(&mut self, new: NewComment) -> Comment {
        let comment = Comment {
            id: self.next_comment_id,
            content: new.content,
            post_id: new.post_id,
            author_id: new.author_id,
            parent_id: new.parent_id,
            likes: 0,
            created_at: Utc::now(),
        };
        self.next_comment_id += 1;
        self.comments.insert(comment.id, comment.clone());
        comment
    }

    fn delete_comment(&mut self, id: i32) -> bool {
        self.comments.remove(&id).is_some()
    }

    fn tags(&self) -> Vec<Tag> {
        self.tags.values().cloned().collect()
    }

    fn tag_by_slug(&self, slug: &str) -> Option<Tag> {
        self.tags.values().find(|t| t.slug == slug).cloned()
    }

    fn create_tag(&mut self, new: NewTag) -> Result<Tag, StorageError> {
        if self
            .tags
            .values()
            .any(|t| t.name == new.name || t.slug == new.slug)
        {
            return Err(StorageError::Conflict(format!(
                "Tag '{}' already exists",
                new.name
            )));
        }

        let tag = Tag {
            id: self.next_tag_id,
            name: new.name,
            slug: new.slug,
            color: new.color.unwrap_or_else(|| "gray".to_string()),
        };
        self.next_tag_id += 1;
        self.tags.insert(tag.id, tag.clone());
        Ok(tag)
    }

    fn tag_post(&mut self, post_id: i32, tag_id: i32) -> Result<(), StorageError> {
        if !self.posts.contains_key(&post_id) {
            return Err(StorageError::NotFound("Post"));
        }
        if !self.tags.contains_key(&tag_id) {
            return Err(StorageError::NotFound("Tag"));
        }

        let tag_ids = self.post_tags.entry(post_id).or_default();
        if !tag_ids.contains(&tag_id) {
            tag_ids.push(tag_id);
        }
        Ok(())
    }

    fn community_stats(&self) -> CommunityStats {
        let total_members = self.users.len();
        let total_posts = self.posts.len();

        CommunityStats {
            // heuristic estimates: 70% of members counted active,
            // 30% of posts attributed to the current month
            active_members: total_members * 7 / 10,
            monthly_posts: total_posts * 3 / 10,
            co2_saved: CO2_SAVED_DISPLAY.to_string(),
            total_posts,
            total_members,
        }
    }

    fn recent_activity(&self, limit: usize) -> Vec<Activity> {
        let mut activities: Vec<Activity> = Vec::new();

        let mut recent_posts: Vec<&Post> = self.posts.values().collect();
        recent_posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for post in recent_posts.into_iter().take(3) {
            let Some(author) = post.author_id.and_then(|id| self.users.get(&id)) else {
                continue;
            };
            activities.push(Activity {
                kind: ActivityKind::Post,
                user: author.username.clone(),
                action: "published a new post".to_string(),
                target: post.title.clone(),
                timestamp: post.created_at,
            });
        }

        let mut recent_comments: Vec<&Comment> = self.comments.values().collect();
        recent_comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for comment in recent_comments.into_iter().take(3) {
            let Some(author) = comment.author_id.and_then(|id| self.users.get(&id)) else {
                continue;
            };
            let Some(post) = comment.post_id.and_then(|id| self.posts.get(&id)) else {
                continue;
            };
            activities.push(Activity {
                kind: ActivityKind::Comment,
                user: author.username.clone(),
                action: "commented on".to_string(),
                target: post.title.clone(),
                timestamp: comment.created_at,
            });
        }

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        activities.truncate(limit);
        activities
    }
}

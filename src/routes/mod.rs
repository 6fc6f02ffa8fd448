use crate::handlers;
use axum::{routing, Router};

pub fn create_routes() -> Router {
    Router::new().nest("/api", read_routes().merge(write_routes()))
}

/// Public read surface.
fn read_routes() -> Router {
    Router::new()
        // Posts
        .route("/posts", routing::get(handlers::post::list_posts))
        .route("/posts/{slug}", routing::get(handlers::post::get_post))
        .route(
            "/posts/{id}/comments",
            routing::get(handlers::comment::list_comments),
        )
        // Search
        .route("/search", routing::get(handlers::post::search_posts))
        // Categories
        .route(
            "/categories",
            routing::get(handlers::category::list_categories),
        )
        .route(
            "/categories/{slug}",
            routing::get(handlers::category::get_category),
        )
        // Tags
        .route("/tags", routing::get(handlers::tag::list_tags))
        .route("/tags/{slug}", routing::get(handlers::tag::get_tag))
        // Users
        .route(
            "/users/top-contributors",
            routing::get(handlers::user::top_contributors),
        )
        .route("/users/{username}", routing::get(handlers::user::get_user))
        // Community
        .route(
            "/community/stats",
            routing::get(handlers::community::community_stats),
        )
        .route(
            "/community/recent-activity",
            routing::get(handlers::community::recent_activity),
        )
}

/// Mutation surface. Routes sharing a dynamic segment with a read route
/// must reuse its name; the handlers parse the value as a numeric id.
fn write_routes() -> Router {
    Router::new()
        // Posts
        .route("/posts", routing::post(handlers::post::create_post))
        .route(
            "/posts/{slug}",
            routing::put(handlers::post::update_post).delete(handlers::post::delete_post),
        )
        .route("/posts/{id}/like", routing::post(handlers::post::like_post))
        .route(
            "/posts/{id}/tags/{tag_id}",
            routing::post(handlers::tag::tag_post),
        )
        // Comments
        .route(
            "/comments",
            routing::post(handlers::comment::create_comment),
        )
        .route(
            "/comments/{id}",
            routing::delete(handlers::comment::delete_comment),
        )
        // Categories
        .route(
            "/categories",
            routing::post(handlers::category::create_category),
        )
        // Tags
        .route("/tags", routing::post(handlers::tag::create_tag))
        // Users
        .route("/users", routing::post(handlers::user::create_user))
        .route(
            "/users/{username}",
            routing::put(handlers::user::update_user),
        )
}

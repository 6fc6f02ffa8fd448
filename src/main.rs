mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod storage;
mod utils;

use axum::{response::IntoResponse, routing::get, Extension, Json, Router};
use config::ServerConfig;
use serde_json::json;
use storage::{MemStorage, SharedStorage, Storage};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        // Post routes
        crate::handlers::post::list_posts,
        crate::handlers::post::get_post,
        crate::handlers::post::create_post,
        crate::handlers::post::update_post,
        crate::handlers::post::delete_post,
        crate::handlers::post::like_post,
        crate::handlers::post::search_posts,
        // Comment routes
        crate::handlers::comment::list_comments,
        crate::handlers::comment::create_comment,
        crate::handlers::comment::delete_comment,
        // Category routes
        crate::handlers::category::list_categories,
        crate::handlers::category::get_category,
        crate::handlers::category::create_category,
        // Tag routes
        crate::handlers::tag::list_tags,
        crate::handlers::tag::get_tag,
        crate::handlers::tag::create_tag,
        crate::handlers::tag::tag_post,
        // User routes
        crate::handlers::user::top_contributors,
        crate::handlers::user::get_user,
        crate::handlers::user::create_user,
        crate::handlers::user::update_user,
        // Community routes
        crate::handlers::community::community_stats,
        crate::handlers::community::recent_activity,
    ),
    components(
        schemas(
            crate::error::AppError,
            // Entities
            crate::models::User,
            crate::models::Category,
            crate::models::Post,
            crate::models::Comment,
            crate::models::Tag,
            // Derived views
            crate::models::PostWithDetails,
            crate::models::CommentWithAuthor,
            crate::models::Contributor,
            crate::models::CommunityStats,
            crate::models::Activity,
            crate::models::ActivityKind,
            // Requests
            crate::handlers::post::CreatePostRequest,
            crate::handlers::post::UpdatePostRequest,
            crate::handlers::post::PostListQuery,
            crate::handlers::post::SearchQuery,
            crate::handlers::comment::CreateCommentRequest,
            crate::handlers::category::CreateCategoryRequest,
            crate::handlers::tag::CreateTagRequest,
            crate::handlers::user::CreateUserRequest,
            crate::handlers::user::UpdateUserRequest,
        )
    ),
    tags(
        (name = "posts", description = "Post browsing and publishing"),
        (name = "comments", description = "Comment operations"),
        (name = "categories", description = "Category reference data"),
        (name = "tags", description = "Tag operations"),
        (name = "users", description = "User profiles and rankings"),
        (name = "community", description = "Community-wide aggregates"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ecoconnect=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    tracing::info!("Starting EcoConnect API v{}...", env!("CARGO_PKG_VERSION"));

    let store = if config.seed_demo_data {
        let store = MemStorage::with_demo_data();
        tracing::info!("Demo community content seeded");
        store
    } else {
        MemStorage::new()
    };
    let storage = SharedStorage::new(store);

    let app = create_app(&config).layer(Extension(storage));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

fn create_app(config: &ServerConfig) -> Router {
    Router::new()
        .route("/", get(health_check))
        .merge(routes::create_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.cors_origins))
}

fn build_cors_layer(origins_str: &str) -> CorsLayer {
    use axum::http::{header, HeaderValue, Method};

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins_str == "*" {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = origins_str
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Health check successful", body = serde_json::Value)
    )
)]
async fn health_check(Extension(storage): Extension<SharedStorage>) -> impl IntoResponse {
    let stats = storage.read().community_stats();

    Json(json!({
        "status": "ok",
        "service": "EcoConnect API",
        "version": env!("CARGO_PKG_VERSION"),
        "posts": stats.total_posts,
        "members": stats.total_members,
    }))
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, gracefully shutting down...");
}

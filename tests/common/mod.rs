#![allow(dead_code)]

use ecoconnect::storage::{MemStorage, SharedStorage};
use reqwest::Client;

pub struct TestApp {
    pub addr: String,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.addr, path)
    }
}

/// Spawn the app with an empty store on an ephemeral port.
pub async fn spawn_app() -> TestApp {
    spawn_with(MemStorage::new()).await
}

/// Spawn the app with the demo seed loaded.
pub async fn spawn_seeded_app() -> TestApp {
    spawn_with(MemStorage::with_demo_data()).await
}

async fn spawn_with(store: MemStorage) -> TestApp {
    let app = ecoconnect::routes::create_routes()
        .layer(axum::Extension(SharedStorage::new(store)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp {
        addr: format!("http://{}", addr),
        client: Client::new(),
    }
}

/// Create a user through the API and return its id.
pub async fn create_test_user(app: &TestApp, username: &str) -> i32 {
    let resp = app
        .client
        .post(app.url("/users"))
        .json(&serde_json::json!({
            "username": username,
            "email": format!("{}@example.com", username),
        }))
        .send()
        .await
        .expect("Failed to create user");

    assert_eq!(resp.status(), 201, "user creation failed");
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_i64().unwrap() as i32
}

/// Create a post through the API and return (id, slug).
pub async fn create_test_post(app: &TestApp, author_id: Option<i32>, title: &str) -> (i32, String) {
    let mut payload = serde_json::json!({
        "title": title,
        "content": "Some content for the post body.",
        "excerpt": "Excerpt.",
    });
    if let Some(author_id) = author_id {
        payload["authorId"] = serde_json::json!(author_id);
    }

    let resp = app
        .client
        .post(app.url("/posts"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to create post");

    assert_eq!(resp.status(), 201, "post creation failed");
    let body: serde_json::Value = resp.json().await.unwrap();
    (
        body["id"].as_i64().unwrap() as i32,
        body["slug"].as_str().unwrap().to_string(),
    )
}

/// Create a comment through the API and return its id.
pub async fn create_test_comment(
    app: &TestApp,
    post_id: i32,
    author_id: Option<i32>,
    content: &str,
) -> i32 {
    let mut payload = serde_json::json!({
        "content": content,
        "postId": post_id,
    });
    if let Some(author_id) = author_id {
        payload["authorId"] = serde_json::json!(author_id);
    }

    let resp = app
        .client
        .post(app.url("/comments"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to create comment");

    assert_eq!(resp.status(), 201, "comment creation failed");
    let body: serde_json::Value = resp.json().await.unwrap();
    body["id"].as_i64().unwrap() as i32
}

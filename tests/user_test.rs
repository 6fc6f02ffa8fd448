mod common;

use serde_json::Value;

#[tokio::test]
async fn create_user_starts_with_zeroed_counters() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/users"))
        .json(&serde_json::json!({
            "username": "sarah_chen",
            "email": "sarah@example.com",
            "bio": "Energy policy researcher.",
            "title": "Energy Policy Researcher",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], "sarah_chen");
    assert_eq!(body["postsCount"], 0);
    assert_eq!(body["followersCount"], 0);
}

#[tokio::test]
async fn duplicate_username_or_email_conflicts() {
    let app = common::spawn_app().await;
    common::create_test_user(&app, "taken").await;

    let resp = app
        .client
        .post(app.url("/users"))
        .json(&serde_json::json!({
            "username": "taken",
            "email": "other@example.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("taken"));

    let resp = app
        .client
        .post(app.url("/users"))
        .json(&serde_json::json!({
            "username": "someone_else",
            "email": "taken@example.com",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn invalid_email_is_a_validation_error() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/users"))
        .json(&serde_json::json!({
            "username": "valid_name",
            "email": "not-an-email",
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid user data");
    assert!(body["errors"]["email"].is_array());
}

#[tokio::test]
async fn get_user_by_username() {
    let app = common::spawn_app().await;
    common::create_test_user(&app, "findme").await;

    let resp = app
        .client
        .get(app.url("/users/findme"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], "findme");

    let resp = app
        .client
        .get(app.url("/users/missing"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn update_user_merges_present_fields() {
    let app = common::spawn_app().await;
    let user_id = common::create_test_user(&app, "editable").await;

    let resp = app
        .client
        .put(app.url(&format!("/users/{user_id}")))
        .json(&serde_json::json!({ "bio": "Updated bio" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["bio"], "Updated bio");
    assert_eq!(body["username"], "editable");

    let resp = app
        .client
        .put(app.url("/users/999"))
        .json(&serde_json::json!({ "bio": "Ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_user_rejects_username_collision() {
    let app = common::spawn_app().await;
    common::create_test_user(&app, "first_user").await;
    let second = common::create_test_user(&app, "second_user").await;

    let resp = app
        .client
        .put(app.url(&format!("/users/{second}")))
        .json(&serde_json::json!({ "username": "first_user" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 409);
}

#[tokio::test]
async fn posts_count_tracks_authored_posts() {
    let app = common::spawn_app().await;
    let user_id = common::create_test_user(&app, "author").await;

    common::create_test_post(&app, Some(user_id), "One").await;
    common::create_test_post(&app, Some(user_id), "Two").await;

    let body: Value = app
        .client
        .get(app.url("/users/author"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["postsCount"], 2);
}

#[tokio::test]
async fn top_contributors_are_ranked_with_aggregates() {
    let app = common::spawn_app().await;
    let prolific = common::create_test_user(&app, "prolific").await;
    let casual = common::create_test_user(&app, "casual").await;
    common::create_test_user(&app, "lurker").await;

    let (post_id, _) = common::create_test_post(&app, Some(prolific), "One").await;
    common::create_test_post(&app, Some(prolific), "Two").await;
    common::create_test_post(&app, Some(casual), "Three").await;
    for _ in 0..2 {
        app.client
            .post(app.url(&format!("/posts/{post_id}/like")))
            .send()
            .await
            .unwrap();
    }

    let body: Value = app
        .client
        .get(app.url("/users/top-contributors?limit=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let contributors = body.as_array().unwrap();
    assert_eq!(contributors.len(), 2);
    assert_eq!(contributors[0]["username"], "prolific");
    assert_eq!(contributors[0]["rank"], 1);
    assert_eq!(contributors[0]["totalPosts"], 2);
    assert_eq!(contributors[0]["totalLikes"], 2);
    assert_eq!(contributors[1]["username"], "casual");
    assert_eq!(contributors[1]["rank"], 2);
}

#[tokio::test]
async fn top_contributors_defaults_to_ten() {
    let app = common::spawn_seeded_app().await;

    let body: Value = app
        .client
        .get(app.url("/users/top-contributors"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // seed has 5 members, ordered by their posts counters
    let contributors = body.as_array().unwrap();
    assert_eq!(contributors.len(), 5);
    assert_eq!(contributors[0]["username"], "sarah_chen");
    let counts: Vec<i64> = contributors
        .iter()
        .map(|c| c["postsCount"].as_i64().unwrap())
        .collect();
    let mut sorted = counts.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(counts, sorted);
}

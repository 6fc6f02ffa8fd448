mod common;

use serde_json::Value;

#[tokio::test]
async fn comment_round_trip_resolves_author() {
    let app = common::spawn_app().await;
    let user_id = common::create_test_user(&app, "commenter").await;
    let (post_id, _) = common::create_test_post(&app, Some(user_id), "Discussed").await;

    let resp = app
        .client
        .post(app.url("/comments"))
        .json(&serde_json::json!({
            "content": "Great post, thanks!",
            "postId": post_id,
            "authorId": user_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["likes"], 0);
    assert_eq!(created["postId"], post_id);

    let body: Value = app
        .client
        .get(app.url(&format!("/posts/{post_id}/comments")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Great post, thanks!");
    assert_eq!(comments[0]["author"]["id"], user_id);
    assert_eq!(comments[0]["author"]["username"], "commenter");
}

#[tokio::test]
async fn comments_are_listed_oldest_first() {
    let app = common::spawn_app().await;
    let (post_id, _) = common::create_test_post(&app, None, "Discussed").await;

    common::create_test_comment(&app, post_id, None, "first").await;
    common::create_test_comment(&app, post_id, None, "second").await;
    common::create_test_comment(&app, post_id, None, "third").await;

    let body: Value = app
        .client
        .get(app.url(&format!("/posts/{post_id}/comments")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let contents: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["content"].as_str().unwrap())
        .collect();
    assert_eq!(contents, ["first", "second", "third"]);
}

#[tokio::test]
async fn dangling_comment_author_is_null() {
    let app = common::spawn_app().await;
    let (post_id, _) = common::create_test_post(&app, None, "Discussed").await;
    common::create_test_comment(&app, post_id, Some(999), "ghost").await;

    let body: Value = app
        .client
        .get(app.url(&format!("/posts/{post_id}/comments")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert!(comments[0]["author"].is_null());
}

#[tokio::test]
async fn comment_count_appears_in_post_details() {
    let app = common::spawn_app().await;
    let (post_id, slug) = common::create_test_post(&app, None, "Discussed").await;

    common::create_test_comment(&app, post_id, None, "one").await;
    common::create_test_comment(&app, post_id, None, "two").await;

    let body: Value = app
        .client
        .get(app.url(&format!("/posts/{slug}")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["commentsCount"], 2);
}

#[tokio::test]
async fn empty_comment_content_is_rejected() {
    let app = common::spawn_app().await;
    let (post_id, _) = common::create_test_post(&app, None, "Discussed").await;

    let resp = app
        .client
        .post(app.url("/comments"))
        .json(&serde_json::json!({
            "content": "",
            "postId": post_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Invalid comment data");
    assert!(body["errors"]["content"].is_array());
}

#[tokio::test]
async fn delete_comment_then_its_gone() {
    let app = common::spawn_app().await;
    let (post_id, _) = common::create_test_post(&app, None, "Discussed").await;
    let comment_id = common::create_test_comment(&app, post_id, None, "fleeting").await;

    let resp = app
        .client
        .delete(app.url(&format!("/comments/{comment_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);

    let resp = app
        .client
        .delete(app.url(&format!("/comments/{comment_id}")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Comment not found");
}

#[tokio::test]
async fn reply_comments_carry_their_parent() {
    let app = common::spawn_app().await;
    let (post_id, _) = common::create_test_post(&app, None, "Threaded").await;
    let parent_id = common::create_test_comment(&app, post_id, None, "root").await;

    let resp = app
        .client
        .post(app.url("/comments"))
        .json(&serde_json::json!({
            "content": "a reply",
            "postId": post_id,
            "parentId": parent_id,
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 201);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["parentId"], parent_id);
}

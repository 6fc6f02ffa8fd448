mod common;

use serde_json::Value;

#[tokio::test]
async fn stats_on_an_empty_store() {
    let app = common::spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/community/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["totalMembers"], 0);
    assert_eq!(body["activeMembers"], 0);
    assert_eq!(body["totalPosts"], 0);
    assert_eq!(body["monthlyPosts"], 0);
    assert_eq!(body["co2Saved"], "1.2k tons");
}

#[tokio::test]
async fn stats_use_floored_heuristics_over_the_seed() {
    let app = common::spawn_seeded_app().await;

    let body: Value = app
        .client
        .get(app.url("/community/stats"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["totalMembers"], 5);
    assert_eq!(body["activeMembers"], 3);
    assert_eq!(body["totalPosts"], 9);
    assert_eq!(body["monthlyPosts"], 2);
}

#[tokio::test]
async fn recent_activity_is_empty_without_content() {
    let app = common::spawn_app().await;

    let body: Value = app
        .client
        .get(app.url("/community/recent-activity"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn recent_activity_merges_posts_and_comments() {
    let app = common::spawn_app().await;
    let user_id = common::create_test_user(&app, "active_member").await;
    let (post_id, _) = common::create_test_post(&app, Some(user_id), "Announced").await;
    common::create_test_comment(&app, post_id, Some(user_id), "And discussed").await;

    let body: Value = app
        .client
        .get(app.url("/community/recent-activity"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let activity = body.as_array().unwrap();
    assert_eq!(activity.len(), 2);

    // the comment came last, so it leads the feed
    assert_eq!(activity[0]["type"], "comment");
    assert_eq!(activity[0]["action"], "commented on");
    assert_eq!(activity[0]["user"], "active_member");
    assert_eq!(activity[0]["target"], "Announced");
    assert_eq!(activity[1]["type"], "post");
    assert_eq!(activity[1]["action"], "published a new post");
}

#[tokio::test]
async fn recent_activity_respects_the_limit_param() {
    let app = common::spawn_seeded_app().await;

    let body: Value = app
        .client
        .get(app.url("/community/recent-activity?limit=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let activity = body.as_array().unwrap();
    assert_eq!(activity.len(), 2);
    for entry in activity {
        assert_eq!(entry["type"], "post");
        assert!(entry["timestamp"].is_string());
    }
}

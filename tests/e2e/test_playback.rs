use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_replace_active_playback(ctx: &TestContext) {
    ctx.sign_in().await;

    ctx.client
        .post("/api/playback/play", &json!({ "url": "http://clips/a.mp3" }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    let response = ctx
        .client
        .post("/api/playback/play", &json!({ "url": "http://clips/b.mp3" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["is_playing"], true);
    assert_eq!(response.body()["url"], "http://clips/b.mp3");
    assert_eq!(
        ctx.player.events(),
        vec![
            "play http://clips/a.mp3",
            "pause http://clips/a.mp3",
            "play http://clips/b.mp3",
        ]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pause_and_report_not_playing(ctx: &TestContext) {
    ctx.sign_in().await;

    // Pausing with nothing loaded is a no-op
    let response = ctx.client.post_empty("/api/playback/pause").await.unwrap();
    response.assert_status(StatusCode::OK);
    assert!(ctx.player.events().is_empty());

    ctx.client
        .post("/api/playback/play", &json!({ "url": "http://clips/a.mp3" }))
        .await
        .unwrap();
    let response = ctx.client.post_empty("/api/playback/pause").await.unwrap();

    assert_eq!(response.body()["is_playing"], false);
    assert!(!ctx.store.snapshot().is_playing);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_toggle_current_audio(ctx: &TestContext) {
    ctx.sign_in().await;

    ctx.client
        .post_empty("/api/playback/toggle")
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("nothing to play");

    let url = ctx.client.speak("Toggle me", "onyx", 2.0).await.unwrap().audio_url;

    let first = ctx.client.post_empty("/api/playback/toggle").await.unwrap();
    assert_eq!(first.body()["is_playing"], true);
    assert_eq!(first.body()["url"], url.as_str());

    let second = ctx.client.post_empty("/api/playback/toggle").await.unwrap();
    assert_eq!(second.body()["is_playing"], false);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_play_url(ctx: &TestContext) {
    ctx.sign_in().await;

    ctx.client
        .post("/api/playback/play", &json!({ "url": "" }))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.player.events().is_empty());
}

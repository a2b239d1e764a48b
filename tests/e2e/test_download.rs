use crate::e2e::helpers;

use helpers::{fakes::FAKE_CLIP, TestContext};
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_save_generated_audio_with_given_name(ctx: &TestContext) {
    ctx.sign_in().await;

    let generation = ctx.client.speak("Keep me", "fable", 1.0).await.unwrap();
    let filename = generation.download_name();

    let response = ctx
        .client
        .post(
            "/api/download",
            &json!({ "url": generation.audio_url, "filename": filename }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["saved"], true);
    let saved = std::fs::read(ctx.download_dir.join(&filename)).unwrap();
    assert_eq!(saved, FAKE_CLIP);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_default_name_when_none_given(ctx: &TestContext) {
    ctx.sign_in().await;

    let url = ctx.client.speak("Name me", "nova", 1.0).await.unwrap().audio_url;

    let response = ctx
        .client
        .post("/api/download", &json!({ "url": url }))
        .await
        .unwrap();

    let path = response.body()["path"].as_str().unwrap().to_string();
    let name = std::path::Path::new(&path).file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("speech-") && name.ends_with(".mp3"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_silently_for_missing_resource(ctx: &TestContext) {
    ctx.sign_in().await;

    let response = ctx
        .client
        .post(
            "/api/download",
            &json!({ "url": format!("{}/audio/missing.mp3", ctx.base_url) }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body()["saved"], false);
    assert!(!ctx.download_dir.exists() || std::fs::read_dir(&ctx.download_dir).unwrap().count() == 0);
}

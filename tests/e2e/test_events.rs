use crate::e2e::helpers;

use helpers::{api_client::EventStream, TestContext};
use hyper::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use test_context::test_context;

async fn next_event(events: &mut EventStream) -> Value {
    tokio::time::timeout(Duration::from_secs(5), events.next_event())
        .await
        .expect("no event within 5s")
        .unwrap()
}

/// Read until a notification and a state matching `settled` have both arrived
async fn collect_until_settled(
    events: &mut EventStream,
    settled: impl Fn(&Value) -> bool,
) -> (Value, Value) {
    let mut notification = None;
    let mut state = None;

    while notification.is_none() || state.is_none() {
        let event = next_event(events).await;
        match event["type"].as_str() {
            Some("notification") => notification = Some(event["data"].clone()),
            Some("state") if settled(&event["data"]) => state = Some(event["data"].clone()),
            _ => {}
        }
    }

    (notification.unwrap(), state.unwrap())
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stream_state_and_success_notification(ctx: &TestContext) {
    ctx.sign_in().await;
    let mut events = ctx.client.open_events("/api/events").await.unwrap();

    let first = next_event(&mut events).await;
    assert_eq!(first["type"], "state");
    assert_eq!(first["data"]["is_generating"], false);
    assert_eq!(first["data"]["generations"], json!([]));

    let generation = ctx.client.speak("Hello world", "nova", 1.0).await.unwrap();

    let (notification, state) = collect_until_settled(&mut events, |data| {
        data["is_generating"] == false
            && data["generations"].as_array().map_or(false, |g| g.len() == 1)
    })
    .await;

    assert_eq!(notification["title"], "Speech generated successfully!");
    assert_eq!(notification["description"], "Your audio is ready to play.");
    assert_eq!(notification["variant"], "default");
    assert_eq!(state["progress"], 0);
    assert_eq!(state["current_audio"], generation.audio_url.as_str());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_stream_destructive_notification_for_empty_text(ctx: &TestContext) {
    ctx.sign_in().await;
    let mut events = ctx.client.open_events("/api/events").await.unwrap();
    assert_eq!(next_event(&mut events).await["type"], "state");

    ctx.client
        .post("/api/speech", &json!({ "text": "", "voice": "nova", "speed": 1.0 }))
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST);

    let event = loop {
        let event = next_event(&mut events).await;
        if event["type"] == "notification" {
            break event;
        }
    };
    assert_eq!(event["data"]["title"], "Please enter some text");
    assert_eq!(event["data"]["variant"], "destructive");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_refuse_event_stream_when_signed_out(ctx: &TestContext) {
    assert!(ctx.client.open_events("/api/events").await.is_err());
}

use crate::e2e::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {
    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.body_bytes, b"OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_responses(ctx: &TestContext) {
    ctx.client
        .get("/health")
        .await
        .unwrap()
        .assert_header_exists("x-request-id");

    // Rejected requests are tagged too
    ctx.client
        .get("/api/studio")
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_echo_caller_request_id(ctx: &TestContext) {
    let response = ctx
        .client
        .get_with_headers("/health", &[("x-request-id", "trace-42")])
        .await
        .unwrap();

    assert_eq!(response.header("x-request-id"), Some("trace-42"));
}

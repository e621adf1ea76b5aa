//! Settings API tests.

mod common;

use serde_json::Value;

use common::fixtures;
use common::TestContext;

/// Test reading the configured direction.
#[tokio::test]
async fn test_get_direction() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/settings/direction").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["direction"], "source_to_target");
}

/// Test switching to target-to-source prompts with the translation.
#[tokio::test]
async fn test_set_direction_target_to_source() {
    let ctx = TestContext::with_words(fixtures::SAMPLE_LIST);
    let server = ctx.server();

    let response = server
        .put("/api/settings/direction")
        .json(&fixtures::direction_request("target_to_source"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["direction"], "target_to_source");

    let session: Value = server
        .post("/api/session/start")
        .json(&fixtures::start_request("test"))
        .await
        .json();
    assert_eq!(session["card"]["prompt_side"], "target");

    // The expected answer is now the source word.
    let prompt = session["card"]["prompt"].as_str().unwrap().to_string();
    let source = {
        let trainer = ctx.state.trainer().unwrap();
        trainer
            .words()
            .iter()
            .find(|w| w.target_text == prompt)
            .map(|w| w.source_text.clone())
            .unwrap()
    };
    let verdict: Value = server
        .post("/api/session/answer")
        .json(&fixtures::answer_request(&source))
        .await
        .json();
    assert_eq!(verdict["correct"], true);
    assert_eq!(verdict["expected"], source.as_str());
}

/// Test learn cards always show the source side first.
#[tokio::test]
async fn test_direction_does_not_affect_learn_mode() {
    let ctx = TestContext::with_words(fixtures::SAMPLE_LIST);
    let server = ctx.server();

    server
        .put("/api/settings/direction")
        .json(&fixtures::direction_request("target_to_source"))
        .await
        .assert_status_ok();

    let session: Value = server
        .post("/api/session/start")
        .json(&fixtures::start_request("learn"))
        .await
        .json();
    assert_eq!(session["card"]["prompt_side"], "source");
}

/// Test unknown directions are rejected by the JSON extractor.
#[tokio::test]
async fn test_set_invalid_direction() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .put("/api/settings/direction")
        .json(&fixtures::direction_request("both"))
        .await;

    assert!(response.status_code().is_client_error());

    let body: Value = server.get("/api/settings/direction").await.json();
    assert_eq!(body["direction"], "source_to_target");
}

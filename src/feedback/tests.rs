use super::*;
use crate::config::{FeedbackConfig, FeedbackCredentials};
use crate::test_support::RecordingSink;

fn credentials() -> FeedbackCredentials {
    FeedbackCredentials {
        api_key: "key123".to_string(),
        base_id: "appWinter".to_string(),
        table_name: "User Feedback".to_string(),
    }
}

#[test]
fn validator_rejects_blank_text() {
    assert_eq!(Validator::check(""), Err(ValidationError::Empty));
    assert_eq!(Validator::check(" \n\t "), Err(ValidationError::Empty));
    assert_eq!(Validator::check("  snow  "), Ok("  snow  "));
}

#[test]
fn validator_rejects_overlong_text() {
    let text = "a".repeat(Validator::MAX_LENGTH + 1);
    assert_eq!(
        Validator::check(&text),
        Err(ValidationError::TooLong(Validator::MAX_LENGTH + 1))
    );
}

#[tokio::test]
async fn whitespace_never_reaches_the_sink() {
    let sink = RecordingSink::default();
    for text in ["", "   ", "\n\n"] {
        let result = submit_feedback(&sink, text).await;
        assert_eq!(result, Err(FeedbackError::Validation(ValidationError::Empty)));
    }
    assert_eq!(sink.calls(), 0);
}

#[tokio::test]
async fn each_submission_calls_the_sink_once() {
    let sink = RecordingSink::default();
    submit_feedback(&sink, "Winter is long").await.unwrap();
    submit_feedback(&sink, "Winter is long").await.unwrap();

    assert_eq!(sink.calls(), 2);
    assert_eq!(sink.received.lock().unwrap()[0], "Winter is long");
}

#[tokio::test]
async fn sink_failure_is_surfaced() {
    let sink = RecordingSink::failing(SinkError::Connect);
    let err = submit_feedback(&sink, "hello").await.unwrap_err();

    assert_eq!(err, FeedbackError::Sink(SinkError::Connect));
    assert!(err.to_string().starts_with("An error occurred while saving your feedback"));
    assert_eq!(sink.calls(), 1);
}

#[tokio::test]
async fn unconfigured_sink_reports_reason() {
    let sink = UnconfiguredSink::new("missing AIRTABLE_API_KEY");
    let err = submit_feedback(&sink, "hello").await.unwrap_err();
    assert!(matches!(err, FeedbackError::Sink(SinkError::Unconfigured(_))));
}

#[test]
fn airtable_request_targets_table_with_bearer_auth() {
    let sink = AirtableSink::new(&FeedbackConfig::default(), credentials()).unwrap();
    let record = FeedbackRecord::new("Snow & silence").unwrap();
    let request = sink.build_request(&record).unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(
        request.url().as_str(),
        "https://api.airtable.com/v0/appWinter/User%20Feedback"
    );
    assert_eq!(
        request.headers()[reqwest::header::AUTHORIZATION],
        "Bearer key123"
    );

    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    let json: serde_json::Value = serde_json::from_slice(body).unwrap();
    assert_eq!(json, serde_json::json!({"fields": {"Feedback": "Snow & silence"}}));
}

#[test]
fn airtable_endpoint_tolerates_trailing_slash() {
    let config = FeedbackConfig {
        api_url: "http://localhost:8080/v0/".to_string(),
        ..FeedbackConfig::default()
    };
    let sink = AirtableSink::new(&config, credentials()).unwrap();
    assert_eq!(
        sink.endpoint().as_str(),
        "http://localhost:8080/v0/appWinter/User%20Feedback"
    );
}

#[test]
fn airtable_rejects_unusable_api_url() {
    let config = FeedbackConfig {
        api_url: "not a url".to_string(),
        ..FeedbackConfig::default()
    };
    assert!(matches!(
        AirtableSink::new(&config, credentials()),
        Err(SinkError::Unconfigured(_))
    ));
}

#[tokio::test]
async fn airtable_unreachable_host_is_a_recoverable_error() {
    let config = FeedbackConfig {
        api_url: "http://127.0.0.1:9/v0".to_string(),
        timeout_seconds: 2,
        ..FeedbackConfig::default()
    };
    let sink = AirtableSink::new(&config, credentials()).unwrap();
    let err = submit_feedback(&sink, "hello").await.unwrap_err();
    assert!(matches!(err, FeedbackError::Sink(_)));
}

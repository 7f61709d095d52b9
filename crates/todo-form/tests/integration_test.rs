/*
[INPUT]:  TaskForm + FormContext against a mock task API
[OUTPUT]: End-to-end checks of validation, payload shape and notices
[POS]:    Integration test layer - full submit flow
[UPDATE]: When adding submit scenarios
*/

mod common;

use common::{form_context, setup_mock_server};
use rstest::rstest;
use serde_json::Value;
use todo_adapter::SubmissionResult;
use todo_form::{Field, NoticeKind, TaskForm};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn filled_form(title: &str, description: &str) -> TaskForm {
    let mut form = TaskForm::new();
    form.set_value(Field::Title, title);
    form.set_value(Field::Description, description);
    form
}

#[rstest]
#[case::title(Field::Title, "Title is required")]
#[case::description(Field::Description, "Description is required")]
#[case::deadline(Field::Deadline, "Deadline is required")]
#[tokio::test]
async fn test_empty_field_blocks_request(#[case] empty: Field, #[case] expected: &'static str) {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, notices) = form_context(&server.uri(), Some("token-abc"));
    let mut form = filled_form("Water plants", "Balcony and kitchen");
    ctx.apply_deadline(&mut form, "2025-02-16T20:25");
    form.set_value(empty, "   ");

    assert!(ctx.submit_form(&mut form).await.is_none());
    assert_eq!(form.error(empty), Some(expected));
    assert_eq!(form.errors().count(), 1);
    assert!(notices.entries().is_empty());
}

#[tokio::test]
async fn test_valid_form_sends_utc_deadline_and_notifies_once() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/task/create"))
        .and(header("authorization", "Bearer token-abc"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let (ctx, notices) = form_context(&server.uri(), Some("token-abc"));
    let mut form = filled_form("  Water plants ", "Balcony and kitchen");
    let preview = ctx
        .apply_deadline(&mut form, "2025-02-16T20:25")
        .expect("deadline");
    assert_eq!(preview.display, "16 Feb 2025, 08:25 PM IST (UTC+05:30)");

    let outcome = ctx.submit_form(&mut form).await.expect("submitted");
    assert_eq!(outcome, SubmissionResult::Success(201));
    assert_eq!(notices.count(NoticeKind::Success), 1);
    assert_eq!(notices.count(NoticeKind::Error), 0);

    let requests = server.received_requests().await.expect("recording on");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).expect("json body");
    assert_eq!(body["title"], "Water plants");
    assert_eq!(body["description"], "Balcony and kitchen");
    assert_eq!(body["deadline"], "2025-02-16T14:55:00.000Z");
}

#[tokio::test]
async fn test_rejection_message_is_surfaced() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/task/create"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(serde_json::json!({ "message": "X" })),
        )
        .mount(&server)
        .await;

    let (ctx, notices) = form_context(&server.uri(), Some("token-abc"));
    let mut form = filled_form("Water plants", "Balcony");
    ctx.apply_deadline(&mut form, "2025-02-16T20:25");

    let outcome = ctx.submit_form(&mut form).await.expect("submitted");
    assert_eq!(outcome, SubmissionResult::ServerError("X".to_string()));
    assert_eq!(notices.count(NoticeKind::Error), 1);
    assert_eq!(notices.latest().map(|n| n.message), Some("X".to_string()));
}

#[tokio::test]
async fn test_unreachable_server_gives_network_notice() {
    let (ctx, notices) = form_context("http://127.0.0.1:1", Some("token-abc"));
    let mut form = filled_form("Water plants", "Balcony");
    ctx.apply_deadline(&mut form, "2025-02-16T20:25");

    let outcome = ctx.submit_form(&mut form).await.expect("submitted");
    assert_eq!(outcome, SubmissionResult::NetworkError);
    assert_eq!(
        notices.latest().map(|n| n.message),
        Some("Network error: Please check your internet connection".to_string())
    );
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let (ctx, notices) = form_context(&server.uri(), None);
    let mut form = filled_form("Water plants", "Balcony");
    ctx.apply_deadline(&mut form, "2025-02-16T20:25");

    let outcome = ctx.submit_form(&mut form).await.expect("attempted");
    assert!(matches!(outcome, SubmissionResult::ClientError(_)));
    assert_eq!(notices.count(NoticeKind::Error), 1);
}

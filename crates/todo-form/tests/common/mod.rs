/*
[INPUT]:  Test setup needs
[OUTPUT]: Shared helpers for todo-form integration tests
[POS]:    Test utilities
[UPDATE]: When adding shared fixtures
*/

#![allow(dead_code)]

use std::path::PathBuf;

use todo_adapter::{AccessToken, TodoClient};
use todo_form::{DisplayZone, FormContext, NoticeLog, TaskSubmitter};
use wiremock::MockServer;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Form context pointed at `base_url`, reporting into the returned log
pub fn form_context(base_url: &str, token: Option<&str>) -> (FormContext<NoticeLog>, NoticeLog) {
    let notices = NoticeLog::new();
    let client = TodoClient::new(base_url).expect("client init");
    let submitter = TaskSubmitter::new(client, token.and_then(AccessToken::new), notices.clone());
    (
        FormContext::from_parts(submitter, DisplayZone::default()),
        notices,
    )
}

/// Fresh directory under the system temp dir
pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{prefix}-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

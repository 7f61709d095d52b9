/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for todo-adapter tests

use chrono::{TimeZone, Utc};
use todo_adapter::{AccessToken, CreateTaskRequest};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock bearer token for testing
pub fn mock_access_token() -> AccessToken {
    AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature")
        .expect("fixture token is not blank")
}

/// A request whose deadline is 2025-02-16 20:25 IST
pub fn sample_request() -> CreateTaskRequest {
    CreateTaskRequest {
        title: "Pay electricity bill".to_string(),
        description: "Due before the weekend".to_string(),
        deadline: Utc.with_ymd_and_hms(2025, 2, 16, 14, 55, 0).unwrap(),
    }
}

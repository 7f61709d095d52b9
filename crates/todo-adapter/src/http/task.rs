/*
[INPUT]:  Task create requests and bearer token
[OUTPUT]: Created task confirmation or classified submission outcome
[POS]:    HTTP layer - task endpoints (require bearer auth)
[UPDATE]: When adding task endpoints or changing outcome classification
*/

use reqwest::Method;
use tracing::{debug, warn};

use crate::auth::AccessToken;
use crate::http::{ErrorTier, Result, TodoClient, TodoError};
use crate::types::{ApiErrorBody, CreateTaskRequest, CreatedTask};

pub const CREATE_TASK_PATH: &str = "/api/task/create";

pub const SUCCESS_MESSAGE: &str = "Task added successfully";
pub const SERVER_ERROR_FALLBACK: &str = "An error occurred on the server";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error: Please check your internet connection";
pub const CLIENT_ERROR_FALLBACK: &str = "An unexpected error occurred";

impl TodoClient {
    /// Create a task
    ///
    /// POST /api/task/create
    /// Requires: Authorization header
    pub async fn create_task(
        &self,
        req: &CreateTaskRequest,
        token: &AccessToken,
    ) -> Result<CreatedTask> {
        let response = self
            .authed_request(Method::POST, CREATE_TASK_PATH, token)?
            .json(req)
            .send()
            .await
            .map_err(TodoError::from_send_error)?;
        let status = response.status();
        // The status is the verdict; an unreadable body does not change it.
        let text = response.text().await.unwrap_or_default();

        if status.is_success() {
            debug!(status = status.as_u16(), "task created");
            return Ok(CreatedTask {
                status: status.as_u16(),
                body: serde_json::from_str(&text).ok(),
            });
        }

        warn!(status = status.as_u16(), body = %text, "server rejected task");
        Err(TodoError::server_error(status, ApiErrorBody::message_from(&text)))
    }

    /// Create a task and classify the outcome. Never fails.
    pub async fn submit_task(
        &self,
        req: &CreateTaskRequest,
        token: Option<&AccessToken>,
    ) -> SubmissionResult {
        let result = match token {
            Some(token) => self.create_task(req, token).await,
            None => Err(TodoError::MissingToken),
        };
        SubmissionResult::from(result)
    }
}

/// Outcome of one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(u16),
    ServerError(String),
    NetworkError,
    ClientError(String),
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }

    /// User-facing text for this outcome
    pub fn message(&self) -> &str {
        match self {
            SubmissionResult::Success(_) => SUCCESS_MESSAGE,
            SubmissionResult::ServerError(message) | SubmissionResult::ClientError(message) => {
                message.as_str()
            }
            SubmissionResult::NetworkError => NETWORK_ERROR_MESSAGE,
        }
    }
}

impl From<Result<CreatedTask>> for SubmissionResult {
    fn from(result: Result<CreatedTask>) -> Self {
        match result {
            Ok(created) => SubmissionResult::Success(created.status),
            Err(err) => SubmissionResult::from(err),
        }
    }
}

impl From<TodoError> for SubmissionResult {
    fn from(err: TodoError) -> Self {
        match err.tier() {
            ErrorTier::Server => {
                let message = match err {
                    TodoError::Server { message, .. } => message,
                    _ => None,
                };
                SubmissionResult::ServerError(
                    message.unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()),
                )
            }
            ErrorTier::Network => {
                warn!(error = %err, "task request got no response");
                SubmissionResult::NetworkError
            }
            ErrorTier::Client => {
                warn!(error = %err, "task request could not be sent");
                let message = err.to_string();
                if message.trim().is_empty() {
                    SubmissionResult::ClientError(CLIENT_ERROR_FALLBACK.to_string())
                } else {
                    SubmissionResult::ClientError(message)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ClientConfig;
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_request() -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Ship release".to_string(),
            description: "Tag and publish 1.2".to_string(),
            deadline: Utc.with_ymd_and_hms(2025, 2, 16, 14, 55, 0).unwrap(),
        }
    }

    fn token() -> AccessToken {
        AccessToken::new("test-token").expect("token")
    }

    #[tokio::test]
    async fn test_create_task_sends_bearer_and_canonical_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/task/create"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "title": "Ship release",
                "description": "Tag and publish 1.2",
                "deadline": "2025-02-16T14:55:00.000Z",
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": "t-1" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri()).expect("client init");
        let created = client
            .create_task(&sample_request(), &token())
            .await
            .expect("create_task failed");

        assert_eq!(created.status, 201);
        assert_eq!(created.body, Some(serde_json::json!({ "id": "t-1" })));
    }

    #[rstest]
    #[case(400, r#"{"message":"Title already exists"}"#, "Title already exists")]
    #[case(401, r#"{"message":"Unauthorized"}"#, "Unauthorized")]
    #[case(500, r#"{"error":"boom"}"#, SERVER_ERROR_FALLBACK)]
    #[case(502, "<html>Bad Gateway</html>", SERVER_ERROR_FALLBACK)]
    #[tokio::test]
    async fn test_non_success_status_is_server_error(
        #[case] status: u16,
        #[case] body: &'static str,
        #[case] expected: &'static str,
    ) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/task/create"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri()).expect("client init");
        let outcome = client.submit_task(&sample_request(), Some(&token())).await;

        assert_eq!(outcome, SubmissionResult::ServerError(expected.to_string()));
        assert_eq!(outcome.message(), expected);
    }

    #[tokio::test]
    async fn test_other_success_status_counts_as_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/task/create"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri()).expect("client init");
        let outcome = client.submit_task(&sample_request(), Some(&token())).await;
        assert_eq!(outcome, SubmissionResult::Success(200));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let client = TodoClient::new(&format!("http://{addr}")).expect("client init");
        let outcome = client.submit_task(&sample_request(), Some(&token())).await;

        assert_eq!(outcome, SubmissionResult::NetworkError);
        assert_eq!(outcome.message(), NETWORK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_timeout_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let config = ClientConfig {
            timeout: Some(Duration::from_millis(100)),
            ..ClientConfig::default()
        };
        let client = TodoClient::with_config(config, &server.uri()).expect("client init");
        let outcome = client.submit_task(&sample_request(), Some(&token())).await;
        assert_eq!(outcome, SubmissionResult::NetworkError);
    }

    #[tokio::test]
    async fn test_missing_token_is_client_error_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let client = TodoClient::new(&server.uri()).expect("client init");
        let outcome = client.submit_task(&sample_request(), None).await;

        match outcome {
            SubmissionResult::ClientError(message) => assert!(message.contains("access token")),
            other => panic!("Expected ClientError, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_base_url_is_client_error() {
        let client = TodoClient::new("::not-a-url::").expect("client init");
        let outcome = client.submit_task(&sample_request(), Some(&token())).await;

        match outcome {
            SubmissionResult::ClientError(message) => assert!(message.starts_with("Invalid URL")),
            other => panic!("Expected ClientError, got {other:?}"),
        }
    }
}

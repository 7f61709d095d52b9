/*
[INPUT]:  Base URL and access token from the environment
[OUTPUT]: Submission outcome for one sample task
[POS]:    Examples - task creation
[UPDATE]: When task API changes
*/

use chrono::{Duration, Utc};
use todo_adapter::http::task::SUCCESS_MESSAGE;
use todo_adapter::*;

/// Example: create one task against a running API
///
/// TODO_BASE_URL defaults to http://localhost:8000, TODO_TOKEN must be set.
#[tokio::main]
async fn main() {
    println!("=== Create Task Example ===\n");

    let base_url =
        std::env::var("TODO_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());
    let token = std::env::var("TODO_TOKEN").ok().and_then(AccessToken::new);

    let client = match TodoClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}", client.base_url());

    let req = CreateTaskRequest {
        title: "Example task".to_string(),
        description: "Created by the adapter example".to_string(),
        deadline: Utc::now() + Duration::days(1),
    };
    println!("  deadline on the wire: {}", to_iso_string(&req.deadline));

    match client.submit_task(&req, token.as_ref()).await {
        SubmissionResult::Success(status) => println!("\n✓ {} (HTTP {})", SUCCESS_MESSAGE, status),
        other => println!("\n✗ {}", other.message()),
    }
}

/*
[INPUT]:  Validated TaskDraft, injected client/token/notifier
[OUTPUT]: One HTTP submission, one notification, the classified outcome
[POS]:    Submission workflow - the boundary where network errors stop
[UPDATE]: When outcome handling or notification wording changes
*/

use todo_adapter::{AccessToken, CreateTaskRequest, SubmissionResult, TodoClient};
use tracing::{info, warn};

use crate::form::TaskDraft;
use crate::notify::{NoticeKind, Notifier};

/// Everything a submission needs, passed in explicitly
pub struct TaskSubmitter<N> {
    client: TodoClient,
    token: Option<AccessToken>,
    notifier: N,
}

impl<N: Notifier> TaskSubmitter<N> {
    pub fn new(client: TodoClient, token: Option<AccessToken>, notifier: N) -> Self {
        Self {
            client,
            token,
            notifier,
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Send the draft and report the outcome. Every outcome produces exactly
    /// one notification; nothing is retried.
    pub async fn submit(&self, draft: TaskDraft) -> SubmissionResult {
        let req = CreateTaskRequest::from(draft);
        info!(title = %req.title, base_url = %self.client.base_url(), "submitting task");

        let outcome = self.client.submit_task(&req, self.token.as_ref()).await;
        match &outcome {
            SubmissionResult::Success(status) => {
                info!(status, "task added");
                self.notifier.notify(NoticeKind::Success, outcome.message());
            }
            SubmissionResult::ServerError(message) => {
                warn!(%message, "server error while adding task");
                self.notifier.notify(NoticeKind::Error, outcome.message());
            }
            SubmissionResult::NetworkError => {
                warn!("network error while adding task");
                self.notifier.notify(NoticeKind::Error, outcome.message());
            }
            SubmissionResult::ClientError(message) => {
                warn!(%message, "could not send task");
                self.notifier.notify(NoticeKind::Error, outcome.message());
            }
        }
        outcome
    }
}

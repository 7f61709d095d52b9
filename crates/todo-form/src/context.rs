/*
[INPUT]:  AppConfig, injected token, a notifier
[OUTPUT]: FormContext binding normalizer, form and submitter together
[POS]:    Capability struct handed to every front-end at construction
[UPDATE]: When front-ends need new capabilities
*/

use anyhow::{Context, Result};
use todo_adapter::{AccessToken, SubmissionResult, TodoClient};
use tracing::debug;

use crate::config::AppConfig;
use crate::deadline::{self, DeadlineError, DisplayZone, NormalizedDeadline};
use crate::form::{DEADLINE_INVALID, Field, TaskForm};
use crate::notify::Notifier;
use crate::state::storage::LocalStorage;
use crate::submit::TaskSubmitter;

/// What a front-end needs: the submitter and the display zone
pub struct FormContext<N> {
    submitter: TaskSubmitter<N>,
    zone: DisplayZone,
}

impl<N: Notifier> FormContext<N> {
    pub fn new(config: &AppConfig, token: Option<AccessToken>, notifier: N) -> Result<Self> {
        let client = TodoClient::with_config(config.client_config(), &config.api.base_url)
            .context("build HTTP client")?;
        Ok(Self {
            submitter: TaskSubmitter::new(client, token, notifier),
            zone: config.display_zone()?,
        })
    }

    pub fn from_parts(submitter: TaskSubmitter<N>, zone: DisplayZone) -> Self {
        Self { submitter, zone }
    }

    pub fn zone(&self) -> &DisplayZone {
        &self.zone
    }

    pub fn submitter(&self) -> &TaskSubmitter<N> {
        &self.submitter
    }

    /// Normalize user input and store the canonical deadline in the form.
    ///
    /// Unparseable input is kept as the field value so the deadline rule keeps
    /// rejecting it on every submit attempt.
    pub fn apply_deadline(&self, form: &mut TaskForm, input: &str) -> Option<NormalizedDeadline> {
        match deadline::normalize(input, &self.zone) {
            Ok(normalized) => {
                form.set_value(Field::Deadline, normalized.canonical.clone());
                Some(normalized)
            }
            Err(DeadlineError::Empty) => {
                form.set_value(Field::Deadline, "");
                None
            }
            Err(err) => {
                debug!(error = %err, "deadline input rejected");
                form.set_value(Field::Deadline, input.trim());
                form.set_error(Field::Deadline, DEADLINE_INVALID);
                None
            }
        }
    }

    /// Validate and, if valid, submit. `None` means validation blocked it.
    pub async fn submit_form(&self, form: &mut TaskForm) -> Option<SubmissionResult> {
        let submitter = &self.submitter;
        form.submit(|draft| submitter.submit(draft)).await
    }
}

/// Token from an explicit override, else from storage under the configured key
pub async fn resolve_token(
    config: &AppConfig,
    explicit: Option<String>,
) -> Result<Option<AccessToken>> {
    if let Some(raw) = explicit {
        return Ok(AccessToken::new(raw));
    }
    let storage = open_storage(config).await?;
    Ok(storage.access_token(&config.storage.token_key).await)
}

pub async fn open_storage(config: &AppConfig) -> Result<LocalStorage> {
    match &config.storage.path {
        Some(path) => LocalStorage::open(path).await,
        None => LocalStorage::new().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeLog;

    fn context() -> FormContext<NoticeLog> {
        FormContext::new(&AppConfig::default(), None, NoticeLog::new()).expect("context")
    }

    #[test]
    fn test_apply_deadline_stores_canonical() {
        let ctx = context();
        let mut form = TaskForm::new();
        let normalized = ctx
            .apply_deadline(&mut form, "2025-02-16T20:25")
            .expect("normalized");
        assert_eq!(form.value(Field::Deadline), "2025-02-16T14:55:00.000Z");
        assert_ne!(form.value(Field::Deadline), normalized.display);
    }

    #[test]
    fn test_apply_deadline_rejects_garbage() {
        let ctx = context();
        let mut form = TaskForm::new();
        ctx.apply_deadline(&mut form, "2025-02-16T20:25");
        assert!(ctx.apply_deadline(&mut form, "tomorrow-ish").is_none());
        assert_eq!(form.error(Field::Deadline), Some(DEADLINE_INVALID));

        form.set_value(Field::Title, "t");
        form.set_value(Field::Description, "d");
        assert!(form.validate().is_none());
        assert_eq!(form.error(Field::Deadline), Some(DEADLINE_INVALID));
    }

    #[tokio::test]
    async fn test_resolve_token_prefers_explicit() {
        let mut config = AppConfig::default();
        config.storage.path = Some(
            std::env::temp_dir()
                .join(format!("todo-form-ctx-{}", uuid::Uuid::new_v4()))
                .join("local_storage.json"),
        );
        let token = resolve_token(&config, Some("explicit".to_string()))
            .await
            .expect("resolve");
        assert_eq!(token.map(|t| t.as_str().to_string()), Some("explicit".to_string()));

        let token = resolve_token(&config, None).await.expect("resolve");
        assert!(token.is_none());
    }
}

/*
[INPUT]:  Title, description and deadline given as CLI flags
[OUTPUT]: One submission (or a dry-run payload preview)
[POS]:    CLI one-shot add command
[UPDATE]: When the add flags or dry-run output change
*/

use anyhow::{Context, Result, bail};
use console::style;
use todo_adapter::CreateTaskRequest;
use todo_form::{ConsoleNotifier, Field, FormContext, TaskForm};
use tracing::info;

use super::print_form_errors;

pub struct AddRequest {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub dry_run: bool,
}

pub async fn run_add(ctx: &FormContext<ConsoleNotifier>, request: AddRequest) -> Result<()> {
    let mut form = TaskForm::new();
    form.set_value(Field::Title, request.title);
    form.set_value(Field::Description, request.description);
    if let Some(normalized) = ctx.apply_deadline(&mut form, &request.deadline) {
        println!(
            "{} {}",
            style("Deadline:").dim(),
            style(&normalized.display).cyan()
        );
    }

    if request.dry_run {
        let Some(draft) = form.validate() else {
            print_form_errors(&form);
            bail!("form is invalid");
        };
        let payload = serde_json::to_string_pretty(&CreateTaskRequest::from(draft))
            .context("serialize payload")?;
        info!("dry-run requested; payload validated");
        println!("{payload}");
        return Ok(());
    }

    if !ctx.submitter().has_token() {
        println!(
            "{}",
            style("No access token found; run `todo-form token set <TOKEN>` first.").yellow()
        );
    }

    match ctx.submit_form(&mut form).await {
        None => {
            print_form_errors(&form);
            bail!("form is invalid")
        }
        Some(outcome) if outcome.is_success() => Ok(()),
        Some(outcome) => bail!("task was not added: {}", outcome.message()),
    }
}

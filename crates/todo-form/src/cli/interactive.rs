/*
[INPUT]:  User input via dialoguer prompts
[OUTPUT]: Tasks submitted one form at a time, errors re-prompted
[POS]:    CLI interactive flow
[UPDATE]: When form fields or prompt wording change
*/

use anyhow::Result;
use chrono::Utc;
use console::style;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};
use todo_form::deadline;
use todo_form::{ConsoleNotifier, Field, FormContext, TaskForm};

use super::print_form_errors;

pub async fn run_interactive(ctx: &FormContext<ConsoleNotifier>) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Add New TODO").bold().cyan());

    if !ctx.submitter().has_token() {
        println!(
            "{}",
            style("No access token found; submissions will be rejected until one is set.")
                .yellow()
        );
    }

    loop {
        add_one_task(ctx, &theme).await?;

        let again = Confirm::with_theme(&theme)
            .with_prompt("Add another task?")
            .default(false)
            .interact()?;
        if !again {
            return Ok(());
        }
    }
}

async fn add_one_task(ctx: &FormContext<ConsoleNotifier>, theme: &ColorfulTheme) -> Result<()> {
    let mut form = TaskForm::new();
    let mut deadline_input = deadline::default_input_value(Utc::now(), ctx.zone());
    let mut pending: Vec<Field> = Field::ALL.to_vec();

    loop {
        for field in &pending {
            match field {
                Field::Title | Field::Description => {
                    let value = prompt_text(theme, field.label(), form.value(*field))?;
                    form.set_value(*field, value);
                }
                Field::Deadline => {
                    let prompt = format!("Deadline (YYYY-MM-DDTHH:MM, {})", ctx.zone().label());
                    deadline_input = prompt_text(theme, &prompt, &deadline_input)?;
                    if let Some(normalized) = ctx.apply_deadline(&mut form, &deadline_input) {
                        println!(
                            "  {} {}  {}",
                            style("→").dim(),
                            style(&normalized.display).cyan(),
                            style(format!("({})", normalized.canonical)).dim()
                        );
                    }
                }
            }
        }

        match ctx.submit_form(&mut form).await {
            None => {
                print_form_errors(&form);
                pending = form.errors().map(|(field, _)| field).collect();
            }
            // The notifier has already reported the outcome.
            Some(_) => return Ok(()),
        }
    }
}

fn prompt_text(theme: &ColorfulTheme, prompt: &str, initial: &str) -> Result<String> {
    let value: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/*
[INPUT]:  Parsed CLI arguments and a built FormContext
[OUTPUT]: Prompt-driven and one-shot front-ends for the add-task form
[POS]:    CLI front-end layer
[UPDATE]: When adding subcommands
*/

pub mod add;
pub mod interactive;
pub mod token;

use console::style;
use todo_form::TaskForm;

/// Print inline field errors, one per line, in field order
pub(crate) fn print_form_errors(form: &TaskForm) {
    for (field, message) in form.errors() {
        eprintln!(
            "  {} {}",
            style(format!("{}:", field.label())).red().bold(),
            style(message).red()
        );
    }
}

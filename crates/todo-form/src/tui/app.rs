/*
[INPUT]:  Key-driven edits, FormContext for normalization, notice log
[OUTPUT]: AppState holding raw inputs, form errors, focus and preview
[POS]:    TUI app state for the add-task form
[UPDATE]: When fields, focus order or submit flow change
*/

use chrono::Utc;
use todo_form::deadline::{self, NormalizedDeadline};
use todo_form::{Field, FormContext, Notice, NoticeLog, TaskForm};

/// Focusable elements, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Input(Field),
    Submit,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::Input(Field::Title),
        Focus::Input(Field::Description),
        Focus::Input(Field::Deadline),
        Focus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }
}

pub(super) struct AppState {
    pub(super) form: TaskForm,
    title: String,
    description: String,
    deadline_input: String,
    pub(super) focus: Focus,
    pub(super) preview: Option<NormalizedDeadline>,
    pub(super) submit_requested: bool,
    pub(super) submitting: bool,
    notices: NoticeLog,
}

impl AppState {
    pub(super) fn new(ctx: &FormContext<NoticeLog>, notices: NoticeLog) -> Self {
        let mut app = Self {
            form: TaskForm::new(),
            title: String::new(),
            description: String::new(),
            deadline_input: String::new(),
            focus: Focus::Input(Field::Title),
            preview: None,
            submit_requested: false,
            submitting: false,
            notices,
        };
        app.reset(ctx);
        app
    }

    /// Fresh form session with the deadline pre-filled to now
    pub(super) fn reset(&mut self, ctx: &FormContext<NoticeLog>) {
        self.form.reset();
        self.title.clear();
        self.description.clear();
        self.deadline_input = deadline::default_input_value(Utc::now(), ctx.zone());
        self.focus = Focus::Input(Field::Title);
        self.sync_deadline(ctx);
    }

    pub(super) fn input(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Deadline => &self.deadline_input,
        }
    }

    fn input_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Deadline => &mut self.deadline_input,
        }
    }

    pub(super) fn focus_next(&mut self) {
        let next = (self.focus.index() + 1) % Focus::ORDER.len();
        self.focus = Focus::ORDER[next];
    }

    pub(super) fn focus_prev(&mut self) {
        let len = Focus::ORDER.len();
        let prev = (self.focus.index() + len - 1) % len;
        self.focus = Focus::ORDER[prev];
    }

    pub(super) fn push_char(&mut self, ctx: &FormContext<NoticeLog>, ch: char) {
        if let Focus::Input(field) = self.focus {
            self.input_mut(field).push(ch);
            self.after_edit(ctx, field);
        }
    }

    pub(super) fn pop_char(&mut self, ctx: &FormContext<NoticeLog>) {
        if let Focus::Input(field) = self.focus {
            self.input_mut(field).pop();
            self.after_edit(ctx, field);
        }
    }

    fn after_edit(&mut self, ctx: &FormContext<NoticeLog>, field: Field) {
        match field {
            Field::Deadline => self.sync_deadline(ctx),
            Field::Title | Field::Description => {
                let value = self.input(field).to_string();
                self.form.set_value(field, value);
            }
        }
    }

    /// Re-run the normalizer on the deadline text, like an input change handler
    fn sync_deadline(&mut self, ctx: &FormContext<NoticeLog>) {
        let input = self.deadline_input.clone();
        self.preview = ctx.apply_deadline(&mut self.form, &input);
    }

    pub(super) fn latest_notice(&self) -> Option<Notice> {
        self.notices.latest()
    }

    pub(super) async fn submit(&mut self, ctx: &FormContext<NoticeLog>) {
        self.submit_requested = false;
        match ctx.submit_form(&mut self.form).await {
            None => {
                if let Some((field, _)) = self.form.errors().next() {
                    self.focus = Focus::Input(field);
                }
            }
            // The notice log already holds the outcome message.
            Some(outcome) if outcome.is_success() => self.reset(ctx),
            Some(_) => {}
        }
    }
}

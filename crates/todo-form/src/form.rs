/*
[INPUT]:  Field values set by a front-end, declared validation rules
[OUTPUT]: Per-field errors, or a validated TaskDraft handed to a submit handler
[POS]:    Form controller - no network or timezone logic here
[UPDATE]: When form fields or validation rules change
*/

use std::collections::BTreeMap;
use std::future::Future;

use chrono::{DateTime, Utc};
use todo_adapter::{CreateTaskRequest, parse_iso_string};
use tracing::debug;

/// Fields of the add-task form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Description,
    Deadline,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Description, Field::Deadline];

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Deadline => "deadline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Description => "Description",
            Field::Deadline => "Deadline",
        }
    }
}

/// Validator returning an error message for a non-empty value
pub type Validator = fn(&str) -> Option<String>;

/// Validation rules declared for one field
#[derive(Debug, Clone, Default)]
pub struct FieldRules {
    /// Message shown when the value is empty or whitespace-only
    pub required: Option<String>,
    pub validate: Option<Validator>,
}

impl FieldRules {
    pub fn required(message: impl Into<String>) -> Self {
        Self {
            required: Some(message.into()),
            validate: None,
        }
    }

    pub fn with_validator(mut self, validate: Validator) -> Self {
        self.validate = Some(validate);
        self
    }

    fn check(&self, value: &str) -> Option<String> {
        if value.trim().is_empty() {
            return self.required.clone();
        }
        self.validate.and_then(|validate| validate(value))
    }
}

/// A fully validated task, ready for submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: DateTime<Utc>,
}

impl From<TaskDraft> for CreateTaskRequest {
    fn from(draft: TaskDraft) -> Self {
        CreateTaskRequest {
            title: draft.title,
            description: draft.description,
            deadline: draft.deadline,
        }
    }
}

pub const DEADLINE_INVALID: &str = "Deadline must be a valid date and time";

fn canonical_deadline(value: &str) -> Option<String> {
    match parse_iso_string(value) {
        Some(_) => None,
        None => Some(DEADLINE_INVALID.to_string()),
    }
}

/// Form state for the add-task dialog.
///
/// The deadline value must already be the canonical UTC string produced by
/// the normalizer; anything else fails validation.
#[derive(Debug, Clone)]
pub struct TaskForm {
    values: BTreeMap<Field, String>,
    rules: BTreeMap<Field, FieldRules>,
    errors: BTreeMap<Field, String>,
}

impl TaskForm {
    /// Form with the standard rules registered on every field
    pub fn new() -> Self {
        let mut form = Self {
            values: BTreeMap::new(),
            rules: BTreeMap::new(),
            errors: BTreeMap::new(),
        };
        form.register(Field::Title, FieldRules::required("Title is required"));
        form.register(
            Field::Description,
            FieldRules::required("Description is required"),
        );
        form.register(
            Field::Deadline,
            FieldRules::required("Deadline is required").with_validator(canonical_deadline),
        );
        form
    }

    pub fn register(&mut self, field: Field, rules: FieldRules) {
        self.rules.insert(field, rules);
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
        self.errors.remove(&field);
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Record an error coming from outside the rules, e.g. a failed parse
    pub fn set_error(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn errors(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    /// Run every rule. Returns the draft only if all of them pass.
    pub fn validate(&mut self) -> Option<TaskDraft> {
        self.errors.clear();
        for (field, rules) in &self.rules {
            let value = self.values.get(field).map(String::as_str).unwrap_or("");
            if let Some(message) = rules.check(value) {
                self.errors.insert(*field, message);
            }
        }

        if !self.errors.is_empty() {
            let fields: Vec<&str> = self.errors.keys().map(|field| field.name()).collect();
            debug!(fields = ?fields, "form validation failed");
            return None;
        }

        let deadline = match parse_iso_string(self.value(Field::Deadline)) {
            Some(deadline) => deadline,
            None => {
                self.errors.insert(Field::Deadline, DEADLINE_INVALID.to_string());
                return None;
            }
        };

        Some(TaskDraft {
            title: self.value(Field::Title).trim().to_string(),
            description: self.value(Field::Description).trim().to_string(),
            deadline,
        })
    }

    /// Invoke `handler` with the draft when the form is valid.
    ///
    /// Returns `None` without calling `handler` if any rule fails.
    pub async fn submit<F, Fut>(&mut self, handler: F) -> Option<Fut::Output>
    where
        F: FnOnce(TaskDraft) -> Fut,
        Fut: Future,
    {
        let draft = self.validate()?;
        Some(handler(draft).await)
    }
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

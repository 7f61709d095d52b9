/*
[INPUT]:  Public API exports for todo-form crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod context;
pub mod deadline;
pub mod form;
pub mod notify;
pub mod state;
pub mod submit;

// Re-export main types for convenience
pub use config::AppConfig;
pub use context::FormContext;
pub use deadline::{DisplayZone, NormalizedDeadline};
pub use form::{Field, FieldRules, TaskDraft, TaskForm};
pub use notify::{ConsoleNotifier, Notice, NoticeKind, NoticeLog, Notifier};
pub use submit::TaskSubmitter;

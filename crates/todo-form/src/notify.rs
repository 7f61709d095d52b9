/*
[INPUT]:  Success/error notices raised by the submission workflow
[OUTPUT]: Messages surfaced on the console or kept for a status line
[POS]:    Notification sink - owned by the front-end, called by the form
[UPDATE]: When adding notification targets
*/

use std::sync::{Arc, Mutex};

use console::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Something that can show a notice to the user
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, kind: NoticeKind, message: &str) {
        (**self).notify(kind, message);
    }
}

/// Prints notices to stdout/stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Success => println!("{} {}", style("✓").green().bold(), message),
            NoticeKind::Error => eprintln!("{} {}", style("✗").red().bold(), style(message).red()),
        }
    }
}

/// Keeps every notice in memory; the TUI renders the latest one
#[derive(Debug, Default, Clone)]
pub struct NoticeLog {
    entries: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Notice> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn latest(&self) -> Option<Notice> {
        self.entries
            .lock()
            .ok()
            .and_then(|guard| guard.last().cloned())
    }

    pub fn count(&self, kind: NoticeKind) -> usize {
        self.entries
            .lock()
            .map(|guard| guard.iter().filter(|notice| notice.kind == kind).count())
            .unwrap_or(0)
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, kind: NoticeKind, message: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(Notice {
                kind,
                message: message.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_log_records_in_order() {
        let log = NoticeLog::new();
        assert!(log.latest().is_none());

        log.notify(NoticeKind::Error, "first");
        log.notify(NoticeKind::Success, "second");

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.count(NoticeKind::Error), 1);
        assert_eq!(
            log.latest(),
            Some(Notice {
                kind: NoticeKind::Success,
                message: "second".to_string(),
            })
        );
    }

    #[test]
    fn test_clones_share_entries() {
        let log = NoticeLog::new();
        let shared: Arc<dyn Notifier> = Arc::new(log.clone());
        shared.notify(NoticeKind::Success, "done");
        assert_eq!(log.count(NoticeKind::Success), 1);
    }
}

/*
[INPUT]:  Crossterm key events
[OUTPUT]: Form edits, focus moves, submit requests, quit
[POS]:    TUI key handling
[UPDATE]: When keybindings change
*/

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use todo_form::{FormContext, NoticeLog};

use super::app::{AppState, Focus};

/// Handles key events for the TUI.
///
/// Returns `true` if quit is requested, `false` otherwise.
pub(super) fn handle_key_event(
    app: &mut AppState,
    ctx: &FormContext<NoticeLog>,
    key: KeyEvent,
) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => true,
            KeyCode::Char('s') => {
                app.submit_requested = true;
                false
            }
            _ => false,
        };
    }

    match key.code {
        KeyCode::Esc => true,
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            false
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            false
        }
        KeyCode::Enter => {
            if app.focus == Focus::Submit {
                app.submit_requested = true;
            } else {
                app.focus_next();
            }
            false
        }
        KeyCode::Backspace => {
            app.pop_char(ctx);
            false
        }
        KeyCode::Char(ch) => {
            app.push_char(ctx, ch);
            false
        }
        _ => false,
    }
}

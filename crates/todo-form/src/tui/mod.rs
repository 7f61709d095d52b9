/*
[INPUT]:  FormContext with a NoticeLog notifier, crossterm input
[OUTPUT]: Full-screen add-task form with inline errors and a status line
[POS]:    TUI module for the todo-form binary
[UPDATE]: When changing TUI layout, keybindings, or the event loop
*/

mod app;
mod events;
mod terminal;
mod ui;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event as CrosstermEvent, KeyEventKind};
use ratatui::style::{Color, Modifier, Style};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use todo_form::{FormContext, NoticeLog};

use app::AppState;
use events::handle_key_event;
use terminal::TerminalGuard;

const UI_TICK_INTERVAL: Duration = Duration::from_millis(250);
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

enum UiEvent {
    Input(CrosstermEvent),
}

pub(crate) fn border_style() -> Style {
    Style::default().fg(Color::Magenta)
}

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub(crate) async fn run_tui(ctx: &FormContext<NoticeLog>, notices: NoticeLog) -> Result<()> {
    let mut terminal = TerminalGuard::new()?;
    let mut app = AppState::new(ctx, notices);
    info!(zone = ctx.zone().label(), "tui started");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let input_shutdown = CancellationToken::new();
    let input_token = input_shutdown.clone();
    tokio::task::spawn_blocking(move || {
        while !input_token.is_cancelled() {
            if crossterm::event::poll(INPUT_POLL_INTERVAL).unwrap_or(false) {
                if let Ok(event) = crossterm::event::read() {
                    if event_tx.send(UiEvent::Input(event)).is_err() {
                        break;
                    }
                }
            }
        }
    });

    let mut tick = tokio::time::interval(UI_TICK_INTERVAL);
    let mut should_quit = false;
    terminal.draw(|frame| ui::draw_ui(frame, &app, ctx))?;

    while !should_quit {
        tokio::select! {
            _ = tick.tick() => {}
            maybe_event = event_rx.recv() => {
                match maybe_event {
                    Some(UiEvent::Input(CrosstermEvent::Key(key)))
                        if key.kind == KeyEventKind::Press =>
                    {
                        should_quit = handle_key_event(&mut app, ctx, key);
                    }
                    Some(_) => {}
                    None => should_quit = true,
                }
            }
        }

        if app.submit_requested && !should_quit {
            app.submitting = true;
            terminal.draw(|frame| ui::draw_ui(frame, &app, ctx))?;
            debug!("submitting form from tui");
            app.submit(ctx).await;
            app.submitting = false;
        }

        terminal.draw(|frame| ui::draw_ui(frame, &app, ctx))?;
    }

    input_shutdown.cancel();
    info!("tui stopped");
    Ok(())
}

/*
[INPUT]:  AppState (raw inputs, errors, focus, preview), latest notice
[OUTPUT]: Centered "Add New TODO" form with inline errors and status line
[POS]:    TUI form renderer
[UPDATE]: When form fields or the status line change
*/

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use todo_form::{Field, FormContext, NoticeKind, NoticeLog};

use super::centered_rect;
use crate::tui::app::{AppState, Focus};
use crate::tui::{border_style, header_style};

const LABEL_WIDTH: usize = 14;

pub(in crate::tui) fn draw_ui(frame: &mut Frame, app: &AppState, ctx: &FormContext<NoticeLog>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(area);

    draw_status(frame, chunks[1], app);

    let popup_area = centered_rect(80, 80, chunks[0]);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Add New TODO ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut content = vec![Line::from("")];
    for field in Field::ALL {
        push_field(&mut content, app, field);
    }

    let preview = match &app.preview {
        Some(normalized) => Line::from(vec![
            Span::styled(pad("Due"), Style::default().fg(Color::Gray)),
            Span::styled(normalized.display.clone(), Style::default().fg(Color::Cyan)),
        ]),
        None => Line::from(Span::styled(
            format!("{}(enter YYYY-MM-DDTHH:MM, {})", pad("Due"), ctx.zone().label()),
            Style::default().fg(Color::DarkGray),
        )),
    };
    content.push(preview);
    content.push(Line::from(""));

    let button = if app.submitting {
        Span::styled(" Adding… ", Style::default().fg(Color::DarkGray))
    } else if app.focus == Focus::Submit {
        Span::styled(" [ Add Task ] ", header_style())
    } else {
        Span::styled(" [ Add Task ] ", Style::default().fg(Color::Gray))
    };
    content.push(Line::from(button).alignment(Alignment::Center));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Tab/↑↓ switch fields  Enter next/submit  Ctrl+S submit  Esc quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}

fn push_field(content: &mut Vec<Line<'static>>, app: &AppState, field: Field) {
    let focused = app.focus == Focus::Input(field);
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    content.push(Line::from(vec![
        Span::styled(pad(field.label()), label_style),
        Span::raw(app.input(field).to_string()),
        if focused {
            Span::styled(" █", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("")
        },
    ]));

    match app.form.error(field) {
        Some(error) => content.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled(error.to_string(), Style::default().fg(Color::Red)),
        ])),
        None => content.push(Line::from("")),
    }
}

fn draw_status(frame: &mut Frame, area: ratatui::layout::Rect, app: &AppState) {
    let line = match app.latest_notice() {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Success => Color::Green,
                NoticeKind::Error => Color::Red,
            };
            Line::from(Span::styled(notice.message, Style::default().fg(color)))
        }
        None => Line::from(Span::styled("Ready", Style::default().fg(Color::DarkGray))),
    };

    let status = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title("Status"),
    );
    frame.render_widget(status, area);
}

fn pad(label: &str) -> String {
    format!("{:<width$}", format!("{label}:"), width = LABEL_WIDTH)
}

//! Modal components

use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::colors;

const PROMPT_WIDTH: u16 = 60;

/// Draw the active modal, if any
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Prompt {
            message,
            expects_text,
            input,
        } => render_prompt(frame, message, *expects_text, input),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// Centered area of at most `width` x `height`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_prompt(frame: &mut Frame, message: &str, expects_text: bool, input: &str) {
    let texts = t();
    let message_rows = u16::try_from(message.lines().count()).unwrap_or(u16::MAX);
    // borders + message + blank + label/input + blank + hint
    let input_rows = if expects_text { 3 } else { 0 };
    let height = message_rows.saturating_add(input_rows + 4);
    let area = centered_rect(PROMPT_WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.modal.prompt_title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = message
        .lines()
        .map(|l| Line::styled(l.to_string(), Style::default().fg(Color::White)))
        .collect();
    lines.push(Line::from(""));

    if expects_text {
        lines.push(Line::styled(
            texts.modal.input_label,
            Style::default().fg(Color::Gray),
        ));
        lines.push(Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Cyan)),
            Span::styled(
                input.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(""));
    }

    let hint = if expects_text {
        format!(
            "{} {} · {} {}",
            texts.hints.keys.enter,
            texts.hints.actions.submit,
            texts.hints.keys.esc,
            texts.common.cancel
        )
    } else {
        format!("{} {}", texts.hints.keys.enter, texts.common.confirm)
    };
    lines.push(Line::styled(hint, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(lines), inner);

    if expects_text {
        // Cursor after the typed text; wide characters count double
        let input_row = inner.y + message_rows + 2;
        let typed = u16::try_from(input.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(2).saturating_add(typed);
        if x < inner.right() && input_row < inner.bottom() {
            frame.set_cursor_position(Position::new(x, input_row));
        }
    }
}

fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().error))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 1));
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            format!("{} / {}", t().hints.keys.esc, t().hints.keys.enter),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn render_help(frame: &mut Frame) {
    let help = &t().help;
    let area = centered_rect(60, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
    frame.render_widget(block, area);

    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        Line::styled(help.global_shortcuts, heading),
        Line::from(""),
        entry("Enter", help.actions.start_session),
        entry("?", help.title),
        entry("q", help.actions.quit),
        Line::from(""),
        Line::styled(help.results_shortcuts, heading),
        Line::from(""),
        entry("←→ h/l", help.actions.next_prev),
        entry("Tab", help.actions.switch_panel),
        entry("1", help.actions.procedures),
        entry("2", help.actions.products),
        entry("Esc", help.actions.back),
        Line::from(""),
        Line::styled(help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 40, 10));
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
    }
}

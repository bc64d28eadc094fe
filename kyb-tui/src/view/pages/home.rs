//! Home page

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let home = &t().home;

    let action = if app.session_active {
        Line::from(Span::styled(
            format!("  {}", home.session_in_progress),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            format!("  {}", home.start_hint),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    };

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", home.welcome_title),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", home.welcome_message),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        action,
    ];

    frame.render_widget(Paragraph::new(welcome), area);
}

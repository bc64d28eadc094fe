//! Bottom status bar

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Key hints for the current state
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    if app.modal.is_prompt() {
        hints.push((keys.enter, actions.submit));
        hints.push((keys.esc, t().common.cancel));
        return hints;
    }

    match app.current_page {
        Page::Home => {
            if !app.session_active {
                hints.push((keys.enter, actions.start));
            }
        }
        Page::Results => {
            hints.push((keys.arrows_lr, actions.navigate));
            hints.push((keys.tab, actions.switch_panel));
            hints.push((keys.sub_lists, actions.drill));
            hints.push((keys.esc, actions.back));
        }
    }

    hints.push(("?", actions.help));
    hints.push(("q", t().common.quit));
    hints
}

//! Results page: search summary over the two registry panels

use kyb_core::services::PanelFocus;
use kyb_core::types::{STEP_BRAND, STEP_COMPANY, STEP_RFC};
use kyb_core::SceneNode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, ResultsState};
use crate::view::components::scene;
use crate::view::theme::Styles;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(results) = &app.results else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(area);

    frame.render_widget(Paragraph::new(summary(results)), rows[0]);
    render_panels(results, frame, rows[1]);
}

fn summary(results: &ResultsState) -> Line<'static> {
    let texts = &t().results;
    let mut spans = vec![Span::styled(format!(" {}: ", texts.header), Styles::title())];

    for (label, step) in [
        (texts.company_field, STEP_COMPANY),
        (texts.rfc_field, STEP_RFC),
        (texts.brand_field, STEP_BRAND),
    ] {
        let value = results.collected.value(step).unwrap_or(texts.not_given);
        spans.push(Span::styled(format!("{label} "), Styles::muted()));
        spans.push(Span::styled(format!("{value}   "), Styles::text()));
    }

    Line::from(spans)
}

/// Root's panels side by side, ordered by their x offset.
fn render_panels(results: &ResultsState, frame: &mut Frame, area: Rect) {
    let browser = &results.browser;
    let mut panels: Vec<&SceneNode> = results
        .scene
        .children(browser.root())
        .filter(|n| n.visible)
        .collect();
    panels.sort_by_key(|n| n.position.x);
    if panels.is_empty() {
        return;
    }

    let count = u32::try_from(panels.len()).unwrap_or(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(panels.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (panel, column) in panels.iter().zip(columns.iter()) {
        let which = [PanelFocus::Company, PanelFocus::Brand]
            .into_iter()
            .find(|&w| browser.panel(w).node == panel.id);
        let focused = which == Some(browser.focus());
        let drilled = which
            .and_then(|w| browser.panel(w).navigator())
            .and_then(|nav| nav.drilled());

        scene::render(&results.scene, panel.id, focused, drilled, frame, *column);
    }
}

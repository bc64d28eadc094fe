//! Draws one result panel from the scene graph
//!
//! The panel's shown record screen (there is at most one) becomes the body,
//! a message text replaces it when the lookup gave nothing to browse, and
//! buttons form a key row at the bottom. Button `n` at column `x` is bound to
//! key `x + 1`.

use kyb_core::services::SubListKind;
use kyb_core::types::{NodeId, NodeKind};
use kyb_core::{SceneGraph, SceneNode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::view::theme::Styles;

pub fn render(
    scene: &SceneGraph,
    panel: NodeId,
    focused: bool,
    drilled: Option<SubListKind>,
    frame: &mut Frame,
    area: Rect,
) {
    let Some(node) = scene.node(panel) else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", node.label))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(if focused {
            Styles::border_focused()
        } else {
            Styles::border()
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buttons = button_row(scene, panel, drilled);
    let (body_area, buttons_area) = if buttons.spans.is_empty() {
        (inner, None)
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        (rows[0], Some(rows[1]))
    };

    frame.render_widget(
        Paragraph::new(body_lines(scene, panel)).wrap(Wrap { trim: false }),
        body_area,
    );
    if let Some(area) = buttons_area {
        frame.render_widget(Paragraph::new(buttons), area);
    }
}

/// Lines of the shown screen, or the panel's message.
fn body_lines(scene: &SceneGraph, panel: NodeId) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for child in scene.children(panel).filter(|n| n.visible) {
        match child.kind {
            NodeKind::Panel => {
                lines.push(Line::styled(child.label.clone(), Styles::muted()));
                lines.push(Line::from(""));
                lines.extend(
                    sorted_texts(scene, child.id)
                        .into_iter()
                        .map(|text| Line::styled(text.label.clone(), Styles::text())),
                );
            }
            NodeKind::Text => {
                lines.push(Line::from(""));
                lines.push(Line::styled(child.label.clone(), Styles::notice()));
            }
            NodeKind::Button => {}
        }
    }

    lines
}

fn sorted_texts(scene: &SceneGraph, screen: NodeId) -> Vec<&SceneNode> {
    let mut texts: Vec<&SceneNode> = scene
        .children(screen)
        .filter(|n| n.visible && n.kind == NodeKind::Text)
        .collect();
    texts.sort_by_key(|n| n.position.y);
    texts
}

fn button_row(scene: &SceneGraph, panel: NodeId, drilled: Option<SubListKind>) -> Line<'static> {
    let mut buttons: Vec<&SceneNode> = scene
        .children(panel)
        .filter(|n| n.visible && n.kind == NodeKind::Button)
        .collect();
    buttons.sort_by_key(|n| n.position.x);

    let mut spans = Vec::new();
    for button in buttons {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let active = drilled.is_some_and(|kind| kind.id() == button.name);
        spans.push(Span::styled(
            format!("[{}]", button.position.x + 1),
            Styles::hint_key(),
        ));
        spans.push(Span::styled(
            format!(" {}", button.label),
            if active { Styles::selected() } else { Styles::text() },
        ));
    }
    Line::from(spans)
}

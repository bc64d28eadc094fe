//! Result browser
//!
//! Builds the results scene for a [`JoinedResult`]: one panel per registry,
//! each holding either navigable record screens or a single message.

use serde::Serialize;

use crate::error::CoreResult;
use crate::services::navigator::HierarchicalNavigator;
use crate::services::screen_builder::{ScreenBuilder, SubListKind};
use crate::traits::SceneSurface;
use crate::types::{
    JoinedResult, LookupPayload, LookupResult, NodeId, NodeSpec, Offset, Unavailable,
};

/// Captions and messages used by the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserTexts {
    pub results_title: String,
    pub company_title: String,
    pub brand_title: String,
    pub company_record: String,
    pub brand_record: String,
    pub procedures: String,
    pub products_and_services: String,
    pub back: String,
    pub no_brand_query: String,
    pub lookup_failed: String,
    pub no_match: String,
    pub no_records: String,
    pub unexpected_status: String,
}

impl Default for BrowserTexts {
    fn default() -> Self {
        Self {
            results_title: "KYB results".to_string(),
            company_title: "Company registry".to_string(),
            brand_title: "Brand registry".to_string(),
            company_record: "Company".to_string(),
            brand_record: "Brand".to_string(),
            procedures: "Procedures".to_string(),
            products_and_services: "Products & services".to_string(),
            back: "Back".to_string(),
            no_brand_query: "No brand query performed".to_string(),
            lookup_failed: "Lookup failed".to_string(),
            no_match: "No match found".to_string(),
            no_records: "No records returned".to_string(),
            unexpected_status: "Unexpected registry status".to_string(),
        }
    }
}

impl BrowserTexts {
    pub fn sub_list_caption(&self, kind: SubListKind) -> &str {
        match kind {
            SubListKind::Procedures => &self.procedures,
            SubListKind::ProductsAndServices => &self.products_and_services,
        }
    }
}

/// Which panel receives navigation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelFocus {
    #[default]
    Company,
    Brand,
}

impl PanelFocus {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Company => Self::Brand,
            Self::Brand => Self::Company,
        }
    }
}

/// Body of a result panel.
#[derive(Debug)]
pub enum PanelContent {
    Records(HierarchicalNavigator),
    /// Text node explaining why there is nothing to browse
    Message { node: NodeId, text: String },
}

#[derive(Debug)]
pub struct ResultPanel {
    pub node: NodeId,
    pub content: PanelContent,
}

impl ResultPanel {
    pub fn navigator(&self) -> Option<&HierarchicalNavigator> {
        match &self.content {
            PanelContent::Records(nav) => Some(nav),
            PanelContent::Message { .. } => None,
        }
    }

    fn navigator_mut(&mut self) -> Option<&mut HierarchicalNavigator> {
        match &mut self.content {
            PanelContent::Records(nav) => Some(nav),
            PanelContent::Message { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.content {
            PanelContent::Message { text, .. } => Some(text),
            PanelContent::Records(_) => None,
        }
    }
}

/// The whole results view of one session.
///
/// Holds the ids of every node it owns; nothing is looked up by name.
#[derive(Debug)]
pub struct ResultBrowser {
    root: NodeId,
    company: ResultPanel,
    brand: ResultPanel,
    focus: PanelFocus,
}

impl ResultBrowser {
    /// Build the results scene.
    ///
    /// On a surface failure every node created so far is destroyed before
    /// the error is returned.
    pub fn build(
        joined: &JoinedResult,
        surface: &mut dyn SceneSurface,
        texts: &BrowserTexts,
    ) -> CoreResult<Self> {
        let root = surface.create_node(None, NodeSpec::panel("results", &texts.results_title))?;

        match Self::build_panels(root, joined, surface, texts) {
            Ok((company, brand)) => {
                let focus = if company.navigator().is_none() && brand.navigator().is_some() {
                    PanelFocus::Brand
                } else {
                    PanelFocus::Company
                };
                Ok(Self {
                    root,
                    company,
                    brand,
                    focus,
                })
            }
            Err(e) => {
                log::error!("Failed to build result browser: {e}");
                surface.destroy_node(root);
                Err(e)
            }
        }
    }

    fn build_panels(
        root: NodeId,
        joined: &JoinedResult,
        surface: &mut dyn SceneSurface,
        texts: &BrowserTexts,
    ) -> CoreResult<(ResultPanel, ResultPanel)> {
        let company_node = surface.create_node(
            Some(root),
            NodeSpec::panel("company", &texts.company_title).at(Offset::new(0, 0)),
        )?;
        let company = build_panel(
            company_node,
            &joined.first,
            surface,
            texts,
            &ScreenBuilder::new(&texts.company_record),
            false,
        )?;

        let brand_node = surface.create_node(
            Some(root),
            NodeSpec::panel("brand", &texts.brand_title).at(Offset::new(1, 0)),
        )?;
        let brand = build_panel(
            brand_node,
            &joined.second,
            surface,
            texts,
            &ScreenBuilder::new(&texts.brand_record)
                .with_sub_lists(&texts.procedures, &texts.products_and_services),
            true,
        )?;

        Ok((company, brand))
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn focus(&self) -> PanelFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: PanelFocus) {
        self.focus = focus;
    }

    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn panel(&self, which: PanelFocus) -> &ResultPanel {
        match which {
            PanelFocus::Company => &self.company,
            PanelFocus::Brand => &self.brand,
        }
    }

    fn focused_mut(&mut self) -> &mut ResultPanel {
        match self.focus {
            PanelFocus::Company => &mut self.company,
            PanelFocus::Brand => &mut self.brand,
        }
    }

    /// Navigator of the focused panel, if it shows records.
    pub fn focused_navigator(&self) -> Option<&HierarchicalNavigator> {
        self.panel(self.focus).navigator()
    }

    pub fn next(&mut self, surface: &mut dyn SceneSurface) {
        if let Some(nav) = self.focused_mut().navigator_mut() {
            nav.next(surface);
        }
    }

    pub fn prev(&mut self, surface: &mut dyn SceneSurface) {
        if let Some(nav) = self.focused_mut().navigator_mut() {
            nav.prev(surface);
        }
    }

    /// Activate the drill control of `kind` in the focused panel.
    pub fn toggle(&mut self, kind: SubListKind, surface: &mut dyn SceneSurface) -> bool {
        self.focused_mut()
            .navigator_mut()
            .is_some_and(|nav| nav.toggle(kind, surface))
    }

    /// Leave whatever drill is active in the focused panel.
    ///
    /// Returns `false` when there was nothing to leave.
    pub fn drill_out(&mut self, surface: &mut dyn SceneSurface) -> bool {
        self.focused_mut().navigator_mut().is_some_and(|nav| {
            nav.drilled()
                .is_some_and(|kind| nav.drill_out_of(kind, surface))
        })
    }

    /// Leave the active drill of both panels, focused or not.
    pub fn leave_drills(&mut self, surface: &mut dyn SceneSurface) -> bool {
        let mut left = false;
        for panel in [&mut self.company, &mut self.brand] {
            if let Some(nav) = panel.navigator_mut() {
                if let Some(kind) = nav.drilled() {
                    left |= nav.drill_out_of(kind, surface);
                }
            }
        }
        left
    }

    pub fn destroy(self, surface: &mut dyn SceneSurface) {
        surface.destroy_node(self.root);
    }
}

fn build_panel(
    panel: NodeId,
    lookup: &LookupResult,
    surface: &mut dyn SceneSurface,
    texts: &BrowserTexts,
    builder: &ScreenBuilder<'_>,
    with_controls: bool,
) -> CoreResult<ResultPanel> {
    let payload = match lookup {
        LookupResult::Ok(payload) if payload.is_ok() && !payload.records.is_empty() => payload,
        other => {
            let text = panel_message(other, texts);
            let node = surface.create_node(Some(panel), NodeSpec::text("message", text.as_str()))?;
            return Ok(ResultPanel {
                node: panel,
                content: PanelContent::Message { node, text },
            });
        }
    };

    let screens = builder.build(surface, panel, &payload.records)?;
    let Some(mut navigator) = HierarchicalNavigator::new(screens, surface) else {
        let text = texts.no_records.clone();
        let node = surface.create_node(Some(panel), NodeSpec::text("message", text.as_str()))?;
        return Ok(ResultPanel {
            node: panel,
            content: PanelContent::Message { node, text },
        });
    };
    navigator = navigator.with_back_caption(&texts.back);

    if with_controls {
        for (column, kind) in (0_i32..).zip(SubListKind::ALL) {
            let caption = texts.sub_list_caption(kind);
            let node = surface.create_node(
                Some(panel),
                NodeSpec::button(kind.id(), caption).at(Offset::new(column, 0)),
            )?;
            navigator.add_control(kind, node, caption);
        }
    }

    Ok(ResultPanel {
        node: panel,
        content: PanelContent::Records(navigator),
    })
}

/// Message shown in place of records.
fn panel_message(lookup: &LookupResult, texts: &BrowserTexts) -> String {
    match lookup {
        LookupResult::Ok(payload) => payload_message(payload, texts),
        LookupResult::Unavailable(Unavailable::NotRequested) => texts.no_brand_query.clone(),
        LookupResult::Unavailable(Unavailable::Failed(reason)) => {
            format!("{}: {reason}", texts.lookup_failed)
        }
    }
}

fn payload_message(payload: &LookupPayload, texts: &BrowserTexts) -> String {
    let message = payload.message.as_deref().filter(|m| !m.trim().is_empty());
    if payload.is_no_match() {
        return message.unwrap_or(&texts.no_match).to_string();
    }
    if payload.is_ok() {
        return texts.no_records.clone();
    }
    match message {
        Some(m) => format!("{} {}: {m}", texts.unexpected_status, payload.status),
        None => format!("{} {}", texts.unexpected_status, payload.status),
    }
}

//! Hierarchical record navigator
//!
//! Pages through a list of record screens and drills into a record's nested
//! sub-lists and back. Exactly one screen of the active list is visible.

use serde::Serialize;

use crate::services::screen_builder::{RecordScreen, SubListKind};
use crate::traits::SceneSurface;
use crate::types::NodeId;

/// The list the cursor currently walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "list", rename_all = "snake_case")]
pub enum ActiveList {
    Main,
    /// Sub-list `kind` of the main record at `parent`.
    ///
    /// `parent` is also the main index restored on drill-out.
    Sub { kind: SubListKind, parent: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationCursor {
    pub active: ActiveList,
    pub index: usize,
}

/// Control that triggers a drill for one kind.
#[derive(Debug, Clone)]
struct DrillControl {
    kind: SubListKind,
    node: NodeId,
    caption: String,
}

/// Owns the cursor over a set of record screens.
#[derive(Debug)]
pub struct HierarchicalNavigator {
    screens: Vec<RecordScreen>,
    cursor: NavigationCursor,
    controls: Vec<DrillControl>,
    back_caption: String,
}

impl HierarchicalNavigator {
    /// Take over `screens`: hide everything, then show the first record.
    ///
    /// Returns `None` for an empty list.
    pub fn new(screens: Vec<RecordScreen>, surface: &mut dyn SceneSurface) -> Option<Self> {
        let first = screens.first()?.node;

        for screen in &screens {
            surface.set_visible(screen.node, false);
            for group in &screen.groups {
                for sub in &group.screens {
                    surface.set_visible(sub.node, false);
                }
            }
        }
        surface.set_visible(first, true);

        Some(Self {
            screens,
            cursor: NavigationCursor {
                active: ActiveList::Main,
                index: 0,
            },
            controls: Vec::new(),
            back_caption: "Back".to_string(),
        })
    }

    /// Caption shown on a drill control while its list is active.
    #[must_use]
    pub fn with_back_caption(mut self, caption: impl Into<String>) -> Self {
        self.back_caption = caption.into();
        self
    }

    /// Register the control node that triggers `kind`; `caption` is its idle label.
    pub fn add_control(&mut self, kind: SubListKind, node: NodeId, caption: impl Into<String>) {
        self.controls.push(DrillControl {
            kind,
            node,
            caption: caption.into(),
        });
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn screens(&self) -> &[RecordScreen] {
        &self.screens
    }

    pub fn drilled(&self) -> Option<SubListKind> {
        match self.cursor.active {
            ActiveList::Main => None,
            ActiveList::Sub { kind, .. } => Some(kind),
        }
    }

    pub fn is_drilled(&self, kind: SubListKind) -> bool {
        self.drilled() == Some(kind)
    }

    /// Length of the active list (never zero).
    pub fn active_len(&self) -> usize {
        self.list(self.cursor.active).len()
    }

    pub fn current_node(&self) -> Option<NodeId> {
        self.list(self.cursor.active)
            .get(self.cursor.index)
            .map(|s| s.node)
    }

    /// Number of items of `kind` under the main record the cursor belongs to.
    pub fn sub_list_len(&self, kind: SubListKind) -> usize {
        self.screens
            .get(self.main_index())
            .map_or(0, |s| s.group(kind).len())
    }

    pub fn next(&mut self, surface: &mut dyn SceneSurface) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        self.move_to((self.cursor.index + 1) % len, surface);
    }

    pub fn prev(&mut self, surface: &mut dyn SceneSurface) {
        let len = self.active_len();
        if len == 0 {
            return;
        }
        self.move_to((self.cursor.index + len - 1) % len, surface);
    }

    /// Replace the main list by the `kind` sub-list of the current record.
    ///
    /// Leaves another active drill first. No-op (returns `false`) when `kind`
    /// is already active or the record has no items of that kind.
    pub fn drill_into(&mut self, kind: SubListKind, surface: &mut dyn SceneSurface) -> bool {
        if self.is_drilled(kind) {
            return false;
        }
        if self.sub_list_len(kind) == 0 {
            log::debug!("No {} under record {}", kind.id(), self.main_index() + 1);
            return false;
        }

        if let Some(other) = self.drilled() {
            self.drill_out_of(other, surface);
        }

        let return_index = self.cursor.index;
        self.set_current_visible(false, surface);
        self.cursor = NavigationCursor {
            active: ActiveList::Sub {
                kind,
                parent: return_index,
            },
            index: 0,
        };
        self.set_current_visible(true, surface);

        self.relabel(kind, &self.back_caption, surface);
        true
    }

    /// Return to the main list at the index saved by [`Self::drill_into`].
    ///
    /// No-op (returns `false`) when `kind` is not active.
    pub fn drill_out_of(&mut self, kind: SubListKind, surface: &mut dyn SceneSurface) -> bool {
        let ActiveList::Sub {
            kind: active,
            parent,
        } = self.cursor.active
        else {
            return false;
        };
        if active != kind {
            return false;
        }

        self.set_current_visible(false, surface);
        self.cursor = NavigationCursor {
            active: ActiveList::Main,
            index: parent,
        };
        self.set_current_visible(true, surface);

        if let Some(caption) = self.caption(kind) {
            self.relabel(kind, caption, surface);
        }
        true
    }

    /// What a drill control does when activated.
    pub fn toggle(&mut self, kind: SubListKind, surface: &mut dyn SceneSurface) -> bool {
        if self.is_drilled(kind) {
            self.drill_out_of(kind, surface)
        } else {
            self.drill_into(kind, surface)
        }
    }

    fn main_index(&self) -> usize {
        match self.cursor.active {
            ActiveList::Main => self.cursor.index,
            ActiveList::Sub { parent, .. } => parent,
        }
    }

    fn list(&self, active: ActiveList) -> &[RecordScreen] {
        match active {
            ActiveList::Main => &self.screens,
            ActiveList::Sub { kind, parent } => {
                self.screens
                    .get(parent)
                    .map(|s| s.group(kind))
                    .unwrap_or_default()
            }
        }
    }

    fn move_to(&mut self, index: usize, surface: &mut dyn SceneSurface) {
        self.set_current_visible(false, surface);
        self.cursor.index = index;
        self.set_current_visible(true, surface);
    }

    fn set_current_visible(&self, visible: bool, surface: &mut dyn SceneSurface) {
        if let Some(node) = self.current_node() {
            surface.set_visible(node, visible);
        }
    }

    fn caption(&self, kind: SubListKind) -> Option<&str> {
        self.controls
            .iter()
            .find(|c| c.kind == kind)
            .map(|c| c.caption.as_str())
    }

    fn relabel(&self, kind: SubListKind, label: &str, surface: &mut dyn SceneSurface) {
        for control in self.controls.iter().filter(|c| c.kind == kind) {
            surface.set_label(control.node, label);
        }
    }
}

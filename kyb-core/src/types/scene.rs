//! Scene node descriptions

use serde::{Deserialize, Serialize};

/// Handle of a node created on a scene surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Primitive element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Titled container
    Panel,
    /// Single line of text
    Text,
    /// Activatable control
    Button,
}

/// Position relative to the parent node, in layout cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn row(y: i32) -> Self {
        Self { x: 0, y }
    }
}

/// Everything needed to create a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Debug name; never used to find the node again
    pub name: String,
    pub kind: NodeKind,
    pub label: String,
    pub position: Offset,
    pub visible: bool,
}

impl NodeSpec {
    fn new(kind: NodeKind, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            label: label.into(),
            position: Offset::default(),
            visible: true,
        }
    }

    pub fn panel(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Panel, name, label)
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Text, name, label)
    }

    pub fn button(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(NodeKind::Button, name, label)
    }

    #[must_use]
    pub fn at(mut self, position: Offset) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

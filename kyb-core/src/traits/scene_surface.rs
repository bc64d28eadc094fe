//! Rendering surface abstraction Trait

use crate::error::CoreResult;
use crate::types::{NodeId, NodeSpec, Offset};

/// Retained-mode rendering sink.
///
/// The core only pushes changes; it never reads geometry back. Callers keep
/// the ids they created instead of looking nodes up by name.
///
/// Operations on an id that no longer exists are ignored.
pub trait SceneSurface {
    /// Create a node under `parent` (or at the root).
    fn create_node(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> CoreResult<NodeId>;

    /// Destroy a node and all of its descendants.
    fn destroy_node(&mut self, id: NodeId);

    fn set_visible(&mut self, id: NodeId, visible: bool);

    fn set_label(&mut self, id: NodeId, label: &str);

    fn set_position(&mut self, id: NodeId, position: Offset);
}

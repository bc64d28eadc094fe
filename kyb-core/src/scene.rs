//! In-memory scene graph
//!
//! Owned retained-mode tree implementing [`SceneSurface`]. Frontends draw
//! from it; tests inspect it.

use std::collections::HashMap;

use crate::error::{CoreError, CoreResult};
use crate::traits::SceneSurface;
use crate::types::{NodeId, NodeKind, NodeSpec, Offset};

/// A node as stored in the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub name: String,
    pub kind: NodeKind,
    pub label: String,
    pub position: Offset,
    pub visible: bool,
    pub children: Vec<NodeId>,
}

/// Arena of nodes keyed by id.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: HashMap<NodeId, SceneNode>,
    roots: Vec<NodeId>,
    next_id: u64,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(&id)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of `id` in creation order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &SceneNode> {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.children.iter())
            .filter_map(|child| self.nodes.get(child))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Own visibility flag.
    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(&id).is_some_and(|n| n.visible)
    }

    /// Visible and every ancestor visible.
    pub fn is_shown(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            match self.nodes.get(&cur) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(&id).map(|n| n.label.as_str())
    }

    /// Remove everything.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children);
            }
        }
    }
}

impl SceneSurface for SceneGraph {
    fn create_node(&mut self, parent: Option<NodeId>, spec: NodeSpec) -> CoreResult<NodeId> {
        if let Some(parent_id) = parent {
            if !self.nodes.contains_key(&parent_id) {
                return Err(CoreError::Surface(format!(
                    "parent {parent_id} of '{}' does not exist",
                    spec.name
                )));
            }
        }

        self.next_id += 1;
        let id = NodeId(self.next_id);
        self.nodes.insert(
            id,
            SceneNode {
                id,
                parent,
                name: spec.name,
                kind: spec.kind,
                label: spec.label,
                position: spec.position,
                visible: spec.visible,
                children: Vec::new(),
            },
        );

        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    fn destroy_node(&mut self, id: NodeId) {
        let Some(parent) = self.nodes.get(&id).map(|n| n.parent) else {
            return;
        };
        match parent.and_then(|p| self.nodes.get_mut(&p)) {
            Some(parent_node) => parent_node.children.retain(|c| *c != id),
            None => self.roots.retain(|r| *r != id),
        }
        self.remove_subtree(id);
    }

    fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.visible = visible;
        }
    }

    fn set_label(&mut self, id: NodeId, label: &str) {
        if let Some(node) = self.nodes.get_mut(&id) {
            label.clone_into(&mut node.label);
        }
    }

    fn set_position(&mut self, id: NodeId, position: Offset) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.position = position;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn create_links_parent_and_child() {
        let mut graph = SceneGraph::new();
        let root = graph.create_node(None, NodeSpec::panel("root", "Root")).unwrap();
        let child = graph
            .create_node(Some(root), NodeSpec::text("line", "hello"))
            .unwrap();

        assert_eq!(graph.roots(), &[root]);
        let children: Vec<NodeId> = graph.children(root).map(|n| n.id).collect();
        assert_eq!(children, vec![child]);
        assert_eq!(graph.node(child).unwrap().parent, Some(root));
    }

    #[test]
    fn missing_parent_is_a_surface_error() {
        let mut graph = SceneGraph::new();
        let result = graph.create_node(Some(NodeId(99)), NodeSpec::text("x", "x"));
        assert!(matches!(result, Err(CoreError::Surface(_))));
        assert!(graph.is_empty());
    }

    #[test]
    fn destroy_removes_subtree() {
        let mut graph = SceneGraph::new();
        let root = graph.create_node(None, NodeSpec::panel("root", "")).unwrap();
        let panel = graph.create_node(Some(root), NodeSpec::panel("p", "")).unwrap();
        let line = graph.create_node(Some(panel), NodeSpec::text("t", "")).unwrap();

        graph.destroy_node(panel);

        assert!(graph.contains(root));
        assert!(!graph.contains(panel));
        assert!(!graph.contains(line));
        assert_eq!(graph.children(root).count(), 0);
    }

    #[test]
    fn shown_requires_visible_ancestors() {
        let mut graph = SceneGraph::new();
        let root = graph.create_node(None, NodeSpec::panel("root", "")).unwrap();
        let line = graph.create_node(Some(root), NodeSpec::text("t", "")).unwrap();

        assert!(graph.is_shown(line));
        graph.set_visible(root, false);
        assert!(graph.is_visible(line));
        assert!(!graph.is_shown(line));
    }

    #[test]
    fn mutations_on_unknown_ids_are_ignored() {
        let mut graph = SceneGraph::new();
        graph.set_visible(NodeId(5), false);
        graph.set_label(NodeId(5), "x");
        graph.destroy_node(NodeId(5));
        assert!(graph.is_empty());
    }

    #[test]
    fn label_updates() {
        let mut graph = SceneGraph::new();
        let button = graph
            .create_node(None, NodeSpec::button("b", "Procedures"))
            .unwrap();
        graph.set_label(button, "Back");
        assert_eq!(graph.label(button), Some("Back"));
    }
}

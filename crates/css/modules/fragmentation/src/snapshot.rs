//! In-memory presentation tree captured from a host layout pass.
//!
//! Hosts mirror their content tree with `TreeUpdate`s and attach the computed
//! styles and geometry they measured. The classifier then reads the snapshot
//! instead of querying live engine state.

use crate::presentation::{Ancestors, NodeKind, PresentationTree, ancestor_chain};
use anyhow::{Result, bail, ensure};
use css_style_model::{ComputedStyle, LayoutRect, NodeKey, ScrollMetrics};
use log::trace;
use std::collections::HashMap;

/// Structural change mirrored from the host document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeUpdate {
    InsertElement {
        parent: NodeKey,
        node: NodeKey,
        tag: String,
        pos: usize,
    },
    InsertText {
        parent: NodeKey,
        node: NodeKey,
        text: String,
        pos: usize,
    },
    RemoveNode {
        node: NodeKey,
    },
}

#[derive(Debug, Clone)]
struct SnapshotNode {
    kind: NodeKind,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

#[derive(Debug, Clone)]
pub struct PresentationSnapshot {
    nodes: HashMap<NodeKey, SnapshotNode>,
    computed_styles: HashMap<NodeKey, ComputedStyle>,
    rects: HashMap<NodeKey, LayoutRect>,
    fragments: HashMap<NodeKey, Vec<LayoutRect>>,
    scroll_metrics: HashMap<NodeKey, ScrollMetrics>,
}

impl Default for PresentationSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationSnapshot {
    /// A snapshot holding only the document node (`NodeKey::ROOT`).
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            NodeKey::ROOT,
            SnapshotNode {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            },
        );
        Self {
            nodes,
            computed_styles: HashMap::new(),
            rects: HashMap::new(),
            fragments: HashMap::new(),
            scroll_metrics: HashMap::new(),
        }
    }

    /// Apply a structural update.
    ///
    /// # Errors
    /// Fails when inserting under an unknown or text parent, reusing a key that
    /// is already present, or removing the document or an unknown node.
    pub fn apply_update(&mut self, update: TreeUpdate) -> Result<()> {
        match update {
            TreeUpdate::InsertElement {
                parent,
                node,
                tag,
                pos,
            } => {
                trace!("InsertElement parent={parent} node={node} tag={tag} pos={pos}");
                self.insert(parent, node, NodeKind::Element { tag }, pos)
            }
            TreeUpdate::InsertText {
                parent,
                node,
                text,
                pos,
            } => {
                trace!("InsertText parent={parent} node={node} pos={pos}");
                self.insert(parent, node, NodeKind::Text { text }, pos)
            }
            TreeUpdate::RemoveNode { node } => {
                trace!("RemoveNode node={node}");
                ensure!(node != NodeKey::ROOT, "cannot remove the document node");
                let Some(parent) = self.nodes.get(&node).map(|entry| entry.parent) else {
                    bail!("cannot remove unknown node {node}");
                };
                if let Some(parent_node) = parent.and_then(|key| self.nodes.get_mut(&key)) {
                    parent_node.children.retain(|child| *child != node);
                }
                self.remove_node_recursive(node);
                Ok(())
            }
        }
    }

    /// Apply a batch of updates, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first error reported by `apply_update`.
    pub fn apply_updates<I: IntoIterator<Item = TreeUpdate>>(&mut self, updates: I) -> Result<()> {
        for update in updates {
            self.apply_update(update)?;
        }
        Ok(())
    }

    fn insert(&mut self, parent: NodeKey, node: NodeKey, kind: NodeKind, pos: usize) -> Result<()> {
        ensure!(!self.nodes.contains_key(&node), "node {node} is already present");
        let Some(parent_node) = self.nodes.get_mut(&parent) else {
            bail!("unknown parent {parent} for node {node}");
        };
        ensure!(
            !matches!(parent_node.kind, NodeKind::Text { .. }),
            "text node {parent} cannot have children"
        );
        if pos >= parent_node.children.len() {
            parent_node.children.push(node);
        } else {
            parent_node.children.insert(pos, node);
        }
        self.nodes.insert(
            node,
            SnapshotNode {
                kind,
                parent: Some(parent),
                children: Vec::new(),
            },
        );
        Ok(())
    }

    fn remove_node_recursive(&mut self, node: NodeKey) {
        if let Some(removed) = self.nodes.remove(&node) {
            self.computed_styles.remove(&node);
            self.rects.remove(&node);
            self.fragments.remove(&node);
            self.scroll_metrics.remove(&node);
            for child in removed.children {
                self.remove_node_recursive(child);
            }
        }
    }

    /// Replace all computed styles at once.
    pub fn set_computed_styles(&mut self, styles: HashMap<NodeKey, ComputedStyle>) {
        self.computed_styles = styles;
    }

    pub fn set_style(&mut self, node: NodeKey, style: ComputedStyle) {
        self.computed_styles.insert(node, style);
    }

    pub fn set_rect(&mut self, node: NodeKey, rect: LayoutRect) {
        self.rects.insert(node, rect);
    }

    /// Record per-line fragments; overrides the bounding-box fallback.
    pub fn set_fragments(&mut self, node: NodeKey, fragments: Vec<LayoutRect>) {
        self.fragments.insert(node, fragments);
    }

    pub fn set_scroll_metrics(&mut self, node: NodeKey, metrics: ScrollMetrics) {
        self.scroll_metrics.insert(node, metrics);
    }

    /// `node` followed by each of its ancestors up to the document.
    pub fn ancestors(&self, node: NodeKey) -> Ancestors<'_, Self> {
        ancestor_chain(self, node, None)
    }
}

impl PresentationTree for PresentationSnapshot {
    fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.nodes.get(&node)?.parent
    }

    fn children(&self, node: NodeKey) -> &[NodeKey] {
        self.nodes
            .get(&node)
            .map(|entry| entry.children.as_slice())
            .unwrap_or_default()
    }

    fn kind(&self, node: NodeKey) -> Option<&NodeKind> {
        self.nodes.get(&node).map(|entry| &entry.kind)
    }

    fn computed_style(&self, node: NodeKey) -> Option<&ComputedStyle> {
        self.computed_styles.get(&node)
    }

    fn bounding_rect(&self, node: NodeKey) -> Option<LayoutRect> {
        self.rects.get(&node).copied()
    }

    fn fragment_rects(&self, node: NodeKey) -> Vec<LayoutRect> {
        self.fragments.get(&node).map_or_else(
            || self.bounding_rect(node).into_iter().collect(),
            Clone::clone,
        )
    }

    fn scroll_metrics(&self, node: NodeKey) -> Option<ScrollMetrics> {
        self.scroll_metrics.get(&node).copied()
    }
}

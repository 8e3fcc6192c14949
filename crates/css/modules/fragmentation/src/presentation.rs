//! Read-only view of the host's presentation tree.
//!
//! The classifier never owns or mutates nodes. Everything it needs (tree
//! navigation, computed style, box geometry, scroll metrics) is asked of a
//! `PresentationTree` implementation at call time.

use crate::error::{BreakError, Result};
use css_style_model::{ComputedStyle, LayoutRect, NodeKey, ScrollMetrics};

/// What a node in the content tree is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element { tag: String },
    Text { text: String },
}

impl NodeKind {
    /// Tag name for element nodes.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag } => Some(tag),
            Self::Document | Self::Text { .. } => None,
        }
    }

    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}

/// Query interface into a host rendering/layout system.
pub trait PresentationTree {
    fn parent(&self, node: NodeKey) -> Option<NodeKey>;

    /// Children in document order; empty for leaves and unknown nodes.
    fn children(&self, node: NodeKey) -> &[NodeKey];

    /// `None` when the node is not part of the tree.
    fn kind(&self, node: NodeKey) -> Option<&NodeKind>;

    fn computed_style(&self, node: NodeKey) -> Option<&ComputedStyle>;

    /// Border-box rectangle of the node.
    fn bounding_rect(&self, node: NodeKey) -> Option<LayoutRect>;

    /// One rectangle per line fragment of the node, in layout order.
    ///
    /// Hosts without fragment information fall back to the bounding box.
    fn fragment_rects(&self, node: NodeKey) -> Vec<LayoutRect> {
        self.bounding_rect(node).into_iter().collect()
    }

    fn scroll_metrics(&self, node: NodeKey) -> Option<ScrollMetrics>;

    fn previous_sibling(&self, node: NodeKey) -> Option<NodeKey> {
        let siblings = self.children(self.parent(node)?);
        let index = siblings.iter().position(|&sibling| sibling == node)?;
        siblings.get(index.checked_sub(1)?).copied()
    }

    /// Boundary-point length: character count for text, child count otherwise.
    fn node_length(&self, node: NodeKey) -> Option<usize> {
        match self.kind(node)? {
            NodeKind::Text { text } => Some(text.chars().count()),
            NodeKind::Document | NodeKind::Element { .. } => Some(self.children(node).len()),
        }
    }
}

/// An element validated at the classifier boundary.
///
/// Holding an `ElementRef` proves the node is an element with a computed
/// style, so the predicates taking one never see documents or text.
pub struct ElementRef<'tree, T: PresentationTree + ?Sized> {
    tree: &'tree T,
    node: NodeKey,
    tag: &'tree str,
    style: &'tree ComputedStyle,
}

impl<'tree, T: PresentationTree + ?Sized> ElementRef<'tree, T> {
    /// # Errors
    /// `UnknownNode` when the node is absent, `NotAnElement` for documents and
    /// text, `MissingComputedStyle` for elements the host did not style.
    pub fn new(tree: &'tree T, node: NodeKey) -> Result<Self> {
        let kind = tree.kind(node).ok_or(BreakError::UnknownNode(node))?;
        let tag = kind.tag().ok_or(BreakError::NotAnElement(node))?;
        let style = tree
            .computed_style(node)
            .ok_or(BreakError::MissingComputedStyle(node))?;
        Ok(Self {
            tree,
            node,
            tag,
            style,
        })
    }

    #[inline]
    pub const fn node(&self) -> NodeKey {
        self.node
    }

    #[inline]
    pub const fn tag(&self) -> &'tree str {
        self.tag
    }

    #[inline]
    pub const fn style(&self) -> &'tree ComputedStyle {
        self.style
    }

    #[inline]
    pub fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.tree.scroll_metrics(self.node)
    }
}

/// Iterator over a node and its ancestors, stopping before `stop`.
pub struct Ancestors<'tree, T: PresentationTree + ?Sized> {
    tree: &'tree T,
    next: Option<NodeKey>,
    stop: Option<NodeKey>,
}

impl<T: PresentationTree + ?Sized> Iterator for Ancestors<'_, T> {
    type Item = NodeKey;

    fn next(&mut self) -> Option<NodeKey> {
        let current = self.next?;
        if Some(current) == self.stop {
            self.next = None;
            return None;
        }
        self.next = self.tree.parent(current);
        Some(current)
    }
}

/// Walk from `start` (inclusive) towards the root, ending before `stop` or
/// after the root when `stop` is not an ancestor.
pub fn ancestor_chain<T: PresentationTree + ?Sized>(
    tree: &T,
    start: NodeKey,
    stop: Option<NodeKey>,
) -> Ancestors<'_, T> {
    Ancestors {
        tree,
        next: Some(start),
        stop,
    }
}

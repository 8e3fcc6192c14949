//! Spec: CSS Fragmentation 3 §4.1 — Possible break points
//! <https://www.w3.org/TR/css-break-3/#possible-breaks>
//!
//! Tests a collapsed position against the monolithic boxes between it and the
//! fragmentation region and against line boxes shared across it (the children
//! on either side first, then each ancestor and its previous sibling). A
//! container-start position must also have room above its first child.
//!
//! Not handled yet: break-before/after/inside values, orphans/widows and the
//! Class B (sibling-gap) rules for margins collapsing through the break.

use super::part_4_1_line_adjacency::are_in_same_single_line;
use super::part_4_1_monolithic::monolithic_reason;
use crate::error::{BreakError, Result};
use crate::heuristics::BreakHeuristics;
use crate::position::BreakRange;
use crate::presentation::{ElementRef, PresentationTree, ancestor_chain};
use css_style_model::NodeKey;
use log::debug;
use tracing::trace_span;

/// Whether a collapsed `range` is a legal place to fragment content inside `region`.
///
/// # Errors
/// - `NotCollapsed` when the range selects content.
/// - `UnknownNode` / `OffsetOutOfRange` when the boundary does not exist in the tree.
/// - `MissingComputedStyle` when an element between the position and the region is unstyled.
/// - `MissingGeometry` when a container-start position lacks boxes to compare.
pub fn is_possible_break_point<T: PresentationTree + ?Sized>(
    tree: &T,
    range: &BreakRange,
    region: NodeKey,
    heuristics: &BreakHeuristics,
) -> Result<bool> {
    let boundary = range.collapsed_boundary()?;
    let container = boundary.container;
    let _span = trace_span!(
        "fragmentation.is_possible_break_point",
        %container,
        offset = boundary.offset
    )
    .entered();

    let len = tree
        .node_length(container)
        .ok_or(BreakError::UnknownNode(container))?;
    if boundary.offset > len {
        return Err(BreakError::OffsetOutOfRange {
            node: container,
            offset: boundary.offset,
            len,
        });
    }

    let chain: Vec<NodeKey> = ancestor_chain(tree, container, Some(region)).collect();
    let reached_region = chain
        .last()
        .is_none_or(|&outermost| tree.parent(outermost) == Some(region));
    if !reached_region {
        debug!("[BREAK] region {region} is not an ancestor of {container}; walked to the root");
    }

    for &node in &chain {
        let is_element = tree.kind(node).is_some_and(|kind| kind.is_element());
        if !is_element {
            continue;
        }
        let element = ElementRef::new(tree, node)?;
        if let Some(reason) = monolithic_reason(&element, heuristics) {
            debug!("[BREAK] {container}@{} rejected: {node} is monolithic ({reason:?})", boundary.offset);
            return Ok(false);
        }
    }

    // The child after the position pairs with the child before it, then each
    // ancestor pairs with its own previous sibling.
    let child_after = tree.children(container).get(boundary.offset).copied();
    for node in child_after.into_iter().chain(chain.iter().copied()) {
        let Some(previous) = tree.previous_sibling(node) else {
            continue;
        };
        if are_in_same_single_line(tree, previous, node, heuristics) {
            debug!("[BREAK] {container}@{} rejected: {previous} and {node} share a line", boundary.offset);
            return Ok(false);
        }
    }

    if boundary.offset == 0 {
        let Some(&first_child) = tree.children(container).first() else {
            debug!("[BREAK] {container}@0 rejected: no first child");
            return Ok(false);
        };
        let container_rect = tree
            .bounding_rect(container)
            .ok_or(BreakError::MissingGeometry(container))?;
        let child_rect = tree
            .bounding_rect(first_child)
            .ok_or(BreakError::MissingGeometry(first_child))?;
        if child_rect.top() == container_rect.top() {
            debug!("[BREAK] {container}@0 rejected: {first_child} is flush with the top edge");
            return Ok(false);
        }
    }

    Ok(true)
}

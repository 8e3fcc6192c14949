//! Spec: CSS Fragmentation 3 §4.1 — Class C break points
//! <https://www.w3.org/TR/css-break-3/#possible-breaks>
//!
//! Inside an inline formatting context the only break opportunities are
//! between line boxes. Two inline-level boxes whose fragments sit in the same
//! line box cannot be separated by a break.

use crate::heuristics::BreakHeuristics;
use crate::presentation::{NodeKind, PresentationTree};
use css_style_model::{LayoutUnit, NodeKey};
use log::trace;

fn is_inline_level<T: PresentationTree + ?Sized>(tree: &T, node: NodeKey) -> bool {
    match tree.kind(node) {
        Some(NodeKind::Text { .. }) => true,
        Some(NodeKind::Element { .. }) => tree
            .computed_style(node)
            .is_some_and(|style| style.display.is_inline_level()),
        Some(NodeKind::Document) | None => false,
    }
}

/// Whether `before` ends on the same line box that `after` starts on.
///
/// Compares the last line fragment of `before` with the first line fragment
/// of `after`; a positive vertical overlap means a shared line box. Always
/// false when `heuristics.detect_same_line` is off.
pub fn are_in_same_single_line<T: PresentationTree + ?Sized>(
    tree: &T,
    before: NodeKey,
    after: NodeKey,
    heuristics: &BreakHeuristics,
) -> bool {
    if !heuristics.detect_same_line {
        return false;
    }
    if !is_inline_level(tree, before) || !is_inline_level(tree, after) {
        return false;
    }
    let before_fragments = tree.fragment_rects(before);
    let after_fragments = tree.fragment_rects(after);
    let (Some(last), Some(first)) = (before_fragments.last(), after_fragments.first()) else {
        return false;
    };
    let overlap = last.vertical_overlap(first);
    trace!("[SAME-LINE] {before} -> {after} overlap={overlap}");
    overlap > LayoutUnit::zero()
}

//! Convenience wrapper pairing a presentation tree with heuristics.
//!
//! Holds no caches: each query reads the tree afresh, so results follow the
//! host's latest style and geometry.

use crate::chapter4::part_4_1_line_adjacency::are_in_same_single_line;
use crate::chapter4::part_4_1_monolithic::{MonolithicReason, monolithic_reason};
use crate::chapter4::part_4_1_possible_break_points::is_possible_break_point;
use crate::error::Result;
use crate::heuristics::BreakHeuristics;
use crate::position::BreakRange;
use crate::presentation::{ElementRef, PresentationTree};
use css_style_model::NodeKey;

pub struct BreakClassifier<'tree, T: PresentationTree + ?Sized> {
    tree: &'tree T,
    heuristics: BreakHeuristics,
}

impl<'tree, T: PresentationTree + ?Sized> BreakClassifier<'tree, T> {
    pub fn new(tree: &'tree T) -> Self {
        Self::with_heuristics(tree, BreakHeuristics::default())
    }

    pub const fn with_heuristics(tree: &'tree T, heuristics: BreakHeuristics) -> Self {
        Self { tree, heuristics }
    }

    #[inline]
    pub const fn heuristics(&self) -> &BreakHeuristics {
        &self.heuristics
    }

    /// Validate `node` as an element of the tree.
    ///
    /// # Errors
    /// See `ElementRef::new`.
    #[inline]
    pub fn element(&self, node: NodeKey) -> Result<ElementRef<'tree, T>> {
        ElementRef::new(self.tree, node)
    }

    /// # Errors
    /// Returns an error when `node` is not a styled element.
    pub fn monolithic_reason(&self, node: NodeKey) -> Result<Option<MonolithicReason>> {
        Ok(monolithic_reason(&self.element(node)?, &self.heuristics))
    }

    /// # Errors
    /// Returns an error when `node` is not a styled element.
    pub fn is_monolithic(&self, node: NodeKey) -> Result<bool> {
        Ok(self.monolithic_reason(node)?.is_some())
    }

    #[inline]
    pub fn are_in_same_single_line(&self, before: NodeKey, after: NodeKey) -> bool {
        are_in_same_single_line(self.tree, before, after, &self.heuristics)
    }

    /// # Errors
    /// See `is_possible_break_point`.
    #[inline]
    pub fn is_possible_break_point(&self, range: &BreakRange, region: NodeKey) -> Result<bool> {
        is_possible_break_point(self.tree, range, region, &self.heuristics)
    }
}

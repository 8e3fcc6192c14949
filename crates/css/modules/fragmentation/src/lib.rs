//! CSS Fragmentation Module Level 3 — Possible break points and monolithic boxes.
//! Spec: <https://www.w3.org/TR/css-break-3/>
//!
//! Read-only classification over a host presentation tree: which elements
//! are monolithic, and whether a collapsed position is a legal place to
//! split content across pages or columns.

mod classifier;
mod error;
mod heuristics;
mod position;
mod presentation;
mod snapshot;

// Chapter modules mapped to the Fragmentation Level 3 spec structure.
// Spec: §4 — Rules for breaking
#[path = "4_breaking_rules/mod.rs"]
mod chapter4;

pub use chapter4::part_4_1_line_adjacency::are_in_same_single_line;
pub use chapter4::part_4_1_monolithic::{
    MonolithicReason, REPLACED_ELEMENT_TAGS, has_big_radius, is_hidden_overflowing,
    is_monolithic, is_replaced_element, is_scrollable, is_single_line_of_text_component,
    monolithic_reason,
};
pub use chapter4::part_4_1_possible_break_points::is_possible_break_point;
pub use classifier::BreakClassifier;
pub use error::{BreakError, Result};
pub use heuristics::{BIG_RADIUS_THRESHOLD_PX, BreakHeuristics};
pub use position::{Boundary, BreakRange};
pub use presentation::{Ancestors, ElementRef, NodeKind, PresentationTree, ancestor_chain};
pub use snapshot::{PresentationSnapshot, TreeUpdate};

//! Style and geometry snapshot types shared by the CSS modules.
//!
//! A host layout pass captures these per node; classification crates only
//! read them. Nothing here is cached across host mutations.

use core::fmt;

pub mod layout_model;
pub mod layout_unit;
pub mod parse;
pub mod style_model;

pub use layout_model::{LayoutRect, ScrollMetrics};
pub use layout_unit::LayoutUnit;
pub use parse::StyleParseError;
pub use style_model::{BorderRadii, BorderWidths, ComputedStyle, Display, Overflow};

/// Stable identifier of a node in the host's content tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeKey(pub u64);

impl NodeKey {
    /// The document node (always present).
    pub const ROOT: Self = Self(0);
}

impl fmt::Display for NodeKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

//! Candidate break positions expressed as DOM-style ranges.

use crate::error::{BreakError, Result};
use css_style_model::NodeKey;

/// A boundary point: a container node and an offset into it.
///
/// The offset counts children for documents and elements, and characters
/// for text nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary {
    pub container: NodeKey,
    pub offset: usize,
}

impl Boundary {
    #[inline]
    pub const fn new(container: NodeKey, offset: usize) -> Self {
        Self { container, offset }
    }
}

/// A range between two boundary points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BreakRange {
    pub start: Boundary,
    pub end: Boundary,
}

impl BreakRange {
    #[inline]
    pub const fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// An empty range sitting at `offset` inside `container`.
    #[inline]
    pub const fn collapsed(container: NodeKey, offset: usize) -> Self {
        let point = Boundary::new(container, offset);
        Self {
            start: point,
            end: point,
        }
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// The single point a collapsed range denotes.
    ///
    /// # Errors
    /// Returns `BreakError::NotCollapsed` when the range selects content.
    #[inline]
    pub fn collapsed_boundary(&self) -> Result<Boundary> {
        if self.is_collapsed() {
            Ok(self.start)
        } else {
            Err(BreakError::NotCollapsed)
        }
    }
}

//! Layout geometry read back from the host layout pass.
//!
//! Coordinates are stored as `LayoutUnit` (1/64px) to preserve sub-pixel
//! precision while keeping edge comparisons exact.

use crate::LayoutUnit;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayoutRect {
    pub x: LayoutUnit,
    pub y: LayoutUnit,
    pub width: LayoutUnit,
    pub height: LayoutUnit,
}

impl LayoutRect {
    #[inline]
    pub fn from_px(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x: LayoutUnit::from_px(x),
            y: LayoutUnit::from_px(y),
            width: LayoutUnit::from_px(width),
            height: LayoutUnit::from_px(height),
        }
    }

    #[inline]
    pub const fn top(&self) -> LayoutUnit {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> LayoutUnit {
        self.y + self.height
    }

    /// Length of the shared vertical span of two rects; zero or negative when disjoint.
    #[inline]
    pub fn vertical_overlap(&self, other: &Self) -> LayoutUnit {
        self.bottom().min(other.bottom()) - self.top().max(other.top())
    }
}

/// Scroll metrics of an element box: full content height versus the height
/// of the visible (client) area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ScrollMetrics {
    pub scroll_height: LayoutUnit,
    pub client_height: LayoutUnit,
}

impl ScrollMetrics {
    #[inline]
    pub fn from_px(scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_height: LayoutUnit::from_px(scroll_height),
            client_height: LayoutUnit::from_px(client_height),
        }
    }

    /// True when part of the content lies outside the visible area.
    #[inline]
    pub fn is_clipping(&self) -> bool {
        self.scroll_height != self.client_height
    }
}

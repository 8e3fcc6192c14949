//! Sub-pixel layout coordinates using fixed-point arithmetic.
//!
//! Geometry read back from a host layout pass is quantized to 1/64px so that
//! edge comparisons ("does the first child start at the container's top?")
//! are exact integer comparisons instead of float equality. Values outside
//! the representable range clamp, and arithmetic saturates at the bounds.

use core::fmt;
use core::ops::{Add, Sub};

/// Fixed-point coordinate in 1/64px units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct LayoutUnit(i32);

impl LayoutUnit {
    /// Units per pixel.
    pub const SCALE: i32 = 64;

    /// Largest representable coordinate.
    pub const MAX: Self = Self(i32::MAX);

    /// Smallest representable coordinate.
    pub const MIN: Self = Self(i32::MIN);

    /// Create from pixels (f32), rounding to the nearest 1/64px and clamping
    /// to `MIN..=MAX`.
    #[inline]
    pub fn from_px(pixels: f32) -> Self {
        Self((pixels * Self::SCALE as f32).round() as i32)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    const fn to_px(self) -> f32 {
        self.0 as f32 / Self::SCALE as f32
    }
}

impl fmt::Display for LayoutUnit {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}px", self.to_px())
    }
}

impl Add for LayoutUnit {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for LayoutUnit {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }
}

//! Computed-style snapshot consumed by break-point classification.
//!
//! Only the properties that decide whether a box is monolithic are modeled:
//! `display`, `overflow`, the four border widths and the four corner radii.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    #[default]
    Inline,
    Block,
    InlineBlock,
    InlineTable,
    InlineFlex,
    InlineGrid,
    Flex,
    Grid,
    Table,
    ListItem,
    FlowRoot,
    Contents,
    None,
}

impl Display {
    /// Inline-level atomic boxes: laid out as a single unit on one line.
    #[inline]
    pub const fn is_atomic_inline(self) -> bool {
        matches!(
            self,
            Self::InlineBlock | Self::InlineTable | Self::InlineFlex | Self::InlineGrid
        )
    }

    /// Boxes that take part in an inline formatting context.
    #[inline]
    pub const fn is_inline_level(self) -> bool {
        matches!(self, Self::Inline) || self.is_atomic_inline()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// Corner radii in px. Each value is the horizontal radius of the corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl BorderRadii {
    /// Same radius on every corner.
    #[inline]
    pub const fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Largest of the four corner radii.
    #[inline]
    pub fn max_radius(&self) -> f32 {
        self.top_left
            .max(self.top_right)
            .max(self.bottom_right)
            .max(self.bottom_left)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputedStyle {
    pub display: Display,
    pub overflow: Overflow,
    pub border_width: BorderWidths,
    /// Corner radii; `None` when the host does not expose `border-*-radius`.
    pub border_radius: Option<BorderRadii>,
}

//! Spec: CSS Fragmentation 3 §4.1 — Monolithic elements
//! <https://www.w3.org/TR/css-break-3/#monolithic>
//!
//! A monolithic box may not be split across fragmentainers. Status is read
//! from the element's current style and geometry on every call.

use crate::heuristics::BreakHeuristics;
use crate::presentation::{ElementRef, PresentationTree};
use css_style_model::{ComputedStyle, Display, Overflow};
use log::debug;

/// Tags of elements rendered as one indivisible unit regardless of their markup.
pub const REPLACED_ELEMENT_TAGS: [&str; 11] = [
    "img", "video", "audio", "object", "iframe", "embed", "textarea", "button", "input", "svg",
    "math",
];

/// Why an element is monolithic. Checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonolithicReason {
    ReplacedElement,
    Scrollable,
    SingleLineOfText,
    HiddenOverflowing,
    BigRadius,
}

/// True for replaced and embedded content (images, media, frames, form controls, SVG/MathML roots).
pub fn is_replaced_element<T: PresentationTree + ?Sized>(element: &ElementRef<'_, T>) -> bool {
    REPLACED_ELEMENT_TAGS
        .iter()
        .any(|tag| element.tag().eq_ignore_ascii_case(tag))
}

/// Scroll containers: the part of their content outside the scrollport is only
/// reachable by scrolling and cannot be laid out across pages.
///
/// `overflow` defaults to the element's computed overflow.
pub fn is_scrollable<T: PresentationTree + ?Sized>(
    element: &ElementRef<'_, T>,
    overflow: Option<Overflow>,
) -> bool {
    matches!(
        overflow.unwrap_or(element.style().overflow),
        Overflow::Auto | Overflow::Scroll
    )
}

/// Inline-level atomic boxes render as a single line of text.
///
/// `display` defaults to the element's computed display.
pub fn is_single_line_of_text_component<T: PresentationTree + ?Sized>(
    element: &ElementRef<'_, T>,
    display: Option<Display>,
) -> bool {
    // Line boxes themselves hold no break points; only atomic inlines are covered here.
    display.unwrap_or(element.style().display).is_atomic_inline()
}

/// `overflow: hidden` boxes whose content is clipped: the hidden part is
/// unreachable, so the box stays whole.
///
/// `overflow` defaults to the element's computed overflow.
pub fn is_hidden_overflowing<T: PresentationTree + ?Sized>(
    element: &ElementRef<'_, T>,
    overflow: Option<Overflow>,
) -> bool {
    overflow.unwrap_or(element.style().overflow) == Overflow::Hidden
        && element
            .scroll_metrics()
            .is_some_and(|metrics| metrics.is_clipping())
}

/// Large border curves that bulge past their own border band.
///
/// Not part of CSS Fragmentation: splitting such a box would require cutting
/// the curve itself, so the box is kept whole instead. Returns false when the
/// host does not expose corner radii.
pub fn has_big_radius(style: &ComputedStyle, threshold: f32) -> bool {
    let Some(radii) = style.border_radius else {
        return false;
    };
    if radii.max_radius() < threshold {
        return false;
    }
    let widths = style.border_width;
    [
        (radii.top_left, widths.top, widths.left),
        (radii.top_right, widths.top, widths.right),
        (radii.bottom_right, widths.bottom, widths.right),
        (radii.bottom_left, widths.bottom, widths.left),
    ]
    .into_iter()
    .any(|(radius, first_side, second_side)| radius > first_side || radius > second_side)
}

/// First reason the element may not be split internally, if any.
pub fn monolithic_reason<T: PresentationTree + ?Sized>(
    element: &ElementRef<'_, T>,
    heuristics: &BreakHeuristics,
) -> Option<MonolithicReason> {
    let style = element.style();
    let overflow = Some(style.overflow);
    let display = Some(style.display);

    let reason = if is_replaced_element(element) {
        MonolithicReason::ReplacedElement
    } else if is_scrollable(element, overflow) {
        MonolithicReason::Scrollable
    } else if is_single_line_of_text_component(element, display) {
        MonolithicReason::SingleLineOfText
    } else if is_hidden_overflowing(element, overflow) {
        MonolithicReason::HiddenOverflowing
    } else if has_big_radius(style, heuristics.big_radius_threshold) {
        MonolithicReason::BigRadius
    } else {
        return None;
    };
    debug!(
        "[MONOLITHIC] node={} tag={} reason={reason:?}",
        element.node(),
        element.tag()
    );
    Some(reason)
}

/// Whether the element may not be split internally.
#[inline]
pub fn is_monolithic<T: PresentationTree + ?Sized>(
    element: &ElementRef<'_, T>,
    heuristics: &BreakHeuristics,
) -> bool {
    monolithic_reason(element, heuristics).is_some()
}

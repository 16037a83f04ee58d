//! Capability interface for re-entrant measurement and sub-layout.

use crate::tree::{ElementKey, ElementTree};
use box_model::{LayoutBox, Vec2};

/// Result of formatting one element subtree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormattedElement {
    /// The element's used content-box size.
    pub content_size: Vec2,
    /// The element's visible overflow extent, measured from its border-box
    /// origin. At least the border-box size for elements without overflow.
    pub overflow_size: Vec2,
}

/// The surrounding layout engine, seen from inside the flex algorithm.
///
/// Flex layout calls back into full layout to measure intrinsic sizes and to
/// format each child at its final resolved box. Modelling this as a trait
/// keeps the algorithm independent of the engine driving it; tests exercise
/// the core with stub implementations.
pub trait SubLayout {
    /// Shrink-to-fit content width of `element`: the smallest width that
    /// avoids unnecessary wrapping, bounded by the containing block.
    fn shrink_to_fit_width(
        &mut self,
        tree: &ElementTree,
        element: ElementKey,
        containing_block: Vec2,
    ) -> f32;

    /// Perform a full recursive layout of `element`.
    ///
    /// With `box_override` the element is formatted at the given resolved
    /// box; an unresolved content height in the override is computed by the
    /// element's own layout. Without an override the element derives its box
    /// entirely from its own style against `containing_block`.
    fn format_element(
        &mut self,
        tree: &ElementTree,
        element: ElementKey,
        containing_block: Vec2,
        box_override: Option<&LayoutBox>,
    ) -> FormattedElement;
}

//! The resolved box handed to a child sub-layout.

use crate::geometry::Axis;
use style_model::Edges;

/// A box with resolved edges and a resolved content width.
///
/// The content height may still be undetermined (`None`), in which case the
/// child's own layout computes it from its content. A fully resolved box has
/// both dimensions set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutBox {
    pub content_width: f32,
    pub content_height: Option<f32>,
    pub margin: Edges,
    pub border: Edges,
    pub padding: Edges,
}

impl LayoutBox {
    /// Sum of padding and border widths along `axis`.
    #[inline]
    pub fn padding_border_sum(&self, axis: Axis) -> f32 {
        axis.sum_of(&self.padding) + axis.sum_of(&self.border)
    }

    /// Sum of padding, border, and margin widths along `axis`.
    #[inline]
    pub fn edges_sum(&self, axis: Axis) -> f32 {
        self.padding_border_sum(axis) + axis.sum_of(&self.margin)
    }

    /// The border-box width.
    #[inline]
    pub fn border_box_width(&self) -> f32 {
        self.content_width + self.padding_border_sum(Axis::Horizontal)
    }

    /// The border-box height, if the content height is resolved.
    #[inline]
    pub fn border_box_height(&self) -> Option<f32> {
        self.content_height
            .map(|height| height + self.padding_border_sum(Axis::Vertical))
    }
}

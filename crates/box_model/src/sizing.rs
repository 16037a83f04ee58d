//! Length resolution, box-sizing transformation, and edge construction.
//!
//! Spec: <https://www.w3.org/TR/css-sizing-3/>

use crate::geometry::Vec2;
use style_model::{BoxSizing, ComputedStyle, Edges, Length, LengthOrAuto};

/// Resolve a length or percentage against its percentage base.
#[inline]
pub fn resolve_length(value: Length, basis: f32) -> f32 {
    match value {
        Length::Pixels(pixels) => pixels,
        Length::Percent(fraction) => fraction * basis,
    }
}

/// Resolve a possibly-`auto` value against its percentage base.
/// Returns `None` for `auto`.
#[inline]
pub fn resolve_length_or_auto(value: LengthOrAuto, basis: f32) -> Option<f32> {
    match value {
        LengthOrAuto::Auto => None,
        LengthOrAuto::Pixels(pixels) => Some(pixels),
        LengthOrAuto::Percent(fraction) => Some(fraction * basis),
    }
}

/// Transform a content-box size to border-box based on `box-sizing`.
#[inline]
pub fn apply_box_sizing(content_size: f32, box_sizing: BoxSizing, padding_border: f32) -> f32 {
    match box_sizing {
        BoxSizing::ContentBox => content_size + padding_border,
        BoxSizing::BorderBox => content_size,
    }
}

/// Apply min/max constraints to a size. Min wins over max when they cross.
#[inline]
pub fn apply_constraints(size: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut result = size;
    if let Some(max_size) = max {
        result = result.min(max_size);
    }
    if let Some(min_size) = min {
        result = result.max(min_size);
    }
    result
}

/// Which margin sides were specified as `auto`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EdgeAutoFlags {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// Resolved margin/padding/border widths for one element.
///
/// Padding and border widths are clamped to be non-negative; margins may be
/// negative. `auto` margins resolve to zero here and are reported through
/// `margin_auto` so the layout pass can distribute free space into them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResolvedSides {
    pub margin: Edges,
    pub margin_auto: EdgeAutoFlags,
    pub padding: Edges,
    pub border: Edges,
}

/// Resolve an element's edge widths from computed style.
///
/// Horizontal sides resolve percentages against `basis.x`, vertical sides
/// against `basis.y`.
pub fn resolve_box_sides(style: &ComputedStyle, basis: Vec2) -> ResolvedSides {
    let margin_side = |side: LengthOrAuto, side_basis: f32| -> (f32, bool) {
        match resolve_length_or_auto(side, side_basis) {
            Some(resolved) => (resolved, false),
            None => (0.0, true),
        }
    };
    let padding_side = |side: LengthOrAuto, side_basis: f32| -> f32 {
        // Padding has no auto keyword; treat a stray auto as zero.
        resolve_length_or_auto(side, side_basis)
            .unwrap_or(0.0)
            .max(0.0)
    };

    let (margin_top, top_auto) = margin_side(style.margin.top, basis.y);
    let (margin_right, right_auto) = margin_side(style.margin.right, basis.x);
    let (margin_bottom, bottom_auto) = margin_side(style.margin.bottom, basis.y);
    let (margin_left, left_auto) = margin_side(style.margin.left, basis.x);

    ResolvedSides {
        margin: Edges {
            top: margin_top,
            right: margin_right,
            bottom: margin_bottom,
            left: margin_left,
        },
        margin_auto: EdgeAutoFlags {
            top: top_auto,
            right: right_auto,
            bottom: bottom_auto,
            left: left_auto,
        },
        padding: Edges {
            top: padding_side(style.padding.top, basis.y),
            right: padding_side(style.padding.right, basis.x),
            bottom: padding_side(style.padding.bottom, basis.y),
            left: padding_side(style.padding.left, basis.x),
        },
        border: Edges {
            top: style.border_width.top.max(0.0),
            right: style.border_width.right.max(0.0),
            bottom: style.border_width.bottom.max(0.0),
            left: style.border_width.left.max(0.0),
        },
    }
}

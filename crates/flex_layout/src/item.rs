//! Flex item construction.
//!
//! Builds one item record per eligible child: resolved edge sums per axis,
//! flex factors, the flex base size, and the hypothetical main size the
//! later stages work from.

use crate::engine::SubLayout;
use crate::format::ContainerState;
use crate::tree::{ElementKey, ElementTree};
use box_model::{Axis, LayoutBox, ResolvedSides, resolve_box_sides, resolve_length_or_auto};
use log::debug;
use style_model::{AlignItems, AlignSelf, BoxSizing, ComputedStyle, Display, LengthOrAuto};

/// Clamp an inner size between min and max. Min wins when the constraints
/// cross, and an unconstrained max is `f32::INFINITY`.
#[inline]
pub(crate) fn clamp_inner_size(value: f32, min_size: f32, max_size: f32) -> f32 {
    value.min(max_size).max(min_size)
}

/// Edge and constraint summary for one item along one axis.
///
/// All sizes are inner (content-box) unless stated otherwise; `sum_edges`
/// converts between inner and outer.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ItemAxisEdges {
    pub auto_margin_leading: bool,
    pub auto_margin_trailing: bool,
    /// The size property on this axis is the `auto` keyword.
    pub auto_size: bool,
    pub margin_leading: f32,
    pub sum_padding_border: f32,
    /// Padding + border + margin.
    pub sum_edges: f32,
    pub min_size: f32,
    /// `f32::INFINITY` when unconstrained.
    pub max_size: f32,
}

/// One flex-participating child, created fresh per layout pass.
#[derive(Clone, Debug)]
pub(crate) struct FlexItem {
    pub element: ElementKey,
    pub main: ItemAxisEdges,
    pub cross: ItemAxisEdges,
    pub flex_grow_factor: f32,
    pub flex_shrink_factor: f32,
    /// Resolved alignment; never `Auto` (inherited from the container).
    pub align_self: AlignSelf,
    /// Definite inner cross size from style, when one exists.
    pub cross_inner_size: Option<f32>,
    pub inner_flex_base_size: f32,
    /// Outer flex base size.
    pub flex_base_size: f32,
    /// Outer flex base size clamped through min/max.
    pub hypothetical_main_size: f32,
    /// Outer, set by the flexible-length resolver.
    pub used_main_size: f32,
    /// Outer, set by the cross-size resolver.
    pub hypothetical_cross_size: f32,
    pub used_cross_size: f32,
    pub sides: ResolvedSides,
}

impl FlexItem {
    /// The resolved box for this item at the given inner sizes, axis-mapped
    /// back onto width/height.
    pub(crate) fn resolved_box(
        &self,
        main_axis: Axis,
        inner_main: f32,
        inner_cross: Option<f32>,
    ) -> LayoutBox {
        let (content_width, content_height) = match main_axis {
            Axis::Horizontal => (inner_main, inner_cross),
            Axis::Vertical => (inner_cross.unwrap_or(0.0), Some(inner_main)),
        };
        LayoutBox {
            content_width,
            content_height,
            margin: self.sides.margin,
            border: self.sides.border,
            padding: self.sides.padding,
        }
    }
}

/// Collect and build items for the container's eligible children, in tree
/// order modified by the `order` property (stable for ties).
pub(crate) fn build_items(
    tree: &ElementTree,
    container: ElementKey,
    state: &ContainerState,
    engine: &mut dyn SubLayout,
) -> Vec<FlexItem> {
    let mut ordered: Vec<(i32, ElementKey)> = Vec::new();
    for child in tree.children(container).iter().copied() {
        let Some(style) = tree.style(child) else {
            continue;
        };
        if style.display == Display::None || style.is_out_of_flow() {
            continue;
        }
        ordered.push((style.order, child));
    }
    // Stable sort keeps tree order for equal `order` values.
    ordered.sort_by_key(|&(order, _)| order);

    ordered
        .iter()
        .map(|&(_, child)| build_item(tree, child, state, &mut *engine))
        .collect()
}

/// Convert a specified size to an inner (content-box) size.
#[inline]
fn specified_inner(resolved: f32, box_sizing: BoxSizing, sum_padding_border: f32) -> f32 {
    let inner = match box_sizing {
        BoxSizing::ContentBox => resolved,
        BoxSizing::BorderBox => resolved - sum_padding_border,
    };
    inner.max(0.0)
}

fn resolved_align_self(own: AlignSelf, container: AlignItems) -> AlignSelf {
    match own {
        AlignSelf::Auto => match container {
            AlignItems::Stretch => AlignSelf::Stretch,
            AlignItems::Center => AlignSelf::Center,
            AlignItems::FlexStart => AlignSelf::FlexStart,
            AlignItems::FlexEnd => AlignSelf::FlexEnd,
            AlignItems::Baseline => AlignSelf::Baseline,
        },
        resolved => resolved,
    }
}

fn axis_edges(
    axis: Axis,
    sides: &ResolvedSides,
    style: &ComputedStyle,
    basis: f32,
    auto_size: bool,
) -> ItemAxisEdges {
    let sum_padding_border = axis.sum_of(&sides.padding) + axis.sum_of(&sides.border);
    let sum_edges = sum_padding_border + axis.sum_of(&sides.margin);
    let (auto_margin_leading, auto_margin_trailing) = match axis {
        Axis::Horizontal => (sides.margin_auto.left, sides.margin_auto.right),
        Axis::Vertical => (sides.margin_auto.top, sides.margin_auto.bottom),
    };
    let (min_spec, max_spec) = match axis {
        Axis::Horizontal => (style.min_width, style.max_width),
        Axis::Vertical => (style.min_height, style.max_height),
    };
    let min_size = resolve_length_or_auto(min_spec, basis)
        .map_or(0.0, |resolved| {
            specified_inner(resolved, style.box_sizing, sum_padding_border)
        })
        .max(0.0);
    let max_size = resolve_length_or_auto(max_spec, basis).map_or(f32::INFINITY, |resolved| {
        specified_inner(resolved, style.box_sizing, sum_padding_border)
    });

    ItemAxisEdges {
        auto_margin_leading,
        auto_margin_trailing,
        auto_size,
        margin_leading: axis.leading_of(&sides.margin),
        sum_padding_border,
        sum_edges,
        min_size,
        max_size,
    }
}

fn build_item(
    tree: &ElementTree,
    child: ElementKey,
    state: &ContainerState,
    engine: &mut dyn SubLayout,
) -> FlexItem {
    let style = tree.style(child).cloned().unwrap_or_default();
    let sides = resolve_box_sides(&style, state.percent_base);

    let main_axis = state.main_axis;
    let cross_axis = main_axis.cross();
    let main_basis = main_axis.of(state.percent_base);
    let cross_basis = cross_axis.of(state.percent_base);
    let (main_size_spec, cross_size_spec) = match main_axis {
        Axis::Horizontal => (style.width, style.height),
        Axis::Vertical => (style.height, style.width),
    };

    let main = axis_edges(
        main_axis,
        &sides,
        &style,
        main_basis,
        main_size_spec == LengthOrAuto::Auto,
    );
    let cross = axis_edges(
        cross_axis,
        &sides,
        &style,
        cross_basis,
        cross_size_spec == LengthOrAuto::Auto,
    );

    // Flex base size: flex-basis, else the main size property, else content.
    let specified_base = resolve_length_or_auto(style.flex_basis, main_basis)
        .or_else(|| resolve_length_or_auto(main_size_spec, main_basis))
        .map(|resolved| specified_inner(resolved, style.box_sizing, main.sum_padding_border));
    let inner_flex_base_size = specified_base
        .unwrap_or_else(|| match main_axis {
            Axis::Horizontal => {
                engine.shrink_to_fit_width(tree, child, state.percent_base)
            }
            Axis::Vertical => {
                engine
                    .format_element(tree, child, state.percent_base, None)
                    .content_size
                    .y
            }
        })
        .max(0.0);

    let flex_base_size = inner_flex_base_size + main.sum_edges;
    let hypothetical_main_size =
        clamp_inner_size(inner_flex_base_size, main.min_size, main.max_size) + main.sum_edges;
    debug!(
        target: "flex_layout::item",
        "item {child:?}: inner_base={inner_flex_base_size:.3} hypothetical={hypothetical_main_size:.3}"
    );

    let cross_inner_size = resolve_length_or_auto(cross_size_spec, cross_basis)
        .map(|resolved| specified_inner(resolved, style.box_sizing, cross.sum_padding_border));

    FlexItem {
        element: child,
        main,
        cross,
        flex_grow_factor: style.flex_grow.max(0.0),
        flex_shrink_factor: style.flex_shrink.max(0.0),
        align_self: resolved_align_self(style.align_self, state.align_items),
        cross_inner_size,
        inner_flex_base_size,
        flex_base_size,
        hypothetical_main_size,
        used_main_size: 0.0,
        hypothetical_cross_size: 0.0,
        used_cross_size: 0.0,
        sides,
    }
}

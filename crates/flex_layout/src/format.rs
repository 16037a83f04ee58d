//! Entry point: format a flex container's children.

use crate::cross::resolve_cross_sizes;
use crate::engine::SubLayout;
use crate::item::build_items;
use crate::lines::{break_into_lines, used_main_size};
use crate::place::place_lines;
use crate::resolve::resolve_flexible_lengths;
use crate::tree::{ElementKey, ElementTree};
use box_model::{Axis, AvailableSize, Vec2, resolve_length, snap_extent};
use log::{debug, warn};
use std::collections::HashMap;
use style_model::{
    AlignContent, AlignItems, FlexDirection, FlexWrap, JustifyContent, Overflow,
};

/// Inputs for formatting one flex container.
#[derive(Clone, Copy, Debug)]
pub struct FormatRequest<'tree> {
    pub tree: &'tree ElementTree,
    pub container: ElementKey,
    /// Position of the container's content box.
    pub content_position: Vec2,
    /// Available content size per axis; indefinite axes size to content.
    pub available_width: AvailableSize,
    pub available_height: AvailableSize,
    /// Container content-size bounds applied when a single line clamps to
    /// the container on the cross axis. An unconstrained max is
    /// `f32::INFINITY`.
    pub min_size: Vec2,
    pub max_size: Vec2,
    /// Fallback percentage base when the container's own size is indefinite
    /// on the cross axis.
    pub containing_block: Vec2,
}

/// The outcome of one `format` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormatResult {
    /// The container's resulting content size.
    pub content_size: Vec2,
    /// Per-axis extent of child content measured from the content origin;
    /// larger than `content_size` when children overflow.
    pub overflow_size: Vec2,
}

impl FormatResult {
    const ZERO: Self = Self {
        content_size: Vec2::ZERO,
        overflow_size: Vec2::ZERO,
    };
}

/// Shared read-only inputs threaded through the layout stages.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ContainerState {
    pub main_axis: Axis,
    pub main_reverse: bool,
    pub single_line: bool,
    pub main_available: AvailableSize,
    pub cross_available: AvailableSize,
    /// Definite percentage-resolution base per physical axis.
    pub percent_base: Vec2,
    pub main_gap: f32,
    pub cross_gap: f32,
    pub min_cross: f32,
    pub max_cross: f32,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub content_position: Vec2,
    /// Filled in after line breaking.
    pub used_main_size: f32,
}

const fn resolve_axes(direction: FlexDirection) -> (Axis, bool) {
    match direction {
        FlexDirection::Row => (Axis::Horizontal, false),
        FlexDirection::RowReverse => (Axis::Horizontal, true),
        FlexDirection::Column => (Axis::Vertical, false),
        FlexDirection::ColumnReverse => (Axis::Vertical, true),
    }
}

const fn supports_overflow(overflow: Overflow) -> bool {
    matches!(overflow, Overflow::Visible | Overflow::Hidden)
}

/// Snap one axis of the content area to the pixel grid. Definite extents
/// snap together with their position so both ends stay on the grid.
fn snap_axis(position: f32, available: AvailableSize) -> (f32, AvailableSize) {
    match available {
        AvailableSize::Definite(size) => {
            let (snapped_position, snapped_size) = snap_extent(position, size);
            (snapped_position, AvailableSize::Definite(snapped_size))
        }
        AvailableSize::Indefinite => (position.round(), AvailableSize::Indefinite),
    }
}

/// Format the flex container `request.container`.
///
/// Writes each child's resolved border-box offset into `offsets` (children
/// themselves are formatted through `engine`) and returns the container's
/// resulting content size together with its overflow extent.
///
/// Containers requesting scrolling overflow are not supported: the call
/// emits a diagnostic and returns a zero-size result without laying out
/// children. A container with no eligible children is a valid edge case and
/// also yields a zero-size result.
pub fn format(
    request: &FormatRequest<'_>,
    engine: &mut dyn SubLayout,
    offsets: &mut HashMap<ElementKey, Vec2>,
) -> FormatResult {
    let tree = request.tree;
    let Some(style) = tree.style(request.container) else {
        warn!(
            target: "flex_layout::format",
            "container {:?} is not part of the tree",
            request.container
        );
        return FormatResult::ZERO;
    };
    if !supports_overflow(style.overflow_x) || !supports_overflow(style.overflow_y) {
        warn!(
            target: "flex_layout::format",
            "scrolling flex containers are not supported yet; skipping {:?}",
            request.container
        );
        return FormatResult::ZERO;
    }

    let (position_x, available_width) = snap_axis(request.content_position.x, request.available_width);
    let (position_y, available_height) =
        snap_axis(request.content_position.y, request.available_height);
    let content_position = Vec2::new(position_x, position_y);

    let (main_axis, main_reverse) = resolve_axes(style.flex_direction);
    let cross_axis = main_axis.cross();
    let single_line = style.flex_wrap == FlexWrap::Nowrap;
    let (main_available, cross_available) = match main_axis {
        Axis::Horizontal => (available_width, available_height),
        Axis::Vertical => (available_height, available_width),
    };

    // Percentages resolve against the definite available size; an
    // indefinite main axis resolves them against zero, while the cross axis
    // falls back to the caller's containing block.
    let main_basis = main_available.definite_or(0.0);
    let cross_basis = cross_available.definite_or(cross_axis.of(request.containing_block));
    let percent_base = main_axis.pack(main_basis, cross_basis);

    let column_gap = resolve_length(style.column_gap, percent_base.x).max(0.0);
    let row_gap = resolve_length(style.row_gap, percent_base.y).max(0.0);
    let (main_gap, cross_gap) = match main_axis {
        Axis::Horizontal => (column_gap, row_gap),
        Axis::Vertical => (row_gap, column_gap),
    };

    let mut state = ContainerState {
        main_axis,
        main_reverse,
        single_line,
        main_available,
        cross_available,
        percent_base,
        main_gap,
        cross_gap,
        min_cross: cross_axis.of(request.min_size),
        max_cross: cross_axis.of(request.max_size),
        justify_content: style.justify_content,
        align_items: style.align_items,
        align_content: style.align_content,
        content_position,
        used_main_size: 0.0,
    };

    let mut items = build_items(tree, request.container, &state, engine);
    if items.is_empty() {
        debug!(
            target: "flex_layout::format",
            "container {:?} has no flex items",
            request.container
        );
        return FormatResult::ZERO;
    }

    let mut lines = break_into_lines(&items, single_line, main_gap, main_available);
    state.used_main_size = used_main_size(&lines, main_available);

    for line in &lines {
        let distributable = state.used_main_size - line.gaps_total(main_gap);
        if let Some(line_items) = items.get_mut(line.start..line.end) {
            resolve_flexible_lengths(line_items, distributable);
        }
    }

    resolve_cross_sizes(&mut items, &mut lines, &state, tree, engine);
    let outcome = place_lines(&mut items, &lines, &state, tree, engine, offsets);

    FormatResult {
        content_size: main_axis.pack(state.used_main_size, outcome.cross_extent),
        overflow_size: outcome.overflow,
    }
}

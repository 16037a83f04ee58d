//! Final placement: justification, auto margins, pixel snapping, child
//! sub-layout, and overflow accumulation.

use crate::engine::SubLayout;
use crate::format::ContainerState;
use crate::item::FlexItem;
use crate::lines::FlexLine;
use crate::tree::{ElementKey, ElementTree};
use box_model::{Vec2, snap_extent};
use log::debug;
use std::collections::HashMap;
use style_model::{AlignSelf, JustifyContent};

/// What the placement pass hands back to the entry point.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PlacementOutcome {
    /// Total cross extent of all lines including cross-axis gaps.
    pub cross_extent: f32,
    /// Per-axis max of child border-box offset plus child overflow.
    pub overflow: Vec2,
}

/// Main-axis start offset and between-item spacing for a line's leftover
/// space. The CSS gap is layered on top of the between spacing separately.
fn justify_params(justify: JustifyContent, remaining: f32, item_count: usize) -> (f32, f32) {
    match (justify, item_count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            (remaining / (count as f32 * 2.0), remaining / (count as f32))
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let slots = count as f32 + 1.0;
            (remaining / slots, remaining / slots)
        }
        // Start and the degenerate counts.
        _ => (0.0, 0.0),
    }
}

/// Cross offset of an item within its line, before margins.
fn cross_offset_within_line(item: &FlexItem, line_leftover: f32) -> f32 {
    let leading_auto = item.cross.auto_margin_leading;
    let trailing_auto = item.cross.auto_margin_trailing;
    // Auto cross margins absorb the line leftover and win over alignment.
    if leading_auto && trailing_auto {
        return (line_leftover * 0.5).max(0.0);
    }
    if leading_auto {
        return line_leftover.max(0.0);
    }
    if trailing_auto {
        return 0.0;
    }
    match item.align_self {
        AlignSelf::Center => (line_leftover * 0.5).max(0.0),
        AlignSelf::FlexEnd => line_leftover.max(0.0),
        // Baseline behaves as flex-start until baseline metrics exist.
        AlignSelf::Auto
        | AlignSelf::FlexStart
        | AlignSelf::Baseline
        | AlignSelf::Stretch => 0.0,
    }
}

/// Place every line's items, format each child at its resolved box, and
/// write the resulting border-box offsets.
pub(crate) fn place_lines(
    items: &mut [FlexItem],
    lines: &[FlexLine],
    state: &ContainerState,
    tree: &ElementTree,
    engine: &mut dyn SubLayout,
    offsets: &mut HashMap<ElementKey, Vec2>,
) -> PlacementOutcome {
    let main_axis = state.main_axis;
    let mut overflow = Vec2::ZERO;
    let mut cross_cursor = 0.0f32;

    for (line_index, line) in lines.iter().enumerate() {
        if line_index > 0 {
            cross_cursor += state.cross_gap;
        }
        let Some(line_items) = items.get_mut(line.start..line.end) else {
            continue;
        };
        let count = line_items.len();
        let gaps_total = line.gaps_total(state.main_gap);
        let outer_total: f32 = line_items.iter().map(|item| item.used_main_size).sum();
        let leftover = state.used_main_size - outer_total - gaps_total;

        // Positive leftover splits equally across main-axis auto margins;
        // any auto margin downgrades justification to start.
        let auto_slots: usize = line_items
            .iter()
            .map(|item| {
                usize::from(item.main.auto_margin_leading)
                    + usize::from(item.main.auto_margin_trailing)
            })
            .sum();
        let auto_each = if auto_slots > 0 && leftover > 0.0 {
            leftover / auto_slots as f32
        } else {
            0.0
        };
        let effective_justify = if auto_slots > 0 {
            JustifyContent::Start
        } else {
            state.justify_content
        };
        let (start_offset, between_spacing) =
            justify_params(effective_justify, leftover.max(0.0), count);
        debug!(
            target: "flex_layout::place",
            "line {line_index}: leftover={leftover:.3} start={start_offset:.3} between={between_spacing:.3} auto_slots={auto_slots}"
        );

        let advance_extra = state.main_gap + between_spacing;
        let mut cursor = if state.main_reverse {
            state.used_main_size - start_offset
        } else {
            start_offset
        };

        for item in line_items {
            let auto_leading = if item.main.auto_margin_leading {
                auto_each
            } else {
                0.0
            };
            let auto_trailing = if item.main.auto_margin_trailing {
                auto_each
            } else {
                0.0
            };
            let outer_advance = item.used_main_size + auto_leading + auto_trailing;
            let inner_main = (item.used_main_size - item.main.sum_edges).max(0.0);

            // Border-box offset along the main axis. A reversed axis walks
            // from the main-end edge toward the start.
            let main_offset = if state.main_reverse {
                cursor -= outer_advance;
                let offset = cursor + item.main.margin_leading + auto_leading;
                cursor -= advance_extra;
                offset
            } else {
                let offset = cursor + item.main.margin_leading + auto_leading;
                cursor += outer_advance + advance_extra;
                offset
            };

            let line_leftover = line.cross_size - item.used_cross_size;
            let cross_offset = cross_cursor
                + cross_offset_within_line(item, line_leftover)
                + item.cross.margin_leading;
            let inner_cross = (item.used_cross_size - item.cross.sum_edges).max(0.0);

            let (main_offset, inner_main) = snap_extent(main_offset, inner_main);
            let (cross_offset, inner_cross) = snap_extent(cross_offset, inner_cross);

            let child_box = item.resolved_box(main_axis, inner_main, Some(inner_cross));
            let formatted =
                engine.format_element(tree, item.element, state.percent_base, Some(&child_box));

            let within_content = main_axis.pack(main_offset, cross_offset);
            offsets.insert(item.element, state.content_position + within_content);

            let reach = within_content + formatted.overflow_size;
            overflow.x = overflow.x.max(reach.x);
            overflow.y = overflow.y.max(reach.y);
        }
        cross_cursor += line.cross_size;
    }

    PlacementOutcome {
        cross_extent: cross_cursor,
        overflow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if justification parameters deviate from the keyword rules.
    fn justify_parameters_per_keyword() {
        assert_eq!(justify_params(JustifyContent::Start, 90.0, 3), (0.0, 0.0));
        assert_eq!(justify_params(JustifyContent::End, 90.0, 3), (90.0, 0.0));
        assert_eq!(justify_params(JustifyContent::Center, 90.0, 3), (45.0, 0.0));
        assert_eq!(
            justify_params(JustifyContent::SpaceBetween, 90.0, 3),
            (0.0, 45.0)
        );
        assert_eq!(
            justify_params(JustifyContent::SpaceAround, 90.0, 3),
            (15.0, 30.0)
        );
        assert_eq!(
            justify_params(JustifyContent::SpaceEvenly, 90.0, 2),
            (30.0, 30.0)
        );
        // A lone item cannot space-between.
        assert_eq!(
            justify_params(JustifyContent::SpaceBetween, 90.0, 1),
            (0.0, 0.0)
        );
    }
}

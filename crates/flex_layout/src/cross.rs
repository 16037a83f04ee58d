//! Cross-axis sizing: item hypothetical sizes, line sizes, and stretching.

use crate::engine::SubLayout;
use crate::format::ContainerState;
use crate::item::{FlexItem, clamp_inner_size};
use crate::lines::FlexLine;
use crate::tree::ElementTree;
use box_model::{Axis, apply_constraints};
use log::debug;
use style_model::{AlignContent, AlignSelf};

/// Determine every item's hypothetical cross size, resolve each line's cross
/// size (stretching lines when align-content asks for it), and settle each
/// item's used cross size.
pub(crate) fn resolve_cross_sizes(
    items: &mut [FlexItem],
    lines: &mut [FlexLine],
    state: &ContainerState,
    tree: &ElementTree,
    engine: &mut dyn SubLayout,
) {
    // A single line in a definite container takes the available cross size
    // directly, so items that will stretch to it never need measuring.
    let line_is_fixed = state.single_line && state.cross_available.is_definite();
    for item in items.iter_mut() {
        if line_is_fixed && will_stretch(item) && item.cross_inner_size.is_none() {
            item.hypothetical_cross_size = item.cross.sum_edges;
            continue;
        }
        let inner = hypothetical_inner_cross(item, state, tree, engine);
        item.hypothetical_cross_size = inner.max(0.0) + item.cross.sum_edges;
    }

    resolve_line_cross_sizes(items, lines, state);

    for line in lines.iter() {
        let Some(line_items) = items.get_mut(line.start..line.end) else {
            continue;
        };
        for item in line_items {
            item.used_cross_size = if will_stretch(item) {
                let inner = (line.cross_size - item.cross.sum_edges).max(0.0);
                clamp_inner_size(inner, item.cross.min_size, item.cross.max_size)
                    + item.cross.sum_edges
            } else {
                item.hypothetical_cross_size
            };
        }
    }
}

/// Whether an item's used cross size stretches to the line: resolved
/// stretch alignment, an auto cross size, and no auto cross margins.
fn will_stretch(item: &FlexItem) -> bool {
    item.align_self == AlignSelf::Stretch
        && item.cross.auto_size
        && !item.cross.auto_margin_leading
        && !item.cross.auto_margin_trailing
}

/// The inner hypothetical cross size of one item.
///
/// A definite cross size from style is used as-is. Otherwise, with a
/// horizontal main axis the item is formatted at its resolved main size and
/// its used height read back; with a vertical main axis the cross size is
/// the shrink-to-fit width.
fn hypothetical_inner_cross(
    item: &FlexItem,
    state: &ContainerState,
    tree: &ElementTree,
    engine: &mut dyn SubLayout,
) -> f32 {
    if let Some(inner) = item.cross_inner_size {
        return inner;
    }
    match state.main_axis {
        Axis::Horizontal => {
            let inner_main = (item.used_main_size - item.main.sum_edges).max(0.0);
            let layout_box = item.resolved_box(state.main_axis, inner_main, None);
            engine
                .format_element(tree, item.element, state.percent_base, Some(&layout_box))
                .content_size
                .y
        }
        Axis::Vertical => engine.shrink_to_fit_width(tree, item.element, state.percent_base),
    }
}

fn resolve_line_cross_sizes(items: &[FlexItem], lines: &mut [FlexLine], state: &ContainerState) {
    let single_definite = state.single_line.then(|| state.cross_available.definite()).flatten();
    for line in lines.iter_mut() {
        // A single line in a definite container spans the whole cross size;
        // no measurement is needed.
        if let Some(available) = single_definite {
            line.cross_size = available;
            continue;
        }
        let max_hypothetical = items
            .get(line.start..line.end)
            .map_or(0.0, |line_items| {
                line_items
                    .iter()
                    .map(|item| item.hypothetical_cross_size)
                    .fold(0.0, f32::max)
            })
            .max(0.0);
        line.cross_size = if state.single_line {
            apply_constraints(
                max_hypothetical,
                Some(state.min_cross),
                Some(state.max_cross),
            )
        } else {
            max_hypothetical
        };
    }

    // align-content: stretch distributes leftover cross space evenly across
    // lines; the other keywords pack lines at the start.
    if state.align_content == AlignContent::Stretch
        && let Some(available) = state.cross_available.definite()
    {
        let line_count = lines.len();
        if line_count > 0 {
            let gaps_total = (line_count - 1) as f32 * state.cross_gap;
            let occupied: f32 = lines.iter().map(|line| line.cross_size).sum();
            let leftover = available - occupied - gaps_total;
            if leftover > 0.0 {
                let add_each = leftover / line_count as f32;
                debug!(
                    target: "flex_layout::cross",
                    "stretching {line_count} line(s) by {add_each:.3} each"
                );
                for line in lines.iter_mut() {
                    line.cross_size += add_each;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemAxisEdges;
    use crate::tree::ElementKey;
    use box_model::{AvailableSize, ResolvedSides, Vec2};
    use style_model::{AlignItems, JustifyContent};

    fn test_state(cross_available: AvailableSize, single_line: bool) -> ContainerState {
        ContainerState {
            main_axis: Axis::Horizontal,
            main_reverse: false,
            single_line,
            main_available: AvailableSize::Definite(200.0),
            cross_available,
            percent_base: Vec2::new(200.0, cross_available.definite_or(0.0)),
            main_gap: 0.0,
            cross_gap: 0.0,
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            justify_content: JustifyContent::Start,
            align_items: AlignItems::Stretch,
            align_content: AlignContent::Stretch,
            content_position: Vec2::ZERO,
            used_main_size: 200.0,
        }
    }

    fn axis(sum_edges: f32) -> ItemAxisEdges {
        ItemAxisEdges {
            auto_margin_leading: false,
            auto_margin_trailing: false,
            auto_size: true,
            margin_leading: 0.0,
            sum_padding_border: 0.0,
            sum_edges,
            min_size: 0.0,
            max_size: f32::INFINITY,
        }
    }

    fn cross_item(key: u64, cross_inner: Option<f32>, cross_edges: f32) -> FlexItem {
        let mut cross = axis(cross_edges);
        cross.auto_size = cross_inner.is_none();
        FlexItem {
            element: ElementKey(key),
            main: axis(0.0),
            cross,
            flex_grow_factor: 0.0,
            flex_shrink_factor: 1.0,
            align_self: AlignSelf::Stretch,
            cross_inner_size: cross_inner,
            inner_flex_base_size: 50.0,
            flex_base_size: 50.0,
            hypothetical_main_size: 50.0,
            used_main_size: 50.0,
            hypothetical_cross_size: 0.0,
            used_cross_size: 0.0,
            sides: ResolvedSides::default(),
        }
    }

    struct NoMeasure;

    impl SubLayout for NoMeasure {
        fn shrink_to_fit_width(
            &mut self,
            _tree: &ElementTree,
            _element: ElementKey,
            _containing_block: Vec2,
        ) -> f32 {
            0.0
        }

        fn format_element(
            &mut self,
            _tree: &ElementTree,
            _element: ElementKey,
            _containing_block: Vec2,
            _box_override: Option<&box_model::LayoutBox>,
        ) -> crate::engine::FormattedElement {
            crate::engine::FormattedElement {
                content_size: Vec2::ZERO,
                overflow_size: Vec2::ZERO,
            }
        }
    }

    fn one_line(count: usize) -> Vec<FlexLine> {
        vec![FlexLine {
            start: 0,
            end: count,
            accumulated_hypothetical_main_size: 0.0,
            cross_size: 0.0,
        }]
    }

    #[test]
    /// # Panics
    /// Panics if a stretching item does not fill the line minus its edges.
    fn stretch_fills_line_minus_edges() {
        let tree = ElementTree::new();
        let mut engine = NoMeasure;
        let state = test_state(AvailableSize::Definite(80.0), true);
        let mut items = vec![cross_item(1, None, 10.0)];
        let mut lines = one_line(1);
        resolve_cross_sizes(&mut items, &mut lines, &state, &tree, &mut engine);
        let item = items.first().unwrap();
        // Single definite line adopts the available cross size.
        assert_eq!(lines.first().unwrap().cross_size, 80.0);
        // Used cross size is outer; inner is the line minus the edge sum.
        assert_eq!(item.used_cross_size, 80.0);
        assert_eq!(item.used_cross_size - item.cross.sum_edges, 70.0);
    }

    #[test]
    /// # Panics
    /// Panics if a definite cross size escapes the stretch or the line does
    /// not track the tallest item.
    fn definite_cross_size_defeats_stretch() {
        let tree = ElementTree::new();
        let mut engine = NoMeasure;
        let state = test_state(AvailableSize::Indefinite, true);
        let mut items = vec![
            cross_item(1, Some(30.0), 0.0),
            cross_item(2, Some(44.0), 0.0),
        ];
        let mut lines = one_line(2);
        resolve_cross_sizes(&mut items, &mut lines, &state, &tree, &mut engine);
        // Definite sizes keep their hypothetical values.
        assert_eq!(items.first().unwrap().used_cross_size, 30.0);
        // Indefinite container: line is the max hypothetical cross size.
        assert_eq!(lines.first().unwrap().cross_size, 44.0);
    }

    #[test]
    /// # Panics
    /// Panics if align-content stretch does not share leftover space across
    /// lines equally.
    fn align_content_stretch_distributes_leftover() {
        let tree = ElementTree::new();
        let mut engine = NoMeasure;
        let state = test_state(AvailableSize::Definite(100.0), false);
        let mut items = vec![
            cross_item(1, Some(20.0), 0.0),
            cross_item(2, Some(20.0), 0.0),
        ];
        let mut lines = vec![
            FlexLine {
                start: 0,
                end: 1,
                accumulated_hypothetical_main_size: 0.0,
                cross_size: 0.0,
            },
            FlexLine {
                start: 1,
                end: 2,
                accumulated_hypothetical_main_size: 0.0,
                cross_size: 0.0,
            },
        ];
        resolve_cross_sizes(&mut items, &mut lines, &state, &tree, &mut engine);
        // 100 - 40 = 60 leftover, 30 added to each line.
        assert_eq!(lines.first().unwrap().cross_size, 50.0);
        assert_eq!(lines.get(1).unwrap().cross_size, 50.0);
    }

    #[test]
    /// # Panics
    /// Panics if the single-line cross clamp ignores the container bounds.
    fn single_line_clamps_to_container_bounds() {
        let tree = ElementTree::new();
        let mut engine = NoMeasure;
        let mut state = test_state(AvailableSize::Indefinite, true);
        state.min_cross = 40.0;
        let mut items = vec![cross_item(1, Some(10.0), 0.0)];
        let mut lines = one_line(1);
        resolve_cross_sizes(&mut items, &mut lines, &state, &tree, &mut engine);
        assert_eq!(lines.first().unwrap().cross_size, 40.0);
    }
}

//! Flexible length resolution.
//!
//! Distributes a line's free main-axis space across its items by growing or
//! shrinking them, iterating until every item is frozen. Each round either
//! clamps violators against their min/max constraints and freezes them, or
//! freezes everything, so the loop runs at most once per item.

use crate::item::{FlexItem, clamp_inner_size};
use log::debug;

/// Direction a min/max clamp pushed an item's target this round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Violation {
    #[default]
    None,
    Min,
    Max,
}

/// Per-item resolver state, scoped to one resolution pass. Kept out of
/// `FlexItem` so the transient fields cannot leak past the resolver.
#[derive(Clone, Copy, Debug)]
struct ResolveSlot {
    frozen: bool,
    violation: Violation,
    /// Outer target main size.
    target_main_size: f32,
}

fn remaining_free_space(distributable: f32, items: &[FlexItem], slots: &[ResolveSlot]) -> f32 {
    let consumed: f32 = items
        .iter()
        .zip(slots)
        .map(|(item, slot)| {
            if slot.frozen {
                slot.target_main_size
            } else {
                item.flex_base_size
            }
        })
        .sum();
    distributable - consumed
}

/// Resolve the used main size of every item in one line.
///
/// `distributable` is the line's share of the container's used main size
/// minus inter-item gap space; gaps are never grown or shrunk.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], distributable: f32) {
    let accumulated: f32 = items
        .iter()
        .map(|item| item.hypothetical_main_size)
        .sum();
    let available_flex_space = distributable - accumulated;
    let growing = available_flex_space > 0.0;

    // Inflexible items freeze at their hypothetical size immediately: a zero
    // factor cannot move, and an item whose base already overshoots its
    // clamped size cannot move further in the chosen direction.
    let mut slots: Vec<ResolveSlot> = items
        .iter()
        .map(|item| {
            let factor = if growing {
                item.flex_grow_factor
            } else {
                item.flex_shrink_factor
            };
            let inflexible = factor == 0.0
                || (growing && item.flex_base_size > item.hypothetical_main_size)
                || (!growing && item.flex_base_size < item.hypothetical_main_size);
            ResolveSlot {
                frozen: inflexible,
                violation: Violation::None,
                target_main_size: if inflexible {
                    item.hypothetical_main_size
                } else {
                    item.flex_base_size
                },
            }
        })
        .collect();

    let initial_free_space = remaining_free_space(distributable, items, &slots);
    debug!(
        target: "flex_layout::resolve",
        "line of {}: available_flex_space={available_flex_space:.3} initial_free_space={initial_free_space:.3} growing={growing}",
        items.len()
    );

    // Every round freezes at least one item, so the item count bounds the
    // iteration.
    for _round in 0..items.len() {
        if slots.iter().all(|slot| slot.frozen) {
            break;
        }
        let remaining = remaining_free_space(distributable, items, &slots);
        let factor_sum: f32 = items
            .iter()
            .zip(&slots)
            .filter(|(_, slot)| !slot.frozen)
            .map(|(item, _)| {
                if growing {
                    item.flex_grow_factor
                } else {
                    item.flex_shrink_factor
                }
            })
            .sum();

        // A fractional total flex factor only consumes that fraction of the
        // free space; take whichever amount has the smaller magnitude.
        let mut amount = remaining;
        if factor_sum < 1.0 {
            let scaled = initial_free_space * factor_sum;
            if scaled.abs() < remaining.abs() {
                amount = scaled;
            }
        }

        if amount != 0.0 && factor_sum > 0.0 {
            if growing {
                for (item, slot) in items.iter().zip(slots.iter_mut()) {
                    if slot.frozen {
                        continue;
                    }
                    slot.target_main_size =
                        item.flex_base_size + (item.flex_grow_factor / factor_sum) * amount;
                }
            } else {
                // Shrink proportionally to both the factor and the item's
                // own base size, so large items give up more pixels.
                let scaled_shrink_sum: f32 = items
                    .iter()
                    .zip(&slots)
                    .filter(|(_, slot)| !slot.frozen)
                    .map(|(item, _)| item.flex_shrink_factor * item.inner_flex_base_size)
                    .sum();
                if scaled_shrink_sum > 0.0 {
                    for (item, slot) in items.iter().zip(slots.iter_mut()) {
                        if slot.frozen {
                            continue;
                        }
                        let weight = item.flex_shrink_factor * item.inner_flex_base_size;
                        slot.target_main_size =
                            item.flex_base_size - (weight / scaled_shrink_sum) * amount.abs();
                    }
                }
            }
        }

        // Clamp targets and tally how far the clamps moved them in total.
        let mut total_violation = 0.0f32;
        for (item, slot) in items.iter().zip(slots.iter_mut()) {
            if slot.frozen {
                continue;
            }
            let inner_target = slot.target_main_size - item.main.sum_edges;
            let clamped = clamp_inner_size(inner_target, item.main.min_size, item.main.max_size);
            slot.violation = if clamped > inner_target {
                Violation::Min
            } else if clamped < inner_target {
                Violation::Max
            } else {
                Violation::None
            };
            total_violation += clamped - inner_target;
            slot.target_main_size = clamped + item.main.sum_edges;
        }

        // Freeze the side that lost: net min violations keep their floors,
        // net max violations keep their ceilings, a clean round freezes all.
        for slot in slots.iter_mut() {
            if slot.frozen {
                continue;
            }
            let freeze = if total_violation > 0.0 {
                slot.violation == Violation::Min
            } else if total_violation < 0.0 {
                slot.violation == Violation::Max
            } else {
                true
            };
            if freeze {
                slot.frozen = true;
            }
        }
    }

    for (item, slot) in items.iter_mut().zip(&slots) {
        item.used_main_size = slot.target_main_size;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemAxisEdges;
    use crate::tree::ElementKey;
    use box_model::ResolvedSides;
    use style_model::AlignSelf;

    fn axis(min_size: f32, max_size: f32, sum_edges: f32) -> ItemAxisEdges {
        ItemAxisEdges {
            auto_margin_leading: false,
            auto_margin_trailing: false,
            auto_size: true,
            margin_leading: 0.0,
            sum_padding_border: 0.0,
            sum_edges,
            min_size,
            max_size,
        }
    }

    fn flexible_item(key: u64, base: f32, grow: f32, shrink: f32) -> FlexItem {
        let main = axis(0.0, f32::INFINITY, 0.0);
        FlexItem {
            element: ElementKey(key),
            main,
            cross: axis(0.0, f32::INFINITY, 0.0),
            flex_grow_factor: grow,
            flex_shrink_factor: shrink,
            align_self: AlignSelf::Stretch,
            cross_inner_size: None,
            inner_flex_base_size: base,
            flex_base_size: base,
            hypothetical_main_size: clamp_inner_size(base, main.min_size, main.max_size),
            used_main_size: 0.0,
            hypothetical_cross_size: 0.0,
            used_cross_size: 0.0,
            sides: ResolvedSides::default(),
        }
    }

    fn with_min(mut item: FlexItem, min_size: f32) -> FlexItem {
        item.main.min_size = min_size;
        item.hypothetical_main_size =
            clamp_inner_size(item.inner_flex_base_size, min_size, item.main.max_size);
        item
    }

    fn with_max(mut item: FlexItem, max_size: f32) -> FlexItem {
        item.main.max_size = max_size;
        item.hypothetical_main_size =
            clamp_inner_size(item.inner_flex_base_size, item.main.min_size, max_size);
        item
    }

    #[test]
    /// # Panics
    /// Panics if grow factors 1:2 do not split 300px into 100/200.
    fn grow_splits_proportionally() {
        let mut items = vec![
            flexible_item(1, 0.0, 1.0, 0.0),
            flexible_item(2, 0.0, 2.0, 0.0),
        ];
        resolve_flexible_lengths(&mut items, 300.0);
        assert!((items.first().unwrap().used_main_size - 100.0).abs() < 0.001);
        assert!((items.get(1).unwrap().used_main_size - 200.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if equal-base shrink does not reduce items equally.
    fn shrink_reduces_equal_bases_equally() {
        let mut items = vec![
            flexible_item(1, 60.0, 0.0, 1.0),
            flexible_item(2, 60.0, 0.0, 1.0),
            flexible_item(3, 60.0, 0.0, 1.0),
        ];
        resolve_flexible_lengths(&mut items, 100.0);
        let total: f32 = items.iter().map(|item| item.used_main_size).sum();
        assert!((total - 100.0).abs() < 0.001, "shrink must consume the deficit");
        for item in &items {
            assert!((item.used_main_size - 100.0 / 3.0).abs() < 0.001);
        }
    }

    #[test]
    /// # Panics
    /// Panics if a max clamp does not redistribute the excess to the
    /// remaining items.
    fn max_violation_redistributes() {
        let mut items = vec![
            with_max(flexible_item(1, 0.0, 1.0, 0.0), 50.0),
            flexible_item(2, 0.0, 1.0, 0.0),
        ];
        resolve_flexible_lengths(&mut items, 300.0);
        assert!((items.first().unwrap().used_main_size - 50.0).abs() < 0.001);
        assert!((items.get(1).unwrap().used_main_size - 250.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a min clamp does not push the deficit onto the other items.
    fn min_violation_redistributes() {
        let mut items = vec![
            with_min(flexible_item(1, 100.0, 0.0, 1.0), 90.0),
            flexible_item(2, 100.0, 0.0, 1.0),
        ];
        resolve_flexible_lengths(&mut items, 120.0);
        assert!((items.first().unwrap().used_main_size - 90.0).abs() < 0.001);
        assert!((items.get(1).unwrap().used_main_size - 30.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a zero-factor item moves, or the flexible item fails to
    /// absorb all free space.
    fn zero_factor_items_never_move() {
        let mut items = vec![
            flexible_item(1, 80.0, 0.0, 0.0),
            flexible_item(2, 20.0, 1.0, 0.0),
        ];
        resolve_flexible_lengths(&mut items, 200.0);
        assert!((items.first().unwrap().used_main_size - 80.0).abs() < 0.001);
        assert!((items.get(1).unwrap().used_main_size - 120.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if a fractional factor sum consumes more than its share of the
    /// free space.
    fn fractional_factor_sum_limits_distribution() {
        let mut items = vec![flexible_item(1, 0.0, 0.5, 0.0)];
        resolve_flexible_lengths(&mut items, 100.0);
        // flex-grow: 0.5 only takes half the free space.
        assert!((items.first().unwrap().used_main_size - 50.0).abs() < 0.001);
    }

    #[test]
    /// # Panics
    /// Panics if edges are counted as flexible space; only the inner size
    /// may grow.
    fn edges_are_not_flexible() {
        let mut item = flexible_item(1, 10.0, 1.0, 1.0);
        item.main = axis(0.0, f32::INFINITY, 20.0);
        item.flex_base_size = item.inner_flex_base_size + 20.0;
        item.hypothetical_main_size = item.flex_base_size;
        let mut items = vec![item];
        resolve_flexible_lengths(&mut items, 100.0);
        let resolved = items.first().unwrap();
        assert!((resolved.used_main_size - 100.0).abs() < 0.001);
        // Inner size is outer minus edges.
        assert!((resolved.used_main_size - resolved.main.sum_edges - 80.0).abs() < 0.001);
    }
}

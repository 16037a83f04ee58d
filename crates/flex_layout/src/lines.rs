//! Partitioning items into flex lines.

use crate::item::FlexItem;
use box_model::AvailableSize;
use log::debug;
use smallvec::SmallVec;

/// One wrap line: a `[start, end)` range over the item list.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FlexLine {
    pub start: usize,
    pub end: usize,
    /// Sum of the items' outer hypothetical main sizes plus the main-axis
    /// gaps between adjacent items.
    pub accumulated_hypothetical_main_size: f32,
    /// Resolved by the cross-size pass.
    pub cross_size: f32,
}

impl FlexLine {
    #[inline]
    pub fn item_count(&self) -> usize {
        self.end - self.start
    }

    /// Total main-axis gap space inside this line.
    #[inline]
    pub fn gaps_total(&self, main_gap: f32) -> f32 {
        (self.item_count().saturating_sub(1)) as f32 * main_gap
    }
}

/// Most containers produce a single line.
pub(crate) type LineList = SmallVec<FlexLine, 1>;

fn close_line(lines: &mut LineList, items: &[FlexItem], start: usize, end: usize, main_gap: f32) {
    let accumulated = items
        .get(start..end)
        .map_or(0.0, |line_items| {
            line_items
                .iter()
                .map(|item| item.hypothetical_main_size)
                .sum()
        })
        + (end - start).saturating_sub(1) as f32 * main_gap;
    lines.push(FlexLine {
        start,
        end,
        accumulated_hypothetical_main_size: accumulated,
        cross_size: 0.0,
    });
}

/// Break items into lines.
///
/// A single-line container (or an unbounded main axis) produces one line.
/// Otherwise items accumulate until adding the next would exceed the
/// available main size; a line always keeps at least one item, so an
/// oversized item occupies a line alone rather than starving the walk.
pub(crate) fn break_into_lines(
    items: &[FlexItem],
    single_line: bool,
    main_gap: f32,
    main_available: AvailableSize,
) -> LineList {
    let mut lines = LineList::new();
    if items.is_empty() {
        return lines;
    }
    let limit = match main_available {
        AvailableSize::Definite(limit) if !single_line => limit,
        AvailableSize::Definite(_) | AvailableSize::Indefinite => {
            close_line(&mut lines, items, 0, items.len(), main_gap);
            return lines;
        }
    };

    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (index, item) in items.iter().enumerate() {
        let gap = if index == start { 0.0 } else { main_gap };
        let next = cursor + gap + item.hypothetical_main_size;
        if next > limit && index > start {
            close_line(&mut lines, items, start, index, main_gap);
            start = index;
            cursor = item.hypothetical_main_size;
        } else {
            cursor = next;
        }
    }
    close_line(&mut lines, items, start, items.len(), main_gap);
    debug!(
        target: "flex_layout::lines",
        "{} item(s) broke into {} line(s)",
        items.len(),
        lines.len()
    );
    lines
}

/// The container's used main size: the definite available size when there is
/// one, otherwise the widest line sizes the container to its content.
pub(crate) fn used_main_size(lines: &[FlexLine], main_available: AvailableSize) -> f32 {
    main_available.definite_or(
        lines
            .iter()
            .map(|line| line.accumulated_hypothetical_main_size)
            .fold(0.0, f32::max),
    )
}

//! Box model — geometry, length resolution, and box construction.
//!
//! Resolves an element's margin/padding/border and sizing constraints from
//! computed style against a percentage base, transforms between content-box
//! and border-box sizes, and carries the resolved box handed to sub-layout.

pub mod boxes;
pub mod geometry;
pub mod sizing;

pub use boxes::LayoutBox;
pub use geometry::{Axis, AvailableSize, Vec2, snap_extent, snap_position};
pub use sizing::{
    EdgeAutoFlags, ResolvedSides, apply_box_sizing, apply_constraints, resolve_box_sides,
    resolve_length, resolve_length_or_auto,
};

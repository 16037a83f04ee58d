//! Basic geometry types used across the layout crates.

use style_model::Edges;

/// A 2D vector in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// One of the two layout axes.
///
/// Flex layout works in main/cross terms; this maps those onto the physical
/// horizontal/vertical axes of the page.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Component of `point` along this axis.
    #[inline]
    pub const fn of(self, point: Vec2) -> f32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Build a vector from a component along this axis and one along the
    /// perpendicular axis.
    #[inline]
    pub const fn pack(self, along: f32, across: f32) -> Vec2 {
        match self {
            Self::Horizontal => Vec2::new(along, across),
            Self::Vertical => Vec2::new(across, along),
        }
    }

    /// The leading edge width along this axis (left or top).
    #[inline]
    pub fn leading_of(self, edges: &Edges) -> f32 {
        match self {
            Self::Horizontal => edges.left,
            Self::Vertical => edges.top,
        }
    }

    /// The trailing edge width along this axis (right or bottom).
    #[inline]
    pub fn trailing_of(self, edges: &Edges) -> f32 {
        match self {
            Self::Horizontal => edges.right,
            Self::Vertical => edges.bottom,
        }
    }

    /// Sum of both edge widths along this axis.
    #[inline]
    pub fn sum_of(self, edges: &Edges) -> f32 {
        match self {
            Self::Horizontal => edges.horizontal_sum(),
            Self::Vertical => edges.vertical_sum(),
        }
    }
}

/// Available space along one axis.
///
/// The indefinite case replaces the negative-size convention some callers
/// use on the wire; inside layout an axis is either a definite pixel amount
/// or unbounded, never a signed sentinel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AvailableSize {
    Definite(f32),
    Indefinite,
}

impl AvailableSize {
    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }

    /// The definite value, if any.
    #[inline]
    pub const fn definite(self) -> Option<f32> {
        match self {
            Self::Definite(value) => Some(value),
            Self::Indefinite => None,
        }
    }

    /// The definite value, or `fallback` when indefinite.
    #[inline]
    pub const fn definite_or(self, fallback: f32) -> f32 {
        match self {
            Self::Definite(value) => value,
            Self::Indefinite => fallback,
        }
    }
}

/// Snap a position to the rendering pixel grid.
#[inline]
pub fn snap_position(position: Vec2) -> Vec2 {
    Vec2::new(position.x.round(), position.y.round())
}

/// Snap an offset/size pair to the pixel grid along one axis.
///
/// Both ends of the extent land on whole pixels, so the snapped size is the
/// distance between the snapped ends rather than an independently rounded
/// value. Keeps adjacent boxes gapless after snapping.
#[inline]
pub fn snap_extent(offset: f32, size: f32) -> (f32, f32) {
    let start = offset.round();
    let end = (offset + size).round();
    (start, (end - start).max(0.0))
}

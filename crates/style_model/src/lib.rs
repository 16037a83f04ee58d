//! Computed-style value model consumed by the layout crates.
//!
//! This crate carries the pre-validated style values layout works from. It
//! deliberately knows nothing about cascading or parsing; a style system
//! upstream produces one `ComputedStyle` per element.

/// A length or percentage value with no `auto` keyword (padding, gaps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Pixels(f32),
    Percent(f32),
}

impl Default for Length {
    fn default() -> Self {
        Self::Pixels(0.0)
    }
}

/// A size-like value that may also be the `auto` keyword.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LengthOrAuto {
    #[default]
    Auto,
    Pixels(f32),
    Percent(f32),
}

/// Resolved per-side widths in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Sum of the left and right sides.
    #[inline]
    pub fn horizontal_sum(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of the top and bottom sides.
    #[inline]
    pub fn vertical_sum(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Per-side specified values where each side may be `auto` (margins).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgesSpecified {
    pub top: LengthOrAuto,
    pub right: LengthOrAuto,
    pub bottom: LengthOrAuto,
    pub left: LengthOrAuto,
}

impl EdgesSpecified {
    #[inline]
    pub const fn uniform(value: LengthOrAuto) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Display {
    #[default]
    Block,
    Flex,
    None,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
    Auto,
}

/// Spec: <https://www.w3.org/TR/css-sizing-3/#box-sizing>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum BoxSizing {
    #[default]
    ContentBox,
    BorderBox,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-wrap-property>
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FlexWrap {
    #[default]
    Nowrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum JustifyContent {
    #[default]
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AlignItems {
    #[default]
    Stretch,
    Center,
    FlexStart,
    FlexEnd,
    Baseline,
}

/// Per-item override of the container's `align-items`; `Auto` inherits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AlignSelf {
    #[default]
    Auto,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Stretch,
}

/// Cross-axis packing of wrapped lines. Only `Stretch` distributes leftover
/// space; the remaining keywords pack lines at the start.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AlignContent {
    #[default]
    Stretch,
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// The computed-style subset layout reads.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub position: Position,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub box_sizing: BoxSizing,

    pub width: LengthOrAuto,
    pub height: LengthOrAuto,
    pub min_width: LengthOrAuto,
    pub max_width: LengthOrAuto,
    pub min_height: LengthOrAuto,
    pub max_height: LengthOrAuto,

    pub margin: EdgesSpecified,
    pub padding: EdgesSpecified,
    pub border_width: Edges,

    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub flex_basis: LengthOrAuto,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub order: i32,

    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub align_content: AlignContent,

    pub row_gap: Length,
    pub column_gap: Length,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            display: Display::default(),
            position: Position::default(),
            overflow_x: Overflow::default(),
            overflow_y: Overflow::default(),
            box_sizing: BoxSizing::default(),
            width: LengthOrAuto::Auto,
            height: LengthOrAuto::Auto,
            min_width: LengthOrAuto::Auto,
            max_width: LengthOrAuto::Auto,
            min_height: LengthOrAuto::Auto,
            max_height: LengthOrAuto::Auto,
            margin: EdgesSpecified::default(),
            padding: EdgesSpecified::default(),
            border_width: Edges::default(),
            flex_direction: FlexDirection::default(),
            flex_wrap: FlexWrap::default(),
            flex_basis: LengthOrAuto::Auto,
            flex_grow: 0.0,
            // The initial value is 1, so deriving Default would get this wrong.
            flex_shrink: 1.0,
            order: 0,
            justify_content: JustifyContent::default(),
            align_items: AlignItems::default(),
            align_self: AlignSelf::default(),
            align_content: AlignContent::default(),
            row_gap: Length::default(),
            column_gap: Length::default(),
        }
    }
}

impl ComputedStyle {
    /// True when this element is taken out of normal flow.
    #[inline]
    pub fn is_out_of_flow(&self) -> bool {
        matches!(self.position, Position::Absolute | Position::Fixed)
    }
}

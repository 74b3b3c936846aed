//! The layout engine's view of an element, as far as resolved style needs it.
//!
//! [CSSOM § 6.7.1 Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//!
//! "The resolved value for a given longhand property can be determined as
//! follows". For many properties that means reading the *used* value the
//! layout engine settled on. The layout engine owns these structures and
//! refreshes them on `update_layout()`; this crate only reads them.

use serde::Serialize;

use crate::values::{
    Color, Length, LengthPercentage, PositionEdge, Size, Transformation, ValueId,
};

/// A value per physical side, in CSS order (top, right, bottom, left).
///
/// [§ 3 The CSS Box Model](https://www.w3.org/TR/css-box-3/#box-model)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Sides<T> {
    /// Top side.
    pub top: T,
    /// Right side.
    pub right: T,
    /// Bottom side.
    pub bottom: T,
    /// Left side.
    pub left: T,
}

impl<T: Clone> Sides<T> {
    /// The same value on all four sides.
    #[must_use]
    pub fn all(value: T) -> Self {
        Self {
            top: value.clone(),
            right: value.clone(),
            bottom: value.clone(),
            left: value,
        }
    }
}

/// [CSS Backgrounds 3 § 3.9 'background-size'](https://www.w3.org/TR/css-backgrounds-3/#background-size)
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum BackgroundSize {
    /// `cover`
    Cover,
    /// `contain`
    Contain,
    /// `auto auto`
    #[default]
    Auto,
    /// An explicit `<bg-size>` pair; an `auto` component is
    /// `LengthPercentage::Auto`.
    LengthPercentage {
        /// Horizontal size.
        width: LengthPercentage,
        /// Vertical size.
        height: LengthPercentage,
    },
}

/// One layer of an element's background, with every per-layer property
/// already matched up.
///
/// [CSS Backgrounds 3 § 3.1 Layering Multiple Background Images](https://www.w3.org/TR/css-backgrounds-3/#layering)
///
/// "The background of a box can have multiple layers."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackgroundLayer {
    /// Horizontal edge `background-position` is measured from.
    pub position_edge_x: PositionEdge,
    /// Offset from `position_edge_x`.
    pub position_offset_x: LengthPercentage,
    /// Vertical edge `background-position` is measured from.
    pub position_edge_y: PositionEdge,
    /// Offset from `position_edge_y`.
    pub position_offset_y: LengthPercentage,
    /// `background-size`
    pub size: BackgroundSize,
    /// `background-repeat` (horizontal)
    pub repeat_x: ValueId,
    /// `background-repeat` (vertical)
    pub repeat_y: ValueId,
}

impl Default for BackgroundLayer {
    /// "Initial: 0% 0%", `auto` size, `repeat`.
    fn default() -> Self {
        Self {
            position_edge_x: PositionEdge::Left,
            position_offset_x: LengthPercentage::percent(0.0),
            position_edge_y: PositionEdge::Top,
            position_offset_y: LengthPercentage::percent(0.0),
            size: BackgroundSize::Auto,
            repeat_x: ValueId::Repeat,
            repeat_y: ValueId::Repeat,
        }
    }
}

/// The box-model snapshot a layout node carries: computed values resolved as
/// far as layout needs them, with colors already resolved to used colors.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ComputedValues {
    /// `color`
    pub color: Color,
    /// `background-color`
    pub background_color: Color,
    /// `border-*-color`
    pub border_color: Sides<Color>,
    /// `outline-color`
    pub outline_color: Color,
    /// `text-decoration-color`
    pub text_decoration_color: Color,
    /// `margin-*`
    pub margin: Sides<LengthPercentage>,
    /// `padding-*`
    pub padding: Sides<LengthPercentage>,
    /// `top` / `right` / `bottom` / `left`
    pub inset: Sides<LengthPercentage>,
    /// `width`
    pub width: Size,
    /// `height`
    pub height: Size,
    /// The background layers, bottom-most last as in the declaration.
    pub background_layers: Vec<BackgroundLayer>,
    /// The computed `transform` list, in application order.
    pub transformations: Vec<Transformation>,
}

/// A node of the layout tree that was generated for an element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    /// The element's box-model snapshot.
    pub computed_values: ComputedValues,
    /// [CSS Inline 3 § 4.2 'line-height'](https://www.w3.org/TR/css-inline-3/#line-height-property)
    ///
    /// The used line height.
    pub line_height: Length,
}

impl LayoutNode {
    /// Create a layout node with a used line-height in pixels.
    #[must_use]
    pub const fn new(computed_values: ComputedValues, line_height_px: f64) -> Self {
        Self {
            computed_values,
            line_height: Length::make_px(line_height_px),
        }
    }
}

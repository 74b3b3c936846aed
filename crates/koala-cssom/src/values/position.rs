//! `<position>` values.
//!
//! [CSS Values and Units Level 4 § 9.1 2D Positioning](https://www.w3.org/TR/css-values-4/#position)

use serde::Serialize;
use strum_macros::Display;

use super::length::LengthPercentage;

/// The side a `<position>` component is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PositionEdge {
    /// Horizontal offset from the left edge.
    Left,
    /// Horizontal offset from the right edge.
    Right,
    /// Vertical offset from the top edge.
    Top,
    /// Vertical offset from the bottom edge.
    Bottom,
}

/// "`<position>` = [ left | center | right | top | bottom | `<length-percentage>` ] ..."
///
/// One axis of a position, normalized to an edge keyword and an offset from it
/// (e.g. `right 10px`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeValue {
    /// The side the offset is measured from.
    pub edge: PositionEdge,
    /// The distance from that side.
    pub offset: LengthPercentage,
}

impl EdgeValue {
    /// Create an edge + offset pair.
    #[must_use]
    pub const fn new(edge: PositionEdge, offset: LengthPercentage) -> Self {
        Self { edge, offset }
    }
}

/// A full 2D position: one horizontal and one vertical [`EdgeValue`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionValue {
    /// Horizontal component.
    pub x: EdgeValue,
    /// Vertical component.
    pub y: EdgeValue,
}

impl PositionValue {
    /// Create a position from its two axes.
    #[must_use]
    pub const fn new(x: EdgeValue, y: EdgeValue) -> Self {
        Self { x, y }
    }

    /// [CSS Backgrounds 3 § 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    ///
    /// "Initial: 0% 0%", which normalizes to `left 0% top 0%`.
    #[must_use]
    pub const fn top_left() -> Self {
        Self::new(
            EdgeValue::new(PositionEdge::Left, LengthPercentage::percent(0.0)),
            EdgeValue::new(PositionEdge::Top, LengthPercentage::percent(0.0)),
        )
    }
}

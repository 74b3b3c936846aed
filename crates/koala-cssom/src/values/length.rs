//! CSS numeric values: lengths, percentages, and the layout-facing
//! `<length-percentage>` and sizing types.
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)

use std::rc::Rc;

use serde::Serialize;
use strum_macros::Display;

use super::calc::CalculatedValue;

/// [§ 6 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// The units a computed `<length>` may still carry. Font- and
/// viewport-relative units only survive until layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LengthUnit {
    /// "1px = 1/96th of 1in"
    Px,
    /// "Equal to the computed value of the font-size property of the element"
    Em,
    /// "Equal to the computed value of font-size on the root element."
    Rem,
    /// "1vw = 1% of viewport width"
    Vw,
    /// "1vh = 1% of viewport height"
    Vh,
}

/// [§ 4.1 Lengths](https://www.w3.org/TR/css-values-4/#lengths)
///
/// "Lengths refer to distance measurements and are denoted by `<length>` in the
/// property definitions."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Length {
    /// The numeric part.
    pub value: f64,
    /// The unit part.
    pub unit: LengthUnit,
}

impl Length {
    /// Create a length with an explicit unit.
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Create a length in CSS pixels.
    #[must_use]
    pub const fn make_px(value: f64) -> Self {
        Self::new(value, LengthUnit::Px)
    }
}

/// [§ 4.3 Percentages](https://www.w3.org/TR/css-values-4/#percentages)
///
/// "A `<percentage>` value is denoted by `<percentage>`, and consists of a
/// `<number>` immediately followed by a percent sign '%'."
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Percentage(pub f64);

impl Percentage {
    /// The stored percentage, e.g. `50.0` for `50%`.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

/// [§ 4.4 Mixing Percentages and Dimensions](https://www.w3.org/TR/css-values-4/#mixed-percentages)
///
/// A `<length-percentage>` as stored in the layout node for margins, padding
/// and insets, where `auto` is also allowed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LengthPercentage {
    /// The keyword `auto`.
    Auto,
    /// A plain `<length>`.
    Length(Length),
    /// A plain `<percentage>`.
    Percentage(Percentage),
    /// A `calc()` mixing lengths and percentages that could not be simplified
    /// before layout.
    Calculated(Rc<CalculatedValue>),
}

impl LengthPercentage {
    /// Shorthand for a pixel length.
    #[must_use]
    pub const fn px(value: f64) -> Self {
        Self::Length(Length::make_px(value))
    }

    /// Shorthand for a percentage.
    #[must_use]
    pub const fn percent(value: f64) -> Self {
        Self::Percentage(Percentage(value))
    }
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::px(0.0)
    }
}

/// [CSS Box Sizing Level 3 § 3 Sizing Properties](https://www.w3.org/TR/css-sizing-3/#sizing-properties)
///
/// "Value: auto | `<length-percentage>` | min-content | max-content |
/// fit-content(`<length-percentage>`)"
///
/// The layout node's value for `width` / `height` (and the min/max variants,
/// which also accept `none`).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum Size {
    /// `auto`
    #[default]
    Auto,
    /// `none` (only valid for max-width / max-height)
    None,
    /// A `<length>`.
    Length(Length),
    /// A `<percentage>`.
    Percentage(Percentage),
    /// A `calc()` expression.
    Calculated(Rc<CalculatedValue>),
    /// `min-content`
    MinContent,
    /// `max-content`
    MaxContent,
    /// `fit-content` as a bare keyword.
    FitContent,
    /// The `fit-content(<length-percentage>)` function form.
    FitContentLength(LengthPercentage),
}

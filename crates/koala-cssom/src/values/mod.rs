//! Style values: the universal output representation of resolved style.
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)
//!
//! # Type Design
//!
//! | Variant | Spec Grammar | Example |
//! |---------|--------------|---------|
//! | `Identifier` | `<ident>` keyword | `auto`, `none`, `normal` |
//! | `Length` | `<length>` | `10px` |
//! | `Percentage` | `<percentage>` | `5%` |
//! | `Number` | `<number>` | `0.5` |
//! | `Color` | `<color>` | `rgb(255, 0, 0)` |
//! | `Position` | `<position>` | `left 0% top 0%` |
//! | `List` | space / comma separated values | `10px 5%` |
//! | `Shorthand` | a shorthand rebuilt from longhands | `1px solid red` |
//! | `Transformation` | `<transform-function>` | `matrix(1, 0, 0, 1, 0, 0)` |
//! | `Calculated` | `calc()` | `calc(100% - 10px)` |
//!
//! Values are shared as `Rc<StyleValue>` and never mutated once built: a
//! derived value is always a freshly constructed one. Equality is structural,
//! so two independently built `10px` values compare equal.

mod calc;
mod color;
mod length;
mod position;
mod transform;

use std::rc::Rc;

use serde::Serialize;
use strum_macros::Display;

use crate::property::PropertyId;

pub use calc::{CalcNode, CalculatedValue};
pub use color::Color;
pub use length::{Length, LengthPercentage, LengthUnit, Percentage, Size};
pub use position::{EdgeValue, PositionEdge, PositionValue};
pub use transform::{
    AffineTransform, TransformArgument, TransformFunction, Transformation, TransformationValue,
};

/// CSS keywords a style value can hold.
///
/// Only the keywords the engine can produce as computed or resolved values
/// are listed; everything else is rejected at parse time upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ValueId {
    /// Returned for the `Invalid` property sentinel.
    Invalid,
    /// `auto`
    Auto,
    /// `none`
    None,
    /// `normal`
    Normal,
    /// `min-content`
    MinContent,
    /// `max-content`
    MaxContent,
    /// `fit-content`
    FitContent,
    /// `solid` border / outline / decoration style
    Solid,
    /// `dashed`
    Dashed,
    /// `dotted`
    Dotted,
    /// `double`
    Double,
    /// `hidden`
    Hidden,
    /// `visible`
    Visible,
    /// `block`
    Block,
    /// `inline`
    Inline,
    /// `inline-block`
    InlineBlock,
    /// `flex`
    Flex,
    /// `static`
    Static,
    /// `relative`
    Relative,
    /// `absolute`
    Absolute,
    /// `fixed`
    Fixed,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `center`
    Center,
    /// `italic`
    Italic,
    /// `bold`
    Bold,
    /// `underline`
    Underline,
    /// `repeat`
    Repeat,
    /// `no-repeat`
    NoRepeat,
    /// `row`
    Row,
    /// `column`
    Column,
    /// `nowrap`
    Nowrap,
    /// `wrap`
    Wrap,
    /// `sans-serif`
    SansSerif,
    /// `serif`
    Serif,
    /// `monospace`
    Monospace,
}

/// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serialize-a-css-component-value)
///
/// The separator a list of values is joined with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    /// `a b c`
    Space,
    /// `a, b, c`
    Comma,
}

/// An ordered list of values with a fixed separator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleValueList {
    values: Vec<Rc<StyleValue>>,
    separator: Separator,
}

impl StyleValueList {
    /// Create a list. The separator cannot be changed afterwards.
    #[must_use]
    pub const fn new(values: Vec<Rc<StyleValue>>, separator: Separator) -> Self {
        Self { values, separator }
    }

    /// The values, in order.
    #[must_use]
    pub const fn values(&self) -> &[Rc<StyleValue>] {
        self.values.as_slice()
    }

    /// The separator this list was built with.
    #[must_use]
    pub const fn separator(&self) -> Separator {
        self.separator
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// [CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serialize-a-css-value)
///
/// A shorthand rebuilt from the values of its longhands.
///
/// `sub_properties[i]` is the longhand that produced `values[i]`; both follow
/// the shorthand's declared longhand order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShorthandValue {
    shorthand: PropertyId,
    sub_properties: Vec<PropertyId>,
    values: Vec<Rc<StyleValue>>,
}

impl ShorthandValue {
    /// Create a shorthand value.
    ///
    /// # Panics
    ///
    /// Panics if `sub_properties` and `values` differ in length; callers
    /// always build both from the same longhand list.
    #[must_use]
    pub fn new(
        shorthand: PropertyId,
        sub_properties: Vec<PropertyId>,
        values: Vec<Rc<StyleValue>>,
    ) -> Self {
        assert_eq!(
            sub_properties.len(),
            values.len(),
            "shorthand {shorthand} needs one value per sub-property"
        );
        Self {
            shorthand,
            sub_properties,
            values,
        }
    }

    /// The shorthand property this value is for.
    #[must_use]
    pub const fn shorthand(&self) -> PropertyId {
        self.shorthand
    }

    /// The sub-properties, in declared order.
    #[must_use]
    pub const fn sub_properties(&self) -> &[PropertyId] {
        self.sub_properties.as_slice()
    }

    /// The sub-values, parallel to [`Self::sub_properties`].
    #[must_use]
    pub const fn values(&self) -> &[Rc<StyleValue>] {
        self.values.as_slice()
    }

    /// The value for one sub-property, if it is part of this shorthand.
    #[must_use]
    pub fn value_for(&self, property: PropertyId) -> Option<&Rc<StyleValue>> {
        self.sub_properties
            .iter()
            .position(|&id| id == property)
            .map(|index| &self.values[index])
    }
}

/// A style value. See the [module documentation](self) for the variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum StyleValue {
    /// A keyword.
    Identifier(ValueId),
    /// A `<length>`.
    Length(Length),
    /// A `<percentage>`.
    Percentage(Percentage),
    /// A `<number>`.
    Number(f64),
    /// A `<color>`.
    Color(Color),
    /// A `<position>`.
    Position(PositionValue),
    /// A space or comma separated list.
    List(StyleValueList),
    /// A shorthand rebuilt from its longhands.
    Shorthand(ShorthandValue),
    /// A single transform function.
    Transformation(TransformationValue),
    /// An unsimplified `calc()`.
    Calculated(Rc<CalculatedValue>),
}

impl StyleValue {
    /// `Rc`-wrapped keyword.
    #[must_use]
    pub fn identifier(id: ValueId) -> Rc<Self> {
        Rc::new(Self::Identifier(id))
    }

    /// `Rc`-wrapped length.
    #[must_use]
    pub fn length(length: Length) -> Rc<Self> {
        Rc::new(Self::Length(length))
    }

    /// `Rc`-wrapped percentage.
    #[must_use]
    pub fn percentage(percentage: Percentage) -> Rc<Self> {
        Rc::new(Self::Percentage(percentage))
    }

    /// `Rc`-wrapped number.
    #[must_use]
    pub fn number(number: f64) -> Rc<Self> {
        Rc::new(Self::Number(number))
    }

    /// `Rc`-wrapped color.
    #[must_use]
    pub fn color(color: Color) -> Rc<Self> {
        Rc::new(Self::Color(color))
    }

    /// `Rc`-wrapped list.
    #[must_use]
    pub fn list(values: Vec<Rc<Self>>, separator: Separator) -> Rc<Self> {
        Rc::new(Self::List(StyleValueList::new(values, separator)))
    }

    /// Returns `true` if this is exactly the keyword `id`.
    #[must_use]
    pub fn is_identifier(&self, id: ValueId) -> bool {
        matches!(self, Self::Identifier(value) if *value == id)
    }

    /// Returns `true` if this is a value list.
    #[must_use]
    pub const fn is_value_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The list, if this is one.
    #[must_use]
    pub const fn as_list(&self) -> Option<&StyleValueList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The shorthand, if this is one.
    #[must_use]
    pub const fn as_shorthand(&self) -> Option<&ShorthandValue> {
        match self {
            Self::Shorthand(shorthand) => Some(shorthand),
            _ => None,
        }
    }

    /// The transform function, if this is one.
    #[must_use]
    pub const fn as_transformation(&self) -> Option<&TransformationValue> {
        match self {
            Self::Transformation(transformation) => Some(transformation),
            _ => None,
        }
    }
}

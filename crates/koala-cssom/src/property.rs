//! CSS property identifiers.
//!
//! [CSSOM § 6.6 CSS Declarations](https://www.w3.org/TR/cssom-1/#css-declarations)
//!
//! Every property the engine knows is one [`PropertyId`] variant. Shorthands
//! declare their longhands in [`PropertyId::longhands`]; the order of that list
//! is the order shorthand values are rebuilt in.

use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::error::CssomError;

/// A CSS property, or one of the `Invalid` / `Custom` sentinels.
///
/// The [`Display`](std::fmt::Display) form is the CSS property name
/// (`margin-top`, `z-index`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum PropertyId {
    /// No such property.
    Invalid,
    /// [CSS Variables § 2](https://www.w3.org/TR/css-variables-1/#defining-variables)
    /// "A custom property is any property whose name starts with two dashes"
    Custom,

    // ===== Longhands =====
    /// `background-color`
    BackgroundColor,
    /// `background-image`
    BackgroundImage,
    /// `background-position`
    BackgroundPosition,
    /// `background-repeat`
    BackgroundRepeat,
    /// `background-size`
    BackgroundSize,
    /// `border-bottom-color`
    BorderBottomColor,
    /// `border-bottom-style`
    BorderBottomStyle,
    /// `border-bottom-width`
    BorderBottomWidth,
    /// `border-left-color`
    BorderLeftColor,
    /// `border-left-style`
    BorderLeftStyle,
    /// `border-left-width`
    BorderLeftWidth,
    /// `border-right-color`
    BorderRightColor,
    /// `border-right-style`
    BorderRightStyle,
    /// `border-right-width`
    BorderRightWidth,
    /// `border-top-color`
    BorderTopColor,
    /// `border-top-style`
    BorderTopStyle,
    /// `border-top-width`
    BorderTopWidth,
    /// `bottom`
    Bottom,
    /// `color`
    Color,
    /// `display`
    Display,
    /// `flex-basis`
    FlexBasis,
    /// `flex-direction`
    FlexDirection,
    /// `flex-grow`
    FlexGrow,
    /// `flex-shrink`
    FlexShrink,
    /// `flex-wrap`
    FlexWrap,
    /// `float`
    Float,
    /// `font-family`
    FontFamily,
    /// `font-size`
    FontSize,
    /// `font-style`
    FontStyle,
    /// `font-weight`
    FontWeight,
    /// `height`
    Height,
    /// `left`
    Left,
    /// `line-height`
    LineHeight,
    /// `margin-bottom`
    MarginBottom,
    /// `margin-left`
    MarginLeft,
    /// `margin-right`
    MarginRight,
    /// `margin-top`
    MarginTop,
    /// `max-height`
    MaxHeight,
    /// `max-width`
    MaxWidth,
    /// `min-height`
    MinHeight,
    /// `min-width`
    MinWidth,
    /// `opacity`
    Opacity,
    /// `outline-color`
    OutlineColor,
    /// `outline-style`
    OutlineStyle,
    /// `outline-width`
    OutlineWidth,
    /// `padding-bottom`
    PaddingBottom,
    /// `padding-left`
    PaddingLeft,
    /// `padding-right`
    PaddingRight,
    /// `padding-top`
    PaddingTop,
    /// `position`
    Position,
    /// `right`
    Right,
    /// `text-align`
    TextAlign,
    /// `text-decoration-color`
    TextDecorationColor,
    /// `text-decoration-line`
    TextDecorationLine,
    /// `text-decoration-style`
    TextDecorationStyle,
    /// `top`
    Top,
    /// `transform`
    Transform,
    /// `transform-origin`
    TransformOrigin,
    /// `visibility`
    Visibility,
    /// `width`
    Width,
    /// `z-index`
    ZIndex,

    // ===== Shorthands =====
    /// `background`
    Background,
    /// `border`
    Border,
    /// `border-bottom`
    BorderBottom,
    /// `border-color`
    BorderColor,
    /// `border-left`
    BorderLeft,
    /// `border-right`
    BorderRight,
    /// `border-style`
    BorderStyle,
    /// `border-top`
    BorderTop,
    /// `border-width`
    BorderWidth,
    /// `flex`
    Flex,
    /// `flex-flow`
    FlexFlow,
    /// `font`
    Font,
    /// `inset`
    Inset,
    /// `margin`
    Margin,
    /// `outline`
    Outline,
    /// `padding`
    Padding,
    /// `text-decoration`
    TextDecoration,
}

impl PropertyId {
    /// Look up a property by its CSS name, ASCII case-insensitively.
    ///
    /// [CSS Variables § 2](https://www.w3.org/TR/css-variables-1/#defining-variables):
    /// names starting with `--` are custom properties.
    ///
    /// # Errors
    ///
    /// Returns [`CssomError::UnknownProperty`] if `name` is not a property the
    /// engine knows (including the sentinel names themselves).
    pub fn from_css_name(name: &str) -> Result<Self, CssomError> {
        if name.starts_with("--") {
            return Ok(Self::Custom);
        }
        match name.parse::<Self>() {
            Ok(Self::Invalid | Self::Custom) | Err(_) => {
                Err(CssomError::UnknownProperty(name.to_string()))
            }
            Ok(id) => Ok(id),
        }
    }

    /// The CSS name of this property.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// [CSS Cascade 4 § 1.2 Shorthand Properties](https://www.w3.org/TR/css-cascade-4/#shorthand)
    ///
    /// "Some properties are shorthand properties, meaning that they allow
    /// authors to specify the values of several properties with a single
    /// property."
    ///
    /// The longhands (sub-properties) of a shorthand in canonical order, or an
    /// empty slice for longhands and sentinels. `border` is the only shorthand
    /// whose sub-properties are themselves shorthands.
    #[must_use]
    pub const fn longhands(self) -> &'static [Self] {
        match self {
            Self::Background => &[
                Self::BackgroundColor,
                Self::BackgroundImage,
                Self::BackgroundPosition,
                Self::BackgroundSize,
                Self::BackgroundRepeat,
            ],
            Self::Border => &[Self::BorderWidth, Self::BorderStyle, Self::BorderColor],
            Self::BorderBottom => &[
                Self::BorderBottomWidth,
                Self::BorderBottomStyle,
                Self::BorderBottomColor,
            ],
            Self::BorderColor => &[
                Self::BorderTopColor,
                Self::BorderRightColor,
                Self::BorderBottomColor,
                Self::BorderLeftColor,
            ],
            Self::BorderLeft => &[
                Self::BorderLeftWidth,
                Self::BorderLeftStyle,
                Self::BorderLeftColor,
            ],
            Self::BorderRight => &[
                Self::BorderRightWidth,
                Self::BorderRightStyle,
                Self::BorderRightColor,
            ],
            Self::BorderStyle => &[
                Self::BorderTopStyle,
                Self::BorderRightStyle,
                Self::BorderBottomStyle,
                Self::BorderLeftStyle,
            ],
            Self::BorderTop => &[Self::BorderTopWidth, Self::BorderTopStyle, Self::BorderTopColor],
            Self::BorderWidth => &[
                Self::BorderTopWidth,
                Self::BorderRightWidth,
                Self::BorderBottomWidth,
                Self::BorderLeftWidth,
            ],
            Self::Flex => &[Self::FlexGrow, Self::FlexShrink, Self::FlexBasis],
            Self::FlexFlow => &[Self::FlexDirection, Self::FlexWrap],
            Self::Font => &[
                Self::FontStyle,
                Self::FontWeight,
                Self::FontSize,
                Self::LineHeight,
                Self::FontFamily,
            ],
            Self::Inset => &[Self::Top, Self::Right, Self::Bottom, Self::Left],
            Self::Margin => &[
                Self::MarginTop,
                Self::MarginRight,
                Self::MarginBottom,
                Self::MarginLeft,
            ],
            Self::Outline => &[Self::OutlineColor, Self::OutlineStyle, Self::OutlineWidth],
            Self::Padding => &[
                Self::PaddingTop,
                Self::PaddingRight,
                Self::PaddingBottom,
                Self::PaddingLeft,
            ],
            Self::TextDecoration => &[
                Self::TextDecorationLine,
                Self::TextDecorationStyle,
                Self::TextDecorationColor,
            ],
            _ => &[],
        }
    }

    /// Returns `true` if this is a shorthand property.
    #[must_use]
    pub const fn is_shorthand(self) -> bool {
        !self.longhands().is_empty()
    }

    /// Returns `true` if the resolved value of this property can depend on
    /// layout geometry, so a style query must run layout first rather than
    /// only recomputing style.
    ///
    /// A shorthand affects layout if any of its longhands does.
    #[must_use]
    pub fn affects_layout(self) -> bool {
        match self {
            Self::BorderBottomWidth
            | Self::BorderLeftWidth
            | Self::BorderRightWidth
            | Self::BorderTopWidth
            | Self::Bottom
            | Self::Display
            | Self::FlexBasis
            | Self::FlexDirection
            | Self::FlexGrow
            | Self::FlexShrink
            | Self::FlexWrap
            | Self::Float
            | Self::FontFamily
            | Self::FontSize
            | Self::FontStyle
            | Self::FontWeight
            | Self::Height
            | Self::Left
            | Self::LineHeight
            | Self::MarginBottom
            | Self::MarginLeft
            | Self::MarginRight
            | Self::MarginTop
            | Self::MaxHeight
            | Self::MaxWidth
            | Self::MinHeight
            | Self::MinWidth
            | Self::PaddingBottom
            | Self::PaddingLeft
            | Self::PaddingRight
            | Self::PaddingTop
            | Self::Position
            | Self::Right
            | Self::TextAlign
            | Self::Top
            | Self::Transform
            | Self::TransformOrigin
            | Self::Width => true,
            _ => self.longhands().iter().any(|longhand| longhand.affects_layout()),
        }
    }
}

//! CSS Color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::Serialize;

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White (#ffffff)
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    /// "green" is #008000, not #00ff00 (that is "lime").
    pub const GREEN: Self = Self::rgb(0, 128, 0);

    /// [§ 6.3 The 'transparent' keyword](https://www.w3.org/TR/css-color-4/#transparent-color)
    ///
    /// "The keyword transparent specifies a transparent black."
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// A color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

impl Default for Color {
    /// The initial value of `color` in Koala's UA stylesheet.
    fn default() -> Self {
        Self::BLACK
    }
}

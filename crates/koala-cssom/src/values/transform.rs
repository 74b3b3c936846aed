//! Transform functions and 2D affine matrices.
//!
//! [CSS Transforms Module Level 1](https://www.w3.org/TR/css-transforms-1/)

use std::rc::Rc;

use serde::Serialize;
use strum_macros::Display;

use super::StyleValue;
use super::length::LengthPercentage;

/// [§ 13 The Transform Functions](https://www.w3.org/TR/css-transforms-1/#transform-functions)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum TransformFunction {
    /// `matrix(a, b, c, d, e, f)`
    Matrix,
    /// `translate(tx, ty)`
    Translate,
    /// `translateX(tx)`
    TranslateX,
    /// `translateY(ty)`
    TranslateY,
    /// `scale(sx, sy)`
    Scale,
    /// `scaleX(sx)`
    ScaleX,
    /// `scaleY(sy)`
    ScaleY,
    /// `rotate(angle)`
    Rotate,
    /// `skew(ax, ay)`
    Skew,
    /// `skewX(ax)`
    SkewX,
    /// `skewY(ay)`
    SkewY,
}

/// An argument of a transform function as stored on the layout node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TransformArgument {
    /// A `<length-percentage>` (translations).
    Length(LengthPercentage),
    /// An `<angle>`, normalized to degrees.
    AngleDegrees(f64),
    /// A plain `<number>` (scales, matrix components).
    Number(f64),
}

/// One entry of the computed `transform` list, as the layout node keeps it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transformation {
    /// Which function this is.
    pub function: TransformFunction,
    /// Its arguments in source order.
    pub arguments: Vec<TransformArgument>,
}

impl Transformation {
    /// Create a transformation descriptor.
    #[must_use]
    pub const fn new(function: TransformFunction, arguments: Vec<TransformArgument>) -> Self {
        Self {
            function,
            arguments,
        }
    }
}

/// A transform function as a style value: the function kind and its
/// parameters, themselves style values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformationValue {
    function: TransformFunction,
    parameters: Vec<Rc<StyleValue>>,
}

impl TransformationValue {
    /// Create a transform function value.
    #[must_use]
    pub const fn new(function: TransformFunction, parameters: Vec<Rc<StyleValue>>) -> Self {
        Self {
            function,
            parameters,
        }
    }

    /// The function kind.
    #[must_use]
    pub const fn function(&self) -> TransformFunction {
        self.function
    }

    /// The parameters, in order.
    #[must_use]
    pub const fn parameters(&self) -> &[Rc<StyleValue>] {
        self.parameters.as_slice()
    }
}

/// [§ 13.1 2D Transform Functions](https://www.w3.org/TR/css-transforms-1/#two-d-transform-functions)
///
/// "specifies a 2D transformation in the form of a transformation matrix of
/// the six values a, b, c, d, e, f."
///
/// ```text
/// | a c e |
/// | b d f |
/// | 0 0 1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AffineTransform {
    /// Scale / rotate X component.
    pub a: f64,
    /// Skew / rotate Y component of the x basis.
    pub b: f64,
    /// Skew / rotate X component of the y basis.
    pub c: f64,
    /// Scale / rotate Y component.
    pub d: f64,
    /// Translation along X.
    pub e: f64,
    /// Translation along Y.
    pub f: f64,
}

impl AffineTransform {
    /// The identity matrix.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// "`rotate() = rotate( <angle> )`" as `matrix(cos, sin, -sin, cos, 0, 0)`.
    #[must_use]
    pub fn rotation(degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// "`translate() = translate( <length-percentage> , <length-percentage>? )`"
    /// with both components already resolved to pixels.
    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// The six components in `matrix()` argument order.
    #[must_use]
    pub const fn components(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

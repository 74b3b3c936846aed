//! [§ 10 Mathematical Expressions](https://www.w3.org/TR/css-values-4/#math)
//!
//! The style engine hands us `calc()` trees it could not simplify before
//! layout. We never evaluate them; a resolved value simply passes the same
//! tree through.

use serde::Serialize;

use super::length::{Length, Percentage};

/// [§ 10.9 Internal Representation](https://www.w3.org/TR/css-values-4/#calc-internal)
///
/// "The internal representation of a math function is a calculation tree:
/// a tree where the branches are operator nodes corresponding either to math
/// functions or to arithmetic operators, and the leaves are numeric values."
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", content = "value", rename_all = "kebab-case")]
pub enum CalcNode {
    /// A `<number>` leaf.
    Number(f64),
    /// A `<length>` leaf.
    Length(Length),
    /// A `<percentage>` leaf.
    Percentage(Percentage),
    /// "Sum" operator node.
    Sum(Vec<CalcNode>),
    /// "Product" operator node.
    Product(Vec<CalcNode>),
    /// "Negate" operator node (subtraction is a sum with a negated child).
    Negate(Box<CalcNode>),
    /// "Invert" operator node (division is a product with an inverted child).
    Invert(Box<CalcNode>),
}

/// A `calc()` value as produced by the style engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatedValue {
    root: CalcNode,
}

impl CalculatedValue {
    /// Wrap a calculation tree.
    #[must_use]
    pub const fn new(root: CalcNode) -> Self {
        Self { root }
    }

    /// The root of the calculation tree.
    #[must_use]
    pub const fn root(&self) -> &CalcNode {
        &self.root
    }
}

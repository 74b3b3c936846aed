//! CSS Object Model resolved style for the Koala browser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Resolved Values** ([CSSOM § 6.7.1](https://www.w3.org/TR/cssom-1/#resolved-values))
//!   - Used colors, used sizes, margins, paddings and insets
//!   - `line-height` (`normal` or the used line height)
//!   - `transform` as a single 2D `matrix()`
//!   - `background-position` across background layers
//!
//! - **Shorthand reconstruction** ([CSSOM § 6.7.2](https://www.w3.org/TR/cssom-1/#serializing-css-values))
//!   - Four-sided shorthands collapsed to their shortest form
//!   - `border` (only when all sides agree)
//!   - Every other shorthand from its longhands in declared order
//!
//! - **Read-only declaration** ([CSSOM § 9.1 `getComputedStyle()`](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle))
//!   - Style / layout refresh before every query
//!   - On-demand style computation for elements without a box
//!   - `NoModificationAllowedError` for every mutation
//!
//! # Not Yet Implemented
//!
//! - Pseudo-elements
//! - Serialization of values to CSS text
//! - `fit-content(<length-percentage>)` sizes
//! - 3D transforms (`matrix3d()`)
//!
//! # Feature Flags
//!
//! - `cssom-trace`: emit a `TRACE` event for every property resolution.

/// The read-only declaration returned by `getComputedStyle()`.
pub mod declaration;
/// Traits the surrounding document implements for style, layout and paint.
pub mod engine;
/// Error types.
pub mod error;
/// Used values as the layout engine exposes them.
pub mod layout;
/// CSS property identifiers and shorthand metadata.
pub mod property;
/// Per-property resolved value rules per [CSSOM § 6.7.1](https://www.w3.org/TR/cssom-1/#resolved-values).
pub mod resolve;
/// Style value representation per [CSS Values Level 4](https://www.w3.org/TR/css-values-4/).
pub mod values;

// Re-exports for convenience
pub use declaration::{ResolvedStyleDeclaration, StyleProperty};
pub use engine::{Document, LayoutEngine, PaintEngine, StyleComputer, StyleProperties};
pub use error::{CssomError, StyleComputeError};
pub use layout::{BackgroundLayer, BackgroundSize, ComputedValues, LayoutNode, Sides};
pub use property::PropertyId;
pub use resolve::{StyleResolver, collapse_sides};
pub use values::{Separator, ShorthandValue, StyleValue, StyleValueList, ValueId};

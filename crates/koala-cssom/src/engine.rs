//! Seams to the rest of the engine.
//!
//! Resolved style sits on top of the cascade, layout and paint. Those live
//! elsewhere; this module names the operations resolved style needs from
//! them, and the surrounding document implements the traits.

use std::collections::HashMap;
use std::rc::Rc;

use koala_dom::{DomTree, NodeId};

use crate::error::StyleComputeError;
use crate::layout::LayoutNode;
use crate::property::PropertyId;
use crate::values::{AffineTransform, StyleValue};

/// [CSS Cascade 4 § 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// The computed value of every longhand that has one, for one element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProperties {
    values: HashMap<PropertyId, Rc<StyleValue>>,
}

impl StyleProperties {
    /// An empty property map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The computed value for `property`, if any.
    #[must_use]
    pub fn property(&self, property: PropertyId) -> Option<Rc<StyleValue>> {
        self.values.get(&property).cloned()
    }

    /// Store the computed value for `property`. Only the style engine builds
    /// these maps.
    pub fn set_property(&mut self, property: PropertyId, value: Rc<StyleValue>) {
        let _ = self.values.insert(property, value);
    }

    /// Builder form of [`Self::set_property`].
    #[must_use]
    pub fn with(mut self, property: PropertyId, value: Rc<StyleValue>) -> Self {
        self.set_property(property, value);
        self
    }

    /// Number of properties with a value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The cascade: computes style for one element on demand.
pub trait StyleComputer {
    /// Run the cascade for `element` alone and return its computed values.
    ///
    /// # Errors
    ///
    /// Returns [`StyleComputeError`] if the element's style cannot be
    /// computed (e.g. it is not an element).
    fn compute_style(&self, element: NodeId) -> Result<StyleProperties, StyleComputeError>;
}

/// The layout engine.
pub trait LayoutEngine {
    /// Bring computed style up to date for the whole document.
    fn update_style(&mut self);

    /// Bring style *and* layout up to date for the whole document.
    fn update_layout(&mut self);

    /// The layout node generated for `element`, if it has one (elements with
    /// `display: none` don't).
    fn layout_node(&self, element: NodeId) -> Option<&LayoutNode>;
}

/// The paint engine.
pub trait PaintEngine {
    /// Build the stacking context tree, unless it is already current.
    fn build_stacking_context_tree_if_needed(&mut self);

    /// The 2D transform of the stacking context of `element`'s paintable box,
    /// or `None` if the element has no paintable box or no stacking context.
    fn affine_transform_matrix(&self, element: NodeId) -> Option<AffineTransform>;
}

/// A document: the DOM plus all engine stages resolved style reads from.
pub trait Document: StyleComputer + LayoutEngine + PaintEngine {
    /// The DOM tree.
    fn dom(&self) -> &DomTree;

    /// The computed values the cascade last produced for `element`.
    fn computed_style(&self, element: NodeId) -> Option<&StyleProperties>;
}

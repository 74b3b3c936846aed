//! [CSSOM § 6.6 CSS Declarations](https://www.w3.org/TR/cssom-1/#css-declarations)
//!
//! The read-only declaration block returned by `getComputedStyle()`.

use std::rc::Rc;

use koala_common::warning::debug;
use koala_dom::NodeId;
use serde::Serialize;

use crate::engine::Document;
use crate::error::CssomError;
use crate::property::PropertyId;
use crate::resolve::StyleResolver;
use crate::values::StyleValue;

/// A property together with its resolved value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProperty {
    /// The property that was asked for.
    pub property_id: PropertyId,
    /// Its resolved value.
    pub value: Rc<StyleValue>,
}

/// [CSSOM § 9.1 `getComputedStyle()`](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
///
/// "Return a live CSS declaration block with the following properties:
/// - computed flag: Set.
/// - readonly flag: Set.
/// - owner node: obj."
///
/// "Live" here means nothing is cached: every [`property`](Self::property)
/// call refreshes the document and resolves from scratch, so the returned
/// value is a snapshot of that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyleDeclaration {
    element: NodeId,
}

impl ResolvedStyleDeclaration {
    /// The resolved style of `element`.
    #[must_use]
    pub const fn new(element: NodeId) -> Self {
        Self { element }
    }

    /// The owner node.
    #[must_use]
    pub const fn element(&self) -> NodeId {
        self.element
    }

    /// The resolved value of `property_id` for the owner element.
    ///
    /// Refreshes style (or layout, for properties that depend on geometry)
    /// before resolving. Returns `None` when the property has no resolved
    /// value: the element is disconnected, the property is a custom property,
    /// the sides of `border` disagree, or style computation failed.
    pub fn property<D: Document>(
        &self,
        document: &mut D,
        property_id: PropertyId,
    ) -> Option<StyleProperty> {
        // [CSSOM § 9.1](https://www.w3.org/TR/cssom-1/#dom-window-getcomputedstyle)
        // NOTE: This is a partial enforcement of step 5 ("If elt is connected, ...")
        if !document.dom().is_connected(self.element) {
            return None;
        }

        if property_id.affects_layout() {
            document.update_layout();
        } else {
            // NOTE: Style is refreshed for the whole document; there is no
            // single-element style update yet.
            document.update_style();
        }

        if document.layout_node(self.element).is_none() {
            return self.property_without_layout_node(document, property_id);
        }

        let value = StyleResolver::new(document, self.element).resolve(property_id)?;
        Some(StyleProperty { property_id, value })
    }

    /// [`property`](Self::property), looked up by CSS name.
    ///
    /// Unknown names have no value.
    pub fn property_by_name<D: Document>(
        &self,
        document: &mut D,
        name: &str,
    ) -> Option<StyleProperty> {
        match PropertyId::from_css_name(name) {
            Ok(property_id) => self.property(document, property_id),
            Err(error) => {
                debug("CSSOM", &error.to_string());
                None
            }
        }
    }

    /// Elements without a box (e.g. `display: none`) have no used values, so
    /// their resolved value is the computed value, computed on demand.
    ///
    /// NOTE: Shorthands are not expanded here; asking for one yields `None`
    /// unless the style engine stores it directly.
    fn property_without_layout_node<D: Document>(
        self,
        document: &D,
        property_id: PropertyId,
    ) -> Option<StyleProperty> {
        let style = match document.compute_style(self.element) {
            Ok(style) => style,
            Err(error) => {
                debug("CSSOM", &format!("resolved style fallback failed: {error}"));
                return None;
            }
        };

        let Some(value) = style.property(property_id) else {
            debug(
                "CSSOM",
                &format!("no value for {property_id} in newly computed style"),
            );
            return None;
        };
        Some(StyleProperty { property_id, value })
    }
}

/// The rest of the `CSSStyleDeclaration` surface. A resolved declaration has
/// no stored declarations of its own, so none of these read the owner node.
#[allow(clippy::unused_self)]
impl ResolvedStyleDeclaration {
    /// [CSSOM § 6.6.1](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-length)
    ///
    /// Resolved declarations do not enumerate their properties.
    #[must_use]
    pub const fn length(&self) -> usize {
        0
    }

    /// [CSSOM § 6.6.1](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-item)
    ///
    /// Always the empty string, as [`length`](Self::length) is 0.
    #[must_use]
    pub const fn item(&self, _index: usize) -> String {
        String::new()
    }

    /// [CSSOM § 6.6.1 `setProperty()`](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-setproperty)
    ///
    /// "1. If the computed flag is set, then throw a `NoModificationAllowedError` exception."
    ///
    /// # Errors
    ///
    /// Always returns [`CssomError::NoModificationAllowed`].
    pub fn set_property(
        &self,
        _property_id: PropertyId,
        _value: &str,
        _priority: &str,
    ) -> Result<(), CssomError> {
        Err(CssomError::NoModificationAllowed(
            "Cannot modify properties in result of getComputedStyle()",
        ))
    }

    /// [CSSOM § 6.6.1 `removeProperty()`](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-removeproperty)
    ///
    /// "1. If the computed flag is set, then throw a `NoModificationAllowedError` exception."
    ///
    /// # Errors
    ///
    /// Always returns [`CssomError::NoModificationAllowed`].
    pub fn remove_property(&self, _property_id: PropertyId) -> Result<String, CssomError> {
        Err(CssomError::NoModificationAllowed(
            "Cannot remove properties from result of getComputedStyle()",
        ))
    }

    /// [CSSOM § 6.6.1 `cssText`](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-csstext)
    ///
    /// "If the computed flag is set, then return the empty string."
    #[must_use]
    pub const fn css_text(&self) -> String {
        String::new()
    }

    /// [CSSOM § 6.6.1 `cssText`](https://www.w3.org/TR/cssom-1/#dom-cssstyledeclaration-csstext)
    ///
    /// Setting: "1. If the computed flag is set, then throw a
    /// `NoModificationAllowedError` exception."
    ///
    /// # Errors
    ///
    /// Always returns [`CssomError::NoModificationAllowed`].
    pub fn set_css_text(&self, _css_text: &str) -> Result<(), CssomError> {
        Err(CssomError::NoModificationAllowed(
            "Cannot modify properties in result of getComputedStyle()",
        ))
    }
}

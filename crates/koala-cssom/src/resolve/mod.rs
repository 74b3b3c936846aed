//! Per-property resolution.
//!
//! [CSSOM § 6.7.1 Resolved Values](https://www.w3.org/TR/cssom-1/#resolved-values)
//!
//! "A limited number of properties have special rules for producing their
//! resolved value. For everything else the resolved value is the computed
//! value." Shorthands are rebuilt from their resolved longhands in
//! [`shorthand`].

mod shorthand;

use std::rc::Rc;

use koala_common::warning::{debug, warn_once};
use koala_dom::NodeId;

use crate::engine::Document;
use crate::layout::{BackgroundLayer, ComputedValues};
use crate::property::PropertyId;
use crate::values::{
    Color, EdgeValue, LengthPercentage, PositionValue, Separator, Size, StyleValue,
    TransformFunction, TransformationValue, ValueId,
};

pub use shorthand::collapse_sides;

/// Resolves properties of one element that has a layout node.
///
/// Holds the document mutably: resolving `transform` may have to build the
/// stacking context tree first.
pub struct StyleResolver<'a, D: Document> {
    document: &'a mut D,
    element: NodeId,
}

impl<'a, D: Document> StyleResolver<'a, D> {
    /// Create a resolver for `element`.
    pub const fn new(document: &'a mut D, element: NodeId) -> Self {
        Self { document, element }
    }

    /// [CSSOM § 6.7.1](https://www.w3.org/TR/cssom-1/#resolved-values)
    ///
    /// The resolved value of `property`, or `None` if it has none in the
    /// current state.
    pub fn resolve(&mut self, property: PropertyId) -> Option<Rc<StyleValue>> {
        #[cfg(feature = "cssom-trace")]
        tracing::trace!(element = self.element.0, %property, "resolving");

        match property {
            // -> background-color
            // -> border-bottom-color / border-left-color / border-right-color / border-top-color
            // -> color
            // -> outline-color
            // -> A resolved value special case property like color defined in another specification
            //    "The resolved value is the used value."
            PropertyId::BackgroundColor => self.used_color(|values| values.background_color),
            PropertyId::BorderBottomColor => self.used_color(|values| values.border_color.bottom),
            PropertyId::BorderLeftColor => self.used_color(|values| values.border_color.left),
            PropertyId::BorderRightColor => self.used_color(|values| values.border_color.right),
            PropertyId::BorderTopColor => self.used_color(|values| values.border_color.top),
            PropertyId::Color => self.used_color(|values| values.color),
            PropertyId::OutlineColor => self.used_color(|values| values.outline_color),
            PropertyId::TextDecorationColor => {
                self.used_color(|values| values.text_decoration_color)
            }

            // -> line-height
            //    "The resolved value is normal if the computed value is normal, or the used
            //    value otherwise."
            PropertyId::LineHeight => self.line_height(),

            // -> height / width / margin-* / padding-*
            // -> A resolved value special case property like height defined in another specification
            //    "If the property applies to the element or pseudo-element and the resolved value
            //    of the display property is not none or contents, then the resolved value is the
            //    used value. Otherwise the resolved value is the computed value."
            PropertyId::Height => self.size(|values| &values.height),
            PropertyId::Width => self.size(|values| &values.width),
            PropertyId::MarginBottom => self.length_percentage(|values| &values.margin.bottom),
            PropertyId::MarginLeft => self.length_percentage(|values| &values.margin.left),
            PropertyId::MarginRight => self.length_percentage(|values| &values.margin.right),
            PropertyId::MarginTop => self.length_percentage(|values| &values.margin.top),
            PropertyId::PaddingBottom => self.length_percentage(|values| &values.padding.bottom),
            PropertyId::PaddingLeft => self.length_percentage(|values| &values.padding.left),
            PropertyId::PaddingRight => self.length_percentage(|values| &values.padding.right),
            PropertyId::PaddingTop => self.length_percentage(|values| &values.padding.top),

            // -> bottom / left / right / top
            // -> A resolved value special case property like top defined in another specification
            PropertyId::Bottom => self.length_percentage(|values| &values.inset.bottom),
            PropertyId::Left => self.length_percentage(|values| &values.inset.left),
            PropertyId::Right => self.length_percentage(|values| &values.inset.right),
            PropertyId::Top => self.length_percentage(|values| &values.inset.top),

            // -> A resolved value special case property defined in another specification
            //    "As defined in the relevant specification."
            PropertyId::Transform => self.transform(),

            // Shorthands and shorthand-like aggregates that need manual construction.
            PropertyId::BackgroundPosition => self.background_position(),
            PropertyId::Border => self.border(),
            PropertyId::BorderColor
            | PropertyId::BorderStyle
            | PropertyId::BorderWidth
            | PropertyId::Margin
            | PropertyId::Padding => self.sided_shorthand(property),

            PropertyId::Invalid => Some(StyleValue::identifier(ValueId::Invalid)),
            PropertyId::Custom => {
                debug("CSSOM", "resolved style for a custom property was requested");
                None
            }

            _ if property.is_shorthand() => self.generic_shorthand(property),

            // -> Any other property
            //    "The resolved value is the computed value."
            _ => self.computed_value(property),
        }
    }

    fn computed_values(&self) -> Option<&ComputedValues> {
        self.document
            .layout_node(self.element)
            .map(|node| &node.computed_values)
    }

    fn computed_value(&self, property: PropertyId) -> Option<Rc<StyleValue>> {
        self.document
            .computed_style(self.element)
            .and_then(|style| style.property(property))
    }

    fn used_color(&self, color: impl Fn(&ComputedValues) -> Color) -> Option<Rc<StyleValue>> {
        self.computed_values()
            .map(|values| StyleValue::color(color(values)))
    }

    fn length_percentage(
        &self,
        side: impl Fn(&ComputedValues) -> &LengthPercentage,
    ) -> Option<Rc<StyleValue>> {
        self.computed_values()
            .map(|values| style_value_for_length_percentage(side(values)))
    }

    fn size(&self, size: impl Fn(&ComputedValues) -> &Size) -> Option<Rc<StyleValue>> {
        style_value_for_size(size(self.computed_values()?))
    }

    fn line_height(&self) -> Option<Rc<StyleValue>> {
        if let Some(computed) = self.computed_value(PropertyId::LineHeight)
            && computed.is_identifier(ValueId::Normal)
        {
            return Some(computed);
        }
        let node = self.document.layout_node(self.element)?;
        Some(StyleValue::length(node.line_height))
    }

    /// [CSS Transforms 1 § 8 Serialization of the computed value](https://www.w3.org/TR/css-transforms-1/#serialization-of-the-computed-value)
    ///
    /// "A computed value of none is serialized as none. Otherwise, the
    /// computed value is serialized as a `<transform-function>` of the
    /// current transformation matrix, as a 2D `matrix()`."
    ///
    /// The matrix lives on the stacking context, so that tree has to exist
    /// first. 3D matrices (`matrix3d()`) are not produced.
    ///
    /// # Panics
    ///
    /// Panics if the element still has no stacking context after the tree was
    /// built: every transformed box establishes one, so this is an engine bug.
    fn transform(&mut self) -> Option<Rc<StyleValue>> {
        if self.computed_values()?.transformations.is_empty() {
            return Some(StyleValue::identifier(ValueId::None));
        }

        self.document.build_stacking_context_tree_if_needed();
        let Some(matrix) = self.document.affine_transform_matrix(self.element) else {
            panic!(
                "element {:?} has a transform but no stacking context after building the stacking context tree",
                self.element
            );
        };

        let parameters = matrix
            .components()
            .into_iter()
            .map(StyleValue::number)
            .collect();
        let matrix_function = Rc::new(StyleValue::Transformation(TransformationValue::new(
            TransformFunction::Matrix,
            parameters,
        )));

        // A `transform` value is always stored as a list of functions, even
        // when there is only the one.
        Some(StyleValue::list(vec![matrix_function], Separator::Space))
    }

    /// [CSS Backgrounds 3 § 3.6 'background-position'](https://www.w3.org/TR/css-backgrounds-3/#background-position)
    fn background_position(&self) -> Option<Rc<StyleValue>> {
        let layers = &self.computed_values()?.background_layers;
        Some(per_layer_value(
            layers,
            |layer| {
                Rc::new(StyleValue::Position(PositionValue::new(
                    EdgeValue::new(layer.position_edge_x, layer.position_offset_x.clone()),
                    EdgeValue::new(layer.position_edge_y, layer.position_offset_y.clone()),
                )))
            },
            || Rc::new(StyleValue::Position(PositionValue::top_left())),
        ))
    }
}

/// Combine one value per background layer: the default for no layers, the
/// single value for one layer, a comma separated list otherwise.
fn per_layer_value(
    layers: &[BackgroundLayer],
    value_for_layer: impl Fn(&BackgroundLayer) -> Rc<StyleValue>,
    default_value: impl FnOnce() -> Rc<StyleValue>,
) -> Rc<StyleValue> {
    match layers {
        [] => default_value(),
        [layer] => value_for_layer(layer),
        _ => StyleValue::list(layers.iter().map(value_for_layer).collect(), Separator::Comma),
    }
}

fn style_value_for_length_percentage(length_percentage: &LengthPercentage) -> Rc<StyleValue> {
    match length_percentage {
        LengthPercentage::Auto => StyleValue::identifier(ValueId::Auto),
        LengthPercentage::Percentage(percentage) => StyleValue::percentage(*percentage),
        LengthPercentage::Length(length) => StyleValue::length(*length),
        LengthPercentage::Calculated(calculated) => {
            Rc::new(StyleValue::Calculated(Rc::clone(calculated)))
        }
    }
}

/// `None` for `fit-content(<length-percentage>)`, which has no resolved value
/// yet: it is neither the keyword nor the bare argument.
fn style_value_for_size(size: &Size) -> Option<Rc<StyleValue>> {
    Some(match size {
        Size::None => StyleValue::identifier(ValueId::None),
        Size::Percentage(percentage) => StyleValue::percentage(*percentage),
        Size::Length(length) => StyleValue::length(*length),
        Size::Auto => StyleValue::identifier(ValueId::Auto),
        Size::Calculated(calculated) => Rc::new(StyleValue::Calculated(Rc::clone(calculated))),
        Size::MinContent => StyleValue::identifier(ValueId::MinContent),
        Size::MaxContent => StyleValue::identifier(ValueId::MaxContent),
        Size::FitContent => StyleValue::identifier(ValueId::FitContent),
        // TODO: Resolve fit-content(<length-percentage>) once the CSSOM
        // serialization for it is settled upstream.
        Size::FitContentLength(_) => {
            warn_once(
                "CSSOM",
                "fit-content(<length-percentage>) has no resolved value yet",
            );
            return None;
        }
    })
}

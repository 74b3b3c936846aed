//! Rebuilding shorthands from resolved longhands.
//!
//! [CSSOM § 6.7.2 Serializing CSS Values](https://www.w3.org/TR/cssom-1/#serializing-css-values)

use std::rc::Rc;

use koala_common::warning::debug;

use super::StyleResolver;
use crate::engine::Document;
use crate::property::PropertyId;
use crate::values::{Separator, ShorthandValue, StyleValue};

/// [CSS Backgrounds 3 § 4 Borders](https://www.w3.org/TR/css-backgrounds-3/#borders)
///
/// "If there is only one component value, it applies to all sides. If there
/// are two values, the top and bottom are set to the first value and the
/// right and left are set to the second. If there are three values, the top
/// is set to the first value, the left and right are set to the second, and
/// the bottom is set to the third. If there are four values they apply to the
/// top, right, bottom, and left, respectively."
///
/// The inverse: the shortest list of values that expands back to the four
/// given sides. Sides compare by value, not by identity.
#[must_use]
pub fn collapse_sides(
    top: Rc<StyleValue>,
    right: Rc<StyleValue>,
    bottom: Rc<StyleValue>,
    left: Rc<StyleValue>,
) -> Rc<StyleValue> {
    let top_and_bottom_same = top == bottom;
    let left_and_right_same = left == right;

    if top_and_bottom_same && left_and_right_same && top == left {
        return top;
    }
    if top_and_bottom_same && left_and_right_same {
        return StyleValue::list(vec![top, right], Separator::Space);
    }
    if left_and_right_same {
        return StyleValue::list(vec![top, right, bottom], Separator::Space);
    }
    StyleValue::list(vec![top, right, bottom, left], Separator::Space)
}

impl<D: Document> StyleResolver<'_, D> {
    /// `margin`, `padding`, `border-color`, `border-style`, `border-width`.
    pub(super) fn sided_shorthand(&mut self, shorthand: PropertyId) -> Option<Rc<StyleValue>> {
        let [top, right, bottom, left] = shorthand.longhands() else {
            return None;
        };
        let top = self.resolve(*top)?;
        let right = self.resolve(*right)?;
        let bottom = self.resolve(*bottom)?;
        let left = self.resolve(*left)?;
        Some(collapse_sides(top, right, bottom, left))
    }

    /// [CSS Backgrounds 3 § 4.4 'border'](https://www.w3.org/TR/css-backgrounds-3/#border-shorthands)
    ///
    /// "The border property is a shorthand property for setting the same
    /// width, color, and style for all four borders of a box."
    ///
    /// So it only has a resolved value when all four sides agree on each of
    /// the three.
    pub(super) fn border(&mut self) -> Option<Rc<StyleValue>> {
        let width = self.resolve(PropertyId::BorderWidth)?;
        let style = self.resolve(PropertyId::BorderStyle)?;
        let color = self.resolve(PropertyId::BorderColor)?;

        if width.is_value_list() || style.is_value_list() || color.is_value_list() {
            debug("CSSOM", "border has no resolved value: its sides differ");
            return None;
        }

        Some(Rc::new(StyleValue::Shorthand(ShorthandValue::new(
            PropertyId::Border,
            vec![
                PropertyId::BorderWidth,
                PropertyId::BorderStyle,
                PropertyId::BorderColor,
            ],
            vec![width, style, color],
        ))))
    }

    /// Any shorthand without a rule of its own: its longhands' resolved
    /// values, in declared order.
    pub(super) fn generic_shorthand(&mut self, shorthand: PropertyId) -> Option<Rc<StyleValue>> {
        let longhands = shorthand.longhands();
        let mut values = Vec::with_capacity(longhands.len());
        for &longhand in longhands {
            let Some(value) = self.resolve(longhand) else {
                debug(
                    "CSSOM",
                    &format!("{shorthand} has no resolved value: {longhand} has none"),
                );
                return None;
            };
            values.push(value);
        }
        Some(Rc::new(StyleValue::Shorthand(ShorthandValue::new(
            shorthand,
            longhands.to_vec(),
            values,
        ))))
    }
}

//! JSON snapshots of resolved values, as debugging tools dump them.

mod common;

use common::{TestDocument, px};
use koala_cssom::values::{Color, LengthPercentage};
use koala_cssom::{
    ComputedValues, PropertyId, ResolvedStyleDeclaration, Sides, StyleProperties, StyleProperty,
    StyleValue, ValueId,
};
use serde_json::json;

#[test]
fn test_margin_snapshot() {
    let (mut document, div) = TestDocument::with_div();
    document.lay_out(
        div,
        ComputedValues {
            margin: Sides {
                top: LengthPercentage::px(10.0),
                right: LengthPercentage::percent(5.0),
                bottom: LengthPercentage::px(10.0),
                left: LengthPercentage::percent(5.0),
            },
            ..ComputedValues::default()
        },
    );

    let margin = ResolvedStyleDeclaration::new(div)
        .property(&mut document, PropertyId::Margin)
        .unwrap();

    assert_eq!(
        serde_json::to_value(&margin).unwrap(),
        json!({
            "property_id": "margin",
            "value": {
                "type": "list",
                "value": {
                    "values": [
                        { "type": "length", "value": { "value": 10.0, "unit": "px" } },
                        { "type": "percentage", "value": 5.0 }
                    ],
                    "separator": "space"
                }
            }
        })
    );
}

#[test]
fn test_color_snapshot() {
    let property = StyleProperty {
        property_id: PropertyId::BorderTopColor,
        value: StyleValue::color(Color::rgba(1, 2, 3, 128)),
    };

    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({
            "property_id": "border-top-color",
            "value": { "type": "color", "value": { "r": 1, "g": 2, "b": 3, "a": 128 } }
        })
    );
}

#[test]
fn test_border_shorthand_snapshot() {
    let (mut document, div) = TestDocument::with_div();
    document.lay_out(
        div,
        ComputedValues {
            border_color: Sides::all(Color::RED),
            ..ComputedValues::default()
        },
    );
    let mut style = StyleProperties::new();
    for side in PropertyId::BorderWidth.longhands() {
        style.set_property(*side, px(1.0));
    }
    for side in PropertyId::BorderStyle.longhands() {
        style.set_property(*side, StyleValue::identifier(ValueId::Solid));
    }
    document.set_computed(div, style);

    let border = ResolvedStyleDeclaration::new(div)
        .property(&mut document, PropertyId::Border)
        .unwrap();
    let snapshot = serde_json::to_value(&border.value).unwrap();

    assert_eq!(snapshot["type"], "shorthand");
    assert_eq!(
        snapshot["value"]["sub_properties"],
        json!(["border-width", "border-style", "border-color"])
    );
    assert_eq!(
        snapshot["value"]["values"][1],
        json!({ "type": "identifier", "value": "solid" })
    );
}

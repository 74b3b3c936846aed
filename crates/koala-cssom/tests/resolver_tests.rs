//! Integration tests for per-property resolved values.

mod common;

use std::rc::Rc;

use common::{TestDocument, entries, percent, px};
use koala_cssom::values::{
    AffineTransform, CalcNode, CalculatedValue, Color, Length, LengthPercentage, Percentage,
    PositionEdge, Size, TransformArgument, TransformFunction, Transformation,
};
use koala_cssom::{
    BackgroundLayer, ComputedValues, PropertyId, Separator, Sides, StyleProperties,
    StyleResolver, StyleValue, ValueId,
};
use koala_dom::NodeId;

fn resolve(
    document: &mut TestDocument,
    element: NodeId,
    property: PropertyId,
) -> Option<Rc<StyleValue>> {
    StyleResolver::new(document, element).resolve(property)
}

fn laid_out(values: ComputedValues) -> (TestDocument, NodeId) {
    let (mut document, div) = TestDocument::with_div();
    document.lay_out(div, values);
    (document, div)
}

fn rotated_by(degrees: f64) -> Transformation {
    Transformation::new(
        TransformFunction::Rotate,
        vec![TransformArgument::AngleDegrees(degrees)],
    )
}

// ========== Colors ==========

#[test]
fn test_colors_are_used_values() {
    let (mut document, div) = laid_out(ComputedValues {
        color: Color::RED,
        background_color: Color::TRANSPARENT,
        outline_color: Color::BLUE,
        text_decoration_color: Color::GREEN,
        ..ComputedValues::default()
    });
    // The computed style disagrees; the layout node wins.
    document.set_computed(
        div,
        StyleProperties::new().with(PropertyId::Color, StyleValue::color(Color::WHITE)),
    );

    assert_eq!(
        resolve(&mut document, div, PropertyId::Color),
        Some(StyleValue::color(Color::RED))
    );
    assert_eq!(
        resolve(&mut document, div, PropertyId::BackgroundColor),
        Some(StyleValue::color(Color::TRANSPARENT))
    );
    assert_eq!(
        resolve(&mut document, div, PropertyId::OutlineColor),
        Some(StyleValue::color(Color::BLUE))
    );
    assert_eq!(
        resolve(&mut document, div, PropertyId::TextDecorationColor),
        Some(StyleValue::color(Color::GREEN))
    );
}

#[test]
fn test_border_side_colors() {
    let (mut document, div) = laid_out(ComputedValues {
        border_color: Sides {
            top: Color::RED,
            right: Color::GREEN,
            bottom: Color::BLUE,
            left: Color::BLACK,
        },
        ..ComputedValues::default()
    });

    let expected = [
        (PropertyId::BorderTopColor, Color::RED),
        (PropertyId::BorderRightColor, Color::GREEN),
        (PropertyId::BorderBottomColor, Color::BLUE),
        (PropertyId::BorderLeftColor, Color::BLACK),
    ];
    for (property, color) in expected {
        assert_eq!(
            resolve(&mut document, div, property),
            Some(StyleValue::color(color)),
            "{property}"
        );
    }
}

// ========== line-height ==========

#[test]
fn test_line_height_normal_stays_normal() {
    let (mut document, div) = laid_out(ComputedValues::default());
    document.set_computed(
        div,
        StyleProperties::new().with(PropertyId::LineHeight, StyleValue::identifier(ValueId::Normal)),
    );

    assert_eq!(
        resolve(&mut document, div, PropertyId::LineHeight),
        Some(StyleValue::identifier(ValueId::Normal))
    );
}

#[test]
fn test_line_height_otherwise_used_value() {
    let (mut document, div) = laid_out(ComputedValues::default());
    // A unitless factor computes to a number; the resolved value is the
    // used length.
    document.set_computed(
        div,
        StyleProperties::new().with(PropertyId::LineHeight, StyleValue::number(1.25)),
    );

    assert_eq!(resolve(&mut document, div, PropertyId::LineHeight), Some(px(20.0)));
}

#[test]
fn test_line_height_without_computed_value() {
    let (mut document, div) = laid_out(ComputedValues::default());
    assert_eq!(resolve(&mut document, div, PropertyId::LineHeight), Some(px(20.0)));
}

// ========== width / height ==========

#[test]
fn test_sizes() {
    let cases = [
        (Size::Auto, Some(StyleValue::identifier(ValueId::Auto))),
        (Size::None, Some(StyleValue::identifier(ValueId::None))),
        (Size::Length(Length::make_px(120.0)), Some(px(120.0))),
        (Size::Percentage(Percentage(50.0)), Some(percent(50.0))),
        (Size::MinContent, Some(StyleValue::identifier(ValueId::MinContent))),
        (Size::MaxContent, Some(StyleValue::identifier(ValueId::MaxContent))),
        (Size::FitContent, Some(StyleValue::identifier(ValueId::FitContent))),
    ];

    for (size, expected) in cases {
        let (mut document, div) = laid_out(ComputedValues {
            width: size.clone(),
            height: size.clone(),
            ..ComputedValues::default()
        });
        assert_eq!(resolve(&mut document, div, PropertyId::Width), expected, "{size:?}");
        assert_eq!(resolve(&mut document, div, PropertyId::Height), expected, "{size:?}");
    }
}

#[test]
fn test_fit_content_with_argument_has_no_value() {
    common::init_tracing();
    let (mut document, div) = laid_out(ComputedValues {
        width: Size::FitContentLength(LengthPercentage::px(200.0)),
        ..ComputedValues::default()
    });

    assert_eq!(resolve(&mut document, div, PropertyId::Width), None);
    assert!(koala_common::warning::has_warned(
        "CSSOM",
        "fit-content(<length-percentage>) has no resolved value yet"
    ));
}

#[test]
fn test_calc_size_passes_through() {
    let calc = Rc::new(CalculatedValue::new(CalcNode::Sum(vec![
        CalcNode::Percentage(Percentage(100.0)),
        CalcNode::Negate(Box::new(CalcNode::Length(Length::make_px(10.0)))),
    ])));
    let (mut document, div) = laid_out(ComputedValues {
        height: Size::Calculated(Rc::clone(&calc)),
        margin: Sides::all(LengthPercentage::Calculated(Rc::clone(&calc))),
        ..ComputedValues::default()
    });

    let expected = Some(Rc::new(StyleValue::Calculated(calc)));
    assert_eq!(resolve(&mut document, div, PropertyId::Height), expected);
    assert_eq!(resolve(&mut document, div, PropertyId::MarginLeft), expected);
}

// ========== margin / padding / inset ==========

#[test]
fn test_margin_padding_inset_longhands() {
    let (mut document, div) = laid_out(ComputedValues {
        margin: Sides {
            top: LengthPercentage::px(10.0),
            right: LengthPercentage::percent(5.0),
            bottom: LengthPercentage::Auto,
            left: LengthPercentage::px(0.0),
        },
        padding: Sides::all(LengthPercentage::px(4.0)),
        inset: Sides::all(LengthPercentage::Auto),
        ..ComputedValues::default()
    });

    assert_eq!(resolve(&mut document, div, PropertyId::MarginTop), Some(px(10.0)));
    assert_eq!(resolve(&mut document, div, PropertyId::MarginRight), Some(percent(5.0)));
    assert_eq!(
        resolve(&mut document, div, PropertyId::MarginBottom),
        Some(StyleValue::identifier(ValueId::Auto))
    );
    assert_eq!(resolve(&mut document, div, PropertyId::MarginLeft), Some(px(0.0)));
    assert_eq!(resolve(&mut document, div, PropertyId::PaddingBottom), Some(px(4.0)));
    for property in [PropertyId::Top, PropertyId::Right, PropertyId::Bottom, PropertyId::Left] {
        assert_eq!(
            resolve(&mut document, div, property),
            Some(StyleValue::identifier(ValueId::Auto)),
            "{property}"
        );
    }
}

// ========== transform ==========

#[test]
fn test_transform_none() {
    let (mut document, div) = laid_out(ComputedValues::default());

    assert_eq!(
        resolve(&mut document, div, PropertyId::Transform),
        Some(StyleValue::identifier(ValueId::None))
    );
    assert_eq!(document.stacking_builds, 0);
}

#[test]
fn test_transform_is_single_matrix() {
    let (mut document, div) = laid_out(ComputedValues {
        transformations: vec![rotated_by(90.0)],
        ..ComputedValues::default()
    });
    let rotation = AffineTransform::rotation(90.0);
    document.set_stacking_matrix(div, rotation);

    let value = resolve(&mut document, div, PropertyId::Transform).unwrap();

    assert_eq!(document.stacking_builds, 1);
    let list = value.as_list().unwrap();
    assert_eq!(list.separator(), Separator::Space);
    assert_eq!(list.len(), 1);

    let matrix = list.values()[0].as_transformation().unwrap();
    assert_eq!(matrix.function(), TransformFunction::Matrix);
    let parameters: Vec<_> = matrix.parameters().to_vec();
    let expected: Vec<_> = rotation
        .components()
        .into_iter()
        .map(StyleValue::number)
        .collect();
    assert_eq!(parameters, expected);
}

#[test]
fn test_transform_rotation_components() {
    let rotation = AffineTransform::rotation(90.0).components();
    assert!((rotation[0] - 0.0).abs() < 1e-9);
    assert!((rotation[1] - 1.0).abs() < 1e-9);
    assert!((rotation[2] + 1.0).abs() < 1e-9);
    assert!((rotation[3] - 0.0).abs() < 1e-9);
    assert!(rotation[4].abs() < f64::EPSILON);
    assert!(rotation[5].abs() < f64::EPSILON);
}

#[test]
fn test_transform_builds_stacking_tree_once() {
    let (mut document, div) = laid_out(ComputedValues {
        transformations: vec![
            rotated_by(45.0),
            Transformation::new(
                TransformFunction::Translate,
                vec![
                    TransformArgument::Length(LengthPercentage::px(10.0)),
                    TransformArgument::Length(LengthPercentage::px(0.0)),
                ],
            ),
        ],
        ..ComputedValues::default()
    });
    document.set_stacking_matrix(div, AffineTransform::translation(10.0, 0.0));

    let first = resolve(&mut document, div, PropertyId::Transform);
    let second = resolve(&mut document, div, PropertyId::Transform);

    assert_eq!(first, second);
    assert_eq!(document.stacking_builds, 1);
    // Multiple functions still fold into one matrix.
    assert_eq!(entries(&first.unwrap()).len(), 1);
}

#[test]
#[should_panic(expected = "no stacking context")]
fn test_transform_without_stacking_context_panics() {
    let (mut document, div) = laid_out(ComputedValues {
        transformations: vec![rotated_by(10.0)],
        ..ComputedValues::default()
    });

    let _ = resolve(&mut document, div, PropertyId::Transform);
}

// ========== background-position ==========

fn layer_at(x: PositionEdge, offset_x: f64, y: PositionEdge, offset_y: f64) -> BackgroundLayer {
    BackgroundLayer {
        position_edge_x: x,
        position_offset_x: LengthPercentage::px(offset_x),
        position_edge_y: y,
        position_offset_y: LengthPercentage::px(offset_y),
        ..BackgroundLayer::default()
    }
}

#[test]
fn test_background_position_without_layers_is_initial() {
    let (mut document, div) = laid_out(ComputedValues::default());

    let value = resolve(&mut document, div, PropertyId::BackgroundPosition).unwrap();
    let StyleValue::Position(position) = value.as_ref() else {
        panic!("expected a position, got {value:?}");
    };
    assert_eq!(position.x.edge, PositionEdge::Left);
    assert_eq!(position.x.offset, LengthPercentage::percent(0.0));
    assert_eq!(position.y.edge, PositionEdge::Top);
    assert_eq!(position.y.offset, LengthPercentage::percent(0.0));
}

#[test]
fn test_background_position_single_layer() {
    let (mut document, div) = laid_out(ComputedValues {
        background_layers: vec![layer_at(PositionEdge::Right, 10.0, PositionEdge::Bottom, 5.0)],
        ..ComputedValues::default()
    });

    let value = resolve(&mut document, div, PropertyId::BackgroundPosition).unwrap();
    assert!(!value.is_value_list());
    let StyleValue::Position(position) = value.as_ref() else {
        panic!("expected a position, got {value:?}");
    };
    assert_eq!(position.x.edge, PositionEdge::Right);
    assert_eq!(position.x.offset, LengthPercentage::px(10.0));
    assert_eq!(position.y.edge, PositionEdge::Bottom);
    assert_eq!(position.y.offset, LengthPercentage::px(5.0));
}

#[test]
fn test_background_position_multiple_layers() {
    let (mut document, div) = laid_out(ComputedValues {
        background_layers: vec![
            layer_at(PositionEdge::Left, 1.0, PositionEdge::Top, 2.0),
            layer_at(PositionEdge::Right, 3.0, PositionEdge::Bottom, 4.0),
            BackgroundLayer::default(),
        ],
        ..ComputedValues::default()
    });

    let value = resolve(&mut document, div, PropertyId::BackgroundPosition).unwrap();
    let list = value.as_list().unwrap();
    assert_eq!(list.separator(), Separator::Comma);
    assert_eq!(list.len(), 3);

    let expected = [
        (
            PositionEdge::Left,
            LengthPercentage::px(1.0),
            PositionEdge::Top,
            LengthPercentage::px(2.0),
        ),
        (
            PositionEdge::Right,
            LengthPercentage::px(3.0),
            PositionEdge::Bottom,
            LengthPercentage::px(4.0),
        ),
        (
            PositionEdge::Left,
            LengthPercentage::percent(0.0),
            PositionEdge::Top,
            LengthPercentage::percent(0.0),
        ),
    ];
    for (index, (entry, (x_edge, x_offset, y_edge, y_offset))) in
        list.values().iter().zip(expected).enumerate()
    {
        let StyleValue::Position(position) = entry.as_ref() else {
            panic!("layer {index}: expected a position, got {entry:?}");
        };
        assert_eq!(position.x.edge, x_edge, "layer {index}");
        assert_eq!(position.x.offset, x_offset, "layer {index}");
        assert_eq!(position.y.edge, y_edge, "layer {index}");
        assert_eq!(position.y.offset, y_offset, "layer {index}");
    }
}

#[test]
fn test_background_position_keeps_layer_order() {
    let (mut document, div) = laid_out(ComputedValues {
        background_layers: vec![
            layer_at(PositionEdge::Right, 9.0, PositionEdge::Bottom, 9.0),
            layer_at(PositionEdge::Left, 0.0, PositionEdge::Top, 0.0),
        ],
        ..ComputedValues::default()
    });

    let value = resolve(&mut document, div, PropertyId::BackgroundPosition).unwrap();
    let edges: Vec<_> = value
        .as_list()
        .unwrap()
        .values()
        .iter()
        .map(|entry| match entry.as_ref() {
            StyleValue::Position(position) => (position.x.edge, position.y.edge),
            other => panic!("expected a position, got {other:?}"),
        })
        .collect();

    // Reverse-sorted input stays as declared, not normalized.
    assert_eq!(
        edges,
        vec![
            (PositionEdge::Right, PositionEdge::Bottom),
            (PositionEdge::Left, PositionEdge::Top)
        ]
    );
}

// ========== Sentinels and the default rule ==========

#[test]
fn test_invalid_property() {
    let (mut document, div) = laid_out(ComputedValues::default());
    assert_eq!(
        resolve(&mut document, div, PropertyId::Invalid),
        Some(StyleValue::identifier(ValueId::Invalid))
    );
}

#[test]
fn test_custom_property_has_no_value() {
    let (mut document, div) = laid_out(ComputedValues::default());
    assert_eq!(resolve(&mut document, div, PropertyId::Custom), None);
}

#[test]
fn test_other_properties_are_computed_values() {
    let (mut document, div) = laid_out(ComputedValues::default());
    document.set_computed(
        div,
        StyleProperties::new()
            .with(PropertyId::Display, StyleValue::identifier(ValueId::Block))
            .with(PropertyId::Opacity, StyleValue::number(0.5)),
    );

    assert_eq!(
        resolve(&mut document, div, PropertyId::Display),
        Some(StyleValue::identifier(ValueId::Block))
    );
    assert_eq!(
        resolve(&mut document, div, PropertyId::Opacity),
        Some(StyleValue::number(0.5))
    );
    // Nothing computed for z-index.
    assert_eq!(resolve(&mut document, div, PropertyId::ZIndex), None);
}

#[test]
fn test_resolved_values_are_fresh_each_time() {
    let (mut document, div) = laid_out(ComputedValues {
        margin: Sides::all(LengthPercentage::px(8.0)),
        ..ComputedValues::default()
    });

    let first = resolve(&mut document, div, PropertyId::MarginTop).unwrap();
    let second = resolve(&mut document, div, PropertyId::MarginTop).unwrap();
    assert_eq!(first, second);
    assert!(!Rc::ptr_eq(&first, &second));
}

use super::*;
use crate::icon::builtin::default_icon;

#[test]
fn default_icon_is_valid_and_survives_json() {
    let icon = default_icon();
    icon.validate().unwrap();

    let json = icon.to_json_pretty().unwrap();
    let back = IconDescriptor::from_json_str(&json).unwrap();
    assert_eq!(back, icon);
}

#[test]
fn descriptor_json_uses_snake_case_tags_and_defaults() {
    let json = r##"
{
  "background": "#000000",
  "root": {
    "stack": {
      "spacing": 10,
      "children": [
        { "shape": { "kind": "circle", "fill": "#ffffff", "size": 100 } },
        { "shape": {
            "kind": { "rounded_rect": { "corner_radius": 20 } },
            "fill": [255, 0, 0],
            "size": [50, 200],
            "offset": { "x": 4, "y": -4 },
            "rotation_deg": 45
        } }
      ]
    }
  }
}
"##;
    let icon = IconDescriptor::from_json_str(json).unwrap();
    let Node::Stack(stack) = &icon.root else {
        panic!("root should be a stack");
    };
    assert_eq!(stack.axis, Axis::Horizontal);
    assert_eq!(stack.alignment, Alignment::Center);
    assert_eq!(stack.children.len(), 2);

    let Node::Shape(pill) = &stack.children[1] else {
        panic!("second child should be a shape");
    };
    assert_eq!(pill.kind, ShapeKind::RoundedRect { corner_radius: 20.0 });
    assert_eq!(pill.size, Size::new(50.0, 200.0));
    assert_eq!(pill.offset, Vec2::new(4.0, -4.0));
    assert_eq!(pill.rotation_deg, 45.0);

    let Node::Shape(dot) = &stack.children[0] else {
        panic!("first child should be a shape");
    };
    assert_eq!(dot.offset, Vec2::ZERO);
    assert_eq!(dot.rotation_deg, 0.0);
}

#[test]
fn validation_rejects_negative_and_non_finite_values() {
    let bad_size = IconDescriptor {
        background: Color::BLACK,
        root: Shape::circle(Color::WHITE, -1.0).into(),
    };
    let err = bad_size.validate().unwrap_err();
    assert!(err.to_string().contains("root: shape size"));

    let bad_radius = IconDescriptor {
        background: Color::BLACK,
        root: Stack::horizontal(
            Alignment::Start,
            0.0,
            vec![Shape::rounded_rect(Color::WHITE, Size::square(10.0), f64::NAN).into()],
        )
        .into(),
    };
    let err = bad_radius.validate().unwrap_err();
    assert!(err.to_string().contains("root.children[0]"));

    let bad_spacing = IconDescriptor {
        background: Color::BLACK,
        root: Stack::vertical(Alignment::End, -5.0, vec![]).into(),
    };
    assert!(matches!(
        bad_spacing.validate(),
        Err(IconError::Validation(_))
    ));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = IconDescriptor::from_json_str("{\"background\": 1}").unwrap_err();
    assert!(matches!(err, IconError::Serde(_)));
}

#[test]
fn missing_file_reports_path() {
    let err = IconDescriptor::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("does/not/exist.json"));
}

#[test]
fn oversized_lengths_are_rejected_with_their_path() {
    let circle = |side| IconDescriptor {
        background: Color::BLACK,
        root: Stack::horizontal(
            Alignment::Center,
            0.0,
            vec![Shape::circle(Color::WHITE, side).into()],
        )
        .into(),
    };
    assert!(circle(MAX_DESIGN_EXTENT).validate().is_ok());
    let err = circle(1e15).validate().unwrap_err();
    assert!(matches!(err, IconError::Validation(_)));
    assert!(err.to_string().contains("root.children[0]: shape size"), "{err}");

    let far = IconDescriptor {
        background: Color::BLACK,
        root: Shape::circle(Color::WHITE, 10.0)
            .offset(0.0, -1e300)
            .into(),
    };
    assert!(far.validate().unwrap_err().to_string().contains("root: shape offset"));

    let radius = IconDescriptor {
        background: Color::BLACK,
        root: Shape::rounded_rect(Color::WHITE, Size::square(10.0), 1e18).into(),
    };
    assert!(matches!(radius.validate(), Err(IconError::Validation(_))));

    let spacing = IconDescriptor {
        background: Color::BLACK,
        root: Stack::vertical(Alignment::Start, MAX_DESIGN_EXTENT * 2.0, vec![]).into(),
    };
    assert!(
        spacing
            .validate()
            .unwrap_err()
            .to_string()
            .contains("root: stack spacing")
    );
}

#[test]
fn oversized_json_descriptor_fails_to_load() {
    let json = r##"{
        "background": "#000000",
        "root": { "shape": { "kind": "circle", "fill": "#ffffff", "size": 1e300 } }
    }"##;
    let err = IconDescriptor::from_json_str(json).unwrap_err();
    assert!(matches!(err, IconError::Validation(_)), "{err}");
}

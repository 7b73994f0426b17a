use crate::foundation::core::{Color, Size};
use crate::icon::model::{Alignment, IconDescriptor, Node, Shape, Stack};

const SPACING: f64 = 80.0;
const RADIUS: f64 = 135.0;
const PILL_LENGTH: f64 = 350.0;
const PILL_ROTATION_DEG: f64 = 30.0;
const CIRCLE_OFFSET_X: f64 = 50.0;
const CIRCLE_OFFSET_Y: f64 = 20.0;

const BACKGROUND: Color = Color::rgb(0, 179, 184);
const PRIMARY: Color = Color::WHITE;
const SECONDARY: Color = Color::rgb(247, 207, 55);

fn pill(fill: Color) -> Node {
    Shape::rounded_rect(fill, Size::new(RADIUS, PILL_LENGTH), RADIUS)
        .rotated(PILL_ROTATION_DEG)
        .into()
}

/// The icon drawn when no descriptor file is supplied.
///
/// A dot and a tilted pill in white, followed by two pills and a dot in yellow, on teal.
pub fn default_icon() -> IconDescriptor {
    let primary = Stack::horizontal(
        Alignment::Start,
        SPACING,
        vec![
            Shape::circle(PRIMARY, RADIUS)
                .offset(CIRCLE_OFFSET_X, CIRCLE_OFFSET_Y)
                .into(),
            pill(PRIMARY),
        ],
    );

    let secondary = Stack::horizontal(
        Alignment::End,
        SPACING,
        vec![
            pill(SECONDARY),
            pill(SECONDARY),
            Shape::circle(SECONDARY, RADIUS)
                .offset(-CIRCLE_OFFSET_X, -CIRCLE_OFFSET_Y)
                .into(),
        ],
    );

    IconDescriptor {
        background: BACKGROUND,
        root: Stack::horizontal(
            Alignment::Center,
            SPACING,
            vec![primary.into(), secondary.into()],
        )
        .into(),
    }
}

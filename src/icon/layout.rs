use kurbo::{BezPath, Shape as _};

use crate::foundation::core::{Affine, Color, Point, Rect, Size, Vec2};
use crate::foundation::scale::CanvasScale;
use crate::icon::model::{Alignment, Axis, IconDescriptor, Node, ShapeKind};

/// Flattening tolerance for curved outlines, in pixels.
const PATH_TOLERANCE: f64 = 0.1;

/// Pixel-space geometry of a placed primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacedGeometry {
    /// Circle inscribed in the frame.
    Circle,
    /// Rounded rectangle with an already clamped radius.
    RoundedRect {
        /// Corner radius in pixels.
        radius: f64,
    },
}

/// A primitive resolved to pixel space, in paint order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedShape {
    /// Geometry to fill.
    pub geometry: PlacedGeometry,
    /// Fill color.
    pub fill: Color,
    /// Frame after layout and offset, before rotation.
    pub frame: Rect,
    /// Rotation about the frame centre.
    pub rotation_rad: f64,
}

impl PlacedShape {
    /// Outline of the shape in canvas coordinates, before [`PlacedShape::transform`].
    pub fn outline(&self) -> BezPath {
        match self.geometry {
            PlacedGeometry::Circle => {
                let r = self.frame.width().min(self.frame.height()) / 2.0;
                kurbo::Circle::new(self.frame.center(), r).to_path(PATH_TOLERANCE)
            }
            PlacedGeometry::RoundedRect { radius } => {
                kurbo::RoundedRect::from_rect(self.frame, radius).to_path(PATH_TOLERANCE)
            }
        }
    }

    /// Rotation about the frame centre.
    pub fn transform(&self) -> Affine {
        if self.rotation_rad == 0.0 {
            Affine::IDENTITY
        } else {
            Affine::rotate_about(self.rotation_rad, self.frame.center())
        }
    }
}

/// An icon resolved for one canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct IconLayout {
    /// Canvas bounds in pixels.
    pub canvas: Rect,
    /// Background fill covering [`IconLayout::canvas`].
    pub background: Color,
    /// Shapes in paint order.
    pub shapes: Vec<PlacedShape>,
}

/// Resolve `icon` onto a `canvas`-sized target, mapping every length through `scale`.
///
/// The root node is centred on the canvas. Stacks place children in order along their axis
/// separated by `spacing`, aligned on the cross axis; offsets and rotations are visual only.
pub fn layout_icon(icon: &IconDescriptor, canvas: Size, scale: CanvasScale) -> IconLayout {
    let root_size = measure(&icon.root, scale);
    let origin = Point::new(
        (canvas.width - root_size.width) / 2.0,
        (canvas.height - root_size.height) / 2.0,
    );

    let mut shapes = Vec::new();
    place(&icon.root, origin, scale, &mut shapes);

    IconLayout {
        canvas: Rect::new(0.0, 0.0, canvas.width, canvas.height),
        background: icon.background,
        shapes,
    }
}

fn measure(node: &Node, scale: CanvasScale) -> Size {
    match node {
        Node::Shape(shape) => Size::new(scale.px(shape.size.width), scale.px(shape.size.height)),
        Node::Stack(stack) => {
            let gaps = stack.children.len().saturating_sub(1) as f64;
            let spacing = scale.px(stack.spacing) * gaps;
            let (mut main, mut cross) = (0.0_f64, 0.0_f64);
            for child in &stack.children {
                let s = measure(child, scale);
                let (m, c) = split(stack.axis, s);
                main += m;
                cross = cross.max(c);
            }
            join(stack.axis, main + spacing, cross)
        }
    }
}

fn place(node: &Node, origin: Point, scale: CanvasScale, out: &mut Vec<PlacedShape>) {
    match node {
        Node::Shape(shape) => {
            let size = Size::new(scale.px(shape.size.width), scale.px(shape.size.height));
            let offset = Vec2::new(scale.px(shape.offset.x), scale.px(shape.offset.y));
            let at = origin + offset;
            let frame = Rect::new(at.x, at.y, at.x + size.width, at.y + size.height);
            let geometry = match shape.kind {
                ShapeKind::Circle => PlacedGeometry::Circle,
                ShapeKind::RoundedRect { corner_radius } => PlacedGeometry::RoundedRect {
                    radius: scale
                        .px(corner_radius)
                        .min(size.width.min(size.height) / 2.0),
                },
            };
            out.push(PlacedShape {
                geometry,
                fill: shape.fill,
                frame,
                rotation_rad: shape.rotation_deg.to_radians(),
            });
        }
        Node::Stack(stack) => {
            let (_, cross_extent) = split(stack.axis, measure(node, scale));
            let spacing = scale.px(stack.spacing);
            let mut cursor = 0.0;
            for child in &stack.children {
                let (main, cross) = split(stack.axis, measure(child, scale));
                let cross_pos = match stack.alignment {
                    Alignment::Start => 0.0,
                    Alignment::Center => (cross_extent - cross) / 2.0,
                    Alignment::End => cross_extent - cross,
                };
                let delta = match stack.axis {
                    Axis::Horizontal => Vec2::new(cursor, cross_pos),
                    Axis::Vertical => Vec2::new(cross_pos, cursor),
                };
                place(child, origin + delta, scale, out);
                cursor += main + spacing;
            }
        }
    }
}

fn split(axis: Axis, s: Size) -> (f64, f64) {
    match axis {
        Axis::Horizontal => (s.width, s.height),
        Axis::Vertical => (s.height, s.width),
    }
}

fn join(axis: Axis, main: f64, cross: f64) -> Size {
    match axis {
        Axis::Horizontal => Size::new(main, cross),
        Axis::Vertical => Size::new(cross, main),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/icon/layout.rs"]
mod tests;

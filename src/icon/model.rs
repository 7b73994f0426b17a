use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Color, Size, Vec2};
use crate::foundation::error::{IconError, IconResult};
use crate::foundation::scale::CANONICAL_CANVAS;

/// Largest accepted magnitude for any design-space length (sizes, offsets, corner radii and
/// spacing).
pub const MAX_DESIGN_EXTENT: f64 = 16.0 * CANONICAL_CANVAS;

/// A declarative icon: a background fill plus a tree of shapes.
///
/// All lengths are design-space units against the 1024-unit canonical canvas; renderers scale
/// them with a [`CanvasScale`](crate::CanvasScale) for the requested pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconDescriptor {
    /// Fill covering the entire canvas.
    pub background: Color,
    /// Content drawn over the background, centred on the canvas.
    pub root: Node,
}

/// A node in the icon tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A filled primitive.
    Shape(Shape),
    /// Children laid out one after another along an axis.
    Stack(Stack),
}

/// Primitive geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Circle inscribed in the shape frame.
    Circle,
    /// Rectangle filling the frame with rounded corners.
    RoundedRect {
        /// Corner radius; clamped to half the shorter side when drawn.
        corner_radius: f64,
    },
}

/// A filled primitive with its frame, visual offset and rotation.
///
/// `offset` and `rotation_deg` are visual only and do not affect stack layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Geometry drawn inside the frame.
    pub kind: ShapeKind,
    /// Fill color.
    pub fill: Color,
    /// Layout frame.
    pub size: Size,
    /// Translation applied after layout.
    #[serde(default)]
    pub offset: Vec2,
    /// Clockwise rotation about the frame centre, in degrees.
    #[serde(default)]
    pub rotation_deg: f64,
}

/// Stack direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

/// Cross-axis alignment of stack children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Top for horizontal stacks, leading edge for vertical ones.
    Start,
    /// Centred on the cross axis.
    #[default]
    Center,
    /// Bottom for horizontal stacks, trailing edge for vertical ones.
    End,
}

/// Sequential layout container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    /// Main axis.
    #[serde(default)]
    pub axis: Axis,
    /// Cross-axis alignment.
    #[serde(default)]
    pub alignment: Alignment,
    /// Gap between adjacent children.
    #[serde(default)]
    pub spacing: f64,
    /// Children in layout order.
    pub children: Vec<Node>,
}

impl Shape {
    /// Filled circle with the given diameter.
    pub fn circle(fill: Color, diameter: f64) -> Self {
        Self {
            kind: ShapeKind::Circle,
            fill,
            size: Size::square(diameter),
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
        }
    }

    /// Filled rounded rectangle.
    pub fn rounded_rect(fill: Color, size: Size, corner_radius: f64) -> Self {
        Self {
            kind: ShapeKind::RoundedRect { corner_radius },
            fill,
            size,
            offset: Vec2::ZERO,
            rotation_deg: 0.0,
        }
    }

    /// Set the visual offset.
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    /// Set the rotation in degrees.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }
}

impl Stack {
    /// Horizontal stack.
    pub fn horizontal(alignment: Alignment, spacing: f64, children: Vec<Node>) -> Self {
        Self {
            axis: Axis::Horizontal,
            alignment,
            spacing,
            children,
        }
    }

    /// Vertical stack.
    pub fn vertical(alignment: Alignment, spacing: f64, children: Vec<Node>) -> Self {
        Self {
            axis: Axis::Vertical,
            alignment,
            spacing,
            children,
        }
    }
}

impl From<Shape> for Node {
    fn from(s: Shape) -> Self {
        Node::Shape(s)
    }
}

impl From<Stack> for Node {
    fn from(s: Stack) -> Self {
        Node::Stack(s)
    }
}

impl IconDescriptor {
    /// Parse and validate a descriptor from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> IconResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            IconError::validation(format!("open icon descriptor '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse and validate a descriptor from a JSON reader.
    pub fn from_reader(reader: impl Read) -> IconResult<Self> {
        let icon: Self = serde_json::from_reader(reader)
            .map_err(|e| IconError::serde(format!("parse icon descriptor JSON: {e}")))?;
        icon.validate()?;
        Ok(icon)
    }

    /// Parse and validate a descriptor from a JSON string.
    pub fn from_json_str(s: &str) -> IconResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Serialize to pretty JSON.
    pub fn to_json_pretty(&self) -> IconResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| IconError::serde(format!("serialize icon descriptor: {e}")))
    }

    /// Reject values that cannot be laid out or drawn.
    pub fn validate(&self) -> IconResult<()> {
        validate_node(&self.root, "root")
    }
}

fn validate_node(node: &Node, path: &str) -> IconResult<()> {
    match node {
        Node::Shape(shape) => {
            let Size { width, height } = shape.size;
            if !(in_range(width) && in_range(height)) {
                return Err(IconError::validation(format!(
                    "{path}: shape size must be within 0..={MAX_DESIGN_EXTENT}, got {width}x{height}"
                )));
            }
            let Vec2 { x, y } = shape.offset;
            if !(in_range(x.abs()) && in_range(y.abs())) {
                return Err(IconError::validation(format!(
                    "{path}: shape offset must be within +/-{MAX_DESIGN_EXTENT}, got ({x}, {y})"
                )));
            }
            if !shape.rotation_deg.is_finite() {
                return Err(IconError::validation(format!(
                    "{path}: shape rotation must be finite"
                )));
            }
            if let ShapeKind::RoundedRect { corner_radius } = shape.kind
                && !in_range(corner_radius)
            {
                return Err(IconError::validation(format!(
                    "{path}: corner_radius must be within 0..={MAX_DESIGN_EXTENT}, got {corner_radius}"
                )));
            }
            Ok(())
        }
        Node::Stack(stack) => {
            if !in_range(stack.spacing) {
                return Err(IconError::validation(format!(
                    "{path}: stack spacing must be within 0..={MAX_DESIGN_EXTENT}, got {}",
                    stack.spacing
                )));
            }
            for (i, child) in stack.children.iter().enumerate() {
                validate_node(child, &format!("{path}.children[{i}]"))?;
            }
            Ok(())
        }
    }
}

// NaN fails both comparisons.
fn in_range(v: f64) -> bool {
    (0.0..=MAX_DESIGN_EXTENT).contains(&v)
}

#[cfg(test)]
#[path = "../../tests/unit/icon/model.rs"]
mod tests;

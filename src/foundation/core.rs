use serde::{Deserialize, Serialize};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from 8-bit channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Color from unit-range floats, clamped to `[0, 1]`.
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::rgba(to_u8(r), to_u8(g), to_u8(b), to_u8(a))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
            Arr(Vec<u8>),
        }

        fn opaque() -> u8 {
            255
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "color array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex(s: &str) -> Result<Color, String> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| format!("color '{s}' must start with '#'"))?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("color '{s}' contains non-hex digits"));
    }

    let byte = |i: usize| -> u8 { u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0) };
    let nibble = |i: usize| -> u8 {
        let v = u8::from_str_radix(&hex[i..i + 1], 16).unwrap_or(0);
        v * 17
    };

    match hex.len() {
        3 => Ok(Color::rgb(nibble(0), nibble(1), nibble(2))),
        6 => Ok(Color::rgb(byte(0), byte(2), byte(4))),
        8 => Ok(Color::rgba(byte(0), byte(2), byte(4), byte(6))),
        n => Err(format!("color '{s}' has {n} hex digits, expected 3, 6 or 8")),
    }
}

/// Width/height pair, in design units or pixels depending on context.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Construct a size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square size.
    pub const fn square(side: f64) -> Self {
        Self::new(side, side)
    }
}

impl<'de> Deserialize<'de> for Size {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Side(f64),
            Arr([f64; 2]),
            Obj { width: f64, height: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Side(s) => Ok(Self::square(s)),
            Repr::Arr([width, height]) => Ok(Self::new(width, height)),
            Repr::Obj { width, height } => Ok(Self::new(width, height)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

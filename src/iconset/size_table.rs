use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Filename prefix shared by every image in the set.
pub const ICON_NAME: &str = "AppIcon";

/// Device class with its own icon sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Idiom {
    /// iPhone.
    #[serde(rename = "iphone")]
    Phone,
    /// iPad.
    #[serde(rename = "ipad")]
    Tablet,
    /// Mac (Catalyst).
    #[serde(rename = "mac")]
    Desktop,
    /// App Store marketing artwork.
    #[serde(rename = "ios-marketing")]
    Marketing,
}

impl Idiom {
    /// Every idiom, in manifest order.
    pub const ALL: [Idiom; 4] = [Idiom::Tablet, Idiom::Phone, Idiom::Desktop, Idiom::Marketing];

    /// Spelling used in manifests and filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Idiom::Phone => "iphone",
            Idiom::Tablet => "ipad",
            Idiom::Desktop => "mac",
            Idiom::Marketing => "ios-marketing",
        }
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display density multiplier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scale {
    /// Standard density.
    #[serde(rename = "1x")]
    One,
    /// Retina.
    #[serde(rename = "2x")]
    Two,
    /// Super Retina.
    #[serde(rename = "3x")]
    Three,
}

impl Scale {
    /// Pixels per point.
    pub fn multiplier(self) -> u32 {
        match self {
            Scale::One => 1,
            Scale::Two => 2,
            Scale::Three => 3,
        }
    }

    /// Spelling used in manifests and filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Scale::One => "1x",
            Scale::Two => "2x",
            Scale::Three => "3x",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One required entry of the icon set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeSpec {
    /// Device class.
    pub idiom: Idiom,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
    /// Density.
    pub scale: Scale,
    /// Listed in the manifest without an image.
    pub placeholder: bool,
}

impl SizeSpec {
    /// `WxH` in points, e.g. `76x76` or `83.5x83.5`.
    pub fn size_string(&self) -> String {
        format!(
            "{}x{}",
            format_dimension(self.width),
            format_dimension(self.height)
        )
    }

    /// Image filename, absent for placeholders.
    pub fn filename(&self) -> Option<String> {
        if self.placeholder {
            return None;
        }
        let suffix = match self.scale {
            Scale::One => String::new(),
            s => format!("@{s}"),
        };
        Some(format!(
            "{ICON_NAME}-{}-{}{suffix}.png",
            self.idiom,
            self.size_string()
        ))
    }

    /// Rendered dimensions in pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        let m = f64::from(self.scale.multiplier());
        (
            (self.width * m).round() as u32,
            (self.height * m).round() as u32,
        )
    }

    /// Identity key: idiom, size and scale. Two entries with equal keys are the same slot.
    pub fn key(&self) -> (Idiom, u64, u64, Scale) {
        (
            self.idiom,
            self.width.to_bits(),
            self.height.to_bits(),
            self.scale,
        )
    }
}

/// Integral values print without decimals, anything else with one.
pub fn format_dimension(v: f64) -> String {
    if (v - v.round()).abs() < 0.001 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Square slot sizes per idiom, as `(points, scale)`.
const TABLE: &[(Idiom, f64, Scale)] = &[
    (Idiom::Tablet, 20.0, Scale::One),
    (Idiom::Tablet, 20.0, Scale::Two),
    (Idiom::Tablet, 29.0, Scale::One),
    (Idiom::Tablet, 29.0, Scale::Two),
    (Idiom::Tablet, 40.0, Scale::One),
    (Idiom::Tablet, 40.0, Scale::Two),
    (Idiom::Tablet, 76.0, Scale::One),
    (Idiom::Tablet, 76.0, Scale::Two),
    (Idiom::Tablet, 83.5, Scale::Two),
    (Idiom::Phone, 20.0, Scale::Two),
    (Idiom::Phone, 20.0, Scale::Three),
    (Idiom::Phone, 29.0, Scale::Two),
    (Idiom::Phone, 29.0, Scale::Three),
    (Idiom::Phone, 40.0, Scale::Two),
    (Idiom::Phone, 40.0, Scale::Three),
    (Idiom::Phone, 60.0, Scale::Two),
    (Idiom::Phone, 60.0, Scale::Three),
    (Idiom::Desktop, 16.0, Scale::One),
    (Idiom::Desktop, 16.0, Scale::Two),
    (Idiom::Desktop, 32.0, Scale::One),
    (Idiom::Desktop, 32.0, Scale::Two),
    (Idiom::Desktop, 128.0, Scale::One),
    (Idiom::Desktop, 128.0, Scale::Two),
    (Idiom::Desktop, 256.0, Scale::One),
    (Idiom::Desktop, 256.0, Scale::Two),
    (Idiom::Desktop, 512.0, Scale::One),
    (Idiom::Desktop, 512.0, Scale::Two),
    (Idiom::Marketing, 1024.0, Scale::One),
];

/// Every slot the asset catalog format requires, in manifest order.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeTable {
    entries: Vec<SizeSpec>,
}

impl SizeTable {
    /// Build the full table; entries of idioms not in `requested` become placeholders.
    pub fn for_idioms(requested: &BTreeSet<Idiom>) -> Self {
        let entries = TABLE
            .iter()
            .map(|&(idiom, side, scale)| SizeSpec {
                idiom,
                width: side,
                height: side,
                scale,
                placeholder: !requested.contains(&idiom),
            })
            .collect();
        Self { entries }
    }

    /// All entries, placeholders included.
    pub fn entries(&self) -> &[SizeSpec] {
        &self.entries
    }

    /// Entries that need an image.
    pub fn renderable(&self) -> impl Iterator<Item = &SizeSpec> {
        self.entries.iter().filter(|e| !e.placeholder)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/iconset/size_table.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{IconError, IconResult};
use crate::iconset::size_table::{Idiom, Scale, SizeTable};

/// Manifest filename inside the icon set directory.
pub const MANIFEST_FILE: &str = "Contents.json";

/// One `images[]` entry of `Contents.json`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    /// Device class.
    pub idiom: Idiom,
    /// Point size, e.g. `83.5x83.5`.
    pub size: String,
    /// Density.
    pub scale: Scale,
    /// Image file in the same directory; absent for placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Catalog metadata block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    /// Tool that wrote the catalog entry.
    pub author: String,
    /// Catalog format version.
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

/// The `Contents.json` of an `.appiconset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Every slot, placeholders included, in table order.
    pub images: Vec<ManifestImage>,
    /// Catalog metadata.
    #[serde(default)]
    pub info: ManifestInfo,
}

impl Manifest {
    /// Describe every entry of `table`.
    pub fn from_table(table: &SizeTable) -> Self {
        let images = table
            .entries()
            .iter()
            .map(|e| ManifestImage {
                idiom: e.idiom,
                size: e.size_string(),
                scale: e.scale,
                filename: e.filename(),
            })
            .collect();
        Self {
            images,
            info: ManifestInfo::default(),
        }
    }

    /// Pretty JSON with a trailing newline. Output is stable for equal manifests.
    pub fn to_json_bytes(&self) -> IconResult<Vec<u8>> {
        let mut out = serde_json::to_vec_pretty(self)
            .map_err(|e| IconError::serde(format!("serialize manifest: {e}")))?;
        out.push(b'\n');
        Ok(out)
    }

    /// Parse a `Contents.json` document.
    pub fn from_json_slice(bytes: &[u8]) -> IconResult<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| IconError::serde(format!("parse manifest: {e}")))
    }

    /// Filenames referenced by the manifest, in order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.images.iter().filter_map(|i| i.filename.as_deref())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/iconset/manifest.rs"]
mod tests;

//! Build-phase configuration.
//!
//! Xcode exposes build settings as environment variables. One contract covers every invocation:
//!
//! - `SCRIPT_OUTPUT_FILE_0`: the asset catalog directory to write into. When unset, the catalog
//!   is `$PROJECT_DIR/$PROJECT/Assets.xcassets`.
//! - `TARGETED_DEVICE_FAMILY` (required): comma separated, `1` is iPhone and `2` is iPad.
//! - `SUPPORTS_MACCATALYST`: `YES` adds the Mac idiom.
//!
//! Command-line flags take precedence over the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::foundation::error::{IconError, IconResult};
use crate::iconset::size_table::Idiom;
use crate::iconset::writer::ICON_SET_DIR;

/// Explicit asset catalog path.
pub const ENV_OUTPUT: &str = "SCRIPT_OUTPUT_FILE_0";
/// Device family list.
pub const ENV_DEVICE_FAMILY: &str = "TARGETED_DEVICE_FAMILY";
/// Project root, used with [`ENV_PROJECT`] when no explicit output is set.
pub const ENV_PROJECT_DIR: &str = "PROJECT_DIR";
/// Project name.
pub const ENV_PROJECT: &str = "PROJECT";
/// Mac Catalyst switch.
pub const ENV_MAC_CATALYST: &str = "SUPPORTS_MACCATALYST";

const CATALOG_DIR: &str = "Assets.xcassets";

/// Raw inputs before validation. `None` means "not provided".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigSources {
    /// Asset catalog directory.
    pub assets_dir: Option<PathBuf>,
    /// Device family string, e.g. `1,2`.
    pub device_family: Option<String>,
    /// Project root directory.
    pub project_dir: Option<PathBuf>,
    /// Project name.
    pub project: Option<String>,
    /// Include the Mac idiom.
    pub mac_catalyst: Option<bool>,
}

/// Validated configuration for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Asset catalog directory that receives `AppIcon.appiconset`.
    pub assets_dir: PathBuf,
    /// Requested idioms; always contains [`Idiom::Marketing`].
    pub idioms: BTreeSet<Idiom>,
}

impl GeneratorConfig {
    /// The icon set directory inside the catalog.
    pub fn icon_set_dir(&self) -> PathBuf {
        self.assets_dir.join(ICON_SET_DIR)
    }
}

impl ConfigSources {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read inputs through `lookup`. Empty values count as absent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            assets_dir: get(ENV_OUTPUT).map(PathBuf::from),
            device_family: get(ENV_DEVICE_FAMILY),
            project_dir: get(ENV_PROJECT_DIR).map(PathBuf::from),
            project: get(ENV_PROJECT),
            mac_catalyst: get(ENV_MAC_CATALYST).map(|v| v.trim().eq_ignore_ascii_case("YES")),
        }
    }

    /// Fields set in `overrides` replace those of `self`.
    pub fn override_with(self, overrides: ConfigSources) -> Self {
        Self {
            assets_dir: overrides.assets_dir.or(self.assets_dir),
            device_family: overrides.device_family.or(self.device_family),
            project_dir: overrides.project_dir.or(self.project_dir),
            project: overrides.project.or(self.project),
            mac_catalyst: overrides.mac_catalyst.or(self.mac_catalyst),
        }
    }

    /// Idioms requested by the device family and Catalyst inputs, plus marketing.
    pub fn resolve_idioms(&self) -> IconResult<BTreeSet<Idiom>> {
        let family = self.device_family.as_deref().ok_or_else(|| {
            IconError::missing_configuration(format!(
                "{ENV_DEVICE_FAMILY} is not set (pass --device-family)"
            ))
        })?;

        let mut idioms = parse_device_family(family);
        if self.mac_catalyst.unwrap_or(false) {
            idioms.insert(Idiom::Desktop);
        }
        idioms.insert(Idiom::Marketing);
        Ok(idioms)
    }

    /// Asset catalog directory from the explicit output or the project location.
    pub fn resolve_assets_dir(&self) -> IconResult<PathBuf> {
        if let Some(dir) = &self.assets_dir {
            return Ok(dir.clone());
        }
        match (&self.project_dir, &self.project) {
            (Some(root), Some(project)) => Ok(root.join(project).join(CATALOG_DIR)),
            _ => Err(IconError::missing_configuration(format!(
                "no output location: set {ENV_OUTPUT}, or both {ENV_PROJECT_DIR} and {ENV_PROJECT} \
                 (pass --assets or --project-dir/--project)"
            ))),
        }
    }

    /// Validate into a [`GeneratorConfig`].
    pub fn resolve(&self) -> IconResult<GeneratorConfig> {
        Ok(GeneratorConfig {
            assets_dir: self.resolve_assets_dir()?,
            idioms: self.resolve_idioms()?,
        })
    }
}

/// Map device family tokens to idioms. Unknown tokens are logged and skipped.
pub fn parse_device_family(family: &str) -> BTreeSet<Idiom> {
    let mut idioms = BTreeSet::new();
    for token in family
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        match token {
            "1" => {
                idioms.insert(Idiom::Phone);
            }
            "2" => {
                idioms.insert(Idiom::Tablet);
            }
            other => tracing::warn!(token = other, "ignoring unsupported device family"),
        }
    }
    idioms
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

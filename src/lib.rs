//! appicon renders a declarative vector icon into a complete Xcode app icon set.
//!
//! An [`IconDescriptor`] (a background plus a tree of circles, rounded rectangles and stacks,
//! authored against a 1024-unit canvas) is rasterized at every size the asset catalog format
//! requires and written to `Assets.xcassets/AppIcon.appiconset` together with `Contents.json`.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: build settings -> [`GeneratorConfig`] (catalog path + requested idioms)
//! 2. **Enumerate**: idioms -> [`SizeTable`] (every required slot, unrequested ones as placeholders)
//! 3. **Render**: `IconDescriptor + pixel size -> RasterImage` through an [`IconRenderer`], with
//!    lengths mapped by a [`CanvasScale`]
//! 4. **Write**: PNG per non-placeholder slot, then [`Manifest`], via [`IconSet::write`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **All or nothing**: the previous icon set is deleted first and any failure aborts the run.
//! - **Deterministic**: equal inputs produce byte-identical manifests and images.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod icon;
mod iconset;
mod render;

/// Build-setting driven configuration.
pub mod config;

pub use crate::config::{ConfigSources, GeneratorConfig, parse_device_family};
pub use crate::foundation::core::{Affine, Color, Point, Rect, Size, Vec2, parse_hex};
pub use crate::foundation::error::{IconError, IconResult};
pub use crate::foundation::scale::{CANONICAL_CANVAS, CanvasScale, scale};
pub use crate::icon::builtin::default_icon;
pub use crate::icon::layout::{IconLayout, PlacedGeometry, PlacedShape, layout_icon};
pub use crate::icon::model::{
    Alignment, Axis, IconDescriptor, MAX_DESIGN_EXTENT, Node, Shape, ShapeKind, Stack,
};
pub use crate::iconset::manifest::{MANIFEST_FILE, Manifest, ManifestImage, ManifestInfo};
pub use crate::iconset::size_table::{
    ICON_NAME, Idiom, Scale, SizeSpec, SizeTable, format_dimension,
};
pub use crate::iconset::writer::{ICON_SET_DIR, IconSet, WriteOpts, WriteReport};
pub use crate::render::backend::{
    BackendKind, IconRenderer, RasterImage, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuRenderer;
pub use crate::render::encode::encode_png;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::error::{IconError, IconResult};
use crate::icon::model::IconDescriptor;
use crate::iconset::manifest::{MANIFEST_FILE, Manifest};
use crate::iconset::size_table::{Idiom, SizeSpec, SizeTable};
use crate::render::backend::{BackendKind, IconRenderer, RenderSettings, create_backend};
use crate::render::encode::encode_png;

/// Directory created inside the asset catalog.
pub const ICON_SET_DIR: &str = "AppIcon.appiconset";

/// Options for [`IconSet::write`].
#[derive(Clone, Copy, Debug, Default)]
pub struct WriteOpts {
    /// Rasterizer to use.
    pub backend: BackendKind,
    /// Settings passed to every backend instance.
    pub settings: RenderSettings,
    /// Render and encode images on the rayon pool. Files are still written in table order
    /// from the calling thread.
    pub parallel: bool,
}

/// What a successful [`IconSet::write`] produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriteReport {
    /// The `.appiconset` directory.
    pub dir: PathBuf,
    /// Image filenames in table order.
    pub images: Vec<String>,
    /// Path of `Contents.json`.
    pub manifest: PathBuf,
}

/// An icon design paired with the sizes it must be rendered at.
#[derive(Clone, Debug)]
pub struct IconSet {
    icon: IconDescriptor,
    table: SizeTable,
}

struct EncodedImage {
    filename: String,
    png: Vec<u8>,
}

impl IconSet {
    /// Icon set for `idioms`; every other idiom is listed as a placeholder.
    pub fn new(idioms: &BTreeSet<Idiom>, icon: IconDescriptor) -> Self {
        Self {
            icon,
            table: SizeTable::for_idioms(idioms),
        }
    }

    /// The `Contents.json` describing this set.
    pub fn manifest(&self) -> Manifest {
        Manifest::from_table(&self.table)
    }

    /// Write `<assets_dir>/AppIcon.appiconset`, replacing any previous contents.
    ///
    /// The old directory is removed before rendering starts and every image is encoded in memory
    /// before the first file is written. Any failure after the removal deletes the icon set
    /// directory again, so an aborted run leaves no icon set rather than a partial or stale one.
    #[tracing::instrument(skip_all, fields(assets_dir = %assets_dir.display(), parallel = opts.parallel))]
    pub fn write(&self, assets_dir: &Path, opts: &WriteOpts) -> IconResult<WriteReport> {
        self.icon.validate()?;

        let dir = assets_dir.join(ICON_SET_DIR);
        reset_dir(&dir)?;
        let (images, manifest) = match self.fill_dir(&dir, opts) {
            Ok(written) => written,
            Err(e) => {
                if let Err(cleanup) = std::fs::remove_dir_all(&dir) {
                    tracing::warn!(dir = %dir.display(), error = %cleanup, "could not remove partial icon set");
                }
                return Err(e);
            }
        };

        tracing::info!(
            dir = %dir.display(),
            images = images.len(),
            placeholders = self.table.entries().len() - images.len(),
            "wrote icon set"
        );
        Ok(WriteReport {
            dir,
            images,
            manifest,
        })
    }

    fn fill_dir(&self, dir: &Path, opts: &WriteOpts) -> IconResult<(Vec<String>, PathBuf)> {
        let encoded = if opts.parallel {
            self.render_parallel(opts)?
        } else {
            self.render_sequential(opts)?
        };
        let manifest_bytes = self.manifest().to_json_bytes()?;

        for image in &encoded {
            write_file(dir, image)?;
        }
        let manifest = dir.join(MANIFEST_FILE);
        std::fs::write(&manifest, manifest_bytes).map_err(|e| {
            IconError::write(format!("write manifest '{}': {e}", manifest.display()))
        })?;

        let images = encoded.into_iter().map(|e| e.filename).collect();
        Ok((images, manifest))
    }

    fn render_sequential(&self, opts: &WriteOpts) -> IconResult<Vec<EncodedImage>> {
        let mut backend = create_backend(opts.backend, opts.settings)?;
        self.table
            .renderable()
            .map(|spec| render_entry(backend.as_mut(), &self.icon, spec))
            .collect()
    }

    fn render_parallel(&self, opts: &WriteOpts) -> IconResult<Vec<EncodedImage>> {
        let specs: Vec<&SizeSpec> = self.table.renderable().collect();
        specs
            .par_iter()
            .map_init(
                || create_backend(opts.backend, opts.settings),
                |backend, spec| match backend {
                    Ok(backend) => render_entry(backend.as_mut(), &self.icon, spec),
                    Err(IconError::Render(msg)) => {
                        Err(IconError::render(format!("create worker backend: {msg}")))
                    }
                    Err(e) => Err(IconError::render(format!("create worker backend: {e}"))),
                },
            )
            .collect()
    }
}

fn render_entry(
    backend: &mut dyn IconRenderer,
    icon: &IconDescriptor,
    spec: &SizeSpec,
) -> IconResult<EncodedImage> {
    let filename = spec.filename().ok_or_else(|| {
        IconError::render(format!(
            "placeholder {} {}@{} has no image",
            spec.idiom,
            spec.size_string(),
            spec.scale
        ))
    })?;
    let (w, h) = spec.pixel_size();
    let image = backend.render(icon, w, h).map_err(|e| match e {
        IconError::Render(msg) => IconError::render(format!("{filename}: {msg}")),
        other => other,
    })?;
    let png = encode_png(&image)?;
    Ok(EncodedImage { filename, png })
}

fn reset_dir(dir: &Path) -> IconResult<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => tracing::debug!(dir = %dir.display(), "removed previous icon set"),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(IconError::write(format!(
                "remove '{}': {e}",
                dir.display()
            )));
        }
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| IconError::write(format!("create '{}': {e}", dir.display())))
}

fn write_file(dir: &Path, image: &EncodedImage) -> IconResult<()> {
    let path = dir.join(&image.filename);
    std::fs::write(&path, &image.png)
        .map_err(|e| IconError::write(format!("write '{}': {e}", path.display())))?;
    tracing::debug!(file = %image.filename, bytes = image.png.len(), "wrote image");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/iconset/writer.rs"]
mod tests;

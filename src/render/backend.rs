use crate::foundation::error::{IconError, IconResult};
use crate::icon::model::IconDescriptor;

/// A rendered icon as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major, not premultiplied.
    pub data: Vec<u8>,
}

impl RasterImage {
    /// Read one pixel. Returns `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Capability to rasterize an [`IconDescriptor`] at an exact pixel size.
///
/// Implementations map design units with a [`CanvasScale`](crate::CanvasScale) computed from
/// the requested size, so equal descriptors at different sizes are proportionally identical.
pub trait IconRenderer {
    /// Render `icon` into a `width` x `height` image.
    fn render(&mut self, icon: &IconDescriptor, width: u32, height: u32)
    -> IconResult<RasterImage>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    #[default]
    Cpu,
}

/// Backend-agnostic settings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderSettings {
    /// If set, the target is cleared to this straight RGBA8 color before drawing.
    pub clear_rgba: Option<[u8; 4]>,
    /// Clip to the home-screen rounded-square outline (preview only; asset catalogs want
    /// unmasked squares).
    pub home_screen_mask: bool,
}

/// Create a rendering backend implementation.
pub fn create_backend(
    kind: BackendKind,
    settings: RenderSettings,
) -> IconResult<Box<dyn IconRenderer>> {
    match kind {
        BackendKind::Cpu => Ok(Box::new(crate::render::cpu::CpuRenderer::new(settings))),
    }
}

/// Checks shared by all backends before any drawing.
pub(crate) fn check_target_size(width: u32, height: u32) -> IconResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(IconError::render(format!(
            "cannot render at zero size ({width}x{height})"
        )));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| IconError::render(format!("render width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| IconError::render(format!("render height {height} exceeds u16")))?;
    Ok((w, h))
}

use std::io::Cursor;

use crate::foundation::error::{IconError, IconResult};
use crate::render::backend::RasterImage;

/// Losslessly encode `image` as PNG bytes.
pub fn encode_png(image: &RasterImage) -> IconResult<Vec<u8>> {
    let expected = (image.width as usize)
        .saturating_mul(image.height as usize)
        .saturating_mul(4);
    if image.data.len() != expected {
        return Err(IconError::encode(format!(
            "pixel buffer is {} bytes, expected {expected} for {}x{}",
            image.data.len(),
            image.width,
            image.height
        )));
    }

    let rgba = image::RgbaImage::from_raw(image.width, image.height, image.data.clone())
        .ok_or_else(|| IconError::encode("pixel buffer does not match image dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(rgba)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| {
            IconError::encode(format!(
                "png encode {}x{}: {e}",
                image.width, image.height
            ))
        })?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;

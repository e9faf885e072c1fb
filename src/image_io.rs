// Canvas <-> image file bytes, via the `image` crate.
// Save always produces PNG at the canvas size; load accepts anything the
// `image` crate can sniff (PNG, JPEG, BMP, GIF, ...).

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::{Error, Result};
use crate::surface::Bitmap;
use crate::types::Rgba;

/// Encode the canvas as an RGBA8 PNG of exactly its pixel dimensions.
pub fn encode_png(bmp: &Bitmap) -> Result<Vec<u8>> {
    let img = to_rgba_image(bmp)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| Error::Encode(format!("PNG: {e}")))?;
    Ok(out.into_inner())
}

/// Decode arbitrary image bytes into RGBA8.
pub fn decode(bytes: &[u8]) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(img.to_rgba8())
}

/// Convert a decoded image to a Bitmap of the same size.
pub fn to_bitmap(img: &RgbaImage) -> Result<Bitmap> {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| Rgba::new(p[0], p[1], p[2], p[3]).to_argb())
        .collect();
    Bitmap::from_pixels(w as usize, h as usize, pixels)
        .ok_or_else(|| Error::Decode(format!("decoded {w}x{h} image has a short pixel buffer")))
}

fn to_rgba_image(bmp: &Bitmap) -> Result<RgbaImage> {
    let mut raw = Vec::with_capacity(bmp.pixels().len() * 4);
    for &px in bmp.pixels() {
        let c = Rgba::from_argb(px);
        raw.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    let (w, h) = (u32::try_from(bmp.width()), u32::try_from(bmp.height()));
    let (Ok(w), Ok(h)) = (w, h) else {
        return Err(Error::Encode("canvas too large for PNG".into()));
    };
    RgbaImage::from_raw(w, h, raw).ok_or_else(|| Error::Encode("pixel buffer size mismatch".into()))
}

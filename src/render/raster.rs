use image::{DynamicImage, Rgba, RgbaImage, imageops};

use crate::foundation::{
    core::Rgb8,
    error::{FlipbookError, FlipbookResult},
};

/// Reusable straight-alpha RGBA8 drawing surface with fixed dimensions.
#[derive(Clone, Debug)]
pub struct Raster {
    pixels: RgbaImage,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> FlipbookResult<Self> {
        if width == 0 || height == 0 {
            return Err(FlipbookError::validation(
                "raster width/height must be non-zero",
            ));
        }
        Ok(Self {
            pixels: RgbaImage::new(width, height),
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Reset every pixel to fully transparent black.
    pub fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    /// Draw `img` stretched to cover the whole raster, blending over the current contents.
    ///
    /// Aspect ratio is not preserved. Scaling filters in premultiplied alpha, so the colour of
    /// fully transparent source pixels never reaches visible output pixels.
    pub fn draw_scaled(&mut self, img: &DynamicImage) {
        let (w, h) = (self.width(), self.height());
        let mut src = img.to_rgba8();
        if src.dimensions() != (w, h) {
            premultiply_rgba8_in_place(&mut src);
            src = imageops::resize(&src, w, h, imageops::FilterType::Triangle);
            unpremultiply_rgba8_in_place(&mut src);
        }
        imageops::overlay(&mut self.pixels, &src, 0, 0);
    }
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Drop alpha and mark colour-keyed pixels for the GIF quantizer.
///
/// Fully transparent pixels become black; other pixels keep their straight RGB. With a `key`,
/// pixels whose resulting RGB equals the key get alpha `0` and all others alpha `255`, which is
/// what the quantizer reads as the transparent index. Without a key every pixel is opaque.
pub(crate) fn flatten_for_palette(
    dst: &mut [u8],
    src: &[u8],
    key: Option<Rgb8>,
) -> FlipbookResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(FlipbookError::validation(
            "flatten_for_palette expects equal-length rgba8 buffers",
        ));
    }

    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 {
            d[..3].fill(0);
        } else {
            d[..3].copy_from_slice(&s[..3]);
        }
        let keyed = key.is_some_and(|k| k.matches(d));
        d[3] = if keyed { 0 } else { 255 };
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;

use std::path::Path;

use crate::{
    foundation::error::{SpotlightError, SpotlightResult},
    foundation::math::{disc_coverage, mul_div255_u8, unpremul_u8},
    geometry::focus::FocusPoint,
    mask::color::BackgroundColor,
};

/// The composited overlay mask.
///
/// Pixels are **premultiplied** RGBA8, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaskBuffer {
    /// Mask width in pixels.
    pub width: u32,
    /// Mask height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl MaskBuffer {
    fn filled(width: u32, height: u32, rgba: [u8; 4]) -> SpotlightResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpotlightError::validation(format!(
                "mask dimensions must be positive, got {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| SpotlightError::validation("mask buffer size overflow"))?;

        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Premultiplied pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.idx(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    pub fn is_transparent_at(&self, x: u32, y: u32) -> bool {
        self.pixel(x, y).is_some_and(|p| p[3] == 0)
    }

    pub fn transparent_pixel_count(&self) -> usize {
        self.data.chunks_exact(4).filter(|p| p[3] == 0).count()
    }

    /// Straight-alpha copy suitable for encoding.
    pub fn to_rgba_image(&self) -> SpotlightResult<image::RgbaImage> {
        let mut straight = self.data.clone();
        for px in straight.chunks_exact_mut(4) {
            let a = px[3];
            px[0] = unpremul_u8(px[0], a);
            px[1] = unpremul_u8(px[1], a);
            px[2] = unpremul_u8(px[2], a);
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| SpotlightError::validation("mask buffer length mismatch"))
    }

    pub fn save_png(&self, path: &Path) -> SpotlightResult<()> {
        let img = self.to_rgba_image()?;
        img.save_with_format(path, image::ImageFormat::Png)
            .map_err(|e| SpotlightError::Other(anyhow::Error::new(e)))
    }

    fn punch_circle(&mut self, focus: FocusPoint) {
        let r = focus.radius;
        if !r.is_finite() || r <= 0.0 || !focus.center.is_finite() {
            return;
        }
        let cx = focus.center.x;
        let cy = focus.center.y;

        // Bounding box of the circle plus the anti-aliasing band, clipped to the buffer.
        let clip = |lo: f64, hi: f64, max: u32| -> Option<(u32, u32)> {
            let lo = (lo - 1.0).floor().max(0.0);
            let hi = (hi + 1.0).ceil().min(f64::from(max));
            if lo >= hi {
                return None;
            }
            Some((lo as u32, hi as u32))
        };
        let Some((x0, x1)) = clip(cx - r, cx + r, self.width) else {
            return;
        };
        let Some((y0, y1)) = clip(cy - r, cy + r, self.height) else {
            return;
        };

        for y in y0..y1 {
            let py = f64::from(y) + 0.5;
            for x in x0..x1 {
                let px = f64::from(x) + 0.5;
                let dist = (px - cx).hypot(py - cy);
                let cov = disc_coverage(dist, r);
                if cov <= 0.0 {
                    continue;
                }

                let keep = ((1.0 - cov) * 255.0).round() as u16;
                let i = self.idx(x, y);
                for c in &mut self.data[i..i + 4] {
                    *c = mul_div255_u8(u16::from(*c), keep);
                }
            }
        }
    }
}

/// Fill a `width` x `height` mask with `background` and clear the focus circle, if any.
///
/// `focus` must already be expressed in mask coordinates.
#[tracing::instrument(skip(focus))]
pub fn composite(
    width: u32,
    height: u32,
    background: BackgroundColor,
    focus: Option<FocusPoint>,
) -> SpotlightResult<MaskBuffer> {
    let fill = background.resolve().to_rgba8_premul();
    let mut mask = MaskBuffer::filled(width, height, fill.to_array())?;
    if let Some(focus) = focus {
        mask.punch_circle(focus);
    }
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/mask/compositor.rs"]
mod tests;

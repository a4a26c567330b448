use crate::foundation::error::{SpotlightError, SpotlightResult};

pub use kurbo::{Point, Rect, Vec2};

/// Host screen metrics in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
    /// Fixed system bar at the top of the screen; the mask starts below it.
    #[serde(default)]
    pub top_inset: u32,
}

impl ScreenMetrics {
    pub fn new(width: u32, height: u32, top_inset: u32) -> SpotlightResult<Self> {
        if width == 0 || height == 0 {
            return Err(SpotlightError::validation(
                "screen metrics must be non-zero in both dimensions",
            ));
        }
        Ok(Self {
            width,
            height,
            top_inset,
        })
    }

    /// Size of the content area the mask covers, `None` when the inset eats the whole screen.
    pub fn mask_size(self) -> Option<(u32, u32)> {
        let h = self.height.checked_sub(self.top_inset)?;
        if self.width == 0 || h == 0 {
            return None;
        }
        Some((self.width, h))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

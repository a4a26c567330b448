use crate::foundation::core::{Point, Rect, Vec2};

/// Something that can report where it sits on screen.
///
/// Hosts implement this for their widgets; a fixed [`Rect`] works out of the box.
pub trait FocusTarget {
    /// Absolute screen bounds, or `None` when the target is not laid out.
    fn screen_bounds(&self) -> Option<Rect>;
}

impl FocusTarget for Rect {
    fn screen_bounds(&self) -> Option<Rect> {
        Some(*self)
    }
}

/// Cutout circle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FocusPoint {
    pub center: Point,
    pub radius: f64,
}

impl FocusPoint {
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    /// Shift the circle by `offset`.
    pub fn translate(self, offset: Vec2) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }

    /// Re-express a screen-space circle in the coordinate space of a mask that starts
    /// `top_inset` pixels below the top of the screen.
    pub fn to_mask_space(self, top_inset: u32) -> Self {
        self.translate(Vec2::new(0.0, -f64::from(top_inset)))
    }

    pub fn contains(self, p: Point) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// Compute the cutout for a target.
///
/// The base radius is half the diagonal of `target_bounds`, so every corner of the target lies on
/// or inside the circle; `radius_factor` scales it linearly. Negative or non-finite factors are
/// treated as zero. Bounds with a NaN or infinite coordinate yield no focus.
pub fn compute_focus(target_bounds: Option<Rect>, radius_factor: f64) -> Option<FocusPoint> {
    let bounds = target_bounds?.abs();
    if !bounds.is_finite() {
        return None;
    }
    let factor = if radius_factor.is_finite() {
        radius_factor.max(0.0)
    } else {
        0.0
    };

    let base = bounds.width().hypot(bounds.height()) / 2.0;
    Some(FocusPoint::new(bounds.center(), base * factor))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/focus.rs"]
mod tests;

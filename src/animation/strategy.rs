use crate::{
    animation::ease::Ease,
    foundation::core::Point,
    geometry::focus::FocusPoint,
};

/// Fixed duration of the fallback fade, in milliseconds.
pub const FADE_DURATION_MS: u64 = 400;

/// Caller-supplied animation, resolved and played by the host (e.g. an animation resource name).
///
/// The core never observes when it ends.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CustomAnimation(pub String);

impl CustomAnimation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Concrete animation request handed to the host window.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", content = "params", rename_all = "snake_case")]
pub enum Animation {
    Custom(CustomAnimation),
    /// Circular clip of the container centred at `center`.
    CircularReveal {
        center: Point,
        from_radius: f64,
        to_radius: f64,
        duration_ms: u64,
        ease: Ease,
    },
    /// Whole-container alpha animation.
    Fade {
        from_alpha: f64,
        to_alpha: f64,
        duration_ms: u64,
        /// Keep the final alpha once the animation ends.
        fill_after: bool,
    },
}

impl Animation {
    pub fn duration_ms(&self) -> Option<u64> {
        match self {
            Self::Custom(_) => None,
            Self::CircularReveal { duration_ms, .. } | Self::Fade { duration_ms, .. } => {
                Some(*duration_ms)
            }
        }
    }

    /// Animated value at progress `t` (clip radius or alpha); `None` for custom animations.
    pub fn sample(&self, t: f64) -> Option<f64> {
        match self {
            Self::Custom(_) => None,
            Self::CircularReveal {
                from_radius,
                to_radius,
                ease,
                ..
            } => Some(lerp(*from_radius, *to_radius, ease.apply(t))),
            Self::Fade {
                from_alpha,
                to_alpha,
                ..
            } => Some(lerp(*from_alpha, *to_alpha, t.clamp(0.0, 1.0))),
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Inputs of the circular reveal, captured at show/hide time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealParams {
    /// Reveal centre in container coordinates.
    pub center: Point,
    /// Radius the enter reveal starts from (half the target width, or 0).
    pub start_radius: f64,
    /// Radius that covers the whole container.
    pub cover_radius: f64,
    pub base_duration_ms: u64,
}

impl RevealParams {
    /// `focus` is in container coordinates; without focus the reveal is centred on the container.
    pub fn new(
        focus: Option<FocusPoint>,
        target_width: Option<f64>,
        container_size: (u32, u32),
        base_duration_ms: u64,
    ) -> Self {
        let (w, h) = (f64::from(container_size.0), f64::from(container_size.1));
        let center = focus.map_or(Point::new(w / 2.0, h / 2.0), |f| f.center);
        Self {
            center,
            start_radius: target_width
                .filter(|tw| tw.is_finite())
                .map_or(0.0, |tw| (tw / 2.0).max(0.0)),
            cover_radius: w.hypot(h),
            base_duration_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeParams {
    pub duration_ms: u64,
}

impl Default for FadeParams {
    fn default() -> Self {
        Self {
            duration_ms: FADE_DURATION_MS,
        }
    }
}

/// How the overlay enters or leaves the screen.
#[derive(Clone, Debug, PartialEq)]
pub enum AnimationStrategy {
    CallerSupplied(CustomAnimation),
    CircularReveal(RevealParams),
    Fade(FadeParams),
}

impl AnimationStrategy {
    /// Pick a strategy: caller override, then circular reveal when the host supports it, then fade.
    pub fn resolve(
        custom: Option<&CustomAnimation>,
        circular_supported: bool,
        reveal: impl FnOnce() -> RevealParams,
    ) -> Self {
        match custom {
            Some(c) => Self::CallerSupplied(c.clone()),
            None if circular_supported => Self::CircularReveal(reveal()),
            None => Self::Fade(FadeParams::default()),
        }
    }

    pub fn enter(&self) -> Animation {
        match self {
            Self::CallerSupplied(c) => Animation::Custom(c.clone()),
            Self::CircularReveal(p) => Animation::CircularReveal {
                center: p.center,
                from_radius: p.start_radius,
                to_radius: p.cover_radius,
                duration_ms: p.base_duration_ms.saturating_mul(2),
                ease: Ease::FastOutSlowIn,
            },
            Self::Fade(p) => Animation::Fade {
                from_alpha: 0.0,
                to_alpha: 1.0,
                duration_ms: p.duration_ms,
                fill_after: true,
            },
        }
    }

    pub fn exit(&self) -> Animation {
        match self {
            Self::CallerSupplied(c) => Animation::Custom(c.clone()),
            Self::CircularReveal(p) => Animation::CircularReveal {
                center: p.center,
                from_radius: p.cover_radius,
                to_radius: 0.0,
                duration_ms: p.base_duration_ms,
                ease: Ease::FastOutSlowIn,
            },
            Self::Fade(p) => Animation::Fade {
                from_alpha: 1.0,
                to_alpha: 0.0,
                duration_ms: p.duration_ms,
                fill_after: true,
            },
        }
    }

    /// Whether the exit animation's completion detaches the container.
    ///
    /// Caller-supplied exits return `false`: the container stays attached until the caller
    /// invokes `Showcase::remove_view`.
    pub fn detaches_on_exit(&self) -> bool {
        !matches!(self, Self::CallerSupplied(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/strategy.rs"]
mod tests;

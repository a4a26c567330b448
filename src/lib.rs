//! Spotlight renders a full-screen focus overlay: a dimmed mask with a circular cutout around one
//! on-screen element, an optional title or custom content view, and enter/exit animations.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`ShowcaseBuilder`] (or [`OverlaySpec`] JSON) -> immutable [`OverlayConfig`]
//! 2. **Focus**: target screen bounds -> [`FocusPoint`] via [`compute_focus`]
//! 3. **Composite**: background + cutout -> [`MaskBuffer`] via [`composite`]
//! 4. **Show / hide**: [`Showcase`] attaches a [`Container`] to a [`HostWindow`] and plays an
//!    [`Animation`] picked by [`AnimationStrategy`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded**: everything runs on the host's UI thread; completion is callback-driven.
//! - **One overlay per window**: the reserved [`CONTAINER_TAG`] is the mutual exclusion.
//! - **Silent decline**: lifecycle operations never fail, they log and do nothing.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod geometry;
mod host;
mod mask;
mod registry;
mod showcase;

pub use animation::completion::AnimationEnd;
pub use animation::ease::Ease;
pub use animation::strategy::{
    Animation, AnimationStrategy, CustomAnimation, FADE_DURATION_MS, FadeParams, RevealParams,
};
pub use foundation::core::{Point, Rect, Rgba8Premul, ScreenMetrics, Vec2};
pub use foundation::error::{SpotlightError, SpotlightResult};
pub use geometry::focus::{FocusPoint, FocusTarget, compute_focus};
pub use host::content::{
    ContentDescriptor, ContentInflater, ContentView, DEFAULT_TITLE_STYLE, Gravity, OnInflated,
    PlainInflater, TITLE_LAYOUT, TitleContent, inflate_content,
};
pub use host::window::{CONTAINER_TAG, Container, ContainerId, HostWindow, TapHandler};
pub use mask::color::{BackgroundColor, parse_hex};
pub use mask::compositor::{MaskBuffer, composite};
pub use registry::shown::{
    JsonFileRegistry, MemoryRegistry, REGISTRY_NAMESPACE, ShownRegistry, is_shown_before,
};
pub use showcase::config::{
    CustomContent, DEFAULT_ANIMATION_DURATION_MS, OverlayConfig, OverlaySpec, ShowcaseBuilder,
};
pub use showcase::lifecycle::{HostContext, Phase, Showcase};

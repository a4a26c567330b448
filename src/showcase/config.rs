use std::{fmt, rc::Rc};

use crate::{
    animation::strategy::CustomAnimation,
    foundation::core::Rect,
    foundation::error::{SpotlightError, SpotlightResult},
    geometry::focus::FocusTarget,
    host::content::{
        ContentDescriptor, DEFAULT_TITLE_STYLE, Gravity, OnInflated, TitleContent,
    },
    mask::color::BackgroundColor,
};

/// Base animation duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 400;

/// Custom content layout plus an optional decoration callback.
#[derive(Clone)]
pub struct CustomContent {
    pub layout: String,
    pub on_inflated: Option<OnInflated>,
}

impl fmt::Debug for CustomContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomContent")
            .field("layout", &self.layout)
            .field("on_inflated", &self.on_inflated.is_some())
            .finish()
    }
}

/// Everything a showcase needs, fixed at build time.
#[derive(Clone)]
pub struct OverlayConfig {
    pub id: Option<String>,
    pub title: Option<String>,
    pub target: Option<Rc<dyn FocusTarget>>,
    pub focus_radius_factor: f64,
    /// Always resolved; never the zero "unset" value.
    pub background: BackgroundColor,
    pub title_gravity: Gravity,
    pub title_style: String,
    pub custom_content: Option<CustomContent>,
    pub enter_animation: Option<CustomAnimation>,
    pub exit_animation: Option<CustomAnimation>,
    pub show_once: bool,
    pub close_on_touch: bool,
    pub animation_duration_ms: u64,
}

impl OverlayConfig {
    pub fn builder() -> ShowcaseBuilder {
        ShowcaseBuilder::new()
    }

    pub fn target_bounds(&self) -> Option<Rect> {
        self.target.as_ref().and_then(|t| t.screen_bounds())
    }

    pub fn content_descriptor(&self) -> ContentDescriptor {
        match &self.custom_content {
            Some(custom) => ContentDescriptor::Custom {
                layout: custom.layout.clone(),
            },
            None => ContentDescriptor::Title(TitleContent {
                text: self.title.clone(),
                style: self.title_style.clone(),
                gravity: self.title_gravity,
            }),
        }
    }
}

impl fmt::Debug for OverlayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayConfig")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("target", &self.target_bounds())
            .field("focus_radius_factor", &self.focus_radius_factor)
            .field("background", &self.background)
            .field("title_gravity", &self.title_gravity)
            .field("title_style", &self.title_style)
            .field("custom_content", &self.custom_content)
            .field("enter_animation", &self.enter_animation)
            .field("exit_animation", &self.exit_animation)
            .field("show_once", &self.show_once)
            .field("close_on_touch", &self.close_on_touch)
            .field("animation_duration_ms", &self.animation_duration_ms)
            .finish()
    }
}

/// Fluent builder for [`OverlayConfig`].
#[derive(Clone)]
pub struct ShowcaseBuilder {
    id: Option<String>,
    title: Option<String>,
    target: Option<Rc<dyn FocusTarget>>,
    focus_radius_factor: f64,
    background: BackgroundColor,
    title_gravity: Option<Gravity>,
    title_style: Option<String>,
    custom_content: Option<CustomContent>,
    enter_animation: Option<CustomAnimation>,
    exit_animation: Option<CustomAnimation>,
    show_once: bool,
    close_on_touch: bool,
    animation_duration_ms: u64,
}

impl Default for ShowcaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowcaseBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            target: None,
            focus_radius_factor: 1.0,
            background: BackgroundColor(0),
            title_gravity: None,
            title_style: None,
            custom_content: None,
            enter_animation: None,
            exit_animation: None,
            show_once: false,
            close_on_touch: true,
            animation_duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }

    /// Unique identifier; required for show-once.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_style(mut self, style: impl Into<String>, gravity: Gravity) -> Self {
        self.title_style = Some(style.into());
        self.title_gravity = Some(gravity);
        self
    }

    pub fn title_gravity(mut self, gravity: Gravity) -> Self {
        self.title_gravity = Some(gravity);
        self
    }

    pub fn focus_on(mut self, target: Rc<dyn FocusTarget>) -> Self {
        self.target = Some(target);
        self
    }

    /// Focus a fixed screen rectangle.
    pub fn focus_on_rect(self, bounds: Rect) -> Self {
        self.focus_on(Rc::new(bounds))
    }

    pub fn focus_radius_factor(mut self, factor: f64) -> Self {
        self.focus_radius_factor = factor;
        self
    }

    pub fn background_color(mut self, color: BackgroundColor) -> Self {
        self.background = color;
        self
    }

    pub fn custom_view(mut self, layout: impl Into<String>, on_inflated: Option<OnInflated>) -> Self {
        self.custom_content = Some(CustomContent {
            layout: layout.into(),
            on_inflated,
        });
        self
    }

    pub fn enter_animation(mut self, animation: CustomAnimation) -> Self {
        self.enter_animation = Some(animation);
        self
    }

    pub fn exit_animation(mut self, animation: CustomAnimation) -> Self {
        self.exit_animation = Some(animation);
        self
    }

    pub fn show_once(mut self, show_once: bool) -> Self {
        self.show_once = show_once;
        self
    }

    pub fn close_on_touch(mut self, close_on_touch: bool) -> Self {
        self.close_on_touch = close_on_touch;
        self
    }

    pub fn animation_duration_ms(mut self, ms: u64) -> Self {
        self.animation_duration_ms = ms;
        self
    }

    /// Validate and freeze the configuration.
    pub fn build(self) -> SpotlightResult<OverlayConfig> {
        let id = self.id.filter(|s| !s.trim().is_empty());
        if self.show_once && id.is_none() {
            return Err(SpotlightError::validation(
                "show_once requires a non-empty id",
            ));
        }
        if !self.focus_radius_factor.is_finite() || self.focus_radius_factor < 0.0 {
            return Err(SpotlightError::validation(format!(
                "focus_radius_factor must be finite and >= 0, got {}",
                self.focus_radius_factor
            )));
        }
        if self.animation_duration_ms == 0 {
            return Err(SpotlightError::validation(
                "animation_duration_ms must be > 0",
            ));
        }
        if let Some(custom) = &self.custom_content
            && custom.layout.trim().is_empty()
        {
            return Err(SpotlightError::validation(
                "custom view layout must be non-empty",
            ));
        }

        Ok(OverlayConfig {
            id,
            title: self.title,
            target: self.target,
            focus_radius_factor: self.focus_radius_factor,
            background: self.background.resolve(),
            title_gravity: self.title_gravity.unwrap_or_default(),
            title_style: self
                .title_style
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_TITLE_STYLE.to_owned()),
            custom_content: self.custom_content,
            enter_animation: self.enter_animation,
            exit_animation: self.exit_animation,
            show_once: self.show_once,
            close_on_touch: self.close_on_touch,
            animation_duration_ms: self.animation_duration_ms,
        })
    }
}

/// JSON form of the data-only part of a showcase configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OverlaySpec {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Target bounds as `[x0, y0, x1, y1]` in screen pixels.
    pub target: Option<[f64; 4]>,
    pub focus_radius_factor: Option<f64>,
    pub background: Option<BackgroundColor>,
    pub title_gravity: Option<Gravity>,
    pub title_style: Option<String>,
    pub custom_layout: Option<String>,
    pub enter_animation: Option<CustomAnimation>,
    pub exit_animation: Option<CustomAnimation>,
    pub show_once: Option<bool>,
    pub close_on_touch: Option<bool>,
    pub animation_duration_ms: Option<u64>,
}

impl OverlaySpec {
    pub fn from_json_str(s: &str) -> SpotlightResult<Self> {
        serde_json::from_str(s).map_err(|e| SpotlightError::serde(format!("overlay spec: {e}")))
    }

    pub fn target_rect(&self) -> Option<Rect> {
        self.target.map(|[x0, y0, x1, y1]| Rect::new(x0, y0, x1, y1))
    }

    /// Seed a builder with every field present in the spec.
    pub fn into_builder(self) -> ShowcaseBuilder {
        let mut b = ShowcaseBuilder::new();
        if let Some(rect) = self.target_rect() {
            b = b.focus_on_rect(rect);
        }
        if let Some(id) = self.id {
            b = b.id(id);
        }
        if let Some(title) = self.title {
            b = b.title(title);
        }
        if let Some(f) = self.focus_radius_factor {
            b = b.focus_radius_factor(f);
        }
        if let Some(c) = self.background {
            b = b.background_color(c);
        }
        if let Some(g) = self.title_gravity {
            b = b.title_gravity(g);
        }
        if let Some(style) = self.title_style {
            b.title_style = Some(style);
        }
        if let Some(layout) = self.custom_layout {
            b = b.custom_view(layout, None);
        }
        if let Some(a) = self.enter_animation {
            b = b.enter_animation(a);
        }
        if let Some(a) = self.exit_animation {
            b = b.exit_animation(a);
        }
        if let Some(v) = self.show_once {
            b = b.show_once(v);
        }
        if let Some(v) = self.close_on_touch {
            b = b.close_on_touch(v);
        }
        if let Some(ms) = self.animation_duration_ms {
            b = b.animation_duration_ms(ms);
        }
        b
    }
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/config.rs"]
mod tests;

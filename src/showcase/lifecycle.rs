use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use crate::{
    animation::{
        completion::AnimationEnd,
        strategy::{AnimationStrategy, RevealParams},
    },
    geometry::focus::{FocusPoint, compute_focus},
    host::{
        content::{ContentInflater, inflate_content},
        window::{CONTAINER_TAG, Container, ContainerId, HostWindow, TapHandler},
    },
    mask::compositor::composite,
    registry::shown::ShownRegistry,
    showcase::config::OverlayConfig,
};

/// Where a showcase instance is in its show/hide cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Showing,
    Visible,
    Hiding,
    /// Terminal for the instance; a later `show()` starts a fresh one.
    Removed,
}

/// The collaborators a showcase runs against.
///
/// The window is held weakly: once the host drops it, every operation silently declines.
#[derive(Clone)]
pub struct HostContext {
    pub window: Weak<dyn HostWindow>,
    pub registry: Rc<dyn ShownRegistry>,
    pub inflater: Rc<dyn ContentInflater>,
}

impl HostContext {
    pub fn new(
        window: &Rc<dyn HostWindow>,
        registry: Rc<dyn ShownRegistry>,
        inflater: Rc<dyn ContentInflater>,
    ) -> Self {
        Self {
            window: Rc::downgrade(window),
            registry,
            inflater,
        }
    }
}

#[derive(Debug)]
struct Instance {
    phase: Phase,
    container: Option<ContainerId>,
    /// Focus in container coordinates.
    focus: Option<FocusPoint>,
    strategy: Option<AnimationStrategy>,
}

impl Instance {
    fn idle() -> Self {
        Self {
            phase: Phase::Idle,
            container: None,
            focus: None,
            strategy: None,
        }
    }
}

struct Inner {
    config: OverlayConfig,
    ctx: HostContext,
    state: RefCell<Instance>,
}

/// A focus overlay bound to one host window.
///
/// Cloning is cheap and clones share the same instance state. Everything runs on the host's UI
/// thread; `show`, `hide` and `remove_view` return as soon as work is dispatched and never fail:
/// unmet preconditions are logged and ignored.
#[derive(Clone)]
pub struct Showcase {
    inner: Rc<Inner>,
}

impl Showcase {
    pub fn new(config: OverlayConfig, ctx: HostContext) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                ctx,
                state: RefCell::new(Instance::idle()),
            }),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.inner.config
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    /// Strategy behind the most recently dispatched enter or exit animation.
    pub fn animation_strategy(&self) -> Option<AnimationStrategy> {
        self.inner.state.borrow().strategy.clone()
    }

    /// Resolved cutout of the current instance, in container coordinates.
    pub fn focus(&self) -> Option<FocusPoint> {
        self.inner.state.borrow().focus
    }

    /// Attach the overlay and start its enter animation.
    ///
    /// Declines when the window is gone, when show-once suppresses the id, or when any overlay
    /// container is already attached to the window. The shown flag is written as soon as the
    /// container is attached, before the enter animation has run.
    #[tracing::instrument(skip(self), fields(id = ?self.inner.config.id))]
    pub fn show(&self) {
        let Some(window) = self.inner.ctx.window.upgrade() else {
            tracing::debug!("host window is gone, not showing");
            return;
        };
        let config = &self.inner.config;

        if config.show_once && self.is_shown_before() {
            tracing::debug!("already shown once");
            return;
        }
        if window.find_container(CONTAINER_TAG).is_some() {
            tracing::debug!("an overlay is already attached");
            return;
        }

        let metrics = window.metrics();
        let Some((mask_w, mask_h)) = metrics.mask_size() else {
            tracing::warn!(?metrics, "no room for a mask below the top inset");
            return;
        };

        let screen_focus = compute_focus(config.target_bounds(), config.focus_radius_factor);
        let mask_focus = screen_focus.map(|f| f.to_mask_space(metrics.top_inset));
        let mask = match composite(mask_w, mask_h, config.background, mask_focus) {
            Ok(mask) => mask,
            Err(err) => {
                tracing::warn!(%err, "mask compositing failed");
                return;
            }
        };

        let descriptor = config.content_descriptor();
        let on_inflated = config
            .custom_content
            .as_ref()
            .and_then(|c| c.on_inflated.as_ref());
        let content = inflate_content(self.inner.ctx.inflater.as_ref(), &descriptor, on_inflated);

        let on_tap = config.close_on_touch.then(|| self.tap_handler());
        let id = window.attach_container(Container {
            tag: CONTAINER_TAG.to_owned(),
            mask,
            mask_origin_y: metrics.top_inset,
            content,
            on_tap,
        });
        *self.inner.state.borrow_mut() = Instance {
            phase: Phase::Showing,
            container: Some(id),
            focus: screen_focus,
            strategy: None,
        };

        if let Some(key) = &config.id
            && let Err(err) = self.inner.ctx.registry.mark_shown(key)
        {
            tracing::warn!(%err, "failed to record overlay as shown");
        }

        let container_size = window
            .container_size(id)
            .unwrap_or((metrics.width, metrics.height));
        let target_width = config.target_bounds().map(|r| r.abs().width());
        let strategy = AnimationStrategy::resolve(
            config.enter_animation.as_ref(),
            window.supports_circular_reveal(),
            || {
                RevealParams::new(
                    screen_focus,
                    target_width,
                    container_size,
                    config.animation_duration_ms,
                )
            },
        );
        let enter = strategy.enter();
        {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Visible;
            state.strategy = Some(strategy);
        }
        tracing::debug!(container = ?id, ?enter, "overlay attached");
        window.start_animation(id, enter, None);
    }

    /// Start the exit animation.
    ///
    /// Fade and circular exits detach the container when their animation completes. A
    /// caller-supplied exit animation gives no completion signal, so the container stays
    /// attached until [`Showcase::remove_view`] is called.
    #[tracing::instrument(skip(self), fields(id = ?self.inner.config.id))]
    pub fn hide(&self) {
        let Some(container) = ({
            let state = self.inner.state.borrow();
            match state.phase {
                Phase::Showing | Phase::Visible => state.container,
                _ => None,
            }
        }) else {
            tracing::debug!(phase = ?self.phase(), "nothing to hide");
            return;
        };
        let Some(window) = self.inner.ctx.window.upgrade() else {
            tracing::debug!("host window is gone, not hiding");
            return;
        };
        let config = &self.inner.config;

        let metrics = window.metrics();
        let container_size = window
            .container_size(container)
            .unwrap_or((metrics.width, metrics.height));
        let focus = self.focus();
        let target_width = config.target_bounds().map(|r| r.abs().width());
        let strategy = AnimationStrategy::resolve(
            config.exit_animation.as_ref(),
            window.supports_circular_reveal(),
            || {
                RevealParams::new(
                    focus,
                    target_width,
                    container_size,
                    config.animation_duration_ms,
                )
            },
        );

        let on_end = strategy
            .detaches_on_exit()
            .then(|| self.detach_on_end(container));
        let exit = strategy.exit();
        {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Hiding;
            state.strategy = Some(strategy);
        }
        tracing::debug!(?container, ?exit, "exit dispatched");
        window.start_animation(container, exit, on_end);
    }

    /// Detach the container right away. Safe to call in any phase and more than once.
    #[tracing::instrument(skip(self), fields(id = ?self.inner.config.id))]
    pub fn remove_view(&self) {
        let container = {
            let mut state = self.inner.state.borrow_mut();
            state.phase = Phase::Removed;
            state.strategy = None;
            state.container.take()
        };
        let Some(container) = container else {
            return;
        };
        match self.inner.ctx.window.upgrade() {
            Some(window) => {
                if !window.detach_container(container) {
                    tracing::debug!(?container, "container was already detached");
                }
            }
            None => tracing::debug!("host window is gone, nothing to detach"),
        }
    }

    /// Whether the configured id has been recorded as shown.
    pub fn is_shown_before(&self) -> bool {
        self.inner
            .config
            .id
            .as_deref()
            .is_some_and(|id| self.inner.ctx.registry.is_shown(id))
    }

    /// Whether this instance's container is attached and visible.
    pub fn is_showing(&self) -> bool {
        let Some(container) = self.inner.state.borrow().container else {
            return false;
        };
        self.inner
            .ctx
            .window
            .upgrade()
            .is_some_and(|w| w.is_container_shown(container))
    }

    /// What a tap on the container does when close-on-touch is enabled.
    pub fn handle_tap(&self) {
        self.hide();
    }

    fn tap_handler(&self) -> TapHandler {
        let weak = Rc::downgrade(&self.inner);
        Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Showcase { inner }.handle_tap();
            }
        })
    }

    /// Completion that detaches `container`, unless it was already removed or replaced.
    fn detach_on_end(&self, container: ContainerId) -> AnimationEnd {
        let weak = Rc::downgrade(&self.inner);
        AnimationEnd::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let owns = inner.state.borrow().container == Some(container);
            if owns {
                Showcase { inner }.remove_view();
            } else {
                tracing::debug!(?container, "exit finished after the container was removed");
            }
        })
    }
}

impl std::fmt::Debug for Showcase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Showcase")
            .field("config", &self.inner.config)
            .field("state", &self.inner.state.borrow())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/showcase/lifecycle.rs"]
mod tests;

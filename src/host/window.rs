use std::{fmt, rc::Rc};

use crate::{
    animation::{completion::AnimationEnd, strategy::Animation},
    foundation::core::ScreenMetrics,
    host::content::ContentView,
    mask::compositor::MaskBuffer,
};

/// Reserved tag of the overlay container; at most one container with it may be attached.
pub const CONTAINER_TAG: &str = "spotlight.container";

/// Host-assigned handle of an attached container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContainerId(pub u64);

/// Handler the host calls when the container is tapped.
pub type TapHandler = Rc<dyn Fn()>;

/// Full-screen view holding the mask image and the content view.
pub struct Container {
    pub tag: String,
    pub mask: MaskBuffer,
    /// Vertical offset of the mask from the top of the container (the host's top inset).
    pub mask_origin_y: u32,
    pub content: ContentView,
    /// Present when the container is clickable.
    pub on_tap: Option<TapHandler>,
}

impl Container {
    pub fn is_clickable(&self) -> bool {
        self.on_tap.is_some()
    }

    /// Dispatch a tap; returns whether anything handled it.
    pub fn tap(&self) -> bool {
        match &self.on_tap {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("tag", &self.tag)
            .field("mask", &format!("{}x{}", self.mask.width, self.mask.height))
            .field("mask_origin_y", &self.mask_origin_y)
            .field("content", &self.content)
            .field("clickable", &self.is_clickable())
            .finish()
    }
}

/// Root of the host window the overlay attaches to.
///
/// All methods take `&self`: hosts are driven from a single UI thread and keep their mutable
/// state behind interior mutability. Implementations must release internal borrows before
/// invoking a [`TapHandler`] or completing an [`AnimationEnd`], since both re-enter the overlay.
pub trait HostWindow {
    fn metrics(&self) -> ScreenMetrics;

    fn find_container(&self, tag: &str) -> Option<ContainerId>;

    fn attach_container(&self, container: Container) -> ContainerId;

    /// Detach a container; returns `false` when it was not attached.
    fn detach_container(&self, id: ContainerId) -> bool;

    /// Attached and visible.
    fn is_container_shown(&self, id: ContainerId) -> bool;

    /// Laid-out size of an attached container.
    fn container_size(&self, id: ContainerId) -> Option<(u32, u32)>;

    /// Whether the host can play [`Animation::CircularReveal`].
    fn supports_circular_reveal(&self) -> bool;

    /// Start playing `animation` on a container. `on_end`, when given, must be completed once
    /// the animation finishes, asynchronously from the caller's point of view.
    fn start_animation(&self, id: ContainerId, animation: Animation, on_end: Option<AnimationEnd>);
}

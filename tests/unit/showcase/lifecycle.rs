use super::*;
use crate::{
    animation::strategy::Animation,
    foundation::core::{Rect, ScreenMetrics},
    host::content::PlainInflater,
    registry::shown::MemoryRegistry,
    showcase::config::ShowcaseBuilder,
};
use std::cell::{Cell, RefCell};

#[derive(Default)]
struct StubWindow {
    attached: RefCell<Vec<ContainerId>>,
    next: Cell<u64>,
    animations: RefCell<Vec<(Animation, Option<AnimationEnd>)>>,
}

impl HostWindow for StubWindow {
    fn metrics(&self) -> ScreenMetrics {
        ScreenMetrics {
            width: 64,
            height: 96,
            top_inset: 0,
        }
    }

    fn find_container(&self, _tag: &str) -> Option<ContainerId> {
        self.attached.borrow().first().copied()
    }

    fn attach_container(&self, _container: Container) -> ContainerId {
        self.next.set(self.next.get() + 1);
        let id = ContainerId(self.next.get());
        self.attached.borrow_mut().push(id);
        id
    }

    fn detach_container(&self, id: ContainerId) -> bool {
        let mut attached = self.attached.borrow_mut();
        let before = attached.len();
        attached.retain(|c| *c != id);
        before != attached.len()
    }

    fn is_container_shown(&self, id: ContainerId) -> bool {
        self.attached.borrow().contains(&id)
    }

    fn container_size(&self, _id: ContainerId) -> Option<(u32, u32)> {
        None
    }

    fn supports_circular_reveal(&self) -> bool {
        true
    }

    fn start_animation(&self, _id: ContainerId, animation: Animation, on_end: Option<AnimationEnd>) {
        self.animations.borrow_mut().push((animation, on_end));
    }
}

fn setup() -> (Rc<StubWindow>, Showcase) {
    let window = Rc::new(StubWindow::default());
    let dyn_window: Rc<dyn HostWindow> = window.clone();
    let ctx = HostContext::new(
        &dyn_window,
        Rc::new(MemoryRegistry::new()),
        Rc::new(PlainInflater),
    );
    let config = ShowcaseBuilder::new()
        .id("unit")
        .focus_on_rect(Rect::new(8.0, 8.0, 24.0, 20.0))
        .build()
        .unwrap();
    (window, Showcase::new(config, ctx))
}

#[test]
fn starts_idle_without_focus() {
    let (_window, sc) = setup();
    assert_eq!(sc.phase(), Phase::Idle);
    assert_eq!(sc.focus(), None);
    assert!(sc.animation_strategy().is_none());
    assert!(format!("{sc:?}").contains("Idle"));
}

#[test]
fn enter_falls_back_to_metrics_when_container_size_unknown() {
    let (window, sc) = setup();
    sc.show();

    let animations = window.animations.borrow();
    let (Animation::CircularReveal { to_radius, from_radius, .. }, None) = &animations[0] else {
        panic!("expected a circular enter without completion");
    };
    assert!((*to_radius - 64f64.hypot(96.0)).abs() < 1e-9);
    assert_eq!(*from_radius, 8.0);
}

#[test]
fn exit_completion_detaches_only_once() {
    let (window, sc) = setup();
    sc.show();
    sc.hide();

    let end = window.animations.borrow_mut()[1].1.take().unwrap();
    end.complete();

    assert_eq!(sc.phase(), Phase::Removed);
    assert!(window.attached.borrow().is_empty());
    assert!(!sc.is_showing());
}

#[test]
fn completion_after_showcase_dropped_is_ignored() {
    let (window, sc) = setup();
    sc.show();
    sc.hide();
    drop(sc);

    let end = window.animations.borrow_mut()[1].1.take().unwrap();
    end.complete();
    assert_eq!(window.attached.borrow().len(), 1);
}

use std::fmt;

/// Single-shot completion delivered by the host when an animation finishes.
///
/// Consuming [`AnimationEnd::complete`] guarantees the callback runs at most once. Dropping the
/// handle without completing it is allowed and simply means nobody is notified.
pub struct AnimationEnd {
    callback: Box<dyn FnOnce()>,
}

impl AnimationEnd {
    pub fn new(callback: impl FnOnce() + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Signal completion.
    pub fn complete(self) {
        (self.callback)();
    }
}

impl fmt::Debug for AnimationEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationEnd").finish_non_exhaustive()
    }
}

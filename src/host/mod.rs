//! Collaborators the overlay core talks to.
//!
//! The core never touches a real widget toolkit; hosts implement these traits on top of theirs.

/// Content inflation (title or custom layouts).
pub mod content;
/// Host window root: containers, metrics and animation playback.
pub mod window;

/// Background colour model and parsing.
pub mod color;
/// Full-screen mask compositing.
pub mod compositor;

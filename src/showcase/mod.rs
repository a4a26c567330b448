/// Immutable overlay configuration and its builders.
pub mod config;
/// Show/hide state machine.
pub mod lifecycle;

/// Single-shot animation completion handles.
pub mod completion;
/// Easing curves.
pub mod ease;
/// Enter/exit animation selection.
pub mod strategy;

/// Focus circle computation from a target's screen bounds.
pub mod focus;

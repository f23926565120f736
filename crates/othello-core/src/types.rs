//! Common type aliases used throughout the engine.

/// Search depth (plies from the root).
pub type Depth = u32;

/// Static or searched score, always from the side to move's perspective.
pub type Score = i32;

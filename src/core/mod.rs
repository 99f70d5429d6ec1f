//! Core game types and logic (geometry, entities, rooms, session).
//!
//! Re-exports:
//! - `geometry`: Rectangles, overlap test, per-axis collision correction
//! - `wall`: Static and oscillating walls
//! - `token`: Collectibles
//! - `player`: Player movement and skin
//! - `room`: Room layouts and token placement
//! - `input`: Window-independent key events
//! - `session`: Per-frame rules, score and room transitions

pub mod geometry;
pub mod wall;
pub mod token;
pub mod player;
pub mod room;
pub mod input;
pub mod session;

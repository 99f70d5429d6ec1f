//! Rendering utilities.
//!
//! Re-exports:
//! - `framebuffer`: CPU framebuffer with rect fill, pixmap blit and texture upload
//! - `skins`: Named player skins with a procedural fallback
//! - `scene`: Draws the current room, its tokens and the player

pub mod framebuffer;
pub mod skins;
pub mod scene;

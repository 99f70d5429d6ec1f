//! Draws the active room into the framebuffer.
//!
//! Read-only over game state: walls, tokens and the player go in, pixels come out.
use raylib::prelude::Color;

use crate::core::player::Player;
use crate::core::room::Room;
use crate::core::token::TOKEN_COLOR;
use crate::render::framebuffer::Framebuffer;
use crate::render::skins::SkinManager;

/// Drawn instead of the player's skin if the skin has no pixels.
const MISSING_SKIN: Color = Color { r: 255, g: 0, b: 255, a: 255 };

pub fn render_room(framebuffer: &mut Framebuffer, room: &Room, player: &Player, skins: &SkinManager) {
    framebuffer.clear();

    // Player goes first; walls and tokens paint over it.
    match skins.get(player.skin()) {
        Some(pm) => framebuffer.blit_pixmap(pm, &player.rect),
        None => {
            framebuffer.set_current_color(MISSING_SKIN);
            framebuffer.fill_rect(&player.rect);
        }
    }

    for wall in &room.walls {
        framebuffer.set_current_color(wall.color);
        framebuffer.fill_rect(&wall.rect);
    }

    framebuffer.set_current_color(TOKEN_COLOR);
    for token in &room.tokens {
        framebuffer.fill_rect(&token.rect);
    }
}

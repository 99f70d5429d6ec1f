//! Static and oscillating walls.
use raylib::prelude::Color;
use tracing::debug;

use crate::core::geometry::{overlaps, Rect};
use crate::core::player::Player;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WallMotion {
    Static,
    /// Bounces vertically between `top` and `bottom` (screen y of the wall's top and
    /// bottom edges at the turning points).
    Oscillating { dy: i32, top: i32, bottom: i32 },
}

#[derive(Debug, Clone)]
pub struct Wall {
    pub rect: Rect,
    pub color: Color,
    pub motion: WallMotion,
}

impl Wall {
    pub fn new(x: i32, y: i32, w: i32, h: i32, color: Color) -> Self {
        Self { rect: Rect::new(x, y, w, h), color, motion: WallMotion::Static }
    }

    pub fn moving(x: i32, y: i32, w: i32, h: i32, color: Color, dy: i32, top: i32, bottom: i32) -> Self {
        debug_assert!(bottom - top >= h, "band [{top}, {bottom}] too small for a {h}px wall");
        Self {
            rect: Rect::new(x, y, w, h),
            color,
            motion: WallMotion::Oscillating { dy, top, bottom },
        }
    }

    pub fn is_moving(&self) -> bool {
        matches!(self.motion, WallMotion::Oscillating { .. })
    }

    /// Advances an oscillating wall one tick and punishes a player it lands on.
    ///
    /// Returns `true` when the player was sent back to `respawn`. Static walls do nothing.
    pub fn update(&mut self, player: &mut Player, respawn: (i32, i32)) -> bool {
        let WallMotion::Oscillating { dy, top, bottom } = &mut self.motion else {
            return false;
        };

        self.rect.y += *dy;
        if self.rect.top() <= *top {
            self.rect.y = *top;
            *dy = dy.abs();
        } else if self.rect.bottom() >= *bottom {
            self.rect.y = *bottom - self.rect.h;
            *dy = -dy.abs();
        }

        if overlaps(&self.rect, &player.rect) {
            debug!(wall_x = self.rect.x, wall_y = self.rect.y, "moving wall hit player");
            player.teleport(respawn.0, respawn.1);
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_three_wall() -> Wall {
        Wall::moving(150, 200, 20, 200, Color::WHITE, 2, 50, 500)
    }

    fn far_player() -> Player {
        Player::new(600, 30, 30, "default")
    }

    #[test]
    fn static_wall_never_moves() {
        let mut wall = Wall::new(0, 0, 20, 250, Color::WHITE);
        let mut player = far_player();
        assert!(!wall.update(&mut player, (30, 30)));
        assert_eq!(wall.rect, Rect::new(0, 0, 20, 250));
        assert!(!wall.is_moving());
    }

    #[test]
    fn moves_by_dy_each_tick() {
        let mut wall = room_three_wall();
        let mut player = far_player();
        wall.update(&mut player, (30, 30));
        assert_eq!(wall.rect.y, 202);
        wall.update(&mut player, (30, 30));
        assert_eq!(wall.rect.y, 204);
    }

    #[test]
    fn reverses_at_bottom_bound() {
        let mut wall = room_three_wall();
        let mut player = far_player();
        // bottom goes 400 -> 500 in 50 ticks
        for _ in 0..50 {
            wall.update(&mut player, (30, 30));
        }
        assert_eq!(wall.rect.bottom(), 500);
        assert!(matches!(wall.motion, WallMotion::Oscillating { dy: -2, .. }));
        wall.update(&mut player, (30, 30));
        assert_eq!(wall.rect.y, 298);
    }

    #[test]
    fn reverses_at_top_bound() {
        let mut wall = Wall::moving(150, 60, 20, 200, Color::WHITE, -4, 50, 500);
        let mut player = far_player();
        wall.update(&mut player, (30, 30));
        assert_eq!(wall.rect.y, 56);
        wall.update(&mut player, (30, 30));
        // 52 is fine, 48 would overshoot and gets clamped
        wall.update(&mut player, (30, 30));
        assert_eq!(wall.rect.y, 50);
        assert!(matches!(wall.motion, WallMotion::Oscillating { dy: 4, .. }));
    }

    #[test]
    fn overlapping_player_is_sent_to_respawn() {
        let mut wall = room_three_wall();
        let mut player = Player::new(145, 250, 30, "default");
        player.change_speed(5, 0);
        assert!(wall.update(&mut player, (30, 30)));
        assert_eq!((player.rect.x, player.rect.y), (30, 30));
        // Velocity survives the teleport.
        assert_eq!(player.velocity(), (5, 0));
    }

    #[test]
    fn touching_player_is_left_alone() {
        let mut wall = room_three_wall();
        let mut player = Player::new(170, 250, 30, "default");
        assert!(!wall.update(&mut player, (30, 30)));
        assert_eq!(player.rect.x, 170);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stays_inside_band(
                start in 50i32..=300,
                dy in prop_oneof![-15i32..=-1, 1i32..=15],
                ticks in 1usize..600,
            ) {
                let mut wall = Wall::moving(150, start, 20, 200, Color::WHITE, dy, 50, 500);
                let mut player = far_player();
                for _ in 0..ticks {
                    wall.update(&mut player, (30, 30));
                    prop_assert!(wall.rect.top() >= 50, "top {} above band", wall.rect.top());
                    prop_assert!(wall.rect.bottom() <= 500, "bottom {} below band", wall.rect.bottom());
                }
            }
        }
    }
}

//! The player sprite: position, velocity and skin.
use crate::core::geometry::{resolve_axis_collision, Axis, Rect};
use crate::core::wall::Wall;

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    change_x: i32,
    change_y: i32,
    skin: String,
}

impl Player {
    pub fn new(x: i32, y: i32, size: i32, skin: &str) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            change_x: 0,
            change_y: 0,
            skin: skin.to_string(),
        }
    }

    /// Adds to the current velocity. Key presses add, key releases add the negation.
    pub fn change_speed(&mut self, dx: i32, dy: i32) {
        self.change_x += dx;
        self.change_y += dy;
    }

    pub fn velocity(&self) -> (i32, i32) {
        (self.change_x, self.change_y)
    }

    /// Moves one frame's worth, resolving X then Y against `walls`.
    pub fn move_and_collide(&mut self, walls: &[Wall]) {
        self.rect.translate(Axis::X, self.change_x);
        resolve_axis_collision(&mut self.rect, self.change_x, Axis::X, walls.iter().map(|w| &w.rect));

        self.rect.translate(Axis::Y, self.change_y);
        resolve_axis_collision(&mut self.rect, self.change_y, Axis::Y, walls.iter().map(|w| &w.rect));
    }

    pub fn teleport(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    pub fn skin(&self) -> &str {
        &self.skin
    }

    /// Swaps appearance only; position and velocity are untouched.
    pub fn set_skin(&mut self, name: &str) {
        self.skin.clear();
        self.skin.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::prelude::Color;

    #[test]
    fn starts_at_rest() {
        let p = Player::new(50, 50, 30, "default");
        assert_eq!(p.velocity(), (0, 0));
        assert_eq!(p.rect, Rect::new(50, 50, 30, 30));
    }

    #[test]
    fn velocities_are_per_instance() {
        let mut a = Player::new(0, 0, 30, "default");
        let b = Player::new(0, 0, 30, "default");
        a.change_speed(5, -5);
        assert_eq!(a.velocity(), (5, -5));
        assert_eq!(b.velocity(), (0, 0));
    }

    #[test]
    fn press_and_release_cancel() {
        let mut p = Player::new(0, 0, 30, "default");
        p.change_speed(-5, 0);
        p.change_speed(5, 0);
        assert_eq!(p.velocity(), (0, 0));
        p.change_speed(-5, 0);
        p.change_speed(5, 0);
        p.change_speed(5, 0);
        p.change_speed(-5, 0);
        assert_eq!(p.velocity(), (0, 0));
    }

    #[test]
    fn free_movement_applies_velocity() {
        let mut p = Player::new(100, 100, 30, "default");
        p.change_speed(5, -5);
        p.move_and_collide(&[]);
        assert_eq!((p.rect.x, p.rect.y), (105, 95));
    }

    #[test]
    fn diagonal_into_wall_slides_along_it() {
        let walls = [Wall::new(390, 50, 20, 500, Color::BLUE)];
        let mut p = Player::new(358, 200, 30, "default");
        p.change_speed(5, 5);
        p.move_and_collide(&walls);
        // X is blocked at the wall, Y still advances.
        assert_eq!(p.rect.right(), 390);
        assert_eq!(p.rect.y, 205);
        assert_eq!(p.velocity(), (5, 5));
    }

    #[test]
    fn moving_up_into_ceiling_stops_at_bottom_edge() {
        let walls = [Wall::new(20, 0, 760, 20, Color::WHITE)];
        let mut p = Player::new(100, 22, 30, "default");
        p.change_speed(0, -5);
        p.move_and_collide(&walls);
        assert_eq!(p.rect.y, 20);
    }

    #[test]
    fn skin_change_keeps_state() {
        let mut p = Player::new(760, 560, 30, "default");
        p.change_speed(5, 0);
        p.set_skin("nixon");
        assert_eq!(p.skin(), "nixon");
        assert_eq!(p.velocity(), (5, 0));
        assert_eq!((p.rect.x, p.rect.y), (760, 560));
    }
}

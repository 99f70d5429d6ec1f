//! Window-independent input events.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Velocity change for pressing this key at `speed`.
    pub fn delta(self, speed: i32) -> (i32, i32) {
        match self {
            Direction::Left => (-speed, 0),
            Direction::Right => (speed, 0),
            Direction::Up => (0, -speed),
            Direction::Down => (0, speed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Direction),
    KeyUp(Direction),
    Quit,
}

impl InputEvent {
    /// Velocity change this event causes. Releases undo exactly what the press did.
    pub fn velocity_delta(self, speed: i32) -> (i32, i32) {
        match self {
            InputEvent::KeyDown(d) => d.delta(speed),
            InputEvent::KeyUp(d) => {
                let (dx, dy) = d.delta(speed);
                (-dx, -dy)
            }
            InputEvent::Quit => (0, 0),
        }
    }
}

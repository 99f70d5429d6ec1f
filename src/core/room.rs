//! The three hand-built rooms and their tokens.
use rand::Rng;
use raylib::prelude::Color;
use tracing::debug;

use crate::config::GameConfig;
use crate::core::geometry::{overlaps, Rect};
use crate::core::player::Player;
use crate::core::token::Token;
use crate::core::wall::Wall;
use crate::error::{GameError, GameResult};

pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
pub const BLUE: Color = Color { r: 0, g: 0, b: 255, a: 255 };
pub const GREEN: Color = Color { r: 0, g: 255, b: 0, a: 255 };
pub const RED: Color = Color { r: 255, g: 0, b: 0, a: 255 };
pub const PURPLE: Color = Color { r: 255, g: 0, b: 255, a: 255 };

pub const ROOM_COUNT: usize = 3;

type WallSpec = (i32, i32, i32, i32, Color);

/// Outer frame with a gap on both sides (y 250..350) to walk through.
const fn border(c: Color) -> [WallSpec; 6] {
    [
        (0, 0, 20, 250, c),
        (0, 350, 20, 250, c),
        (780, 0, 20, 250, c),
        (780, 350, 20, 250, c),
        (20, 0, 760, 20, c),
        (20, 580, 760, 20, c),
    ]
}

const ROOM_ONE_INNER: [WallSpec; 1] = [(390, 50, 20, 500, BLUE)];
const ROOM_TWO_INNER: [WallSpec; 2] = [(190, 50, 20, 500, GREEN), (590, 50, 20, 500, GREEN)];

fn build(specs: impl IntoIterator<Item = WallSpec>) -> Vec<Wall> {
    specs.into_iter().map(|(x, y, w, h, c)| Wall::new(x, y, w, h, c)).collect()
}

#[derive(Debug, Clone)]
pub struct Room {
    pub index: usize,
    pub walls: Vec<Wall>,
    pub tokens: Vec<Token>,
}

impl Room {
    pub fn new(index: usize, walls: Vec<Wall>) -> Self {
        Self { index, walls, tokens: Vec::new() }
    }

    pub fn room_one() -> Self {
        Self::new(0, build(border(WHITE).into_iter().chain(ROOM_ONE_INNER)))
    }

    pub fn room_two() -> Self {
        Self::new(1, build(border(RED).into_iter().chain(ROOM_TWO_INNER)))
    }

    /// Pillar grid plus a row of walls sliding up and down between them.
    pub fn room_three() -> Self {
        let mut walls = build(border(PURPLE));
        for x in (100..800).step_by(100) {
            for y in [50, 350] {
                walls.push(Wall::new(x, y, 20, 200, RED));
            }
        }
        for x in (150..700).step_by(100) {
            walls.push(Wall::moving(x, 200, 20, 200, WHITE, 2, 50, 500));
        }
        Self::new(2, walls)
    }

    /// All rooms in play order, each stocked with a fresh set of tokens.
    ///
    /// A room that cannot fit its tokens keeps whatever was placed; the failures are
    /// returned next to the rooms so the caller can report them.
    pub fn create_all<R: Rng>(config: &GameConfig, rng: &mut R) -> (Vec<Room>, Vec<GameError>) {
        let mut rooms = vec![Self::room_one(), Self::room_two(), Self::room_three()];
        let errors = rooms
            .iter_mut()
            .filter_map(|room| room.generate_tokens(config.tokens_per_room, config, rng).err())
            .collect();
        (rooms, errors)
    }

    /// Replaces the room's tokens with `count` new ones at random spots clear of walls.
    ///
    /// Each token gets `config.max_token_attempts` tries. When a token runs out of
    /// tries the ones already placed are kept and an error is returned.
    pub fn generate_tokens<R: Rng>(&mut self, count: usize, config: &GameConfig, rng: &mut R) -> GameResult<()> {
        self.tokens.clear();
        let (x_min, x_max) = config.token_x_range;
        let (y_min, y_max) = config.token_y_range;

        for _ in 0..count {
            let mut placed = None;
            for _ in 0..config.max_token_attempts {
                let candidate = Token::new(rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max), config.token_size);
                if !self.hits_wall(&candidate.rect) {
                    placed = Some(candidate);
                    break;
                }
            }
            match placed {
                Some(token) => self.tokens.push(token),
                None => {
                    return Err(GameError::TokenPlacement {
                        room: self.index,
                        placed: self.tokens.len(),
                        requested: count,
                        attempts: config.max_token_attempts,
                    });
                }
            }
        }
        debug!(room = self.index, tokens = self.tokens.len(), "tokens placed");
        Ok(())
    }

    pub fn hits_wall(&self, rect: &Rect) -> bool {
        self.walls.iter().any(|w| overlaps(&w.rect, rect))
    }

    /// Ticks every moving wall. Returns how many of them hit the player.
    pub fn update_moving_walls(&mut self, player: &mut Player, respawn: (i32, i32)) -> usize {
        self.walls
            .iter_mut()
            .filter(|w| w.is_moving())
            .map(|w| w.update(player, respawn))
            .filter(|&hit| hit)
            .count()
    }

    /// Removes every token under `rect` and returns how many went.
    pub fn collect_tokens(&mut self, rect: &Rect) -> usize {
        let before = self.tokens.len();
        self.tokens.retain(|t| !overlaps(&t.rect, rect));
        before - self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn layouts_match_the_floor_plans() {
        assert_eq!(Room::room_one().walls.len(), 7);
        assert_eq!(Room::room_two().walls.len(), 8);
        let three = Room::room_three();
        // border + 7x2 pillars + 6 movers
        assert_eq!(three.walls.len(), 6 + 14 + 6);
        assert_eq!(three.walls.iter().filter(|w| w.is_moving()).count(), 6);
        assert!(Room::room_one().walls.iter().all(|w| !w.is_moving()));
    }

    #[test]
    fn side_doors_are_open() {
        let door = Rect::new(0, 260, 20, 80);
        for room in [Room::room_one(), Room::room_two(), Room::room_three()] {
            assert!(!room.hits_wall(&door), "room {} left door blocked", room.index);
            assert!(!room.hits_wall(&Rect::new(780, 260, 20, 80)), "room {} right door blocked", room.index);
        }
    }

    #[test]
    fn generates_requested_tokens_clear_of_walls() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut room = Room::room_three();
        room.generate_tokens(5, &config, &mut rng).unwrap();
        assert_eq!(room.tokens.len(), 5);
        for t in &room.tokens {
            assert!(!room.hits_wall(&t.rect));
            assert!((40..=740).contains(&t.rect.x) && (40..=540).contains(&t.rect.y));
        }
    }

    #[test]
    fn regenerating_replaces_old_tokens() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut room = Room::room_two();
        room.generate_tokens(5, &config, &mut rng).unwrap();
        room.generate_tokens(2, &config, &mut rng).unwrap();
        assert_eq!(room.tokens.len(), 2);
    }

    #[test]
    fn packed_room_gives_up_with_error() {
        let config = GameConfig { max_token_attempts: 50, ..GameConfig::default() };
        let mut rng = StdRng::seed_from_u64(3);
        let mut room = Room::new(4, vec![Wall::new(0, 0, 800, 600, WHITE)]);
        let err = room.generate_tokens(5, &config, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GameError::TokenPlacement { room: 4, placed: 0, requested: 5, attempts: 50 }
        ));
        assert!(room.tokens.is_empty());
    }

    #[test]
    fn create_all_stocks_every_room() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(99);
        let (rooms, errors) = Room::create_all(&config, &mut rng);
        assert!(errors.is_empty());
        assert_eq!(rooms.len(), ROOM_COUNT);
        for (i, room) in rooms.iter().enumerate() {
            assert_eq!(room.index, i);
            assert_eq!(room.tokens.len(), 5);
        }
    }

    #[test]
    fn collecting_removes_only_touched_tokens() {
        let mut room = Room::room_one();
        room.tokens = vec![Token::new(100, 100, 10), Token::new(500, 300, 10)];
        assert_eq!(room.collect_tokens(&Rect::new(95, 95, 30, 30)), 1);
        assert_eq!(room.tokens, vec![Token::new(500, 300, 10)]);
        assert_eq!(room.collect_tokens(&Rect::new(95, 95, 30, 30)), 0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn room_one_always_gets_five_clear_tokens(seed in any::<u64>()) {
                let config = GameConfig::default();
                let mut rng = StdRng::seed_from_u64(seed);
                let mut room = Room::room_one();
                prop_assert!(room.generate_tokens(5, &config, &mut rng).is_ok());
                prop_assert_eq!(room.tokens.len(), 5);
                for t in &room.tokens {
                    prop_assert!(!room.hits_wall(&t.rect), "token {:?} inside a wall", t);
                }
            }
        }
    }
}

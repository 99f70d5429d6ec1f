//! Frame-by-frame game state: rooms, score, player and the rules tying them together.
use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::core::input::InputEvent;
use crate::core::player::Player;
use crate::core::room::{Room, ROOM_COUNT};

/// Fire-and-forget sound playback.
pub trait SoundSink {
    fn play(&mut self, name: &str);
}

/// Lookup of player skins by name.
pub trait SkinSource {
    fn has_skin(&self, name: &str) -> bool;
}

/// What happened during one call to [`GameSession::step`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrameReport {
    pub tokens_collected: usize,
    pub respawned: bool,
    /// New room index when the player left through an edge.
    pub room_changed: Option<usize>,
    pub quit: bool,
}

pub fn next_room(index: usize) -> usize {
    (index + 1) % ROOM_COUNT
}

pub fn previous_room(index: usize) -> usize {
    (index + ROOM_COUNT - 1) % ROOM_COUNT
}

pub struct GameSession {
    config: GameConfig,
    rooms: Vec<Room>,
    current_room: usize,
    score: u32,
    pub player: Player,
    quit_requested: bool,
    missing_win_skin_reported: bool,
}

impl GameSession {
    /// Builds the three rooms with fresh tokens and puts the player at the spawn point.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let (rooms, errors) = Room::create_all(&config, rng);
        for e in errors {
            warn!("{e}");
        }
        Self::with_rooms(config, rooms)
    }

    pub fn with_rooms(config: GameConfig, rooms: Vec<Room>) -> Self {
        debug_assert_eq!(rooms.len(), ROOM_COUNT);
        let player = Player::new(config.spawn.0, config.spawn.1, config.player_size, &config.default_skin);
        Self {
            config,
            rooms,
            current_room: 0,
            score: 0,
            player,
            quit_requested: false,
            missing_win_skin_reported: false,
        }
    }

    pub fn score(&self) -> u32 { self.score }
    pub fn current_room_index(&self) -> usize { self.current_room }
    pub fn current_room(&self) -> &Room { &self.rooms[self.current_room] }

    /// Runs one frame of game logic. Rendering is left to the caller.
    pub fn step<I>(&mut self, events: I, skins: &dyn SkinSource, audio: &mut dyn SoundSink) -> FrameReport
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let mut report = FrameReport::default();

        self.check_win_corner(skins);

        for ev in events {
            self.handle_event(ev);
        }

        let respawn = self.config.respawn;
        let room = &mut self.rooms[self.current_room];
        report.respawned = room.update_moving_walls(&mut self.player, respawn) > 0;

        self.player.move_and_collide(&room.walls);

        report.tokens_collected = room.collect_tokens(&self.player.rect);
        for _ in 0..report.tokens_collected {
            self.score += self.config.token_score;
            audio.play(&self.config.token_sound);
        }

        report.room_changed = self.check_room_transition();
        report.quit = self.quit_requested;
        report
    }

    pub fn handle_event(&mut self, ev: InputEvent) {
        if ev == InputEvent::Quit {
            self.quit_requested = true;
            return;
        }
        let (dx, dy) = ev.velocity_delta(self.config.player_speed);
        self.player.change_speed(dx, dy);
    }

    /// Moves the player to a neighbouring room once it walks past either screen edge.
    /// Only `x` changes; the player keeps its height.
    pub fn check_room_transition(&mut self) -> Option<usize> {
        let x = self.player.rect.x;
        let (target, entry_x) = if x < self.config.exit_left_x {
            (previous_room(self.current_room), self.config.enter_right_x)
        } else if x > self.config.exit_right_x {
            (next_room(self.current_room), self.config.enter_left_x)
        } else {
            return None;
        };

        debug!(from = self.current_room, to = target, y = self.player.rect.y, velocity = ?self.player.velocity(), "room transition");
        self.current_room = target;
        self.player.rect.x = entry_x;
        Some(target)
    }

    /// Reaching the bottom-right corner of the win room changes the player's look.
    /// The swap is a no-op once the skin is already on.
    fn check_win_corner(&mut self, skins: &dyn SkinSource) {
        let (cx, cy) = self.config.win_corner;
        let r = &self.player.rect;
        if self.current_room != self.config.win_room || r.x <= cx || r.y <= cy {
            return;
        }
        let skin = &self.config.win_skin;
        if self.player.skin() == skin {
            return;
        }
        if skins.has_skin(skin) {
            info!(skin = %skin, "win corner reached, changing player skin");
            self.player.set_skin(skin);
        } else if !self.missing_win_skin_reported {
            warn!(skin = %skin, "skin not loaded, keeping current one");
            self.missing_win_skin_reported = true;
        }
    }

    /// The HUD text shown at the top of the screen.
    pub fn status_line(&self) -> String {
        format!(
            "Score: {} Room: {} x: {} y: {}",
            self.score,
            self.current_room + 1,
            self.player.rect.x,
            self.player.rect.y
        )
    }
}

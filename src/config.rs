//! Game tunables.
//!
//! Everything is compiled in; the game reads no config file.

/// Window width in pixels.
pub const SCREEN_WIDTH: i32 = 800;
/// Window height in pixels.
pub const SCREEN_HEIGHT: i32 = 600;
/// Velocity delta applied per arrow key press.
pub const PLAYER_SPEED: i32 = 5;
/// Side length of the (square) player sprite.
pub const PLAYER_SIZE: i32 = 30;
/// Side length of a token.
pub const TOKEN_SIZE: i32 = 10;
/// Points awarded per token.
pub const TOKEN_SCORE: u32 = 10;

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub target_fps: u32,

    pub player_speed: i32,
    pub player_size: i32,
    /// Where the player appears when the game starts.
    pub spawn: (i32, i32),
    /// Where a moving wall sends the player after a hit.
    pub respawn: (i32, i32),

    /// Leaving through the left edge once `x` drops below this.
    pub exit_left_x: i32,
    /// Leaving through the right edge once `x` exceeds this.
    pub exit_right_x: i32,
    /// `x` assigned when entering a room from its right edge.
    pub enter_right_x: i32,
    /// `x` assigned when entering a room from its left edge.
    pub enter_left_x: i32,

    pub token_size: i32,
    pub tokens_per_room: usize,
    pub token_score: u32,
    /// Inclusive range tokens are sampled from, per axis.
    pub token_x_range: (i32, i32),
    pub token_y_range: (i32, i32),
    /// Rejection-sampling cap per token.
    pub max_token_attempts: u32,

    /// Room index (0-based) holding the win corner.
    pub win_room: usize,
    /// The corner is every position with `x > win_corner.0 && y > win_corner.1`.
    pub win_corner: (i32, i32),
    pub default_skin: String,
    pub win_skin: String,
    pub token_sound: String,
    pub sfx_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            target_fps: 60,

            player_speed: PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            spawn: (50, 50),
            respawn: (30, 30),

            exit_left_x: -15,
            exit_right_x: 801,
            enter_right_x: 790,
            enter_left_x: 0,

            token_size: TOKEN_SIZE,
            tokens_per_room: 5,
            token_score: TOKEN_SCORE,
            token_x_range: (40, 740),
            token_y_range: (40, 540),
            max_token_attempts: 10_000,

            win_room: 1,
            win_corner: (745, 545),
            default_skin: "default".to_string(),
            win_skin: "nixon".to_string(),
            token_sound: "token_collect".to_string(),
            sfx_volume: 0.7,
        }
    }
}

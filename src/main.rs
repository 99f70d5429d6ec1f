// main.rs
mod audio_manager;
mod config;
mod core;
mod error;
mod process_events;
mod render;

use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::audio_manager::{AudioManager, Muted};
use crate::config::GameConfig;
use crate::core::session::{GameSession, SoundSink};
use crate::error::{GameError, GameResult};
use crate::process_events::process_events;
use crate::render::framebuffer::Framebuffer;
use crate::render::scene::render_room;
use crate::render::skins::SkinManager;

const SKIN_FILES: &[(&str, &[&str])] = &[
    ("default", &["assets/player.png", "player.png"]),
    ("nixon", &["assets/nixon.png", "nixon.png"]),
];

const SOUND_FILES: &[(&str, &[&str])] = &[
    ("token_collect", &["assets/blip1.wav", "blip1.wav"]),
];

fn open_audio(config: &GameConfig) -> Box<dyn SoundSink> {
    match AudioManager::new() {
        Ok(mut am) => {
            am.set_sfx_volume(config.sfx_volume);
            for (name, paths) in SOUND_FILES {
                if let Err(e) = am.load_sound(name, paths) {
                    warn!("{e}");
                }
            }
            Box::new(am)
        }
        Err(e) => {
            warn!("{e}, continuing without sound");
            Box::new(Muted)
        }
    }
}

fn main() -> GameResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::default();
    let (width, height) = (config.screen_width, config.screen_height);

    let (mut window, raylib_thread) = raylib::init()
        .size(width, height)
        .title("Maze Runner")
        .build();
    window.set_target_fps(config.target_fps);

    let mut skins = SkinManager::new(config.player_size as u32);
    for (name, paths) in SKIN_FILES {
        if let Err(e) = skins.load_image(name, paths) {
            warn!("{e}");
        }
    }
    skins.ensure_fallback(&config.default_skin);

    let mut audio = open_audio(&config);

    // The scene is drawn on the CPU and streamed into this texture every frame.
    let mut framebuffer = Framebuffer::new(width as u32, height as u32);
    let canvas = Image::gen_image_color(width, height, Color::BLACK);
    let mut texture = window
        .load_texture_from_image(&raylib_thread, &canvas)
        .map_err(|e| GameError::Texture(e.to_string()))?;

    let mut session = GameSession::new(config.clone(), &mut rand::thread_rng());
    info!(width, height, "maze runner started");

    loop {
        let events = process_events(&window);
        let report = session.step(events, &skins, audio.as_mut());
        if report.tokens_collected > 0 {
            info!(score = session.score(), "token collected");
        }
        if report.respawned {
            info!("hit by a moving wall, back to the start");
        }
        if let Some(room) = report.room_changed {
            info!(room = room + 1, "entered room");
        }

        render_room(&mut framebuffer, session.current_room(), &session.player, &skins);
        framebuffer.upload_to_texture(&mut texture);
        let status = session.status_line();

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::BLACK);
            d.draw_texture(&texture, 0, 0, Color::WHITE);
            d.draw_text(&status, 0, 0, 24, Color::BLACK);
        }

        if report.quit {
            break;
        }
    }

    info!(score = session.score(), "quit");
    Ok(())
}

use raylib::prelude::*;
use std::collections::HashMap;
use tracing::debug;

use crate::core::session::SkinSource;
use crate::error::{GameError, GameResult};

/// Immutable CPU pixmap, sampled per pixel.
#[derive(Clone, Debug)]
pub struct Pixmap {
    pub w: u32,
    pub h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    pub fn new(w: u32, h: u32, px: Vec<Color>) -> Self {
        debug_assert_eq!(px.len(), (w * h) as usize);
        Self { w, h, px }
    }

    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Color {
        let xi = (x % self.w) as usize;
        let yi = (y % self.h) as usize;
        self.px[(yi * self.w as usize) + xi]
    }
}

/// Player skins by name, all scaled to the sprite size.
pub struct SkinManager {
    skins: HashMap<String, Pixmap>,
    size: u32,
}

impl SkinManager {
    pub fn new(size: u32) -> Self {
        Self { skins: HashMap::new(), size }
    }

    /// Makes sure `name` exists, synthesising a plain sprite when no image was loaded.
    pub fn ensure_fallback(&mut self, name: &str) {
        if self.contains(name) { return; }
        debug!(name, "using procedural player skin");
        let pm = Self::make_player_fallback(self.size, Color::new(0, 200, 255, 255));
        self.insert(name, pm);
    }

    /// Loads `name` from the first candidate that decodes, scaled to the skin size.
    pub fn load_image(&mut self, name: &str, paths: &[&str]) -> GameResult<()> {
        let mut last_err = None;
        for path in paths {
            match Image::load_image(path) {
                Ok(mut img) => {
                    img.resize(self.size as i32, self.size as i32);
                    let data = img.get_image_data().to_vec();
                    self.insert(name, Pixmap::new(self.size, self.size, data));
                    debug!(name, path, "skin loaded");
                    return Ok(());
                }
                Err(e) => last_err = Some((path, e.to_string())),
            }
        }
        Err(match last_err {
            Some((path, reason)) => GameError::AssetLoad {
                name: name.to_string(),
                path: path.to_string(),
                reason,
            },
            None => GameError::AssetNotFound { name: name.to_string() },
        })
    }

    pub fn insert(&mut self, name: &str, pm: Pixmap) {
        self.skins.insert(name.to_string(), pm);
    }

    pub fn get(&self, name: &str) -> Option<&Pixmap> {
        self.skins.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skins.contains_key(name)
    }

    /// Rounded square with a lighter rim, so the sprite still reads as a character.
    fn make_player_fallback(size: u32, body: Color) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (size * size) as usize];
        let r = size as f32 * 0.5;
        let corner = size as f32 * 0.2;
        for y in 0..size {
            for x in 0..size {
                // distance outside the inner (un-rounded) square
                let dx = ((x as f32 + 0.5 - r).abs() - (r - corner)).max(0.0);
                let dy = ((y as f32 + 0.5 - r).abs() - (r - corner)).max(0.0);
                let d = (dx * dx + dy * dy).sqrt();
                if d > corner { continue; }
                let i = (y * size + x) as usize;
                px[i] = if d > corner - 2.0 { Self::mix(body, Color::WHITE, 96) } else { body };
            }
        }
        Pixmap::new(size, size, px)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16)*na + (y as u16)*ta) / 255) as u8 };
        Color::new(mixc(a.r,b.r), mixc(a.g,b.g), mixc(a.b,b.b), mixc(a.a,b.a))
    }
}

impl SkinSource for SkinManager {
    fn has_skin(&self, name: &str) -> bool {
        self.contains(name)
    }
}

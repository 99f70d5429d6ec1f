use std::{collections::HashMap, fs::File, io::Cursor, io::Read, sync::Arc};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use tracing::{debug, info};

use crate::core::session::SoundSink;
use crate::error::{GameError, GameResult};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any<'a>(paths: &[&'a str]) -> Option<(&'a str, Vec<u8>)> {
    for p in paths {
        if let Some(b) = load_bytes(p) { return Some((*p, b)); }
    }
    None
}

/// Named sound effects kept in memory as encoded bytes.
#[derive(Default)]
pub struct SoundBank {
    sounds: HashMap<String, Arc<Vec<u8>>>,
}

impl SoundBank {
    /// Loads `name` from the first candidate path that exists. The data must decode.
    pub fn load(&mut self, name: &str, candidates: &[&str]) -> GameResult<()> {
        let (path, bytes) = load_bytes_any(candidates)
            .ok_or_else(|| GameError::AssetNotFound { name: name.to_string() })?;
        Decoder::new(Cursor::new(bytes.clone())).map_err(|e| GameError::AssetLoad {
            name: name.to_string(),
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        debug!(name, path, "sound loaded");
        self.sounds.insert(name.to_string(), Arc::new(bytes));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<Vec<u8>>> {
        self.sounds.get(name).cloned()
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
    sfx_volume: f32,
}

impl AudioManager {
    pub fn new() -> GameResult<Self> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|e| GameError::AudioUnavailable(e.to_string()))?;
        info!("audio output ready");
        Ok(Self {
            _stream,
            handle,
            bank: SoundBank::default(),
            sfx_volume: 0.7,
        })
    }

    pub fn load_sound(&mut self, name: &str, candidates: &[&str]) -> GameResult<()> {
        self.bank.load(name, candidates)
    }

    /// Plays a loaded effect on its own sink so overlapping pickups all sound.
    /// Unknown names are ignored.
    pub fn play_sound(&self, name: &str) {
        let Some(d) = self.bank.get(name) else { return; };
        if let Ok(dec) = Decoder::new(Cursor::new(d.as_ref().clone())) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(dec.amplify(self.sfx_volume));
                sink.detach();
            }
        }
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = clamp_volume(volume);
    }
}

impl SoundSink for AudioManager {
    fn play(&mut self, name: &str) {
        self.play_sound(name);
    }
}

/// Stand-in when no output device is available.
pub struct Muted;

impl SoundSink for Muted {
    fn play(&mut self, name: &str) {
        debug!(name, "muted");
    }
}

fn clamp_volume(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

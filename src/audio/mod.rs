mod synth;

pub use synth::{SAMPLE_RATE, chord_wave, encode_wav, pop_wave};

use macroquad::audio::{self, Sound};
use macroquad::logging::warn;

/// The three discrete cues the game can fire.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cue {
    Move,
    Win,
    Tie,
}

/// SoundBank owns one decoded waveform per cue, synthesized once at
/// startup. A cue whose waveform failed to load simply stays silent;
/// audio problems never surface as gameplay errors.
pub struct SoundBank {
    move_cue: Option<Sound>,
    win_cue: Option<Sound>,
    tie_cue: Option<Sound>,
}

impl SoundBank {
    /// Synthesize and decode all cues. Requires a live audio context.
    pub async fn load() -> Self {
        Self {
            move_cue: decode(pop_wave(800.0, 0.1, 0.3), Cue::Move).await,
            win_cue: decode(chord_wave(&[261.0, 329.0, 392.0], 0.6), Cue::Win).await,
            tie_cue: decode(pop_wave(400.0, 0.2, 0.2), Cue::Tie).await,
        }
    }

    /// A bank with no loaded sounds; every cue is a no-op
    pub const fn silent() -> Self {
        Self {
            move_cue: None,
            win_cue: None,
            tie_cue: None,
        }
    }

    /// Fire a cue without waiting for playback to finish
    pub fn play(&self, cue: Cue) {
        let sound = match cue {
            Cue::Move => &self.move_cue,
            Cue::Win => &self.win_cue,
            Cue::Tie => &self.tie_cue,
        };
        if let Some(sound) = sound {
            audio::play_sound_once(sound);
        }
    }
}

async fn decode(samples: Vec<i16>, cue: Cue) -> Option<Sound> {
    let bytes = encode_wav(&samples, SAMPLE_RATE);
    match audio::load_sound_from_bytes(&bytes).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            warn!("sound disabled for {:?} cue: {:?}", cue, err);
            None
        }
    }
}

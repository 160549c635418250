//! Surprise Gate - a time-gated greeting page
//!
//! Core modules:
//! - `sequencer`: Screen state machine (gate, countdown, unlocked) and its timed cues
//! - `fireworks`: Particle burst simulation and drawing
//! - `effects`: Typing text, floating symbols, drift dots, scroll reveal
//! - `audio`: Background music / video handoff (and Web Audio tones on wasm)
//! - `platform`: Browser glue (DOM, timers, haptics, canvas)
//! - `config`: Compile-time greeting configuration

pub mod audio;
pub mod config;
pub mod effects;
pub mod error;
pub mod fireworks;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod sequencer;

pub use config::{FireworksTuning, GreetingConfig, PhaseTimings};
pub use error::{EffectError, EffectResult};

/// Timing constants shared by the animation loops
pub mod consts {
    /// One animation frame at the nominal 60 Hz refresh (ms)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest frame step the particle loop will take (tab throttling, slow devices)
    pub const MAX_FRAME_STEP: f32 = 4.0;
}

/// Seed for the visual RNGs, derived from a clock reading
#[inline]
pub fn seed_from_clock(now_ms: f64) -> u64 {
    (now_ms.abs() as u64) ^ 0x5eed_f00d_cafe_beef
}

//! Audio: music/video handoff rules, plus Web Audio tones in the browser

pub mod handoff;
#[cfg(target_arch = "wasm32")]
pub mod synth;

pub use handoff::{BACKGROUND_VOLUME, HandoffAction, MusicHandoff, Playback, ToggleAction};
#[cfg(target_arch = "wasm32")]
pub use synth::{Tone, ToneSynth};

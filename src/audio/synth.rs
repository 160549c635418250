//! Procedural tones via the Web Audio API
//!
//! No audio files: the unlock chime and the pop are short oscillator sweeps.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::error::{EffectError, EffectResult};

/// Tone cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Soft falling whisper when the countdown completes
    Chime,
    /// Floating element popped
    Pop,
}

/// Oscillator-based tone player
pub struct ToneSynth {
    ctx: Option<AudioContext>,
}

impl Default for ToneSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl ToneSynth {
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - tones disabled");
        }
        Self { ctx }
    }

    /// Resume the context (needs a user gesture on most browsers)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Play a tone. Only attempted after the visitor has interacted.
    pub fn play(&self, tone: Tone, has_interacted: bool) -> EffectResult {
        if !has_interacted {
            return Err(EffectError::NeedsInteraction("tone playback"));
        }
        let ctx = self
            .ctx
            .as_ref()
            .ok_or(EffectError::Unsupported("AudioContext"))?;

        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match tone {
            Tone::Chime => self.play_chime(ctx),
            Tone::Pop => self.play_pop(ctx),
        }
    }

    /// Create an oscillator routed through a gain node
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> EffectResult<(OscillatorNode, GainNode)> {
        let blocked = |e: wasm_bindgen::JsValue| EffectError::Blocked {
            what: "oscillator",
            detail: format!("{e:?}"),
        };
        let osc = ctx.create_oscillator().map_err(blocked)?;
        let gain = ctx.create_gain().map_err(blocked)?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).map_err(blocked)?;
        gain.connect_with_audio_node(&ctx.destination())
            .map_err(blocked)?;

        Ok((osc, gain))
    }

    /// Whisper - 200Hz sliding to 100Hz over half a second
    fn play_chime(&self, ctx: &AudioContext) -> EffectResult {
        let (osc, gain) = self.create_osc(ctx, 200.0, OscillatorType::Sine)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(0.1, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.5)
            .ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(100.0, t + 0.5)
            .ok();

        osc.start_with_when(t).ok();
        osc.stop_with_when(t + 0.5).ok();
        Ok(())
    }

    /// Pop - quick bright ping dropping an octave
    fn play_pop(&self, ctx: &AudioContext) -> EffectResult {
        let (osc, gain) = self.create_osc(ctx, 800.0, OscillatorType::Triangle)?;
        let t = ctx.current_time();

        gain.gain().set_value_at_time(0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();
        osc.frequency().set_value_at_time(800.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(400.0, t + 0.08)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
        Ok(())
    }
}

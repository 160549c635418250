//! Greeting configuration
//!
//! Everything here is a compile-time default; there is no file or
//! environment surface. Serde derives exist so the active configuration can
//! be logged as JSON at startup.

use serde::{Deserialize, Serialize};

/// Durations of every timed phase in the reveal sequence (milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTimings {
    /// Pause after the gate click before the gate starts fading
    pub gate_settle_ms: u32,
    /// Gate fade-out; the countdown swap happens when it elapses
    pub gate_fade_ms: u32,
    /// Countdown refresh period
    pub tick_period_ms: u32,
    /// Countdown fade-out after expiry
    pub countdown_fade_ms: u32,
    /// Main content fade-in
    pub main_fade_in_ms: u32,
    /// Delay from the unlock swap to typing / floating / scroll reveal
    pub follow_up_delay_ms: u32,
    /// Pop animation length before a floating element is removed
    pub pop_removal_ms: u32,
    /// Per-child stagger when a content section is revealed
    pub reveal_stagger_ms: u32,
}

impl Default for PhaseTimings {
    fn default() -> Self {
        Self {
            gate_settle_ms: 300,
            gate_fade_ms: 600,
            tick_period_ms: 100,
            countdown_fade_ms: 2000,
            main_fade_in_ms: 1000,
            follow_up_delay_ms: 1000,
            pop_removal_ms: 600,
            reveal_stagger_ms: 100,
        }
    }
}

/// Particle burst tuning. Velocities are in px per frame, decay in alpha per frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FireworksTuning {
    pub particles_per_burst: usize,
    /// Burst start offsets relative to the first frame
    pub burst_delays_ms: Vec<u32>,
    /// Full width/height of the box around the viewport center a burst may originate in
    pub origin_spread: (f32, f32),
    /// Max speed per axis; velocities are uniform in [-max, max]
    pub max_speed: f32,
    pub decay_range: (f32, f32),
    pub radius_range: (f32, f32),
    /// Added to vertical velocity every frame
    pub gravity: f32,
    pub palette: Vec<String>,
}

impl Default for FireworksTuning {
    fn default() -> Self {
        Self {
            particles_per_burst: 50,
            burst_delays_ms: vec![0, 300, 600],
            origin_spread: (400.0, 300.0),
            max_speed: 7.5,
            decay_range: (0.015, 0.035),
            radius_range: (1.0, 4.0),
            gravity: 0.3,
            palette: ["#ff1493", "#ffd700", "#ffb6d9", "#ff69b4"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl FireworksTuning {
    /// Total particles a full schedule spawns
    pub fn total_particles(&self) -> usize {
        self.particles_per_burst * self.burst_delays_ms.len()
    }
}

/// Top-level greeting configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Target moment = page load + this offset
    pub target_offset_ms: u64,
    /// Symbols for the floating elements, used in order and cycled
    pub floating_symbols: Vec<String>,
    pub floating_count: usize,
    pub typing_text: String,
    /// Drift dots per ambient container
    pub drift_count: usize,
    pub timings: PhaseTimings,
    pub fireworks: FireworksTuning,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            target_offset_ms: 60_000,
            floating_symbols: ["💖", "🌟", "💝", "✨"]
                .into_iter()
                .map(String::from)
                .collect(),
            floating_count: 8,
            typing_text: "Happy Birthday My Love 💕".to_string(),
            drift_count: 15,
            timings: PhaseTimings::default(),
            fireworks: FireworksTuning::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_burst_schedule() {
        let tuning = FireworksTuning::default();
        assert_eq!(tuning.burst_delays_ms, vec![0, 300, 600]);
        assert_eq!(tuning.total_particles(), 150);
        assert_eq!(tuning.palette.len(), 4);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GreetingConfig =
            serde_json::from_str(r#"{"floating_count": 3, "timings": {"gate_fade_ms": 900}}"#)
                .unwrap();
        assert_eq!(config.floating_count, 3);
        assert_eq!(config.timings.gate_fade_ms, 900);
        assert_eq!(config.timings.gate_settle_ms, 300);
        assert_eq!(config.target_offset_ms, 60_000);
        assert_eq!(config.fireworks, FireworksTuning::default());
    }
}

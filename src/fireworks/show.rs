//! The fireworks show: burst spawning, per-frame stepping and drawing
//!
//! Frame times come from `requestAnimationFrame` (ms). Particle motion is in
//! px/frame at a nominal 60 Hz, scaled by the measured frame delta so slow or
//! fast displays see the same arcs.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::burst::{BurstSchedule, OriginPolicy};
use super::particle::{self, Particle};
use super::surface::{BlendMode, Surface};
use crate::config::FireworksTuning;
use crate::consts::{FRAME_MS, MAX_FRAME_STEP};

/// Whether the animation loop should request another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Nothing live and nothing pending; hide the surface
    Finished,
}

pub struct Fireworks {
    tuning: FireworksTuning,
    schedule: BurstSchedule,
    /// Live particles; removal compacts in place
    particles: Vec<Particle>,
    rng: Pcg32,
    viewport: Vec2,
    started_at: Option<f64>,
    last_frame: Option<f64>,
    spawned: usize,
    armed: bool,
}

impl Fireworks {
    pub fn new(tuning: FireworksTuning, seed: u64) -> Self {
        let schedule = BurstSchedule::from_tuning(&tuning);
        Self {
            particles: Vec::with_capacity(tuning.total_particles()),
            tuning,
            schedule,
            rng: Pcg32::seed_from_u64(seed),
            viewport: Vec2::ZERO,
            started_at: None,
            last_frame: None,
            spawned: 0,
            armed: false,
        }
    }

    /// Track the surface size. Particle state is untouched.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(0.0), height.max(0.0));
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Reset and arm the burst schedule with the tuned jittered-center origin
    pub fn start(&mut self) {
        self.start_with(None);
    }

    /// Reset and arm the schedule, optionally overriding every burst's origin.
    /// The first burst spawns on the next frame.
    pub fn start_with(&mut self, origin: Option<OriginPolicy>) {
        let base = BurstSchedule::from_tuning(&self.tuning);
        self.schedule = match origin {
            Some(origin) => base.with_origin(origin),
            None => base,
        };
        self.particles.clear();
        self.started_at = None;
        self.last_frame = None;
        self.spawned = 0;
        self.armed = true;
        log::info!(
            "fireworks armed: {} bursts x {} particles",
            self.schedule.len(),
            self.tuning.particles_per_burst
        );
    }

    /// Armed and not yet finished
    pub fn is_active(&self) -> bool {
        self.armed && (!self.particles.is_empty() || !self.schedule.is_exhausted())
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn spawned_count(&self) -> usize {
        self.spawned
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn due bursts, then step every particle and drop the spent ones
    pub fn frame(&mut self, now_ms: f64) -> FrameOutcome {
        if !self.armed {
            return FrameOutcome::Finished;
        }
        let started = *self.started_at.get_or_insert(now_ms);
        let dt = match self.last_frame {
            Some(last) => (((now_ms - last) / FRAME_MS) as f32).clamp(0.0, MAX_FRAME_STEP),
            None => 1.0,
        };
        self.last_frame = Some(now_ms);

        for origin in self.schedule.take_due(now_ms - started) {
            self.spawn_burst(origin);
        }

        let gravity = self.tuning.gravity;
        for p in self.particles.iter_mut() {
            particle::advance(p, dt, gravity);
        }
        self.particles.retain(|p| !particle::is_spent(p));

        if self.particles.is_empty() && self.schedule.is_exhausted() {
            self.armed = false;
            FrameOutcome::Finished
        } else {
            FrameOutcome::Continue
        }
    }

    /// Clear and redraw with additive blending, then restore normal compositing
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        surface.set_blend(BlendMode::Additive);
        for p in &self.particles {
            particle::render(p, &self.tuning.palette, surface);
        }
        surface.set_blend(BlendMode::Normal);
    }

    fn spawn_burst(&mut self, origin: OriginPolicy) {
        let center = origin.resolve(self.viewport, &mut self.rng);
        for _ in 0..self.tuning.particles_per_burst {
            let p = particle::spawn(&mut self.rng, center, &self.tuning);
            self.particles.push(p);
        }
        self.spawned += self.tuning.particles_per_burst;
        log::debug!("burst at ({:.0}, {:.0}), {} live", center.x, center.y, self.particles.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fireworks::surface::recording::{DrawCall, RecordingSurface};
    use proptest::prelude::*;

    fn armed(seed: u64) -> Fireworks {
        let mut show = Fireworks::new(FireworksTuning::default(), seed);
        show.resize(1280.0, 720.0);
        show.start();
        show
    }

    /// Run at 60 Hz until finished; returns (frames, max live seen)
    fn run_to_end(show: &mut Fireworks) -> (usize, usize) {
        let mut t = 0.0;
        let mut frames = 0;
        let mut max_live = 0;
        while show.frame(t) == FrameOutcome::Continue {
            max_live = max_live.max(show.live_count());
            t += FRAME_MS;
            frames += 1;
            assert!(frames < 10_000, "fireworks never finished");
        }
        (frames, max_live)
    }

    #[test]
    fn test_three_bursts_then_drain() {
        let mut show = armed(42);
        assert!(show.is_active());

        show.frame(0.0);
        assert_eq!(show.spawned_count(), 50);

        let mut t = 0.0;
        while t < 600.0 {
            t += FRAME_MS;
            show.frame(t);
        }
        assert_eq!(show.spawned_count(), 150);

        let mut last = show.live_count();
        assert!(last <= 150);
        while show.frame(t) == FrameOutcome::Continue {
            assert!(show.live_count() <= last);
            last = show.live_count();
            t += FRAME_MS;
        }
        assert_eq!(show.live_count(), 0);
        assert_eq!(show.spawned_count(), 150);
        assert!(!show.is_active());
        // Fades out in roughly 1-3 seconds after the last burst
        assert!(t < 600.0 + 3000.0);
    }

    #[test]
    fn test_idle_until_started() {
        let mut show = Fireworks::new(FireworksTuning::default(), 3);
        assert!(!show.is_active());
        assert_eq!(show.frame(0.0), FrameOutcome::Finished);
        assert_eq!(show.spawned_count(), 0);
    }

    #[test]
    fn test_resize_keeps_particles() {
        let mut show = armed(1);
        show.frame(0.0);
        let before = show.live_count();
        show.resize(640.0, 480.0);
        assert_eq!(show.live_count(), before);
        assert_eq!(show.viewport(), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn test_restart_clears_previous_show() {
        let mut show = armed(5);
        show.frame(0.0);
        show.frame(400.0);
        assert_eq!(show.spawned_count(), 100);
        show.start_with(Some(OriginPolicy::Fixed(Vec2::new(10.0, 10.0))));
        assert_eq!(show.live_count(), 0);
        show.frame(1000.0);
        assert_eq!(show.spawned_count(), 50);
        assert!(show.particles().iter().all(|p| p.alpha < 1.0));
    }

    #[test]
    fn test_draw_is_additive_and_restores() {
        let mut show = armed(9);
        show.frame(0.0);
        let mut surface = RecordingSurface::default();
        show.draw(&mut surface);

        assert_eq!(surface.calls.first(), Some(&DrawCall::Clear));
        assert_eq!(surface.calls[1], DrawCall::Blend(BlendMode::Additive));
        assert_eq!(surface.calls.last(), Some(&DrawCall::Blend(BlendMode::Normal)));
        let circles = surface
            .calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count();
        assert_eq!(circles, show.live_count());
    }

    #[test]
    fn test_slow_frames_still_finish() {
        let mut show = armed(11);
        let mut t = 0.0;
        while show.frame(t) == FrameOutcome::Continue {
            t += 250.0;
            assert!(t < 60_000.0);
        }
        assert_eq!(show.spawned_count(), 150);
    }

    proptest! {
        #[test]
        fn prop_every_seed_exhausts(seed in any::<u64>()) {
            let mut show = armed(seed);
            let (frames, max_live) = run_to_end(&mut show);
            prop_assert!(max_live <= 150);
            // decay >= 0.015/frame means at most ~67 frames after the last burst
            prop_assert!(frames < 36 + 68 + 2);
            prop_assert_eq!(show.live_count(), 0);
        }
    }
}

//! Particle records and the free functions that move and draw them

use glam::Vec2;
use rand::Rng;

use super::surface::Surface;
use crate::config::FireworksTuning;

/// One spark. Units are px and px/frame; alpha doubles as remaining life.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at spawn, removed once it reaches 0
    pub alpha: f32,
    /// Alpha lost per frame, always > 0
    pub decay: f32,
    pub radius: f32,
    /// Index into the tuning palette
    pub color: usize,
}

/// Sample a fresh particle at `origin`
pub fn spawn<R: Rng>(rng: &mut R, origin: Vec2, tuning: &FireworksTuning) -> Particle {
    let max = tuning.max_speed;
    let (decay_lo, decay_hi) = tuning.decay_range;
    let (radius_lo, radius_hi) = tuning.radius_range;
    Particle {
        pos: origin,
        vel: Vec2::new(rng.random_range(-max..=max), rng.random_range(-max..=max)),
        alpha: 1.0,
        decay: rng.random_range(decay_lo..=decay_hi).max(f32::EPSILON),
        radius: rng.random_range(radius_lo..=radius_hi),
        color: rng.random_range(0..tuning.palette.len().max(1)),
    }
}

/// Step one particle by `dt` frames
#[inline]
pub fn advance(p: &mut Particle, dt: f32, gravity: f32) {
    p.pos += p.vel * dt;
    p.vel.y += gravity * dt;
    p.alpha -= p.decay * dt;
}

#[inline]
pub fn is_spent(p: &Particle) -> bool {
    p.alpha <= 0.0
}

/// Draw one particle as a filled circle
pub fn render(p: &Particle, palette: &[String], surface: &mut dyn Surface) {
    let Some(color) = palette.get(p.color) else {
        return;
    };
    surface.fill_circle(p.pos, p.radius, color, p.alpha.clamp(0.0, 1.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_within_ranges() {
        let tuning = FireworksTuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = spawn(&mut rng, Vec2::new(10.0, 20.0), &tuning);
            assert_eq!(p.pos, Vec2::new(10.0, 20.0));
            assert!(p.vel.x.abs() <= 7.5 && p.vel.y.abs() <= 7.5);
            assert!((0.015..=0.035).contains(&p.decay));
            assert!((1.0..=4.0).contains(&p.radius));
            assert!(p.color < 4);
            assert_eq!(p.alpha, 1.0);
        }
    }

    #[test]
    fn test_advance_applies_gravity_and_decay() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(2.0, -3.0),
            alpha: 1.0,
            decay: 0.25,
            radius: 2.0,
            color: 0,
        };
        advance(&mut p, 1.0, 0.3);
        assert_eq!(p.pos, Vec2::new(2.0, -3.0));
        assert!((p.vel.y - -2.7).abs() < 1e-6);
        assert!((p.alpha - 0.75).abs() < 1e-6);

        advance(&mut p, 3.0, 0.3);
        assert!(is_spent(&p));
    }
}

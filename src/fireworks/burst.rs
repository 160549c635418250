//! Burst schedule: when each burst fires and where it originates

use glam::Vec2;
use rand::Rng;

use crate::config::FireworksTuning;

/// Where a burst is centered
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginPolicy {
    /// Uniformly within a box of `spread` (full width/height) around the viewport center
    JitteredCenter { spread: Vec2 },
    /// An exact surface point
    Fixed(Vec2),
}

impl OriginPolicy {
    pub fn resolve<R: Rng>(&self, viewport: Vec2, rng: &mut R) -> Vec2 {
        match *self {
            OriginPolicy::JitteredCenter { spread } => {
                let jitter = Vec2::new(
                    (rng.random::<f32>() - 0.5) * spread.x,
                    (rng.random::<f32>() - 0.5) * spread.y,
                );
                viewport * 0.5 + jitter
            }
            OriginPolicy::Fixed(point) => point,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstEntry {
    pub delay_ms: f64,
    pub origin: OriginPolicy,
}

/// Ordered bursts plus a cursor over the ones already fired
#[derive(Debug, Clone, PartialEq)]
pub struct BurstSchedule {
    entries: Vec<BurstEntry>,
    fired: usize,
}

impl BurstSchedule {
    pub fn new(mut entries: Vec<BurstEntry>) -> Self {
        entries.sort_by(|a, b| a.delay_ms.total_cmp(&b.delay_ms));
        Self { entries, fired: 0 }
    }

    /// Bursts at the tuned delays, all jittered around the center
    pub fn from_tuning(tuning: &FireworksTuning) -> Self {
        let origin = OriginPolicy::JitteredCenter {
            spread: Vec2::new(tuning.origin_spread.0, tuning.origin_spread.1),
        };
        Self::new(
            tuning
                .burst_delays_ms
                .iter()
                .map(|&delay| BurstEntry {
                    delay_ms: delay as f64,
                    origin,
                })
                .collect(),
        )
    }

    /// Same delays, but every burst from `origin`
    pub fn with_origin(&self, origin: OriginPolicy) -> Self {
        Self::new(
            self.entries
                .iter()
                .map(|e| BurstEntry {
                    delay_ms: e.delay_ms,
                    origin,
                })
                .collect(),
        )
    }

    /// Mark every burst due by `elapsed_ms` as fired and return their origins
    pub fn take_due(&mut self, elapsed_ms: f64) -> Vec<OriginPolicy> {
        let start = self.fired;
        while self.fired < self.entries.len() && self.entries[self.fired].delay_ms <= elapsed_ms {
            self.fired += 1;
        }
        self.entries[start..self.fired]
            .iter()
            .map(|e| e.origin)
            .collect()
    }

    pub fn rewind(&mut self) {
        self.fired = 0;
    }

    pub fn is_exhausted(&self) -> bool {
        self.fired >= self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_take_due_fires_each_once() {
        let mut schedule = BurstSchedule::from_tuning(&FireworksTuning::default());
        assert_eq!(schedule.take_due(0.0).len(), 1);
        assert!(schedule.take_due(299.0).is_empty());
        assert_eq!(schedule.take_due(650.0).len(), 2);
        assert!(schedule.is_exhausted());
        assert!(schedule.take_due(10_000.0).is_empty());

        schedule.rewind();
        assert!(!schedule.is_exhausted());
    }

    #[test]
    fn test_jitter_stays_in_box() {
        let policy = OriginPolicy::JitteredCenter {
            spread: Vec2::new(400.0, 300.0),
        };
        let viewport = Vec2::new(1000.0, 800.0);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..200 {
            let p = policy.resolve(viewport, &mut rng);
            assert!((300.0..=700.0).contains(&p.x));
            assert!((250.0..=550.0).contains(&p.y));
        }
        let fixed = OriginPolicy::Fixed(Vec2::new(5.0, 6.0));
        assert_eq!(fixed.resolve(viewport, &mut rng), Vec2::new(5.0, 6.0));
    }
}

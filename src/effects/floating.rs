//! Randomized layouts for the floating symbols and the ambient drift dots
//!
//! Both are CSS-animated elements; all we decide is placement and timing.

use rand::Rng;

/// A tappable floating symbol in the main content
#[derive(Debug, Clone, PartialEq)]
pub struct FloatingElement {
    pub symbol: String,
    pub left_pct: f32,
    pub top_pct: f32,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl FloatingElement {
    pub fn style_props(&self) -> [(&'static str, String); 4] {
        [
            ("left", format!("{:.2}%", self.left_pct)),
            ("top", format!("{:.2}%", self.top_pct)),
            ("animation-duration", format!("{:.2}s", self.duration_s)),
            ("animation-delay", format!("{:.2}s", self.delay_s)),
        ]
    }
}

/// `count` elements, cycling through `symbols` in order
pub fn layout_floating<R: Rng>(symbols: &[String], count: usize, rng: &mut R) -> Vec<FloatingElement> {
    if symbols.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|i| FloatingElement {
            symbol: symbols[i % symbols.len()].clone(),
            left_pct: rng.random_range(0.0..100.0),
            top_pct: rng.random_range(0.0..100.0),
            duration_s: rng.random_range(8.0..12.0),
            delay_s: rng.random_range(0.0..2.0),
        })
        .collect()
}

/// A slow background dot on the gate and countdown screens
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftDot {
    pub left_pct: f32,
    pub delay_s: f32,
    pub duration_s: f32,
}

impl DriftDot {
    pub fn style_props(&self) -> [(&'static str, String); 3] {
        [
            ("left", format!("{:.2}%", self.left_pct)),
            ("animation-delay", format!("{:.2}s", self.delay_s)),
            ("animation-duration", format!("{:.2}s", self.duration_s)),
        ]
    }
}

pub fn layout_drift<R: Rng>(count: usize, rng: &mut R) -> Vec<DriftDot> {
    (0..count)
        .map(|_| DriftDot {
            left_pct: rng.random_range(0.0..100.0),
            delay_s: rng.random_range(0.0..5.0),
            duration_s: rng.random_range(15.0..25.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn symbols() -> Vec<String> {
        ["a", "b", "c"].into_iter().map(String::from).collect()
    }

    #[test]
    fn test_symbols_cycle_in_order() {
        let mut rng = Pcg32::seed_from_u64(4);
        let elements = layout_floating(&symbols(), 8, &mut rng);
        let order: String = elements.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(order, "abcabcab");
        for e in &elements {
            assert!((0.0..100.0).contains(&e.left_pct));
            assert!((8.0..12.0).contains(&e.duration_s));
            assert!((0.0..2.0).contains(&e.delay_s));
        }
    }

    #[test]
    fn test_no_symbols_no_elements() {
        let mut rng = Pcg32::seed_from_u64(4);
        assert!(layout_floating(&[], 8, &mut rng).is_empty());
    }

    #[test]
    fn test_drift_ranges_and_style() {
        let mut rng = Pcg32::seed_from_u64(8);
        let dots = layout_drift(15, &mut rng);
        assert_eq!(dots.len(), 15);
        assert!(dots.iter().all(|d| (15.0..25.0).contains(&d.duration_s)));

        let dot = DriftDot {
            left_pct: 12.5,
            delay_s: 1.0,
            duration_s: 20.0,
        };
        assert_eq!(dot.style_props()[0], ("left", "12.50%".to_string()));
        assert_eq!(
            dot.style_props()[2],
            ("animation-duration", "20.00s".to_string())
        );
    }
}

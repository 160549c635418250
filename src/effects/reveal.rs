//! Scroll-reveal bookkeeping
//!
//! Sections are indexed when registered with the IntersectionObserver; each
//! reveals once, and its children follow with a fixed stagger.

/// Fraction of a section that must be visible
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so sections reveal slightly after entering
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SECTION_SELECTOR: &str = ".content-section";
pub const STAGGER_CHILD_SELECTOR: &str =
    ".message-line, .gallery-item, .special-card, .gift-message p, .promise-content p";
/// Data attribute holding a section's registration index
pub const SECTION_INDEX_ATTR: &str = "data-reveal-index";
pub const REVEALED_CLASS: &str = "animate-in";

/// Tracks which sections have already revealed
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    pub fn new(sections: usize) -> Self {
        Self {
            revealed: vec![false; sections],
        }
    }

    /// True the first time a known section intersects
    pub fn first_reveal(&mut self, index: usize) -> bool {
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|&&r| r).count()
    }

    pub fn is_complete(&self) -> bool {
        self.revealed.iter().all(|&r| r)
    }
}

/// Delay for each of `count` children: 0, step, 2*step, ...
pub fn stagger_delays(count: usize, step_ms: u32) -> impl Iterator<Item = u32> {
    (0..count as u32).map(move |i| i * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::new(3);
        assert!(tracker.first_reveal(1));
        assert!(!tracker.first_reveal(1));
        assert!(!tracker.first_reveal(7));
        assert_eq!(tracker.revealed_count(), 1);
        assert!(tracker.first_reveal(0));
        assert!(tracker.first_reveal(2));
        assert!(tracker.is_complete());
    }

    #[test]
    fn test_stagger() {
        let delays: Vec<_> = stagger_delays(4, 100).collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(stagger_delays(0, 100).count(), 0);
    }
}

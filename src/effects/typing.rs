//! Typewriter reveal of the greeting text

use rand::Rng;

/// Random per-character pause range (ms), for a hand-typed feel
pub const TYPING_DELAY_MS: (u32, u32) = (50, 150);

/// One step of the animation: the text to show and how long to wait after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub delay_ms: u32,
}

/// Reveals text one character (Unicode scalar) at a time
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    text: String,
    /// Byte offsets of each character end, so prefixes never split a char
    boundaries: Vec<usize>,
    shown: usize,
}

impl TypingAnimation {
    pub fn new(text: &str) -> Self {
        let boundaries = text
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect();
        Self {
            text: text.to_string(),
            boundaries,
            shown: 0,
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.boundaries.len()
    }

    /// Characters still to reveal
    pub fn remaining(&self) -> usize {
        self.boundaries.len() - self.shown
    }

    pub fn next_frame<R: Rng>(&mut self, rng: &mut R) -> Option<TypingFrame> {
        let end = *self.boundaries.get(self.shown)?;
        self.shown += 1;
        Some(TypingFrame {
            text: self.text[..end].to_string(),
            delay_ms: rng.random_range(TYPING_DELAY_MS.0..TYPING_DELAY_MS.1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_reveals_whole_chars() {
        let mut rng = Pcg32::seed_from_u64(0);
        let mut anim = TypingAnimation::new("Hi 💕!");
        assert_eq!(anim.remaining(), 5);

        let frames: Vec<_> = std::iter::from_fn(|| anim.next_frame(&mut rng)).collect();
        let texts: Vec<_> = frames.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, vec!["H", "Hi", "Hi ", "Hi 💕", "Hi 💕!"]);
        assert!(frames.iter().all(|f| (50..150).contains(&f.delay_ms)));
        assert!(anim.is_done());
        assert!(anim.next_frame(&mut rng).is_none());
    }

    #[test]
    fn test_empty_text() {
        let mut anim = TypingAnimation::new("");
        assert!(anim.is_done());
        assert!(anim.next_frame(&mut Pcg32::seed_from_u64(1)).is_none());
    }
}

//! Named cues and the delayed-continuation timeline they are scheduled on

/// Vibration patterns (on/off milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticPattern {
    /// Gate tap
    Gate,
    /// Countdown reached zero
    Unlock,
    /// Floating element popped
    Pop,
}

impl HapticPattern {
    pub fn pulses(&self) -> &'static [u32] {
        match self {
            HapticPattern::Gate => &[40, 40, 80],
            HapticPattern::Unlock => &[100, 50, 100, 50, 200],
            HapticPattern::Pop => &[30],
        }
    }
}

/// A side effect the page shell performs when the sequencer emits it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Vibrate(HapticPattern),
    /// Press-scale the gate button and add the glow
    AcknowledgeGate,
    /// Start the gate fade-out animation
    FadeOutGate,
    /// Structural swap: hide gate, show countdown, seed its drift dots
    ShowCountdown,
    /// Refresh the display now and start the periodic ticker
    StartTicker,
    /// Clear the periodic ticker
    StopTicker,
    LaunchFireworks,
    PlayChime,
    /// Start the countdown fade-out animation
    FadeOutCountdown,
    /// Structural swap: hide countdown, unlock scrolling, fade main content in
    RevealMain,
    StartTyping,
    SpawnFloating,
    ObserveScrollReveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scheduled {
    at_ms: i64,
    cue: Cue,
}

/// Pending cues ordered by due time; equal times keep insertion order
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    pending: Vec<Scheduled>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, at_ms: i64, cue: Cue) {
        let idx = self.pending.partition_point(|s| s.at_ms <= at_ms);
        self.pending.insert(idx, Scheduled { at_ms, cue });
    }

    pub fn schedule_all(&mut self, at_ms: i64, cues: &[Cue]) {
        for &cue in cues {
            self.schedule(at_ms, cue);
        }
    }

    /// Remove and return every cue due at or before `now_ms`, in order
    pub fn drain_due(&mut self, now_ms: i64) -> Vec<Cue> {
        let due = self.pending.partition_point(|s| s.at_ms <= now_ms);
        self.pending.drain(..due).map(|s| s.cue).collect()
    }

    /// When the earliest pending cue is due
    pub fn next_due(&self) -> Option<i64> {
        self.pending.first().map(|s| s.at_ms)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_in_time_then_insertion_order() {
        let mut timeline = Timeline::new();
        timeline.schedule(900, Cue::ShowCountdown);
        timeline.schedule(300, Cue::FadeOutGate);
        timeline.schedule(900, Cue::StartTicker);

        assert_eq!(timeline.next_due(), Some(300));
        assert!(timeline.drain_due(299).is_empty());
        assert_eq!(timeline.drain_due(300), vec![Cue::FadeOutGate]);
        assert_eq!(
            timeline.drain_due(5000),
            vec![Cue::ShowCountdown, Cue::StartTicker]
        );
        assert!(timeline.is_empty());
        assert_eq!(timeline.next_due(), None);
    }

    #[test]
    fn test_haptic_patterns() {
        assert_eq!(HapticPattern::Gate.pulses(), &[40, 40, 80]);
        assert_eq!(HapticPattern::Pop.pulses(), &[30]);
        assert_eq!(HapticPattern::Unlock.pulses().len(), 5);
    }
}

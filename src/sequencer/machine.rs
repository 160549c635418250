//! The screen sequencer
//!
//! A cooperative state machine: callers feed it events (gate tap, ticker
//! ticks, clock readings) and it answers with the cues to perform now. Delayed
//! steps sit on a [`Timeline`] until [`Sequencer::advance`] is called at or
//! after their due time. It never touches the DOM.
//!
//! ```text
//! tap ─▶ [ack] ─settle─▶ [fade gate] ─fade─▶ [swap, ticker]      (Countdown)
//! expiry ─▶ [fireworks, chime, fade] ─fade─▶ [reveal] ─delay─▶ [typing | floating | reveal]
//! ```

use crate::config::{GreetingConfig, PhaseTimings};

use super::countdown::{CountdownDisplay, CountdownTicker, TargetMoment, Tick};
use super::state::{AppState, Session, Trigger};
use super::timeline::{Cue, HapticPattern, Timeline};

/// What a countdown tick produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Update the four display slots
    Display(CountdownDisplay),
    /// Countdown finished; perform these cues now
    Completed(Vec<Cue>),
    /// Nothing to do
    Idle,
}

pub struct Sequencer {
    session: Session,
    timings: PhaseTimings,
    timeline: Timeline,
    ticker: CountdownTicker,
    /// Gate tap accepted; guards against double taps during the settle window
    gate_engaged: bool,
}

impl Sequencer {
    pub fn new(config: &GreetingConfig, now_ms: i64) -> Self {
        let target = TargetMoment::from_offset(now_ms, config.target_offset_ms);
        Self {
            session: Session::new(target),
            timings: config.timings,
            timeline: Timeline::new(),
            ticker: CountdownTicker::new(target),
            gate_engaged: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> AppState {
        self.session.state
    }

    pub fn has_interacted(&self) -> bool {
        self.session.has_interacted
    }

    pub fn target(&self) -> TargetMoment {
        self.session.target
    }

    pub fn timings(&self) -> &PhaseTimings {
        &self.timings
    }

    /// Due time of the next delayed cue
    pub fn next_due(&self) -> Option<i64> {
        self.timeline.next_due()
    }

    pub fn ticker_running(&self) -> bool {
        self.ticker.is_running()
    }

    /// Gate tapped. Only the first tap while locked does anything.
    pub fn on_gate_interaction(&mut self, now_ms: i64) -> Vec<Cue> {
        if self.gate_engaged || self.session.state != AppState::Locked {
            log::debug!("gate tap ignored in state {}", self.session.state.as_str());
            return Vec::new();
        }
        self.gate_engaged = true;
        self.session.mark_interacted();

        let fade_at = now_ms + self.timings.gate_settle_ms as i64;
        let swap_at = fade_at + self.timings.gate_fade_ms as i64;
        self.timeline.schedule(fade_at, Cue::FadeOutGate);
        self.timeline
            .schedule_all(swap_at, &[Cue::ShowCountdown, Cue::StartTicker]);

        vec![Cue::Vibrate(HapticPattern::Gate), Cue::AcknowledgeGate]
    }

    /// Release every delayed cue due by `now_ms`, applying the state changes tied to them
    pub fn advance(&mut self, now_ms: i64) -> Vec<Cue> {
        let due = self.timeline.drain_due(now_ms);
        for cue in &due {
            match cue {
                Cue::ShowCountdown => {
                    self.session.apply(Trigger::CountdownShown);
                }
                Cue::StartTicker => {
                    self.ticker.start();
                }
                _ => {}
            }
        }
        due
    }

    /// Periodic countdown refresh
    pub fn countdown_tick(&mut self, now_ms: i64) -> TickOutcome {
        match self.ticker.tick(now_ms) {
            Tick::Display(display) => TickOutcome::Display(display),
            Tick::Expired => TickOutcome::Completed(self.complete_countdown(now_ms)),
            Tick::Inactive => TickOutcome::Idle,
        }
    }

    /// Initial display right after the swap, before the first period elapses
    pub fn current_display(&self, now_ms: i64) -> CountdownDisplay {
        let remaining = self.session.target.remaining_ms(now_ms).max(0) as u64;
        CountdownDisplay::from_remaining(remaining)
    }

    fn complete_countdown(&mut self, now_ms: i64) -> Vec<Cue> {
        if !self.session.apply(Trigger::CountdownExpired) {
            return vec![Cue::StopTicker];
        }

        let reveal_at = now_ms + self.timings.countdown_fade_ms as i64;
        let follow_up_at = reveal_at + self.timings.follow_up_delay_ms as i64;
        self.timeline.schedule(reveal_at, Cue::RevealMain);
        self.timeline.schedule_all(
            follow_up_at,
            &[Cue::StartTyping, Cue::SpawnFloating, Cue::ObserveScrollReveal],
        );

        vec![
            Cue::StopTicker,
            Cue::LaunchFireworks,
            Cue::Vibrate(HapticPattern::Unlock),
            Cue::PlayChime,
            Cue::FadeOutCountdown,
        ]
    }
}

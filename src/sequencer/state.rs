//! Application state and its pure transitions

use serde::{Deserialize, Serialize};

use super::countdown::TargetMoment;

/// Which screen owns the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppState {
    /// Gate screen, waiting for the first tap
    Locked,
    /// Countdown screen is ticking
    Countdown,
    /// Target reached, main content revealed (terminal)
    Unlocked,
}

/// Events that can move the state forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Gate has faded and the countdown screen was swapped in
    CountdownShown,
    /// The ticker observed a negative remaining duration
    CountdownExpired,
}

impl AppState {
    /// Next state for a trigger, or None when the trigger does not apply.
    /// Transitions only ever move forward.
    pub fn on(self, trigger: Trigger) -> Option<AppState> {
        match (self, trigger) {
            (AppState::Locked, Trigger::CountdownShown) => Some(AppState::Countdown),
            (AppState::Countdown, Trigger::CountdownExpired) => Some(AppState::Unlocked),
            _ => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == AppState::Unlocked
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Locked => "locked",
            AppState::Countdown => "countdown",
            AppState::Unlocked => "unlocked",
        }
    }
}

/// Session-wide state, owned by the sequencer and lent out by reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub state: AppState,
    /// Set by the first gate tap, never cleared. Audio is only attempted once set.
    pub has_interacted: bool,
    pub target: TargetMoment,
}

impl Session {
    pub fn new(target: TargetMoment) -> Self {
        Self {
            state: AppState::Locked,
            has_interacted: false,
            target,
        }
    }

    /// Apply a trigger. Returns true when the state changed.
    pub fn apply(&mut self, trigger: Trigger) -> bool {
        match self.state.on(trigger) {
            Some(next) => {
                log::info!("state {} -> {}", self.state.as_str(), next.as_str());
                self.state = next;
                true
            }
            None => {
                log::debug!("ignored {:?} in state {}", trigger, self.state.as_str());
                false
            }
        }
    }

    /// Record the first user interaction. Returns true only the first time.
    pub fn mark_interacted(&mut self) -> bool {
        !std::mem::replace(&mut self.has_interacted, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        assert_eq!(
            AppState::Locked.on(Trigger::CountdownShown),
            Some(AppState::Countdown)
        );
        assert_eq!(
            AppState::Countdown.on(Trigger::CountdownExpired),
            Some(AppState::Unlocked)
        );
        assert_eq!(AppState::Locked.on(Trigger::CountdownExpired), None);
        assert_eq!(AppState::Countdown.on(Trigger::CountdownShown), None);
        assert_eq!(AppState::Unlocked.on(Trigger::CountdownShown), None);
        assert_eq!(AppState::Unlocked.on(Trigger::CountdownExpired), None);
        assert!(AppState::Unlocked.is_terminal());
    }

    #[test]
    fn test_interaction_flag_sticks() {
        let mut session = Session::new(TargetMoment::from_epoch_ms(0));
        assert!(session.mark_interacted());
        assert!(!session.mark_interacted());
        assert!(session.has_interacted);
    }

    #[test]
    fn test_serialized_state_names() {
        assert_eq!(
            serde_json::to_string(&AppState::Countdown).unwrap(),
            "\"countdown\""
        );
    }
}

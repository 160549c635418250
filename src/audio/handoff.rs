//! Background music / foreground video handoff
//!
//! Only one source may be audible. The video always wins: it pauses the
//! music and remembers where it was. When the video stops, the music resumes
//! from that spot, provided the visitor has interacted with the page.

/// Volume the background track plays at once audible
pub const BACKGROUND_VOLUME: f64 = 0.6;

/// Background track state at the moment of an event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    pub paused: bool,
    pub position_s: f64,
}

/// What to do to the background track
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandoffAction {
    Nothing,
    PauseBackground,
    /// Seek then play
    ResumeBackground { at_s: f64 },
}

/// Result of the audio toggle button
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToggleAction {
    Resume { at_s: f64, volume: f64 },
    Pause,
    /// Paused, but no interaction yet so playback would be refused
    Ignored,
}

impl ToggleAction {
    /// Icon for the toggle button after the action, if it changes
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            ToggleAction::Resume { .. } => Some("🔊"),
            ToggleAction::Pause => Some("🔇"),
            ToggleAction::Ignored => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MusicHandoff {
    last_position_s: f64,
}

impl MusicHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the background will resume from
    pub fn last_position(&self) -> f64 {
        self.last_position_s
    }

    /// Foreground media started
    pub fn on_foreground_play(&mut self, background: Playback) -> HandoffAction {
        if background.paused {
            return HandoffAction::Nothing;
        }
        self.last_position_s = background.position_s;
        HandoffAction::PauseBackground
    }

    /// Foreground media paused or ended
    pub fn on_foreground_stop(&self, has_interacted: bool) -> HandoffAction {
        if !has_interacted {
            return HandoffAction::Nothing;
        }
        HandoffAction::ResumeBackground {
            at_s: self.last_position_s,
        }
    }

    pub fn on_toggle(&mut self, background: Playback, has_interacted: bool) -> ToggleAction {
        if background.paused {
            if !has_interacted {
                return ToggleAction::Ignored;
            }
            ToggleAction::Resume {
                at_s: self.last_position_s,
                volume: BACKGROUND_VOLUME,
            }
        } else {
            self.last_position_s = background.position_s;
            ToggleAction::Pause
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing(at: f64) -> Playback {
        Playback {
            paused: false,
            position_s: at,
        }
    }

    #[test]
    fn test_resume_from_play_position() {
        let mut handoff = MusicHandoff::new();
        assert_eq!(
            handoff.on_foreground_play(playing(42.5)),
            HandoffAction::PauseBackground
        );
        // Background has been paused at 42.5 while the video ran
        assert_eq!(
            handoff.on_foreground_stop(true),
            HandoffAction::ResumeBackground { at_s: 42.5 }
        );
    }

    #[test]
    fn test_second_play_while_paused_keeps_position() {
        let mut handoff = MusicHandoff::new();
        handoff.on_foreground_play(playing(10.0));
        let paused = Playback {
            paused: true,
            position_s: 0.0,
        };
        assert_eq!(handoff.on_foreground_play(paused), HandoffAction::Nothing);
        assert_eq!(handoff.last_position(), 10.0);
    }

    #[test]
    fn test_no_resume_without_interaction() {
        let mut handoff = MusicHandoff::new();
        handoff.on_foreground_play(playing(3.0));
        assert_eq!(handoff.on_foreground_stop(false), HandoffAction::Nothing);
    }

    #[test]
    fn test_toggle() {
        let mut handoff = MusicHandoff::new();
        let action = handoff.on_toggle(playing(7.0), true);
        assert_eq!(action, ToggleAction::Pause);
        assert_eq!(action.icon(), Some("🔇"));

        let paused = Playback {
            paused: true,
            position_s: 7.0,
        };
        assert_eq!(handoff.on_toggle(paused, false), ToggleAction::Ignored);
        assert_eq!(
            handoff.on_toggle(paused, true),
            ToggleAction::Resume {
                at_s: 7.0,
                volume: BACKGROUND_VOLUME
            }
        );
    }
}

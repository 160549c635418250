//! Errors from best-effort side effects
//!
//! Nothing in the greeting is fatal. Audio, haptics, canvas and missing
//! elements all report through `EffectError`, and callers log and move on.

use thiserror::Error;

/// Why a cosmetic side effect did not happen
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EffectError {
    /// A page element the effect needs is absent
    #[error("element #{0} not found")]
    MissingElement(String),

    /// The browser lacks the capability (no vibration, no AudioContext)
    #[error("{0} is not supported here")]
    Unsupported(&'static str),

    /// The browser refused (autoplay policy, permissions)
    #[error("{what} was blocked: {detail}")]
    Blocked { what: &'static str, detail: String },

    /// Media playback requires a prior user gesture
    #[error("{0} needs a user interaction first")]
    NeedsInteraction(&'static str),

    /// The canvas exists but has no 2D context
    #[error("canvas 2D context unavailable")]
    NoCanvasContext,
}

pub type EffectResult<T = ()> = Result<T, EffectError>;

/// Log a failed best-effort call and swallow it
pub fn log_outcome(what: &str, result: EffectResult) {
    if let Err(err) = result {
        match err {
            EffectError::Unsupported(_) | EffectError::NeedsInteraction(_) => {
                log::info!("{what} skipped: {err}")
            }
            _ => log::warn!("{what} failed: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EffectError::MissingElement("fireworksCanvas".into()).to_string(),
            "element #fireworksCanvas not found"
        );
        let blocked = EffectError::Blocked {
            what: "background music",
            detail: "NotAllowedError".into(),
        };
        assert_eq!(
            blocked.to_string(),
            "background music was blocked: NotAllowedError"
        );
    }

    #[test]
    fn test_log_outcome_swallows() {
        log_outcome("vibrate", Err(EffectError::Unsupported("vibration")));
        log_outcome("chime", Ok(()));
    }
}

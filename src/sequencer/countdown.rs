//! Countdown arithmetic and the cancel-once ticker

use std::fmt;

use serde::{Deserialize, Serialize};

pub const MS_PER_SECOND: u64 = 1000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

/// Absolute moment the countdown runs to (epoch milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMoment {
    epoch_ms: i64,
}

impl TargetMoment {
    pub fn from_epoch_ms(epoch_ms: i64) -> Self {
        Self { epoch_ms }
    }

    /// Fixed offset from a clock reading, taken once at startup
    pub fn from_offset(now_ms: i64, offset_ms: u64) -> Self {
        Self {
            epoch_ms: now_ms.saturating_add(offset_ms as i64),
        }
    }

    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Signed time left; negative once the moment has passed
    pub fn remaining_ms(&self, now_ms: i64) -> i64 {
        self.epoch_ms - now_ms
    }
}

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountdownDisplay {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl CountdownDisplay {
    /// Floor-divide a non-negative duration into days/hours/minutes/seconds
    pub fn from_remaining(ms: u64) -> Self {
        Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Milliseconds covered by the displayed units (drops the sub-second part)
    pub fn whole_ms(&self) -> u64 {
        self.days * MS_PER_DAY
            + self.hours * MS_PER_HOUR
            + self.minutes * MS_PER_MINUTE
            + self.seconds * MS_PER_SECOND
    }

    /// Slot id and zero-padded text for each unit
    pub fn slots(&self) -> [(&'static str, String); 4] {
        [
            ("days", pad2(self.days)),
            ("hours", pad2(self.hours)),
            ("minutes", pad2(self.minutes)),
            ("seconds", pad2(self.seconds)),
        ]
    }
}

impl fmt::Display for CountdownDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            pad2(self.days),
            pad2(self.hours),
            pad2(self.minutes),
            pad2(self.seconds)
        )
    }
}

/// Zero-pad to at least two digits (never truncates)
pub fn pad2(value: u64) -> String {
    format!("{value:02}")
}

/// Ticker lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    Idle,
    Running,
    /// Expiry was observed; stays here forever
    Stopped,
}

/// Result of a single ticker invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Display(CountdownDisplay),
    /// First observation of a negative remaining duration
    Expired,
    /// Ticker not running (not started yet, or already stopped)
    Inactive,
}

/// Drives the countdown display and reports expiry exactly once
#[derive(Debug, Clone)]
pub struct CountdownTicker {
    target: TargetMoment,
    state: TickerState,
}

impl CountdownTicker {
    pub fn new(target: TargetMoment) -> Self {
        Self {
            target,
            state: TickerState::Idle,
        }
    }

    pub fn state(&self) -> TickerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TickerState::Running
    }

    /// Begin ticking. Has no effect unless idle.
    pub fn start(&mut self) -> bool {
        if self.state != TickerState::Idle {
            return false;
        }
        self.state = TickerState::Running;
        true
    }

    pub fn tick(&mut self, now_ms: i64) -> Tick {
        if self.state != TickerState::Running {
            return Tick::Inactive;
        }
        let remaining = self.target.remaining_ms(now_ms);
        if remaining < 0 {
            self.state = TickerState::Stopped;
            return Tick::Expired;
        }
        Tick::Display(CountdownDisplay::from_remaining(remaining as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decomposition() {
        let ms = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND + 999;
        let display = CountdownDisplay::from_remaining(ms);
        assert_eq!(
            display,
            CountdownDisplay {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
        assert_eq!(display.to_string(), "02:03:04:05");
    }

    #[test]
    fn test_pad2_keeps_wide_values() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(123), "123");
    }

    #[test]
    fn test_ticker_expires_once() {
        let target = TargetMoment::from_offset(0, 1000);
        let mut ticker = CountdownTicker::new(target);
        assert_eq!(ticker.tick(0), Tick::Inactive);
        assert!(ticker.start());

        assert!(matches!(ticker.tick(900), Tick::Display(_)));
        assert!(matches!(ticker.tick(1000), Tick::Display(_)));
        assert_eq!(ticker.tick(1001), Tick::Expired);
        assert_eq!(ticker.tick(1100), Tick::Inactive);
        assert_eq!(ticker.state(), TickerState::Stopped);
        assert!(!ticker.start());
    }

    proptest! {
        #[test]
        fn prop_units_cover_remaining(ms in 0u64..(400 * MS_PER_DAY)) {
            let d = CountdownDisplay::from_remaining(ms);
            prop_assert!(d.hours < 24 && d.minutes < 60 && d.seconds < 60);
            prop_assert!(d.whole_ms() <= ms);
            prop_assert!(ms - d.whole_ms() < MS_PER_SECOND);
            for (_, text) in d.slots() {
                prop_assert!(text.len() >= 2);
            }
        }
    }
}

//! Screen sequencing module
//!
//! Pure and clock-driven:
//! - No DOM access, callers pass clock readings in
//! - Forward-only state transitions
//! - Delays are config values, never literals in the shell

pub mod countdown;
pub mod machine;
pub mod state;
pub mod timeline;

pub use countdown::{CountdownDisplay, CountdownTicker, TargetMoment, Tick, TickerState, pad2};
pub use machine::{Sequencer, TickOutcome};
pub use state::{AppState, Session, Trigger};
pub use timeline::{Cue, HapticPattern, Timeline};

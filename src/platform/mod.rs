//! Platform abstraction layer (browser only)
//!
//! Handles the page side of every effect:
//! - DOM lookups, class toggling and inline animation
//! - Timers (async sleep, the countdown interval)
//! - Haptics
//! - Canvas 2D surface for the fireworks
//! - Media elements for the music/video handoff
//!
//! Every call here is best-effort and reports through `EffectError`.

pub mod canvas;
pub mod dom;
pub mod haptics;
pub mod media;
pub mod timer;

pub use canvas::CanvasSurface;
pub use dom::Dom;
pub use timer::{Interval, now_ms, sleep};

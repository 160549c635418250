//! Post-unlock and ambient effects
//!
//! Layout and timing decisions only; the shell applies them to the page.

pub mod floating;
pub mod keyframes;
pub mod reveal;
pub mod typing;

pub use floating::{DriftDot, FloatingElement, layout_drift, layout_floating};
pub use keyframes::Keyframes;
pub use reveal::{RevealTracker, stagger_delays};
pub use typing::{TypingAnimation, TypingFrame};

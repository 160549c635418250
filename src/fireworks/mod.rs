//! Fireworks particle module
//!
//! Particles are plain records stepped by free functions over a `Vec` arena.
//! Drawing goes through the [`Surface`] trait so the simulation stays
//! platform-free.

pub mod burst;
pub mod particle;
pub mod show;
pub mod surface;

pub use burst::{BurstEntry, BurstSchedule, OriginPolicy};
pub use particle::{Particle, advance, is_spent, render, spawn};
pub use show::{Fireworks, FrameOutcome};
pub use surface::{BlendMode, Surface};

//! Immediate-mode drawing seam
//!
//! The browser canvas implements this in `platform::canvas`; tests use a
//! recorder.

use glam::Vec2;

/// Compositing mode for subsequent draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// Later shapes cover earlier ones
    Normal,
    /// Overlaps sum brightness
    Additive,
}

impl BlendMode {
    /// Canvas `globalCompositeOperation` value
    pub fn composite_op(&self) -> &'static str {
        match self {
            BlendMode::Normal => "source-over",
            BlendMode::Additive => "lighter",
        }
    }
}

pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn set_blend(&mut self, mode: BlendMode);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Clear,
        Blend(BlendMode),
        Circle { center: Vec2, alpha: f32 },
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Vec2,
        pub calls: Vec<DrawCall>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> Vec2 {
            self.size
        }

        fn clear(&mut self) {
            self.calls.push(DrawCall::Clear);
        }

        fn set_blend(&mut self, mode: BlendMode) {
            self.calls.push(DrawCall::Blend(mode));
        }

        fn fill_circle(&mut self, center: Vec2, _radius: f32, _color: &str, alpha: f32) {
            self.calls.push(DrawCall::Circle { center, alpha });
        }
    }
}

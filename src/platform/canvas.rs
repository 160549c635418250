//! Canvas 2D implementation of the fireworks drawing surface

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom::Dom;
use crate::error::{EffectError, EffectResult};
use crate::fireworks::{BlendMode, Surface};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn acquire(dom: &Dom, id: &str) -> EffectResult<Self> {
        let canvas: HtmlCanvasElement = dom
            .element(id)?
            .dyn_into()
            .map_err(|_| EffectError::MissingElement(id.to_string()))?;
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(EffectError::NoCanvasContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EffectError::NoCanvasContext)?;
        Ok(Self { canvas, ctx })
    }

    /// Set the backing store size; contents are cleared by the browser
    pub fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn set_blend(&mut self, mode: BlendMode) {
        let _ = self.ctx.set_global_composite_operation(mode.composite_op());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str, alpha: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if self
            .ctx
            .arc(
                center.x as f64,
                center.y as f64,
                radius as f64,
                0.0,
                std::f64::consts::TAU,
            )
            .is_ok()
        {
            self.ctx.fill();
        }
        self.ctx.set_global_alpha(1.0);
    }
}

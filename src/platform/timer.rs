//! Timers: awaitable sleeps for the cue chain, and the countdown interval

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::dom::{js_blocked, window};
use crate::error::EffectResult;

/// Wall clock, epoch ms
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Resolve after `ms` via `setTimeout`. Resolves immediately without a window.
pub async fn sleep(ms: i64) {
    let ms = ms.clamp(0, i32::MAX as i64) as i32;
    let promise = Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|w| {
            w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = JsFuture::from(promise).await;
}

/// A running `setInterval`. The callback closure lives for the page lifetime.
pub struct Interval {
    id: i32,
}

impl Interval {
    pub fn start(period_ms: u32, callback: impl FnMut() + 'static) -> EffectResult<Self> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(js_blocked("setInterval"))?;
        closure.forget();
        Ok(Self { id })
    }

    /// Stop the interval. Consumes the handle so it cannot be cancelled twice.
    pub fn cancel(self) {
        if let Some(w) = web_sys::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

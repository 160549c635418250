//! Vibration via `navigator.vibrate`

use wasm_bindgen::JsValue;

use super::dom::window;
use crate::error::{EffectError, EffectResult};
use crate::sequencer::HapticPattern;

pub fn vibrate(pattern: HapticPattern) -> EffectResult {
    let navigator = window()?.navigator();
    // iOS Safari has no vibrate at all; calling it would throw
    let supported = js_sys::Reflect::has(&navigator, &JsValue::from_str("vibrate")).unwrap_or(false);
    if !supported {
        return Err(EffectError::Unsupported("vibration"));
    }

    let pulses: js_sys::Array = pattern
        .pulses()
        .iter()
        .map(|&ms| JsValue::from(ms))
        .collect();
    if navigator.vibrate_with_pattern(&pulses) {
        Ok(())
    } else {
        Err(EffectError::Blocked {
            what: "vibration",
            detail: "refused by the browser".to_string(),
        })
    }
}

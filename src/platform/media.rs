//! Media element control for the background music and the video

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use super::dom::{Dom, js_blocked};
use crate::audio::Playback;
use crate::error::{EffectError, EffectResult};

pub fn media(dom: &Dom, id: &str) -> EffectResult<HtmlMediaElement> {
    dom.element(id)?
        .dyn_into::<HtmlMediaElement>()
        .map_err(|_| EffectError::MissingElement(id.to_string()))
}

pub fn playback(el: &HtmlMediaElement) -> Playback {
    Playback {
        paused: el.paused(),
        position_s: el.current_time(),
    }
}

/// Seek and play; a rejected play promise is logged, not returned
pub fn play_from(el: &HtmlMediaElement, at_s: f64, volume: Option<f64>) -> EffectResult {
    if let Some(volume) = volume {
        el.set_volume(volume);
    }
    el.set_current_time(at_s);
    let promise = el.play().map_err(js_blocked("media playback"))?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            log::info!("Music play failed: {err:?}");
        }
    });
    Ok(())
}

pub fn pause(el: &HtmlMediaElement) -> EffectResult {
    el.pause().map_err(js_blocked("media pause"))
}

/// Mobile autoplay unlock: play silently, then pause and rewind
pub fn unlock(el: &HtmlMediaElement) -> EffectResult {
    el.set_volume(0.0);
    let promise = el.play().map_err(js_blocked("music unlock"))?;
    let el = el.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => {
                let _ = el.pause();
                el.set_current_time(0.0);
                log::info!("Background music unlocked");
            }
            Err(err) => log::info!("Audio unlock blocked: {err:?}"),
        }
    });
    Ok(())
}

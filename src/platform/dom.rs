//! DOM helpers

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::effects::Keyframes;
use crate::effects::keyframes::KEYFRAMES_CSS;
use crate::error::{EffectError, EffectResult};

/// Class that removes a screen from layout
pub const HIDDEN_CLASS: &str = "hidden";

pub fn window() -> EffectResult<Window> {
    web_sys::window().ok_or(EffectError::Unsupported("window"))
}

/// Map a JS exception to a blocked effect
pub fn js_blocked(what: &'static str) -> impl Fn(JsValue) -> EffectError {
    move |err| EffectError::Blocked {
        what,
        detail: format!("{err:?}"),
    }
}

/// Handle to the page document
#[derive(Clone)]
pub struct Dom {
    document: Document,
}

impl Dom {
    pub fn new() -> EffectResult<Self> {
        let document = window()?
            .document()
            .ok_or(EffectError::Unsupported("document"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn element(&self, id: &str) -> EffectResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| EffectError::MissingElement(id.to_string()))
    }

    pub fn html(&self, id: &str) -> EffectResult<HtmlElement> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| EffectError::MissingElement(id.to_string()))
    }

    pub fn show(&self, id: &str) -> EffectResult {
        self.element(id)?
            .class_list()
            .remove_1(HIDDEN_CLASS)
            .map_err(js_blocked("class toggle"))
    }

    pub fn hide(&self, id: &str) -> EffectResult {
        self.element(id)?
            .class_list()
            .add_1(HIDDEN_CLASS)
            .map_err(js_blocked("class toggle"))
    }

    pub fn set_text(&self, id: &str, text: &str) -> EffectResult {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    /// Run a one-shot keyframe animation on an element
    pub fn animate(&self, id: &str, keyframes: Keyframes, duration_ms: u32) -> EffectResult {
        set_style(&self.html(id)?, "animation", &keyframes.css(duration_ms))
    }

    /// Lock or unlock page scrolling
    pub fn set_scroll_enabled(&self, enabled: bool) -> EffectResult {
        let body = self
            .document
            .body()
            .ok_or_else(|| EffectError::MissingElement("body".to_string()))?;
        set_style(&body, "overflow", if enabled { "auto" } else { "hidden" })
    }

    pub fn inject_keyframes(&self) -> EffectResult {
        let head = self
            .document
            .head()
            .ok_or_else(|| EffectError::MissingElement("head".to_string()))?;
        let style = self.create("style")?;
        style.set_text_content(Some(KEYFRAMES_CSS));
        head.append_child(&style).map_err(js_blocked("style injection"))?;
        Ok(())
    }

    pub fn create(&self, tag: &str) -> EffectResult<HtmlElement> {
        self.document
            .create_element(tag)
            .map_err(js_blocked("element creation"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| EffectError::Unsupported("HtmlElement"))
    }

    /// Create a `div` with a class
    pub fn create_div(&self, class: &str) -> EffectResult<HtmlElement> {
        let div = self.create("div")?;
        div.set_class_name(class);
        Ok(div)
    }
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) -> EffectResult {
    el.style()
        .set_property(prop, value)
        .map_err(js_blocked("style"))
}

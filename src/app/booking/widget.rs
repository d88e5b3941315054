//! Browser side of the scheduling widget: script tag injection and the
//! global `Calendly.initInlineWidget` call. Native builds get no-op stand-ins.

use thiserror::Error;

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("document has no <head> element")]
    NoHead,
    #[error("scheduling API is not available on the page")]
    ApiMissing,
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
pub use browser::*;

#[cfg(feature = "csr")]
mod browser {
    use js_sys::{Function, Object, Reflect};
    use leptos::prelude::document;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, Event, HtmlScriptElement};

    use super::WidgetError;
    use crate::config::{CALENDLY_SCRIPT_ID, CALENDLY_SCRIPT_URL};

    const API_GLOBAL: &str = "Calendly";

    fn js_err(e: JsValue) -> WidgetError {
        WidgetError::Js(format!("{e:?}"))
    }

    fn api() -> Option<JsValue> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(API_GLOBAL))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }

    pub fn api_available() -> bool {
        api().is_some()
    }

    /// Appends a fresh script tag to `<head>`, replacing any earlier one with
    /// the same id. `on_settled` runs once with `true` for a load event and
    /// `false` for an error event.
    pub fn inject_script(on_settled: impl FnOnce(bool) + 'static) -> Result<(), WidgetError> {
        let document = document();
        if let Some(stale) = document.get_element_by_id(CALENDLY_SCRIPT_ID) {
            stale.remove();
        }

        let script: HtmlScriptElement = document
            .create_element("script")
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| WidgetError::Js("created element is not a script".to_string()))?;
        script.set_id(CALENDLY_SCRIPT_ID);
        script.set_src(CALENDLY_SCRIPT_URL);
        script.set_async(true);

        // one handler for both events, so the closure is freed whichever fires
        let handler = Closure::once_into_js(move |event: Event| {
            on_settled(event.type_() == "load")
        });
        script.set_onload(Some(handler.unchecked_ref()));
        script.set_onerror(Some(handler.unchecked_ref()));

        document
            .head()
            .ok_or(WidgetError::NoHead)?
            .append_child(&script)
            .map_err(js_err)?;
        Ok(())
    }

    /// Renders the inline booking widget for `url` into `parent`.
    pub fn init_inline_widget(url: &str, parent: &Element) -> Result<(), WidgetError> {
        let calendly = api().ok_or(WidgetError::ApiMissing)?;
        let init: Function = Reflect::get(&calendly, &JsValue::from_str("initInlineWidget"))
            .map_err(js_err)?
            .dyn_into()
            .map_err(|_| WidgetError::ApiMissing)?;

        let options = Object::new();
        Reflect::set(&options, &"url".into(), &url.into()).map_err(js_err)?;
        Reflect::set(&options, &"parentElement".into(), parent).map_err(js_err)?;
        Reflect::set(&options, &"prefill".into(), &Object::new()).map_err(js_err)?;
        Reflect::set(&options, &"utm".into(), &Object::new()).map_err(js_err)?;

        // re-selecting an option must not stack a second iframe
        parent.set_inner_html("");
        init.call1(&calendly, &options).map_err(js_err)?;
        Ok(())
    }
}

#[cfg(not(feature = "csr"))]
pub fn api_available() -> bool {
    false
}

#[cfg(not(feature = "csr"))]
pub fn inject_script(_on_settled: impl FnOnce(bool) + 'static) -> Result<(), WidgetError> {
    Ok(())
}

#[cfg(not(feature = "csr"))]
pub fn init_inline_widget(_url: &str, _parent: &web_sys::Element) -> Result<(), WidgetError> {
    Ok(())
}

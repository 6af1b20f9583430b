//! Maps SDK Loader
//!
//! The SDK ships as a remote script; it is injected once with the
//! configured key and probed until `google.maps` is callable.

use wasm_bindgen::JsValue;

const SCRIPT_ID: &str = "maps-sdk";

/// Whether `google.maps.Map` is available on the window yet
pub fn is_ready() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let google = match js_sys::Reflect::get(&window, &JsValue::from_str("google")) {
        Ok(value) if !value.is_undefined() => value,
        _ => return false,
    };
    let maps = match js_sys::Reflect::get(&google, &JsValue::from_str("maps")) {
        Ok(value) if !value.is_undefined() => value,
        _ => return false,
    };

    js_sys::Reflect::get(&maps, &JsValue::from_str("Map"))
        .map(|map| !map.is_undefined())
        .unwrap_or(false)
}

/// Inject the SDK script tag once; later calls are no-ops
pub fn inject(api_key: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.get_element_by_id(SCRIPT_ID).is_some() {
        return;
    }

    let Ok(script) = document.create_element("script") else {
        return;
    };
    let _ = script.set_attribute("id", SCRIPT_ID);
    let _ = script.set_attribute("async", "");
    let _ = script.set_attribute(
        "src",
        &format!("https://maps.googleapis.com/maps/api/js?key={}", api_key),
    );

    if let Some(body) = document.body() {
        let _ = body.append_child(&script);
    }
}

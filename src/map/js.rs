//! Google Maps SDK Bindings
//!
//! Extern declarations for the handful of SDK types the dashboard touches:
//! the map itself, markers, polylines and the click event payload.

use js_sys::Object;
use wasm_bindgen::prelude::*;

use crate::geo::{Coordinate, MapBounds};

#[wasm_bindgen]
extern "C" {
    /// `google.maps.Map`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(container: &web_sys::HtmlElement, options: &Object) -> Map;

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, bounds: &Object, padding: u32);

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, center: &Object);

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Map, event_name: &str, handler: &js_sys::Function);

    /// `google.maps.Marker`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: Option<&Map>);

    #[wasm_bindgen(method, js_name = addListener)]
    pub fn add_listener(this: &Marker, event_name: &str, handler: &js_sys::Function);

    /// `google.maps.Polyline`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Polyline;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(options: &Object) -> Polyline;

    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Polyline, map: Option<&Map>);

    #[wasm_bindgen(method, js_name = setPath)]
    pub fn set_path(this: &Polyline, path: &js_sys::Array);

    #[wasm_bindgen(method, js_name = setOptions)]
    pub fn set_options(this: &Polyline, options: &Object);

    /// `google.maps.Size`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Size;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(width: u32, height: u32) -> Size;

    /// `google.maps.Point`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type Point;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"])]
    pub fn new(x: u32, y: u32) -> Point;

    /// `google.maps.LatLng`
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;

    /// Click event payload handed to map listeners
    #[wasm_bindgen(js_namespace = ["google", "maps"])]
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = latLng)]
    pub fn lat_lng(this: &MapMouseEvent) -> Option<LatLng>;
}

/// Set one property on a JS options object
pub fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = js_sys::Reflect::set(target, &JsValue::from_str(key), value);
}

/// `{ lat, lng }` literal the SDK accepts wherever a LatLng is expected
pub fn lat_lng_literal(coordinate: Coordinate) -> Object {
    let literal = Object::new();
    set(&literal, "lat", &coordinate.lat.into());
    set(&literal, "lng", &coordinate.lng.into());
    literal
}

/// `{ south, west, north, east }` literal for `fitBounds`
pub fn bounds_literal(bounds: &MapBounds) -> Object {
    let literal = Object::new();
    set(&literal, "south", &bounds.south.into());
    set(&literal, "west", &bounds.west.into());
    set(&literal, "north", &bounds.north.into());
    set(&literal, "east", &bounds.east.into());
    literal
}

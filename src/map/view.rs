//! Map View Component
//!
//! Owns one SDK map instance per mounted view: fits the initial viewport,
//! re-centers reactively, redraws markers (detaching the previous set
//! first) and keeps one polyline per walking path, updated in place. All
//! overlays are detached again on teardown.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::Object;
use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::{js, loader};
use crate::api::config;
use crate::geo::{Coordinate, MapBounds};

const POLYLINE_COLOR: &str = "#1e88e5";
const POLYLINE_OPACITY: f64 = 0.85;

/// Custom marker glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerIcon {
    pub url: &'static str,
    pub size: u32,
    pub anchor: u32,
}

/// Blue-dot glyph for the device position
pub const CURRENT_LOCATION_ICON: MarkerIcon = MarkerIcon {
    url: "/assets/current-location-marker.svg",
    size: 48,
    anchor: 24,
};

/// One marker to draw
#[derive(Clone)]
pub struct MarkerSpec {
    pub position: Coordinate,
    pub label: Option<String>,
    pub title: Option<String>,
    pub icon: Option<MarkerIcon>,
    pub clickable: bool,
    pub on_click: Option<Callback<()>>,
}

impl MarkerSpec {
    pub fn at(position: Coordinate) -> Self {
        Self {
            position,
            label: None,
            title: None,
            icon: None,
            clickable: false,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn on_click(mut self, callback: Callback<()>) -> Self {
        self.clickable = true;
        self.on_click = Some(callback);
        self
    }
}

/// One connecting line to draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolylineSpec {
    pub from: Coordinate,
    pub to: Coordinate,
    pub stroke_weight: u32,
}

/// A drawn marker together with the closure backing its click listener
struct MountedMarker {
    marker: js::Marker,
    _click: Option<Closure<dyn FnMut()>>,
}

/// Map viewport bound to the SDK.
///
/// `center == None` leaves the viewport wherever the bounds fit put it;
/// once a coordinate arrives the map follows it at the given zoom.
#[component]
pub fn MapView(
    bounds: MapBounds,
    #[prop(into)] center: Signal<Option<Coordinate>>,
    #[prop(into)] zoom: Signal<f64>,
    #[prop(into)] markers: Signal<Vec<MarkerSpec>>,
    #[prop(optional, into)] polylines: Option<Signal<Vec<PolylineSpec>>>,
    #[prop(optional, into)] on_click: Option<Callback<Coordinate>>,
) -> impl IntoView {
    let container = create_node_ref::<html::Div>();
    let sdk_ready = create_rw_signal(loader::is_ready());
    let map_ready = create_rw_signal(false);

    let map: Rc<RefCell<Option<js::Map>>> = Rc::new(RefCell::new(None));
    let mounted_markers: Rc<RefCell<Vec<MountedMarker>>> = Rc::new(RefCell::new(Vec::new()));
    let mounted_lines: Rc<RefCell<Vec<js::Polyline>>> = Rc::new(RefCell::new(Vec::new()));
    let click_handler: Rc<RefCell<Option<Closure<dyn FnMut(js::MapMouseEvent)>>>> =
        Rc::new(RefCell::new(None));

    if !sdk_ready.get_untracked() {
        loader::inject(&config::maps_api_key());
        poll_sdk(sdk_ready);
    }

    // Build the map once the container is mounted and the SDK is up
    {
        let map = Rc::clone(&map);
        let click_handler = Rc::clone(&click_handler);
        create_effect(move |_| {
            if !sdk_ready.get() {
                return;
            }
            let Some(el) = container.get() else {
                return;
            };
            if map.borrow().is_some() {
                return;
            }

            let options = Object::new();
            js::set(&options, "gestureHandling", &"greedy".into());
            js::set(&options, "mapTypeControl", &false.into());
            js::set(&options, "streetViewControl", &false.into());
            if let Some(coordinate) = center.get_untracked() {
                js::set(&options, "center", &js::lat_lng_literal(coordinate));
                js::set(&options, "zoom", &zoom.get_untracked().into());
            }

            let instance = js::Map::new(&el, &options);
            instance.fit_bounds(&js::bounds_literal(&bounds), bounds.padding);

            if let Some(callback) = on_click {
                let handler = Closure::wrap(Box::new(move |event: js::MapMouseEvent| {
                    if let Some(lat_lng) = event.lat_lng() {
                        callback.call(Coordinate::new(lat_lng.lat(), lat_lng.lng()));
                    }
                })
                    as Box<dyn FnMut(js::MapMouseEvent)>);
                instance.add_listener("click", handler.as_ref().unchecked_ref());
                *click_handler.borrow_mut() = Some(handler);
            }

            *map.borrow_mut() = Some(instance);
            map_ready.set(true);
        });
    }

    // Follow the tracked/selected coordinate
    {
        let map = Rc::clone(&map);
        create_effect(move |_| {
            if !map_ready.get() {
                return;
            }
            let Some(coordinate) = center.get() else {
                return;
            };
            let level = zoom.get();
            if let Some(instance) = map.borrow().as_ref() {
                instance.set_center(&js::lat_lng_literal(coordinate));
                instance.set_zoom(level);
            }
        });
    }

    // Redraw markers whenever the spec list changes; the previous set is
    // detached before the new one is drawn
    {
        let map = Rc::clone(&map);
        let mounted = Rc::clone(&mounted_markers);
        create_effect(move |_| {
            let specs = markers.get();
            if !map_ready.get() {
                return;
            }
            let map_ref = map.borrow();
            let Some(instance) = map_ref.as_ref() else {
                return;
            };

            let mut mounted = mounted.borrow_mut();
            for old in mounted.drain(..) {
                old.marker.set_map(None);
            }
            for spec in &specs {
                mounted.push(mount_marker(instance, spec));
            }
        });
    }

    // Keep one polyline per path, updating geometry in place
    if let Some(line_specs) = polylines {
        let map = Rc::clone(&map);
        let mounted = Rc::clone(&mounted_lines);
        create_effect(move |_| {
            let specs = line_specs.get();
            if !map_ready.get() {
                return;
            }
            let map_ref = map.borrow();
            let Some(instance) = map_ref.as_ref() else {
                return;
            };

            let mut lines = mounted.borrow_mut();
            if lines.len() != specs.len() {
                for line in lines.drain(..) {
                    line.set_map(None);
                }
                for _ in &specs {
                    let options = Object::new();
                    js::set(&options, "strokeColor", &POLYLINE_COLOR.into());
                    js::set(&options, "strokeOpacity", &POLYLINE_OPACITY.into());
                    lines.push(js::Polyline::new(&options));
                }
            }

            for (line, spec) in lines.iter().zip(specs.iter()) {
                let path = js_sys::Array::of2(
                    &js::lat_lng_literal(spec.from),
                    &js::lat_lng_literal(spec.to),
                );
                line.set_path(&path);

                let options = Object::new();
                js::set(&options, "strokeWeight", &f64::from(spec.stroke_weight).into());
                line.set_options(&options);
                line.set_map(Some(instance));
            }
        });
    }

    // Detach every overlay when the view goes away
    {
        let mounted_markers = Rc::clone(&mounted_markers);
        let mounted_lines = Rc::clone(&mounted_lines);
        let click_handler = Rc::clone(&click_handler);
        on_cleanup(move || {
            for old in mounted_markers.borrow_mut().drain(..) {
                old.marker.set_map(None);
            }
            for line in mounted_lines.borrow_mut().drain(..) {
                line.set_map(None);
            }
            click_handler.borrow_mut().take();
        });
    }

    view! { <div node_ref=container class="h-full w-full" /> }
}

/// Re-check for the SDK until it is ready or the view is gone
fn poll_sdk(sdk_ready: RwSignal<bool>) {
    if sdk_ready.try_get_untracked().is_none() {
        return;
    }
    if loader::is_ready() {
        let _ = sdk_ready.try_set(true);
        return;
    }
    Timeout::new(200, move || poll_sdk(sdk_ready)).forget();
}

fn mount_marker(map: &js::Map, spec: &MarkerSpec) -> MountedMarker {
    let options = Object::new();
    js::set(&options, "position", &js::lat_lng_literal(spec.position));
    if let Some(label) = &spec.label {
        js::set(&options, "label", &JsValue::from_str(label));
    }
    if let Some(title) = &spec.title {
        js::set(&options, "title", &JsValue::from_str(title));
    }
    if let Some(icon) = spec.icon {
        let glyph = Object::new();
        js::set(&glyph, "url", &JsValue::from_str(icon.url));
        js::set(&glyph, "scaledSize", &js::Size::new(icon.size, icon.size));
        js::set(&glyph, "anchor", &js::Point::new(icon.anchor, icon.anchor));
        js::set(&options, "icon", &glyph);
    }
    js::set(&options, "clickable", &spec.clickable.into());
    let cursor = if spec.clickable { "pointer" } else { "default" };
    js::set(&options, "cursor", &cursor.into());

    let marker = js::Marker::new(&options);
    marker.set_map(Some(map));

    let click = spec.on_click.map(|callback| {
        let handler = Closure::wrap(Box::new(move || callback.call(())) as Box<dyn FnMut()>);
        marker.add_listener("click", handler.as_ref().unchecked_ref());
        handler
    });

    MountedMarker {
        marker,
        _click: click,
    }
}

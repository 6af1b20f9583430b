//! Geolocation Tracking
//!
//! Continuous device-position watch feeding a pair of signals. The
//! subscription is cleared when the watch handle drops, which the owning
//! view ties to its own teardown.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Geolocation, Position, PositionError};

use crate::geo::Coordinate;

/// Active position subscription; dropping it clears the platform watch
pub struct LocationWatch {
    geolocation: Geolocation,
    watch_id: i32,
    _on_position: Closure<dyn FnMut(Position)>,
    _on_error: Closure<dyn FnMut(PositionError)>,
}

impl LocationWatch {
    /// Subscribe to continuous position updates.
    ///
    /// Each fix replaces the previous coordinate (no history) and clears a
    /// prior failure; any watch error sets the failure signal. Returns
    /// `None` when the platform exposes no geolocation capability.
    pub fn start(
        position: RwSignal<Option<Coordinate>>,
        failed: RwSignal<bool>,
    ) -> Option<Self> {
        let geolocation = web_sys::window()?.navigator().geolocation().ok()?;

        let on_position = Closure::wrap(Box::new(move |fix: Position| {
            let coords = fix.coords();
            position.set(Some(Coordinate::new(coords.latitude(), coords.longitude())));
            failed.set(false);
        }) as Box<dyn FnMut(Position)>);

        let on_error = Closure::wrap(Box::new(move |_: PositionError| {
            failed.set(true);
        }) as Box<dyn FnMut(PositionError)>);

        let watch_id = geolocation
            .watch_position_with_error_callback(
                on_position.as_ref().unchecked_ref(),
                Some(on_error.as_ref().unchecked_ref()),
            )
            .ok()?;

        Some(Self {
            geolocation,
            watch_id,
            _on_position: on_position,
            _on_error: on_error,
        })
    }
}

impl Drop for LocationWatch {
    fn drop(&mut self) {
        self.geolocation.clear_watch(self.watch_id);
    }
}

/// Track the device location for the lifetime of the current view.
///
/// Missing capability or a rejected subscription surfaces as the failure
/// signal; the rest of the view keeps working without a location.
pub fn track_location(position: RwSignal<Option<Coordinate>>, failed: RwSignal<bool>) {
    match LocationWatch::start(position, failed) {
        Some(watch) => on_cleanup(move || drop(watch)),
        None => failed.set(true),
    }
}

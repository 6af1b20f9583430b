//! Map Interaction Surface
//!
//! Thin bindings to the Google Maps JS SDK plus the Leptos component that
//! drives it. Tile rendering, marker drawing and gesture handling stay in
//! the SDK; this module only moves coordinates in and out.

pub mod js;
pub mod loader;
pub mod view;

pub use view::{MapView, MarkerIcon, MarkerSpec, PolylineSpec, CURRENT_LOCATION_ICON};

//! Location Status Banner
//!
//! Overlay notice in the map corner while the device position is being
//! acquired, or persistently once acquisition failed.

use leptos::*;

use crate::geo::Coordinate;

/// Geolocation status overlay; renders nothing once a fix is in
#[component]
pub fn LocationBanner(
    #[prop(into)] current: Signal<Option<Coordinate>>,
    #[prop(into)] failed: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if failed.get() {
                view! {
                    <div class="pointer-events-none absolute left-4 top-4 rounded bg-white/90 px-3 py-2 text-sm text-red-600 shadow">
                        "現在地を取得できませんでした"
                    </div>
                }.into_view()
            } else if current.get().is_none() {
                view! {
                    <div class="pointer-events-none absolute left-4 top-4 rounded bg-white/90 px-3 py-2 text-sm text-neutral-600 shadow">
                        "現在地を取得しています…"
                    </div>
                }.into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}

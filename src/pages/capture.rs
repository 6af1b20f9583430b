//! Capture Page
//!
//! Demo flow for the photo wall: uploads stay in the page session as
//! object URLs, the tally runs five minutes, and the sidebar starts with
//! two sample kitchen-car entries.

use std::rc::Rc;

use leptos::*;

use super::flow::UploadFlow;
use crate::api::PreviewSink;
use crate::components::{EntryList, LocationBanner, UploadModal};
use crate::data::{DEFAULT_CENTER, EVENT_BOUNDS};
use crate::geo::Coordinate;
use crate::map::{MapView, MarkerSpec, CURRENT_LOCATION_ICON};
use crate::state::upload::UploadedEntry;

/// Observation window on the capture page
const CAPTURE_DURATION_SECONDS: u32 = 5 * 60;

/// Capture page component
#[component]
pub fn Capture() -> impl IntoView {
    let flow = UploadFlow::new(
        Rc::new(PreviewSink),
        CAPTURE_DURATION_SECONDS,
        seeded_entries(),
    );
    let current = flow.current;
    let form = flow.form;

    // Memoized so comment/file edits inside the form don't ripple into
    // map re-centering and marker redraws
    let pending = create_memo(move |_| form.with(|f| f.location()));

    let center = Signal::derive(move || {
        pending
            .get()
            .or_else(|| current.get())
            .or(Some(DEFAULT_CENTER))
    });
    let zoom = Signal::derive(move || {
        if pending.get().is_some() || current.get().is_some() {
            18.0
        } else {
            17.0
        }
    });

    let markers = Signal::derive(move || {
        let mut specs = Vec::new();
        if let Some(coordinate) = current.get() {
            specs.push(MarkerSpec::at(coordinate).icon(CURRENT_LOCATION_ICON));
        }
        if let Some(coordinate) = pending.get() {
            specs.push(MarkerSpec::at(coordinate).title("選択した地点"));
        }
        specs
    });

    view! {
        <div class="flex w-full justify-start gap-4">
            <div class="relative h-screen w-2/3 shrink-0 overflow-hidden rounded-lg border border-neutral-200 shadow-sm">
                <MapView
                    bounds=EVENT_BOUNDS
                    center=center
                    zoom=zoom
                    markers=markers
                    on_click=flow.map_click()
                />
                <LocationBanner current=current failed=flow.location_failed />
            </div>

            <EntryList entries=flow.entries on_locate=flow.locate() />

            <UploadModal
                form=form
                session=flow.session
                duration_seconds=CAPTURE_DURATION_SECONDS
                on_submit=flow.submit()
                on_start_timer=flow.start_timer()
                on_cancel=flow.cancel()
            />
        </div>
    }
}

/// Sample entries the demo wall opens with
fn seeded_entries() -> Vec<UploadedEntry> {
    vec![
        UploadedEntry {
            id: "prefill-kitchen-car".to_string(),
            image_url:
                "https://kitchen-car.com/kumiai/_wp/wp-content/uploads/2021/07/ae9290a5afea9657fe51c64f7524ca0c.jpg"
                    .to_string(),
            comment:
                "昼下がりに立ち寄ったら、揚げたてのポテトが香ばしくて行列でも待つ価値ありでした。スタッフさんの掛け声も元気で、つい追加オーダー！"
                    .to_string(),
            location: Coordinate::new(34.7053, 137.7321),
        },
        UploadedEntry {
            id: "prefill-aqula".to_string(),
            image_url: "https://www.aqula.co.jp/wp01/wp-content/uploads/2017/08/IMG_0972.jpg"
                .to_string(),
            comment:
                "夜のライトに照らされたキッチンカーがとても映えていて、チーズドッグのとろけ具合が最高でした。写真を撮りたくなる雰囲気！"
                    .to_string(),
            location: Coordinate::new(34.7064, 137.7289),
        },
    ]
}

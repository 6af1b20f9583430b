//! Survey Page
//!
//! The on-site survey flow: click the map where a photo was taken, upload
//! it with a comment, and tally passers-by for fifteen minutes. Photos go
//! to the storage service when it is configured.

use std::rc::Rc;

use leptos::*;

use super::flow::UploadFlow;
use crate::api::{PreviewSink, StorageClient, StorageSink, UploadSink};
use crate::components::{EntryList, LocationBanner, UploadModal};
use crate::data::EVENT_BOUNDS;
use crate::map::{MapView, MarkerSpec, CURRENT_LOCATION_ICON};

/// Observation window on the survey page
const SURVEY_DURATION_SECONDS: u32 = 15 * 60;

/// Survey page component
#[component]
pub fn Survey() -> impl IntoView {
    let sink: Rc<dyn UploadSink> = match StorageClient::from_config() {
        Some(client) => Rc::new(StorageSink::new(client)),
        None => {
            web_sys::console::warn_1(&"ストレージ未設定のためデモモードで動作します".into());
            Rc::new(PreviewSink)
        }
    };

    let flow = UploadFlow::new(sink, SURVEY_DURATION_SECONDS, Vec::new());
    let current = flow.current;
    let form = flow.form;

    // Memoized so comment/file edits inside the form don't ripple into
    // map re-centering and marker redraws
    let pending = create_memo(move |_| form.with(|f| f.location()));

    let center = Signal::derive(move || pending.get().or_else(|| current.get()));
    let zoom = Signal::derive(|| 16.0);

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
                duration_seconds=SURVEY_DURATION_SECONDS
                on_submit=flow.submit()
                on_start_timer=flow.start_timer()
                on_cancel=flow.cancel()
            />
        </div>
    }
}

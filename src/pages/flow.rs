//! Upload Page Wiring
//!
//! The survey and capture pages share one flow: a map click opens the
//! modal, the tally runs under it, and a submit hands the photo to the
//! page's sink. Every piece of state is owned by the mounting view.

use std::rc::Rc;

use leptos::*;

use crate::api::UploadSink;
use crate::geo::Coordinate;
use crate::state::geolocation::track_location;
use crate::state::tally::{DemographicCounts, TallySession};
use crate::state::ticker::TallyTicker;
use crate::state::upload::{random_id, UploadForm, UploadedEntry};

/// Per-view state and actions of an upload page
pub struct UploadFlow {
    pub current: RwSignal<Option<Coordinate>>,
    pub location_failed: RwSignal<bool>,
    pub form: RwSignal<UploadForm<web_sys::File>>,
    pub session: RwSignal<TallySession>,
    pub entries: RwSignal<Vec<UploadedEntry>>,
    ticker: TallyTicker,
    on_expire: Callback<DemographicCounts>,
    sink: Rc<dyn UploadSink>,
    duration_seconds: u32,
}

impl UploadFlow {
    /// Wire up the flow inside the mounting view's scope, including the
    /// geolocation watch (released again on teardown).
    pub fn new(
        sink: Rc<dyn UploadSink>,
        duration_seconds: u32,
        seed_entries: Vec<UploadedEntry>,
    ) -> Self {
        let current = create_rw_signal(None);
        let location_failed = create_rw_signal(false);
        let form = create_rw_signal(UploadForm::default());
        let session = create_rw_signal(TallySession::default());
        let entries = create_rw_signal(seed_entries);

        track_location(current, location_failed);

        let on_expire = Callback::new(move |counts: DemographicCounts| {
            let location = form.with_untracked(|f| f.location());
            log_terminal_record(duration_seconds, &counts, location);
        });

        Self {
            current,
            location_failed,
            form,
            session,
            entries,
            ticker: TallyTicker::new(),
            on_expire,
            sink,
            duration_seconds,
        }
    }

    /// Map click: target the spot, open the modal, begin a fresh
    /// observation cycle
    pub fn map_click(&self) -> Callback<Coordinate> {
        let form = self.form;
        let session = self.session;
        let ticker = self.ticker;
        Callback::new(move |coordinate| {
            form.update(|f| f.open_at(coordinate));
            session.update(|s| s.reset());
            ticker.cancel();
        })
    }

    /// Entry-list click: re-center the map on the entry's coordinate
    pub fn locate(&self) -> Callback<Coordinate> {
        let form = self.form;
        Callback::new(move |coordinate| form.update(|f| f.focus_location(coordinate)))
    }

    /// Submit: validate, write through the sink, append the entry
    pub fn submit(&self) -> Callback<()> {
        let form = self.form;
        let session = self.session;
        let entries = self.entries;
        let ticker = self.ticker;
        let sink = Rc::clone(&self.sink);

        Callback::new(move |_| {
            let Some(job) = form.try_update(|f| f.begin_submit()).flatten() else {
                return;
            };

            let sink = Rc::clone(&sink);
            spawn_local(async move {
                match sink.store(&job.file, job.location).await {
                    Ok(image_url) => {
                        form.update(|f| f.succeed());
                        entries.update(|list| {
                            list.push(UploadedEntry {
                                id: random_id(),
                                image_url,
                                comment: job.comment,
                                location: job.location,
                            });
                        });
                        session.update(|s| s.reset());
                        ticker.cancel();
                    }
                    Err(message) => form.update(|f| f.fail(message)),
                }
            });
        })
    }

    /// Start the page's fixed-duration countdown; a no-op while one runs
    pub fn start_timer(&self) -> Callback<()> {
        let session = self.session;
        let ticker = self.ticker;
        let duration_seconds = self.duration_seconds;
        let on_expire = self.on_expire;
        Callback::new(move |_| ticker.start(session, duration_seconds, on_expire))
    }

    /// Close the modal without uploading; the entry list stays untouched
    pub fn cancel(&self) -> Callback<()> {
        let form = self.form;
        let session = self.session;
        let ticker = self.ticker;
        Callback::new(move |_| {
            form.update(|f| f.cancel());
            session.update(|s| s.reset());
            ticker.cancel();
        })
    }
}

/// Console record emitted once per finished observation window
fn log_terminal_record(
    duration_seconds: u32,
    counts: &DemographicCounts,
    location: Option<Coordinate>,
) {
    let record = serde_json::json!({
        "counts": counts.to_json(),
        "location": location,
        "finishedAt": chrono::Utc::now().to_rfc3339(),
    });

    web_sys::console::log_2(
        &format!("{}分の計測が終了しました", duration_seconds / 60).into(),
        &record.to_string().into(),
    );
}

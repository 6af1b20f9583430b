//! Tally Ticker
//!
//! One-second drive for a [`TallySession`]. The interval is owned by the
//! reactive scope, replaced whenever a new observation cycle starts, and
//! cancels itself once the session stops.

use gloo_timers::callback::{Interval, Timeout};
use leptos::*;

use super::tally::{DemographicCounts, TallySession, Tick};

/// Handle on the per-view countdown interval
#[derive(Clone, Copy)]
pub struct TallyTicker {
    handle: StoredValue<Option<Interval>>,
}

impl TallyTicker {
    /// Create the ticker inside the owning view's scope; the interval is
    /// dropped (and cleared) with the scope.
    pub fn new() -> Self {
        Self {
            handle: store_value(None),
        }
    }

    /// Start the session countdown and the interval behind it.
    ///
    /// A session already running is left untouched. `on_expire` receives
    /// the final counts snapshot exactly once, when the countdown hits
    /// zero.
    pub fn start(
        &self,
        session: RwSignal<TallySession>,
        duration_seconds: u32,
        on_expire: Callback<DemographicCounts>,
    ) {
        let started = session
            .try_update(|s| s.start(duration_seconds))
            .unwrap_or(false);
        if !started {
            return;
        }

        let ticker = *self;
        let interval = Interval::new(1_000, move || {
            let outcome = session.try_update(|s| s.tick()).unwrap_or(Tick::Idle);
            match outcome {
                Tick::Running(_) => {}
                Tick::Idle => ticker.cancel(),
                Tick::Expired(counts) => {
                    on_expire.call(counts);
                    ticker.cancel();
                }
            }
        });

        // Replacing drops a leftover interval from an earlier cycle
        self.handle.update_value(|slot| *slot = Some(interval));
    }

    /// Cancel on the next task rather than mid-callback, so the interval's
    /// closure is never freed while executing.
    pub fn cancel(&self) {
        let handle = self.handle;
        Timeout::new(0, move || {
            // The owning scope may already be gone; a disposed handle means
            // the interval was dropped with it.
            handle.try_update_value(|slot| {
                slot.take();
            });
        })
        .forget();
    }
}

impl Default for TallyTicker {
    fn default() -> Self {
        Self::new()
    }
}

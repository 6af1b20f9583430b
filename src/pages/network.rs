//! Network Page
//!
//! Booth layout as a node/edge overlay. The whole layout follows the
//! device position, shifting by one delta off the booth centroid so the
//! relative geometry stays intact. The featured booth opens its survey
//! report.

use leptos::*;

use crate::components::{BoothReportModal, LocationBanner};
use crate::data::report::FEATURED_BOOTH_REPORT;
use crate::data::{
    base_center, node_positions, EVENT_BOUNDS, FEATURED_BOOTH_ID, FESTIVAL_EDGES, FESTIVAL_NODES,
};
use crate::geo::Coordinate;
use crate::map::{MapView, MarkerSpec, PolylineSpec, CURRENT_LOCATION_ICON};
use crate::state::geolocation::track_location;

/// Network page component
#[component]
pub fn Network() -> impl IntoView {
    let current = create_rw_signal(None::<Coordinate>);
    let location_failed = create_rw_signal(false);
    track_location(current, location_failed);

    let report_open = create_rw_signal(false);
    let open_report = Callback::new(move |_| report_open.set(true));

    let base = base_center();
    let positions = create_memo(move |_| node_positions(current.get().unwrap_or(base)));

    let center = Signal::derive(move || Some(current.get().unwrap_or(base)));
    let zoom = Signal::derive(move || if current.get().is_some() { 18.0 } else { 17.0 });

    let markers = Signal::derive(move || {
        let positions = positions.get();
        let mut specs = Vec::new();

        if let Some(coordinate) = current.get() {
            specs.push(MarkerSpec::at(coordinate).icon(CURRENT_LOCATION_ICON));
        }

        for node in &FESTIVAL_NODES {
            let Some(position) = positions.get(node.id) else {
                continue;
            };
            let mut spec = MarkerSpec::at(*position).label(node.label).title(node.label);
            if node.id == FEATURED_BOOTH_ID {
                spec = spec.on_click(open_report);
            }
            specs.push(spec);
        }

        specs
    });

    let polylines = Signal::derive(move || {
        let positions = positions.get();
        FESTIVAL_EDGES
            .iter()
            .filter_map(|edge| {
                Some(PolylineSpec {
                    from: *positions.get(edge.source)?,
                    to: *positions.get(edge.target)?,
                    stroke_weight: edge.stroke_weight,
                })
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="relative h-screen w-full overflow-hidden rounded-lg border border-neutral-200 shadow-sm">
            <MapView
                bounds=EVENT_BOUNDS
                center=center
                zoom=zoom
                markers=markers
                polylines=polylines
            />
            <LocationBanner current=current failed=location_failed />
            <BoothReportModal open=report_open report=&FEATURED_BOOTH_REPORT />
        </div>
    }
}

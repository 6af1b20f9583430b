//! Tally Grid Component
//!
//! The tap-to-count gender x age table. Cells only respond while a
//! countdown is in progress; shading deepens with the count.

use leptos::*;

use crate::heatmap::tally_cell_class;
use crate::state::tally::{AgeGroup, Gender, TallySession};

/// Tap-to-count table over a tally session
#[component]
pub fn TallyGrid(session: RwSignal<TallySession>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full border-collapse text-sm">
                <thead>
                    <tr>
                        <th class="w-24 border border-neutral-200 bg-neutral-50 px-3 py-2 text-left font-medium text-neutral-700">
                            "性別"
                        </th>
                        {AgeGroup::ALL
                            .into_iter()
                            .map(|age| view! {
                                <th class="border border-neutral-200 bg-neutral-50 px-3 py-2 text-center font-medium text-neutral-700">
                                    {age.label()}
                                </th>
                            })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {Gender::ALL
                        .into_iter()
                        .map(|gender| view! {
                            <tr>
                                <th class="border border-neutral-200 bg-neutral-50 px-3 py-2 text-left font-medium text-neutral-700">
                                    {gender.label()}
                                </th>
                                {AgeGroup::ALL
                                    .into_iter()
                                    .map(|age| view! {
                                        <td class="border border-neutral-200 px-2 py-2 text-center">
                                            <TallyCell session=session gender=gender age=age />
                                        </td>
                                    })
                                    .collect_view()}
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// One tap target of the grid
#[component]
fn TallyCell(session: RwSignal<TallySession>, gender: Gender, age: AgeGroup) -> impl IntoView {
    let count = move || session.with(|s| s.counts().get(gender, age));
    let running = move || session.with(|s| s.is_running());

    view! {
        <button
            type="button"
            on:click=move |_| session.update(|s| s.increment(gender, age))
            disabled=move || !running()
            class=move || {
                format!(
                    "flex w-full flex-col items-center justify-center rounded border border-orange-200 px-2 py-2 \
                     transition-colors focus:outline-none focus:ring-2 focus:ring-orange-500 \
                     disabled:cursor-not-allowed disabled:opacity-60 {}",
                    tally_cell_class(count(), running()),
                )
            }
        >
            <span class="text-base font-semibold">{count}</span>
        </button>
    }
}

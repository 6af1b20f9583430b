//! Booth Report Modal
//!
//! The featured booth's pre-computed survey: takeaways, the heat-mapped
//! gender x age mesh table with totals, and review excerpts. Closes on the
//! close button, a backdrop click, or Escape/Enter/Space.

use leptos::*;

use crate::data::report::{column_label, BoothReport};
use crate::heatmap::{mesh_cell_style, mesh_text_class};
use crate::state::tally::AgeGroup;

/// Survey report modal for one booth
#[component]
pub fn BoothReportModal(open: RwSignal<bool>, report: &'static BoothReport) -> impl IntoView {
    view! {
        {move || {
            if !open.get() {
                return view! {}.into_view();
            }

            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 px-4 py-8"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=move |ev| {
                        // Only a click on the backdrop itself closes
                        if ev.target() == ev.current_target() {
                            open.set(false);
                        }
                    }
                    on:keydown=move |ev| {
                        if matches!(ev.key().as_str(), "Escape" | "Enter" | " ") {
                            open.set(false);
                        }
                    }
                >
                    <div class="relative w-full max-w-2xl max-h-[90vh] overflow-y-auto rounded-lg bg-white shadow-xl">
                        <button
                            type="button"
                            class="absolute right-4 top-4 rounded-full bg-neutral-100 px-3 py-1 text-sm text-neutral-600 transition hover:bg-neutral-200"
                            on:click=move |_| open.set(false)
                        >
                            "閉じる"
                        </button>
                        <div class="flex flex-col gap-6 p-6 sm:p-8">
                            <div>
                                <h2 class="text-xl font-semibold text-neutral-900 sm:text-2xl">
                                    {report.title}
                                </h2>
                                <p class="mt-2 text-xs font-semibold text-indigo-600 sm:text-sm">
                                    {report.period}
                                </p>
                                <p class="mt-3 text-sm leading-relaxed text-neutral-700 sm:text-base">
                                    {report.summary}
                                </p>
                            </div>

                            <section>
                                <h3 class="text-sm font-semibold text-neutral-800 sm:text-base">
                                    "来場者分析サマリー"
                                </h3>
                                <ul class="mt-3 space-y-2 text-sm text-neutral-700 sm:text-base">
                                    {report.takeaways.iter().map(|item| view! {
                                        <li class="flex items-start gap-2">
                                            <span class="mt-1 h-1.5 w-1.5 shrink-0 rounded-full bg-indigo-500" />
                                            <span class="leading-relaxed">{*item}</span>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </section>

                            <MeshTable report=report />

                            <section>
                                <h3 class="text-sm font-semibold text-neutral-800 sm:text-base">
                                    "口コミハイライト"
                                </h3>
                                <ul class="mt-3 space-y-3">
                                    {report.reviews.iter().map(|review| view! {
                                        <li class="rounded-lg border border-neutral-200 bg-neutral-50/70 p-4">
                                            <p class="text-sm leading-relaxed text-neutral-800 sm:text-base">
                                                {review.comment}
                                            </p>
                                        </li>
                                    }).collect_view()}
                                </ul>
                            </section>
                        </div>
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

/// Heat-mapped gender x age distribution table with totals
#[component]
fn MeshTable(report: &'static BoothReport) -> impl IntoView {
    let max = report.max_count();
    let column_totals = report.column_totals();
    let grand_total = report.grand_total();

    view! {
        <section>
            <h3 class="text-sm font-semibold text-neutral-800 sm:text-base">"男女×年代の分布"</h3>
            <p class="mt-2 text-xs text-neutral-500 sm:text-sm">
                "人数が多いセルほど濃く表示されるメッシュヒートマップです。"
            </p>
            <div class="mt-3 overflow-x-auto">
                <table class="min-w-full border border-neutral-200 text-sm sm:text-base">
                    <thead>
                        <tr class="bg-neutral-50 text-xs font-semibold uppercase tracking-wide text-neutral-500 sm:text-sm">
                            <th class="border border-neutral-200 px-3 py-2 text-left text-neutral-600">
                                "性別"
                            </th>
                            {AgeGroup::ALL.into_iter().map(|age| view! {
                                <th class="border border-neutral-200 px-3 py-2 text-center text-neutral-600">
                                    {column_label(age)}
                                </th>
                            }).collect_view()}
                            <th class="border border-neutral-200 px-3 py-2 text-center text-neutral-600">
                                "合計"
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {report.distribution.iter().map(|row| view! {
                            <tr class="odd:bg-white even:bg-neutral-50/70">
                                <th class="border border-neutral-200 px-3 py-2 text-left text-sm font-semibold text-neutral-800 sm:text-base">
                                    {row.gender.label()}
                                </th>
                                {AgeGroup::ALL.into_iter().map(|age| {
                                    let count = row.count(age);
                                    view! {
                                        <td
                                            class=format!(
                                                "border border-neutral-200 px-3 py-2 text-center font-medium {}",
                                                mesh_text_class(count, max),
                                            )
                                            style=mesh_cell_style(count, max)
                                        >
                                            {count}
                                        </td>
                                    }
                                }).collect_view()}
                                <td class="border border-neutral-200 px-3 py-2 text-center font-semibold text-neutral-900">
                                    {row.total()}
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                    <tfoot>
                        <tr class="bg-neutral-100 text-sm font-semibold text-neutral-800">
                            <th class="border border-neutral-200 px-3 py-2 text-left">"合計"</th>
                            {column_totals.into_iter().map(|total| view! {
                                <td class="border border-neutral-200 px-3 py-2 text-center">{total}</td>
                            }).collect_view()}
                            <td class="border border-neutral-200 px-3 py-2 text-center">{grand_total}</td>
                        </tr>
                    </tfoot>
                </table>
            </div>
        </section>
    }
}

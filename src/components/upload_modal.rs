//! Upload Modal Component
//!
//! The modal a map click opens: photo picker, optional comment, the tally
//! grid and its countdown. Submit and cancel are disabled for the duration
//! of the storage write.

use leptos::*;

use super::TallyGrid;
use crate::state::tally::{format_time, TallySession};
use crate::state::upload::UploadForm;

/// Photo upload modal over a form state machine
#[component]
pub fn UploadModal(
    form: RwSignal<UploadForm<web_sys::File>>,
    session: RwSignal<TallySession>,
    /// Fixed observation window for this page, in seconds
    duration_seconds: u32,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_start_timer: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        match input.files().and_then(|files| files.get(0)) {
            Some(file) => form.update(|f| f.select_file(file)),
            None => form.update(|f| f.clear_file()),
        }
    };

    // Memoized so field edits update in place instead of rebuilding the
    // modal DOM (and dropping input focus)
    let is_open = create_memo(move |_| form.with(|f| f.is_open()));

    view! {
        {move || {
            if !is_open.get() {
                return view! {}.into_view();
            }

            view! {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                    <div class="w-full max-w-md max-h-[90vh] overflow-y-auto rounded-lg bg-white p-6 shadow-xl">
                        <h2 class="text-lg font-semibold text-neutral-800">"写真をアップロード"</h2>

                        {move || form.with(|f| f.location()).map(|location| view! {
                            <p class="mt-2 text-sm text-neutral-600">
                                "座標: " {location.display()}
                            </p>
                        })}

                        // Photo picker
                        <div class="mt-4 rounded border border-neutral-200 bg-neutral-50 px-4 py-3">
                            <h3 class="text-sm font-medium text-neutral-700">"画像アップロード"</h3>
                            <label
                                class="mt-3 block text-xs font-medium text-neutral-600"
                                for="photo-upload-input"
                            >
                                "画像ファイルを選択"
                            </label>
                            <input
                                accept="image/*"
                                class="mt-2 w-full text-sm text-neutral-700"
                                id="photo-upload-input"
                                type="file"
                                on:change=on_file_change
                            />

                            <label
                                class="mt-4 block text-xs font-medium text-neutral-600"
                                for="photo-comment-input"
                            >
                                "コメント（任意）"
                            </label>
                            <textarea
                                class="mt-2 h-24 w-full resize-none rounded border border-neutral-200 px-3 py-2 text-sm text-neutral-700 focus:border-orange-400 focus:outline-none focus:ring-2 focus:ring-orange-200"
                                id="photo-comment-input"
                                placeholder="撮影時の様子やメモを入力してください"
                                maxlength="500"
                                prop:value=move || form.with(|f| f.comment().to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.set_comment(event_target_value(&ev)))
                                }
                            />

                            <div class="mt-4 flex justify-end">
                                <button
                                    class="rounded bg-blue-600 px-3 py-2 text-sm font-medium text-white transition hover:bg-blue-500 disabled:cursor-not-allowed disabled:bg-blue-300"
                                    type="button"
                                    on:click=move |_| on_submit.call(())
                                    disabled=move || form.with(|f| !f.has_file() || f.is_uploading())
                                >
                                    {move || if form.with(|f| f.is_uploading()) {
                                        "アップロード中…"
                                    } else {
                                        "アップロード"
                                    }}
                                </button>
                            </div>
                        </div>

                        // Visitor tally
                        <div class="mt-6 rounded border border-neutral-200 bg-neutral-50 px-4 py-3">
                            <h3 class="text-sm font-medium text-neutral-700">"性別×年代カウント"</h3>
                            <div class="mt-3">
                                <TallyGrid session=session />
                            </div>

                            <div class="mt-4 rounded border border-neutral-200 bg-white px-3 py-2">
                                <div class="flex items-center justify-between gap-4">
                                    <div>
                                        <p class="text-xs text-neutral-500">
                                            {move || if session.with(|s| s.is_running()) {
                                                "計測中…"
                                            } else {
                                                "未開始"
                                            }}
                                        </p>
                                        <p class="text-lg font-semibold text-neutral-800">
                                            {move || {
                                                let seconds = session
                                                    .with(|s| s.remaining())
                                                    .unwrap_or(duration_seconds);
                                                format_time(seconds)
                                            }}
                                        </p>
                                    </div>
                                    <button
                                        class="rounded bg-green-600 px-3 py-2 text-sm font-medium text-white transition hover:bg-green-500 disabled:cursor-not-allowed disabled:bg-neutral-300"
                                        type="button"
                                        on:click=move |_| on_start_timer.call(())
                                        disabled=move || session.with(|s| s.is_running())
                                    >
                                        {format!("{}分スタート", duration_seconds / 60)}
                                    </button>
                                </div>
                                <p class="mt-2 text-xs text-neutral-500">
                                    "計測終了後にカウントと座標を自動でコンソールに出力します。"
                                </p>
                            </div>
                        </div>

                        {move || form.with(|f| f.error().map(str::to_string)).map(|message| view! {
                            <p class="mt-3 text-sm text-red-600">{message}</p>
                        })}

                        <div class="mt-6 flex justify-end">
                            <button
                                class="rounded border border-neutral-300 px-3 py-2 text-sm text-neutral-600 transition hover:bg-neutral-100 disabled:cursor-not-allowed disabled:opacity-70"
                                type="button"
                                on:click=move |_| on_cancel.call(())
                                disabled=move || form.with(|f| f.is_uploading())
                            >
                                "キャンセル"
                            </button>
                        </div>
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

//! Entry List Component
//!
//! Sidebar of uploaded photos. Entries appear in upload order and stay
//! put; clicking an entry's coordinate re-centers the map there.

use leptos::*;

use crate::geo::Coordinate;
use crate::state::upload::UploadedEntry;

/// Sidebar list of uploaded entries
#[component]
pub fn EntryList(
    #[prop(into)] entries: Signal<Vec<UploadedEntry>>,
    #[prop(into)] on_locate: Callback<Coordinate>,
) -> impl IntoView {
    view! {
        <aside class="flex h-screen w-1/3 shrink-0 flex-col overflow-hidden rounded-lg border border-neutral-200 bg-white shadow-sm">
            <div class="border-b border-neutral-200 px-4 py-3">
                <h2 class="text-base font-semibold text-neutral-800">"アップロード一覧"</h2>
                <p class="mt-1 text-xs text-neutral-500">
                    "アップロードした画像・コメント・座標がここに表示されます。"
                </p>
            </div>
            <div class="flex-1 overflow-y-auto px-4 py-4">
                {move || {
                    let list = entries.get();
                    if list.is_empty() {
                        view! {
                            <p class="text-sm text-neutral-500">"まだアップロードはありません。"</p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <ul class="grid gap-4 sm:grid-cols-2 2xl:grid-cols-3">
                                {list
                                    .into_iter()
                                    .map(|entry| view! { <EntryCard entry=entry on_locate=on_locate /> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view()
                    }
                }}
            </div>
        </aside>
    }
}

/// One uploaded photo card
#[component]
fn EntryCard(entry: UploadedEntry, on_locate: Callback<Coordinate>) -> impl IntoView {
    let location = entry.location;
    let comment = if entry.comment.is_empty() {
        "コメントなし".to_string()
    } else {
        entry.comment.clone()
    };

    view! {
        <li class="flex flex-col overflow-hidden rounded border border-neutral-200 bg-neutral-50">
            <div class="relative aspect-square w-full overflow-hidden bg-neutral-200">
                <img
                    src=entry.image_url
                    alt="アップロードした写真"
                    class="h-full w-full object-cover"
                />
            </div>
            <div class="flex flex-1 flex-col gap-2 px-3 pb-3 pt-2">
                <p class="whitespace-pre-wrap break-words text-sm text-neutral-700">{comment}</p>
                <button
                    class="w-full rounded border border-transparent bg-blue-50 px-2 py-1 text-left text-xs font-medium text-blue-600 transition hover:border-blue-200 hover:bg-blue-100"
                    type="button"
                    on:click=move |_| on_locate.call(location)
                >
                    "座標: " {location.display()}
                </button>
            </div>
        </li>
    }
}

//! App Root Component
//!
//! Main application component with routing.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::{Capture, Network, Survey};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen bg-neutral-100 text-neutral-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-6">
                    <Routes>
                        <Route path="/" view=Survey />
                        <Route path="/capture" view=Capture />
                        <Route path="/network" view=Network />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🏮"</div>
            <h1 class="text-3xl font-bold mb-2">"ページが見つかりません"</h1>
            <p class="text-neutral-500 mb-6">"お探しのページは存在しません。"</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-500 text-white rounded-lg font-medium transition-colors"
            >
                "マップへ戻る"
            </A>
        </div>
    }
}

//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-neutral-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-14">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🎪"</span>
                        <span class="text-lg font-bold text-neutral-900">"祭りマップ"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="調査マップ" />
                        <NavLink href="/capture" label="フォト投稿" />
                        <NavLink href="/network" label="ブースマップ" />
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-neutral-600 hover:text-neutral-900 hover:bg-neutral-100 transition-colors"
            active_class="bg-neutral-100 text-neutral-900 font-medium"
        >
            {label}
        </A>
    }
}

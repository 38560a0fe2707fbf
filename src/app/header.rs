use leptos::prelude::*;

use crate::portfolio::NAV_ITEMS;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-50 shadow-lg bg-[#1a1033]/90 backdrop-blur">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <a href="/" class="text-xl font-bold text-purple-400">
                        "Nightcrawler"
                    </a>
                    <nav class="flex items-center gap-6">
                        {NAV_ITEMS
                            .into_iter()
                            .map(|(href, label)| {
                                view! {
                                    <a
                                        href=href
                                        class="text-sm font-medium text-gray-400 hover:text-gray-200 transition-colors"
                                    >
                                        {label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}

use leptos::prelude::*;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 text-center text-sm text-gray-500">
            {format!("© {BUILD_YEAR} Nightcrawler. Built with Rust and Leptos.")}
        </footer>
    }
}

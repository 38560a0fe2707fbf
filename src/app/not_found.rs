use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    set_not_found_status();

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-[70vh] flex flex-col items-center justify-center p-4 text-center">
            <div class="text-9xl font-bold text-purple-400 mb-6">"404"</div>
            <h1 class="text-4xl font-bold mb-6">"Oops! Page Not Found"</h1>
            <p class="text-lg text-gray-400 mb-8 max-w-xl">
                "The page you're looking for might have been removed, had its name changed, or is temporarily unavailable."
            </p>
            <a
                href="/"
                class="px-6 py-3 rounded-full bg-purple-500/20 hover:bg-purple-500/30 text-purple-300 font-medium transition-colors"
            >
                "← Back to Home"
            </a>
        </div>
    }
}

// only the server can set the response status
#[cfg(feature = "ssr")]
fn set_not_found_status() {
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }
}

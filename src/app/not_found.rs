use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::theme::use_theme;

#[component]
pub fn NotFound() -> impl IntoView {
    let theme = use_theme();

    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-screen flex items-center justify-center px-4 relative z-10">
            <div class="text-center max-w-md">
                <h1 class=move || {
                    format!("text-6xl font-bold mb-4 {}", theme.palette().accent)
                }>"404"</h1>
                <h2 class=move || {
                    format!("text-2xl font-semibold mb-2 {}", theme.palette().heading)
                }>"Page Not Found"</h2>
                <p class=move || format!("mb-8 {}", theme.palette().text)>
                    "The page you are looking for doesn't exist or has been moved."
                </p>
                <A href="/">
                    <span class=move || {
                        format!(
                            "inline-block px-6 py-3 font-medium rounded-lg shadow-md transition-colors {}",
                            theme.palette().accent_bg,
                        )
                    }>"Return to Home"</span>
                </A>
            </div>
        </div>
    }
}

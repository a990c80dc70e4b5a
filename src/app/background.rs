use leptos::{either::Either, prelude::*};

use super::theme::use_theme;

/// Fixed decoration behind the page; exactly one variant is mounted.
#[component]
pub fn AnimatedBackground() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="fixed inset-0 -z-10 overflow-hidden pointer-events-none transition-all duration-1000">
            {move || {
                if theme.mode().is_dark() {
                    Either::Left(view! { <NightSky /> })
                } else {
                    Either::Right(view! { <Ocean /> })
                }
            }}
        </div>
    }
}

#[component]
fn NightSky() -> impl IntoView {
    view! {
        <div class="absolute inset-0 bg-gray-900"></div>
        <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl animate-pulse"></div>
        <div
            class="absolute top-3/4 right-1/4 w-80 h-80 bg-purple-500/5 rounded-full blur-3xl animate-pulse"
            style="animation-delay: 1s"
        ></div>
        <div
            class="absolute top-1/2 left-3/4 w-64 h-64 bg-indigo-500/5 rounded-full blur-3xl animate-pulse"
            style="animation-delay: 2s"
        ></div>
        <div class="absolute inset-0 bg-gradient-to-br from-transparent via-blue-500/[0.02] to-purple-500/[0.02]"></div>
        <div class="absolute inset-0 bg-grid-pattern opacity-[0.02]"></div>
    }
}

#[component]
fn Ocean() -> impl IntoView {
    view! {
        <div class="absolute inset-0 bg-gradient-to-br from-sky-50 via-blue-50 to-indigo-100"></div>
        <div class="absolute bottom-0 left-0 right-0 h-64 bg-gradient-to-t from-blue-100/30 to-transparent"></div>
        <div class="absolute bottom-0 left-0 right-0 h-32 bg-gradient-to-t from-cyan-100/20 to-transparent"></div>
        <div class="absolute top-1/3 left-1/5 w-72 h-72 bg-blue-200/20 rounded-full blur-2xl animate-pulse"></div>
        <div
            class="absolute top-2/3 right-1/5 w-80 h-80 bg-cyan-200/15 rounded-full blur-2xl animate-pulse"
            style="animation-delay: 1.5s"
        ></div>
        <div
            class="absolute top-1/2 left-2/3 w-60 h-60 bg-teal-200/20 rounded-full blur-2xl animate-pulse"
            style="animation-delay: 3s"
        ></div>
    }
}

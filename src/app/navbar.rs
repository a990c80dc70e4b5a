use leptos::prelude::*;

use super::scroll::use_active_section;
use super::theme::{use_theme, ThemeToggle};
use crate::content::OWNER_NAME;
use crate::section::Section;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();
    let active = use_active_section();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class=move || {
            format!("sticky top-0 z-50 backdrop-blur-sm shadow-sm {}", theme.palette().nav)
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href="/"
                        class=move || format!("font-bold text-xl {}", theme.palette().accent)
                    >
                        {OWNER_NAME}
                    </a>
                    <div class="hidden md:flex items-center space-x-4 ml-10">
                        {Section::PAGE_ORDER
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <NavItem
                                        section
                                        is_active=Signal::derive(move || active.get() == section)
                                    />
                                }
                            })
                            .collect_view()}
                        <ThemeToggle />
                    </div>
                    <div class="md:hidden flex items-center gap-2">
                        <ThemeToggle />
                        <button
                            type="button"
                            class=move || {
                                format!(
                                    "inline-flex items-center justify-center p-2 rounded-md focus:outline-none {}",
                                    theme.palette().nav_link,
                                )
                            }
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            <span class="sr-only">"Open main menu"</span>
                            <span class="text-2xl leading-none">
                                {move || if menu_open.get() { "✕" } else { "☰" }}
                            </span>
                        </button>
                    </div>
                </div>
            </div>
            <div class=move || if menu_open.get() { "md:hidden" } else { "hidden" }>
                <div class="px-2 pt-2 pb-3 space-y-1 sm:px-3 shadow-md">
                    {Section::PAGE_ORDER
                        .into_iter()
                        .map(|section| {
                            view! {
                                <MobileNavItem
                                    section
                                    is_active=Signal::derive(move || active.get() == section)
                                    on_select=move || set_menu_open.set(false)
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </nav>
    }
}

/// Desktop link with an underline marking the active section.
#[component]
fn NavItem(section: Section, is_active: Signal<bool>) -> impl IntoView {
    let theme = use_theme();
    view! {
        <a
            href=section.href()
            class=move || {
                format!(
                    "relative px-3 py-2 text-sm font-medium transition-colors group {}",
                    theme.palette().nav_link,
                )
            }
        >
            {section.label()}
            <div class=move || {
                let underline = if is_active.get() {
                    theme.palette().rule
                } else {
                    "bg-transparent group-hover:bg-current/30"
                };
                format!("absolute bottom-0 left-0 h-0.5 w-full transition-colors {underline}")
            }></div>
        </a>
    }
}

#[component]
fn MobileNavItem<F>(section: Section, is_active: Signal<bool>, on_select: F) -> impl IntoView
where
    F: Fn() + Send + Sync + 'static,
{
    let theme = use_theme();
    view! {
        <a
            href=section.href()
            class=move || {
                let state = if is_active.get() {
                    theme.palette().accent_soft
                } else {
                    theme.palette().nav_link
                };
                format!("block px-3 py-2 rounded-md text-base font-medium {state}")
            }
            on:click=move |_| on_select()
        >
            {section.label()}
        </a>
    }
}

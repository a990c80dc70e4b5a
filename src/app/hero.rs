use std::time::Duration;

use codee::string::FromToStringCodec;
use leptos::{ev::Event, prelude::*};
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use super::{theme::use_theme, SocialIcon};
use crate::content::{SocialKind, AVATAR_PLACEHOLDER, OWNER_NAME, ROLE, SOCIALS};
use crate::section::Section;

/// Local storage key for the uploaded avatar, stored as a data URI.
const AVATAR_KEY: &str = "userAvatar";

fn avatar_src(stored: &str) -> String {
    if stored.is_empty() {
        AVATAR_PLACEHOLDER.to_string()
    } else {
        stored.to_string()
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let theme = use_theme();
    // loaded after hydration so the server-rendered placeholder gets replaced
    let (avatar, set_avatar, _) = use_local_storage_with_options::<String, FromToStringCodec>(
        AVATAR_KEY,
        UseStorageOptions::default().delay_during_hydration(true),
    );
    let (editing, set_editing) = signal(false);

    view! {
        <section
            id=Section::Home.id()
            class=move || {
                format!("relative py-20 overflow-hidden {}", theme.palette().section)
            }
        >
            <div class="absolute inset-0 z-0 opacity-30 pointer-events-none">
                <div class="absolute -top-24 -right-24 w-96 h-96 bg-indigo-200 rounded-full filter blur-3xl"></div>
                <div class="absolute -bottom-24 -left-24 w-96 h-96 bg-indigo-200 rounded-full filter blur-3xl"></div>
            </div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="flex flex-col md:flex-row items-center justify-between gap-12">
                    <div class="flex-1 text-center md:text-left space-y-6">
                        <h1 class=move || {
                            format!(
                                "text-4xl md:text-5xl lg:text-6xl font-bold {}",
                                theme.palette().heading,
                            )
                        }>
                            <span class="block">"Hi, I'm "</span>
                            <span class=move || theme.palette().accent>{OWNER_NAME}</span>
                        </h1>
                        <p class=move || {
                            format!("text-xl md:text-2xl {}", theme.palette().text)
                        }>{ROLE}</p>
                        <p class=move || format!("text-lg max-w-2xl {}", theme.palette().text)>
                            "I design and build beautiful web applications with a focus on user experience, using modern technologies to create responsive and intuitive interfaces."
                        </p>
                        <div class="flex flex-wrap gap-4 justify-center md:justify-start">
                            <a
                                href=Section::Contact.href()
                                class=move || {
                                    format!(
                                        "px-6 py-3 font-medium rounded-lg shadow-md transition-colors {}",
                                        theme.palette().accent_bg,
                                    )
                                }
                            >
                                "Get in Touch"
                            </a>
                            <a
                                href=Section::Projects.href()
                                class=move || {
                                    format!(
                                        "px-6 py-3 font-medium rounded-lg shadow-md border transition-colors {} {}",
                                        theme.palette().card,
                                        theme.palette().accent,
                                    )
                                }
                            >
                                "View Projects"
                            </a>
                        </div>
                    </div>
                    <button
                        type="button"
                        class="w-56 h-56 md:w-72 md:h-72 relative cursor-pointer group"
                        on:click=move |_| set_editing.set(true)
                    >
                        <div class="absolute inset-0 bg-indigo-600 rounded-full opacity-10 animate-pulse"></div>
                        <div class="absolute inset-2 rounded-full overflow-hidden border-4 border-white shadow-lg">
                            <img
                                src=move || avatar_src(&avatar.get())
                                alt=OWNER_NAME
                                class="w-full h-full object-cover"
                                width="288"
                                height="288"
                            />
                            <div class="absolute inset-0 bg-black/50 flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity">
                                <span class="text-white font-medium">"Edit Avatar"</span>
                            </div>
                        </div>
                    </button>
                </div>
                <div class="flex justify-center mt-12 md:mt-20">
                    <div class="flex space-x-6 text-2xl">
                        {SOCIALS
                            .iter()
                            .filter(|s| s.kind != SocialKind::Twitter)
                            .map(|link| view! { <SocialIcon link /> })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <Show when=move || editing.get()>
                <AvatarEditModal
                    current=avatar.get_untracked()
                    on_close=move || set_editing.set(false)
                    on_save=move |data_uri: String| {
                        log::info!("avatar updated ({} bytes)", data_uri.len());
                        set_avatar.set(data_uri);
                        set_editing.set(false);
                    }
                />
            </Show>
        </section>
    }
}

#[component]
fn AvatarEditModal<C, S>(current: String, on_close: C, on_save: S) -> impl IntoView
where
    C: Fn() + Copy + Send + Sync + 'static,
    S: Fn(String) + Copy + Send + Sync + 'static,
{
    let (preview, set_preview) = signal(current.clone());
    let (uploading, set_uploading) = signal(false);
    let unchanged = Memo::new(move |_| {
        preview.with(|p| uploading.get() || p.is_empty() || *p == current)
    });

    let on_file = move |ev: Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        read_data_url(file, move |data_uri| set_preview.set(data_uri));
    };

    let save = move |_| {
        set_uploading.set(true);
        let data_uri = preview.get_untracked();
        // keep the "Uploading..." state visible briefly
        set_timeout(
            move || {
                set_uploading.set(false);
                on_save(data_uri);
            },
            Duration::from_millis(500),
        );
    };

    view! {
        <div
            role="dialog"
            aria-modal="true"
            class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4"
        >
            <div class="bg-white rounded-lg max-w-md w-full p-6 text-gray-900">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-xl font-medium">"Update Your Avatar"</h3>
                    <button
                        type="button"
                        on:click=move |_| on_close()
                        class="text-gray-400 hover:text-gray-500 text-xl"
                    >
                        <span class="sr-only">"Close"</span>
                        "✕"
                    </button>
                </div>
                <div class="mb-6">
                    <div class="w-40 h-40 mx-auto relative rounded-full overflow-hidden border-4 border-indigo-100">
                        <img
                            src=move || avatar_src(&preview.get())
                            alt="Avatar Preview"
                            class="w-full h-full object-cover"
                            width="160"
                            height="160"
                        />
                    </div>
                </div>
                <div class="space-y-4">
                    <label class="block">
                        <span class="sr-only">"Choose file"</span>
                        <input
                            type="file"
                            accept="image/*"
                            on:change=on_file
                            class="block w-full text-sm text-gray-500 file:mr-4 file:py-2 file:px-4 file:rounded-full file:border-0 file:text-sm file:font-semibold file:bg-indigo-50 file:text-indigo-700 hover:file:bg-indigo-100"
                        />
                    </label>
                    <div class="flex space-x-3">
                        <button
                            type="button"
                            on:click=move |_| on_close()
                            class="flex-1 py-2 px-4 border border-gray-300 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-50"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            on:click=save
                            disabled=move || unchanged.get()
                            class=move || {
                                let state = if unchanged.get() {
                                    "bg-indigo-400"
                                } else {
                                    "bg-indigo-600 hover:bg-indigo-700"
                                };
                                format!(
                                    "flex-1 py-2 px-4 border border-transparent rounded-md text-sm font-medium text-white {state}",
                                )
                            }
                        >
                            {move || if uploading.get() { "Uploading..." } else { "Save Changes" }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Reads `file` as a data URI and hands it to `on_load`.
fn read_data_url<F>(file: web_sys::File, on_load: F)
where
    F: FnOnce(String) + 'static,
{
    use wasm_bindgen::JsCast;

    let Ok(reader) = web_sys::FileReader::new() else {
        log::warn!("FileReader unavailable");
        return;
    };
    let onload = {
        let reader = reader.clone();
        wasm_bindgen::closure::Closure::once_into_js(move || {
            if let Some(data_uri) = reader.result().ok().and_then(|r| r.as_string()) {
                on_load(data_uri);
            }
        })
    };
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(err) = reader.read_as_data_url(&file) {
        log::error!("could not read avatar file: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_is_marked_as_dialog() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! {
                <AvatarEditModal current=String::new() on_close=|| () on_save=|_: String| () />
            }
            .to_html();
            assert!(html.contains(r#"role="dialog""#));
            assert!(html.contains("Save Changes"));
        });
    }

    #[test]
    fn test_empty_avatar_uses_placeholder() {
        assert_eq!(avatar_src(""), AVATAR_PLACEHOLDER);
        assert_eq!(avatar_src("data:image/png;base64,AAAA"), "data:image/png;base64,AAAA");
    }
}

use leptos::prelude::*;

use super::SocialIcon;
use crate::content::{EMAIL, LOCATION, OWNER_NAME, SOCIALS};
use crate::section::Section;

/// Stamped by `build.rs`.
const BUILD_YEAR: &str = env!("BUILD_YEAR");
const BUILD_TIME: &str = env!("BUILD_TIME");

fn published(build_time: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(build_time) {
        Ok(dt) => dt.format("%B %-d, %Y").to_string(),
        Err(_) => build_time.to_string(),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div class="col-span-1 md:col-span-2">
                        <a href="/" class="text-2xl font-bold text-white">
                            {OWNER_NAME}
                        </a>
                        <p class="mt-4 text-gray-400 max-w-md">
                            "A passionate Frontend Developer dedicated to creating beautiful and functional web applications with modern technologies and best practices."
                        </p>
                        <div class="mt-6 flex space-x-4 text-2xl">
                            {SOCIALS
                                .iter()
                                .map(|link| view! { <SocialIcon link class="hover:scale-125" /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            {Section::PAGE_ORDER
                                .into_iter()
                                .map(|section| {
                                    let href = match section {
                                        Section::Home => "/".to_string(),
                                        _ => section.href(),
                                    };
                                    view! {
                                        <li>
                                            <a
                                                href=href
                                                class="text-gray-400 hover:text-white transition-colors"
                                            >
                                                {section.label()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-white mb-4">"Contact"</h3>
                        <ul class="space-y-2 text-gray-400">
                            <li class="flex items-start gap-2">
                                <span>"✉"</span>
                                <span>{EMAIL}</span>
                            </li>
                            <li class="flex items-start gap-2">
                                <span>"📍"</span>
                                <span>{LOCATION}</span>
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="mt-12 pt-8 border-t border-gray-800 text-center">
                    <p class="text-gray-400">
                        {format!("© {BUILD_YEAR} {OWNER_NAME}. All rights reserved.")}
                    </p>
                    <p class="text-gray-500 text-sm mt-2">
                        "Built with ❤️ using Rust, Leptos & Tailwind CSS"
                    </p>
                    <p class="text-gray-600 text-xs mt-1">
                        {format!("Last updated {}", published(BUILD_TIME))}
                    </p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_date() {
        assert_eq!(published("2025-03-07T10:15:00+00:00"), "March 7, 2025");
        assert_eq!(published("yesterday"), "yesterday");
    }
}

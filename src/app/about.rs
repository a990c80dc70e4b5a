use leptos::prelude::*;

use super::{theme::use_theme, SectionHeading};
use crate::content::{Milestone, EDUCATION, EXPERIENCE, OWNER_NAME};
use crate::section::Section;

#[component]
pub fn About() -> impl IntoView {
    let theme = use_theme();
    let paragraph = move || format!("text-lg {}", theme.palette().text);

    view! {
        <section
            id=Section::About.id()
            class=move || format!("py-20 {}", theme.palette().section_alt)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <p class=paragraph>
                            "Hello! I'm "
                            <span class=move || {
                                format!("font-medium {}", theme.palette().accent)
                            }>{OWNER_NAME}</span>
                            ", a passionate Frontend Developer with a strong eye for creating engaging UI effects and animations, and creating intuitive, dynamic user experiences."
                        </p>
                        <p class=paragraph>
                            "With a background in Computer Science and a love for clean, efficient code, I enjoy bringing ideas to life in the browser. I'm constantly learning new technologies and techniques to stay at the forefront of web development."
                        </p>
                        <p class=paragraph>
                            "When I'm not coding, you can find me exploring new hiking trails, reading sci-fi novels, or experimenting with new recipes in the kitchen."
                        </p>
                        <div class="pt-4">
                            <h3 class=move || {
                                format!("text-xl font-semibold mb-3 {}", theme.palette().heading)
                            }>"Education"</h3>
                            <div class="space-y-4">
                                {EDUCATION
                                    .iter()
                                    .map(|milestone| view! { <EducationCard milestone /> })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                    <div class="space-y-6">
                        <h3 class=move || {
                            format!("text-xl font-semibold mb-3 {}", theme.palette().heading)
                        }>"Professional Experience"</h3>
                        <div class="space-y-6">
                            {EXPERIENCE
                                .iter()
                                .map(|milestone| view! { <ExperienceCard milestone /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EducationCard(milestone: &'static Milestone) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("p-4 rounded-lg {}", theme.palette().card)>
            <h4 class=move || format!("font-medium {}", theme.palette().accent)>
                {milestone.title}
            </h4>
            <p class=move || theme.palette().text>{milestone.place}</p>
            <p class=move || format!("text-sm {}", theme.palette().muted)>{milestone.period}</p>
        </div>
    }
}

#[component]
fn ExperienceCard(milestone: &'static Milestone) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("p-6 rounded-lg shadow-sm {}", theme.palette().card)>
            <div class="flex items-start gap-4">
                <div class=move || {
                    format!(
                        "w-12 h-12 rounded-md flex items-center justify-center flex-shrink-0 {}",
                        theme.palette().accent_soft,
                    )
                }>
                    <svg class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"
                        />
                    </svg>
                </div>
                <div>
                    <h4 class=move || {
                        format!("text-lg font-medium {}", theme.palette().heading)
                    }>{milestone.title}</h4>
                    <p class=move || theme.palette().accent>{milestone.place}</p>
                    <p class=move || {
                        format!("text-sm {}", theme.palette().muted)
                    }>{milestone.period}</p>
                    <ul class=move || {
                        format!("mt-2 list-disc pl-5 space-y-1 {}", theme.palette().text)
                    }>
                        {milestone
                            .highlights
                            .iter()
                            .map(|item| view! { <li>{*item}</li> })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </div>
    }
}

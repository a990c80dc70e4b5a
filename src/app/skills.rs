use leptos::prelude::*;

use super::{theme::use_theme, SectionHeading};
use crate::content::{Skill, SkillCategory, CURRENTLY_LEARNING, SKILL_CATEGORIES};
use crate::section::Section;

#[component]
pub fn Skills() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Skills.id()
            class=move || format!("py-20 {}", theme.palette().section_alt)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="My Skills"
                    subtitle="Here are the technologies and tools I work with regularly."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>
                <div class="mt-16 text-center">
                    <h3 class=move || {
                        format!("text-2xl font-semibold mb-6 {}", theme.palette().heading)
                    }>"Currently Learning"</h3>
                    <div class="flex flex-wrap justify-center gap-4">
                        {CURRENTLY_LEARNING
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class=move || {
                                        format!(
                                            "px-6 py-3 rounded-full font-medium {}",
                                            theme.palette().accent_soft,
                                        )
                                    }>{*item}</div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || format!("rounded-xl p-6 shadow-sm {}", theme.palette().card)>
            <h3 class=move || {
                format!("text-xl font-semibold mb-4 {}", theme.palette().accent)
            }>{category.name}</h3>
            <div class="space-y-2">
                {category.skills.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="mb-4">
            <div class="flex justify-between mb-1">
                <span class=move || {
                    format!("text-sm font-medium {}", theme.palette().text)
                }>{skill.name}</span>
                <span class=move || {
                    format!("text-xs {}", theme.palette().muted)
                }>{skill.level.label()}</span>
            </div>
            <div class="w-full bg-gray-500/20 rounded-full h-2">
                <div
                    class=move || format!("h-2 rounded-full {}", theme.palette().rule)
                    style=format!("width: {}%", skill.level.percent())
                ></div>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use super::{theme::use_theme, SectionHeading};
use crate::content::{Project, GITHUB_URL, PROJECTS};
use crate::section::Section;

#[component]
pub fn Projects() -> impl IntoView {
    let theme = use_theme();

    view! {
        <section
            id=Section::Projects.id()
            class=move || format!("py-20 {}", theme.palette().section)
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading
                    title="My Projects"
                    subtitle="Here are some of my recent works. Each project represents different challenges and solutions."
                />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
                <div class="text-center mt-12">
                    <a
                        href=GITHUB_URL
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || {
                            format!(
                                "inline-flex items-center gap-2 px-6 py-3 border font-medium rounded-lg transition-colors {}",
                                theme.palette().accent,
                            )
                        }
                    >
                        <span>"View More on GitHub"</span>
                        <i class="devicon-github-plain text-xl"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class=move || {
            format!(
                "rounded-xl overflow-hidden shadow-md transition-transform hover:shadow-lg hover:-translate-y-1 {}",
                theme.palette().card,
            )
        }>
            <div class=move || {
                format!(
                    "h-60 w-full flex items-center justify-center font-semibold text-xl {}",
                    theme.palette().accent_soft,
                )
            }>{project.title}</div>
            <div class="p-6">
                <h3 class=move || {
                    format!("text-xl font-semibold mb-2 {}", theme.palette().heading)
                }>{project.title}</h3>
                <p class=move || format!("mb-4 {}", theme.palette().text)>{project.description}</p>
                <div class="mb-4 flex flex-wrap gap-2">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class=move || {
                                    format!("px-2 py-1 text-xs rounded-full {}", theme.palette().accent_soft)
                                }>{*tech}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex gap-4 text-sm font-medium">
                    <a
                        href=project.demo_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || format!("hover:underline {}", theme.palette().accent)
                    >
                        "Live Demo ↗"
                    </a>
                    <a
                        href=project.github_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class=move || format!("inline-flex items-center gap-1 {}", theme.palette().nav_link)
                    >
                        <span>"GitHub"</span>
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
            </div>
        </div>
    }
}

mod about;
mod background;
mod contact;
mod footer;
mod hero;
mod mascot;
mod navbar;
mod not_found;
mod projects;
mod scroll;
mod skills;
mod theme;

use leptos::{either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{SocialKind, SocialLink, OWNER_NAME};
use about::About;
use background::AnimatedBackground;
use contact::Contact;
use footer::Footer;
use hero::Hero;
use mascot::GlobalMascot;
use navbar::Navbar;
use not_found::NotFound;
use projects::Projects;
use scroll::provide_active_section;
use skills::Skills;
use theme::{use_theme, ThemeContext};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = ThemeContext::provide();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta
            name="description"
            content="Passionate Frontend Developer creating modern web experiences"
        />
        <Router>
            <div class=move || {
                format!("min-h-screen transition-colors duration-300 {}", theme.palette().page)
            }>
                <AnimatedBackground />
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}

/// The single page: every section stacked, plus the roaming mascot.
#[component]
fn HomePage() -> impl IntoView {
    provide_active_section();

    view! {
        <Title text="Frontend Developer" />
        <main class="min-h-screen">
            <Navbar />
            <Hero />
            <About />
            <Projects />
            <Skills />
            <Contact />
            <Footer />
            <GlobalMascot />
        </main>
    }
}

/// Centered title, optional blurb and accent rule used at the top of each
/// section.
#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    let theme = use_theme();
    view! {
        <div class="text-center mb-16">
            <h2 class=move || {
                format!("text-3xl md:text-4xl font-bold {}", theme.palette().heading)
            }>{title}</h2>
            {subtitle
                .map(|s| {
                    view! {
                        <p class=move || {
                            format!("mt-4 text-xl max-w-3xl mx-auto {}", theme.palette().text)
                        }>{s}</p>
                    }
                })}
            <div class=move || {
                format!("w-20 h-1 mx-auto mt-4 rounded-full {}", theme.palette().rule)
            }></div>
        </div>
    }
}

/// External social link rendered as its devicon glyph.
#[component]
fn SocialIcon(link: &'static SocialLink, #[prop(optional)] class: &'static str) -> impl IntoView {
    let theme = use_theme();
    let external = link.is_external();
    view! {
        <a
            href=link.href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            aria-label=link.label
            class=move || format!("transition-colors {} {class}", theme.palette().nav_link)
        >
            {match link.kind {
                SocialKind::Email => either::Either::Left(view! { <span>"✉"</span> }),
                _ => either::Either::Right(view! { <i class=link.icon></i> }),
            }}
        </a>
    }
}

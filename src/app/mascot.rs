use std::time::Duration;

use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_event_listener, use_interval_fn, use_window};

use super::scroll::use_active_section;
use super::theme::use_theme;
use crate::mascot::{MascotKind, MascotProfile, Particle, Roamer};
use crate::motion::Coordinate;

/// Anything the user can already interact with, open dialogs included;
/// clicks there are not meant for the mascot.
const INTERACTIVE: &str =
    "a, button, input, textarea, select, label, form, [role=dialog], [data-mascot]";

fn now_ms() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// Centres the label over the mascot with its bottom edge at the label top.
fn label_style(profile: &MascotProfile, pos: Coordinate) -> String {
    format!(
        "left: {:.3}%; top: {:.3}%; transform: translate(-50%, -100%);",
        pos.x,
        profile.label_top(pos),
    )
}

/// The page's only mascot. Rendered after hydration so both server and
/// client agree on the markup, and rebuilt whenever the theme picks a
/// different kind, which disposes the previous one's timers.
#[component]
pub fn GlobalMascot() -> impl IntoView {
    let theme = use_theme();
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));

    let kind = Memo::new(move |_| theme.mode().mascot());
    move || {
        mounted.get().then(|| {
            let kind = kind.get();
            view! { <Mascot kind /> }
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct LiveParticle {
    id: usize,
    particle: Particle,
}

#[component]
fn Mascot(kind: MascotKind) -> impl IntoView {
    let profile = kind.profile();
    let active = use_active_section();
    let roamer = StoredValue::new(Roamer::new(kind, now_ms() as u64));
    let (position, set_position) = signal(roamer.with_value(Roamer::current));
    let (particles, set_particles) = signal(Vec::<LiveParticle>::new());
    let (glowing, set_glowing) = signal(false);
    let next_id = StoredValue::new(0usize);

    log::debug!("{} mascot mounted", profile.emoji);

    Effect::watch(
        move || active.get(),
        move |section, _, _| {
            roamer.update_value(|r| {
                r.enter_section(*section);
            });
        },
        true,
    );

    let _ = use_interval_fn(
        move || {
            if let Some(pos) = roamer.try_update_value(Roamer::tick) {
                set_position.set(pos);
            }
        },
        profile.tick_ms,
    );
    let _ = use_interval_fn(
        move || {
            roamer.update_value(|r| {
                r.wander(now_ms());
            });
        },
        profile.wander_ms,
    );

    let on_click = move || {
        let Some(burst) = roamer.try_update_value(|r| {
            r.click(now_ms());
            r.burst()
        }) else {
            return;
        };

        let first = next_id.get_value();
        let last = first + burst.len();
        next_id.set_value(last);
        let linger = burst.iter().map(|p| p.delay_ms).max().unwrap_or_default()
            + profile.burst.lifetime_ms;
        set_particles.update(|ps| {
            ps.extend(
                (first..last)
                    .zip(burst)
                    .map(|(id, particle)| LiveParticle { id, particle }),
            )
        });
        set_timeout(
            move || set_particles.update(|ps| ps.retain(|p| !(first..last).contains(&p.id))),
            Duration::from_millis(linger),
        );

        if let Some(glow_ms) = profile.burst.glow_ms {
            set_glowing.set(true);
            set_timeout(move || set_glowing.set(false), Duration::from_millis(glow_ms));
        }
    };

    // clicks on empty page space also send the mascot roaming
    let _ = use_event_listener(use_window(), ev::click, move |ev| {
        use wasm_bindgen::JsCast;

        let on_background = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| matches!(el.closest(INTERACTIVE), Ok(None)));
        if on_background {
            on_click();
        }
    });

    let label = move || profile.label_text(active.get());
    let label_css = move || label_style(profile, position.get());
    let label_class = format!(
        "absolute px-3 py-1 rounded-full text-xs font-medium whitespace-nowrap shadow-md {}",
        match kind {
            MascotKind::Fish => "bg-white/80 text-sky-800",
            MascotKind::Spaceship => "bg-gray-800/80 text-blue-200",
        },
    );
    let body_style = move || {
        let Coordinate { x, y } = position.get();
        format!("left: {x:.3}%; top: {y:.3}%; transform: translate(-50%, -50%);")
    };

    view! {
        <div class="fixed inset-0 pointer-events-none z-40" aria-hidden="true">
            <div class=label_class style=label_css>
                {label}
            </div>
            <For
                each=move || particles.get()
                key=|p| p.id
                children=move |p| view! { <ParticleDot kind particle=p.particle lifetime_ms=profile.burst.lifetime_ms /> }
            />
            <div
                data-mascot=""
                class="absolute pointer-events-auto cursor-pointer select-none mascot-bob"
                style=body_style
                title=move || format!("{} {}", profile.emoji, profile.verb)
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_click();
                }
            >
                <Show when=move || glowing.get()>
                    <div class="absolute inset-0 -m-4 rounded-full border-2 border-blue-400 mascot-glow"></div>
                </Show>
                {match kind {
                    MascotKind::Fish => Either::Left(view! { <FishShape /> }),
                    MascotKind::Spaceship => Either::Right(view! { <SpaceshipShape /> }),
                }}
            </div>
        </div>
    }
}

#[component]
fn ParticleDot(kind: MascotKind, particle: Particle, lifetime_ms: u64) -> impl IntoView {
    let Particle { start, end, delay_ms } = particle;
    let style = format!(
        "left: {:.3}%; top: {:.3}%; --dx: {:.3}vw; --dy: {:.3}vh; animation-delay: {delay_ms}ms; animation-duration: {lifetime_ms}ms;",
        start.x,
        start.y,
        end.x - start.x,
        end.y - start.y,
    );
    let shape = match kind {
        MascotKind::Fish => "w-3 h-3 rounded-full border border-sky-400 bg-sky-200/40",
        MascotKind::Spaceship => "w-2 h-2 rounded-full bg-yellow-200 shadow-[0_0_6px_rgba(253,224,71,0.9)]",
    };
    view! { <div class=format!("absolute mascot-particle {shape}") style=style></div> }
}

#[component]
fn FishShape() -> impl IntoView {
    view! {
        <svg width="64" height="40" viewBox="0 0 64 40" xmlns="http://www.w3.org/2000/svg">
            <path d="M44 20 L62 6 L62 34 Z" fill="#fb923c" />
            <ellipse cx="26" cy="20" rx="24" ry="15" fill="#f97316" />
            <path d="M18 6 Q26 0 34 6" stroke="#fdba74" stroke-width="3" fill="none" />
            <path d="M22 8 L22 32" stroke="#ffffff" stroke-width="3" opacity="0.7" />
            <circle cx="12" cy="16" r="4" fill="#ffffff" />
            <circle cx="11" cy="16" r="2" fill="#1f2937" />
        </svg>
    }
}

#[component]
fn SpaceshipShape() -> impl IntoView {
    view! {
        <svg width="48" height="64" viewBox="0 0 48 64" xmlns="http://www.w3.org/2000/svg">
            <path d="M24 2 C36 14 38 34 34 46 L14 46 C10 34 12 14 24 2 Z" fill="#e5e7eb" />
            <circle cx="24" cy="22" r="6" fill="#60a5fa" stroke="#1e3a8a" stroke-width="2" />
            <path d="M14 36 L4 50 L14 46 Z" fill="#ef4444" />
            <path d="M34 36 L44 50 L34 46 Z" fill="#ef4444" />
            <path d="M18 46 L24 62 L30 46 Z" fill="#f59e0b" class="mascot-flame" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_sits_above_mascot() {
        let fish = MascotKind::Fish.profile();
        let style = label_style(fish, Coordinate::new(40.0, 30.0));
        assert!(style.contains("left: 40.000%"));
        assert!(style.contains("top: 20.000%"));
        assert!(style.contains("translate(-50%, -100%)"));

        // clamped to the minimum top near the navbar
        let style = label_style(fish, Coordinate::new(40.0, 10.0));
        assert!(style.contains("top: 3.000%"));
    }

    #[test]
    fn test_dialogs_are_not_background() {
        let selectors = INTERACTIVE.split(", ").collect::<Vec<_>>();
        assert!(selectors.contains(&"[role=dialog]"));
        assert!(selectors.contains(&"[data-mascot]"));
        assert!(selectors.contains(&"button"));
    }
}

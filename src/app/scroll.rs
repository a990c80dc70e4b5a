use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window};

use crate::section::{ScrollTracker, Section};
#[cfg(feature = "hydrate")]
use crate::section::SectionBounds;

#[derive(Debug, Clone, Copy)]
struct ActiveSection(ReadSignal<Section>);

/// Starts the one scroll listener for the page and shares the active
/// section with the navbar and the mascot.
pub fn provide_active_section() -> ReadSignal<Section> {
    let (active, set_active) = signal(Section::default());
    let tracker = StoredValue::new(ScrollTracker::default());

    let check = move || {
        let changed = tracker.try_update_value(observe_window).flatten();
        if let Some(section) = changed {
            log::debug!("active section: {section}");
            set_active.set(section);
        }
    };

    let _ = use_event_listener(use_window(), leptos::ev::scroll, move |_| check());
    // the page may load already scrolled (reload, #fragment)
    Effect::new(move |_| check());

    provide_context(ActiveSection(active));
    active
}

pub fn use_active_section() -> ReadSignal<Section> {
    expect_context::<ActiveSection>().0
}

#[cfg(feature = "hydrate")]
fn observe_window(tracker: &mut ScrollTracker) -> Option<Section> {
    let window = window();
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document = document();
    tracker.observe(scroll_y, viewport_height, |section| {
        let rect = document
            .get_element_by_id(section.id())?
            .get_bounding_client_rect();
        Some(SectionBounds::new(scroll_y + rect.top(), rect.height()))
    })
}

#[cfg(not(feature = "hydrate"))]
fn observe_window(_tracker: &mut ScrollTracker) -> Option<Section> {
    None
}

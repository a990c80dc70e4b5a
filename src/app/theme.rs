use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::{use_local_storage_with_options, UseStorageOptions};

use crate::theme::{Palette, ThemeMode, THEME_KEY};

/// The page-wide theme store. Components read it through signals, so a
/// toggle reaches every subscriber in the same reactive turn.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    mode: Signal<ThemeMode>,
    set_mode: WriteSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn new(mode: Signal<ThemeMode>, set_mode: WriteSignal<ThemeMode>) -> Self {
        Self { mode, set_mode }
    }

    /// Backs the store with local storage and makes it available as
    /// context.
    ///
    /// The stored value is loaded after hydration: the server always renders
    /// the default mode, and the DOM is only corrected by a real change.
    pub fn provide() -> Self {
        let (mode, set_mode, _) = use_local_storage_with_options::<ThemeMode, FromToStringCodec>(
            THEME_KEY,
            UseStorageOptions::default().delay_during_hydration(true),
        );

        // the store never writes the default, so seed the key ourselves
        #[cfg(feature = "hydrate")]
        Effect::new(move |_| persist_initial_mode());

        let ctx = Self::new(mode, set_mode);
        provide_context(ctx);
        ctx
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode().palette()
    }

    pub fn toggle(&self) {
        let next = self.mode.get_untracked().toggled();
        log::info!("switching to {next} mode");
        self.set_mode.set(next);
    }
}

#[cfg(feature = "hydrate")]
fn persist_initial_mode() {
    let Some(storage) = window().local_storage().ok().flatten() else {
        log::warn!("local storage unavailable, theme will not persist");
        return;
    };
    let stored = storage.get_item(THEME_KEY).ok().flatten();
    if let Some(mode) = ThemeMode::repair_stored(stored.as_deref()) {
        if let Err(err) = storage.set_item(THEME_KEY, &mode.to_string()) {
            log::warn!("could not persist theme: {err:?}");
        }
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "p-2 rounded-full transition-colors focus:outline-none {}",
                    theme.palette().nav_link,
                )
            }
            aria-label=move || {
                if theme.mode().is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
            }
            on:click=move |_| theme.toggle()
        >
            {move || if theme.mode().is_dark() { "☀️" } else { "🌙" }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mascot::MascotKind;
    use codee::{Decoder, Encoder};

    #[test]
    fn test_toggle_reaches_every_subscriber() {
        let owner = Owner::new();
        owner.with(|| {
            let (mode, set_mode) = signal(ThemeMode::Dark);
            let theme = ThemeContext::new(mode.into(), set_mode);

            // independent components each derive what they need
            let mascots = (0..3)
                .map(|_| Signal::derive(move || theme.mode().mascot()))
                .collect::<Vec<_>>();
            let backgrounds = Signal::derive(move || theme.palette().page);
            let persisted = Signal::derive(move || {
                <FromToStringCodec as Encoder<ThemeMode>>::encode(&theme.mode()).unwrap()
            });
            assert!(mascots.iter().all(|m| m.get() == MascotKind::Spaceship));
            assert_eq!(persisted.get(), "dark");

            theme.toggle();

            assert_eq!(theme.mode(), ThemeMode::Light);
            assert!(mascots.iter().all(|m| m.get() == MascotKind::Fish));
            assert_eq!(backgrounds.get(), ThemeMode::Light.palette().page);
            assert_eq!(persisted.get(), "light");

            theme.toggle();
            assert!(mascots.iter().all(|m| m.get() == MascotKind::Spaceship));
            assert_eq!(persisted.get(), "dark");
        });
    }

    #[test]
    fn test_storage_codec_round_trip() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let stored = <FromToStringCodec as Encoder<ThemeMode>>::encode(&mode).unwrap();
            assert_eq!(stored, mode.to_string());
            let read = <FromToStringCodec as Decoder<ThemeMode>>::decode(&stored).unwrap();
            assert_eq!(read, mode);
        }
    }
}

//! Theme Toggle
//!
//! Light/dark preference kept in `localStorage` and applied as
//! `<html data-theme=...>` for the stylesheets.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Unknown or missing values fall back to light
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph on the toggle button: the theme you would switch to
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load_theme(key: &str) -> Theme {
    let stored = storage().and_then(|s| s.get_item(key).ok().flatten());
    Theme::parse(stored.as_deref())
}

pub fn store_theme(key: &str, theme: Theme) {
    match storage() {
        Some(s) => {
            if s.set_item(key, theme.as_str()).is_err() {
                log::warn!("[THEME] could not persist {}", theme.as_str());
            }
        }
        None => log::warn!("[THEME] localStorage unavailable"),
    }
}

pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    let outcome = root.map(|root| root.set_attribute("data-theme", theme.as_str()));
    applied(theme, outcome);
}

/// Logs why `theme` did not reach the page; true when it did
fn applied<E: std::fmt::Debug>(theme: Theme, outcome: Option<Result<(), E>>) -> bool {
    match outcome {
        Some(Ok(())) => true,
        Some(Err(err)) => {
            log::warn!("[THEME] could not apply {}: {:?}", theme.as_str(), err);
            false
        }
        None => {
            log::warn!("[THEME] document root unavailable");
            false
        }
    }
}

/// Header button switching between light and dark
#[component]
pub fn ThemeToggle(#[prop(into)] storage_key: String) -> impl IntoView {
    let initial = load_theme(&storage_key);
    apply_theme(initial);
    let (theme, set_theme) = signal(initial);

    let toggle = move |_: leptos::ev::MouseEvent| {
        let next = theme.get_untracked().toggled();
        apply_theme(next);
        store_theme(&storage_key, next);
        set_theme.set(next);
    };

    view! {
        <button id="theme-toggle" class="theme-toggle" title="Смяна на темата" on:click=toggle>
            {move || theme.get().icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_light() {
        assert_eq!(Theme::parse(None), Theme::Light);
        assert_eq!(Theme::parse(Some("sepia")), Theme::Light);
        assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
    }

    #[test]
    fn test_apply_failures_are_reported() {
        assert!(applied::<()>(Theme::Dark, Some(Ok(()))));
        assert!(!applied(Theme::Dark, Some(Err("NoModificationAllowedError"))));
        assert!(!applied::<()>(Theme::Light, None));
    }

    #[test]
    fn test_toggle_and_icons() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Light.icon(), "🌙");
        assert_eq!(Theme::Dark.icon(), "☀️");
        assert_eq!(Theme::parse(Some(Theme::Dark.as_str())), Theme::Dark);
    }
}

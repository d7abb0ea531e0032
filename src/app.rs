//! Recipe Book App
//!
//! Page shell: header with theme toggle, the page matching the URL, and the
//! notification stack.

use leptos::prelude::*;
use percent_encoding::percent_decode_str;

use crate::components::{AdminPage, CategoryAdminPage, CategoryPage, IndexPage, RecipePage};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::notify::{NotificationHost, Notifier};
use crate::theme::ThemeToggle;

/// Pages served by the backend, keyed by path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Index,
    Category(String),
    Recipe(u32),
    Admin,
    CategoryAdmin,
}

impl Page {
    /// Unknown paths fall back to the index
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.trim_matches('/').split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["category", name] => {
                let name = percent_decode_str(name).decode_utf8_lossy().to_string();
                Page::Category(name)
            }
            ["recipe", id] => id.parse().map(Page::Recipe).unwrap_or(Page::Index),
            ["admin"] => Page::Admin,
            ["admin", "categories"] => Page::CategoryAdmin,
            _ => Page::Index,
        }
    }

    pub fn current() -> Self {
        let path = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        Self::from_path(&path)
    }
}

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let theme_key = config.theme_key.clone();
    let notifier = Notifier::new(config.notification_ms);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));
    provide_context(notifier);

    let page = Page::current();
    log::info!("[APP] page {:?}", page);

    let content = match page {
        Page::Index => view! { <IndexPage /> }.into_any(),
        Page::Category(name) => view! { <CategoryPage category=name /> }.into_any(),
        Page::Recipe(id) => view! { <RecipePage id=id /> }.into_any(),
        Page::Admin => view! { <AdminPage /> }.into_any(),
        Page::CategoryAdmin => view! { <CategoryAdminPage /> }.into_any(),
    };

    view! {
        <header class="site-header">
            <a class="site-title" href="/">"🍲 Рецепти"</a>
            <nav class="site-nav">
                <a href="/">"Категории"</a>
                <a href="/admin">"Администрация"</a>
                <a href="/admin/categories">"Категории (админ)"</a>
            </nav>
            <ThemeToggle storage_key=theme_key />
        </header>
        <main class="container">{content}</main>
        <NotificationHost />
    }
}

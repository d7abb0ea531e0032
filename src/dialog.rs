//! Browser Dialogs
//!
//! Confirmation prompts and page-level navigation.

/// Yes/no question put to the user before a destructive action
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm`
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Full page reload, used after category changes so every category-derived
/// view is rebuilt
pub fn reload_page() {
    let reloaded = web_sys::window().map(|w| w.location().reload());
    if !matches!(reloaded, Some(Ok(()))) {
        log::warn!("[DIALOG] page reload failed");
    }
}

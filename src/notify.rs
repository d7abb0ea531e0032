//! Notifications
//!
//! Transient success/error toasts, dismissed automatically after a fixed delay.

use leptos::prelude::*;

use crate::debounce::{BrowserScheduler, Scheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notification success",
            NoticeKind::Error => "notification error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

/// Notices on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u32,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn push(&mut self, kind: NoticeKind, message: String) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push(Notice { id, kind, message });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Handle for raising notifications; provided through context
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
    dismiss_ms: u32,
}

impl Notifier {
    pub fn new(dismiss_ms: u32) -> Self {
        Self { board: RwSignal::new(NoticeBoard::default()), dismiss_ms }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    fn push(&self, kind: NoticeKind, message: String) {
        if kind == NoticeKind::Error {
            log::warn!("[NOTIFY] {}", message);
        }
        post(self.board, &BrowserScheduler, self.dismiss_ms, kind, message);
    }
}

/// Put a notice on `board` and take it down after `dismiss_ms`
fn post<S: Scheduler>(
    board: RwSignal<NoticeBoard>,
    scheduler: &S,
    dismiss_ms: u32,
    kind: NoticeKind,
    message: String,
) -> u32 {
    let mut id = 0;
    board.update(|b| id = b.push(kind, message));
    let timer = scheduler.schedule(dismiss_ms, Box::new(move || board.update(|b| b.dismiss(id))));
    scheduler.detach(timer);
    id
}

pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

/// Renders the live notifications
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notification-stack">
            <For
                each=move || notifier.board.get().notices().to_vec()
                key=|notice| notice.id
                children=move |notice| {
                    view! { <div class=notice.kind.class()>{notice.message}</div> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debounce::testing::ManualScheduler;

    #[test]
    fn test_board_push_and_dismiss() {
        let mut board = NoticeBoard::default();
        let a = board.push(NoticeKind::Success, "ok".into());
        let b = board.push(NoticeKind::Error, "fail".into());
        assert_ne!(a, b);
        assert_eq!(board.notices().len(), 2);

        board.dismiss(a);
        assert_eq!(board.notices().len(), 1);
        assert_eq!(board.notices()[0].message, "fail");

        // dismissing twice is harmless
        board.dismiss(a);
        assert_eq!(board.notices().len(), 1);
    }

    #[test]
    fn test_notice_dismissed_after_display_time() {
        let clock = ManualScheduler::default();
        let board = RwSignal::new(NoticeBoard::default());

        post(board, &clock, 3000, NoticeKind::Success, "first".into());
        clock.advance(1000);
        post(board, &clock, 3000, NoticeKind::Error, "second".into());

        clock.advance(1999);
        assert_eq!(board.with_untracked(|b| b.notices().len()), 2);

        clock.advance(1);
        let left: Vec<String> = board.with_untracked(|b| b.notices().iter().map(|n| n.message.clone()).collect());
        assert_eq!(left, vec!["second".to_string()]);

        clock.advance(1000);
        assert!(board.with_untracked(|b| b.notices().is_empty()));
    }

    #[test]
    fn test_kind_classes() {
        assert_eq!(NoticeKind::Success.class(), "notification success");
        assert_eq!(NoticeKind::Error.class(), "notification error");
    }
}

//! Toast notifications.
//!
//! [`NotificationStack`] is the pure model: entries are pushed hidden, shown a
//! moment later, and removed once their exit transition has played. The
//! [`Notifier`] handed out through context drives it with gloo timers.

use gloo::timers::callback::Timeout;
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Delay before a pushed notification slides in
pub const SHOW_DELAY_MS: u32 = 100;
/// Lifetime of a notification nobody closes
pub const AUTO_DISMISS_MS: u32 = 5000;
/// Length of the exit transition; the entry is removed after it
pub const EXIT_TRANSITION_MS: u32 = 300;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }

    pub fn icon_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check",
            NotificationKind::Error => "fas fa-exclamation-triangle",
            NotificationKind::Warning | NotificationKind::Info => "fas fa-info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

impl Notification {
    pub fn class(&self) -> String {
        let mut class = format!("notification notification-{}", self.kind.as_str());
        if self.phase == Phase::Visible {
            class.push_str(" show");
        }
        class
    }
}

/// Every notification currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationStack {
    items: Vec<Notification>,
}

impl NotificationStack {
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Add a hidden entry; there is no limit and no de-duplication
    pub fn push(&mut self, id: u64, message: String, kind: NotificationKind) {
        self.items.push(Notification { id, message, kind, phase: Phase::Entering });
    }

    pub fn show(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id && n.phase == Phase::Entering) {
            item.phase = Phase::Visible;
        }
    }

    /// Start the exit transition. Returns false when the entry is gone or
    /// already leaving, so a second dismissal schedules nothing.
    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) if item.phase != Phase::Leaving => {
                item.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationAction {
    Push { id: u64, message: String, kind: NotificationKind },
    Show(u64),
    Dismiss(u64),
    Remove(u64),
}

impl Reducible for NotificationStack {
    type Action = NotificationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut stack = (*self).clone();
        match action {
            NotificationAction::Push { id, message, kind } => stack.push(id, message, kind),
            NotificationAction::Show(id) => stack.show(id),
            NotificationAction::Dismiss(id) => {
                if !stack.begin_dismiss(id) {
                    return self;
                }
            }
            NotificationAction::Remove(id) => stack.remove(id),
        }
        Rc::new(stack)
    }
}

/// Handle for raising notifications from any component
#[derive(Clone)]
pub struct Notifier {
    dispatch: Callback<NotificationAction>,
    next_id: Rc<Cell<u64>>,
}

impl PartialEq for Notifier {
    fn eq(&self, other: &Self) -> bool {
        self.dispatch == other.dispatch && Rc::ptr_eq(&self.next_id, &other.next_id)
    }
}

impl Notifier {
    pub fn new(dispatch: Callback<NotificationAction>) -> Self {
        Self { dispatch, next_id: Rc::new(Cell::new(1)) }
    }

    /// Used outside a provider: notifications only reach the console
    fn detached() -> Self {
        Self::new(Callback::from(|action: NotificationAction| {
            if let NotificationAction::Push { message, .. } = action {
                gloo::console::warn!(format!("Notification without provider: {}", message));
            }
        }))
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        self.dispatch.emit(NotificationAction::Push { id, message: message.into(), kind });

        let dispatch = self.dispatch.clone();
        Timeout::new(SHOW_DELAY_MS, move || dispatch.emit(NotificationAction::Show(id))).forget();

        let notifier = self.clone();
        Timeout::new(AUTO_DISMISS_MS, move || notifier.dismiss(id)).forget();
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.notify(message, NotificationKind::Info);
    }

    /// Close one notification; it is removed after the exit transition
    pub fn dismiss(&self, id: u64) {
        self.dispatch.emit(NotificationAction::Dismiss(id));
        let dispatch = self.dispatch.clone();
        Timeout::new(EXIT_TRANSITION_MS, move || dispatch.emit(NotificationAction::Remove(id))).forget();
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::detached)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with(ids: &[u64]) -> NotificationStack {
        let mut stack = NotificationStack::default();
        for id in ids {
            stack.push(*id, format!("message {}", id), NotificationKind::Info);
        }
        stack
    }

    #[test]
    fn test_kind_classes_and_icons() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Success.icon_class(), "fas fa-check");
        assert_eq!(NotificationKind::Error.icon_class(), "fas fa-exclamation-triangle");
        assert_eq!(NotificationKind::Warning.icon_class(), "fas fa-info");
    }

    #[test]
    fn test_lifecycle() {
        let mut stack = NotificationStack::default();
        stack.push(1, "Saved".to_string(), NotificationKind::Success);
        assert_eq!(stack.get(1).map(|n| n.class()), Some("notification notification-success".to_string()));

        stack.show(1);
        assert_eq!(stack.get(1).map(|n| n.class()), Some("notification notification-success show".to_string()));

        assert!(stack.begin_dismiss(1));
        assert_eq!(stack.get(1).map(|n| n.phase), Some(Phase::Leaving));
        // Still present while the exit transition plays
        assert_eq!(stack.items().len(), 1);

        stack.remove(1);
        assert!(stack.items().is_empty());
    }

    #[test]
    fn test_three_notifications_coexist_and_leave_independently() {
        let mut stack = stack_with(&[1, 2, 3]);
        for id in [1, 2, 3] {
            stack.show(id);
        }
        assert_eq!(stack.items().len(), 3);

        stack.begin_dismiss(2);
        stack.remove(2);

        let remaining: Vec<u64> = stack.items().iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![1, 3]);
        assert!(stack.items().iter().all(|n| n.phase == Phase::Visible));
    }

    #[test]
    fn test_second_dismiss_is_ignored() {
        let mut stack = stack_with(&[7]);
        stack.show(7);
        assert!(stack.begin_dismiss(7));
        assert!(!stack.begin_dismiss(7));

        stack.remove(7);
        assert!(!stack.begin_dismiss(7));
    }

    #[test]
    fn test_late_show_does_not_revive_a_leaving_entry() {
        // Closed before the show delay elapsed
        let mut stack = stack_with(&[4]);
        stack.begin_dismiss(4);
        stack.show(4);
        assert_eq!(stack.get(4).map(|n| n.phase), Some(Phase::Leaving));
    }

    #[test]
    fn test_reducer_keeps_state_on_redundant_dismiss() {
        let stack = Rc::new(stack_with(&[1]));
        let leaving = stack.reduce(NotificationAction::Dismiss(1));
        let again = leaving.clone().reduce(NotificationAction::Dismiss(1));
        assert!(Rc::ptr_eq(&leaving, &again));
    }

    #[test]
    fn test_timing_constants() {
        assert!(SHOW_DELAY_MS < AUTO_DISMISS_MS);
        assert_eq!((SHOW_DELAY_MS, AUTO_DISMISS_MS, EXIT_TRANSITION_MS), (100, 5000, 300));
    }
}

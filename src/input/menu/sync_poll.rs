use super::{HeldActions, MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::KeySink;
use crate::layout::MenuAction;
use std::time::{Duration, Instant};

/// Promotes presses to an "active" state on the next read.
///
/// A press marks the action pending. The next read moves pending actions to
/// active and keeps them reported for `window`, independent of the finger.
/// Each action must be released before it can become pending again.
#[derive(Debug)]
pub struct SyncPoll {
    window: Duration,
    held: HeldActions,
    pending: MenuButtons,
    needs_release: MenuButtons,
    active: MenuButtons,
    active_until: Option<Instant>,
}

impl SyncPoll {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            held: HeldActions::default(),
            pending: MenuButtons::empty(),
            needs_release: MenuButtons::empty(),
            active: MenuButtons::empty(),
            active_until: None,
        }
    }
}

impl MenuPolicy for SyncPoll {
    fn kind(&self) -> PolicyKind {
        PolicyKind::SyncPoll
    }

    fn press(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.held.press(action);
        if !self.needs_release.contains(action) {
            self.pending.insert(action);
            self.needs_release.insert(action);
        }
    }

    fn release(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        if self.held.release(action) {
            self.needs_release.remove(action);
        }
    }

    fn poll(&mut self, now: Instant) -> MenuButtons {
        if self.active_until.is_some_and(|until| now >= until) {
            self.active = MenuButtons::empty();
            self.active_until = None;
        }

        if !self.pending.is_empty() {
            self.active = std::mem::take(&mut self.pending);
            self.active_until = Some(now + self.window);
        }

        self.active
    }

    fn reset(&mut self) {
        self.held.clear();
        self.pending = MenuButtons::empty();
        self.needs_release = MenuButtons::empty();
        self.active = MenuButtons::empty();
        self.active_until = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::events::KeyEvent;

    const WINDOW: Duration = Duration::from_millis(120);

    #[test]
    fn press_becomes_active_on_next_read_and_expires() {
        let mut policy = SyncPoll::new(WINDOW);
        let mut keys: Vec<KeyEvent> = Vec::new();
        let t0 = Instant::now();

        policy.press(MenuAction::Right, t0, &mut keys);
        policy.release(MenuAction::Right, t0, &mut keys);

        let t1 = t0 + Duration::from_millis(5);
        assert!(policy.poll(t1).contains(MenuAction::Right));
        assert!(policy.poll(t1 + Duration::from_millis(100)).contains(MenuAction::Right));
        assert!(policy.poll(t1 + WINDOW).is_empty());
    }

    #[test]
    fn holding_does_not_retrigger() {
        let mut policy = SyncPoll::new(WINDOW);
        let mut keys: Vec<KeyEvent> = Vec::new();
        let t0 = Instant::now();

        policy.press(MenuAction::Ok, t0, &mut keys);
        assert!(!policy.poll(t0).is_empty());
        policy.press(MenuAction::Ok, t0, &mut keys);
        assert!(policy.poll(t0 + Duration::from_secs(1)).is_empty());

        policy.release(MenuAction::Ok, t0, &mut keys);
        policy.release(MenuAction::Ok, t0, &mut keys);
        policy.press(MenuAction::Ok, t0 + Duration::from_secs(2), &mut keys);
        assert!(policy.poll(t0 + Duration::from_secs(2)).contains(MenuAction::Ok));
    }
}

use super::{MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::{Key, KeyEvent, KeySink};
use crate::layout::MenuAction;
use std::time::Instant;

/// Commits every tap as a complete synthetic keystroke.
///
/// On touch-down the equivalent key is pressed and released immediately
/// through the host's key channel, so the menu sees exactly what a real
/// keyboard tap produces and its own repeat logic never engages. Nothing is
/// left for the polled path, which always reads empty.
#[derive(Debug, Default)]
pub struct TapCommit;

impl TapCommit {
    pub fn new() -> Self {
        Self
    }
}

impl MenuPolicy for TapCommit {
    fn kind(&self) -> PolicyKind {
        PolicyKind::TapCommit
    }

    fn press(&mut self, action: MenuAction, _now: Instant, keys: &mut dyn KeySink) {
        let key = Key::for_action(action);
        log::debug!("Menu tap {action:?}: injecting {key:?} press+release");
        keys.push_key(KeyEvent::press(key));
        keys.push_key(KeyEvent::release(key));
    }

    fn release(&mut self, _action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        // The keystroke was already completed on press.
    }

    fn poll(&mut self, _now: Instant) -> MenuButtons {
        MenuButtons::empty()
    }

    fn reset(&mut self) {}
}

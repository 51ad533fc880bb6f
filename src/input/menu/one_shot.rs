use super::{MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::KeySink;
use crate::layout::MenuAction;
use std::time::Instant;

/// Latches each press until the next read, then forgets it.
///
/// A tap is visible for exactly one sample. If the menu loop reads between
/// its own repeat checks the action can be consumed without effect.
#[derive(Debug, Default)]
pub struct OneShot {
    pending: MenuButtons,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MenuPolicy for OneShot {
    fn kind(&self) -> PolicyKind {
        PolicyKind::OneShot
    }

    fn press(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.pending.insert(action);
    }

    fn release(&mut self, _action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {}

    fn poll(&mut self, _now: Instant) -> MenuButtons {
        std::mem::take(&mut self.pending)
    }

    fn reset(&mut self) {
        self.pending = MenuButtons::empty();
    }
}

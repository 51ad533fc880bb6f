use super::{HeldActions, MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::KeySink;
use crate::layout::MenuAction;
use std::time::{Duration, Instant};

/// Reports each new press once, then ignores that action for a cooldown.
///
/// Presses that start and end between two reads are latched so the next
/// read still sees them. Rapid repeated taps inside the cooldown are dropped.
#[derive(Debug)]
pub struct Debounce {
    cooldown: Duration,
    held: HeldActions,
    latched: MenuButtons,
    was_pressed: MenuButtons,
    last_delivered: [Option<Instant>; 6],
}

impl Debounce {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            held: HeldActions::default(),
            latched: MenuButtons::empty(),
            was_pressed: MenuButtons::empty(),
            last_delivered: [None; 6],
        }
    }

    fn cooled_down(&self, action: MenuAction, now: Instant) -> bool {
        match self.last_delivered[action.bit().trailing_zeros() as usize] {
            Some(at) => now.saturating_duration_since(at) >= self.cooldown,
            None => true,
        }
    }
}

impl MenuPolicy for Debounce {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Debounce
    }

    fn press(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.held.press(action);
        self.latched.insert(action);
    }

    fn release(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.held.release(action);
    }

    fn poll(&mut self, now: Instant) -> MenuButtons {
        let pressed = self.held.buttons() | std::mem::take(&mut self.latched);
        let mut result = MenuButtons::empty();

        for action in pressed.actions() {
            if !self.was_pressed.contains(action) && self.cooled_down(action, now) {
                result.insert(action);
                self.last_delivered[action.bit().trailing_zeros() as usize] = Some(now);
            }
        }

        self.was_pressed = self.held.buttons();
        result
    }

    fn reset(&mut self) {
        self.held.clear();
        self.latched = MenuButtons::empty();
        self.was_pressed = MenuButtons::empty();
        self.last_delivered = [None; 6];
    }
}

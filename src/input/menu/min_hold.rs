use super::{HeldActions, MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::KeySink;
use crate::layout::MenuAction;
use std::time::{Duration, Instant};

/// Keeps an action reported for a minimum time after the finger lifts.
///
/// Stretches short taps so a slow sampler still sees them, at the cost of
/// making every tap feel `hold` longer than it was.
#[derive(Debug)]
pub struct MinHold {
    hold: Duration,
    held: HeldActions,
    released_at: [Option<Instant>; 6],
}

impl MinHold {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            held: HeldActions::default(),
            released_at: [None; 6],
        }
    }

    fn slot(action: MenuAction) -> usize {
        action.bit().trailing_zeros() as usize
    }
}

impl MenuPolicy for MinHold {
    fn kind(&self) -> PolicyKind {
        PolicyKind::MinHold
    }

    fn press(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.held.press(action);
        self.released_at[Self::slot(action)] = None;
    }

    fn release(&mut self, action: MenuAction, now: Instant, _keys: &mut dyn KeySink) {
        if self.held.release(action) {
            self.released_at[Self::slot(action)] = Some(now);
        }
    }

    fn poll(&mut self, now: Instant) -> MenuButtons {
        let mut buttons = self.held.buttons();
        for action in MenuAction::ALL {
            let slot = Self::slot(action);
            match self.released_at[slot] {
                Some(at) if now.saturating_duration_since(at) < self.hold => {
                    buttons.insert(action);
                }
                Some(_) => self.released_at[slot] = None,
                None => {}
            }
        }
        buttons
    }

    fn reset(&mut self) {
        self.held.clear();
        self.released_at = [None; 6];
    }
}

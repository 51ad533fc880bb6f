use super::{HeldActions, MenuButtons, MenuPolicy};
use crate::config::PolicyKind;
use crate::input::events::KeySink;
use crate::layout::MenuAction;
use std::collections::VecDeque;
use std::time::Instant;

/// Buffers every new press and hands them out one per read.
///
/// Ordering is preserved. When the buffer is full new presses are dropped.
#[derive(Debug)]
pub struct ActionQueue {
    capacity: usize,
    held: HeldActions,
    pending: VecDeque<MenuAction>,
}

impl ActionQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            held: HeldActions::default(),
            pending: VecDeque::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl MenuPolicy for ActionQueue {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Queue
    }

    fn press(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        // A second finger on an already-held action is not a new edge.
        if !self.held.press(action) {
            return;
        }
        if self.pending.len() >= self.capacity {
            log::warn!(
                "Menu action queue full ({}); dropping {action:?}",
                self.capacity
            );
            return;
        }
        self.pending.push_back(action);
    }

    fn release(&mut self, action: MenuAction, _now: Instant, _keys: &mut dyn KeySink) {
        self.held.release(action);
    }

    fn poll(&mut self, _now: Instant) -> MenuButtons {
        self.pending
            .pop_front()
            .map(MenuButtons::from)
            .unwrap_or_default()
    }

    fn reset(&mut self) {
        self.held.clear();
        self.pending.clear();
    }
}

//! Host event types and the channel shared with the host's event loop.

use crate::layout::MenuAction;
use std::collections::VecDeque;

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event as delivered by the windowing layer.
///
/// Coordinates are in the physical framebuffer's pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Device-assigned contact identifier (finger index).
    pub contact: u32,
    pub x: i32,
    pub y: i32,
    /// Whether the contact is still down. Only meaningful for moves.
    pub pressed: bool,
}

impl PointerEvent {
    pub fn down(contact: u32, x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Down,
            contact,
            x,
            y,
            pressed: true,
        }
    }

    pub fn moved(contact: u32, x: i32, y: i32, pressed: bool) -> Self {
        Self {
            kind: PointerKind::Move,
            contact,
            x,
            y,
            pressed,
        }
    }

    pub fn up(contact: u32, x: i32, y: i32) -> Self {
        Self {
            kind: PointerKind::Up,
            contact,
            x,
            y,
            pressed: false,
        }
    }
}

/// Keys the menu loop understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Return/Enter key (confirm)
    Return,
    /// Escape key (back)
    Escape,
}

impl Key {
    /// Keyboard equivalent of a menu action.
    pub fn for_action(action: MenuAction) -> Self {
        match action {
            MenuAction::Up => Key::Up,
            MenuAction::Down => Key::Down,
            MenuAction::Left => Key::Left,
            MenuAction::Right => Key::Right,
            MenuAction::Ok => Key::Return,
            MenuAction::Back => Key::Escape,
        }
    }
}

/// A keyboard transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn press(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn release(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Events flowing through the host's queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// Anything the touch controls don't care about (window, quit, ...).
    Other,
}

/// Outcome of feeding one event to the touch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchResponse {
    /// Not a pointer event, or the controls are shut down.
    Ignored,
    /// Consumed as touch input.
    Handled,
    /// The open-menu zone was tapped; the host should enter its menu.
    OpenMenu,
}

/// Receives synthetic key events.
pub trait KeySink {
    fn push_key(&mut self, event: KeyEvent);
}

impl KeySink for Vec<KeyEvent> {
    fn push_key(&mut self, event: KeyEvent) {
        self.push(event);
    }
}

/// The host event channel as seen from the touch controls.
pub trait HostChannel: KeySink {
    /// Drops up to `limit` pending pointer events, returning how many went.
    fn discard_pointer_events(&mut self, limit: usize) -> usize;
}

/// FIFO event queue standing in for the host's event loop.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<HostEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: HostEvent) {
        self.events.push_back(event);
    }

    pub fn pop(&mut self) -> Option<HostEvent> {
        self.events.pop_front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drains and returns only the key events, leaving everything else queued.
    pub fn take_keys(&mut self) -> Vec<KeyEvent> {
        let mut keys = Vec::new();
        self.events.retain(|event| match event {
            HostEvent::Key(key) => {
                keys.push(*key);
                false
            }
            _ => true,
        });
        keys
    }
}

impl KeySink for EventQueue {
    fn push_key(&mut self, event: KeyEvent) {
        self.push(HostEvent::Key(event));
    }
}

impl HostChannel for EventQueue {
    fn discard_pointer_events(&mut self, limit: usize) -> usize {
        let mut discarded = 0;
        self.events.retain(|event| {
            if discarded < limit && matches!(event, HostEvent::Pointer(_)) {
                discarded += 1;
                false
            } else {
                true
            }
        });
        discarded
    }
}

//! Delivery of discrete menu actions to a polling menu loop.
//!
//! The menu loop samples its input at its own cadence and applies its own
//! timeout and auto-repeat logic, which assumes keyboard-like sustained
//! state. A touch tap is usually shorter than one sampling interval, so the
//! strategies here differ in how they stretch, buffer or re-route the tap.
//!
//! Every strategy implements [`MenuPolicy`]: the touch state machine feeds it
//! press/release edges per finger, and the menu loop either reads
//! [`MenuPolicy::poll`] or receives synthetic key events through a
//! [`KeySink`]. [`TapCommit`] is the default and only uses the key path.

mod debounce;
mod min_hold;
mod one_shot;
mod queue;
mod sync_poll;
mod tap_commit;

pub use debounce::Debounce;
pub use min_hold::MinHold;
pub use one_shot::OneShot;
pub use queue::ActionQueue;
pub use sync_poll::SyncPoll;
pub use tap_commit::TapCommit;

use super::events::KeySink;
use crate::config::{MenuConfig, PolicyKind};
use crate::layout::MenuAction;
use std::ops::BitOr;
use std::time::{Duration, Instant};

/// Polled menu bitmask, one bit per [`MenuAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuButtons(u8);

impl MenuButtons {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, action: MenuAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn insert(&mut self, action: MenuAction) {
        self.0 |= action.bit();
    }

    pub fn remove(&mut self, action: MenuAction) {
        self.0 &= !action.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn actions(self) -> impl Iterator<Item = MenuAction> {
        MenuAction::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl From<MenuAction> for MenuButtons {
    fn from(action: MenuAction) -> Self {
        Self(action.bit())
    }
}

impl BitOr for MenuButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A strategy for turning touch edges into menu input.
pub trait MenuPolicy {
    fn kind(&self) -> PolicyKind;

    /// A finger landed on the zone bound to `action`.
    fn press(&mut self, action: MenuAction, now: Instant, keys: &mut dyn KeySink);

    /// A finger left the zone bound to `action`.
    fn release(&mut self, action: MenuAction, now: Instant, keys: &mut dyn KeySink);

    /// Menu bitmask for one read by the menu loop.
    ///
    /// Strategies with state that depends on reads (one-shot, queue, ...)
    /// advance it here, so call this exactly once per menu sample.
    fn poll(&mut self, now: Instant) -> MenuButtons;

    /// Drops all internal state.
    fn reset(&mut self);
}

/// Timing and sizing knobs for the menu strategies.
#[derive(Debug, Clone)]
pub struct MenuPolicySettings {
    pub kind: PolicyKind,
    pub min_hold: Duration,
    pub debounce: Duration,
    pub sync_poll_active: Duration,
    pub queue_capacity: usize,
}

impl Default for MenuPolicySettings {
    fn default() -> Self {
        Self::from(&MenuConfig::default())
    }
}

impl From<&MenuConfig> for MenuPolicySettings {
    fn from(cfg: &MenuConfig) -> Self {
        Self {
            kind: cfg.policy,
            min_hold: Duration::from_millis(cfg.min_hold_ms),
            debounce: Duration::from_millis(cfg.debounce_ms),
            sync_poll_active: Duration::from_millis(cfg.sync_poll_active_ms),
            queue_capacity: cfg.queue_capacity,
        }
    }
}

/// Instantiates the configured strategy.
pub fn build_policy(settings: &MenuPolicySettings) -> Box<dyn MenuPolicy> {
    match settings.kind {
        PolicyKind::TapCommit => Box::new(TapCommit::new()),
        PolicyKind::OneShot => Box::new(OneShot::new()),
        PolicyKind::MinHold => Box::new(MinHold::new(settings.min_hold)),
        PolicyKind::Debounce => Box::new(Debounce::new(settings.debounce)),
        PolicyKind::Queue => Box::new(ActionQueue::new(settings.queue_capacity)),
        PolicyKind::SyncPoll => Box::new(SyncPoll::new(settings.sync_poll_active)),
    }
}

/// Per-action count of fingers currently down.
#[derive(Debug, Clone, Default)]
pub(crate) struct HeldActions {
    counts: [u8; 6],
}

impl HeldActions {
    fn slot(action: MenuAction) -> usize {
        action.bit().trailing_zeros() as usize
    }

    /// Records a press; returns true if the action was not held before.
    pub(crate) fn press(&mut self, action: MenuAction) -> bool {
        let count = &mut self.counts[Self::slot(action)];
        *count = count.saturating_add(1);
        *count == 1
    }

    /// Records a release; returns true if no finger holds the action anymore.
    pub(crate) fn release(&mut self, action: MenuAction) -> bool {
        let count = &mut self.counts[Self::slot(action)];
        *count = count.saturating_sub(1);
        *count == 0
    }

    pub(crate) fn is_held(&self, action: MenuAction) -> bool {
        self.counts[Self::slot(action)] > 0
    }

    pub(crate) fn buttons(&self) -> MenuButtons {
        MenuAction::ALL
            .into_iter()
            .filter(|a| self.is_held(*a))
            .fold(MenuButtons::empty(), |acc, a| acc | MenuButtons::from(a))
    }

    pub(crate) fn clear(&mut self) {
        self.counts = Default::default();
    }
}

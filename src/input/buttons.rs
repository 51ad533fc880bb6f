//! Game pad state aggregation.

use super::fingers::FingerTracker;
use crate::layout::{GameButton, TouchZone};

/// Pad bitmask, one bit per [`GameButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(u32);

impl ButtonMask {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, button: GameButton) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Buttons currently set, in bit order.
    pub fn buttons(self) -> impl Iterator<Item = GameButton> {
        GameButton::ALL.into_iter().filter(move |b| self.contains(*b))
    }
}

/// Folds every held zone into a pad bitmask.
///
/// Diagonal zones contribute both of their cardinal bits; menu and
/// open-menu controls contribute nothing.
pub fn aggregate(zones: &[TouchZone], fingers: &FingerTracker) -> ButtonMask {
    let bits = fingers
        .assigned()
        .filter_map(|(_, zone)| zones.get(zone))
        .fold(0, |bits, zone| bits | zone.control.pad_bits());
    ButtonMask(bits)
}

/// Holds the last aggregated pad state for the emulation loop to sample.
#[derive(Debug, Default)]
pub struct ButtonAggregator {
    current: ButtonMask,
}

impl ButtonAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current state with a fresh aggregation.
    pub fn recompute(&mut self, zones: &[TouchZone], fingers: &FingerTracker) {
        self.current = aggregate(zones, fingers);
    }

    pub fn current(&self) -> ButtonMask {
        self.current
    }

    pub fn clear(&mut self) {
        self.current = ButtonMask::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Mode;
    use crate::layout::{Control, Diagonal, ZoneRegistry};

    fn index_of(registry: &ZoneRegistry, control: Control) -> usize {
        registry
            .zones(Mode::Game)
            .iter()
            .position(|zone| zone.control == control)
            .unwrap()
    }

    #[test]
    fn single_button_sets_its_bit() {
        let registry = ZoneRegistry::default();
        let mut fingers = FingerTracker::new();
        fingers.assign(0, Some(index_of(&registry, Control::Button(GameButton::Cross))));

        let mask = aggregate(registry.zones(Mode::Game), &fingers);
        assert_eq!(mask.bits(), GameButton::Cross.bit());
    }

    #[test]
    fn up_right_sets_up_and_right_only() {
        let registry = ZoneRegistry::default();
        let mut fingers = FingerTracker::new();
        fingers.assign(
            0,
            Some(index_of(&registry, Control::Diagonal(Diagonal::UpRight))),
        );

        let mask = aggregate(registry.zones(Mode::Game), &fingers);
        assert!(mask.contains(GameButton::Up));
        assert!(mask.contains(GameButton::Right));
        assert_eq!(
            mask,
            ButtonMask::from_bits(GameButton::Up.bit() | GameButton::Right.bit())
        );
    }

    #[test]
    fn bit_count_matches_held_zones() {
        let registry = ZoneRegistry::default();
        let mut fingers = FingerTracker::new();
        let held = [
            Control::Button(GameButton::Triangle),
            Control::Button(GameButton::L1),
            Control::Button(GameButton::Start),
            Control::Diagonal(Diagonal::DownLeft),
        ];
        for (contact, control) in held.iter().enumerate() {
            fingers.assign(contact as u32, Some(index_of(&registry, *control)));
        }

        let mask = aggregate(registry.zones(Mode::Game), &fingers);
        assert_eq!(mask.count(), 3 + 2);
        let listed: Vec<_> = mask.buttons().collect();
        assert_eq!(
            listed,
            vec![
                GameButton::Start,
                GameButton::Down,
                GameButton::Left,
                GameButton::L1,
                GameButton::Triangle
            ]
        );
    }

    #[test]
    fn open_menu_zone_contributes_nothing() {
        let registry = ZoneRegistry::default();
        let mut fingers = FingerTracker::new();
        fingers.assign(0, Some(index_of(&registry, Control::OpenMenu)));
        assert!(aggregate(registry.zones(Mode::Game), &fingers).is_empty());
    }

    #[test]
    fn aggregator_replaces_previous_state() {
        let registry = ZoneRegistry::default();
        let mut fingers = FingerTracker::new();
        let mut aggregator = ButtonAggregator::new();

        fingers.assign(0, Some(index_of(&registry, Control::Button(GameButton::Square))));
        aggregator.recompute(registry.zones(Mode::Game), &fingers);
        assert!(aggregator.current().contains(GameButton::Square));

        fingers.release(0);
        aggregator.recompute(registry.zones(Mode::Game), &fingers);
        assert!(aggregator.current().is_empty());

        fingers.assign(0, Some(index_of(&registry, Control::Button(GameButton::Square))));
        aggregator.recompute(registry.zones(Mode::Game), &fingers);
        aggregator.clear();
        assert!(aggregator.current().is_empty());
    }
}

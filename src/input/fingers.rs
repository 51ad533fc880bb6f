//! Finger-to-zone tracking for simultaneous contacts.

use crate::layout::{REFERENCE_HEIGHT, REFERENCE_WIDTH};
use crate::util::scale_coord;

/// Number of contacts tracked independently.
pub const MAX_FINGERS: usize = 10;

/// Slot that out-of-range contact identifiers share.
///
/// Contacts beyond [`MAX_FINGERS`] alias onto this slot rather than being
/// rejected, so a device reporting large identifiers still works for a
/// single finger.
pub const FALLBACK_SLOT: usize = 0;

/// Maps each finger slot to the index of the zone it currently holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FingerTracker {
    slots: [Option<usize>; MAX_FINGERS],
}

impl FingerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot used for a device contact identifier.
    pub fn slot_for(contact: u32) -> usize {
        let slot = contact as usize;
        if slot < MAX_FINGERS { slot } else { FALLBACK_SLOT }
    }

    /// Zone held by the given slot.
    pub fn zone(&self, slot: usize) -> Option<usize> {
        self.slots.get(slot).copied().flatten()
    }

    /// Zone held by the given contact.
    pub fn zone_for_contact(&self, contact: u32) -> Option<usize> {
        self.zone(Self::slot_for(contact))
    }

    /// Assigns (or unassigns with `None`) the contact's slot, returning the
    /// zone it held before.
    pub fn assign(&mut self, contact: u32, zone: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.slots[Self::slot_for(contact)], zone)
    }

    /// Clears the contact's slot, returning the zone it held.
    pub fn release(&mut self, contact: u32) -> Option<usize> {
        self.assign(contact, None)
    }

    /// Returns true if any finger is on the given zone.
    pub fn holds(&self, zone: usize) -> bool {
        self.slots.contains(&Some(zone))
    }

    /// Iterates `(slot, zone)` for every assigned slot.
    pub fn assigned(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, zone)| zone.map(|zone| (slot, zone)))
    }

    pub fn active_count(&self) -> usize {
        self.assigned().count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn reset(&mut self) {
        self.slots = [None; MAX_FINGERS];
    }
}

/// Converts a physical framebuffer position to logical reference coordinates.
pub fn to_logical(x: i32, y: i32, physical: (u32, u32)) -> (i32, i32) {
    (
        scale_coord(x, physical.0, REFERENCE_WIDTH),
        scale_coord(y, physical.1, REFERENCE_HEIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_contacts_alias_to_fallback_slot() {
        assert_eq!(FingerTracker::slot_for(3), 3);
        assert_eq!(FingerTracker::slot_for(MAX_FINGERS as u32), FALLBACK_SLOT);
        assert_eq!(FingerTracker::slot_for(u32::MAX), FALLBACK_SLOT);

        let mut tracker = FingerTracker::new();
        tracker.assign(42, Some(7));
        assert_eq!(tracker.zone(FALLBACK_SLOT), Some(7));
    }

    #[test]
    fn release_is_idempotent() {
        let mut tracker = FingerTracker::new();
        tracker.assign(1, Some(2));
        assert_eq!(tracker.release(1), Some(2));
        let snapshot = tracker.clone();
        assert_eq!(tracker.release(1), None);
        assert_eq!(tracker, snapshot);
    }

    #[test]
    fn holds_reports_any_finger() {
        let mut tracker = FingerTracker::new();
        tracker.assign(0, Some(4));
        tracker.assign(5, Some(4));
        assert!(tracker.holds(4));
        tracker.release(0);
        assert!(tracker.holds(4));
        tracker.release(5);
        assert!(!tracker.holds(4));
    }

    #[test]
    fn assigned_lists_slots_in_order() {
        let mut tracker = FingerTracker::new();
        tracker.assign(6, Some(1));
        tracker.assign(2, Some(9));
        let assigned: Vec<_> = tracker.assigned().collect();
        assert_eq!(assigned, vec![(2, 9), (6, 1)]);
        assert_eq!(tracker.active_count(), 2);
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = FingerTracker::new();
        for contact in 0..MAX_FINGERS as u32 {
            tracker.assign(contact, Some(contact as usize));
        }
        tracker.reset();
        assert!(tracker.is_empty());
    }

    #[test]
    fn to_logical_inverts_physical_scale() {
        assert_eq!(to_logical(256, 192, (512, 384)), (512, 384));
        assert_eq!(to_logical(100, 100, (1024, 768)), (100, 100));
        assert_eq!(to_logical(1, 1, (2048, 1536)), (0, 0));
    }
}

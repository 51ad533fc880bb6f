use crate::input::events::{HostChannel, HostEvent, PointerEvent, PointerKind, TouchResponse};
use crate::input::fingers::to_logical;
use crate::input::mode::Mode;
use crate::layout::Control;
use log::{debug, trace};
use std::time::Instant;

use super::TouchControls;

impl TouchControls {
    /// Feeds one host event through the touch state machine.
    ///
    /// Non-pointer events, and everything after [`Self::finish`], are
    /// reported as [`TouchResponse::Ignored`].
    pub fn handle_event<H: HostChannel>(
        &mut self,
        event: &HostEvent,
        host: &mut H,
        now: Instant,
    ) -> TouchResponse {
        match event {
            HostEvent::Pointer(pointer) => self.handle_pointer(pointer, host, now),
            HostEvent::Key(_) | HostEvent::Other => TouchResponse::Ignored,
        }
    }

    /// Processes a pointer event in physical framebuffer coordinates.
    ///
    /// # Behavior
    /// - Down: hit-test and bind the contact's slot to the zone; the
    ///   open-menu zone reports [`TouchResponse::OpenMenu`] without binding.
    ///   A miss leaves the slot as it was.
    /// - Move: game mode re-binds a pressed contact to whatever zone it is
    ///   over now (or none). Unpressed moves and all menu-mode moves are
    ///   ignored, so sliding never re-triggers a menu action.
    /// - Up: clears the slot, whether or not it held a zone.
    pub fn handle_pointer<H: HostChannel>(
        &mut self,
        event: &PointerEvent,
        host: &mut H,
        now: Instant,
    ) -> TouchResponse {
        if !self.active {
            return TouchResponse::Ignored;
        }

        let (lx, ly) = to_logical(event.x, event.y, (self.screen_width, self.screen_height));
        trace!(
            "{:?} contact {} at ({}, {}) -> logical ({lx}, {ly})",
            event.kind, event.contact, event.x, event.y
        );

        match event.kind {
            PointerKind::Down => {
                let Some(zone) = self.registry.hit_test(self.mode, lx, ly) else {
                    return TouchResponse::Handled;
                };
                if self.control_at(zone) == Some(Control::OpenMenu) {
                    debug!("Open-menu zone tapped by contact {}", event.contact);
                    return TouchResponse::OpenMenu;
                }
                let previous = self.fingers.assign(event.contact, Some(zone));
                self.after_change(previous, Some(zone), host, now);
            }
            PointerKind::Move => {
                if !event.pressed || self.mode == Mode::Menu {
                    return TouchResponse::Handled;
                }
                let zone = self
                    .registry
                    .hit_test(self.mode, lx, ly)
                    .filter(|zone| self.control_at(*zone) != Some(Control::OpenMenu));
                if self.fingers.zone_for_contact(event.contact) == zone {
                    return TouchResponse::Handled;
                }
                let previous = self.fingers.assign(event.contact, zone);
                self.after_change(previous, zone, host, now);
            }
            PointerKind::Up => {
                let previous = self.fingers.release(event.contact);
                if previous.is_some() {
                    self.after_change(previous, None, host, now);
                }
            }
        }

        TouchResponse::Handled
    }

    fn control_at(&self, zone: usize) -> Option<Control> {
        self.registry.zone(self.mode, zone).map(|z| z.control)
    }

    /// Propagates a slot change to the pad bitmask or the menu policy.
    fn after_change<H: HostChannel>(
        &mut self,
        previous: Option<usize>,
        current: Option<usize>,
        host: &mut H,
        now: Instant,
    ) {
        match self.mode {
            Mode::Game => {
                self.buttons
                    .recompute(self.registry.zones(Mode::Game), &self.fingers);
                trace!("Pad state {:#06x}", self.buttons.current().bits());
            }
            Mode::Menu => {
                if let Some(action) = previous.and_then(|z| self.control_at(z)?.menu_action()) {
                    self.policy.release(action, now, &mut *host);
                }
                if let Some(action) = current.and_then(|z| self.control_at(z)?.menu_action()) {
                    self.policy.press(action, now, &mut *host);
                }
            }
        }
    }
}

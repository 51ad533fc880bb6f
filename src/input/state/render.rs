use crate::draw::{OverlayFrame, Surface, render_overlay};

use super::TouchControls;

impl TouchControls {
    /// Draws the active layout onto `surface`.
    ///
    /// Skipped when the overlay is hidden, the controls are shut down or the
    /// surface has no area. Otherwise the surface size becomes the screen size
    /// used for pointer mapping, so a resize is picked up on the next frame.
    /// Returns the number of zones drawn.
    pub fn draw_overlay<S: Surface + ?Sized>(&mut self, surface: &mut S) -> usize {
        if !self.active || !self.overlay_visible || surface.is_empty() {
            return 0;
        }
        self.update_screen_dimensions(surface.width(), surface.height());

        let frame = OverlayFrame {
            mode: self.mode,
            zones: self.registry.zones(self.mode),
            fingers: &self.fingers,
            icons: &self.icons,
            style: &self.style,
        };
        render_overlay(surface, &frame)
    }
}

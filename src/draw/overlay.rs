//! Draws the active zone layout on top of the frame.
//!
//! Each pass scales zones from the logical reference resolution to the
//! surface size, then per zone: highlight if held, border, icon. Diagonal
//! zones are hit-testable but never drawn.

use super::blend::{blit_icon, fill_rect, outline_rect};
use super::color::Color;
use super::icon::IconStore;
use super::surface::Surface;
use crate::config::OverlayConfig;
use crate::input::{FingerTracker, Mode};
use crate::layout::{REFERENCE_HEIGHT, REFERENCE_WIDTH, TouchZone};

/// Icons cover this fraction of the shorter zone side.
const ICON_SCALE_NUM: u32 = 2;
const ICON_SCALE_DEN: u32 = 3;

/// Border and highlight colours for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeColors {
    pub border: Color,
    pub pressed: Color,
}

/// Resolved overlay appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStyle {
    pub border_thickness: u32,
    pub game: ModeColors,
    pub menu: ModeColors,
}

impl OverlayStyle {
    pub fn colors(&self, mode: Mode) -> ModeColors {
        match mode {
            Mode::Game => self.game,
            Mode::Menu => self.menu,
        }
    }
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self::from(&OverlayConfig::default())
    }
}

impl From<&OverlayConfig> for OverlayStyle {
    fn from(config: &OverlayConfig) -> Self {
        let [mr, mg, mb] = config.menu_border_color;
        let [pr, pg, pb] = config.menu_pressed_color;
        Self {
            border_thickness: config.border_thickness,
            game: ModeColors {
                border: Color::from_array(config.game_border_color),
                pressed: Color::from_array(config.game_pressed_color),
            },
            menu: ModeColors {
                border: Color::rgb(mr, mg, mb),
                pressed: Color::rgb(pr, pg, pb),
            },
        }
    }
}

/// Everything a single overlay pass reads.
#[derive(Debug, Clone, Copy)]
pub struct OverlayFrame<'a> {
    pub mode: Mode,
    pub zones: &'a [TouchZone],
    pub fingers: &'a FingerTracker,
    pub icons: &'a IconStore,
    pub style: &'a OverlayStyle,
}

/// Renders the zones of `frame` into `surface`.
///
/// Returns the number of zones drawn. A zero-area surface draws nothing.
pub fn render_overlay<S: Surface + ?Sized>(surface: &mut S, frame: &OverlayFrame<'_>) -> usize {
    if surface.is_empty() {
        return 0;
    }
    let reference = (REFERENCE_WIDTH, REFERENCE_HEIGHT);
    let physical = (surface.width(), surface.height());
    let colors = frame.style.colors(frame.mode);

    let mut drawn = 0;
    for (index, zone) in frame.zones.iter().enumerate() {
        if !zone.is_drawn() {
            continue;
        }
        let rect = zone.rect.scaled(reference, physical);
        if !rect.is_valid() {
            continue;
        }

        if frame.fingers.holds(index) {
            fill_rect(surface, rect, colors.pressed);
        }
        outline_rect(surface, rect, frame.style.border_thickness, colors.border);

        if let Some(icon) = frame.icons.get(zone.control) {
            let shorter = rect.width.min(rect.height).max(0) as u32;
            let size = shorter * ICON_SCALE_NUM / ICON_SCALE_DEN;
            blit_icon(surface, icon, rect, size);
        }
        drawn += 1;
    }
    drawn
}

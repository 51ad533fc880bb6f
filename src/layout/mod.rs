//! Touch zone registry.
//!
//! Zones are authored in a fixed logical reference resolution and grouped into
//! one ordered list per [`Mode`]. Hit-testing walks a list in declaration
//! order and returns the first match, so overlapping zones resolve to the
//! earliest-declared one.

pub mod control;
pub mod tables;
pub mod zone;

pub use control::{Control, Diagonal, GameButton, MenuAction};
pub use zone::TouchZone;

use crate::input::Mode;

/// Width of the logical coordinate space zones are authored in.
pub const REFERENCE_WIDTH: u32 = 1024;
/// Height of the logical coordinate space zones are authored in.
pub const REFERENCE_HEIGHT: u32 = 768;

/// Immutable per-mode zone tables.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    game: Vec<TouchZone>,
    menu: Vec<TouchZone>,
}

impl Default for ZoneRegistry {
    fn default() -> Self {
        Self::new(tables::GAME_ZONES.to_vec(), tables::MENU_ZONES.to_vec())
    }
}

impl ZoneRegistry {
    /// Builds a registry from explicit zone lists (declaration order matters).
    pub fn new(game: Vec<TouchZone>, menu: Vec<TouchZone>) -> Self {
        Self { game, menu }
    }

    /// Zones active in the given mode, in declaration order.
    pub fn zones(&self, mode: Mode) -> &[TouchZone] {
        match mode {
            Mode::Game => &self.game,
            Mode::Menu => &self.menu,
        }
    }

    pub fn zone(&self, mode: Mode, index: usize) -> Option<&TouchZone> {
        self.zones(mode).get(index)
    }

    /// Returns the index of the first zone containing the logical point.
    pub fn hit_test(&self, mode: Mode, x: i32, y: i32) -> Option<usize> {
        self.zones(mode).iter().position(|zone| zone.contains(x, y))
    }
}

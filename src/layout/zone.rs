//! Touch zone definition.

use super::control::Control;
use crate::util::Rect;

/// A rectangular hit-test region in logical reference coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchZone {
    pub rect: Rect,
    pub control: Control,
    /// Short caption; `None` for zones that are never drawn.
    pub label: Option<&'static str>,
}

impl TouchZone {
    pub const fn new(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        control: Control,
        label: Option<&'static str>,
    ) -> Self {
        Self {
            rect: Rect {
                x,
                y,
                width,
                height,
            },
            control,
            label,
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains(x, y)
    }

    /// Whether the overlay draws an outline and highlight for this zone.
    pub fn is_drawn(&self) -> bool {
        !self.control.is_diagonal()
    }
}

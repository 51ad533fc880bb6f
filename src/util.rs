//! Geometry helpers shared by the layout, input and drawing modules.
//!
//! All rectangles are half-open: a point on the right or bottom edge lies
//! outside, which is what makes abutting zones tile without overlap.

/// Axis-aligned rectangle in either logical or physical pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Builds a rectangle, returning `None` when it has no area.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(
            min_x,
            min_y,
            max_x.saturating_sub(min_x),
            max_y.saturating_sub(min_y),
        )
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if the point lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Maps the rectangle from one resolution to another.
    ///
    /// Each coordinate is multiplied by `to / from` independently per axis and
    /// truncated toward zero. The result may be degenerate (zero width) when
    /// the target is much smaller than the source.
    pub fn scaled(&self, from: (u32, u32), to: (u32, u32)) -> Rect {
        Rect {
            x: scale_coord(self.x, from.0, to.0),
            y: scale_coord(self.y, from.1, to.1),
            width: scale_coord(self.width, from.0, to.0),
            height: scale_coord(self.height, from.1, to.1),
        }
    }

    /// Clamps the rectangle to `[0, width) x [0, height)`.
    ///
    /// Returns `None` if nothing of the rectangle remains visible.
    pub fn clipped(&self, width: u32, height: u32) -> Option<Rect> {
        let max_w = width.min(i32::MAX as u32) as i32;
        let max_h = height.min(i32::MAX as u32) as i32;
        let min_x = self.x.max(0);
        let min_y = self.y.max(0);
        let max_x = self.right().min(max_w);
        let max_y = self.bottom().min(max_h);
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Scales a single coordinate by `to / from`, truncating toward zero.
///
/// A zero `from` leaves the value untouched so callers never divide by zero.
pub fn scale_coord(value: i32, from: u32, to: u32) -> i32 {
    if from == 0 {
        return value;
    }
    let scaled = i64::from(value) * i64::from(to) / i64::from(from);
    scaled.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

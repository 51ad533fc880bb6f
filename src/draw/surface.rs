//! Pixel targets the overlay can draw into.

use thiserror::Error;

/// Errors raised when wrapping a raw framebuffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("pitch {pitch} is smaller than width {width}")]
    PitchTooSmall { pitch: usize, width: u32 },

    #[error("buffer holds {actual} pixels, {needed} needed for {width}x{height} (pitch {pitch})")]
    BufferTooSmall {
        actual: usize,
        needed: usize,
        width: u32,
        height: u32,
        pitch: usize,
    },

    #[error("geometry {width}x{height} with pitch {pitch} overflows the address space")]
    Overflow { width: u32, height: u32, pitch: usize },
}

/// A 16-bit RGB565 pixel target.
///
/// Coordinates outside `[0, width) x [0, height)` are ignored by `set_pixel`
/// and read back as `None`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Option<u16>;
    fn set_pixel(&mut self, x: u32, y: u32, value: u16);

    /// Returns true when the surface has no drawable pixels.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// Borrowed RGB565 framebuffer with a row pitch in pixels.
#[derive(Debug)]
pub struct Rgb565Surface<'a> {
    pixels: &'a mut [u16],
    width: u32,
    height: u32,
    pitch: usize,
}

impl<'a> Rgb565Surface<'a> {
    /// Wraps `pixels`, checking that every row fits in the buffer.
    pub fn new(
        pixels: &'a mut [u16],
        width: u32,
        height: u32,
        pitch: usize,
    ) -> Result<Self, SurfaceError> {
        if pitch < width as usize {
            return Err(SurfaceError::PitchTooSmall { pitch, width });
        }

        let needed = if height == 0 || width == 0 {
            0
        } else {
            pitch
                .checked_mul(height as usize - 1)
                .and_then(|rows| rows.checked_add(width as usize))
                .ok_or(SurfaceError::Overflow {
                    width,
                    height,
                    pitch,
                })?
        };
        if pixels.len() < needed {
            return Err(SurfaceError::BufferTooSmall {
                actual: pixels.len(),
                needed,
                width,
                height,
                pitch,
            });
        }

        Ok(Self {
            pixels,
            width,
            height,
            pitch,
        })
    }

    /// Wraps a tightly packed buffer (pitch equals width).
    pub fn packed(pixels: &'a mut [u16], width: u32, height: u32) -> Result<Self, SurfaceError> {
        Self::new(pixels, width, height, width as usize)
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.pitch + x as usize)
    }
}

impl Surface for Rgb565Surface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Option<u16> {
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    fn set_pixel(&mut self, x: u32, y: u32, value: u16) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = value;
        }
    }
}

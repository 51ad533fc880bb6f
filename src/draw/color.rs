//! RGBA colour type and RGB565 pixel packing.

/// Represents an RGBA colour with 8-bit components.
///
/// Alpha 255 is fully opaque, 0 fully transparent.
///
/// # Examples
///
/// ```
/// use touchpad_controls::draw::Color;
/// let highlight = Color::rgba(130, 8, 248, 153);
/// assert_eq!(highlight.to_rgb565(), 0x805F);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a colour with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [u8; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }

    /// Widens an RGB565 pixel into an opaque colour.
    ///
    /// Low bits are zero-filled, so white unpacks to (248, 252, 248).
    pub const fn from_rgb565(pixel: u16) -> Self {
        let r = ((pixel >> 11) & 0x1F) as u8;
        let g = ((pixel >> 5) & 0x3F) as u8;
        let b = (pixel & 0x1F) as u8;
        Self::rgb(r << 3, g << 2, b << 3)
    }

    /// Packs the colour channels into RGB565, ignoring alpha.
    pub const fn to_rgb565(self) -> u16 {
        (((self.r as u16) >> 3) << 11) | (((self.g as u16) >> 2) << 5) | ((self.b as u16) >> 3)
    }

    /// Returns the same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }
}

/// Blends `src` over an RGB565 destination pixel.
///
/// Opaque sources replace the pixel, transparent ones leave it untouched.
/// Otherwise each channel is `(s * a + d * (255 - a)) / 255` on the widened
/// destination value.
pub fn blend_rgb565(dst: u16, src: Color) -> u16 {
    match src.a {
        255 => src.to_rgb565(),
        0 => dst,
        a => {
            let d = Color::from_rgb565(dst);
            let mix = |s: u8, d: u8| -> u8 {
                let a = u32::from(a);
                ((u32::from(s) * a + u32::from(d) * (255 - a)) / 255) as u8
            };
            Color::rgb(mix(src.r, d.r), mix(src.g, d.g), mix(src.b, d.b)).to_rgb565()
        }
    }
}

// ============================================================================
// Overlay palette
// ============================================================================

/// Translucent light grey used for game-mode zone borders.
pub const GAME_BORDER: Color = Color::rgba(205, 205, 205, 153);

/// Translucent violet used for pressed game-mode zones.
pub const GAME_PRESSED: Color = Color::rgba(130, 8, 248, 153);

/// Opaque light grey used for menu-mode zone borders (0xCE79).
pub const MENU_BORDER: Color = Color::rgb(205, 205, 205);

/// Opaque periwinkle used for pressed menu-mode zones (0x841F).
pub const MENU_PRESSED: Color = Color::rgb(128, 128, 248);

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

//! Software rendering of the touch overlay onto RGB565 framebuffers.
//!
//! This module defines the drawing types used by the overlay:
//! - [`Color`]: RGBA colour with RGB565 packing and alpha blending
//! - [`Surface`]: the pixel target, with [`Rgb565Surface`] over a borrowed buffer
//! - [`Icon`] / [`IconStore`]: decoded zone icons
//! - [`render_overlay`]: the per-frame zone pass

pub mod blend;
pub mod color;
pub mod icon;
pub mod overlay;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{Color, blend_rgb565};
pub use icon::{Icon, IconError, IconStore, load_icon};
pub use overlay::{ModeColors, OverlayFrame, OverlayStyle, render_overlay};
pub use surface::{Rgb565Surface, Surface, SurfaceError};

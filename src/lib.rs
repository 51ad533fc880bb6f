//! On-screen touch controls for button-less console frontends.
//!
//! Translates multi-touch pointer events into an emulated pad bitmask (game
//! mode) or discrete navigation keys (menu mode), and draws the control
//! overlay onto an RGB565 framebuffer. The [`input::TouchControls`] context
//! owns all state; hosts feed it events and read results back once per frame.

pub mod config;
pub mod draw;
pub mod input;
pub mod layout;
pub mod util;

pub use config::Config;
pub use input::{Mode, TouchControls};

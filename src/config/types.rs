//! Configuration type definitions.

use super::enums::PolicyKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Overlay appearance.
///
/// Game mode draws translucent borders and highlights so the emulated picture
/// stays visible underneath; menu mode draws them opaque.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OverlayConfig {
    /// Show the on-screen controls at startup
    #[serde(default = "default_visible")]
    pub visible: bool,

    /// Outline thickness in physical pixels (valid range: 1 - 8)
    #[serde(default = "default_border_thickness")]
    pub border_thickness: u32,

    /// Game-mode border colour [R, G, B, A] (0-255)
    #[serde(default = "default_game_border_color")]
    pub game_border_color: [u8; 4],

    /// Game-mode pressed highlight [R, G, B, A] (0-255)
    #[serde(default = "default_game_pressed_color")]
    pub game_pressed_color: [u8; 4],

    /// Menu-mode border colour [R, G, B], drawn opaque
    #[serde(default = "default_menu_border_color")]
    pub menu_border_color: [u8; 3],

    /// Menu-mode pressed highlight [R, G, B], drawn opaque
    #[serde(default = "default_menu_pressed_color")]
    pub menu_pressed_color: [u8; 3],
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            visible: default_visible(),
            border_thickness: default_border_thickness(),
            game_border_color: default_game_border_color(),
            game_pressed_color: default_game_pressed_color(),
            menu_border_color: default_menu_border_color(),
            menu_pressed_color: default_menu_pressed_color(),
        }
    }
}

/// Where zone icons are looked up.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IconsConfig {
    /// Directories searched in order; the first readable copy of each icon wins
    #[serde(default = "default_search_paths")]
    pub search_paths: Vec<PathBuf>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            search_paths: default_search_paths(),
        }
    }
}

/// Menu tap delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MenuConfig {
    /// Delivery strategy (tap-commit, one-shot, min-hold, debounce, queue, sync-poll)
    #[serde(default)]
    pub policy: PolicyKind,

    /// min-hold: how long an action stays reported after release, in ms
    #[serde(default = "default_min_hold_ms")]
    pub min_hold_ms: u64,

    /// debounce: cooldown after a delivered press, in ms
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// sync-poll: how long a promoted action stays active, in ms
    #[serde(default = "default_sync_poll_active_ms")]
    pub sync_poll_active_ms: u64,

    /// queue: maximum buffered actions (valid range: 1 - 64)
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            policy: PolicyKind::default(),
            min_hold_ms: default_min_hold_ms(),
            debounce_ms: default_debounce_ms(),
            sync_poll_active_ms: default_sync_poll_active_ms(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

/// Pointer input settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Maximum stale pointer events discarded on a mode switch (valid range: 1 - 4096)
    #[serde(default = "default_stale_event_drain_limit")]
    pub stale_event_drain_limit: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            stale_event_drain_limit: default_stale_event_drain_limit(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_visible() -> bool {
    true
}

fn default_border_thickness() -> u32 {
    2
}

fn default_game_border_color() -> [u8; 4] {
    [205, 205, 205, 153] // ~60% opacity
}

fn default_game_pressed_color() -> [u8; 4] {
    [130, 8, 248, 153]
}

fn default_menu_border_color() -> [u8; 3] {
    [205, 205, 205]
}

fn default_menu_pressed_color() -> [u8; 3] {
    [128, 128, 248]
}

fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(data) = dirs::data_dir() {
        paths.push(data.join("touchpad-controls").join("icons"));
    }
    paths.push(PathBuf::from("."));
    paths
}

fn default_min_hold_ms() -> u64 {
    150
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_sync_poll_active_ms() -> u64 {
    120
}

fn default_queue_capacity() -> usize {
    16
}

fn default_stale_event_drain_limit() -> usize {
    256
}

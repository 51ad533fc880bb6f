//! Touch input handling and mode state machine.
//!
//! This module translates host pointer events into game pad state and menu
//! actions. It tracks which zone each finger holds, aggregates held zones
//! into a pad bitmask, and routes menu taps through a pluggable delivery
//! strategy.

pub mod buttons;
pub mod events;
pub mod fingers;
pub mod menu;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use buttons::{ButtonAggregator, ButtonMask};
pub use events::{
    EventQueue, HostChannel, HostEvent, Key, KeyEvent, KeySink, PointerEvent, PointerKind,
    TouchResponse,
};
pub use fingers::{FingerTracker, MAX_FINGERS};
pub use menu::{MenuButtons, MenuPolicy, MenuPolicySettings, build_policy};
pub use mode::Mode;
pub use state::TouchControls;

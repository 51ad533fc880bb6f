//! Touch controls context and mode transitions.

use crate::config::{Config, PolicyKind};
use crate::draw::{IconStore, OverlayStyle};
use crate::input::buttons::{ButtonAggregator, ButtonMask};
use crate::input::events::HostChannel;
use crate::input::fingers::FingerTracker;
use crate::input::menu::{MenuButtons, MenuPolicy, MenuPolicySettings, build_policy};
use crate::input::mode::Mode;
use crate::layout::{REFERENCE_HEIGHT, REFERENCE_WIDTH, TouchZone, ZoneRegistry};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// All touch input and overlay state, owned by the frame loop.
///
/// This is the only writer of the current [`Mode`]. Pointer events come in
/// through [`TouchControls::handle_event`], the emulation loop samples
/// [`TouchControls::game_buttons`], the menu loop either receives synthetic
/// keys on the host channel or samples [`TouchControls::menu_buttons`], and
/// the video path calls [`TouchControls::draw_overlay`] once per frame.
pub struct TouchControls {
    /// Per-mode zone tables
    pub(crate) registry: ZoneRegistry,
    /// Layout currently driven by touch input
    pub(crate) mode: Mode,
    /// Finger slot to zone assignments
    pub(crate) fingers: FingerTracker,
    /// Game pad bitmask derived from the fingers
    pub(crate) buttons: ButtonAggregator,
    /// Menu tap delivery strategy
    pub(crate) policy: Box<dyn MenuPolicy>,
    /// Decoded zone icons
    pub(crate) icons: IconStore,
    /// Overlay colours and border thickness
    pub(crate) style: OverlayStyle,
    /// Whether the overlay is drawn at all
    pub(crate) overlay_visible: bool,
    /// False before `init` and after `finish`
    pub(crate) active: bool,
    /// Physical framebuffer size pointer coordinates are reported in
    pub(crate) screen_width: u32,
    pub(crate) screen_height: u32,
    /// Upper bound on stale pointer events dropped per mode switch
    pub(crate) drain_limit: usize,
    icon_paths: Vec<PathBuf>,
}

impl TouchControls {
    /// Builds the controls from config without touching the host or disk.
    ///
    /// Screen dimensions start at the reference resolution; the overlay pass
    /// and [`Self::update_screen_dimensions`] keep them current.
    pub fn new(config: &Config) -> Self {
        let settings = MenuPolicySettings::from(&config.menu);
        Self {
            registry: ZoneRegistry::default(),
            mode: Mode::Game,
            fingers: FingerTracker::new(),
            buttons: ButtonAggregator::new(),
            policy: build_policy(&settings),
            icons: IconStore::new(),
            style: OverlayStyle::from(&config.overlay),
            overlay_visible: config.overlay.visible,
            active: true,
            screen_width: REFERENCE_WIDTH,
            screen_height: REFERENCE_HEIGHT,
            drain_limit: config.input.stale_event_drain_limit,
            icon_paths: config.icons.search_paths.clone(),
        }
    }

    /// Builds the controls, drops pointer events queued before startup and
    /// loads the zone icons.
    pub fn init<H: HostChannel>(config: &Config, host: &mut H) -> Self {
        let mut controls = Self::new(config);

        let drained = host.discard_pointer_events(controls.drain_limit);
        if drained > 0 {
            debug!("Discarded {drained} pointer events queued before startup");
        }

        let paths = controls.icon_paths.clone();
        controls.icons.load_all(&paths);

        info!(
            "Touch controls ready: {} game zones, {} menu zones, menu policy {}",
            controls.registry.zones(Mode::Game).len(),
            controls.registry.zones(Mode::Menu).len(),
            controls.policy.kind()
        );
        controls
    }

    /// Replaces the zone tables. Clears any finger state.
    pub fn with_registry(mut self, registry: ZoneRegistry) -> Self {
        self.registry = registry;
        self.clear_touch_state();
        self
    }

    /// Replaces the menu delivery strategy.
    pub fn with_policy(mut self, policy: Box<dyn MenuPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Mutable access to the icon store, e.g. to insert pre-decoded icons.
    pub fn icons_mut(&mut self) -> &mut IconStore {
        &mut self.icons
    }

    /// Releases icons and stops reacting to events.
    pub fn finish(&mut self) {
        if !self.active {
            return;
        }
        self.icons.release();
        self.clear_touch_state();
        self.active = false;
        info!("Touch controls shut down");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn policy_kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Switches layouts.
    ///
    /// Fingers, pad state and menu policy state are cleared and pending
    /// pointer events are drained (bounded), so a lift in the old layout is
    /// never seen as a press in the new one. Returns false if already in
    /// `mode`.
    pub fn set_mode<H: HostChannel>(&mut self, mode: Mode, host: &mut H) -> bool {
        if self.mode == mode {
            return false;
        }

        self.clear_touch_state();
        let drained = host.discard_pointer_events(self.drain_limit);
        debug!("Discarded {drained} stale pointer events on mode switch");

        info!("Touch mode: {} -> {}", self.mode, mode);
        self.mode = mode;
        true
    }

    pub(crate) fn clear_touch_state(&mut self) {
        self.fingers.reset();
        self.buttons.clear();
        self.policy.reset();
    }

    /// Zones of the active mode.
    pub fn zones(&self) -> &[TouchZone] {
        self.registry.zones(self.mode)
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    pub fn fingers(&self) -> &FingerTracker {
        &self.fingers
    }

    /// Pad bitmask for the emulation loop.
    pub fn game_buttons(&self) -> ButtonMask {
        self.buttons.current()
    }

    /// Menu bitmask for one read by a polling menu loop.
    ///
    /// Always empty outside menu mode and for the tap-commit strategy, whose
    /// actions arrive as key events instead.
    pub fn menu_buttons(&mut self, now: Instant) -> MenuButtons {
        if self.mode != Mode::Menu || !self.active {
            return MenuButtons::empty();
        }
        self.policy.poll(now)
    }

    pub fn set_overlay_visible(&mut self, visible: bool) {
        if self.overlay_visible != visible {
            debug!("Overlay visible: {visible}");
        }
        self.overlay_visible = visible;
    }

    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// Records the physical framebuffer size pointer events are reported in.
    ///
    /// Zero dimensions are ignored.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            debug!("Ignoring empty screen size {width}x{height}");
            return;
        }
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn screen_dimensions(&self) -> (u32, u32) {
        (self.screen_width, self.screen_height)
    }
}

impl Drop for TouchControls {
    fn drop(&mut self) {
        self.finish();
    }
}

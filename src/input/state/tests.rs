use super::*;
use crate::config::{Config, PolicyKind};
use crate::draw::{Icon, Rgb565Surface};
use crate::input::events::{
    EventQueue, HostEvent, Key, KeyEvent, PointerEvent, TouchResponse,
};
use crate::input::menu::OneShot;
use crate::input::Mode;
use crate::layout::{Control, Diagonal, GameButton, MenuAction};
use std::time::Instant;
use tempfile::TempDir;

fn create_controls() -> TouchControls {
    TouchControls::new(&Config::default())
}

/// Centre of the zone bound to `control` in `mode`, in reference coordinates.
fn centre(controls: &TouchControls, mode: Mode, control: Control) -> (i32, i32) {
    let zone = controls
        .registry()
        .zones(mode)
        .iter()
        .find(|zone| zone.control == control)
        .unwrap();
    (
        zone.rect.x + zone.rect.width / 2,
        zone.rect.y + zone.rect.height / 2,
    )
}

fn press(
    controls: &mut TouchControls,
    host: &mut EventQueue,
    contact: u32,
    at: (i32, i32),
) -> TouchResponse {
    let event = HostEvent::Pointer(PointerEvent::down(contact, at.0, at.1));
    controls.handle_event(&event, host, Instant::now())
}

fn slide(controls: &mut TouchControls, host: &mut EventQueue, contact: u32, at: (i32, i32)) {
    let event = HostEvent::Pointer(PointerEvent::moved(contact, at.0, at.1, true));
    controls.handle_event(&event, host, Instant::now());
}

fn lift(controls: &mut TouchControls, host: &mut EventQueue, contact: u32) {
    let event = HostEvent::Pointer(PointerEvent::up(contact, 0, 0));
    controls.handle_event(&event, host, Instant::now());
}

fn menu_controls(host: &mut EventQueue) -> TouchControls {
    let mut controls = create_controls();
    controls.set_mode(Mode::Menu, host);
    controls
}

#[test]
fn test_press_and_release_game_button() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let cross = centre(&controls, Mode::Game, Control::Button(GameButton::Cross));

    assert_eq!(press(&mut controls, &mut host, 0, cross), TouchResponse::Handled);
    assert_eq!(controls.game_buttons().bits(), GameButton::Cross.bit());

    lift(&mut controls, &mut host, 0);
    assert!(controls.game_buttons().is_empty());
    assert!(controls.fingers().is_empty());
}

#[test]
fn test_diagonal_sets_both_cardinals() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let up_right = centre(&controls, Mode::Game, Control::Diagonal(Diagonal::UpRight));

    press(&mut controls, &mut host, 0, up_right);
    let mask = controls.game_buttons();
    assert!(mask.contains(GameButton::Up));
    assert!(mask.contains(GameButton::Right));
    assert_eq!(mask.count(), 2);
}

#[test]
fn test_bit_count_matches_held_zones() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let held = [
        Control::Button(GameButton::Square),
        Control::Button(GameButton::R1),
        Control::Button(GameButton::Select),
        Control::Diagonal(Diagonal::DownRight),
    ];
    for (contact, control) in held.iter().enumerate() {
        let at = centre(&controls, Mode::Game, *control);
        press(&mut controls, &mut host, contact as u32, at);
    }
    assert_eq!(controls.game_buttons().count(), 3 + 2);
    assert_eq!(controls.fingers().active_count(), 4);

    lift(&mut controls, &mut host, 1);
    assert_eq!(controls.game_buttons().count(), 2 + 2);
    assert!(!controls.game_buttons().contains(GameButton::R1));
}

#[test]
fn test_release_of_empty_slot_is_idempotent() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let start = centre(&controls, Mode::Game, Control::Button(GameButton::Start));
    press(&mut controls, &mut host, 0, start);

    let fingers_before = controls.fingers().clone();
    let buttons_before = controls.game_buttons();

    lift(&mut controls, &mut host, 4);
    lift(&mut controls, &mut host, 4);

    assert_eq!(controls.fingers(), &fingers_before);
    assert_eq!(controls.game_buttons(), buttons_before);
    assert!(host.is_empty());
}

#[test]
fn test_press_outside_zones_leaves_slot_unchanged() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let up = centre(&controls, Mode::Game, Control::Button(GameButton::Up));
    press(&mut controls, &mut host, 2, up);

    press(&mut controls, &mut host, 2, (512, 384));
    assert!(controls.game_buttons().contains(GameButton::Up));
}

#[test]
fn test_mode_switch_clears_state_and_drains_pointer_events() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    for (contact, control) in [
        Control::Button(GameButton::Triangle),
        Control::Diagonal(Diagonal::UpLeft),
    ]
    .iter()
    .enumerate()
    {
        let at = centre(&controls, Mode::Game, *control);
        press(&mut controls, &mut host, contact as u32, at);
    }
    assert!(!controls.game_buttons().is_empty());

    host.push(HostEvent::Pointer(PointerEvent::up(0, 10, 10)));
    host.push(HostEvent::Key(KeyEvent::press(Key::Escape)));
    host.push(HostEvent::Pointer(PointerEvent::moved(1, 10, 10, true)));

    assert!(controls.set_mode(Mode::Menu, &mut host));
    assert_eq!(controls.mode(), Mode::Menu);
    assert!(controls.game_buttons().is_empty());
    assert!(controls.fingers().is_empty());
    assert_eq!(host.len(), 1);
    assert_eq!(host.take_keys(), vec![KeyEvent::press(Key::Escape)]);
}

#[test]
fn test_mode_switch_is_idempotent() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let square = centre(&controls, Mode::Game, Control::Button(GameButton::Square));
    press(&mut controls, &mut host, 0, square);
    host.push(HostEvent::Pointer(PointerEvent::up(0, 0, 0)));

    assert!(!controls.set_mode(Mode::Game, &mut host));
    assert!(controls.game_buttons().contains(GameButton::Square));
    assert_eq!(host.len(), 1);
}

#[test]
fn test_mode_switch_drain_is_bounded() {
    let mut config = Config::default();
    config.input.stale_event_drain_limit = 2;
    let mut controls = TouchControls::new(&config);
    let mut host = EventQueue::new();
    for contact in 0..5 {
        host.push(HostEvent::Pointer(PointerEvent::up(contact, 0, 0)));
    }

    controls.set_mode(Mode::Menu, &mut host);
    assert_eq!(host.len(), 3);
}

#[test]
fn test_open_menu_zone_reports_without_binding() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let menu = centre(&controls, Mode::Game, Control::OpenMenu);

    assert_eq!(press(&mut controls, &mut host, 0, menu), TouchResponse::OpenMenu);
    assert!(controls.fingers().is_empty());
    assert!(controls.game_buttons().is_empty());
}

#[test]
fn test_slide_rebinds_in_game_mode() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let up = centre(&controls, Mode::Game, Control::Button(GameButton::Up));
    let right = centre(&controls, Mode::Game, Control::Button(GameButton::Right));

    press(&mut controls, &mut host, 0, up);
    slide(&mut controls, &mut host, 0, right);
    assert_eq!(controls.game_buttons().bits(), GameButton::Right.bit());

    // Sliding off every zone drops the button.
    slide(&mut controls, &mut host, 0, (512, 384));
    assert!(controls.game_buttons().is_empty());
}

#[test]
fn test_slide_onto_open_menu_zone_binds_nothing() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let select = centre(&controls, Mode::Game, Control::Button(GameButton::Select));
    let menu = centre(&controls, Mode::Game, Control::OpenMenu);

    press(&mut controls, &mut host, 0, select);
    slide(&mut controls, &mut host, 0, menu);
    assert!(controls.fingers().is_empty());
    assert!(controls.game_buttons().is_empty());
}

#[test]
fn test_hover_is_ignored() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let circle = centre(&controls, Mode::Game, Control::Button(GameButton::Circle));

    let hover = HostEvent::Pointer(PointerEvent::moved(0, circle.0, circle.1, false));
    assert_eq!(
        controls.handle_event(&hover, &mut host, Instant::now()),
        TouchResponse::Handled
    );
    assert!(controls.game_buttons().is_empty());
    assert!(controls.fingers().is_empty());
}

#[test]
fn test_physical_coordinates_are_scaled() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    controls.update_screen_dimensions(512, 384);

    // Logical (120, 564) is the middle of D-pad up.
    press(&mut controls, &mut host, 0, (60, 282));
    assert_eq!(controls.game_buttons().bits(), GameButton::Up.bit());
}

#[test]
fn test_out_of_range_contact_aliases_to_slot_zero() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let cross = centre(&controls, Mode::Game, Control::Button(GameButton::Cross));
    let circle = centre(&controls, Mode::Game, Control::Button(GameButton::Circle));

    press(&mut controls, &mut host, 0, cross);
    press(&mut controls, &mut host, 99, circle);
    assert_eq!(controls.game_buttons().bits(), GameButton::Circle.bit());
    assert_eq!(controls.fingers().active_count(), 1);
}

#[test]
fn test_tap_commit_emits_one_pair_per_tap() {
    let mut host = EventQueue::new();
    let mut controls = menu_controls(&mut host);
    assert_eq!(controls.policy_kind(), PolicyKind::TapCommit);
    let ok = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Ok));

    press(&mut controls, &mut host, 0, ok);
    assert_eq!(
        host.take_keys(),
        vec![KeyEvent::press(Key::Return), KeyEvent::release(Key::Return)]
    );
    // Visual press state only.
    assert!(controls.fingers().zone_for_contact(0).is_some());

    lift(&mut controls, &mut host, 0);
    assert!(host.take_keys().is_empty());
    assert!(controls.fingers().is_empty());
    assert!(controls.menu_buttons(Instant::now()).is_empty());
}

#[test]
fn test_tap_commit_overlapping_taps_stay_paired() {
    let mut host = EventQueue::new();
    let mut controls = menu_controls(&mut host);
    let up = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Up));
    let back = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Back));

    press(&mut controls, &mut host, 0, up);
    press(&mut controls, &mut host, 1, back);
    lift(&mut controls, &mut host, 0);
    lift(&mut controls, &mut host, 1);

    assert_eq!(
        host.take_keys(),
        vec![
            KeyEvent::press(Key::Up),
            KeyEvent::release(Key::Up),
            KeyEvent::press(Key::Escape),
            KeyEvent::release(Key::Escape),
        ]
    );
}

#[test]
fn test_menu_slide_does_not_retrigger() {
    let mut host = EventQueue::new();
    let mut controls = menu_controls(&mut host);
    let left = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Left));
    let right = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Right));

    press(&mut controls, &mut host, 0, left);
    slide(&mut controls, &mut host, 0, right);
    lift(&mut controls, &mut host, 0);

    assert_eq!(
        host.take_keys(),
        vec![KeyEvent::press(Key::Left), KeyEvent::release(Key::Left)]
    );
}

#[test]
fn test_polled_policy_through_controls() {
    let mut host = EventQueue::new();
    let mut controls = create_controls().with_policy(Box::new(OneShot::new()));
    controls.set_mode(Mode::Menu, &mut host);
    let down = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Down));

    press(&mut controls, &mut host, 0, down);
    lift(&mut controls, &mut host, 0);
    assert!(host.take_keys().is_empty());

    let now = Instant::now();
    assert!(controls.menu_buttons(now).contains(MenuAction::Down));
    assert!(controls.menu_buttons(now).is_empty());
}

#[test]
fn test_mode_switch_resets_policy_state() {
    let mut host = EventQueue::new();
    let mut controls = create_controls().with_policy(Box::new(OneShot::new()));
    controls.set_mode(Mode::Menu, &mut host);
    let ok = centre(&controls, Mode::Menu, Control::Menu(MenuAction::Ok));
    press(&mut controls, &mut host, 0, ok);

    controls.set_mode(Mode::Game, &mut host);
    controls.set_mode(Mode::Menu, &mut host);
    assert!(controls.menu_buttons(Instant::now()).is_empty());
}

#[test]
fn test_menu_buttons_empty_in_game_mode() {
    let mut controls = create_controls().with_policy(Box::new(OneShot::new()));
    assert!(controls.menu_buttons(Instant::now()).is_empty());
}

#[test]
fn test_non_pointer_events_are_ignored() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    let now = Instant::now();
    assert_eq!(
        controls.handle_event(&HostEvent::Other, &mut host, now),
        TouchResponse::Ignored
    );
    assert_eq!(
        controls.handle_event(&HostEvent::Key(KeyEvent::press(Key::Up)), &mut host, now),
        TouchResponse::Ignored
    );
}

#[test]
fn test_finish_releases_icons_and_ignores_events() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();
    controls.icons_mut().insert(
        Control::Button(GameButton::Cross),
        Icon::from_rgba(vec![255; 4], 1, 1).unwrap(),
    );

    controls.finish();
    assert!(!controls.is_active());
    assert_eq!(controls.icons.loaded_count(), 0);
    let cross = centre(&controls, Mode::Game, Control::Button(GameButton::Cross));
    assert_eq!(press(&mut controls, &mut host, 0, cross), TouchResponse::Ignored);
    assert!(controls.game_buttons().is_empty());
}

#[test]
fn test_init_drains_queue_and_loads_icons() {
    let temp = TempDir::new().unwrap();
    image::RgbaImage::from_pixel(2, 2, image::Rgba([9, 9, 9, 255]))
        .save(temp.path().join("control-square.png"))
        .unwrap();

    let mut config = Config::default();
    config.icons.search_paths = vec![temp.path().to_path_buf()];

    let mut host = EventQueue::new();
    host.push(HostEvent::Pointer(PointerEvent::down(0, 1, 1)));
    host.push(HostEvent::Other);

    let controls = TouchControls::init(&config, &mut host);
    assert_eq!(host.len(), 1);
    assert_eq!(controls.icons.loaded_count(), 1);
    assert!(
        controls
            .icons
            .get(Control::Button(GameButton::Square))
            .is_some()
    );
}

#[test]
fn test_hidden_overlay_draws_nothing() {
    let mut controls = create_controls();
    controls.set_overlay_visible(false);

    let mut buf = vec![0u16; 64 * 48];
    let mut surface = Rgb565Surface::packed(&mut buf, 64, 48).unwrap();
    assert_eq!(controls.draw_overlay(&mut surface), 0);
    assert!(buf.iter().all(|p| *p == 0));
}

#[test]
fn test_draw_overlay_tracks_surface_size() {
    let mut controls = create_controls();
    let mut host = EventQueue::new();

    let mut buf = vec![0u16; 512 * 384];
    let mut surface = Rgb565Surface::packed(&mut buf, 512, 384).unwrap();
    assert!(controls.draw_overlay(&mut surface) > 0);
    assert_eq!(controls.screen_dimensions(), (512, 384));

    press(&mut controls, &mut host, 0, (60, 282));
    assert!(controls.game_buttons().contains(GameButton::Up));
}

#[test]
fn test_zero_sized_surface_is_skipped() {
    let mut controls = create_controls();
    let mut buf: Vec<u16> = Vec::new();
    let mut surface = Rgb565Surface::packed(&mut buf, 0, 0).unwrap();
    assert_eq!(controls.draw_overlay(&mut surface), 0);
    assert_eq!(controls.screen_dimensions(), (1024, 768));
}

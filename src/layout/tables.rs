//! Built-in layouts for the 1024x768 reference resolution.

use super::control::{Control, Diagonal, GameButton, MenuAction};
use super::zone::TouchZone;

const fn button(x: i32, y: i32, w: i32, h: i32, b: GameButton, label: &'static str) -> TouchZone {
    TouchZone::new(x, y, w, h, Control::Button(b), Some(label))
}

const fn diagonal(x: i32, y: i32, d: Diagonal) -> TouchZone {
    TouchZone::new(x, y, 80, 80, Control::Diagonal(d), None)
}

const fn menu(x: i32, y: i32, w: i32, h: i32, a: MenuAction, label: &'static str) -> TouchZone {
    TouchZone::new(x, y, w, h, Control::Menu(a), Some(label))
}

/// In-game layout: D-pad bottom left, face buttons bottom right.
pub static GAME_ZONES: [TouchZone; 19] = [
    // D-pad cardinals
    button(80, 525, 80, 80, GameButton::Up, "UP"),
    button(80, 685, 80, 80, GameButton::Down, "DN"),
    button(0, 605, 80, 80, GameButton::Left, "LT"),
    button(160, 605, 80, 80, GameButton::Right, "RT"),
    // D-pad corners
    diagonal(160, 525, Diagonal::UpRight),
    diagonal(0, 525, Diagonal::UpLeft),
    diagonal(160, 685, Diagonal::DownRight),
    diagonal(0, 685, Diagonal::DownLeft),
    // Face buttons
    button(864, 525, 80, 80, GameButton::Triangle, "/\\"),
    button(864, 685, 80, 80, GameButton::Cross, "X"),
    button(784, 605, 80, 80, GameButton::Square, "[]"),
    button(944, 605, 80, 80, GameButton::Circle, "O"),
    // Shoulders
    button(0, 338, 120, 60, GameButton::L1, "L1"),
    button(0, 398, 120, 60, GameButton::L2, "L2"),
    button(904, 338, 120, 60, GameButton::R1, "R1"),
    button(904, 398, 120, 60, GameButton::R2, "R2"),
    // Bottom edge
    button(400, 708, 100, 60, GameButton::Select, "SEL"),
    button(524, 708, 100, 60, GameButton::Start, "STA"),
    TouchZone::new(462, 0, 100, 50, Control::OpenMenu, Some("MENU")),
];

/// Menu layout: navigation pad bottom left, Back/OK bottom right.
pub static MENU_ZONES: [TouchZone; 6] = [
    menu(100, 510, 100, 80, MenuAction::Up, "UP"),
    menu(100, 678, 100, 80, MenuAction::Down, "DOWN"),
    menu(10, 594, 100, 80, MenuAction::Left, "LEFT"),
    menu(190, 594, 100, 80, MenuAction::Right, "RIGHT"),
    menu(734, 594, 120, 80, MenuAction::Back, "BACK"),
    menu(874, 594, 120, 80, MenuAction::Ok, "OK"),
];

//! Logical controls a touch zone can be bound to.

/// Emulated pad buttons, numbered by their bit position in the pad state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameButton {
    Select = 0,
    L3 = 1,
    R3 = 2,
    Start = 3,
    Up = 4,
    Right = 5,
    Down = 6,
    Left = 7,
    L2 = 8,
    R2 = 9,
    L1 = 10,
    R1 = 11,
    Triangle = 12,
    Circle = 13,
    Cross = 14,
    Square = 15,
}

impl GameButton {
    /// Every button in bit order.
    pub const ALL: [GameButton; 16] = [
        GameButton::Select,
        GameButton::L3,
        GameButton::R3,
        GameButton::Start,
        GameButton::Up,
        GameButton::Right,
        GameButton::Down,
        GameButton::Left,
        GameButton::L2,
        GameButton::R2,
        GameButton::L1,
        GameButton::R1,
        GameButton::Triangle,
        GameButton::Circle,
        GameButton::Cross,
        GameButton::Square,
    ];

    /// Bit position of this button in the pad bitmask.
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Single-bit mask for this button.
    pub const fn bit(self) -> u32 {
        1 << self.index()
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// D-pad diagonals. Each one presses two cardinal directions at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Diagonal {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Diagonal {
    /// The two cardinal directions this diagonal stands for.
    pub const fn components(self) -> [GameButton; 2] {
        match self {
            Diagonal::UpRight => [GameButton::Up, GameButton::Right],
            Diagonal::UpLeft => [GameButton::Up, GameButton::Left],
            Diagonal::DownRight => [GameButton::Down, GameButton::Right],
            Diagonal::DownLeft => [GameButton::Down, GameButton::Left],
        }
    }
}

/// Discrete navigation actions understood by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Up,
    Down,
    Left,
    Right,
    Ok,
    Back,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Up,
        MenuAction::Down,
        MenuAction::Left,
        MenuAction::Right,
        MenuAction::Ok,
        MenuAction::Back,
    ];

    /// Bit used for this action in polled menu bitmasks.
    pub const fn bit(self) -> u8 {
        match self {
            MenuAction::Up => 1 << 0,
            MenuAction::Down => 1 << 1,
            MenuAction::Left => 1 << 2,
            MenuAction::Right => 1 << 3,
            MenuAction::Ok => 1 << 4,
            MenuAction::Back => 1 << 5,
        }
    }
}

/// What pressing a zone means.
///
/// The signed integer codes returned by [`Control::code`] keep the numbering
/// used by frontends that store layouts as plain integer tables: non-negative
/// codes are pad bit numbers, negative codes are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// A single pad button.
    Button(GameButton),
    /// A D-pad diagonal covering two cardinal buttons.
    Diagonal(Diagonal),
    /// A menu navigation action.
    Menu(MenuAction),
    /// Asks the host to open its menu. Never held by a finger.
    OpenMenu,
}

pub const CODE_OPEN_MENU: i32 = -1;

impl Control {
    pub fn code(self) -> i32 {
        match self {
            Control::Button(button) => button.index() as i32,
            Control::OpenMenu => CODE_OPEN_MENU,
            Control::Menu(MenuAction::Up) => -10,
            Control::Menu(MenuAction::Down) => -11,
            Control::Menu(MenuAction::Left) => -12,
            Control::Menu(MenuAction::Right) => -13,
            Control::Menu(MenuAction::Ok) => -14,
            Control::Menu(MenuAction::Back) => -15,
            Control::Diagonal(Diagonal::UpRight) => -20,
            Control::Diagonal(Diagonal::UpLeft) => -21,
            Control::Diagonal(Diagonal::DownRight) => -22,
            Control::Diagonal(Diagonal::DownLeft) => -23,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        let control = match code {
            0.. => Control::Button(GameButton::from_index(code as u32)?),
            CODE_OPEN_MENU => Control::OpenMenu,
            -10 => Control::Menu(MenuAction::Up),
            -11 => Control::Menu(MenuAction::Down),
            -12 => Control::Menu(MenuAction::Left),
            -13 => Control::Menu(MenuAction::Right),
            -14 => Control::Menu(MenuAction::Ok),
            -15 => Control::Menu(MenuAction::Back),
            -20 => Control::Diagonal(Diagonal::UpRight),
            -21 => Control::Diagonal(Diagonal::UpLeft),
            -22 => Control::Diagonal(Diagonal::DownRight),
            -23 => Control::Diagonal(Diagonal::DownLeft),
            _ => return None,
        };
        Some(control)
    }

    /// Diagonal zones are hit-testable but never drawn.
    pub fn is_diagonal(self) -> bool {
        matches!(self, Control::Diagonal(_))
    }

    /// Pad bits set while a finger holds this control.
    pub fn pad_bits(self) -> u32 {
        match self {
            Control::Button(button) => button.bit(),
            Control::Diagonal(diagonal) => diagonal
                .components()
                .iter()
                .fold(0, |bits, button| bits | button.bit()),
            Control::Menu(_) | Control::OpenMenu => 0,
        }
    }

    pub fn menu_action(self) -> Option<MenuAction> {
        match self {
            Control::Menu(action) => Some(action),
            _ => None,
        }
    }
}

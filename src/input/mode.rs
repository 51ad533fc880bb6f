//! Input layout mode selection.

use std::fmt;

/// Which layout the touch controls are currently driving.
///
/// Each mode owns its own zone list; fingers, pad state and menu policy state
/// never carry over from one mode to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Emulation running: continuous pad bitmask (default)
    #[default]
    Game,
    /// Frontend menu open: discrete navigation actions
    Menu,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Menu => "menu",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "game" => Ok(Self::Game),
            "menu" => Ok(Self::Menu),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_mode_is_game() {
        assert_eq!(Mode::default(), Mode::Game);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Mode::from_str("game").unwrap(), Mode::Game);
        assert_eq!(Mode::from_str("MENU").unwrap(), Mode::Menu);
        assert!(Mode::from_str("pause").is_err());
    }

    #[test]
    fn test_display_matches_from_str() {
        for mode in [Mode::Game, Mode::Menu] {
            assert_eq!(Mode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }
}

//! Configuration enum types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How menu-mode taps reach the menu loop.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Inject a full key press+release per tap (default)
    #[default]
    TapCommit,
    /// Latch the press until the next menu read
    OneShot,
    /// Keep the action reported for a minimum time after release
    MinHold,
    /// Report each press once, then ignore it for a cooldown
    Debounce,
    /// Queue presses and hand out one per menu read
    Queue,
    /// Promote presses to a timed active state on the next read
    SyncPoll,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::TapCommit,
        PolicyKind::OneShot,
        PolicyKind::MinHold,
        PolicyKind::Debounce,
        PolicyKind::Queue,
        PolicyKind::SyncPoll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TapCommit => "tap-commit",
            Self::OneShot => "one-shot",
            Self::MinHold => "min-hold",
            Self::Debounce => "debounce",
            Self::Queue => "queue",
            Self::SyncPoll => "sync-poll",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn from_str_accepts_kebab_and_snake_case() {
        assert_eq!(PolicyKind::from_str("tap-commit"), Ok(PolicyKind::TapCommit));
        assert_eq!(PolicyKind::from_str("SYNC_POLL"), Ok(PolicyKind::SyncPoll));
        assert!(PolicyKind::from_str("latest").is_err());
    }

    #[test]
    fn display_round_trips() {
        for kind in PolicyKind::ALL {
            assert_eq!(PolicyKind::from_str(&kind.to_string()), Ok(kind));
        }
    }
}

//! Keyboard mapping and edge detection.
//!
//! Keys arrive as DOM-style identifiers (`"ArrowUp"`, `"Escape"`, `" "`).
//! Only the transition from released to pressed produces an intent, so
//! held keys and OS auto-repeat do not walk the menu.

use std::collections::HashSet;

use strum::{EnumIter, EnumString, IntoStaticStr};
use tracing::trace;

use super::Intent;

/// Keys the widget reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, IntoStaticStr)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    #[strum(serialize = "Escape", serialize = "Esc")]
    Escape,
    Enter,
    #[strum(serialize = "Space", serialize = " ", serialize = "Spacebar")]
    Space,
}

impl NavKey {
    /// Parse a key identifier; unknown keys yield `None`.
    pub fn from_identifier(key: &str) -> Option<Self> {
        key.parse().ok()
    }

    pub fn intent(self) -> Intent {
        match self {
            Self::ArrowUp => Intent::Up,
            Self::ArrowDown => Intent::Down,
            Self::ArrowLeft => Intent::Left,
            Self::ArrowRight => Intent::Right,
            Self::Escape => Intent::Back,
            Self::Enter | Self::Space => Intent::Select,
        }
    }
}

/// Tracks which keys are held and emits intents on press edges only.
#[derive(Debug, Default)]
pub struct KeyEdgeDetector {
    held: HashSet<NavKey>,
}

impl KeyEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: NavKey) -> Option<Intent> {
        if self.held.insert(key) {
            Some(key.intent())
        } else {
            trace!("Ignoring repeat of {:?}", key);
            None
        }
    }

    pub fn key_up(&mut self, key: NavKey) {
        self.held.remove(&key);
    }

    /// Forget held keys, e.g. when the window loses focus and releases are lost.
    pub fn reset(&mut self) {
        self.held.clear();
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_identifiers() {
        assert_eq!(NavKey::from_identifier("ArrowUp"), Some(NavKey::ArrowUp));
        assert_eq!(NavKey::from_identifier("Escape"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_identifier("Esc"), Some(NavKey::Escape));
        assert_eq!(NavKey::from_identifier(" "), Some(NavKey::Space));
        assert_eq!(NavKey::from_identifier("Enter"), Some(NavKey::Enter));
        assert_eq!(NavKey::from_identifier("a"), None);
    }

    #[test]
    fn test_key_intents() {
        assert_eq!(NavKey::ArrowLeft.intent(), Intent::Left);
        assert_eq!(NavKey::Escape.intent(), Intent::Back);
        assert_eq!(NavKey::Space.intent(), Intent::Select);
        for key in NavKey::iter() {
            let _ = key.intent();
        }
    }

    #[test]
    fn test_repeat_suppressed() {
        let mut keys = KeyEdgeDetector::new();
        assert_eq!(keys.key_down(NavKey::ArrowUp), Some(Intent::Up));
        assert_eq!(keys.key_down(NavKey::ArrowUp), None);

        keys.key_up(NavKey::ArrowUp);
        assert_eq!(keys.key_down(NavKey::ArrowUp), Some(Intent::Up));
    }

    #[test]
    fn test_keys_independent() {
        let mut keys = KeyEdgeDetector::new();
        assert!(keys.key_down(NavKey::ArrowUp).is_some());
        assert_eq!(keys.key_down(NavKey::Escape), Some(Intent::Back));
    }

    #[test]
    fn test_reset_releases_all() {
        let mut keys = KeyEdgeDetector::new();
        keys.key_down(NavKey::ArrowDown);
        keys.reset();
        assert_eq!(keys.key_down(NavKey::ArrowDown), Some(Intent::Down));
    }
}

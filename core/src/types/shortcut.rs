//! Keyboard chords in the `[Ctrl+][Alt+][Shift+]<e.code>` format.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A key plus modifiers, e.g. `Ctrl+KeyK`.
///
/// Ctrl and Cmd/Meta are folded into one primary modifier, so `Ctrl+KeyK`
/// also fires for Cmd+K.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    pub primary: bool,
    pub alt: bool,
    pub shift: bool,
    /// DOM `KeyboardEvent.code` value such as `KeyK` or `Slash`.
    pub code: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("shortcut is empty")]
    Empty,
    #[error("shortcut has no key: {0}")]
    MissingKey(String),
    #[error("shortcut has more than one key: {0}")]
    MultipleKeys(String),
}

impl KeyChord {
    pub fn matches(&self, pressed: &KeyChord) -> bool {
        self.primary == pressed.primary
            && self.alt == pressed.alt
            && self.shift == pressed.shift
            && self.code.eq_ignore_ascii_case(&pressed.code)
    }
}

impl FromStr for KeyChord {
    type Err = ShortcutError;

    fn from_str(shortcut: &str) -> Result<Self, Self::Err> {
        let shortcut = shortcut.trim();
        if shortcut.is_empty() {
            return Err(ShortcutError::Empty);
        }

        let mut chord = KeyChord {
            primary: false,
            alt: false,
            shift: false,
            code: String::new(),
        };
        let mut key: Option<&str> = None;

        for part in shortcut.split('+') {
            let part = part.trim();
            match part.to_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "meta" | "super" | "win" => chord.primary = true,
                "alt" | "option" => chord.alt = true,
                "shift" => chord.shift = true,
                "" => {}
                _ => {
                    if key.is_some() {
                        return Err(ShortcutError::MultipleKeys(shortcut.to_string()));
                    }
                    key = Some(part);
                }
            }
        }

        let Some(key) = key else {
            return Err(ShortcutError::MissingKey(shortcut.to_string()));
        };
        chord.code = key.to_string();
        Ok(chord)
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.primary {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_shortcut() {
        let chord: KeyChord = "Ctrl+KeyK".parse().unwrap();

        assert!(chord.primary);
        assert!(!chord.alt);
        assert!(!chord.shift);
        assert_eq!(chord.code, "KeyK");
        assert_eq!(chord.to_string(), "Ctrl+KeyK");
    }

    #[test]
    fn test_cmd_matches_ctrl() {
        let configured: KeyChord = "Ctrl+KeyK".parse().unwrap();
        let pressed: KeyChord = "Meta+KeyK".parse().unwrap();

        assert!(configured.matches(&pressed));
    }

    #[test]
    fn test_modifiers_must_agree() {
        let configured: KeyChord = "Ctrl+KeyK".parse().unwrap();

        assert!(!configured.matches(&"KeyK".parse().unwrap()));
        assert!(!configured.matches(&"Ctrl+Shift+KeyK".parse().unwrap()));
        assert!(!configured.matches(&"Ctrl+KeyJ".parse().unwrap()));
    }

    #[test]
    fn test_invalid_shortcuts() {
        assert_eq!("  ".parse::<KeyChord>(), Err(ShortcutError::Empty));
        assert!(matches!(
            "Ctrl+Alt".parse::<KeyChord>(),
            Err(ShortcutError::MissingKey(_))
        ));
        assert!(matches!(
            "Ctrl+KeyK+KeyJ".parse::<KeyChord>(),
            Err(ShortcutError::MultipleKeys(_))
        ));
    }
}

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::SessionError;

/// A key the player can be asked to press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKey {
    /// Letters (stored uppercase) and digits
    Char(char),
    Tab,
    LeftShift,
    LeftControl,
    LeftAlt,
    Space,
}

impl fmt::Display for TargetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKey::Char(c) => write!(f, "{c}"),
            TargetKey::Tab => f.write_str("TAB"),
            TargetKey::LeftShift => f.write_str("LEFT-SHIFT"),
            TargetKey::LeftControl => f.write_str("LEFT-CONTROL"),
            TargetKey::LeftAlt => f.write_str("LEFT-ALT"),
            TargetKey::Space => f.write_str("SPACE"),
        }
    }
}

impl TargetKey {
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            TargetKey::LeftShift | TargetKey::LeftControl | TargetKey::LeftAlt
        )
    }

    /// Short text shown on the key card
    pub fn label(&self) -> String {
        match self {
            TargetKey::LeftShift => "SHIFT".to_string(),
            TargetKey::LeftControl => "CTRL".to_string(),
            TargetKey::LeftAlt => "ALT".to_string(),
            other => other.to_string(),
        }
    }
}

/// Home row, numbers, and special keys, in display order
pub const TRAINING_KEYS: [TargetKey; 20] = [
    TargetKey::Char('A'),
    TargetKey::Char('S'),
    TargetKey::Char('D'),
    TargetKey::Char('F'),
    TargetKey::Char('Q'),
    TargetKey::Char('W'),
    TargetKey::Char('E'),
    TargetKey::Char('R'),
    TargetKey::Char('Z'),
    TargetKey::Char('X'),
    TargetKey::Char('C'),
    TargetKey::Char('1'),
    TargetKey::Char('2'),
    TargetKey::Char('3'),
    TargetKey::Char('4'),
    TargetKey::Tab,
    TargetKey::LeftShift,
    TargetKey::LeftControl,
    TargetKey::LeftAlt,
    TargetKey::Space,
];

/// Non-empty set of distinct keys a round draws its targets from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    keys: Vec<TargetKey>,
}

impl Catalog {
    pub fn new(keys: Vec<TargetKey>) -> Result<Self, SessionError> {
        if keys.is_empty() {
            return Err(SessionError::EmptyCatalog);
        }
        for (i, key) in keys.iter().enumerate() {
            if keys[..i].contains(key) {
                return Err(SessionError::DuplicateKey(*key));
            }
        }
        Ok(Self { keys })
    }

    pub fn keys(&self) -> &[TargetKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Uniform draw. With more than one entry the result never equals `previous`.
    pub fn draw<R: Rng + ?Sized>(&self, previous: Option<TargetKey>, rng: &mut R) -> TargetKey {
        loop {
            // never empty, see `new`
            let key = *self.keys.choose(rng).unwrap_or(&self.keys[0]);
            if self.keys.len() == 1 || Some(key) != previous {
                return key;
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            keys: TRAINING_KEYS.to_vec(),
        }
    }
}

/// Logical key identity of a raw keyboard event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogicalKey {
    Char(char),
    Tab,
    Shift,
    Control,
    Alt,
    Meta,
    CapsLock,
    ContextMenu,
    Other,
}

/// Physical position of a raw keyboard event, where it matters for matching
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhysicalCode {
    Space,
    Tab,
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
    Other,
}

/// A key press as delivered by the terminal, before any filtering
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub key: LogicalKey,
    pub code: PhysicalCode,
}

impl RawKeyEvent {
    pub fn new(key: LogicalKey, code: PhysicalCode) -> Self {
        Self { key, code }
    }

    /// A printable character; the space bar also carries its physical code
    pub fn char(c: char) -> Self {
        let code = if c == ' ' {
            PhysicalCode::Space
        } else {
            PhysicalCode::Other
        };
        Self::new(LogicalKey::Char(c), code)
    }
}

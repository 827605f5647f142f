use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode};

use crate::keys::{LogicalKey, PhysicalCode, RawKeyEvent};

/// Presses and auto-repeats count as key-down; releases never do
pub fn is_keydown(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
}

/// Esc and Ctrl+C leave the trainer from any phase
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl From<&KeyEvent> for RawKeyEvent {
    fn from(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Char(c) => RawKeyEvent::char(c),
            KeyCode::Tab | KeyCode::BackTab => RawKeyEvent::new(LogicalKey::Tab, PhysicalCode::Tab),
            KeyCode::CapsLock => RawKeyEvent::new(LogicalKey::CapsLock, PhysicalCode::Other),
            KeyCode::Menu => RawKeyEvent::new(LogicalKey::ContextMenu, PhysicalCode::Other),
            KeyCode::Modifier(modifier) => from_modifier(modifier),
            _ => RawKeyEvent::new(LogicalKey::Other, PhysicalCode::Other),
        }
    }
}

fn from_modifier(modifier: ModifierKeyCode) -> RawKeyEvent {
    use ModifierKeyCode::*;

    let (key, code) = match modifier {
        LeftShift => (LogicalKey::Shift, PhysicalCode::ShiftLeft),
        RightShift => (LogicalKey::Shift, PhysicalCode::ShiftRight),
        LeftControl => (LogicalKey::Control, PhysicalCode::ControlLeft),
        RightControl => (LogicalKey::Control, PhysicalCode::ControlRight),
        LeftAlt => (LogicalKey::Alt, PhysicalCode::AltLeft),
        RightAlt => (LogicalKey::Alt, PhysicalCode::AltRight),
        LeftSuper | RightSuper | LeftHyper | RightHyper | LeftMeta | RightMeta => {
            (LogicalKey::Meta, PhysicalCode::Other)
        }
        // AltGr and friends
        IsoLevel3Shift | IsoLevel5Shift => (LogicalKey::Other, PhysicalCode::Other),
    };
    RawKeyEvent::new(key, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_chars_keep_their_case() {
        assert_eq!(
            RawKeyEvent::from(&key(KeyCode::Char('a'))),
            RawKeyEvent::new(LogicalKey::Char('a'), PhysicalCode::Other)
        );
        assert_eq!(
            RawKeyEvent::from(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            RawKeyEvent::new(LogicalKey::Char('A'), PhysicalCode::Other)
        );
    }

    #[test]
    fn test_space_bar_and_tab() {
        assert_eq!(
            RawKeyEvent::from(&key(KeyCode::Char(' '))),
            RawKeyEvent::new(LogicalKey::Char(' '), PhysicalCode::Space)
        );
        assert_eq!(
            RawKeyEvent::from(&key(KeyCode::Tab)),
            RawKeyEvent::new(LogicalKey::Tab, PhysicalCode::Tab)
        );
        assert_eq!(
            RawKeyEvent::from(&KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            RawKeyEvent::new(LogicalKey::Tab, PhysicalCode::Tab)
        );
    }

    #[test]
    fn test_modifiers_keep_side() {
        let cases = [
            (ModifierKeyCode::LeftShift, LogicalKey::Shift, PhysicalCode::ShiftLeft),
            (ModifierKeyCode::RightShift, LogicalKey::Shift, PhysicalCode::ShiftRight),
            (ModifierKeyCode::LeftControl, LogicalKey::Control, PhysicalCode::ControlLeft),
            (ModifierKeyCode::RightControl, LogicalKey::Control, PhysicalCode::ControlRight),
            (ModifierKeyCode::LeftAlt, LogicalKey::Alt, PhysicalCode::AltLeft),
            (ModifierKeyCode::RightAlt, LogicalKey::Alt, PhysicalCode::AltRight),
            (ModifierKeyCode::LeftSuper, LogicalKey::Meta, PhysicalCode::Other),
            (ModifierKeyCode::RightMeta, LogicalKey::Meta, PhysicalCode::Other),
        ];
        for (modifier, logical, physical) in cases {
            assert_eq!(
                RawKeyEvent::from(&key(KeyCode::Modifier(modifier))),
                RawKeyEvent::new(logical, physical)
            );
        }
    }

    #[test]
    fn test_lock_and_menu_keys() {
        assert_eq!(
            RawKeyEvent::from(&key(KeyCode::CapsLock)).key,
            LogicalKey::CapsLock
        );
        assert_eq!(
            RawKeyEvent::from(&key(KeyCode::Menu)).key,
            LogicalKey::ContextMenu
        );
        assert_eq!(RawKeyEvent::from(&key(KeyCode::F(5))).key, LogicalKey::Other);
    }

    #[test]
    fn test_release_is_not_keydown() {
        let press = key(KeyCode::Char('a'));
        let repeat = KeyEvent::new_with_kind(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Repeat,
        );
        let release = KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert!(is_keydown(&press));
        assert!(is_keydown(&repeat));
        assert!(!is_keydown(&release));
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&key(KeyCode::Esc)));
        assert!(is_quit(&KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_quit(&key(KeyCode::Char('c'))));
        assert!(!is_quit(&key(KeyCode::Enter)));
    }
}

use crate::keys::{LogicalKey, PhysicalCode, RawKeyEvent, TargetKey};

/// Result of comparing one raw key press against the current target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    Correct,
    Wrong,
    /// Not a scoring keystroke at all
    Filtered,
}

/// Decide whether `event` hits `target`.
///
/// Meta, CapsLock and ContextMenu never score. Shift, Control and Alt only
/// score while the target is itself a left-side modifier, so holding Shift
/// for a capital letter is not penalised. Modifier, Tab and Space targets
/// match on physical position; letters and digits match the logical key
/// case-insensitively.
pub fn matches(target: TargetKey, event: &RawKeyEvent) -> MatchOutcome {
    match event.key {
        LogicalKey::Meta | LogicalKey::CapsLock | LogicalKey::ContextMenu => {
            return MatchOutcome::Filtered
        }
        LogicalKey::Shift | LogicalKey::Control | LogicalKey::Alt if !target.is_modifier() => {
            return MatchOutcome::Filtered
        }
        _ => {}
    }

    let hit = match target {
        TargetKey::Space => event.code == PhysicalCode::Space,
        TargetKey::Tab => event.code == PhysicalCode::Tab,
        TargetKey::LeftShift => event.code == PhysicalCode::ShiftLeft,
        TargetKey::LeftControl => event.code == PhysicalCode::ControlLeft,
        TargetKey::LeftAlt => event.code == PhysicalCode::AltLeft,
        TargetKey::Char(expected) => match event.key {
            LogicalKey::Char(c) => c.to_lowercase().eq(expected.to_lowercase()),
            _ => false,
        },
    };

    if hit {
        MatchOutcome::Correct
    } else {
        MatchOutcome::Wrong
    }
}

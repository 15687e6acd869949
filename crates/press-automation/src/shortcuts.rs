// Shortcut resolution
//
// Identifies which recognized editing shortcuts are embedded in a key
// combination, using a greedy left-to-right longest-match scan: at each
// position a two-token shortcut (modifier + key) is tried before a
// one-token shortcut, and unmatched tokens are consumed silently. No
// backtracking.

use crate::key_sequence::KeyCombination;
use serde::{Serialize, Serializer};
use std::fmt;

/// A recognized editing/navigation shortcut.
///
/// The catalog is fixed: plain navigation and editing keys, select-all, and
/// the shift-extended variants. Everything else a combination carries is
/// either a literal character or a key with no default editing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shortcut {
    /// `enter`
    Enter,
    /// `home`
    Home,
    /// `end`
    End,
    /// `up`
    Up,
    /// `down`
    Down,
    /// `left`
    Left,
    /// `right`
    Right,
    /// `backspace`
    Backspace,
    /// `delete`
    Delete,
    /// `ctrl+a`
    SelectAll,
    /// `shift+left`
    ShiftLeft,
    /// `shift+right`
    ShiftRight,
    /// `shift+up`
    ShiftUp,
    /// `shift+down`
    ShiftDown,
    /// `shift+home`
    ShiftHome,
    /// `shift+end`
    ShiftEnd,
}

impl Shortcut {
    /// Catalog name of the shortcut, as it appears in key-sequence text.
    pub fn name(&self) -> &'static str {
        match self {
            Shortcut::Enter => "enter",
            Shortcut::Home => "home",
            Shortcut::End => "end",
            Shortcut::Up => "up",
            Shortcut::Down => "down",
            Shortcut::Left => "left",
            Shortcut::Right => "right",
            Shortcut::Backspace => "backspace",
            Shortcut::Delete => "delete",
            Shortcut::SelectAll => "ctrl+a",
            Shortcut::ShiftLeft => "shift+left",
            Shortcut::ShiftRight => "shift+right",
            Shortcut::ShiftUp => "shift+up",
            Shortcut::ShiftDown => "shift+down",
            Shortcut::ShiftHome => "shift+home",
            Shortcut::ShiftEnd => "shift+end",
        }
    }

    /// Matches a single token against the one-token catalog entries.
    pub fn from_single(token: &str) -> Option<Shortcut> {
        match token {
            "enter" => Some(Shortcut::Enter),
            "home" => Some(Shortcut::Home),
            "end" => Some(Shortcut::End),
            "up" => Some(Shortcut::Up),
            "down" => Some(Shortcut::Down),
            "left" => Some(Shortcut::Left),
            "right" => Some(Shortcut::Right),
            "backspace" => Some(Shortcut::Backspace),
            "delete" => Some(Shortcut::Delete),
            _ => None,
        }
    }

    /// Matches an adjacent token pair against the two-token catalog entries
    /// (a modifier followed by a key).
    pub fn from_pair(first: &str, second: &str) -> Option<Shortcut> {
        match (first, second) {
            ("ctrl", "a") => Some(Shortcut::SelectAll),
            ("shift", "left") => Some(Shortcut::ShiftLeft),
            ("shift", "right") => Some(Shortcut::ShiftRight),
            ("shift", "up") => Some(Shortcut::ShiftUp),
            ("shift", "down") => Some(Shortcut::ShiftDown),
            ("shift", "home") => Some(Shortcut::ShiftHome),
            ("shift", "end") => Some(Shortcut::ShiftEnd),
            _ => None,
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Shortcut {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// One effect a key combination asks of the target element, in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    /// Apply a recognized shortcut.
    Shortcut(Shortcut),
    /// Type a literal character.
    Type(char),
}

/// Scans a combination into its ordered effects.
///
/// The greedy scan of [`resolve_shortcuts`], additionally yielding
/// [`PressAction::Type`] for every unconsumed single-character token. Named
/// keys and bare modifiers that match nothing yield no action. The relative
/// order of characters and shortcuts is preserved, which is what makes
/// `left+a` and `a+left` produce different element states.
pub fn press_actions(combination: &KeyCombination) -> Vec<PressAction> {
    let tokens = combination.tokens();
    let mut actions = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        if i + 1 < tokens.len() {
            if let Some(shortcut) = Shortcut::from_pair(&tokens[i], &tokens[i + 1]) {
                actions.push(PressAction::Shortcut(shortcut));
                i += 2;
                continue;
            }
        }

        if let Some(shortcut) = Shortcut::from_single(&tokens[i]) {
            actions.push(PressAction::Shortcut(shortcut));
        } else {
            // Literal character key; multi-character names (bare modifiers,
            // unrecognized named keys) have no default editing action.
            let mut chars = tokens[i].chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                actions.push(PressAction::Type(ch));
            }
        }

        i += 1;
    }

    actions
}

/// Extracts the ordered list of recognized shortcuts from a combination.
///
/// Possibly empty; interleaved plain characters are absorbed silently.
pub fn resolve_shortcuts(combination: &KeyCombination) -> Vec<Shortcut> {
    press_actions(combination)
        .into_iter()
        .filter_map(|action| match action {
            PressAction::Shortcut(shortcut) => Some(shortcut),
            PressAction::Type(_) => None,
        })
        .collect()
}

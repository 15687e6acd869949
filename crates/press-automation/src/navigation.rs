// Text navigation and selection model
//
// Pure functions computing the (value, selection) outcome of each editing
// shortcut against the current state of a single-line or multi-line element.
// Total: a shortcut that does not apply to the current element kind is a
// no-op, and out-of-range offsets clamp rather than fail.
//
// All offsets are char offsets into the line-break-normalized value. Hosts
// may report CR-style breaks; offsets are numerically identical either way,
// so normalization only matters for comparison and for constructing new
// values.

use crate::shortcuts::Shortcut;
use serde::Serialize;
use std::borrow::Cow;

/// Selection boundaries and directionality over a text buffer.
///
/// `inverse = true` means the active (moving) end is the lower bound: a
/// backward selection, as produced by `shift+left` extending leftward.
/// Invariant: `start <= end`; an empty selection is always `inverse = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    /// Lower bound, in char offsets.
    pub start: usize,
    /// Upper bound, `>= start`.
    pub end: usize,
    /// Whether the active end is the lower bound.
    pub inverse: bool,
}

impl SelectionState {
    /// A collapsed (caret) selection at `position`.
    pub fn caret(position: usize) -> Self {
        Self {
            start: position,
            end: position,
            inverse: false,
        }
    }

    /// A selection spanning `anchor` to `active`, with directionality
    /// derived from their order.
    pub fn between(anchor: usize, active: usize) -> Self {
        if active < anchor {
            Self {
                start: active,
                end: anchor,
                inverse: true,
            }
        } else {
            Self {
                start: anchor,
                end: active,
                inverse: false,
            }
        }
    }

    /// Whether the selection is collapsed.
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// The moving end of the selection.
    pub fn active(&self) -> usize {
        if self.inverse { self.start } else { self.end }
    }

    /// The pinned end of the selection.
    pub fn anchor(&self) -> usize {
        if self.inverse { self.end } else { self.start }
    }

    /// Clamps both bounds to a buffer of `len` chars, preserving
    /// directionality where a selection survives.
    pub fn clamp_to(&self, len: usize) -> Self {
        let start = self.start.min(len);
        let end = self.end.min(len).max(start);
        Self {
            start,
            end,
            inverse: self.inverse && start < end,
        }
    }
}

/// Whether the element maps all positions onto one line or is line-aware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    /// One line; line-break navigation does not apply.
    SingleLine,
    /// Value may contain line breaks; navigation is line-aware.
    MultiLine,
}

/// Engine-dependent behavior of `up`/`down` in single-line elements.
///
/// Browsers disagree: most leave the caret alone, WebKit collapses it to the
/// value boundary. The policy is explicit configuration; the right choice
/// depends on the host being emulated and is never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalCaretPolicy {
    /// `up`/`down` leave the caret where it is.
    #[default]
    Preserve,
    /// `up` collapses to the value start, `down` to the value end.
    CollapseToBoundary,
}

/// A value/selection pair, the navigator's input and output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// The element value, line-break-normalized.
    pub value: String,
    /// The current selection.
    pub selection: SelectionState,
}

impl EditState {
    /// Builds a state from a host-reported value, normalizing line breaks.
    pub fn new(value: &str, selection: SelectionState) -> Self {
        Self {
            value: normalize_line_breaks(value).into_owned(),
            selection,
        }
    }
}

/// Normalizes CRLF and bare CR line breaks to LF.
pub fn normalize_line_breaks(value: &str) -> Cow<'_, str> {
    if value.contains('\r') {
        Cow::Owned(value.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Offset of the start of the line containing `position`.
fn line_start(chars: &[char], position: usize) -> usize {
    chars[..position]
        .iter()
        .rposition(|&c| c == '\n')
        .map(|i| i + 1)
        .unwrap_or(0)
}

/// Offset of the end of the line containing `position` (the nearest newline
/// at or after it, or the buffer length).
fn line_end(chars: &[char], position: usize) -> usize {
    chars[position..]
        .iter()
        .position(|&c| c == '\n')
        .map(|i| position + i)
        .unwrap_or(chars.len())
}

/// Same column one line up, clamped to that line's length. `None` when
/// `position` is on the first line.
fn offset_up(chars: &[char], position: usize) -> Option<usize> {
    let start = line_start(chars, position);
    if start == 0 {
        return None;
    }
    let column = position - start;
    let prev_start = line_start(chars, start - 1);
    let prev_len = (start - 1) - prev_start;
    Some(prev_start + column.min(prev_len))
}

/// Same column one line down, clamped to that line's length. `None` when
/// `position` is on the last line.
fn offset_down(chars: &[char], position: usize) -> Option<usize> {
    let end = line_end(chars, position);
    if end == chars.len() {
        return None;
    }
    let column = position - line_start(chars, position);
    let next_start = end + 1;
    let next_end = line_end(chars, next_start);
    Some(next_start + column.min(next_end - next_start))
}

/// Replaces the char range `start..end` with `insert`.
fn splice(chars: &[char], start: usize, end: usize, insert: &str) -> String {
    let mut value = String::with_capacity(chars.len() + insert.len());
    value.extend(&chars[..start]);
    value.push_str(insert);
    value.extend(&chars[end..]);
    value
}

/// Computes the outcome of one recognized shortcut.
///
/// Pure and total; the returned value is line-break-normalized. The caller
/// owns committing the result to the live element (and reconciling any
/// host-side value normalization afterwards).
pub fn apply_shortcut(
    shortcut: Shortcut,
    state: &EditState,
    kind: ElementKind,
    policy: VerticalCaretPolicy,
) -> EditState {
    let value = normalize_line_breaks(&state.value);
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();
    let sel = state.selection.clamp_to(len);

    let mut new_value: Option<String> = None;
    let new_sel = match shortcut {
        Shortcut::Enter => match kind {
            ElementKind::SingleLine => sel,
            ElementKind::MultiLine => {
                new_value = Some(splice(&chars, sel.start, sel.end, "\n"));
                SelectionState::caret(sel.start + 1)
            }
        },

        Shortcut::Home => match kind {
            ElementKind::SingleLine => SelectionState::caret(0),
            ElementKind::MultiLine => SelectionState::caret(line_start(&chars, sel.start)),
        },

        Shortcut::End => match kind {
            ElementKind::SingleLine => SelectionState::caret(len),
            ElementKind::MultiLine => SelectionState::caret(line_end(&chars, sel.end)),
        },

        Shortcut::Left => {
            if sel.is_caret() {
                SelectionState::caret(sel.start.saturating_sub(1))
            } else {
                SelectionState::caret(sel.start)
            }
        }

        Shortcut::Right => {
            if sel.is_caret() {
                SelectionState::caret((sel.end + 1).min(len))
            } else {
                SelectionState::caret(sel.end)
            }
        }

        Shortcut::Up => match kind {
            ElementKind::MultiLine => match offset_up(&chars, sel.start) {
                Some(target) => SelectionState::caret(target),
                None => sel,
            },
            ElementKind::SingleLine => match policy {
                VerticalCaretPolicy::Preserve => sel,
                VerticalCaretPolicy::CollapseToBoundary => SelectionState::caret(0),
            },
        },

        Shortcut::Down => match kind {
            ElementKind::MultiLine => match offset_down(&chars, sel.end) {
                Some(target) => SelectionState::caret(target),
                None => sel,
            },
            ElementKind::SingleLine => match policy {
                VerticalCaretPolicy::Preserve => sel,
                VerticalCaretPolicy::CollapseToBoundary => SelectionState::caret(len),
            },
        },

        Shortcut::Backspace => {
            if !sel.is_caret() {
                new_value = Some(splice(&chars, sel.start, sel.end, ""));
                SelectionState::caret(sel.start)
            } else if sel.start > 0 {
                new_value = Some(splice(&chars, sel.start - 1, sel.start, ""));
                SelectionState::caret(sel.start - 1)
            } else {
                sel
            }
        }

        Shortcut::Delete => {
            if !sel.is_caret() {
                new_value = Some(splice(&chars, sel.start, sel.end, ""));
                SelectionState::caret(sel.start)
            } else if sel.end < len {
                new_value = Some(splice(&chars, sel.end, sel.end + 1, ""));
                SelectionState::caret(sel.end)
            } else {
                sel
            }
        }

        Shortcut::SelectAll => SelectionState {
            start: 0,
            end: len,
            inverse: false,
        },

        Shortcut::ShiftLeft => {
            if sel.is_caret() {
                if sel.start == 0 {
                    sel
                } else {
                    SelectionState::between(sel.start, sel.start - 1)
                }
            } else if sel.inverse {
                SelectionState::between(sel.end, sel.start.saturating_sub(1))
            } else {
                SelectionState::between(sel.start, sel.end - 1)
            }
        }

        Shortcut::ShiftRight => {
            if sel.is_caret() {
                if sel.end == len {
                    sel
                } else {
                    SelectionState::between(sel.end, sel.end + 1)
                }
            } else if sel.inverse {
                SelectionState::between(sel.end, sel.start + 1)
            } else {
                SelectionState::between(sel.start, (sel.end + 1).min(len))
            }
        }

        Shortcut::ShiftUp => match kind {
            ElementKind::MultiLine => match offset_up(&chars, sel.active()) {
                Some(target) => SelectionState::between(sel.anchor(), target),
                None => sel,
            },
            ElementKind::SingleLine => match policy {
                VerticalCaretPolicy::Preserve => sel,
                VerticalCaretPolicy::CollapseToBoundary => {
                    SelectionState::between(sel.anchor(), 0)
                }
            },
        },

        Shortcut::ShiftDown => match kind {
            ElementKind::MultiLine => match offset_down(&chars, sel.active()) {
                Some(target) => SelectionState::between(sel.anchor(), target),
                None => sel,
            },
            ElementKind::SingleLine => match policy {
                VerticalCaretPolicy::Preserve => sel,
                VerticalCaretPolicy::CollapseToBoundary => {
                    SelectionState::between(sel.anchor(), len)
                }
            },
        },

        Shortcut::ShiftHome => {
            let target = match kind {
                ElementKind::SingleLine => 0,
                ElementKind::MultiLine => line_start(&chars, sel.active()),
            };
            SelectionState::between(sel.anchor(), target)
        }

        Shortcut::ShiftEnd => {
            let target = match kind {
                ElementKind::SingleLine => len,
                ElementKind::MultiLine => line_end(&chars, sel.active()),
            };
            SelectionState::between(sel.anchor(), target)
        }
    };

    EditState {
        value: new_value.unwrap_or_else(|| value.into_owned()),
        selection: new_sel,
    }
}

/// Inserts literal text at the selection, replacing it; the caret lands
/// after the insertion.
pub fn insert_text(state: &EditState, text: &str) -> EditState {
    let value = normalize_line_breaks(&state.value);
    let chars: Vec<char> = value.chars().collect();
    let sel = state.selection.clamp_to(chars.len());

    EditState {
        value: splice(&chars, sel.start, sel.end, text),
        selection: SelectionState::caret(sel.start + text.chars().count()),
    }
}

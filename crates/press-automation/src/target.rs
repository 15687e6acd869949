// Target element port
//
// The engine never touches a DOM directly; it drives an injected capability
// interface exposing the element's value, selection boundaries, and
// synthetic key/input event dispatch with a default-suppression flag.
// `InMemoryTarget` is the bundled adapter: a faithful stand-in for a
// focused text-editing element, used both as the test double and as the
// reference for what a page-side adapter must implement.

use crate::error::Result;
use crate::navigation::{ElementKind, SelectionState, normalize_line_breaks};
use serde::Serialize;
use std::fmt;

/// Directionality of a selection, DOM `setSelectionRange` vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionDirection {
    /// The active end is the upper bound.
    Forward,
    /// The active end is the lower bound.
    Backward,
}

impl SelectionDirection {
    /// Maps from [`SelectionState::inverse`].
    pub fn from_inverse(inverse: bool) -> Self {
        if inverse {
            SelectionDirection::Backward
        } else {
            SelectionDirection::Forward
        }
    }

    /// Whether this is a backward selection.
    pub fn is_backward(&self) -> bool {
        matches!(self, SelectionDirection::Backward)
    }
}

/// Kind of a synthetic event raised against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEventKind {
    KeyDown,
    KeyUp,
    Input,
}

/// A synthetic event description, as a page-side adapter would forward it
/// over a driver protocol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyEvent {
    /// Event kind.
    pub kind: KeyEventKind,
    /// The key token (for key events) or inserted text (for input events).
    pub key: String,
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.key)
    }
}

/// The focused text-editing element the automation drives.
///
/// Mirrors the DOM contract: selection writes clamp to the value length, and
/// value writes go through the host's native entry point, which may
/// normalize or reject what was written, so callers must read the value back
/// after committing. Event dispatch reports whether a handler suppressed the
/// default action.
pub trait PressTarget {
    /// Single-line or multi-line nature of the element.
    fn kind(&self) -> ElementKind;

    /// Current value, as the host reports it.
    fn value(&self) -> Result<String>;

    /// Writes the value through the host's native value-setting entry point.
    fn set_value(&mut self, value: &str) -> Result<()>;

    /// Current selection boundaries and directionality.
    fn selection(&self) -> Result<SelectionState>;

    /// Sets the selection; offsets clamp to the current value length.
    fn set_selection(&mut self, selection: SelectionState) -> Result<()>;

    /// Raises a key-down event; `true` when a handler suppressed the
    /// default action.
    fn dispatch_key_down(&mut self, key: &str) -> Result<bool>;

    /// Raises a key-up event.
    fn dispatch_key_up(&mut self, key: &str) -> Result<()>;

    /// Raises a character-input event; `true` when the insertion was
    /// suppressed.
    fn dispatch_input(&mut self, text: &str) -> Result<bool>;
}

type EventHandler = Box<dyn FnMut(&str) -> bool + Send>;

/// In-memory [`PressTarget`] adapter.
///
/// Emulates the host element semantics the engine depends on: line breaks
/// normalize to LF on write (textarea behavior), selection writes clamp, and
/// constrained field types sanitize the written value. Handlers can be
/// installed to observe events and suppress default actions; every
/// dispatched event is recorded for inspection.
pub struct InMemoryTarget {
    kind: ElementKind,
    value: String,
    selection: SelectionState,
    sanitizer: Option<fn(&str) -> String>,
    key_down_handler: Option<EventHandler>,
    input_handler: Option<EventHandler>,
    events: Vec<KeyEvent>,
}

impl InMemoryTarget {
    fn new(kind: ElementKind, value: &str, sanitizer: Option<fn(&str) -> String>) -> Self {
        let mut target = Self {
            kind,
            value: String::new(),
            selection: SelectionState::caret(0),
            sanitizer,
            key_down_handler: None,
            input_handler: None,
            events: Vec::new(),
        };
        target.store_value(value);
        // Hosts leave the caret at the end of a freshly assigned value.
        target.selection = SelectionState::caret(target.char_len());
        target
    }

    /// A single-line text element (`<input type="text">`).
    pub fn single_line(value: &str) -> Self {
        Self::new(ElementKind::SingleLine, value, None)
    }

    /// A multi-line text element (`<textarea>`).
    pub fn multi_line(value: &str) -> Self {
        Self::new(ElementKind::MultiLine, value, None)
    }

    /// A numeric field (`<input type="number">`) with the host's value
    /// coercion: a trailing bare decimal point is stripped, and a leading
    /// minus directly followed by the decimal point is dropped.
    pub fn numeric(value: &str) -> Self {
        Self::new(ElementKind::SingleLine, value, Some(sanitize_numeric))
    }

    /// Sets the selection and returns the target, for test setup.
    pub fn with_selection(
        mut self,
        start: usize,
        end: usize,
        direction: SelectionDirection,
    ) -> Self {
        self.selection = SelectionState {
            start,
            end,
            inverse: direction.is_backward(),
        }
        .clamp_to(self.char_len());
        self
    }

    /// Collapses the selection to `position` and returns the target.
    pub fn with_caret(self, position: usize) -> Self {
        self.with_selection(position, position, SelectionDirection::Forward)
    }

    /// Installs a key-down observer; its return value is the
    /// default-suppression flag.
    pub fn on_key_down(&mut self, handler: impl FnMut(&str) -> bool + Send + 'static) {
        self.key_down_handler = Some(Box::new(handler));
    }

    /// Installs an input observer; its return value suppresses the
    /// character insertion.
    pub fn on_input(&mut self, handler: impl FnMut(&str) -> bool + Send + 'static) {
        self.input_handler = Some(Box::new(handler));
    }

    /// Every event dispatched so far, in order.
    pub fn events(&self) -> &[KeyEvent] {
        &self.events
    }

    /// Number of dispatched events of `kind`.
    pub fn event_count(&self, kind: KeyEventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    /// The currently selected substring.
    pub fn selected_text(&self) -> String {
        self.value
            .chars()
            .skip(self.selection.start)
            .take(self.selection.end - self.selection.start)
            .collect()
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn store_value(&mut self, value: &str) {
        let mut value = normalize_line_breaks(value).into_owned();
        if self.kind == ElementKind::SingleLine {
            value.retain(|c| c != '\n');
        }
        if let Some(sanitize) = self.sanitizer {
            value = sanitize(&value);
        }
        self.value = value;
    }

    fn record(&mut self, kind: KeyEventKind, key: &str) {
        self.events.push(KeyEvent {
            kind,
            key: key.to_string(),
        });
    }
}

impl PressTarget for InMemoryTarget {
    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn value(&self) -> Result<String> {
        Ok(self.value.clone())
    }

    fn set_value(&mut self, value: &str) -> Result<()> {
        self.store_value(value);
        self.selection = self.selection.clamp_to(self.char_len());
        Ok(())
    }

    fn selection(&self) -> Result<SelectionState> {
        Ok(self.selection)
    }

    fn set_selection(&mut self, selection: SelectionState) -> Result<()> {
        self.selection = selection.clamp_to(self.char_len());
        Ok(())
    }

    fn dispatch_key_down(&mut self, key: &str) -> Result<bool> {
        self.record(KeyEventKind::KeyDown, key);
        let suppressed = match &mut self.key_down_handler {
            Some(handler) => handler(key),
            None => false,
        };
        Ok(suppressed)
    }

    fn dispatch_key_up(&mut self, key: &str) -> Result<()> {
        self.record(KeyEventKind::KeyUp, key);
        Ok(())
    }

    fn dispatch_input(&mut self, text: &str) -> Result<bool> {
        self.record(KeyEventKind::Input, text);
        let suppressed = match &mut self.input_handler {
            Some(handler) => handler(text),
            None => false,
        };
        Ok(suppressed)
    }
}

/// Numeric-field value coercion as shipped by the emulated engine: strips a
/// trailing unaccompanied decimal point and a minus sign that would leave
/// the value starting with `-.`.
fn sanitize_numeric(raw: &str) -> String {
    let mut value = raw.to_string();
    if value.ends_with('.') {
        value.pop();
    }
    if value.starts_with("-.") {
        value.remove(0);
    }
    value
}

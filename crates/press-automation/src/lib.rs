//! press-automation: keyboard press emulation for end-to-end tests
//!
//! Reproduces, without native OS or WebDriver support, what a real
//! keyboard does to a focused text-editing element: parses a textual key
//! sequence, recognizes the editing shortcuts embedded in each combination,
//! computes the resulting value and selection, and drives the synthetic
//! key-down/input/key-up event dispatch one combination at a time.
//!
//! The element itself is an injected capability ([`PressTarget`]); the
//! bundled [`InMemoryTarget`] adapter emulates the host element semantics
//! and doubles as the test stand-in.
//!
//! # Example
//!
//! ```ignore
//! use press_automation::{
//!     parse_key_sequence, InMemoryTarget, PressAutomation, PressOptions, PressTarget,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut input = InMemoryTarget::single_line("hello world");
//!
//!     // Select everything, delete it, type a character.
//!     let sequence = parse_key_sequence("ctrl+a backspace h")?;
//!     let press = PressAutomation::new(sequence, PressOptions::default());
//!     press.run(&mut input).await?;
//!
//!     assert_eq!(input.value()?, "h");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod key_sequence;
pub mod navigation;
pub mod press;
pub mod shortcuts;
pub mod target;

// Re-export error types
pub use error::{Error, Result};

// Re-export key-sequence parsing
pub use key_sequence::{KeyCombination, KeySequence, parse_key_sequence};

// Re-export shortcut resolution
pub use shortcuts::{PressAction, Shortcut, press_actions, resolve_shortcuts};

// Re-export the selection model
pub use navigation::{
    EditState, ElementKind, SelectionState, VerticalCaretPolicy, apply_shortcut, insert_text,
    normalize_line_breaks,
};

// Re-export the target element port and in-memory adapter
pub use target::{InMemoryTarget, KeyEvent, KeyEventKind, PressTarget, SelectionDirection};

// Re-export the runner
pub use press::{PressAutomation, PressOptions, PressOptionsBuilder};

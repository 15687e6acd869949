// Key-sequence parsing
//
// Turns the textual description of a key sequence (e.g. "ctrl+a backspace")
// into an ordered list of key combinations. Tokens are lowercased; no
// semantic validation happens here; shortcut recognition is the resolver's
// job, and unknown tokens pass through as literal keys.

use crate::error::{Error, Result};
use std::fmt;

/// An ordered, non-empty set of keys considered pressed together.
///
/// Source syntax joins tokens with `+` (`ctrl+a`). Token order matters for
/// shortcut resolution, but all tokens are logically simultaneous when the
/// key events are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    tokens: Vec<String>,
}

impl KeyCombination {
    fn parse(source: &str) -> Result<Self> {
        let tokens: Vec<String> = source
            .split('+')
            .map(|token| token.to_lowercase())
            .collect();

        if tokens.iter().any(String::is_empty) {
            return Err(Error::MalformedSequence(format!(
                "empty key in combination '{source}'"
            )));
        }

        Ok(Self { tokens })
    }

    /// The lowercased key tokens, in source order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for KeyCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join("+"))
    }
}

/// An ordered list of key combinations applied one after another.
///
/// Source syntax separates combinations with whitespace
/// (`"ctrl+a backspace"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySequence {
    combinations: Vec<KeyCombination>,
}

impl KeySequence {
    /// The combinations, in application order.
    pub fn combinations(&self) -> &[KeyCombination] {
        &self.combinations
    }

    /// Consumes the sequence, yielding the combinations.
    pub fn into_combinations(self) -> Vec<KeyCombination> {
        self.combinations
    }
}

impl fmt::Display for KeySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.combinations.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// Parses key-sequence text into an ordered [`KeySequence`].
///
/// Splits on whitespace into combinations, each combination on `+` into
/// tokens, and lowercases every token. Fails with
/// [`Error::MalformedSequence`] only when a combination or token is empty;
/// unknown key names are accepted as literal keys.
pub fn parse_key_sequence(text: &str) -> Result<KeySequence> {
    let combinations = text
        .split(char::is_whitespace)
        .map(KeyCombination::parse)
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(sequence = %text, count = combinations.len(), "parsed key sequence");

    Ok(KeySequence { combinations })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(sequence: &KeySequence, index: usize) -> Vec<&str> {
        sequence.combinations()[index]
            .tokens()
            .iter()
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn test_single_key() {
        let sequence = parse_key_sequence("enter").unwrap();
        assert_eq!(sequence.combinations().len(), 1);
        assert_eq!(tokens(&sequence, 0), ["enter"]);
    }

    #[test]
    fn test_combination_and_sequence() {
        let sequence = parse_key_sequence("ctrl+a backspace").unwrap();
        assert_eq!(sequence.combinations().len(), 2);
        assert_eq!(tokens(&sequence, 0), ["ctrl", "a"]);
        assert_eq!(tokens(&sequence, 1), ["backspace"]);
    }

    #[test]
    fn test_tokens_are_lowercased() {
        let sequence = parse_key_sequence("Ctrl+A ENTER").unwrap();
        assert_eq!(tokens(&sequence, 0), ["ctrl", "a"]);
        assert_eq!(tokens(&sequence, 1), ["enter"]);
    }

    #[test]
    fn test_unknown_tokens_are_not_rejected() {
        let sequence = parse_key_sequence("esc q+w").unwrap();
        assert_eq!(tokens(&sequence, 0), ["esc"]);
        assert_eq!(tokens(&sequence, 1), ["q", "w"]);
    }

    #[test]
    fn test_empty_combination_is_malformed() {
        assert!(matches!(
            parse_key_sequence("ctrl+a  backspace"),
            Err(Error::MalformedSequence(_))
        ));
        assert!(matches!(
            parse_key_sequence(""),
            Err(Error::MalformedSequence(_))
        ));
    }

    #[test]
    fn test_dangling_plus_is_malformed() {
        assert!(matches!(
            parse_key_sequence("ctrl+"),
            Err(Error::MalformedSequence(_))
        ));
        assert!(matches!(
            parse_key_sequence("ctrl++a"),
            Err(Error::MalformedSequence(_))
        ));
    }

    #[test]
    fn test_display_round_trips_source_syntax() {
        let sequence = parse_key_sequence("ctrl+a backspace").unwrap();
        assert_eq!(sequence.to_string(), "ctrl+a backspace");
        assert_eq!(sequence.combinations()[0].to_string(), "ctrl+a");
    }
}

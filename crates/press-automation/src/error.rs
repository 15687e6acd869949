// Error types for press-automation

use thiserror::Error;

/// Result type alias for press-automation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving press automation
#[derive(Debug, Error)]
pub enum Error {
    /// Key-sequence text could not be parsed
    ///
    /// Raised when a combination substring is empty (consecutive separators,
    /// or a dangling `+`). Unknown key names are not an error; they are
    /// treated as literal keys.
    #[error("Malformed key sequence: {0}")]
    MalformedSequence(String),

    /// The target element can no longer be driven
    ///
    /// A live-element adapter reported that the element went away mid-run
    /// (detached from its document, or the page closed). The in-memory
    /// target never produces this.
    #[error("Target element gone: {0}")]
    TargetGone(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}

//! Console errors.

use rookery_core::{GameError, LayoutError};

/// Errors that can occur while reading and running console commands.
///
/// Everything except [`ConsoleError::Io`] is reported to the user and the
/// session carries on.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command was given without a required argument.
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// The command that was typed.
        command: &'static str,
        /// What was expected.
        argument: &'static str,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {square}")]
    InvalidSquare {
        /// The text that failed to parse.
        square: String,
    },

    /// A move in coordinate notation could not be parsed.
    #[error("invalid move: {text} (expected e.g. e2e4)")]
    InvalidMove {
        /// The text that failed to parse.
        text: String,
    },

    /// A board layout could not be parsed.
    #[error("invalid layout \"{layout}\": {source}")]
    InvalidLayout {
        /// The layout text.
        layout: String,
        /// Why parsing failed.
        source: LayoutError,
    },

    /// The game rejected a move.
    #[error(transparent)]
    Game(#[from] GameError),

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

impl ConsoleError {
    /// Return `true` if the session cannot continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ConsoleError::Io { .. })
    }
}

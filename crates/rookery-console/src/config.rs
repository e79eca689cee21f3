//! Session settings adjustable with `set`.

use crate::error::ConsoleError;

/// Configuration knobs adjustable via `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every move.
    pub autoboard: bool,
    /// Echo moves in algebraic notation rather than coordinates.
    pub notation: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            autoboard: true,
            notation: true,
        }
    }
}

impl SessionConfig {
    /// Apply a parsed `set` command.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Autoboard(on) => self.autoboard = on,
            SessionOption::Notation(on) => self.notation = on,
        }
    }
}

/// A single `set` assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    Autoboard(bool),
    Notation(bool),
}

impl SessionOption {
    /// Parse an option name and value as typed after `set`.
    pub fn parse(name: &str, value: &str) -> Result<SessionOption, ConsoleError> {
        let make: fn(bool) -> SessionOption = match name.to_ascii_lowercase().as_str() {
            "autoboard" => SessionOption::Autoboard,
            "notation" => SessionOption::Notation,
            _ => {
                return Err(ConsoleError::UnknownOption {
                    name: name.to_string(),
                });
            }
        };
        let on = parse_switch(value).ok_or_else(|| ConsoleError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(make(on))
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SessionConfig::default();
        assert!(config.autoboard);
        assert!(config.notation);
    }

    #[test]
    fn parse_and_apply() {
        let mut config = SessionConfig::default();
        config.apply(SessionOption::parse("autoboard", "off").unwrap());
        assert!(!config.autoboard);
        config.apply(SessionOption::parse("Notation", "false").unwrap());
        assert!(!config.notation);
        config.apply(SessionOption::parse("notation", "on").unwrap());
        assert!(config.notation);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            SessionOption::parse("hash", "16"),
            Err(ConsoleError::UnknownOption { .. })
        ));
        assert!(matches!(
            SessionOption::parse("autoboard", "maybe"),
            Err(ConsoleError::InvalidOptionValue { .. })
        ));
    }
}

//! Error types for the bootcode loader.

use thiserror::Error;

/// Errors produced while loading program text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An unrecognized operation mnemonic was encountered.
    #[error("line {line}: unknown operation '{token}'")]
    UnknownOperation { line: usize, token: String },

    /// A line had a mnemonic but no argument.
    #[error("line {line}: {mnemonic} expects a signed integer argument")]
    MissingArgument { line: usize, mnemonic: String },

    /// The argument could not be parsed as a signed integer.
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },

    /// A token appeared where it was not expected.
    #[error("line {line}: unexpected token '{token}'")]
    UnexpectedToken { line: usize, token: String },
}

impl ParseError {
    /// The 1-based line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnknownOperation { line, .. }
            | ParseError::MissingArgument { line, .. }
            | ParseError::InvalidNumber { line, .. }
            | ParseError::UnexpectedToken { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_unknown_operation() {
        let e = ParseError::UnknownOperation {
            line: 3,
            token: "hlt".to_string(),
        };
        assert_eq!(e.to_string(), "line 3: unknown operation 'hlt'");
    }

    #[test]
    fn error_display_missing_argument() {
        let e = ParseError::MissingArgument {
            line: 7,
            mnemonic: "acc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "line 7: acc expects a signed integer argument"
        );
    }

    #[test]
    fn error_display_invalid_number() {
        let e = ParseError::InvalidNumber {
            line: 2,
            token: "+x".to_string(),
        };
        assert_eq!(e.to_string(), "line 2: invalid number '+x'");
    }

    #[test]
    fn error_display_unexpected_token() {
        let e = ParseError::UnexpectedToken {
            line: 4,
            token: "extra".to_string(),
        };
        assert_eq!(e.to_string(), "line 4: unexpected token 'extra'");
    }

    #[test]
    fn line_accessor() {
        let e = ParseError::InvalidNumber {
            line: 9,
            token: "1.5".to_string(),
        };
        assert_eq!(e.line(), 9);
    }
}

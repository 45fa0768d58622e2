//! Tokenizer for bootcode program text.

use crate::error::ParseError;

/// A single token from a program line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// An identifier (operation mnemonic). Always lowercase.
    Ident(String),
    /// A signed decimal literal.
    Number(i64),
}

impl Token {
    /// The token as it would be written back out.
    pub(crate) fn text(&self) -> String {
        match self {
            Token::Ident(s) => s.clone(),
            Token::Number(n) => format!("{n:+}"),
        }
    }
}

/// Tokenize a single line of program text.
///
/// Words starting with a digit or a sign are numbers and must parse as
/// `i64`; everything else is an identifier. Returns an empty Vec for
/// blank lines.
pub(crate) fn tokenize_line(line: &str, line_num: usize) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    for word in line.split_whitespace() {
        let token = if word
            .as_bytes()
            .first()
            .is_some_and(|b| b.is_ascii_digit() || *b == b'+' || *b == b'-')
        {
            let value: i64 = word.parse().map_err(|_| ParseError::InvalidNumber {
                line: line_num,
                token: word.to_string(),
            })?;
            Token::Number(value)
        } else {
            Token::Ident(word.to_lowercase())
        };
        tokens.push(token);
    }

    Ok(tokens)
}

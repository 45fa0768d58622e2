//! Parser for bootcode tokens → instructions.
//!
//! Every operation takes exactly one signed argument, so each non-blank
//! line is `<mnemonic> <number>` and nothing else.

use crate::error::ParseError;
use crate::lexer::Token;
use bootcode_common::{Instruction, Operation};

/// Parse a sequence of tokens from a single line into an instruction.
///
/// Returns `Ok(None)` for blank lines (empty token list).
pub(crate) fn parse_line(
    tokens: &[Token],
    line_num: usize,
) -> Result<Option<Instruction>, ParseError> {
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let mnemonic = match first {
        Token::Ident(s) => s.as_str(),
        Token::Number(_) => {
            return Err(ParseError::UnexpectedToken {
                line: line_num,
                token: first.text(),
            })
        }
    };

    let operation =
        Operation::from_mnemonic(mnemonic).ok_or_else(|| ParseError::UnknownOperation {
            line: line_num,
            token: mnemonic.to_string(),
        })?;

    let args = &tokens[1..];
    let argument = expect_number(args, line_num, operation)?;
    expect_end(&args[1..], line_num)?;

    Ok(Some(Instruction::new(operation, argument)))
}

/// Extract the signed argument from the first remaining token.
fn expect_number(args: &[Token], line: usize, operation: Operation) -> Result<i64, ParseError> {
    match args.first() {
        Some(Token::Number(n)) => Ok(*n),
        Some(Token::Ident(s)) => Err(ParseError::InvalidNumber {
            line,
            token: s.clone(),
        }),
        None => Err(ParseError::MissingArgument {
            line,
            mnemonic: operation.mnemonic().to_string(),
        }),
    }
}

/// Check that there are no extra tokens.
fn expect_end(remaining: &[Token], line: usize) -> Result<(), ParseError> {
    if let Some(tok) = remaining.first() {
        return Err(ParseError::UnexpectedToken {
            line,
            token: tok.text(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(s: &str) -> Token {
        Token::Ident(s.to_string())
    }

    fn num(n: i64) -> Token {
        Token::Number(n)
    }

    #[test]
    fn blank_line() {
        assert_eq!(parse_line(&[], 1).unwrap(), None);
    }

    #[test]
    fn parse_each_operation() {
        let cases = [
            ("nop", Operation::Nop, 0),
            ("acc", Operation::Acc, -99),
            ("jmp", Operation::Jmp, 4),
        ];
        for (mnemonic, op, arg) in cases {
            let instr = parse_line(&[ident(mnemonic), num(arg)], 1).unwrap().unwrap();
            assert_eq!(instr, Instruction::new(op, arg), "failed for {mnemonic}");
        }
    }

    #[test]
    fn unknown_operation() {
        let err = parse_line(&[ident("hlt"), num(0)], 3).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownOperation {
                line: 3,
                token: "hlt".to_string()
            }
        );
    }

    #[test]
    fn missing_argument() {
        let err = parse_line(&[ident("acc")], 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                line: 1,
                mnemonic: "acc".to_string()
            }
        );
    }

    #[test]
    fn word_where_number_expected() {
        let err = parse_line(&[ident("jmp"), ident("up")], 2).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 2,
                token: "up".to_string()
            }
        );
    }

    #[test]
    fn extra_token() {
        let err = parse_line(&[ident("nop"), num(1), num(2)], 4).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                line: 4,
                token: "+2".to_string()
            }
        );
    }

    #[test]
    fn number_as_first_token() {
        let err = parse_line(&[num(42)], 1).unwrap_err();
        assert!(matches!(err, ParseError::UnexpectedToken { .. }));
    }
}

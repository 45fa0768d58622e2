//! bootcode loader — program text ↔ [`Program`].
//!
//! Each line holds one instruction: a mnemonic (`nop`, `acc`, `jmp`) and a
//! signed decimal argument. Loading stops at the first blank line or at the
//! end of input, whichever comes first.
//!
//! # Usage
//!
//! ```
//! use bootcode_assembler::{disassemble, load};
//!
//! let text = "nop +0\nacc +1\njmp -2\n";
//! let program = load(text).unwrap();
//! assert_eq!(program.len(), 3);
//! assert_eq!(disassemble(&program), text);
//! ```

pub mod error;

mod disassembler;
mod lexer;
mod parser;

pub use error::ParseError;

use bootcode_common::Program;
use lexer::tokenize_line;
use parser::parse_line;

/// Load program text into a [`Program`].
///
/// Returns the first error encountered. Lines after the first blank line
/// are never looked at.
pub fn load(text: &str) -> Result<Program, ParseError> {
    load_lines(text.lines())
}

/// Load a program from an iterator of lines.
///
/// Same rules as [`load`]; useful when lines come from a buffered reader.
pub fn load_lines<I, S>(lines: I) -> Result<Program, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut instructions = Vec::new();

    for (idx, line) in lines.into_iter().enumerate() {
        let line_num = idx + 1;
        let tokens = tokenize_line(line.as_ref(), line_num)?;
        match parse_line(&tokens, line_num)? {
            Some(instr) => instructions.push(instr),
            None => break,
        }
    }

    Ok(Program::new(instructions))
}

/// Render a program as canonical text, one instruction per line.
pub fn disassemble(program: &Program) -> String {
    disassembler::disassemble(program)
}

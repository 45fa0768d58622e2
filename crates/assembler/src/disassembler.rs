//! Disassembler: program → canonical text.
//!
//! One instruction per line, explicit sign on every argument, no blank
//! lines. Visit counts and edits in effect are not represented; an edited
//! instruction prints with its current operation.

use bootcode_common::Program;

/// Render a program as canonical text.
pub fn disassemble(program: &Program) -> String {
    program
        .instructions
        .iter()
        .map(|instr| format!("{instr}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootcode_common::{Instruction, Operation};

    #[test]
    fn empty_program() {
        assert_eq!(disassemble(&Program::new(vec![])), "");
    }

    #[test]
    fn signs_are_explicit() {
        let program = Program::new(vec![
            Instruction::new(Operation::Nop, 0),
            Instruction::new(Operation::Acc, 12),
            Instruction::new(Operation::Jmp, -3),
        ]);
        assert_eq!(disassemble(&program), "nop +0\nacc +12\njmp -3\n");
    }

    #[test]
    fn edited_instruction_prints_current_operation() {
        let mut program = Program::new(vec![
            Instruction::new(Operation::Acc, 1),
            Instruction::new(Operation::Jmp, -1),
        ]);
        program.instructions[1].visit_count = 1;
        program.apply_edit(1).unwrap();
        assert_eq!(disassemble(&program), "acc +1\nnop -1\n");
    }
}

//! A single bootcode instruction and its run-time bookkeeping.
//!
//! Text form is the mnemonic followed by a signed decimal argument. The
//! sign is always written, so non-negative arguments carry a leading `+`:
//! ```text
//! nop +0
//! acc -99
//! jmp +4
//! ```

use std::fmt;

use crate::operation::Operation;

/// A bootcode instruction.
///
/// `operation` may be flipped by a speculative edit (see [`crate::Edit`]);
/// `argument` never changes after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    /// The operation to perform.
    pub operation: Operation,
    /// Signed argument. Meaning depends on the operation.
    pub argument: i64,
    /// How many times this instruction has been executed on the current
    /// speculative path.
    pub visit_count: u32,
}

impl Instruction {
    /// Create a new, unvisited instruction.
    pub fn new(operation: Operation, argument: i64) -> Self {
        Self {
            operation,
            argument,
            visit_count: 0,
        }
    }

    /// Whether a speculative edit may flip this instruction.
    ///
    /// Every `jmp` is eligible. A `nop` is eligible only with a non-zero
    /// argument, since `jmp +0` would be an edit with no effect. `acc` never is.
    pub fn is_editable(&self) -> bool {
        match self.operation {
            Operation::Jmp => true,
            Operation::Nop => self.argument != 0,
            Operation::Acc => false,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:+}", self.operation, self.argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_instruction_is_unvisited() {
        let instr = Instruction::new(Operation::Acc, 3);
        assert_eq!(instr.visit_count, 0);
    }

    #[test]
    fn display_positive_has_plus_sign() {
        assert_eq!(Instruction::new(Operation::Jmp, 4).to_string(), "jmp +4");
        assert_eq!(Instruction::new(Operation::Nop, 0).to_string(), "nop +0");
    }

    #[test]
    fn display_negative() {
        assert_eq!(Instruction::new(Operation::Acc, -99).to_string(), "acc -99");
    }

    #[test]
    fn jmp_always_editable() {
        assert!(Instruction::new(Operation::Jmp, 0).is_editable());
        assert!(Instruction::new(Operation::Jmp, -7).is_editable());
    }

    #[test]
    fn nop_zero_not_editable() {
        assert!(!Instruction::new(Operation::Nop, 0).is_editable());
        assert!(Instruction::new(Operation::Nop, 1).is_editable());
        assert!(Instruction::new(Operation::Nop, -1).is_editable());
    }

    #[test]
    fn acc_never_editable() {
        assert!(!Instruction::new(Operation::Acc, 5).is_editable());
    }
}

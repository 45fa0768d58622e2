//! Operation codes for the bootcode instruction set.

use std::fmt;

/// Identifies the operation an instruction performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Do nothing, advance to the next instruction.
    Nop,
    /// Add the argument to the accumulator, advance to the next instruction.
    Acc,
    /// Jump relative to the current instruction by the argument.
    Jmp,
}

/// All operations, in definition order. Useful for exhaustive testing.
pub const ALL_OPERATIONS: [Operation; 3] = [Operation::Nop, Operation::Acc, Operation::Jmp];

impl Operation {
    /// Returns the assembly mnemonic for this operation.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Operation::Nop => "nop",
            Operation::Acc => "acc",
            Operation::Jmp => "jmp",
        }
    }

    /// Look up an operation by mnemonic, ignoring ASCII case.
    pub fn from_mnemonic(mnemonic: &str) -> Option<Self> {
        ALL_OPERATIONS
            .iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(mnemonic))
            .copied()
    }

    /// The `nop` ↔ `jmp` counterpart of this operation.
    ///
    /// `acc` has no counterpart and returns `None`.
    pub fn flipped(self) -> Option<Self> {
        match self {
            Operation::Nop => Some(Operation::Jmp),
            Operation::Jmp => Some(Operation::Nop),
            Operation::Acc => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

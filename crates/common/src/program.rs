//! Program store for bootcode instruction streams.
//!
//! A program is a fixed-length sequence of instructions. Its length never
//! changes after load; only operations (through edits) and visit counts
//! are mutated while it runs.

use crate::edit::Edit;
use crate::instruction::Instruction;

/// A bootcode program: a sequence of instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The instruction stream.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a new program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// Number of instructions in the program.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// The instruction at `index`, if in range.
    pub fn instruction_at(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Mutable handle to the instruction at `index`, if in range.
    pub fn instruction_at_mut(&mut self, index: usize) -> Option<&mut Instruction> {
        self.instructions.get_mut(index)
    }

    /// Flip the instruction at `index` if it is eligible for editing.
    ///
    /// Returns the edit record on success. Out-of-range or ineligible
    /// instructions are left untouched and yield `None`.
    pub fn apply_edit(&mut self, index: usize) -> Option<Edit> {
        let instr = self.instructions.get_mut(index)?;
        if !instr.is_editable() {
            return None;
        }
        let original = instr.operation;
        instr.operation = original.flipped()?;
        Some(Edit { index, original })
    }

    /// Restore the operation recorded in `edit`.
    pub fn revert_edit(&mut self, edit: Edit) {
        if let Some(instr) = self.instructions.get_mut(edit.index) {
            instr.operation = edit.original;
        }
    }
}

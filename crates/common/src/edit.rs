//! Speculative edit records.

use std::fmt;

use crate::operation::Operation;

/// A reversible flip of one instruction's operation.
///
/// Produced by [`crate::Program::apply_edit`] and consumed by
/// [`crate::Program::revert_edit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    /// Index of the flipped instruction.
    pub index: usize,
    /// Operation the instruction had before the flip.
    pub original: Operation,
}

impl Edit {
    /// The operation the instruction carries while the edit is in effect.
    pub fn replacement(&self) -> Operation {
        // Only nop and jmp are ever flipped.
        self.original.flipped().unwrap_or(self.original)
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "instruction {}: {} -> {}",
            self.index,
            self.original,
            self.replacement()
        )
    }
}

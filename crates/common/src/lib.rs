//! bootcode common types.
//!
//! This crate provides the foundational data structures for the bootcode
//! instruction set:
//!
//! - [`Operation`] — the three operations `nop`, `acc` and `jmp`
//! - [`Instruction`] — an operation, its signed argument and a visit count
//! - [`Edit`] — a reversible flip of one instruction's operation
//! - [`Program`] — the instruction store the engine runs against
//!
//! # Dependencies
//!
//! This crate has no runtime dependencies.

pub mod edit;
pub mod instruction;
pub mod operation;
pub mod program;

// Re-export commonly used types at the crate root.
pub use edit::Edit;
pub use instruction::Instruction;
pub use operation::Operation;
pub use program::Program;

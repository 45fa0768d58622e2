//! Runtime errors for the bootcode engine.
//!
//! Running past the last instruction is the success condition and never an
//! error. The only way a run fails is by exhausting the repair search.

use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The edit search popped the entire visit history without finding a
    /// `nop`/`jmp` whose flip avoids the loop.
    #[error("repair exhausted after {repairs} attempt(s): no single nop/jmp flip on the execution path terminates")]
    RepairExhausted { repairs: u32 },
}

//! bootcode engine — runs a program and repairs a single corrupted
//! instruction that keeps it from terminating.
//!
//! The engine is a small state machine:
//! - `Running` executes instructions, recording each index in a visit
//!   history;
//! - `LoopDetected` is entered when an instruction is reached a second
//!   time. The history is then used as an undo stack: the previous
//!   speculative edit (if any) is rolled back, and the search walks further
//!   back until it can flip a `nop` to `jmp` or a `jmp` to `nop`;
//! - `Terminated` is reached when the program counter runs off the end.
//!
//! # Usage
//!
//! ```
//! use bootcode_common::{Instruction, Operation, Program};
//! use bootcode_vm::run;
//!
//! let program = Program::new(vec![
//!     Instruction::new(Operation::Acc, 3),
//!     Instruction::new(Operation::Jmp, -1),
//! ]);
//!
//! let outcome = run(program).unwrap();
//! assert_eq!(outcome.edit.map(|e| e.index), Some(1));
//! assert_eq!(outcome.accumulator, 3);
//! ```

pub mod error;
pub mod execute;
pub mod machine;
pub mod trace;

pub use error::RuntimeError;
pub use execute::Transition;
pub use machine::{Engine, Outcome, State};
pub use trace::{NoTrace, TraceEvent, TraceSink, TracingSink};

use bootcode_common::Program;

/// Execute a program, repairing it if it loops, and return the outcome.
///
/// # Errors
///
/// Returns [`RuntimeError::RepairExhausted`] if no single `nop`/`jmp`
/// flip on the execution path lets the program terminate.
pub fn run(program: Program) -> Result<Outcome, RuntimeError> {
    Engine::new(program).run()
}

/// Like [`run`], reporting every transition to `sink`.
pub fn run_traced(program: Program, sink: &mut dyn TraceSink) -> Result<Outcome, RuntimeError> {
    Engine::new(program).run_traced(sink)
}

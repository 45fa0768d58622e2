//! Tracing hooks for the engine.
//!
//! A [`TraceSink`] is told about every state transition. Sinks only
//! observe: nothing they do feeds back into execution. Every method has a
//! no-op default, so a sink implements just the events it cares about.

use bootcode_common::{Edit, Instruction};
use tracing::{debug, trace};

use crate::machine::Outcome;

/// Receives engine events.
pub trait TraceSink {
    /// An instruction ran for the first time on the current path.
    ///
    /// `accumulator` is the value after the instruction's effect.
    fn instr(&mut self, _at: usize, _instr: &Instruction, _accumulator: i64) {}

    /// The instruction at `at` was reached a second time.
    fn loop_detected(&mut self, _at: usize) {}

    /// The `jmp` at `at` targeted an index before the first instruction.
    fn dead_end(&mut self, _at: usize, _offset: i64) {}

    /// One visit of the instruction at `index` was undone.
    fn rollback(&mut self, _index: usize, _accumulator: i64) {}

    /// A speculative edit was applied.
    fn edit(&mut self, _edit: &Edit) {}

    /// The program counter ran off the end.
    fn terminated(&mut self, _outcome: &Outcome) {}
}

/// A sink that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {}

/// Forwards engine events to `tracing`: per-instruction events at
/// `TRACE`, repair events at `DEBUG`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn instr(&mut self, at: usize, instr: &Instruction, accumulator: i64) {
        trace!(at, instr = %instr, accumulator, "exec");
    }

    fn loop_detected(&mut self, at: usize) {
        debug!(at, "loop detected");
    }

    fn dead_end(&mut self, at: usize, offset: i64) {
        debug!(at, offset, "jump before first instruction");
    }

    fn rollback(&mut self, index: usize, accumulator: i64) {
        trace!(index, accumulator, "rollback");
    }

    fn edit(&mut self, edit: &Edit) {
        debug!(
            index = edit.index,
            from = %edit.original,
            to = %edit.replacement(),
            "speculative edit"
        );
    }

    fn terminated(&mut self, outcome: &Outcome) {
        debug!(
            accumulator = outcome.accumulator,
            steps = outcome.steps,
            repairs = outcome.repairs,
            "terminated"
        );
    }
}

/// A recorded engine event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Instr { at: usize, accumulator: i64 },
    LoopDetected { at: usize },
    DeadEnd { at: usize },
    Rollback { index: usize, accumulator: i64 },
    Edit(Edit),
    Terminated(Outcome),
}

/// Collects every event in order.
impl TraceSink for Vec<TraceEvent> {
    fn instr(&mut self, at: usize, _instr: &Instruction, accumulator: i64) {
        self.push(TraceEvent::Instr { at, accumulator });
    }

    fn loop_detected(&mut self, at: usize) {
        self.push(TraceEvent::LoopDetected { at });
    }

    fn dead_end(&mut self, at: usize, _offset: i64) {
        self.push(TraceEvent::DeadEnd { at });
    }

    fn rollback(&mut self, index: usize, accumulator: i64) {
        self.push(TraceEvent::Rollback { index, accumulator });
    }

    fn edit(&mut self, edit: &Edit) {
        self.push(TraceEvent::Edit(*edit));
    }

    fn terminated(&mut self, outcome: &Outcome) {
        self.push(TraceEvent::Terminated(*outcome));
    }
}

//! Step function and loop repair for the bootcode engine.

use bootcode_common::{Edit, Operation};
use tracing::debug;

use crate::error::RuntimeError;
use crate::machine::{Engine, Outcome, State};
use crate::trace::{NoTrace, TraceSink};

/// What a single [`Engine::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The instruction at `at` ran for the first time on this path.
    Executed { at: usize },
    /// The instruction at `at` was reached again; nothing was executed.
    LoopDetected { at: usize },
    /// The `jmp` at `at` ran and left the program from the front.
    DeadEnd { at: usize },
    /// Rollback finished and a new edit was applied; the program counter
    /// now points at the edited instruction.
    Repaired { edit: Edit },
    /// The program counter is past the last instruction.
    Terminated,
}

impl Engine {
    /// Run until the program terminates.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::RepairExhausted`] if no single edit on the
    /// execution path lets the program terminate.
    pub fn run(&mut self) -> Result<Outcome, RuntimeError> {
        self.run_traced(&mut NoTrace)
    }

    /// Run until the program terminates, reporting every transition to `sink`.
    pub fn run_traced(&mut self, sink: &mut dyn TraceSink) -> Result<Outcome, RuntimeError> {
        while self.step_traced(sink)? != Transition::Terminated {}
        Ok(self.outcome())
    }

    /// Perform one state-machine transition.
    pub fn step(&mut self) -> Result<Transition, RuntimeError> {
        self.step_traced(&mut NoTrace)
    }

    /// Perform one state-machine transition, reporting it to `sink`.
    pub fn step_traced(&mut self, sink: &mut dyn TraceSink) -> Result<Transition, RuntimeError> {
        match self.state {
            State::Running => Ok(self.advance(sink)),
            State::LoopDetected => self.repair(sink),
            State::Terminated => Ok(Transition::Terminated),
        }
    }

    /// Execute the instruction at the program counter, or notice that we
    /// have left the program or entered a loop.
    fn advance(&mut self, sink: &mut dyn TraceSink) -> Transition {
        let at = self.pc;

        let Some(instr) = self.program.instruction_at_mut(at) else {
            self.state = State::Terminated;
            sink.terminated(&self.outcome());
            return Transition::Terminated;
        };

        instr.visit_count += 1;
        if instr.visit_count > 1 {
            // Not executed, so not counted.
            instr.visit_count -= 1;
            self.state = State::LoopDetected;
            sink.loop_detected(at);
            return Transition::LoopDetected { at };
        }

        let instr = *instr;
        self.history.push(at);
        self.steps += 1;

        let next = match instr.operation {
            Operation::Nop => Some(at + 1),
            Operation::Acc => {
                self.accumulator = self.accumulator.wrapping_add(instr.argument);
                Some(at + 1)
            }
            Operation::Jmp => jump_target(at, instr.argument),
        };
        sink.instr(at, &instr, self.accumulator);

        match next {
            Some(pc) => {
                self.pc = pc;
                Transition::Executed { at }
            }
            None => {
                // A path that leaves from the front can never terminate;
                // repair it like a loop.
                self.state = State::LoopDetected;
                sink.dead_end(at, instr.argument);
                Transition::DeadEnd { at }
            }
        }
    }

    /// Undo the previous edit's path, then walk back through the visit
    /// history until an instruction can be flipped.
    fn repair(&mut self, sink: &mut dyn TraceSink) -> Result<Transition, RuntimeError> {
        self.repairs += 1;

        if let Some(edit) = self.active_edit {
            while let Some(index) = self.history.pop() {
                self.rollback(index, sink);
                if index == edit.index {
                    break;
                }
            }
            debug!(index = edit.index, "reverted speculative edit");
        }

        while let Some(index) = self.history.pop() {
            self.rollback(index, sink);
            if let Some(edit) = self.program.apply_edit(index) {
                self.active_edit = Some(edit);
                self.pc = index;
                self.state = State::Running;
                sink.edit(&edit);
                debug!(
                    index,
                    from = %edit.original,
                    to = %edit.replacement(),
                    repairs = self.repairs,
                    "applied speculative edit"
                );
                return Ok(Transition::Repaired { edit });
            }
        }

        debug!(repairs = self.repairs, "visit history exhausted");
        Err(RuntimeError::RepairExhausted {
            repairs: self.repairs,
        })
    }
}

/// Target of a relative jump, or `None` if it lands before index 0.
///
/// Targets past the end saturate; they only need to compare `>=` the
/// program length.
fn jump_target(at: usize, offset: i64) -> Option<usize> {
    let target = at as i128 + offset as i128;
    if target < 0 {
        None
    } else {
        Some(usize::try_from(target).unwrap_or(usize::MAX))
    }
}

//! Engine state management: program counter, accumulator, visit history,
//! and the speculative edit in effect.

use bootcode_common::{Edit, Operation, Program};

use crate::trace::{NoTrace, TraceSink};

/// Where the engine is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Executing instructions.
    Running,
    /// A revisit (or a jump before the first instruction) was seen; the
    /// next step repairs.
    LoopDetected,
    /// The program counter ran off the end of the program.
    Terminated,
}

/// Result of a run that terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// The edit in effect when the program terminated, or `None` if the
    /// unmodified program terminated on its own.
    pub edit: Option<Edit>,
    /// Final accumulator value.
    pub accumulator: i64,
    /// Instructions executed, including work later rolled back.
    pub steps: u64,
    /// Number of repair phases entered.
    pub repairs: u32,
}

/// The bootcode execution engine.
///
/// Owns the program for the whole run; nothing else can observe or touch
/// instruction state while a repair is in progress.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The program being executed.
    pub(crate) program: Program,
    /// Index of the next instruction to execute.
    pub(crate) pc: usize,
    /// Accumulator.
    pub(crate) accumulator: i64,
    /// Indices executed since the last full rollback, oldest first.
    /// Every index here has a visit count of exactly 1.
    pub(crate) history: Vec<usize>,
    /// The speculative edit currently applied to `program`, if any.
    pub(crate) active_edit: Option<Edit>,
    pub(crate) state: State,
    pub(crate) steps: u64,
    pub(crate) repairs: u32,
}

impl Engine {
    /// Create an engine positioned at the first instruction.
    pub fn new(program: Program) -> Self {
        Self {
            program,
            pc: 0,
            accumulator: 0,
            history: Vec::new(),
            active_edit: None,
            state: State::Running,
            steps: 0,
            repairs: 0,
        }
    }

    /// Index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Current accumulator value.
    pub fn accumulator(&self) -> i64 {
        self.accumulator
    }

    /// Indices executed on the current speculative path, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// The speculative edit in effect, if any.
    pub fn active_edit(&self) -> Option<Edit> {
        self.active_edit
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// The program, including visit counts and any edit in effect.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Give the program back. Any edit in effect stays applied.
    pub fn into_program(self) -> Program {
        self.program
    }

    /// Summary of the run so far.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            edit: self.active_edit,
            accumulator: self.accumulator,
            steps: self.steps,
            repairs: self.repairs,
        }
    }

    /// Roll back the whole visit history and return to the first
    /// instruction with the original program restored.
    pub fn rewind(&mut self) {
        while let Some(index) = self.history.pop() {
            self.rollback(index, &mut NoTrace);
        }
        if let Some(edit) = self.active_edit.take() {
            self.program.revert_edit(edit);
        }
        self.pc = 0;
        self.state = State::Running;
    }

    /// Undo one visit of the instruction at `index`.
    ///
    /// An `acc` visited exactly once gives its argument back; the active
    /// edit is reverted when its instruction is rolled back.
    pub(crate) fn rollback(&mut self, index: usize, sink: &mut dyn TraceSink) {
        if let Some(instr) = self.program.instruction_at_mut(index) {
            if instr.operation == Operation::Acc && instr.visit_count == 1 {
                self.accumulator = self.accumulator.wrapping_sub(instr.argument);
            }
            instr.visit_count = instr.visit_count.saturating_sub(1);
        }

        if let Some(edit) = self.active_edit.filter(|e| e.index == index) {
            self.program.revert_edit(edit);
            self.active_edit = None;
        }

        sink.rollback(index, self.accumulator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootcode_common::Instruction;

    fn program(instrs: &[(Operation, i64)]) -> Program {
        Program::new(
            instrs
                .iter()
                .map(|&(op, arg)| Instruction::new(op, arg))
                .collect(),
        )
    }

    #[test]
    fn new_engine_starts_running_at_zero() {
        let engine = Engine::new(program(&[(Operation::Nop, 0)]));
        assert_eq!(engine.pc(), 0);
        assert_eq!(engine.accumulator(), 0);
        assert!(engine.history().is_empty());
        assert_eq!(engine.active_edit(), None);
        assert_eq!(engine.state(), State::Running);
    }

    #[test]
    fn rollback_acc_visited_once_restores_accumulator() {
        let mut engine = Engine::new(program(&[(Operation::Acc, 7)]));
        engine.program.instructions[0].visit_count = 1;
        engine.accumulator = 7;
        engine.rollback(0, &mut NoTrace);
        assert_eq!(engine.accumulator(), 0);
        assert_eq!(engine.program().instructions[0].visit_count, 0);
    }

    #[test]
    fn rollback_acc_visited_twice_keeps_accumulator() {
        let mut engine = Engine::new(program(&[(Operation::Acc, 7)]));
        engine.program.instructions[0].visit_count = 2;
        engine.accumulator = 7;
        engine.rollback(0, &mut NoTrace);
        assert_eq!(engine.accumulator(), 7);
        assert_eq!(engine.program().instructions[0].visit_count, 1);
    }

    #[test]
    fn rollback_reverts_active_edit() {
        let mut engine = Engine::new(program(&[(Operation::Jmp, 3)]));
        let edit = engine.program.apply_edit(0).unwrap();
        engine.active_edit = Some(edit);
        engine.program.instructions[0].visit_count = 1;
        engine.rollback(0, &mut NoTrace);
        assert_eq!(engine.active_edit(), None);
        assert_eq!(engine.program().instructions[0].operation, Operation::Jmp);
    }

    #[test]
    fn rollback_of_other_index_keeps_edit() {
        let mut engine = Engine::new(program(&[(Operation::Jmp, 3), (Operation::Nop, 0)]));
        let edit = engine.program.apply_edit(0).unwrap();
        engine.active_edit = Some(edit);
        engine.program.instructions[1].visit_count = 1;
        engine.rollback(1, &mut NoTrace);
        assert_eq!(engine.active_edit(), Some(edit));
        assert_eq!(engine.program().instructions[0].operation, Operation::Nop);
    }

    #[test]
    fn outcome_reflects_state() {
        let mut engine = Engine::new(program(&[(Operation::Acc, 1)]));
        engine.accumulator = 42;
        engine.steps = 3;
        let outcome = engine.outcome();
        assert_eq!(outcome.accumulator, 42);
        assert_eq!(outcome.steps, 3);
        assert_eq!(outcome.edit, None);
    }
}

use crate::instruction::Word;
use crate::state::{Breakpoint, DebugEval};

use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
/// Breakpoint registry with resume semantics.
pub struct Debugger {
    breakpoints: HashSet<Word>,
    last_state: Option<Breakpoint>,
}

impl Debugger {
    /// Register a breakpoint.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoints.insert(breakpoint.pc());
    }

    /// Remove a breakpoint.
    pub fn remove_breakpoint(&mut self, breakpoint: &Breakpoint) {
        self.breakpoints.remove(&breakpoint.pc());
    }

    /// Evaluate whether execution should suspend at `pc`.
    ///
    /// The breakpoint that last suspended the machine does not fire again on
    /// the immediately following evaluation, so execution can resume.
    pub fn eval_state(&mut self, pc: Word) -> DebugEval {
        let last_state = self.last_state.take();

        if !self.breakpoints.contains(&pc) {
            return DebugEval::Continue;
        }

        let breakpoint = Breakpoint::new(pc);

        match last_state {
            Some(b) if b == breakpoint => DebugEval::Continue,
            _ => breakpoint.into(),
        }
    }

    /// Record the breakpoint that last suspended the machine.
    pub fn set_last_state(&mut self, breakpoint: Breakpoint) {
        self.last_state.replace(breakpoint);
    }

    /// The breakpoint that last suspended the machine.
    pub const fn last_state(&self) -> &Option<Breakpoint> {
        &self.last_state
    }
}

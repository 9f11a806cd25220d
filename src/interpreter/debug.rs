use super::Interpreter;
use crate::state::{Breakpoint, DebugEval};

impl Interpreter {
    /// Register a breakpoint.
    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.debugger.set_breakpoint(breakpoint);
    }

    /// Remove a breakpoint.
    pub fn remove_breakpoint(&mut self, breakpoint: &Breakpoint) {
        self.debugger.remove_breakpoint(breakpoint);
    }

    /// Evaluate the debugger against the current program counter.
    ///
    /// A breakpoint that suspends the machine is recorded so the following
    /// step resumes past it.
    pub(crate) fn eval_debugger_state(&mut self) -> DebugEval {
        let pc = self.pc;
        let eval = self.debugger.eval_state(pc);

        if let Some(breakpoint) = eval.breakpoint() {
            self.debugger.set_last_state(*breakpoint);
        }

        eval
    }
}

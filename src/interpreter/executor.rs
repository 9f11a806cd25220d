use super::Interpreter;
use crate::error::{Fault, FaultReason, Warning};
use crate::instruction::{Instruction, Opcode, Word};
use crate::state::ExecuteState;

use tracing::{debug, trace};

impl Interpreter {
    /// Fetch, decode and execute the next instruction.
    ///
    /// The program counter is advanced past the instruction before it
    /// executes, so a taken branch overwrites the already-incremented value
    /// and a call pushes the return address.
    pub fn step(&mut self) -> Result<ExecuteState, Fault> {
        #[cfg(feature = "debug")]
        {
            let debug = self.eval_debugger_state();
            if !debug.should_continue() {
                return Ok(debug.into());
            }
        }

        if self.pc >= self.textsize() {
            return Err(Fault::new(FaultReason::SegText, self.pc.wrapping_sub(1)));
        }

        let instruction = self.text[self.pc as usize];

        trace!("executing 0x{:04x}: {}", self.pc, instruction);

        self.pc = self.pc.wrapping_add(1);

        self.instruction(instruction)
    }

    /// Execute a single, already fetched instruction.
    pub fn instruction(&mut self, instruction: Instruction) -> Result<ExecuteState, Fault> {
        let addr = self.pc.wrapping_sub(1);

        self._instruction(instruction, addr)
            .map_err(|reason| Fault::new(reason, addr))
    }

    fn _instruction(
        &mut self,
        instruction: Instruction,
        addr: Word,
    ) -> Result<ExecuteState, FaultReason> {
        use Opcode::*;

        let op = match instruction.opcode() {
            Some(op) => op,
            None => return Err(FaultReason::Unknown),
        };

        match op {
            NOP => {}

            LOAD => self.load(instruction)?,
            STORE => self.store(instruction)?,
            ADD => self.add(instruction)?,
            SUB => self.sub(instruction)?,

            BRANCH => self.branch(instruction)?,
            CALL => self.call(instruction)?,
            RET => self.ret()?,

            PUSH => self.push(instruction)?,
            POP => self.pop(instruction)?,

            HALT => {
                let warning = Warning::Halt(addr);
                debug!("{warning}");

                return Ok(ExecuteState::Halted(addr));
            }

            ILLOP => return Err(FaultReason::Illegal),
        }

        Ok(ExecuteState::Proceed)
    }

    /// Run the program until it halts, suspends or faults.
    pub fn run(&mut self) -> Result<ExecuteState, Fault> {
        loop {
            let state = self.step()?;

            if !state.should_continue() {
                return Ok(state);
            }
        }
    }
}

use super::Interpreter;
use crate::consts::*;
use crate::error::FaultReason;
use crate::instruction::{Instruction, Word};
use crate::state::ConditionCode;

impl Interpreter {
    pub(crate) fn set_sp(&mut self, value: Word) {
        self.registers[REG_SP] = value;
    }

    /// Refresh the condition code from a register value interpreted as
    /// signed.
    pub(crate) fn refresh_cc(&mut self, value: Word) {
        self.cc = ConditionCode::from_value(value);
    }

    /// Opcodes that reject immediate addressing fault on any set I flag.
    pub(crate) fn check_immediate(instruction: Instruction) -> Result<(), FaultReason> {
        if instruction.is_immediate() {
            Err(FaultReason::Immediate)
        } else {
            Ok(())
        }
    }

    /// The stack window invariant: `dataend <= SP < datasize`.
    pub(crate) fn check_stack(&self) -> Result<(), FaultReason> {
        let sp = self.sp();

        if sp < self.dataend || sp >= self.datasize() {
            Err(FaultReason::SegStack)
        } else {
            Ok(())
        }
    }
}

use super::Interpreter;
use crate::error::FaultReason;
use crate::instruction::{Instruction, RegisterId, Word};

impl Interpreter {
    /// Write a register and refresh the condition code from the stored
    /// value.
    pub(crate) fn alu_set(&mut self, ra: RegisterId, value: Word) {
        self.registers[ra] = value;
        self.refresh_cc(value);
    }

    pub(crate) fn load(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        let value = self.operand(instruction)?;

        self.alu_set(instruction.regcond(), value);

        Ok(())
    }

    pub(crate) fn add(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        let value = self.operand(instruction)?;
        let ra = instruction.regcond();

        self.alu_set(ra, self.registers[ra].wrapping_add(value));

        Ok(())
    }

    pub(crate) fn sub(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        let value = self.operand(instruction)?;
        let ra = instruction.regcond();

        self.alu_set(ra, self.registers[ra].wrapping_sub(value));

        Ok(())
    }
}

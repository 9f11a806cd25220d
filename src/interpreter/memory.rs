use super::Interpreter;
use crate::error::FaultReason;
use crate::instruction::{Instruction, Word};

impl Interpreter {
    /// Effective address of an absolute or indexed operand.
    ///
    /// Indexed addressing wraps: the signed offset is added to the index
    /// register modulo the word width.
    pub(crate) fn effective_address(&self, instruction: Instruction) -> Word {
        if instruction.is_indexed() {
            self.registers[instruction.index_register()].wrapping_add(instruction.offset() as Word)
        } else {
            instruction.absolute_address()
        }
    }

    /// Bounds check for data segment accesses.
    pub(crate) fn check_data_addr(&self, addr: Word) -> Result<(), FaultReason> {
        if addr >= self.datasize() {
            Err(FaultReason::SegData)
        } else {
            Ok(())
        }
    }

    /// Fetch the source operand: an immediate value or a bounds-checked data
    /// cell.
    pub(crate) fn operand(&self, instruction: Instruction) -> Result<Word, FaultReason> {
        if instruction.is_immediate() {
            return Ok(instruction.immediate_value() as Word);
        }

        let addr = self.effective_address(instruction);
        self.check_data_addr(addr)?;

        Ok(self.data[addr as usize])
    }

    pub(crate) fn store(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        Self::check_immediate(instruction)?;

        let addr = self.effective_address(instruction);
        self.check_data_addr(addr)?;

        self.data[addr as usize] = self.registers[instruction.regcond()];

        Ok(())
    }
}

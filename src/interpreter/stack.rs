use super::Interpreter;
use crate::error::FaultReason;
use crate::instruction::Instruction;

impl Interpreter {
    /// The stack window is verified before the operand is computed.
    pub(crate) fn push(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        self.check_stack()?;

        let value = self.operand(instruction)?;

        let sp = self.sp() as usize;
        self.data[sp] = value;
        self.set_sp(self.sp().wrapping_sub(1));

        Ok(())
    }

    /// The target cell is verified first, the stack window after the
    /// pre-increment.
    pub(crate) fn pop(&mut self, instruction: Instruction) -> Result<(), FaultReason> {
        Self::check_immediate(instruction)?;

        let addr = self.effective_address(instruction);
        self.check_data_addr(addr)?;

        self.set_sp(self.sp().wrapping_add(1));
        self.check_stack()?;

        self.data[addr as usize] = self.data[self.sp() as usize];

        Ok(())
    }
}

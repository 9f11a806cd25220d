//! VM parameters

use crate::instruction::Word;

use std::mem;

/// Number of general purpose registers.
pub const VM_REGISTER_COUNT: usize = 16;

/// Register aliased as the stack pointer.
pub const REG_SP: usize = 0x0f;

/// Length of a memory word, in bytes.
pub const WORD_SIZE: usize = mem::size_of::<Word>();

/// Smallest stack region `[dataend, datasize)` accepted by the loader.
pub const MIN_STACK_SIZE: Word = 10;

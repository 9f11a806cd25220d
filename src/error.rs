//! Runtime fault and loader error implementation

use crate::instruction::Word;

use std::io;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Fault reason representation for the interpreter.
pub enum FaultReason {
    /// The opcode field is outside the instruction set.
    #[error("Unknown instruction")]
    Unknown,
    /// An explicit ILLOP was executed.
    #[error("Illegal instruction")]
    Illegal,
    /// The branch or call condition field is outside the defined set.
    #[error("Illegal condition")]
    Condition,
    /// Immediate addressing was used by an opcode that forbids it.
    #[error("Immediate value forbidden")]
    Immediate,
    /// A fetch was attempted at or beyond the end of the text segment.
    #[error("Text index out of bounds")]
    SegText,
    /// An effective data address fell outside the data segment.
    #[error("Data index out of bounds")]
    SegData,
    /// The stack pointer left the stack region.
    #[error("Stack index out of bounds")]
    SegStack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{reason}\tat 0x{addr:08x}")]
/// A fault bound to the address of the instruction that raised it.
///
/// Every fault is fatal to the simulation run; the driver prints it and
/// terminates. The interpreter itself never recovers from one.
pub struct Fault {
    reason: FaultReason,
    addr: Word,
}

impl Fault {
    /// Bind a fault reason to the faulting instruction address.
    pub const fn new(reason: FaultReason, addr: Word) -> Self {
        Self { reason, addr }
    }

    /// The reason that caused this fault.
    pub const fn reason(&self) -> FaultReason {
        self.reason
    }

    /// Address of the instruction that raised the fault.
    pub const fn addr(&self) -> Word {
        self.addr
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// Non-fatal diagnostics surfaced to the operator.
pub enum Warning {
    /// Normal program termination through HALT.
    #[error("Program correctly ended by HALT\tat 0x{0:08x}")]
    Halt(Word),
}

#[derive(Debug, Error)]
/// Errors raised while loading or writing a binary program image.
pub enum ImageError {
    /// Underlying file I/O failure.
    #[error("image file i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The file ends before its declared layout.
    #[error("image truncated reading {field}: expected {expected} bytes, found {found}")]
    Truncated {
        /// Header or segment being read when the file ran out.
        field: &'static str,
        /// Bytes the layout requires up to and including this field.
        expected: u64,
        /// Bytes actually present in the file.
        found: u64,
    },
    /// The static data boundary points past the data segment.
    #[error("data segment end {dataend} exceeds data size {datasize}")]
    DataEndOutOfRange {
        /// First free data cell declared by the image.
        dataend: Word,
        /// Number of data cells declared by the image.
        datasize: Word,
    },
    /// The stack region is smaller than the supported minimum.
    #[error("stack region holds {found} words, minimum is {min}")]
    StackTooSmall {
        /// Words between the static data boundary and the segment end.
        found: Word,
        /// Smallest accepted stack region.
        min: Word,
    },
}

#[derive(Debug, Error)]
/// Simulator error variants surfaced to the driver.
pub enum SimulatorError {
    /// The execution raised a fault.
    #[error("Execution error: {0}")]
    Fault(#[from] Fault),
    /// The program image could not be loaded or written.
    #[error("Image error: {0}")]
    Image(#[from] ImageError),
}

impl SimulatorError {
    /// Return the fault reason that caused this error, if applicable.
    pub const fn fault_reason(&self) -> Option<FaultReason> {
        match self {
            Self::Fault(fault) => Some(fault.reason()),
            _ => None,
        }
    }
}

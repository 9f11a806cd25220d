//! Runtime state representation for the VM

use crate::error::Warning;
use crate::instruction::Word;

use core::fmt;

#[cfg(feature = "debug")]
mod debug;

#[cfg(feature = "debug")]
mod debugger;

#[cfg(feature = "debug")]
pub use debug::{Breakpoint, DebugEval};

#[cfg(feature = "debug")]
pub use debugger::Debugger;

#[cfg(not(feature = "debug"))]
/// Fallback functionless implementation if `debug` feature isn't enabled.
pub type Debugger = ();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
/// Condition code: the sign of the last arithmetic result.
pub enum ConditionCode {
    /// No arithmetic result yet.
    Unknown = 0x00,
    /// The last result was zero.
    Zero = 0x01,
    /// The last result was strictly positive.
    Positive = 0x02,
    /// The last result was strictly negative.
    Negative = 0x03,
}

impl ConditionCode {
    /// Condition code of a register value interpreted as signed.
    pub const fn from_value(value: Word) -> Self {
        let value = value as i32;

        if value == 0 {
            Self::Zero
        } else if value > 0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Single-letter rendering used by the CPU inspector.
    pub const fn letter(&self) -> char {
        match self {
            Self::Unknown => 'U',
            Self::Zero => 'Z',
            Self::Positive => 'P',
            Self::Negative => 'N',
        }
    }
}

impl Default for ConditionCode {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for ConditionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Resulting state of a single instruction execution.
pub enum ExecuteState {
    /// The machine should proceed to the next instruction.
    Proceed,
    /// A HALT was executed at the given address.
    Halted(Word),

    #[cfg(feature = "debug")]
    /// A debug event was reached.
    DebugEvent(DebugEval),
}

impl ExecuteState {
    /// Return true if the VM execution should continue.
    pub const fn should_continue(&self) -> bool {
        #[cfg(not(feature = "debug"))]
        {
            matches!(self, Self::Proceed)
        }

        #[cfg(feature = "debug")]
        {
            matches!(self, Self::Proceed | Self::DebugEvent(DebugEval::Continue))
        }
    }

    /// The operator warning attached to this state, if any.
    pub const fn warning(&self) -> Option<Warning> {
        match self {
            Self::Halted(addr) => Some(Warning::Halt(*addr)),
            _ => None,
        }
    }
}

impl Default for ExecuteState {
    fn default() -> Self {
        Self::Proceed
    }
}

#[cfg(feature = "debug")]
impl From<DebugEval> for ExecuteState {
    fn from(d: DebugEval) -> Self {
        Self::DebugEvent(d)
    }
}

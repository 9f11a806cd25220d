pub mod consts;
pub mod error;
pub mod image;
pub mod inspect;
pub mod instruction;
pub mod interpreter;
pub mod state;

pub mod prelude {
    pub use crate::consts::*;
    pub use crate::error::{Fault, FaultReason, ImageError, SimulatorError, Warning};
    pub use crate::image::Image;
    pub use crate::instruction::{Condition, Instruction, Opcode, RegisterId, Word};
    pub use crate::interpreter::Interpreter;
    pub use crate::state::{ConditionCode, Debugger, ExecuteState};

    #[cfg(feature = "debug")]
    pub use crate::state::{Breakpoint, DebugEval};
}

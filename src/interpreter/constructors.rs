//! Exposed constructors API for the [`Interpreter`]

use super::Interpreter;
use crate::consts::*;
use crate::error::ImageError;
use crate::image::Image;
use crate::instruction::Word;
use crate::state::{ConditionCode, Debugger};

use std::path::Path;

impl Interpreter {
    /// Create a fresh machine out of a program image.
    ///
    /// Registers are cleared, PC points at the first instruction, the
    /// condition code is unknown and SP points at the top data cell.
    pub fn with_program(image: Image) -> Self {
        let (text, data, dataend) = image.into_parts();
        let datasize = data.len() as Word;

        let mut registers = [0; VM_REGISTER_COUNT];
        registers[REG_SP] = datasize.wrapping_sub(1);

        Self {
            registers,
            text,
            data,
            dataend,
            pc: 0,
            cc: ConditionCode::Unknown,
            debugger: Debugger::default(),
        }
    }

    /// Load a program image file into a fresh machine.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        Ok(Self::with_program(Image::from_file(path)?))
    }

    /// Snapshot the machine as a program image.
    ///
    /// The image reflects the current data segment; text and the static data
    /// boundary never change after load.
    pub fn to_image(&self) -> Image {
        Image::new(self.text.clone(), self.data.clone(), self.dataend)
    }

    /// Write the machine snapshot as an image file.
    pub fn dump<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        self.to_image().write(path)
    }
}

//! Binary program image encoding and loading
//!
//! Wire layout, little-endian throughout:
//!
//! ```text
//! offset  size        field
//! 0       4           textsize (u32)
//! 4       4           datasize (u32)
//! 8       4           dataend  (u32)
//! 12      4*textsize  text words (raw instruction bits)
//! ...     4*datasize  data words
//! ```
//!
//! No magic number, no checksum, no version. Files too short for their
//! declared sizes are rejected; trailing bytes are ignored.

use crate::consts::*;
use crate::error::ImageError;
use crate::instruction::{Instruction, Word};

use std::fs;
use std::path::Path;

use tracing::debug;

const HEADER_WORDS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A loadable program: text and data segments plus the static data boundary.
pub struct Image {
    text: Vec<Instruction>,
    data: Vec<Word>,
    dataend: Word,
}

impl Image {
    /// Assemble an image from its parts.
    ///
    /// Skips the load-time validation performed by [`Image::from_bytes`];
    /// the interpreter's runtime checks still hold for whatever segments the
    /// image carries.
    pub fn new(text: Vec<Instruction>, data: Vec<Word>, dataend: Word) -> Self {
        Self { text, data, dataend }
    }

    /// Parse and validate an image from its wire representation.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ImageError> {
        let textsize = word_at(bytes, 0, "textsize")?;
        let datasize = word_at(bytes, WORD_SIZE, "datasize")?;
        let dataend = word_at(bytes, 2 * WORD_SIZE, "dataend")?;

        let text_bytes = segment(bytes, HEADER_WORDS * WORD_SIZE, textsize, "text")?;
        let data_bytes = segment(
            bytes,
            HEADER_WORDS * WORD_SIZE + text_bytes.len(),
            datasize,
            "data",
        )?;

        if dataend > datasize {
            return Err(ImageError::DataEndOutOfRange { dataend, datasize });
        }

        if datasize - dataend < MIN_STACK_SIZE {
            return Err(ImageError::StackTooSmall {
                found: datasize - dataend,
                min: MIN_STACK_SIZE,
            });
        }

        let text = words(text_bytes).map(Instruction::from_word).collect();
        let data = words(data_bytes).collect();

        debug!(textsize, datasize, dataend, "program image parsed");

        Ok(Self { text, data, dataend })
    }

    /// Read and validate an image file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImageError> {
        Self::from_bytes(&fs::read(path)?)
    }

    /// Wire representation of the image.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes =
            Vec::with_capacity((HEADER_WORDS + self.text.len() + self.data.len()) * WORD_SIZE);

        bytes.extend((self.text.len() as Word).to_le_bytes());
        bytes.extend((self.data.len() as Word).to_le_bytes());
        bytes.extend(self.dataend.to_le_bytes());

        bytes.extend(self.text.iter().flat_map(|instruction| instruction.word().to_le_bytes()));
        bytes.extend(self.data.iter().flat_map(|word| word.to_le_bytes()));

        bytes
    }

    /// Write the image file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), ImageError> {
        fs::write(path, self.to_bytes())?;

        debug!(
            textsize = self.text.len(),
            datasize = self.data.len(),
            "program image written"
        );

        Ok(())
    }

    /// Text segment contents.
    pub fn text(&self) -> &[Instruction] {
        self.text.as_slice()
    }

    /// Initial data segment contents.
    pub fn data(&self) -> &[Word] {
        self.data.as_slice()
    }

    /// First free data cell above the static data region.
    pub const fn dataend(&self) -> Word {
        self.dataend
    }

    /// Number of text words.
    pub fn textsize(&self) -> Word {
        self.text.len() as Word
    }

    /// Number of data words.
    pub fn datasize(&self) -> Word {
        self.data.len() as Word
    }

    pub(crate) fn into_parts(self) -> (Vec<Instruction>, Vec<Word>, Word) {
        (self.text, self.data, self.dataend)
    }
}

/// Read the little-endian word starting at `offset`.
fn word_at(bytes: &[u8], offset: usize, field: &'static str) -> Result<Word, ImageError> {
    match bytes.get(offset..offset + WORD_SIZE) {
        Some(&[a, b, c, d]) => Ok(Word::from_le_bytes([a, b, c, d])),
        _ => Err(ImageError::Truncated {
            field,
            expected: (offset + WORD_SIZE) as u64,
            found: bytes.len() as u64,
        }),
    }
}

/// Borrow a `size`-word segment starting at `offset`.
fn segment<'a>(
    bytes: &'a [u8],
    offset: usize,
    size: Word,
    field: &'static str,
) -> Result<&'a [u8], ImageError> {
    let end = offset as u64 + size as u64 * WORD_SIZE as u64;

    usize::try_from(end)
        .ok()
        .and_then(|end| bytes.get(offset..end))
        .ok_or(ImageError::Truncated {
            field,
            expected: end,
            found: bytes.len() as u64,
        })
}

/// Iterate the little-endian words of a word-aligned slice.
fn words(bytes: &[u8]) -> impl Iterator<Item = Word> + '_ {
    bytes
        .chunks_exact(WORD_SIZE)
        .map(|chunk| Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
}

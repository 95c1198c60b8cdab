/*!
 Errors that can happen when decoding an Adobe Swatch Exchange (`ASE`) document.
*/

use std::fmt::{Display, Formatter, Result};

/// Errors that can happen when decoding an Adobe Swatch Exchange (`ASE`) document
///
/// All of these are fatal: the decode aborts at the failing block and no
/// further output is produced.
#[derive(Debug, PartialEq, Eq)]
pub enum AseError {
    NotAnAseFile,
    UnsupportedVersion(u16),
    EmptyFile,
    OutOfBounds(usize, usize),
    MalformedString,
    UnknownBlockType(u16),
    NestedPaletteStart,
    EntryBeforeStart,
    EndBeforeStart,
}

impl Display for AseError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            AseError::NotAnAseFile => write!(fmt, "Missing ASEF signature, not an ASE file!"),
            AseError::UnsupportedVersion(major) => {
                write!(fmt, "Major version of given file is {major}, not 1!")
            }
            AseError::EmptyFile => write!(fmt, "Given ASE file has no blocks!"),
            AseError::OutOfBounds(idx, len) => {
                write!(fmt, "Index {idx:x} is outside of range {len:x}!")
            }
            AseError::MalformedString => write!(fmt, "Expected double-NUL terminated string!"),
            AseError::UnknownBlockType(tag) => write!(fmt, "Unexpected block type {tag:#06x}!"),
            AseError::NestedPaletteStart => write!(fmt, "Unexpected beginning of palette!"),
            AseError::EntryBeforeStart => {
                write!(fmt, "Unexpected palette entry before palette start!")
            }
            AseError::EndBeforeStart => write!(fmt, "Unexpected palette end before palette start!"),
        }
    }
}

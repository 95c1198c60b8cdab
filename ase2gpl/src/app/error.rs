/*!
 Errors that can happen during the application's runtime.
*/

use std::{
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
    path::PathBuf,
};

use ase_palette::error::ase::AseError;

/// Errors that can happen during the application's runtime
#[derive(Debug)]
pub enum RuntimeError {
    InvalidOptions(String),
    CreateError(IoError, PathBuf),
    DiskError(IoError),
    ConversionError(AseError),
}

impl Display for RuntimeError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            RuntimeError::InvalidOptions(why) => write!(fmt, "Invalid options!\n{why}"),
            RuntimeError::CreateError(why, path) => write!(fmt, "{why}: {path:?}"),
            RuntimeError::DiskError(why) => write!(fmt, "{why}"),
            RuntimeError::ConversionError(why) => write!(fmt, "{why}"),
        }
    }
}

use ase_palette::palette::AseImport;

use crate::app::{error::RuntimeError, runtime::Config};

/// Defines behavior for writing converted palettes to the filesystem
pub trait Exporter<'a> {
    /// Create a new exporter backed by the runtime configuration
    fn new(config: &'a Config) -> Self;
    /// Write every palette in the import that has at least one entry
    fn export(&self, import: &AseImport) -> Result<(), RuntimeError>;
}

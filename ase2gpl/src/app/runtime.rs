/*!
 Resolves the user's options into a full conversion run.
*/

use std::fs;

use ase_palette::palette::import;

use crate::{
    app::{error::RuntimeError, options::Options, progress::ConvertProgress},
    exporters::{exporter::Exporter, gpl::GPL},
};

/// Data used across the whole conversion
pub struct Config {
    pub options: Options,
}

impl Config {
    /// Validate options into a usable configuration
    pub fn new(options: Options) -> Result<Config, RuntimeError> {
        if !options.ase_path.is_file() {
            return Err(RuntimeError::InvalidOptions(format!(
                "ASE file {:?} does not exist",
                options.ase_path
            )));
        }
        if !options.export_path.is_dir() {
            return Err(RuntimeError::InvalidOptions(format!(
                "Export directory {:?} does not exist",
                options.export_path
            )));
        }
        Ok(Config { options })
    }

    /// Run the conversion end to end
    pub fn start(&self) -> Result<(), RuntimeError> {
        eprintln!("Converting {}...", self.options.ase_path.display());

        let bytes = fs::read(&self.options.ase_path).map_err(RuntimeError::DiskError)?;

        let mut progress = ConvertProgress::new();
        let result = import(&bytes, &mut progress).map_err(RuntimeError::ConversionError)?;
        progress.finish();

        for warning in &result.warnings {
            eprintln!("Warning: {warning}");
        }
        if result.trailing_bytes > 0 {
            eprintln!(
                "Warning: {} bytes left after the declared block count; ignoring them",
                result.trailing_bytes
            );
        }

        GPL::new(self).export(&result)
    }
}

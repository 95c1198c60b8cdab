/*!
 Writes converted palettes to disk as GIMP palette (`GPL`) documents.
*/

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use ase_palette::{gpl, palette::AseImport};

use crate::{
    app::{error::RuntimeError, runtime::Config, sanitizers::sanitize_filename},
    exporters::exporter::Exporter,
};

pub struct GPL<'a> {
    /// Data that is set up from the application's runtime
    pub config: &'a Config,
}

impl<'a> Exporter<'a> for GPL<'a> {
    fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn export(&self, import: &AseImport) -> Result<(), RuntimeError> {
        for palette in &import.palettes {
            // Empty palettes were already surfaced as a warning
            if palette.entries.is_empty() {
                continue;
            }

            // Appended rather than set_extension so a dot in the title
            // ("v2.0 Blues") cannot clobber part of the name
            let filename = format!("{}.{}", sanitize_filename(&palette.title), gpl::EXTENSION);
            let path = self.config.options.export_path.join(filename);

            if path.exists() {
                eprintln!("Warning: Palette {path:?} already exists; not overwriting");
                continue;
            }

            // The document is rendered fully before any bytes hit disk
            let document = gpl::render(palette, import.header.block_count);

            let file =
                File::create(&path).map_err(|why| RuntimeError::CreateError(why, path.clone()))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(document.as_bytes())
                .map_err(RuntimeError::DiskError)?;

            eprintln!(
                "Wrote {} ({} colors)",
                path.display(),
                palette.entries.len()
            );
        }
        Ok(())
    }
}

/*!
 Accumulates parse events into named palettes and drives a complete import.
*/

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    color::{ColorModel, Rgb},
    error::ase::AseError,
    stream::{
        models::{DecodedColor, DocumentHeader, ParseEvent},
        parser::AseReader,
    },
};

/// Title used when a palette's decoded title is empty
pub const UNTITLED: &str = "Untitled";

/// A single converted color entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    pub name: String,
    pub model: ColorModel,
    pub rgb: Rgb,
}

/// A named, ordered collection of converted color entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub title: String,
    pub entries: Vec<ColorEntry>,
}

impl Palette {
    fn new(title: String) -> Self {
        let title = if title.is_empty() {
            UNTITLED.to_string()
        } else {
            title
        };
        Self {
            title,
            entries: Vec::new(),
        }
    }
}

/// Non-fatal conditions reported alongside a successful import
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AseWarning {
    MinorVersionMismatch(u16),
    InaccurateColorModel,
    UnknownColorModel([u8; 4]),
    NoColorsImported(String),
}

impl Display for AseWarning {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> FmtResult {
        match self {
            AseWarning::MinorVersionMismatch(minor) => write!(
                fmt,
                "Minor version of given file is {minor}, not 0; it might not convert cleanly"
            ),
            AseWarning::InaccurateColorModel => write!(
                fmt,
                "Converting from LAB or CMYK colors is inaccurate and may result in slightly-off RGB values"
            ),
            AseWarning::UnknownColorModel(tag) => write!(
                fmt,
                "Unknown color model \"{}\", skipped",
                String::from_utf8_lossy(tag)
            ),
            AseWarning::NoColorsImported(title) => {
                write!(fmt, "Could not import any colors from palette \"{title}\"")
            }
        }
    }
}

/// State machine that owns the one palette allowed to be open at a time
///
/// The block parser is stateless across blocks; enforcing that palettes
/// never nest and that entries only appear inside an open palette happens
/// here, where the open slot lives.
#[derive(Debug, Default)]
pub struct PaletteAccumulator {
    open: Option<Palette>,
}

impl PaletteAccumulator {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Feed one parse event; the closed palette is returned on `PaletteEnd`
    ///
    /// A failing event leaves the open slot untouched, so a caller that
    /// stops on the first error never sees a half-applied block.
    pub fn push(
        &mut self,
        event: ParseEvent,
        warnings: &mut Vec<AseWarning>,
    ) -> Result<Option<Palette>, AseError> {
        match event {
            ParseEvent::PaletteStart { title } => {
                if self.open.is_some() {
                    return Err(AseError::NestedPaletteStart);
                }
                self.open = Some(Palette::new(title));
                Ok(None)
            }
            ParseEvent::ColorEntry { name, color } => {
                let palette = self.open.as_mut().ok_or(AseError::EntryBeforeStart)?;
                match color {
                    DecodedColor::Converted { model, rgb } => {
                        palette.entries.push(ColorEntry { name, model, rgb });
                    }
                    DecodedColor::UnknownModel(tag) => {
                        warnings.push(AseWarning::UnknownColorModel(tag));
                    }
                }
                Ok(None)
            }
            ParseEvent::PaletteEnd => {
                let palette = self.open.take().ok_or(AseError::EndBeforeStart)?;
                if palette.entries.is_empty() {
                    warnings.push(AseWarning::NoColorsImported(palette.title.clone()));
                }
                Ok(Some(palette))
            }
        }
    }
}

/// Receives progress callbacks while an import runs
pub trait ImportReporter {
    /// Called once per processed block with `block_index / block_count`;
    /// return `false` to stop the import before the next block
    fn report_progress(&mut self, fraction: f64) -> bool;
}

/// Reporter that ignores progress and never cancels
pub struct SilentReporter;

impl ImportReporter for SilentReporter {
    fn report_progress(&mut self, _fraction: f64) -> bool {
        true
    }
}

/// Everything produced by a successful import
#[derive(Debug)]
pub struct AseImport {
    pub header: DocumentHeader,
    /// Closed palettes in document order; zero-entry palettes are
    /// included so the caller can decide whether to keep them
    pub palettes: Vec<Palette>,
    pub warnings: Vec<AseWarning>,
    /// True when the reporter stopped the import before the last block
    pub cancelled: bool,
    /// Bytes left in the stream after the declared block count was consumed
    pub trailing_bytes: usize,
}

/// Decode a complete `ASE` byte stream into palettes
///
/// Processes exactly the declared number of blocks, converting entries
/// and collecting warnings along the way. Fatal errors abort the whole
/// import; nothing is returned for a document that fails partway.
pub fn import(stream: &[u8], reporter: &mut dyn ImportReporter) -> Result<AseImport, AseError> {
    let mut reader = AseReader::new(stream);
    let header = reader.read_header()?;

    let mut warnings = Vec::new();
    if header.version_minor != 0 {
        warnings.push(AseWarning::MinorVersionMismatch(header.version_minor));
    }

    let mut accumulator = PaletteAccumulator::new();
    let mut palettes = Vec::new();
    let mut inaccuracy_warned = false;
    let mut cancelled = false;

    for index in 0..header.block_count {
        let event = reader.read_block()?;

        // Warned at most once per document, no matter how many entries trip it
        if let ParseEvent::ColorEntry {
            color: DecodedColor::Converted { model, .. },
            ..
        } = &event
        {
            if model.is_approximate() && !inaccuracy_warned {
                warnings.push(AseWarning::InaccurateColorModel);
                inaccuracy_warned = true;
            }
        }

        if let Some(palette) = accumulator.push(event, &mut warnings)? {
            palettes.push(palette);
        }

        if !reporter.report_progress(f64::from(index) / f64::from(header.block_count)) {
            cancelled = true;
            break;
        }
    }

    Ok(AseImport {
        header,
        palettes,
        warnings,
        cancelled,
        trailing_bytes: reader.remaining(),
    })
}

/*!
 Data structures produced while walking an `ASE` block stream.
*/

use crate::color::{ColorModel, Rgb};

/// Block type identifiers as defined in the ASE format references
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    /// Opens a named palette (0xC001)
    PaletteStart = 0xC001,
    /// A single color entry (0x0001)
    ColorEntry = 0x0001,
    /// Closes the open palette (0xC002)
    PaletteEnd = 0xC002,
}

impl TryFrom<u16> for BlockType {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0xC001 => Ok(BlockType::PaletteStart),
            0x0001 => Ok(BlockType::ColorEntry),
            0xC002 => Ok(BlockType::PaletteEnd),
            _ => Err(value),
        }
    }
}

/// File-level data read once from the header and never mutated after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHeader {
    pub version_major: u16,
    pub version_minor: u16,
    /// Number of top-level blocks the document declares; the parser
    /// consumes exactly this many
    pub block_count: u32,
}

/// The color payload decoded from a color entry block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodedColor {
    /// The model was recognized and converted to 8-bit RGB
    Converted { model: ColorModel, rgb: Rgb },
    /// The model tag is not one we can convert; carried for reporting
    UnknownModel([u8; 4]),
}

/// Events emitted by the block parser, one per block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEvent {
    PaletteStart { title: String },
    ColorEntry { name: String, color: DecodedColor },
    PaletteEnd,
}

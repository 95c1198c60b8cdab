/*!
 Contains logic to decode the `ASE` header and walk its typed, length-prefixed blocks.
*/

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};

use crate::{
    color::{self, ColorModel},
    error::ase::AseError,
    stream::models::{BlockType, DecodedColor, DocumentHeader, ParseEvent},
};

/// File signature at the start of every ASE document
const FILE_SIGNATURE: [u8; 4] = *b"ASEF";
/// Every embedded string ends with a two-byte NUL terminator
const STRING_TERMINATOR: [u8; 2] = [0x00, 0x00];

/// Bounds-checked big-endian reader over an `ASE` byte stream
///
/// The reader owns its position and only ever moves forward; any read
/// past the end of the stream fails with [`AseError::OutOfBounds`]
/// instead of returning partial data.
#[derive(Debug)]
pub struct AseReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> AseReader<'a> {
    pub fn new(stream: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(stream),
        }
    }

    fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    /// Bytes left between the current position and the end of the stream
    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.cursor.position() as usize)
    }

    fn out_of_bounds(&self, wanted: usize) -> AseError {
        AseError::OutOfBounds(self.cursor.position() as usize + wanted, self.len())
    }

    fn read_u16(&mut self) -> Result<u16, AseError> {
        self.cursor
            .read_u16::<BigEndian>()
            .map_err(|_| self.out_of_bounds(2))
    }

    fn read_u32(&mut self) -> Result<u32, AseError> {
        self.cursor
            .read_u32::<BigEndian>()
            .map_err(|_| self.out_of_bounds(4))
    }

    fn read_f32(&mut self) -> Result<f32, AseError> {
        self.cursor
            .read_f32::<BigEndian>()
            .map_err(|_| self.out_of_bounds(4))
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], AseError> {
        let mut buf = [0u8; N];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| self.out_of_bounds(N))?;
        Ok(buf)
    }

    fn read_exact_bytes(&mut self, n: usize) -> Result<Vec<u8>, AseError> {
        let mut buf = vec![0u8; n];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|_| self.out_of_bounds(n))?;
        Ok(buf)
    }

    /// Validate the file header and read the declared block count
    pub fn read_header(&mut self) -> Result<DocumentHeader, AseError> {
        let signature = self.read_array::<4>()?;
        if signature != FILE_SIGNATURE {
            return Err(AseError::NotAnAseFile);
        }

        let version_major = self.read_u16()?;
        let version_minor = self.read_u16()?;
        if version_major != 1 {
            return Err(AseError::UnsupportedVersion(version_major));
        }

        let block_count = self.read_u32()?;
        if block_count == 0 {
            return Err(AseError::EmptyFile);
        }

        Ok(DocumentHeader {
            version_major,
            version_minor,
            block_count,
        })
    }

    /// Decode a length-prefixed, double-NUL terminated UTF-16BE string
    ///
    /// The leading count is in code units and includes the terminator, so
    /// a count of 1 is an empty string with no payload bytes.
    pub fn read_string(&mut self) -> Result<String, AseError> {
        let length = self.read_u16()?;
        if length == 0 {
            return Err(AseError::MalformedString);
        }

        let mut units = Vec::with_capacity(length as usize - 1);
        for _ in 0..length - 1 {
            units.push(self.read_u16()?);
        }

        let terminator = self.read_array::<2>()?;
        if terminator != STRING_TERMINATOR {
            return Err(AseError::MalformedString);
        }

        String::from_utf16(&units).map_err(|_| AseError::MalformedString)
    }

    /// Read the next top-level block and emit its parse event
    ///
    /// The declared block length is authoritative: the payload is parsed
    /// through a nested reader over a bounded slice, so a field that runs
    /// short fails inside the block instead of reading into the next one.
    pub fn read_block(&mut self) -> Result<ParseEvent, AseError> {
        let tag = self.read_u16()?;
        let block_type = BlockType::try_from(tag).map_err(AseError::UnknownBlockType)?;
        let length = self.read_u32()?;
        let payload = self.read_exact_bytes(length as usize)?;
        let mut block = AseReader::new(&payload);

        match block_type {
            BlockType::PaletteStart => Ok(ParseEvent::PaletteStart {
                title: block.read_string()?,
            }),
            BlockType::ColorEntry => {
                let name = block.read_string()?;
                let color = block.read_color()?;
                Ok(ParseEvent::ColorEntry { name, color })
            }
            BlockType::PaletteEnd => Ok(ParseEvent::PaletteEnd),
        }
    }

    /// Read the 4-byte model tag and the model's float payload
    fn read_color(&mut self) -> Result<DecodedColor, AseError> {
        let tag = self.read_array::<4>()?;
        let model = match ColorModel::from_tag(&tag) {
            Some(model) => model,
            // Not fatal; the consumer decides how to report it
            None => return Ok(DecodedColor::UnknownModel(tag)),
        };

        let mut components = [0f32; 4];
        for slot in components.iter_mut().take(model.component_count()) {
            *slot = self.read_f32()?;
        }

        Ok(DecodedColor::Converted {
            model,
            rgb: color::convert(model, &components[..model.component_count()]),
        })
    }
}



#[cfg(test)]
mod block_tests {
    use crate::{
        color::{ColorModel, Rgb},
        error::ase::AseError,
        stream::{
            fixtures,
            models::{DecodedColor, ParseEvent},
            parser::AseReader,
        },
    };

    #[test]
    fn can_read_palette_start() {
        let bytes = fixtures::palette_start("Test");

        let event = AseReader::new(&bytes).read_block().unwrap();

        assert_eq!(
            event,
            ParseEvent::PaletteStart {
                title: "Test".to_string()
            }
        );
    }

    #[test]
    fn can_read_rgb_color_entry() {
        let bytes = fixtures::color_entry("Red", b"RGB ", &[1.0, 0.0, 0.0]);

        let event = AseReader::new(&bytes).read_block().unwrap();

        assert_eq!(
            event,
            ParseEvent::ColorEntry {
                name: "Red".to_string(),
                color: DecodedColor::Converted {
                    model: ColorModel::Rgb,
                    rgb: Rgb::new(255, 0, 0),
                },
            }
        );
    }

    #[test]
    fn can_read_palette_end() {
        let bytes = fixtures::palette_end();

        let event = AseReader::new(&bytes).read_block().unwrap();

        assert_eq!(event, ParseEvent::PaletteEnd);
    }

    #[test]
    fn unknown_model_is_not_fatal() {
        let bytes = fixtures::color_entry("Gray", b"GRAY", &[0.5]);

        let event = AseReader::new(&bytes).read_block().unwrap();

        assert_eq!(
            event,
            ParseEvent::ColorEntry {
                name: "Gray".to_string(),
                color: DecodedColor::UnknownModel(*b"GRAY"),
            }
        );
    }

    #[test]
    fn rejects_unknown_block_type() {
        let bytes = fixtures::block(0xBEEF, &[]);

        let result = AseReader::new(&bytes).read_block();

        assert_eq!(result, Err(AseError::UnknownBlockType(0xBEEF)));
    }

    #[test]
    fn rejects_truncated_block() {
        let full = fixtures::color_entry("Red", b"RGB ", &[1.0, 0.0, 0.0]);
        let bytes = &full[..full.len() - 4];

        let result = AseReader::new(bytes).read_block();

        assert!(matches!(result, Err(AseError::OutOfBounds(_, _))));
    }

    #[test]
    fn short_block_length_does_not_read_into_next_block() {
        // A color entry whose declared length stops after the model tag:
        // the float reads must fail inside the bounded payload even though
        // more bytes follow in the stream
        let mut payload = fixtures::encode_string("Red");
        payload.extend_from_slice(b"RGB ");
        let mut bytes = fixtures::block(0x0001, &payload);
        bytes.extend_from_slice(&fixtures::palette_end());

        let mut reader = AseReader::new(&bytes);
        let result = reader.read_block();

        assert!(matches!(result, Err(AseError::OutOfBounds(_, _))));
    }

    #[test]
    fn consumes_exactly_the_declared_block_count() {
        let bytes = fixtures::document(&[
            fixtures::palette_start("Test"),
            fixtures::color_entry("Red", b"RGB ", &[1.0, 0.0, 0.0]),
            fixtures::palette_end(),
        ]);

        let mut reader = AseReader::new(&bytes);
        let header = reader.read_header().unwrap();

        for _ in 0..header.block_count {
            reader.read_block().unwrap();
        }

        assert_eq!(reader.remaining(), 0);
    }
}

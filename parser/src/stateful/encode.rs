//! Module holding a stateful DICOM data encoding abstraction.
//!
//! The [`StatefulEncoder`] writes element headers, item headers
//! and primitive values in the current byte order,
//! padding every value to an even length.

use dcmcodec_core::header::{DataElementHeader, Length, Tag, VR};
use dcmcodec_core::value::PrimitiveValue;
use dcmcodec_encoding::encode::{self, SwappableWriter};
use dcmcodec_encoding::text::{DefaultCharacterSetCodec, EncodeTextError, TextCodec};
use snafu::{ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write data at position {}", position))]
    WriteData {
        position: u64,
        #[snafu(backtrace)]
        source: encode::Error,
    },

    #[snafu(display("Could not encode text at position {}", position))]
    EncodeText {
        position: u64,
        #[snafu(backtrace)]
        source: EncodeTextError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A stateful abstraction for the DICOM content writing process.
#[derive(Debug)]
pub struct StatefulEncoder<W> {
    to: SwappableWriter<W>,
    text: DefaultCharacterSetCodec,
}

impl<W> StatefulEncoder<W>
where
    W: Write,
{
    /// Create an encoder writing in little endian from position 0.
    pub fn new(to: W) -> Self {
        Self::with_position(to, 0)
    }

    pub fn with_position(to: W, position: u64) -> Self {
        StatefulEncoder {
            to: SwappableWriter::with_position(to, position),
            text: DefaultCharacterSetCodec,
        }
    }

    /// Retrieve the number of bytes written so far,
    /// plus the initial position.
    pub fn position(&self) -> u64 {
        self.to.position()
    }

    pub fn is_swapped(&self) -> bool {
        self.to.is_swapped()
    }

    /// Flip the byte order of all subsequent writes.
    pub fn toggle_swapped(&mut self) {
        self.to.toggle_swapped();
    }

    pub fn flush(&mut self) -> Result<()> {
        let position = self.position();
        self.to.flush().context(WriteDataSnafu { position })
    }

    pub fn into_inner(self) -> W {
        self.to.into_inner()
    }

    /// Write a tag in the current byte order.
    pub fn encode_tag(&mut self, tag: Tag) -> Result<()> {
        let position = self.position();
        self.to
            .write_u16(tag.group())
            .and_then(|_| self.to.write_u16(tag.element()))
            .context(WriteDataSnafu { position })
    }

    /// Write a data element header.
    ///
    /// In explicit VR,
    /// long-length representations get two reserved bytes and a 32-bit length,
    /// and all others a 16-bit length.
    /// Implicit VR headers always have a 32-bit length.
    pub fn encode_element_header(&mut self, header: &DataElementHeader, explicit_vr: bool) -> Result<()> {
        self.encode_tag(header.tag)?;
        let position = self.position();
        if explicit_vr {
            self.to
                .write_bytes(&header.vr.to_bytes())
                .context(WriteDataSnafu { position })?;
            if header.vr.has_long_length() {
                self.to
                    .write_padding(0, 2)
                    .and_then(|_| self.to.write_u32(header.len.0))
                    .context(WriteDataSnafu { position })
            } else {
                self.to
                    .write_u16(header.len.0 as u16)
                    .context(WriteDataSnafu { position })
            }
        } else {
            self.to
                .write_u32(header.len.0)
                .context(WriteDataSnafu { position })
        }
    }

    /// Write an item header with the given length.
    pub fn encode_item_header(&mut self, len: Length) -> Result<()> {
        self.encode_tag(Tag::ITEM)?;
        self.write_len(len)
    }

    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        self.encode_tag(Tag::ITEM_DELIMITER)?;
        self.write_len(Length(0))
    }

    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        self.encode_tag(Tag::SEQUENCE_DELIMITER)?;
        self.write_len(Length(0))
    }

    fn write_len(&mut self, len: Length) -> Result<()> {
        let position = self.position();
        self.to.write_u32(len.0).context(WriteDataSnafu { position })
    }

    /// Write raw bytes followed by a zero byte if their length is odd.
    pub fn encode_fragment(&mut self, data: &[u8]) -> Result<()> {
        let position = self.position();
        self.to
            .write_bytes(data)
            .and_then(|_| self.to.write_padding(0, data.len() & 1))
            .context(WriteDataSnafu { position })
    }

    /// Write a primitive value and pad it to an even length
    /// with the padding byte of its value representation.
    ///
    /// Returns the number of bytes written, padding included.
    pub fn encode_primitive(&mut self, vr: VR, value: &PrimitiveValue) -> Result<u32> {
        let start = self.position();
        match value {
            PrimitiveValue::Empty => {}
            PrimitiveValue::Str(text) => {
                let bytes = self
                    .text
                    .encode(text)
                    .context(EncodeTextSnafu { position: start })?;
                self.write(|to| to.write_bytes(&bytes))?;
            }
            PrimitiveValue::U8(bytes) if vr == VR::OW => {
                self.write(|to| to.write_words(bytes))?;
            }
            PrimitiveValue::U8(bytes) => self.write(|to| to.write_bytes(bytes))?,
            PrimitiveValue::Tags(tags) => {
                for tag in tags {
                    self.encode_tag(*tag)?;
                }
            }
            PrimitiveValue::U16(v) => self.write_all(v, |to, x| to.write_u16(x))?,
            PrimitiveValue::I16(v) => self.write_all(v, |to, x| to.write_i16(x))?,
            PrimitiveValue::U32(v) => self.write_all(v, |to, x| to.write_u32(x))?,
            PrimitiveValue::I32(v) => self.write_all(v, |to, x| to.write_i32(x))?,
            PrimitiveValue::U64(v) => self.write_all(v, |to, x| to.write_u64(x))?,
            PrimitiveValue::I64(v) => self.write_all(v, |to, x| to.write_i64(x))?,
            PrimitiveValue::F32(v) => self.write_all(v, |to, x| to.write_f32(x))?,
            PrimitiveValue::F64(v) => self.write_all(v, |to, x| to.write_f64(x))?,
        }
        if (self.position() - start) % 2 == 1 {
            let padding = vr.padding();
            self.write(|to| to.write_padding(padding, 1))?;
        }
        Ok((self.position() - start) as u32)
    }

    fn write<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut SwappableWriter<W>) -> encode::Result<()>,
    {
        let position = self.position();
        f(&mut self.to).context(WriteDataSnafu { position })
    }

    fn write_all<T, F>(&mut self, values: &[T], mut f: F) -> Result<()>
    where
        T: Copy,
        F: FnMut(&mut SwappableWriter<W>, T) -> encode::Result<()>,
    {
        for value in values {
            self.write(|to| f(to, *value))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_core::smallvec::smallvec;

    #[test]
    fn explicit_and_implicit_headers() {
        let mut encoder = StatefulEncoder::new(Vec::new());
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8));
        encoder.encode_element_header(&header, true).unwrap();
        let header = DataElementHeader::new(Tag::PIXEL_DATA, VR::OB, Length::UNDEFINED);
        encoder.encode_element_header(&header, true).unwrap();
        let header = DataElementHeader::new(Tag(0x0010, 0x0010), VR::PN, Length(8));
        encoder.encode_element_header(&header, false).unwrap();
        assert_eq!(encoder.position(), 8 + 12 + 8);

        #[rustfmt::skip]
        let expected: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, b'P', b'N', 0x08, 0x00,
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
            0x10, 0x00, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00,
        ];
        assert_eq!(encoder.into_inner(), expected);
    }

    #[test]
    fn values_are_padded_by_representation() {
        let mut encoder = StatefulEncoder::new(Vec::new());
        let n = encoder
            .encode_primitive(VR::UI, &PrimitiveValue::from("1.2.3"))
            .unwrap();
        assert_eq!(n, 6);
        let n = encoder
            .encode_primitive(VR::CS, &PrimitiveValue::from("MR1"))
            .unwrap();
        assert_eq!(n, 4);
        let n = encoder
            .encode_primitive(VR::OB, &PrimitiveValue::from(vec![1, 2, 3]))
            .unwrap();
        assert_eq!(n, 4);
        assert_eq!(
            encoder.into_inner(),
            b"1.2.3\0MR1 \x01\x02\x03\x00".to_vec()
        );
    }

    #[test]
    fn big_endian_numbers_and_words() {
        let mut encoder = StatefulEncoder::new(Vec::new());
        encoder.toggle_swapped();
        encoder
            .encode_primitive(VR::US, &PrimitiveValue::U16(smallvec![0x0102, 0x0304]))
            .unwrap();
        encoder
            .encode_primitive(VR::OW, &PrimitiveValue::from(vec![0x01, 0x02]))
            .unwrap();
        assert_eq!(encoder.into_inner(), vec![0x01, 0x02, 0x03, 0x04, 0x02, 0x01]);
    }

    #[test]
    fn delimiters() {
        let mut encoder = StatefulEncoder::new(Vec::new());
        encoder.encode_item_header(Length(4)).unwrap();
        encoder.encode_fragment(&[1, 2, 3]).unwrap();
        encoder.encode_item_delimiter().unwrap();
        encoder.encode_sequence_delimiter().unwrap();
        #[rustfmt::skip]
        let expected: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00, 1, 2, 3, 0,
            0xFE, 0xFF, 0x0D, 0xE0, 0x00, 0x00, 0x00, 0x00,
            0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00,
        ];
        assert_eq!(encoder.into_inner(), expected);
    }
}

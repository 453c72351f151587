//! This module provides a stateful abstraction for reading DICOM data.
//!
//! The [`StatefulDecoder`] reads element headers, item headers
//! and primitive values from a byte source,
//! keeping track of the current byte order and of the bytes read so far.

use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::header::{DataElementHeader, Length, SequenceItemHeader, Tag, VR};
use dcmcodec_core::value::{PrimitiveValue, C};
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_encoding::decode::{self, SwappableReader};
use dcmcodec_encoding::text::{DecodeTextError, DefaultCharacterSetCodec, TextCodec};
use snafu::{ensure, Backtrace, IntoError, ResultExt, Snafu};
use std::io::Read;

/// Numeric values are collected with at most this much room reserved up front.
const MAX_RESERVED_VALUES: usize = 4096;

#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The stream ended before the declared data could be read.
    #[snafu(display("Unexpected end of data at position {}", position))]
    UnexpectedEof {
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read data at position {}", position))]
    ReadData {
        position: u64,
        source: decode::Error,
    },

    /// The element's header or value is inconsistent.
    #[snafu(display("Malformed element {} at position {}: {}", tag, position, reason))]
    MalformedElement {
        tag: Tag,
        position: u64,
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not decode text of element {} at position {}", tag, position))]
    DecodeText {
        tag: Tag,
        position: u64,
        source: DecodeTextError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl From<decode::Error> for Error {
    fn from(e: decode::Error) -> Self {
        match e {
            decode::Error::UnexpectedEof { position, .. } => {
                UnexpectedEofSnafu { position }.build()
            }
            e => {
                let position = match &e {
                    decode::Error::ReadData { position, .. } => *position,
                    _ => 0,
                };
                ReadDataSnafu { position }.into_error(e)
            }
        }
    }
}

/// A stateful abstraction for the DICOM content reading process.
///
/// `S` is the byte source
/// and `D` the data dictionary used to resolve implicit value representations.
#[derive(Debug)]
pub struct StatefulDecoder<S, D = StandardDataDictionary> {
    from: SwappableReader<S>,
    dict: D,
    text: DefaultCharacterSetCodec,
}

impl<S> StatefulDecoder<S>
where
    S: Read,
{
    /// Create a stateful decoder using the standard data dictionary,
    /// starting in little endian at the given stream position.
    pub fn new(from: S, position: u64) -> Self {
        StatefulDecoder::new_with_dictionary(from, position, StandardDataDictionary)
    }
}

impl<S, D> StatefulDecoder<S, D>
where
    S: Read,
    D: DataDictionary,
{
    pub fn new_with_dictionary(from: S, position: u64, dict: D) -> Self {
        StatefulDecoder {
            from: SwappableReader::with_position(from, position),
            dict,
            text: DefaultCharacterSetCodec,
        }
    }

    /// Retrieve the exact stream position of the next byte to read.
    pub fn position(&self) -> u64 {
        self.from.position()
    }

    /// Declare the stream position at which the source ends.
    ///
    /// Values declaring more bytes than what is left
    /// are then rejected before anything is read.
    pub fn set_end(&mut self, end: u64) {
        self.from.set_end(end);
    }

    pub fn is_swapped(&self) -> bool {
        self.from.is_swapped()
    }

    /// Flip the byte order of all subsequent reads.
    pub fn toggle_swapped(&mut self) {
        self.from.toggle_swapped();
    }

    pub fn into_inner(self) -> S {
        self.from.into_inner()
    }

    /// Read the four bytes of the next tag without interpreting them.
    pub fn read_raw_tag(&mut self) -> Result<[u8; 4]> {
        let mut raw = [0; 4];
        self.from.read_exact(&mut raw)?;
        Ok(raw)
    }

    /// Interpret raw tag bytes in the current byte order.
    pub fn tag_from_raw(&self, raw: [u8; 4]) -> Tag {
        if self.from.is_swapped() {
            Tag(
                u16::from_be_bytes([raw[0], raw[1]]),
                u16::from_be_bytes([raw[2], raw[3]]),
            )
        } else {
            Tag(
                u16::from_le_bytes([raw[0], raw[1]]),
                u16::from_le_bytes([raw[2], raw[3]]),
            )
        }
    }

    /// Read the next tag in the current byte order.
    pub fn read_tag(&mut self) -> Result<Tag> {
        let raw = self.read_raw_tag()?;
        Ok(self.tag_from_raw(raw))
    }

    /// Read the rest of an element header whose tag was already consumed.
    ///
    /// In explicit VR, the VR is read from the stream,
    /// followed by either a 16-bit length
    /// or two reserved bytes and a 32-bit length.
    /// In implicit VR, the VR is resolved through the dictionary
    /// (OB when unknown) and a 32-bit length follows.
    pub fn decode_header_after_tag(&mut self, tag: Tag, explicit_vr: bool) -> Result<DataElementHeader> {
        let position = self.position();
        if explicit_vr {
            let mut vr_bytes = [0; 2];
            self.from.read_exact(&mut vr_bytes)?;
            let vr = match VR::from_binary(vr_bytes) {
                Some(vr) => vr,
                None => {
                    return MalformedElementSnafu {
                        tag,
                        position,
                        reason: "unknown value representation",
                    }
                    .fail()
                }
            };
            let len = if vr.has_long_length() {
                self.from.skip(2)?;
                self.from.read_u32()?
            } else {
                u32::from(self.from.read_u16()?)
            };
            Ok(DataElementHeader::new(tag, vr, Length(len)))
        } else {
            let vr = self.implicit_vr(tag);
            let len = self.from.read_u32()?;
            Ok(DataElementHeader::new(tag, vr, Length(len)))
        }
    }

    fn implicit_vr(&self, tag: Tag) -> VR {
        if tag.is_group_length() {
            return VR::UL;
        }
        self.dict.vr_of(tag).unwrap_or(VR::OB)
    }

    /// Read the next item header.
    ///
    /// The boolean is true if the byte order had to be flipped
    /// in order to recognize the header,
    /// in which case the caller should flip it back
    /// once the item is finished.
    pub fn decode_item_header(&mut self) -> Result<(SequenceItemHeader, bool)> {
        let position = self.position();
        let raw = self.read_raw_tag()?;
        let mut tag = self.tag_from_raw(raw);
        let mut toggled = false;
        if tag.group() == 0xFEFF {
            self.from.toggle_swapped();
            tag = self.tag_from_raw(raw);
            toggled = true;
        }
        let len = Length(self.from.read_u32()?);
        let header = SequenceItemHeader::new(tag, len).map_err(|_| {
            MalformedElementSnafu {
                tag,
                position,
                reason: "expected an item or sequence delimiter",
            }
            .build()
        })?;
        Ok((header, toggled))
    }

    /// Read raw bytes, regardless of the byte order.
    pub fn read_bytes(&mut self, len: u32) -> Result<Vec<u8>> {
        Ok(self.from.read_bytes(len as usize)?)
    }

    /// Advance past `len` bytes.
    pub fn skip(&mut self, len: u32) -> Result<()> {
        Ok(self.from.skip(u64::from(len))?)
    }

    /// Eagerly read the primitive value of the given header.
    ///
    /// Text is kept as read, padding included.
    /// Binary numbers are read in the current byte order;
    /// trailing bytes not filling a whole number are skipped.
    /// `OW` data is kept as bytes in little endian word order.
    pub fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let position = self.position();
        let len = match header.len.get() {
            Some(len) => len,
            None => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: "primitive value of undefined length",
                }
                .fail()
            }
        };
        if len == 0 {
            return Ok(PrimitiveValue::Empty);
        }
        if let Some(remaining) = self.from.remaining() {
            // checked before reserving room for the value
            ensure!(u64::from(len) <= remaining, UnexpectedEofSnafu { position });
        }

        let value = match header.vr {
            VR::SQ => {
                return MalformedElementSnafu {
                    tag: header.tag,
                    position,
                    reason: "sequence read as a primitive value",
                }
                .fail()
            }
            vr if vr.is_textual() => {
                let bytes = self.from.read_bytes(len as usize)?;
                let text = self.text.decode(&bytes).context(DecodeTextSnafu {
                    tag: header.tag,
                    position,
                })?;
                PrimitiveValue::Str(text)
            }
            VR::OB | VR::UN => PrimitiveValue::from(self.from.read_bytes(len as usize)?),
            VR::OW => PrimitiveValue::from(self.from.read_words(len as usize)?),
            VR::AT => {
                let n = len / 4;
                let mut tags = C::with_capacity((n as usize).min(MAX_RESERVED_VALUES));
                for _ in 0..n {
                    let group = self.from.read_u16()?;
                    let element = self.from.read_u16()?;
                    tags.push(Tag(group, element));
                }
                self.skip(len % 4)?;
                PrimitiveValue::Tags(tags)
            }
            VR::US => PrimitiveValue::U16(self.read_numbers(len, 2, |r| r.read_u16())?),
            VR::SS => PrimitiveValue::I16(self.read_numbers(len, 2, |r| r.read_i16())?),
            VR::UL | VR::OL => PrimitiveValue::U32(self.read_numbers(len, 4, |r| r.read_u32())?),
            VR::SL => PrimitiveValue::I32(self.read_numbers(len, 4, |r| r.read_i32())?),
            VR::UV | VR::OV => PrimitiveValue::U64(self.read_numbers(len, 8, |r| r.read_u64())?),
            VR::SV => PrimitiveValue::I64(self.read_numbers(len, 8, |r| r.read_i64())?),
            VR::FL | VR::OF => PrimitiveValue::F32(self.read_numbers(len, 4, |r| r.read_f32())?),
            VR::FD | VR::OD => PrimitiveValue::F64(self.read_numbers(len, 8, |r| r.read_f64())?),
            // textual representations were handled above
            _ => PrimitiveValue::from(self.from.read_bytes(len as usize)?),
        };
        Ok(value)
    }

    fn read_numbers<T, F>(&mut self, len: u32, size: u32, mut read: F) -> Result<C<T>>
    where
        F: FnMut(&mut SwappableReader<S>) -> decode::Result<T>,
    {
        let n = len / size;
        let mut values = C::with_capacity((n as usize).min(MAX_RESERVED_VALUES));
        for _ in 0..n {
            values.push(read(&mut self.from)?);
        }
        self.skip(len % size)?;
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn explicit_headers() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0028,0010) US 2 | 512
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x00, 0x02,
            // (7FE0,0010) OB, reserved, undefined length
            0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        let tag = decoder.read_tag().unwrap();
        let header = decoder.decode_header_after_tag(tag, true).unwrap();
        assert_eq!(header, DataElementHeader::new(Tag(0x0028, 0x0010), VR::US, Length(2)));
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value.to_int::<u16>().unwrap(), 512);

        let tag = decoder.read_tag().unwrap();
        let header = decoder.decode_header_after_tag(tag, true).unwrap();
        assert_eq!(header.tag, Tag::PIXEL_DATA);
        assert_eq!(header.vr, VR::OB);
        assert!(header.len.is_undefined());
        assert_eq!(decoder.position(), 22);
    }

    #[test]
    fn implicit_header_uses_dictionary() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            0x10, 0x00, 0x10, 0x00, 0x04, 0x00, 0x00, 0x00, b'D', b'o', b'e', b' ',
            0x09, 0x00, 0x10, 0x10, 0x02, 0x00, 0x00, 0x00, 0x01, 0x02,
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        let tag = decoder.read_tag().unwrap();
        let header = decoder.decode_header_after_tag(tag, false).unwrap();
        assert_eq!(header.vr, VR::PN);
        assert_eq!(decoder.read_value(&header).unwrap(), PrimitiveValue::from("Doe "));

        let tag = decoder.read_tag().unwrap();
        let header = decoder.decode_header_after_tag(tag, false).unwrap();
        assert_eq!(header.vr, VR::OB);
    }

    #[test]
    fn unknown_explicit_vr_is_malformed() {
        let data: &[u8] = &[0x08, 0x00, 0x20, 0x00, b'x', b'x', 0x00, 0x00];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        let tag = decoder.read_tag().unwrap();
        assert!(matches!(
            decoder.decode_header_after_tag(tag, true),
            Err(Error::MalformedElement { position: 4, .. })
        ));
    }

    #[test]
    fn big_endian_values_and_trailing_bytes() {
        let data: &[u8] = &[0x01, 0x02, 0x03, 0x04, 0x05];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        decoder.toggle_swapped();
        let header = DataElementHeader::new(Tag(0x0028, 0x0011), VR::US, Length(5));
        let value = decoder.read_value(&header).unwrap();
        assert_eq!(value, PrimitiveValue::U16(smallvec::smallvec![0x0102, 0x0304]));
        assert_eq!(decoder.position(), 5);
    }

    #[test]
    fn item_header_in_wrong_byte_order_is_recognized() {
        // little endian item header read by a big endian decoder
        let data: &[u8] = &[0xFE, 0xFF, 0x00, 0xE0, 0x04, 0x00, 0x00, 0x00];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        decoder.toggle_swapped();
        let (header, toggled) = decoder.decode_item_header().unwrap();
        assert!(toggled);
        assert!(!decoder.is_swapped());
        assert_eq!(header, SequenceItemHeader::Item { len: Length(4) });
    }

    #[test]
    fn value_longer_than_the_source_fails_early() {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0009,0010) OB, reserved, 0xFFFFFFF0
            0x09, 0x00, 0x10, 0x00, b'O', b'B', 0x00, 0x00, 0xF0, 0xFF, 0xFF, 0xFF,
            0x01, 0x02,
        ];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 0);
        decoder.set_end(data.len() as u64);
        let tag = decoder.read_tag().unwrap();
        let header = decoder.decode_header_after_tag(tag, true).unwrap();
        assert_eq!(header.len, Length(0xFFFF_FFF0));
        assert!(matches!(
            decoder.read_value(&header),
            Err(Error::UnexpectedEof { position: 12, .. })
        ));
        assert_eq!(decoder.position(), 12);

        // same for numbers, which are not read as raw bytes
        let mut decoder = StatefulDecoder::new(Cursor::new(&data[12..]), 12);
        decoder.set_end(data.len() as u64);
        let header = DataElementHeader::new(Tag(0x0028, 0x1201), VR::FL, Length(0x7FFF_FFFC));
        assert!(matches!(
            decoder.read_value(&header),
            Err(Error::UnexpectedEof { position: 12, .. })
        ));
    }

    #[test]
    fn truncated_value_is_unexpected_eof() {
        let data: &[u8] = &[b'A', b'B'];
        let mut decoder = StatefulDecoder::new(Cursor::new(data), 100);
        let header = DataElementHeader::new(Tag(0x0010, 0x0020), VR::LO, Length(4));
        assert!(matches!(
            decoder.read_value(&header),
            Err(Error::UnexpectedEof { position: 100, .. })
        ));
    }
}

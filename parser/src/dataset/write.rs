//! This module contains the writer of whole DICOM data sets.
//!
//! Elements are written in the order given,
//! which should be ascending tag order.
//! The file meta group is always written in explicit VR little endian,
//! and the rest of the data set in the target transfer syntax.
//!
//! Encapsulated pixel data is written with an undefined length
//! and a trailing sequence delimiter.
//! All other sequences and items are written with defined lengths.

use crate::stateful::encode::{self, StatefulEncoder};
use dcmcodec_core::header::{DataElementHeader, GroupNumber, Header, Length, Tag, VR};
use dcmcodec_core::value::{SequenceItem, Value};
use dcmcodec_core::DataElement;
use dcmcodec_encoding::TransferSyntax;
use snafu::{ResultExt, Snafu};
use std::collections::BTreeMap;
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not write element {}", tag))]
    WriteElement {
        tag: Tag,
        #[snafu(backtrace)]
        source: encode::Error,
    },

    #[snafu(display("Could not flush the destination"))]
    Flush {
        #[snafu(backtrace)]
        source: encode::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The byte length of an element header.
fn header_len(vr: VR, explicit_vr: bool) -> u32 {
    if explicit_vr && vr.has_long_length() {
        12
    } else {
        8
    }
}

/// The value representation with which an element is written.
fn written_vr(element: &DataElement) -> VR {
    match element.value() {
        Value::Sequence(_) if element.tag() == Tag::PIXEL_DATA => VR::OB,
        Value::Sequence(_) => VR::SQ,
        Value::Primitive(_) => element.vr(),
    }
}

/// The length of a fragment item, header included.
fn fragment_len(data: &[u8]) -> u32 {
    8 + data.len() as u32 + (data.len() as u32 & 1)
}

/// The length of the value of a sequence,
/// not counting the trailing delimiter of encapsulated pixel data.
fn items_len(items: &[SequenceItem], explicit_vr: bool) -> u32 {
    items
        .iter()
        .map(|item| match item {
            SequenceItem::Fragment(data) => fragment_len(data),
            SequenceItem::Elements(elements) => {
                8 + elements
                    .values()
                    .map(|e| encoded_len(e, explicit_vr))
                    .sum::<u32>()
            }
        })
        .sum()
}

/// Determine the number of bytes that the given element occupies
/// once written, header included.
///
/// Values are padded to an even length.
/// Encapsulated pixel data counts its sequence delimiter.
///
/// ```
/// # use dcmcodec_core::{DataElement, Tag, VR};
/// # use dcmcodec_parser::dataset::write::encoded_len;
/// let element = DataElement::new(Tag(0x0010, 0x0010), VR::PN, "Doe^John");
/// assert_eq!(encoded_len(&element, true), 16);
/// let element = DataElement::new(Tag(0x0008, 0x0018), VR::UI, "1.2.3");
/// assert_eq!(encoded_len(&element, true), 14);
/// ```
pub fn encoded_len(element: &DataElement, explicit_vr: bool) -> u32 {
    let vr = written_vr(element);
    let header = header_len(vr, explicit_vr);
    match element.value() {
        Value::Primitive(value) => header + value.padded_byte_len(),
        Value::Sequence(items) if element.tag() == Tag::PIXEL_DATA => {
            header + items_len(items, explicit_vr) + 8
        }
        Value::Sequence(items) => header + items_len(items, explicit_vr),
    }
}

/// Calculate the value of the group length element of each group,
/// as the sum of the encoded lengths of its other elements.
///
/// The file meta group is always measured in explicit VR.
pub fn group_lengths<'a, I>(elements: I, explicit_vr: bool) -> BTreeMap<GroupNumber, u32>
where
    I: IntoIterator<Item = &'a DataElement>,
{
    let mut lengths = BTreeMap::new();
    for element in elements {
        let tag = element.tag();
        if tag.is_group_length() {
            lengths.entry(tag.group()).or_insert(0);
            continue;
        }
        let explicit_vr = explicit_vr || tag.is_meta();
        *lengths.entry(tag.group()).or_insert(0) += encoded_len(element, explicit_vr);
    }
    lengths
}

/// A writer of a complete DICOM data set.
#[derive(Debug)]
pub struct DataSetWriter<W> {
    encoder: StatefulEncoder<W>,
    ts: TransferSyntax,
    in_group2: bool,
    skip_meta: bool,
}

impl<W> DataSetWriter<W>
where
    W: Write,
{
    /// Create a writer of a data set in the given transfer syntax,
    /// starting at position 0.
    pub fn new(to: W, ts: TransferSyntax) -> Self {
        Self::with_position(to, ts, 0)
    }

    /// Create a writer of a data set in the given transfer syntax,
    /// for a destination already holding `position` bytes.
    pub fn with_position(to: W, ts: TransferSyntax, position: u64) -> Self {
        let mut encoder = StatefulEncoder::with_position(to, position);
        if ts.is_big_endian() {
            encoder.toggle_swapped();
        }
        DataSetWriter {
            encoder,
            ts,
            in_group2: false,
            skip_meta: false,
        }
    }

    /// Leave out the file meta group,
    /// as required when sending a data set over the network.
    pub fn skip_meta_group(mut self, skip: bool) -> Self {
        self.skip_meta = skip;
        self
    }

    pub fn position(&self) -> u64 {
        self.encoder.position()
    }

    /// Write the given elements in order,
    /// recording the position of each one.
    pub fn write_elements<'a, I>(&mut self, elements: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a mut DataElement>,
    {
        for element in elements {
            let tag = element.tag();
            let is_meta = tag.is_meta();
            if is_meta && self.skip_meta {
                continue;
            }
            if is_meta != self.in_group2 {
                self.in_group2 = is_meta;
                let swapped = !is_meta && self.ts.is_big_endian();
                if self.encoder.is_swapped() != swapped {
                    self.encoder.toggle_swapped();
                }
            }
            let explicit_vr = self.in_group2 || self.ts.explicit_vr();
            self.write_element(element, explicit_vr)
                .context(WriteElementSnafu { tag })?;
        }
        Ok(())
    }

    fn write_element(&mut self, element: &mut DataElement, explicit_vr: bool) -> encode::Result<()> {
        element.set_write_position(self.encoder.position());
        let tag = element.tag();
        let vr = written_vr(element);
        match element.value_mut() {
            Value::Primitive(value) => {
                let header = DataElementHeader::new(tag, vr, Length(value.padded_byte_len()));
                self.encoder.encode_element_header(&header, explicit_vr)?;
                self.encoder.encode_primitive(vr, value)?;
            }
            Value::Sequence(items) if tag == Tag::PIXEL_DATA => {
                let header = DataElementHeader::new(tag, vr, Length::UNDEFINED);
                self.encoder.encode_element_header(&header, explicit_vr)?;
                self.write_items(items, explicit_vr)?;
                self.encoder.encode_sequence_delimiter()?;
            }
            Value::Sequence(items) => {
                let len = items_len(items, explicit_vr);
                let header = DataElementHeader::new(tag, vr, Length(len));
                self.encoder.encode_element_header(&header, explicit_vr)?;
                self.write_items(items, explicit_vr)?;
            }
        }
        Ok(())
    }

    fn write_items(&mut self, items: &mut [SequenceItem], explicit_vr: bool) -> encode::Result<()> {
        for item in items {
            match item {
                SequenceItem::Fragment(data) => {
                    let len = data.len() as u32 + (data.len() as u32 & 1);
                    self.encoder.encode_item_header(Length(len))?;
                    self.encoder.encode_fragment(data)?;
                }
                SequenceItem::Elements(elements) => {
                    let len = elements
                        .values()
                        .map(|e| encoded_len(e, explicit_vr))
                        .sum::<u32>();
                    self.encoder.encode_item_header(Length(len))?;
                    for element in elements.values_mut() {
                        self.write_element(element, explicit_vr)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Flush the destination and give it back.
    pub fn finish(mut self) -> Result<W> {
        self.encoder.flush().context(FlushSnafu)?;
        Ok(self.encoder.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::read::{DataSetReader, ReadOptions};
    use dcmcodec_core::value::{ItemElements, PrimitiveValue};
    use dcmcodec_dictionary_std::tags;
    use dcmcodec_transfer_syntax_registry::{entries, TransferSyntaxRegistry};
    use std::io::Cursor;

    fn sample() -> Vec<DataElement> {
        let mut item = ItemElements::new();
        item.insert(
            tags::REFERENCED_SOP_CLASS_UID,
            DataElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.3"),
        );
        vec![
            DataElement::new(
                tags::TRANSFER_SYNTAX_UID,
                VR::UI,
                "1.2.840.10008.1.2.2",
            ),
            DataElement::new(
                tags::REFERENCED_IMAGE_SEQUENCE,
                VR::SQ,
                vec![SequenceItem::Elements(item)],
            ),
            DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)),
            DataElement::new(
                tags::PIXEL_DATA,
                VR::OB,
                vec![
                    SequenceItem::Fragment(vec![]),
                    SequenceItem::Fragment(vec![1, 2, 3]),
                ],
            ),
        ]
    }

    #[test]
    fn encoded_lengths() {
        let elements = sample();
        // UI 19 chars + 1 padding
        assert_eq!(encoded_len(&elements[0], true), 28);
        // SQ header + item header + (8 + 6)
        assert_eq!(encoded_len(&elements[1], true), 12 + 8 + 14);
        assert_eq!(encoded_len(&elements[1], false), 8 + 8 + 14);
        // OB header + empty table + padded fragment + delimiter
        assert_eq!(encoded_len(&elements[3], true), 12 + 8 + 12 + 8);

        let lengths = group_lengths(&elements, false);
        assert_eq!(lengths[&0x0002], 28);
        assert_eq!(lengths[&0x0008], 8 + 8 + 14);
    }

    #[test]
    fn meta_group_stays_little_endian() {
        let mut elements = sample();
        let mut writer = DataSetWriter::new(Vec::new(), entries::EXPLICIT_VR_BIG_ENDIAN.clone());
        writer.write_elements(elements.iter_mut()).unwrap();
        let bytes = writer.finish().unwrap();

        assert_eq!(&bytes[0..6], &[0x02, 0x00, 0x10, 0x00, b'U', b'I']);
        assert_eq!(elements[1].write_position(), Some(28));
        assert_eq!(&bytes[28..32], &[0x00, 0x08, 0x11, 0x40]);

        let registry = TransferSyntaxRegistry::new();
        let parsed = DataSetReader::new(
            Cursor::new(&bytes),
            &registry,
            entries::IMPLICIT_VR_LITTLE_ENDIAN.clone(),
            ReadOptions::default(),
        )
        .unwrap()
        .read()
        .unwrap();
        assert_eq!(parsed.transfer_syntax, entries::EXPLICIT_VR_BIG_ENDIAN);
        assert_eq!(parsed.elements[&tags::ROWS].to_int::<u16>().unwrap(), 2);
        let fragments = parsed.elements[&tags::PIXEL_DATA].items().unwrap();
        assert_eq!(fragments[1].fragment(), Some(&[1, 2, 3, 0][..]));
        let item = parsed.elements[&tags::REFERENCED_IMAGE_SEQUENCE].items().unwrap()[0]
            .elements()
            .unwrap();
        assert_eq!(
            item[&tags::REFERENCED_SOP_CLASS_UID].to_str().unwrap(),
            "1.2.3"
        );
    }

    #[test]
    fn meta_group_skipped_for_network() {
        let mut elements = sample();
        let mut writer = DataSetWriter::new(Vec::new(), entries::IMPLICIT_VR_LITTLE_ENDIAN.clone())
            .skip_meta_group(true);
        writer.write_elements(elements.iter_mut()).unwrap();
        let bytes = writer.finish().unwrap();
        assert_eq!(&bytes[0..4], &[0x08, 0x00, 0x40, 0x11]);
        assert_eq!(elements[0].write_position(), None);
        assert_eq!(elements[1].write_position(), Some(0));
    }
}

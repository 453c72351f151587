//! This module contains the reader of whole DICOM data sets.
//!
//! The [`DataSetReader`] walks a byte stream element by element,
//! building a tag-keyed collection of owned data elements.
//! It follows the transfer syntax in effect,
//! except in the file meta group,
//! which is always explicit VR little endian.

use crate::stateful::decode::{self, StatefulDecoder};
use dcmcodec_core::dictionary::DataDictionary;
use dcmcodec_core::header::{DataElementHeader, Length, SequenceItemHeader, Tag};
use dcmcodec_core::value::{ItemElements, SequenceItem, Value};
use dcmcodec_core::DataElement;
use dcmcodec_dictionary_std::tags;
use dcmcodec_dictionary_std::StandardDataDictionary;
use dcmcodec_encoding::TransferSyntax;
use dcmcodec_transfer_syntax_registry::TransferSyntaxRegistry;
use smallvec::SmallVec;
use snafu::{Backtrace, ResultExt, Snafu};
use std::collections::BTreeMap;
use std::io::{self, Read, Seek, SeekFrom};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Could not determine the length of the source"))]
    SeekSource {
        source: io::Error,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not read element header at position {}", position))]
    ReadHeader {
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },

    #[snafu(display("Could not read element {} at position {}", tag, position))]
    ReadElement {
        tag: Tag,
        position: u64,
        #[snafu(backtrace)]
        source: decode::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The set of options for the data set reader.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct ReadOptions {
    /// whether a transfer syntax declared in the file meta group
    /// applies to the rest of the data set
    pub allow_syntax_change: bool,
    /// whether Pixel Data is loaded into memory, rather than skipped
    pub load_pixel_data: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        ReadOptions {
            allow_syntax_change: true,
            load_pixel_data: true,
        }
    }
}

impl ReadOptions {
    /// Replace the syntax adoption flag of the options.
    pub fn allow_syntax_change(mut self, allow_syntax_change: bool) -> Self {
        self.allow_syntax_change = allow_syntax_change;
        self
    }

    /// Replace the pixel data loading flag of the options.
    pub fn load_pixel_data(mut self, load_pixel_data: bool) -> Self {
        self.load_pixel_data = load_pixel_data;
        self
    }
}

/// The outcome of reading a data set.
#[derive(Debug, Clone)]
pub struct ParsedDataSet {
    /// the elements read, by tag
    pub elements: BTreeMap<Tag, DataElement>,
    /// the transfer syntax declared in the data,
    /// or the one used for reading if none was declared
    pub transfer_syntax: TransferSyntax,
}

/// A reader of a complete DICOM data set from a seekable byte source.
#[derive(Debug)]
pub struct DataSetReader<'r, S, D = StandardDataDictionary> {
    decoder: StatefulDecoder<S, D>,
    registry: &'r TransferSyntaxRegistry,
    /// the transfer syntax used outside of the file meta group
    active: TransferSyntax,
    /// the transfer syntax found in the data, if any
    declared: Option<TransferSyntax>,
    in_group2: bool,
    options: ReadOptions,
    end: u64,
}

impl<'r, S> DataSetReader<'r, S>
where
    S: Read + Seek,
{
    /// Create a reader starting at the current position of the source,
    /// using the standard data dictionary for implicit VR data.
    pub fn new(
        source: S,
        registry: &'r TransferSyntaxRegistry,
        ts: TransferSyntax,
        options: ReadOptions,
    ) -> Result<Self> {
        Self::new_with_dictionary(source, registry, ts, options, StandardDataDictionary)
    }
}

impl<'r, S, D> DataSetReader<'r, S, D>
where
    S: Read + Seek,
    D: DataDictionary,
{
    pub fn new_with_dictionary(
        mut source: S,
        registry: &'r TransferSyntaxRegistry,
        ts: TransferSyntax,
        options: ReadOptions,
        dict: D,
    ) -> Result<Self> {
        let position = source.stream_position().context(SeekSourceSnafu)?;
        let end = source.seek(SeekFrom::End(0)).context(SeekSourceSnafu)?;
        source
            .seek(SeekFrom::Start(position))
            .context(SeekSourceSnafu)?;

        let mut decoder = StatefulDecoder::new_with_dictionary(source, position, dict);
        decoder.set_end(end);
        if ts.is_big_endian() {
            decoder.toggle_swapped();
        }
        Ok(DataSetReader {
            decoder,
            registry,
            active: ts,
            declared: None,
            in_group2: false,
            options,
            end,
        })
    }

    /// Read all elements until the end of the source.
    ///
    /// Fails on the first element which cannot be read,
    /// in which case nothing is returned.
    pub fn read(mut self) -> Result<ParsedDataSet> {
        let mut elements = BTreeMap::new();

        while self.end.saturating_sub(self.decoder.position()) >= 8 {
            let position = self.decoder.position();
            let raw = self
                .decoder
                .read_raw_tag()
                .context(ReadHeaderSnafu { position })?;

            // the file meta group is recognized by its little endian encoding
            let is_meta = raw[0] == 0x02 && raw[1] == 0x00;
            if is_meta != self.in_group2 {
                self.in_group2 = is_meta;
                let swapped = !is_meta && self.active.is_big_endian();
                if self.decoder.is_swapped() != swapped {
                    self.decoder.toggle_swapped();
                }
            }
            let tag = self.decoder.tag_from_raw(raw);
            let explicit_vr = self.in_group2 || self.active.explicit_vr();

            let element = match self.read_element(tag, position, explicit_vr) {
                Ok(element) => element,
                Err(e) => {
                    tracing::error!(%tag, position, "Could not read data element: {}", e);
                    return Err(e).context(ReadElementSnafu { tag, position });
                }
            };
            let element = match element {
                Some(element) => element,
                None => continue,
            };

            if tag == tags::TRANSFER_SYNTAX_UID {
                self.declare_syntax(&element);
            }

            elements.insert(tag, element);
        }

        let transfer_syntax = self.declared.unwrap_or(self.active);
        Ok(ParsedDataSet {
            elements,
            transfer_syntax,
        })
    }

    fn declare_syntax(&mut self, element: &DataElement) {
        let uid = match element.to_str() {
            Ok(uid) => uid,
            Err(_) => {
                tracing::warn!("Transfer Syntax UID is not a text value");
                return;
            }
        };
        if uid.trim().is_empty() {
            return;
        }
        let ts = self.registry.lookup(&*uid);
        tracing::debug!(uid = ts.uid(), "Declared transfer syntax: {}", ts.name());
        if self.options.allow_syntax_change {
            self.active = ts.clone();
        }
        self.declared = Some(ts);
    }

    /// Read the rest of an element whose tag was read at `position`.
    ///
    /// Returns `None` if the element was skipped.
    fn read_element(
        &mut self,
        tag: Tag,
        position: u64,
        explicit_vr: bool,
    ) -> decode::Result<Option<DataElement>> {
        let header = self.decoder.decode_header_after_tag(tag, explicit_vr)?;

        if tag == Tag::PIXEL_DATA && !self.options.load_pixel_data {
            self.skip_pixel_data(&header)?;
            return Ok(None);
        }

        let mut element = self.read_body(header, explicit_vr)?;
        element.set_read_position(position);
        Ok(Some(element))
    }

    fn read_body(
        &mut self,
        header: DataElementHeader,
        explicit_vr: bool,
    ) -> decode::Result<DataElement> {
        if header.is_non_primitive() {
            let items = self.read_sequence(header.tag, header.len, explicit_vr)?;
            Ok(DataElement::new_with_len(
                header.tag,
                header.vr,
                header.len,
                Value::Sequence(items),
            ))
        } else {
            let value = self.decoder.read_value(&header)?;
            Ok(DataElement::new_with_len(
                header.tag, header.vr, header.len, value,
            ))
        }
    }

    /// Read the items of a sequence,
    /// until the sequence delimiter or the declared length is reached.
    fn read_sequence(
        &mut self,
        tag: Tag,
        len: Length,
        explicit_vr: bool,
    ) -> decode::Result<SmallVec<[SequenceItem; 2]>> {
        let start = self.decoder.position();
        let mut items = SmallVec::new();
        loop {
            if let Some(len) = len.get() {
                if self.decoder.position() - start >= u64::from(len) {
                    break;
                }
            }
            let (header, toggled) = self.decoder.decode_item_header()?;
            match header {
                SequenceItemHeader::Item { len: item_len } => {
                    let item = match item_len.get() {
                        Some(n) if tag == Tag::PIXEL_DATA => {
                            SequenceItem::Fragment(self.decoder.read_bytes(n)?)
                        }
                        _ => SequenceItem::Elements(self.read_item(item_len, explicit_vr)?),
                    };
                    items.push(item);
                }
                SequenceItemHeader::ItemDelimiter => {
                    tracing::warn!(%tag, "Stray item delimiter in sequence");
                }
                SequenceItemHeader::SequenceDelimiter => {
                    if toggled {
                        self.decoder.toggle_swapped();
                    }
                    break;
                }
            }
            if toggled {
                self.decoder.toggle_swapped();
            }
        }
        Ok(items)
    }

    /// Read the nested elements of an item,
    /// until the item delimiter or the declared length is reached.
    fn read_item(&mut self, len: Length, explicit_vr: bool) -> decode::Result<ItemElements> {
        let start = self.decoder.position();
        let mut elements = ItemElements::new();
        loop {
            if let Some(len) = len.get() {
                if self.decoder.position() - start >= u64::from(len) {
                    break;
                }
            }
            let position = self.decoder.position();
            let tag = self.decoder.read_tag()?;
            if tag == Tag::ITEM_DELIMITER {
                self.decoder.skip(4)?;
                break;
            }
            let header = self.decoder.decode_header_after_tag(tag, explicit_vr)?;
            let mut element = self.read_body(header, explicit_vr)?;
            element.set_read_position(position);
            elements.insert(tag, element);
        }
        Ok(elements)
    }

    /// Advance past the value of a Pixel Data element
    /// without keeping any of it.
    fn skip_pixel_data(&mut self, header: &DataElementHeader) -> decode::Result<()> {
        if let Some(len) = header.len.get() {
            return self.decoder.skip(len);
        }
        loop {
            let position = self.decoder.position();
            let (item, toggled) = self.decoder.decode_item_header()?;
            if toggled {
                self.decoder.toggle_swapped();
            }
            match item {
                SequenceItemHeader::Item { len } => match len.get() {
                    Some(len) => self.decoder.skip(len)?,
                    None => {
                        return decode::MalformedElementSnafu {
                            tag: Tag::PIXEL_DATA,
                            position,
                            reason: "pixel data fragment of undefined length",
                        }
                        .fail()
                    }
                },
                SequenceItemHeader::ItemDelimiter => {}
                SequenceItemHeader::SequenceDelimiter => return Ok(()),
            }
        }
    }
}

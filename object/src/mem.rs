//! This module contains the implementation of an in-memory DICOM data set.

use crate::{
    AccessByNameError, AccessError, NoSuchAttributeNameSnafu, NoSuchDataElementAliasSnafu,
    NoSuchDataElementTagSnafu, PrintDataSetSnafu, TranscodeSnafu, WriteError,
};
use dcmcodec_core::dictionary::{DataDictionary, DataDictionaryEntry};
use dcmcodec_core::header::{GroupNumber, Header};
use dcmcodec_core::value::{SequenceItem, Value};
use dcmcodec_core::{DataElement, PrimitiveValue, Tag, VR};
use dcmcodec_dictionary_std::{tags, StandardDataDictionary};
use dcmcodec_encoding::TransferSyntax;
use dcmcodec_parser::dataset::{group_lengths, DataSetWriter};
use dcmcodec_transfer_syntax_registry::{entries, TransferSyntaxRegistry};
use itertools::Itertools;
use once_cell::sync::Lazy;
use snafu::{OptionExt, ResultExt};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;
use std::io::Write;
use std::sync::Arc;

static DEFAULT_REGISTRY: Lazy<Arc<TransferSyntaxRegistry>> =
    Lazy::new(|| Arc::new(TransferSyntaxRegistry::new()));

/// Obtain the registry of built-in transfer syntaxes without external codecs,
/// shared by all data sets which were not given a registry of their own.
pub fn default_registry() -> Arc<TransferSyntaxRegistry> {
    Arc::clone(&DEFAULT_REGISTRY)
}

/// A DICOM data set that is fully contained in memory.
///
/// Elements are kept in ascending tag order.
/// The transfer syntax of the data set is the one named
/// by its _Transfer Syntax UID_ element, if it has one,
/// and otherwise the one it was read or last converted with.
#[derive(Debug, Clone)]
pub struct DataSet {
    /// the element map
    entries: BTreeMap<Tag, DataElement>,
    /// the transfer syntax to assume without a Transfer Syntax UID element
    transfer_syntax: TransferSyntax,
    /// the registry resolving transfer syntaxes and pixel data codecs
    registry: Arc<TransferSyntaxRegistry>,
}

impl PartialEq for DataSet {
    // the registry is not part of the data
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries && self.transfer_syntax == other.transfer_syntax
    }
}

impl Default for DataSet {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl DataSet {
    /// Create a new empty data set in implicit VR little endian,
    /// using the default transfer syntax registry.
    pub fn new_empty() -> Self {
        Self::new_empty_with_registry(default_registry())
    }

    /// Create a new empty data set in implicit VR little endian,
    /// using the given transfer syntax registry.
    pub fn new_empty_with_registry(registry: Arc<TransferSyntaxRegistry>) -> Self {
        DataSet {
            entries: BTreeMap::new(),
            transfer_syntax: entries::IMPLICIT_VR_LITTLE_ENDIAN.clone(),
            registry,
        }
    }

    /// Create a data set out of its parts.
    pub fn from_parts(
        entries: BTreeMap<Tag, DataElement>,
        transfer_syntax: TransferSyntax,
        registry: Arc<TransferSyntaxRegistry>,
    ) -> Self {
        DataSet {
            entries,
            transfer_syntax,
            registry,
        }
    }

    /// The transfer syntax registry used by this data set.
    pub fn registry(&self) -> &Arc<TransferSyntaxRegistry> {
        &self.registry
    }

    /// The transfer syntax in which the data set is encoded.
    pub fn transfer_syntax(&self) -> TransferSyntax {
        self.entries
            .get(&tags::TRANSFER_SYNTAX_UID)
            .and_then(|e| e.to_str().ok())
            .filter(|uid| !uid.trim().is_empty())
            .map(|uid| self.registry.lookup(&*uid))
            .unwrap_or_else(|| self.transfer_syntax.clone())
    }

    /// Declare the transfer syntax of the data set,
    /// updating the Transfer Syntax UID element if there is one.
    ///
    /// The data itself is not converted:
    /// see [`change_transfer_syntax`](DataSet::change_transfer_syntax).
    pub fn set_transfer_syntax(&mut self, ts: &TransferSyntax) {
        self.transfer_syntax = ts.clone();
        if let Some(element) = self.entries.get_mut(&tags::TRANSFER_SYNTAX_UID) {
            element.update_value(ts.uid());
        }
    }

    /// Retrieve a particular DICOM element by its tag.
    pub fn element(&self, tag: Tag) -> Result<&DataElement, AccessError> {
        self.entries
            .get(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Retrieve a particular DICOM element by its tag,
    /// or `None` if it is not in the data set.
    pub fn element_opt(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve a particular DICOM element by its keyword,
    /// as listed in the standard data dictionary (e.g. `"SeriesTime"`).
    pub fn element_by_name(&self, name: &str) -> Result<&DataElement, AccessByNameError> {
        let tag = StandardDataDictionary
            .by_name(name)
            .context(NoSuchAttributeNameSnafu { name })?
            .tag();
        self.entries
            .get(&tag)
            .with_context(|| NoSuchDataElementAliasSnafu {
                tag,
                alias: name.to_string(),
            })
    }

    /// Retrieve a mutable reference to a DICOM element by its tag.
    pub fn element_mut(&mut self, tag: Tag) -> Option<&mut DataElement> {
        self.entries.get_mut(&tag)
    }

    /// Insert a data element to the data set, replacing (and returning) any
    /// previous element of the same attribute.
    pub fn put(&mut self, elt: DataElement) -> Option<DataElement> {
        self.entries.insert(elt.tag(), elt)
    }

    /// Removes a DICOM element by its tag,
    /// reporting whether it was present.
    pub fn remove_element(&mut self, tag: Tag) -> bool {
        self.entries.remove(&tag).is_some()
    }

    /// Removes and returns a particular DICOM element by its tag.
    pub fn take_element(&mut self, tag: Tag) -> Result<DataElement, AccessError> {
        self.entries
            .remove(&tag)
            .context(NoSuchDataElementTagSnafu { tag })
    }

    /// Iterate over the elements in ascending tag order.
    pub fn iter(&self) -> impl Iterator<Item = &DataElement> + '_ {
        self.entries.values()
    }

    /// The number of elements at the root of the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the data set to `to`, without preamble,
    /// in the given transfer syntax.
    ///
    /// The data set is first converted to the target transfer syntax,
    /// and the group length of every group is recalculated.
    /// When `network` is true, the file meta group is left out.
    pub fn write_stream<W>(
        &mut self,
        to: W,
        ts: &TransferSyntax,
        network: bool,
    ) -> Result<(), WriteError>
    where
        W: Write,
    {
        self.write_stream_at(to, ts, network, 0)
    }

    pub(crate) fn write_stream_at<W>(
        &mut self,
        to: W,
        ts: &TransferSyntax,
        network: bool,
        position: u64,
    ) -> Result<(), WriteError>
    where
        W: Write,
    {
        if self.transfer_syntax().uid() != ts.uid() {
            self.change_transfer_syntax(ts).context(TranscodeSnafu)?;
        }
        self.update_group_lengths(ts.explicit_vr());

        let mut writer = DataSetWriter::with_position(to, ts.clone(), position)
            .skip_meta_group(network);
        writer
            .write_elements(self.entries.values_mut())
            .context(PrintDataSetSnafu)?;
        writer.finish().context(PrintDataSetSnafu)?;
        Ok(())
    }

    /// Replace the group length element of every group,
    /// creating the ones which are missing.
    fn update_group_lengths(&mut self, explicit_vr: bool) {
        let lengths: BTreeMap<GroupNumber, u32> = group_lengths(self.entries.values(), explicit_vr);
        for (group, len) in lengths {
            self.put(DataElement::new(
                Tag(group, 0x0000),
                VR::UL,
                PrimitiveValue::from(len),
            ));
        }
    }

    /// Produce a human readable listing of all elements,
    /// with the contents of sequence items indented.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        // writing into a String does not fail
        let _ = self.dump_to(&mut out);
        out
    }

    /// Write the listing produced by [`dump`](DataSet::dump) to `out`.
    pub fn dump_to<W>(&self, out: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        for element in self.iter() {
            dump_element(out, element, 0)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DataSet {
    type Item = &'a DataElement;
    type IntoIter = std::collections::btree_map::Values<'a, Tag, DataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

fn dump_element<W>(out: &mut W, element: &DataElement, depth: usize) -> fmt::Result
where
    W: fmt::Write,
{
    let indent = "  ".repeat(depth);
    let tag = element.tag();
    let alias = StandardDataDictionary
        .by_tag(tag)
        .map(DataDictionaryEntry::alias)
        .unwrap_or("«Unknown Attribute»");

    match element.value() {
        Value::Sequence(items) => {
            writeln!(
                out,
                "{}{} {:28} {} ({} Item{})",
                indent,
                tag,
                alias,
                element.vr(),
                items.len(),
                if items.len() == 1 { "" } else { "s" },
            )?;
            for item in items {
                match item {
                    SequenceItem::Elements(elements) => {
                        writeln!(out, "{}  (FFFE,E000) Item", indent)?;
                        for element in elements.values() {
                            dump_element(out, element, depth + 2)?;
                        }
                    }
                    SequenceItem::Fragment(data) => {
                        writeln!(
                            out,
                            "{}  (FFFE,E000) pi ({:>3} bytes): {}",
                            indent,
                            data.len(),
                            bytes_summary(data),
                        )?;
                    }
                }
            }
        }
        Value::Primitive(value) => {
            let summary = match value {
                PrimitiveValue::U8(data) => bytes_summary(data),
                PrimitiveValue::Str(_) => value
                    .to_str()
                    .map(|s| format!("\"{}\"", cut_str(&s, 64)))
                    .unwrap_or_default(),
                value => value
                    .to_str()
                    .map(|s| cut_str(&s, 64).to_string())
                    .unwrap_or_default(),
            };
            writeln!(
                out,
                "{}{} {:28} {} ({:>3} bytes): {}",
                indent,
                tag,
                alias,
                element.vr(),
                value.padded_byte_len(),
                summary,
            )?;
        }
    }
    Ok(())
}

fn bytes_summary(data: &[u8]) -> String {
    let head = data.iter().take(16).map(|b| format!("{:02X}", b)).join(" ");
    if data.len() > 16 {
        format!("{} ...", head)
    } else {
        head
    }
}

fn cut_str(s: &str, max_characters: usize) -> &str {
    match s.char_indices().nth(max_characters) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_core::value::ItemElements;

    #[test]
    fn put_take_and_remove() {
        let mut obj = DataSet::new_empty();
        assert!(obj.is_empty());
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        let old = obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^Jane"));
        assert_eq!(old.map(|e| e.to_str().unwrap().into_owned()), Some("Doe^John".to_string()));
        assert_eq!(obj.len(), 2);

        // ascending tag order
        let order: Vec<_> = obj.iter().map(|e| e.tag()).collect();
        assert_eq!(order, vec![tags::MODALITY, tags::PATIENT_NAME]);

        assert!(obj.element_opt(tags::ROWS).is_none());
        assert!(matches!(
            obj.element(tags::ROWS),
            Err(AccessError::NoSuchDataElementTag { .. })
        ));

        let taken = obj.take_element(tags::MODALITY).unwrap();
        assert_eq!(taken.to_str().unwrap(), "MR");
        assert!(obj.take_element(tags::MODALITY).is_err());
        assert!(obj.remove_element(tags::PATIENT_NAME));
        assert!(!obj.remove_element(tags::PATIENT_NAME));
        assert!(obj.is_empty());
    }

    #[test]
    fn transfer_syntax_follows_element() {
        let mut obj = DataSet::new_empty();
        assert_eq!(obj.transfer_syntax(), entries::IMPLICIT_VR_LITTLE_ENDIAN);

        // without the element, only the fallback changes
        obj.set_transfer_syntax(&entries::EXPLICIT_VR_BIG_ENDIAN);
        assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_BIG_ENDIAN);
        assert!(obj.element_opt(tags::TRANSFER_SYNTAX_UID).is_none());

        // the element wins over the fallback
        obj.put(DataElement::new(
            tags::TRANSFER_SYNTAX_UID,
            VR::UI,
            "1.2.840.10008.1.2.5\0",
        ));
        assert_eq!(obj.transfer_syntax(), entries::RLE_LOSSLESS);

        obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
        assert_eq!(
            obj.element(tags::TRANSFER_SYNTAX_UID).unwrap().to_str().unwrap(),
            "1.2.840.10008.1.2.1"
        );

        // a blank element is ignored
        obj.put(DataElement::new(tags::TRANSFER_SYNTAX_UID, VR::UI, "  "));
        assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
    }

    #[test]
    fn group_lengths_are_created() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        obj.put(DataElement::new(tags::PATIENT_ID, VR::LO, "123"));
        let mut out = Vec::new();
        obj.write_stream(&mut out, &entries::IMPLICIT_VR_LITTLE_ENDIAN, false)
            .unwrap();

        // (8 + 8) + (8 + 4)
        let group_length = obj.element(Tag(0x0010, 0x0000)).unwrap();
        assert_eq!(group_length.vr(), VR::UL);
        assert_eq!(group_length.to_int::<u32>().unwrap(), 28);
        assert_eq!(group_length.write_position(), Some(0));
        assert_eq!(out.len(), 12 + 28);
        assert_eq!(
            obj.element(tags::PATIENT_ID).unwrap().write_position(),
            Some(12 + 16)
        );
    }

    #[test]
    fn dump_lists_nested_items() {
        let mut item = ItemElements::new();
        item.insert(
            tags::REFERENCED_SOP_CLASS_UID,
            DataElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.3"),
        );
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(
            tags::REFERENCED_IMAGE_SEQUENCE,
            VR::SQ,
            vec![SequenceItem::Elements(item)],
        ));
        obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(512_u16)));
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            vec![SequenceItem::Fragment(vec![]), SequenceItem::Fragment(vec![0xFF, 0xD8])],
        ));

        let dump = obj.dump();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("(0008,1140) ReferencedImageSequence"));
        assert!(lines[0].ends_with("SQ (1 Item)"));
        assert_eq!(lines[1], "  (FFFE,E000) Item");
        assert!(lines[2].starts_with("    (0008,1150) ReferencedSOPClassUID"));
        assert!(lines[2].ends_with("\"1.2.3\""));
        assert!(lines[3].ends_with("512"));
        assert!(lines[4].ends_with("OB (2 Items)"));
        assert!(lines[5].contains("(  0 bytes)"));
        assert!(lines[6].ends_with("(  2 bytes): FF D8"));
    }

    #[test]
    fn dump_to_stops_at_writer_failure() {
        // accepts a single line, then refuses
        struct OneLine(usize);
        impl fmt::Write for OneLine {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0 += s.matches('\n').count();
                if self.0 > 1 {
                    Err(fmt::Error)
                } else {
                    Ok(())
                }
            }
        }

        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::MODALITY, VR::CS, "MR"));
        assert!(obj.dump_to(&mut OneLine(0)).is_ok());
        obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^John"));
        assert!(obj.dump_to(&mut OneLine(0)).is_err());
    }

    #[test]
    fn element_by_keyword() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::SERIES_TIME, VR::TM, "120000"));

        let element = obj.element_by_name("SeriesTime").unwrap();
        assert_eq!(element.tag(), Tag(0x0008, 0x0031));
        assert!(matches!(
            obj.element_by_name("StudyTime"),
            Err(AccessByNameError::NoSuchDataElementAlias { .. })
        ));
        assert!(matches!(
            obj.element_by_name("NotAnAttribute"),
            Err(AccessByNameError::NoSuchAttributeName { .. })
        ));
    }
}

//! DICOM JSON serialization module

use std::io::Write;

use crate::DicomJson;
use dcmcodec_core::{DataElement, DicomValue, Header, ItemElements, SequenceItem, Tag, VR};
use dcmcodec_dictionary_std::tags;
use dcmcodec_object::DataSet;
use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use self::value::{is_blank, AsNumbers, AsPersonNames, AsStrings, InlineBinary};
mod value;

/// Serialize a piece of DICOM data as a string of JSON.
pub fn to_string<T>(data: T) -> Result<String, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_string(&DicomJson::from(data))
}

/// Serialize a piece of DICOM data as a pretty-printed string of JSON.
pub fn to_string_pretty<T>(data: T) -> Result<String, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_string_pretty(&DicomJson::from(data))
}

/// Serialize a piece of DICOM data as a serde JSON value.
pub fn to_value<T>(data: T) -> Result<serde_json::Value, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_value(&DicomJson::from(data))
}

/// Serialize a piece of DICOM data to a vector of bytes.
pub fn to_vec<T>(data: T) -> Result<Vec<u8>, serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
{
    serde_json::to_vec(&DicomJson::from(data))
}

/// Serialize a piece of DICOM data to a byte writer.
pub fn to_writer<W, T>(writer: W, data: T) -> Result<(), serde_json::Error>
where
    DicomJson<T>: From<T> + Serialize,
    W: Write,
{
    serde_json::to_writer(writer, &DicomJson::from(data))
}

impl<'a> From<&'a DataSet> for DicomJson<&'a DataSet> {
    fn from(value: &'a DataSet) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<&'_ DataSet> {
    /// Serializes the data set as a JSON map
    /// containing one entry per data element,
    /// indexed by tag.
    ///
    /// File meta group elements held by the data set are included.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|e| (DicomJson(e.tag()), DicomJson(e))))
    }
}

impl From<DataSet> for DicomJson<DataSet> {
    fn from(value: DataSet) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<DataSet> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DicomJson(&self.0).serialize(serializer)
    }
}

impl<'a> From<&'a ItemElements> for DicomJson<&'a ItemElements> {
    fn from(value: &'a ItemElements) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<&'_ ItemElements> {
    /// Serializes a sequence item as a JSON map, like a data set.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(tag, e)| (DicomJson(*tag), DicomJson(e))))
    }
}

impl<'a> From<&'a [SequenceItem]> for DicomJson<&'a [SequenceItem]> {
    fn from(value: &'a [SequenceItem]) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<&'_ [SequenceItem]> {
    /// Serializes the items of a sequence into a JSON array.
    ///
    /// Raw fragments have no JSON form and are left out.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.0.iter().filter_map(|item| match item {
            SequenceItem::Elements(elements) => Some(DicomJson(elements)),
            SequenceItem::Fragment(bytes) => {
                tracing::warn!(len = bytes.len(), "Leaving out fragment item from JSON");
                None
            }
        }))
    }
}

impl<'a> From<&'a DataElement> for DicomJson<&'a DataElement> {
    fn from(value: &'a DataElement) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<&'_ DataElement> {
    /// Serializes the data element as a single JSON map.
    ///
    /// The fields present will be:
    /// - `"vr"`, containing the value representation;
    /// - Either `"Value"` (as an array of values)
    ///   or `"InlineBinary"` (binary data in base64),
    ///   if the value is not empty.
    ///
    /// Pixel data only gets its value representation.
    /// The DICOM tag is not encoded,
    /// as it is typically serialized as the entry key within a data set.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut serializer = serializer.serialize_map(None)?;
        let vr = self.0.vr();
        serializer.serialize_entry("vr", vr.to_string())?;

        if self.0.tag() == tags::PIXEL_DATA {
            return serializer.end();
        }

        match self.0.value() {
            DicomValue::Sequence(seq) => {
                serializer.serialize_entry("Value", &DicomJson(&seq[..]))?;
            }
            DicomValue::Primitive(v) if is_blank(v) => {
                // no-op
            }
            DicomValue::Primitive(v) => match vr {
                VR::AE
                | VR::AS
                | VR::AT
                | VR::CS
                | VR::DA
                | VR::DT
                | VR::LO
                | VR::SH
                | VR::UC
                | VR::UI
                | VR::TM => {
                    serializer.serialize_entry("Value", &AsStrings::from(v))?;
                }
                VR::LT | VR::ST | VR::UR | VR::UT => {
                    serializer.serialize_entry("Value", &AsStrings::single(v))?;
                }
                VR::PN => {
                    serializer.serialize_entry("Value", &AsPersonNames::from(v))?;
                }
                VR::FD
                | VR::IS
                | VR::FL
                | VR::DS
                | VR::SL
                | VR::SS
                | VR::SV
                | VR::UL
                | VR::US
                | VR::UV => {
                    serializer.serialize_entry("Value", &AsNumbers::from(v))?;
                }
                VR::OB | VR::OD | VR::OF | VR::OL | VR::OV | VR::OW | VR::UN => {
                    serializer.serialize_entry("InlineBinary", &InlineBinary::from(v))?;
                }
                VR::SQ => {
                    return Err(S::Error::custom(format!(
                        "element {} has VR SQ but a primitive value",
                        self.0.tag()
                    )));
                }
            },
        }

        serializer.end()
    }
}

impl From<DataElement> for DicomJson<DataElement> {
    fn from(value: DataElement) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<DataElement> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DicomJson(&self.0).serialize(serializer)
    }
}

impl From<Tag> for DicomJson<Tag> {
    fn from(value: Tag) -> Self {
        Self(value)
    }
}

impl Serialize for DicomJson<Tag> {
    /// Serializes the DICOM tag as a single string in uppercase hexadecimal,
    /// with no separators or delimiters (`"GGGGEEEE"`).
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let Tag(g, e) = self.0;
        serializer.serialize_str(&format!("{:04X}{:04X}", g, e))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use dcmcodec_core::value::C;
    use dcmcodec_core::PrimitiveValue;
    use serde_json::json;

    use super::*;

    fn put(obj: &mut DataSet, tag: Tag, vr: VR, value: impl Into<DicomValue>) {
        obj.put(DataElement::new(tag, vr, value));
    }

    #[test]
    fn serialize_simple_data_elements() {
        let mut obj = DataSet::new_empty();
        put(&mut obj, Tag(0x0008, 0x0005), VR::CS, "ISO_IR 192");
        put(&mut obj, tags::STUDY_DATE, VR::DA, "20130409");
        put(&mut obj, tags::IMAGE_TYPE, VR::CS, "ORIGINAL\\PRIMARY ");
        put(&mut obj, Tag(0x0008, 0x0090), VR::PN, "^Bob^^Dr.");
        put(
            &mut obj,
            Tag(0x0009, 0x1002),
            VR::UN,
            vec![0xcf_u8, 0x4c, 0x7d, 0x73, 0xcb, 0xfb],
        );
        put(&mut obj, tags::PATIENT_AGE, VR::AS, "30Y ");
        put(&mut obj, tags::PATIENT_WEIGHT, VR::DS, "");
        put(&mut obj, tags::IMAGE_COMMENTS, VR::LT, "first\\second");
        put(&mut obj, tags::ROWS, VR::US, PrimitiveValue::from(512_u16));
        put(
            &mut obj,
            tags::FRAME_INCREMENT_POINTER,
            VR::AT,
            PrimitiveValue::from(Tag(0x0018, 0x1063)),
        );

        assert_eq!(
            to_value(&obj).unwrap(),
            json!({
                "00080005": {
                    "vr": "CS",
                    "Value": [ "ISO_IR 192" ]
                },
                "00080008": {
                    "vr": "CS",
                    "Value": [ "ORIGINAL", "PRIMARY" ]
                },
                "00080020": {
                    "vr": "DA",
                    "Value": [ "20130409" ]
                },
                "00080090": {
                    "vr": "PN",
                    "Value": [
                      {
                        "Alphabetic": "^Bob^^Dr."
                      }
                    ]
                },
                "00091002": {
                    "vr": "UN",
                    "InlineBinary": "z0x9c8v7"
                },
                "00101010": {
                    "vr": "AS",
                    "Value": [ "30Y" ]
                },
                "00101030": { "vr": "DS" },
                "00204000": {
                    "vr": "LT",
                    "Value": [ "first\\second" ]
                },
                "00280009": {
                    "vr": "AT",
                    "Value": [ "00181063" ]
                },
                "00280010": {
                    "vr": "US",
                    "Value": [ 512 ]
                }
            }),
        );
    }

    #[test]
    fn serialize_sequence_elements() {
        let mut referenced = ItemElements::new();
        referenced.insert(
            tags::REFERENCED_SOP_CLASS_UID,
            DataElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2\0"),
        );
        referenced.insert(
            tags::REFERENCED_SOP_INSTANCE_UID,
            DataElement::new(tags::REFERENCED_SOP_INSTANCE_UID, VR::UI, "2.25.1"),
        );
        let mut series = ItemElements::new();
        series.insert(
            tags::SERIES_INSTANCE_UID,
            DataElement::new(tags::SERIES_INSTANCE_UID, VR::UI, "2.25.2"),
        );
        series.insert(
            tags::REFERENCED_IMAGE_SEQUENCE,
            DataElement::new(
                tags::REFERENCED_IMAGE_SEQUENCE,
                VR::SQ,
                vec![SequenceItem::Elements(referenced)],
            ),
        );

        let mut obj = DataSet::new_empty();
        put(
            &mut obj,
            tags::REFERENCED_SERIES_SEQUENCE,
            VR::SQ,
            vec![
                SequenceItem::Elements(series),
                SequenceItem::Elements(ItemElements::new()),
            ],
        );

        assert_eq!(
            to_value(obj).unwrap(),
            json!({
                "00081115": {
                    "vr": "SQ",
                    "Value": [
                        {
                            "00081140": {
                                "vr": "SQ",
                                "Value": [
                                    {
                                        "00081150": {
                                            "vr": "UI",
                                            "Value": ["1.2.840.10008.5.1.4.1.1.2"]
                                        },
                                        "00081155": {
                                            "vr": "UI",
                                            "Value": ["2.25.1"]
                                        }
                                    }
                                ]
                            },
                            "0020000E": {
                                "vr": "UI",
                                "Value": ["2.25.2"]
                            }
                        },
                        {}
                    ]
                }
            }),
        );
    }

    #[test]
    fn pixel_data_is_left_out() {
        let mut obj = DataSet::new_empty();
        put(&mut obj, tags::ROWS, VR::US, PrimitiveValue::from(1_u16));
        put(&mut obj, tags::PIXEL_DATA, VR::OW, PrimitiveValue::U16(C::from_slice(&[1, 2])));
        assert_eq!(
            to_value(&obj).unwrap(),
            json!({
                "00280010": { "vr": "US", "Value": [1] },
                "7FE00010": { "vr": "OW" }
            }),
        );

        // encapsulated
        put(
            &mut obj,
            tags::PIXEL_DATA,
            VR::OB,
            vec![
                SequenceItem::Fragment(Vec::new()),
                SequenceItem::Fragment(vec![0xFF, 0xD8, 0xFF, 0xD9]),
            ],
        );
        assert_eq!(
            to_string(&obj).unwrap(),
            r#"{"00280010":{"vr":"US","Value":[1]},"7FE00010":{"vr":"OB"}}"#
        );
    }

    #[test]
    fn fragments_outside_pixel_data_are_skipped() {
        let mut item = ItemElements::new();
        item.insert(tags::ROWS, DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(4_u16)));
        let element = DataElement::new(
            Tag(0x0009, 0x1010),
            VR::UN,
            vec![SequenceItem::Fragment(vec![1, 2]), SequenceItem::Elements(item)],
        );
        assert_eq!(
            to_value(&element).unwrap(),
            json!({
                "vr": "UN",
                "Value": [ { "00280010": { "vr": "US", "Value": [4] } } ]
            }),
        );
    }

    #[test]
    fn sequence_vr_with_primitive_value_fails() {
        let element = DataElement::new(tags::REFERENCED_SERIES_SEQUENCE, VR::SQ, "text");
        assert!(to_string(element).is_err());
    }

    #[test]
    fn written_file_serializes_with_meta_group() {
        use dcmcodec_transfer_syntax_registry::entries;

        let mut obj = DataSet::new_empty();
        put(&mut obj, tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7");
        put(&mut obj, tags::SOP_INSTANCE_UID, VR::UI, "2.25.9876");
        put(&mut obj, tags::MODALITY, VR::CS, "OT");
        obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
        let mut file = Vec::new();
        obj.write_part10(&mut file).unwrap();

        let back = dcmcodec_object::from_reader(std::io::Cursor::new(&file)).unwrap();
        let json = to_value(&back).unwrap();
        assert_eq!(json["00020010"], json!({ "vr": "UI", "Value": ["1.2.840.10008.1.2.1"] }));
        assert_eq!(json["00020003"], json!({ "vr": "UI", "Value": ["2.25.9876"] }));
        assert_eq!(json["00080060"], json!({ "vr": "CS", "Value": ["OT"] }));

        let mut pretty = Vec::new();
        to_writer(&mut pretty, &back).unwrap();
        assert_eq!(serde_json::from_slice::<serde_json::Value>(&pretty).unwrap(), json);
        assert!(to_string_pretty(&back).unwrap().contains('\n'));
        assert_eq!(to_vec(&back).unwrap(), to_string(&back).unwrap().into_bytes());
    }
}

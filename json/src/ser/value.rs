//! DICOM value serialization

use dcmcodec_core::value::ConvertValueError;
use dcmcodec_core::PrimitiveValue;
use serde::ser::{Error as _, SerializeSeq};
use serde::{Serialize, Serializer};
use std::borrow::Cow;

use crate::{INFINITY, NAN, NEG_INFINITY};

/// Split a primitive value into its textual parts.
///
/// Attribute tags are written as `GGGGEEEE`.
/// Text is split on backslashes only if `multiple` is set,
/// and each part loses its padding.
pub(crate) fn strings(
    value: &PrimitiveValue,
    multiple: bool,
) -> Result<Vec<Cow<'_, str>>, ConvertValueError> {
    if let PrimitiveValue::Tags(tags) = value {
        return Ok(tags
            .iter()
            .map(|t| Cow::Owned(format!("{:04X}{:04X}", t.0, t.1)))
            .collect());
    }
    let text = value.to_str()?;
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if !multiple {
        return Ok(vec![text]);
    }
    let parts = text
        .split('\\')
        .map(|s| s.trim_matches(|c: char| c == ' ' || c == '\0').to_owned())
        .map(Cow::Owned)
        .collect();
    Ok(parts)
}

/// Whether the value has nothing to show after its padding is removed.
pub(crate) fn is_blank(value: &PrimitiveValue) -> bool {
    match value {
        PrimitiveValue::Empty => true,
        PrimitiveValue::Str(s) => s.trim_end_matches(|c| c == ' ' || c == '\0').is_empty(),
        _ => value.multiplicity() == 0,
    }
}

/// Wrapper type for [primitive values][1]
/// which should always be encoded as strings.
///
/// Should be used for the value representations
/// AE, AS, AT, CS, DA, DT, LO, SH, TM, UC, and UI.
/// LT, ST, UR, and UT hold a single value,
/// backslashes included: see [`AsStrings::single`].
///
/// [1]: dcmcodec_core::PrimitiveValue
#[derive(Debug, Clone)]
pub struct AsStrings<'a> {
    value: &'a PrimitiveValue,
    multiple: bool,
}

impl<'a> From<&'a PrimitiveValue> for AsStrings<'a> {
    fn from(value: &'a PrimitiveValue) -> Self {
        AsStrings {
            value,
            multiple: true,
        }
    }
}

impl<'a> AsStrings<'a> {
    /// Encode the text as one string, without splitting it.
    pub fn single(value: &'a PrimitiveValue) -> Self {
        AsStrings {
            value,
            multiple: false,
        }
    }
}

impl Serialize for AsStrings<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings = strings(self.value, self.multiple).map_err(S::Error::custom)?;
        serializer.collect_seq(&strings)
    }
}

/// Wrapper type for [primitive values][1]
/// which should preferably be encoded as numbers,
/// unless the value is already a string,
/// or if serialization would result in precision loss.
///
/// Should be used for the value representations
/// DS, FL, FD, IS, SL, SS, SV, UL, US, and UV.
///
/// [1]: dcmcodec_core::PrimitiveValue
#[derive(Debug, Clone)]
pub struct AsNumbers<'a>(&'a PrimitiveValue);

impl<'a> From<&'a PrimitiveValue> for AsNumbers<'a> {
    fn from(value: &'a PrimitiveValue) -> Self {
        AsNumbers(value)
    }
}

/// Serialize 64-bit integers as numbers if they fit in 32 bits,
/// as text otherwise.
fn narrowed_seq<S, T>(serializer: S, numbers: &[T]) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: num_traits::ToPrimitive + ToString,
{
    let mut ser = serializer.serialize_seq(Some(numbers.len()))?;
    for number in numbers {
        match number.to_i32() {
            Some(narrowed) => ser.serialize_element(&narrowed)?,
            None => ser.serialize_element(&number.to_string())?,
        }
    }
    ser.end()
}

fn float_seq<S, T>(serializer: S, numbers: &[T]) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: num_traits::Float + Serialize,
{
    let mut ser = serializer.serialize_seq(Some(numbers.len()))?;
    for number in numbers {
        if number.is_finite() {
            ser.serialize_element(number)?;
        } else if number.is_nan() {
            ser.serialize_element(NAN)?;
        } else if number.is_sign_positive() {
            ser.serialize_element(INFINITY)?;
        } else {
            ser.serialize_element(NEG_INFINITY)?;
        }
    }
    ser.end()
}

impl Serialize for AsNumbers<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            PrimitiveValue::Empty => serializer.serialize_seq(Some(0))?.end(),
            PrimitiveValue::Tags(_) => Err(S::Error::custom("cannot encode tags as numbers")),
            // decimal and integer strings keep their text
            PrimitiveValue::Str(_) => {
                let strings = strings(self.0, true).map_err(S::Error::custom)?;
                serializer.collect_seq(&strings)
            }
            // no risk of precision loss
            PrimitiveValue::U8(numbers) => serializer.collect_seq(numbers),
            PrimitiveValue::I16(numbers) => serializer.collect_seq(numbers),
            PrimitiveValue::U16(numbers) => serializer.collect_seq(numbers),
            PrimitiveValue::I32(numbers) => serializer.collect_seq(numbers),
            PrimitiveValue::U32(numbers) => serializer.collect_seq(numbers),
            // possible precision loss
            PrimitiveValue::I64(numbers) => narrowed_seq(serializer, numbers),
            PrimitiveValue::U64(numbers) => narrowed_seq(serializer, numbers),
            PrimitiveValue::F32(numbers) => float_seq(serializer, numbers),
            PrimitiveValue::F64(numbers) => float_seq(serializer, numbers),
        }
    }
}

/// Wrapper type for primitive binary values
/// which should be encoded as base64 inline strings.
///
/// Should be used for the value representations
/// OB, OW, OL, OF, OD, OV, and UN.
#[derive(Debug, Clone)]
pub struct InlineBinary<'a>(&'a PrimitiveValue);

impl<'a> From<&'a PrimitiveValue> for InlineBinary<'a> {
    fn from(value: &'a PrimitiveValue) -> Self {
        InlineBinary(value)
    }
}

impl Serialize for InlineBinary<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use base64::Engine;
        let bytes = self.0.to_bytes().map_err(S::Error::custom)?;
        let str = base64::engine::general_purpose::STANDARD.encode(bytes);
        serializer.serialize_str(&str)
    }
}

/// Wrapper type for [primitive values][1]
/// which should always be encoded as person names.
///
/// Should only used for the value representation PN.
///
/// [1]: dcmcodec_core::PrimitiveValue
#[derive(Debug, Clone)]
pub struct AsPersonNames<'a>(&'a PrimitiveValue);

impl<'a> From<&'a PrimitiveValue> for AsPersonNames<'a> {
    fn from(value: &'a PrimitiveValue) -> Self {
        AsPersonNames(value)
    }
}

impl Serialize for AsPersonNames<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let strings = strings(self.0, true).map_err(S::Error::custom)?;
        serializer.collect_seq(strings.iter().map(|p| PersonNameDef::from(&**p)))
    }
}

/// Wrapper type for a string
/// to be interpreted as a person's name.
#[derive(Debug, Clone, Serialize)]
pub struct PersonNameDef<'a> {
    #[serde(rename = "Alphabetic")]
    alphabetic: &'a str,
}

impl<'a> From<&'a str> for PersonNameDef<'a> {
    fn from(value: &'a str) -> Self {
        PersonNameDef { alphabetic: value }
    }
}

#[cfg(test)]
mod tests {
    use dcmcodec_core::value::C;
    use dcmcodec_core::Tag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn serialize_primitive_value_as_strings() {
        let v = PrimitiveValue::from("Test Hospital ");
        let json = serde_json::to_value(AsStrings::from(&v)).unwrap();
        assert_eq!(json, json!(["Test Hospital"]));

        let v = PrimitiveValue::from("ORIGINAL\\PRIMARY\\AXIAL ");
        let json = serde_json::to_value(AsStrings::from(&v)).unwrap();
        assert_eq!(json, json!(["ORIGINAL", "PRIMARY", "AXIAL"]));

        let v = PrimitiveValue::from("C:\\images\\scan");
        let json = serde_json::to_value(AsStrings::single(&v)).unwrap();
        assert_eq!(json, json!(["C:\\images\\scan"]));

        let v = PrimitiveValue::Empty;
        let json = serde_json::to_value(AsStrings::from(&v)).unwrap();
        assert_eq!(json, json!([]));

        let v = PrimitiveValue::U16(C::from_slice(&[20, 40, 60]));
        let json = serde_json::to_value(AsStrings::from(&v)).unwrap();
        assert_eq!(json, json!(["20", "40", "60"]));

        let v = PrimitiveValue::Tags(C::from_slice(&[Tag(0x0028, 0x0009), Tag(0x7FE0, 0x0010)]));
        let json = serde_json::to_value(AsStrings::from(&v)).unwrap();
        assert_eq!(json, json!(["00280009", "7FE00010"]));
    }

    #[test]
    fn serialize_primitive_value_as_numbers() {
        let v = PrimitiveValue::from(23.5_f64);
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!([23.5]));

        let v = PrimitiveValue::F64(C::from_slice(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]));
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!(["NaN", "inf", "-inf"]));

        let v = PrimitiveValue::F32(C::from_slice(&[f32::NAN, f32::INFINITY, f32::NEG_INFINITY]));
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!(["NaN", "inf", "-inf"]));

        let v = PrimitiveValue::Empty;
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!([]));

        let v = PrimitiveValue::from(" 0.5\\-1.25 ");
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!(["0.5", "-1.25"]));

        let v = PrimitiveValue::U16(C::from_slice(&[20, 40, 60]));
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!([20, 40, 60]));

        // too large for a 32-bit integer
        let v = PrimitiveValue::U64(C::from_slice(&[876543245678, 5]));
        let json = serde_json::to_value(AsNumbers(&v)).unwrap();
        assert_eq!(json, json!(["876543245678", 5]));

        let v = PrimitiveValue::from(Tag(0x0010, 0x0010));
        assert!(serde_json::to_value(AsNumbers(&v)).is_err());
    }

    #[test]
    fn serialize_binary_and_names() {
        let v = PrimitiveValue::from(vec![0xcf_u8, 0x4c, 0x7d, 0x73, 0xcb, 0xfb]);
        let json = serde_json::to_value(InlineBinary(&v)).unwrap();
        assert_eq!(json, json!("z0x9c8v7"));

        // words go out little endian
        let v = PrimitiveValue::U16(C::from_slice(&[0x0201, 0x0403]));
        let json = serde_json::to_value(InlineBinary(&v)).unwrap();
        assert_eq!(json, json!("AQIDBA=="));

        let v = PrimitiveValue::from("Doe^John\\^Bob^^Dr. ");
        let json = serde_json::to_value(AsPersonNames(&v)).unwrap();
        assert_eq!(
            json,
            json!([{ "Alphabetic": "Doe^John" }, { "Alphabetic": "^Bob^^Dr." }])
        );
    }

    #[test]
    fn blank_values() {
        assert!(is_blank(&PrimitiveValue::Empty));
        assert!(is_blank(&PrimitiveValue::from("  ")));
        assert!(is_blank(&PrimitiveValue::U16(C::new())));
        assert!(!is_blank(&PrimitiveValue::from("A")));
        assert!(!is_blank(&PrimitiveValue::from(0_u16)));
    }
}

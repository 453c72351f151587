//! This module includes a high level abstraction over a DICOM data element's value.
//!
//! A value is either primitive (text, numbers, bytes)
//! or a sequence of items.
//! Items either hold a nested collection of data elements
//! or, in encapsulated pixel data, one raw fragment.

use crate::header::{DataElement, Length, Tag};
use num_traits::NumCast;
use smallvec::SmallVec;
use snafu::Snafu;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

mod primitive;

pub use self::primitive::{PrimitiveValue, C};

/// The nested data set of a sequence item, ordered by tag.
pub type ItemElements = BTreeMap<Tag, DataElement>;

/// An error type for an attempt of accessing a value
/// in an inappropriate format.
#[derive(Debug, Clone, PartialEq, Snafu)]
#[snafu(display("could not convert {} value to {}", original, requested))]
pub struct ConvertValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub original: ValueType,
}

impl ConvertValueError {
    pub(crate) fn new(requested: &'static str, original: ValueType) -> Self {
        ConvertValueError {
            requested,
            original,
        }
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `Value` without the content,
/// but also distinguishing the kinds of sequence items.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,
    /// A sequence of items.
    Sequence,
    /// A sequence of attribute tags.
    Tags,
    /// A text value.
    Str,
    /// Unsigned 8-bit integers.
    U8,
    /// Signed 16-bit integers.
    I16,
    /// Unsigned 16-bit integers.
    U16,
    /// Signed 32-bit integers.
    I32,
    /// Unsigned 32-bit integers.
    U32,
    /// Signed 64-bit integers.
    I64,
    /// Unsigned 64-bit integers.
    U64,
    /// 32-bit floating point numbers.
    F32,
    /// 64-bit floating point numbers.
    F64,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// One item of a sequence value.
///
/// The two shapes are mutually exclusive:
/// an item either holds a nested data set,
/// or it is an encapsulated pixel data item holding raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceItem {
    /// A nested collection of data elements.
    Elements(ItemElements),
    /// A raw pixel data fragment,
    /// or the basic offset table when first in the sequence.
    Fragment(Vec<u8>),
}

impl SequenceItem {
    /// Retrieve the fragment bytes, if this is an encapsulated item.
    pub fn fragment(&self) -> Option<&[u8]> {
        match self {
            SequenceItem::Fragment(data) => Some(data),
            SequenceItem::Elements(_) => None,
        }
    }

    /// Retrieve the nested elements, if this is a data set item.
    pub fn elements(&self) -> Option<&ItemElements> {
        match self {
            SequenceItem::Elements(elements) => Some(elements),
            SequenceItem::Fragment(_) => None,
        }
    }
}

/// Representation of a full DICOM value, which may be either primitive or
/// a sequence of items.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Primitive value.
    Primitive(PrimitiveValue),
    /// A complex sequence of items.
    Sequence(SmallVec<[SequenceItem; 2]>),
}

impl Value {
    /// Create a sequence value from the given items.
    pub fn new_sequence<I>(items: I) -> Self
    where
        I: IntoIterator<Item = SequenceItem>,
    {
        Value::Sequence(items.into_iter().collect())
    }

    /// Obtain the number of individual values.
    /// In a sequence, this is the number of items.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence(items) => items.len() as u32,
        }
    }

    /// The length that a freshly built element with this value declares:
    /// the encoded byte length of a primitive value,
    /// or undefined for sequences.
    pub fn natural_length(&self) -> Length {
        match self {
            Value::Primitive(v) => v.length(),
            Value::Sequence(_) => Length::UNDEFINED,
        }
    }

    /// Retrieve the kind of value, for error reporting.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence(_) => ValueType::Sequence,
        }
    }

    /// Get the primitive value, if not a sequence.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            Value::Sequence(_) => None,
        }
    }

    /// Get the sequence items, if this is a sequence.
    pub fn items(&self) -> Option<&[SequenceItem]> {
        match self {
            Value::Sequence(items) => Some(items),
            Value::Primitive(_) => None,
        }
    }

    /// Get a mutable reference to the sequence items, if this is a sequence.
    pub fn items_mut(&mut self) -> Option<&mut SmallVec<[SequenceItem; 2]>> {
        match self {
            Value::Sequence(items) => Some(items),
            Value::Primitive(_) => None,
        }
    }

    /// Convert the primitive value into a string representation.
    pub fn to_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_str(),
            Value::Sequence(_) => Err(ConvertValueError::new("string", ValueType::Sequence)),
        }
    }

    /// Retrieve the first integer of a primitive value.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        match self {
            Value::Primitive(v) => v.to_int(),
            Value::Sequence(_) => Err(ConvertValueError::new("integer", ValueType::Sequence)),
        }
    }

    /// Retrieve the raw bytes of a primitive value.
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_bytes(),
            Value::Sequence(_) => Err(ConvertValueError::new("bytes", ValueType::Sequence)),
        }
    }
}

impl From<PrimitiveValue> for Value {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl From<Vec<SequenceItem>> for Value {
    fn from(items: Vec<SequenceItem>) -> Self {
        Value::Sequence(SmallVec::from_vec(items))
    }
}

/// Normalize a unique identifier:
/// NUL characters are removed, surrounding whitespace is trimmed,
/// the UID is cut to 64 characters,
/// and a trailing dot is dropped.
///
/// ```
/// # use dcmcodec_core::value::sanitize_uid;
/// assert_eq!(sanitize_uid(" 1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
/// assert_eq!(sanitize_uid("1.2.3."), "1.2.3");
/// ```
pub fn sanitize_uid(uid: &str) -> String {
    let uid: String = uid.chars().filter(|c| *c != '\0').collect();
    let mut uid: String = uid.trim().chars().take(64).collect();
    if uid.ends_with('.') {
        uid.pop();
    }
    uid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::VR;

    #[test]
    fn sequence_value_accessors() {
        let mut nested = ItemElements::new();
        nested.insert(
            Tag(0x0008, 0x1150),
            DataElement::new(Tag(0x0008, 0x1150), VR::UI, "1.2.3"),
        );
        let value = Value::from(vec![
            SequenceItem::Elements(nested),
            SequenceItem::Fragment(vec![1, 2]),
        ]);

        assert_eq!(value.multiplicity(), 2);
        assert!(value.natural_length().is_undefined());
        let items = value.items().unwrap();
        assert!(items[0].elements().is_some());
        assert_eq!(items[1].fragment(), Some(&[1_u8, 2][..]));
        assert!(value.to_str().is_err());
        assert_eq!(value.value_type(), ValueType::Sequence);
    }

    #[test]
    fn uid_sanitization() {
        assert_eq!(sanitize_uid("1.2.840.10008.1.2\0"), "1.2.840.10008.1.2");
        assert_eq!(sanitize_uid("  1.2.3.  "), "1.2.3");
        let long = "1.".repeat(40);
        assert_eq!(sanitize_uid(&long).len(), 63);
    }
}

//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::{ConvertValueError, ValueType};
use crate::header::{Length, Tag};
use itertools::Itertools;
use num_traits::NumCast;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::str::FromStr;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// Text values are kept exactly as decoded,
/// including any trailing padding and backslash separators,
/// so that they encode back to the same bytes.
/// Byte values of words (OW) are kept in little endian order.
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-length values.
    Empty,

    /// A sequence of characters, possibly with multiple values
    /// separated by backslash.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// The value is a sequence of unsigned 8-bit integers.
    /// Used for OB, UN and OW.
    U8(C<u8>),

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD and FD.
    F64(C<f64>),
}

macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);
impl_from_for_primitive!(Tag, Tags);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from_vec(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from_slice(value))
    }
}

impl PrimitiveValue {
    /// Obtain the number of individual elements.
    /// This number may not match the DICOM value multiplicity
    /// in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(s) if s.is_empty() => 0,
            Str(s) => s.split('\\').count() as u32,
            Tags(b) => b.len() as u32,
            U8(b) => b.len() as u32,
            I16(b) => b.len() as u32,
            U16(b) => b.len() as u32,
            I32(b) => b.len() as u32,
            U32(b) => b.len() as u32,
            I64(b) => b.len() as u32,
            U64(b) => b.len() as u32,
            F32(b) => b.len() as u32,
            F64(b) => b.len() as u32,
        }
    }

    /// Determine the length of the value in its encoded form,
    /// before any padding to an even length.
    pub fn calculate_byte_len(&self) -> usize {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(s) => s.chars().count(),
            U8(c) => c.len(),
            I16(c) => c.len() * 2,
            U16(c) => c.len() * 2,
            I32(c) => c.len() * 4,
            U32(c) => c.len() * 4,
            I64(c) => c.len() * 8,
            U64(c) => c.len() * 8,
            F32(c) => c.len() * 4,
            F64(c) => c.len() * 8,
            Tags(c) => c.len() * 4,
        }
    }

    /// The encoded length of the value rounded up to an even number.
    pub fn padded_byte_len(&self) -> u32 {
        let len = self.calculate_byte_len() as u32;
        len + (len & 1)
    }

    /// The length of this value, as it would be declared in a header.
    pub fn length(&self) -> Length {
        Length(self.calculate_byte_len() as u32)
    }

    /// Retrieve the kind of value, for error reporting.
    pub fn value_type(&self) -> ValueType {
        use self::PrimitiveValue::*;
        match self {
            Empty => ValueType::Empty,
            Str(_) => ValueType::Str,
            Tags(_) => ValueType::Tags,
            U8(_) => ValueType::U8,
            I16(_) => ValueType::I16,
            U16(_) => ValueType::U16,
            I32(_) => ValueType::I32,
            U32(_) => ValueType::U32,
            I64(_) => ValueType::I64,
            U64(_) => ValueType::U64,
            F32(_) => ValueType::F32,
            F64(_) => ValueType::F64,
        }
    }

    /// Convert the primitive value into a string representation.
    ///
    /// Text is returned without its trailing padding
    /// (spaces and NUL characters).
    /// Numbers and tags are formatted in their canonical textual form,
    /// joined by backslashes.
    /// Byte values are not convertible.
    pub fn to_str(&self) -> Result<Cow<'_, str>, ConvertValueError> {
        use self::PrimitiveValue::*;
        match self {
            Empty => Ok(Cow::from("")),
            Str(s) => Ok(Cow::from(s.trim_end_matches(|c| c == ' ' || c == '\0'))),
            Tags(v) => Ok(Cow::from(v.iter().map(|t| t.to_string()).join("\\"))),
            I16(v) => Ok(Cow::from(v.iter().join("\\"))),
            U16(v) => Ok(Cow::from(v.iter().join("\\"))),
            I32(v) => Ok(Cow::from(v.iter().join("\\"))),
            U32(v) => Ok(Cow::from(v.iter().join("\\"))),
            I64(v) => Ok(Cow::from(v.iter().join("\\"))),
            U64(v) => Ok(Cow::from(v.iter().join("\\"))),
            F32(v) => Ok(Cow::from(v.iter().join("\\"))),
            F64(v) => Ok(Cow::from(v.iter().join("\\"))),
            U8(_) => Err(ConvertValueError::new("string", self.value_type())),
        }
    }

    /// Retrieve one integer from this value.
    ///
    /// Numeric values yield their first number,
    /// converted to `T` if representable.
    /// Text values are trimmed and parsed as a decimal number,
    /// considering only the first of multiple values.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        use self::PrimitiveValue::*;
        let requested = "integer";
        let out = match self {
            Str(s) => s
                .split('\\')
                .next()
                .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0'))
                .and_then(|s| s.parse().ok()),
            U8(v) => v.first().and_then(|x| T::from(*x)),
            I16(v) => v.first().and_then(|x| T::from(*x)),
            U16(v) => v.first().and_then(|x| T::from(*x)),
            I32(v) => v.first().and_then(|x| T::from(*x)),
            U32(v) => v.first().and_then(|x| T::from(*x)),
            I64(v) => v.first().and_then(|x| T::from(*x)),
            U64(v) => v.first().and_then(|x| T::from(*x)),
            F32(v) => v.first().and_then(|x| T::from(*x)),
            F64(v) => v.first().and_then(|x| T::from(*x)),
            Empty | Tags(_) => None,
        };
        out.ok_or_else(|| ConvertValueError::new(requested, self.value_type()))
    }

    /// Retrieve all integers of this value.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: NumCast + FromStr,
    {
        use self::PrimitiveValue::*;
        fn cast_all<S: NumCast + Copy, T: NumCast>(values: &[S]) -> Option<Vec<T>> {
            values.iter().map(|x| T::from(*x)).collect()
        }
        let out = match self {
            Empty => Some(Vec::new()),
            Str(s) => s
                .split('\\')
                .map(|s| s.trim_matches(|c: char| c.is_whitespace() || c == '\0'))
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().ok())
                .collect(),
            U8(v) => cast_all(v),
            I16(v) => cast_all(v),
            U16(v) => cast_all(v),
            I32(v) => cast_all(v),
            U32(v) => cast_all(v),
            I64(v) => cast_all(v),
            U64(v) => cast_all(v),
            F32(v) => cast_all(v),
            F64(v) => cast_all(v),
            Tags(_) => None,
        };
        out.ok_or_else(|| ConvertValueError::new("integer", self.value_type()))
    }

    /// Retrieve the value's bytes in their little endian encoded form.
    ///
    /// Only byte values are borrowed; other values are serialized.
    pub fn to_bytes(&self) -> Result<Cow<'_, [u8]>, ConvertValueError> {
        use self::PrimitiveValue::*;
        match self {
            Empty => Ok(Cow::from(&[][..])),
            U8(v) => Ok(Cow::from(&v[..])),
            Str(s) => Ok(Cow::from(s.chars().map(|c| c as u32 as u8).collect::<Vec<u8>>())),
            U16(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            I16(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            U32(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            I32(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            U64(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            I64(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            F32(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            F64(v) => Ok(Cow::from(v.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>())),
            Tags(_) => Err(ConvertValueError::new("bytes", self.value_type())),
        }
    }

    /// Get a single string slice, if the value is text.
    pub fn string(&self) -> Option<&str> {
        match self {
            PrimitiveValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the byte slice, if the value is a sequence of bytes.
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            PrimitiveValue::U8(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn text_is_trimmed_on_conversion() {
        let v = PrimitiveValue::from("ORIGINAL\\PRIMARY ");
        assert_eq!(v.to_str().unwrap(), "ORIGINAL\\PRIMARY");
        assert_eq!(v.multiplicity(), 2);

        let uid = PrimitiveValue::from("1.2.840.10008.1.2\0");
        assert_eq!(uid.to_str().unwrap(), "1.2.840.10008.1.2");
        assert_eq!(uid.calculate_byte_len(), 18);
    }

    #[test]
    fn integers_from_text_and_numbers() {
        assert_eq!(PrimitiveValue::from("12 ").to_int::<u32>().unwrap(), 12);
        assert_eq!(PrimitiveValue::from(512_u16).to_int::<i32>().unwrap(), 512);
        assert!(PrimitiveValue::from(-1_i16).to_int::<u16>().is_err());
        assert!(PrimitiveValue::Empty.to_int::<u16>().is_err());
        assert_eq!(
            PrimitiveValue::from("1\\2\\3").to_multi_int::<u8>().unwrap(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn byte_lengths() {
        assert_eq!(PrimitiveValue::U16(smallvec![1, 2, 3]).calculate_byte_len(), 6);
        assert_eq!(PrimitiveValue::from("ABC").padded_byte_len(), 4);
        assert_eq!(PrimitiveValue::from(vec![1, 2, 3, 4]).padded_byte_len(), 4);
        assert_eq!(PrimitiveValue::Tags(smallvec![Tag(0x0008, 0x0016)]).calculate_byte_len(), 4);
    }

    #[test]
    fn bytes_are_little_endian() {
        let v = PrimitiveValue::U16(smallvec![0x0102, 0x0304]);
        assert_eq!(&*v.to_bytes().unwrap(), &[0x02, 0x01, 0x04, 0x03]);
        assert!(PrimitiveValue::from(vec![1, 2, 3]).to_str().is_err());
    }
}

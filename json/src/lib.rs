//! DICOM JSON serialization.
//!
//! Data sets are written in the DICOM JSON model
//! of [DICOM standard part 18 chapter F][1]:
//! one entry per data element, keyed by the tag in hexadecimal,
//! holding the value representation and the values.
//!
//! [1]: https://dicom.nema.org/medical/dicom/current/output/chtml/part18/chapter_F.html
//!
//! The bulk of the pixel data is left out,
//! so that the output stays small enough for inspecting a file.
//! Only its value representation is recorded.
//!
//! # Example
//!
//! ```rust
//! # use dcmcodec_core::{DataElement, PrimitiveValue, VR};
//! # use dcmcodec_dictionary_std::tags;
//! # use dcmcodec_object::DataSet;
//! let mut obj = DataSet::new_empty();
//! obj.put(DataElement::new(tags::STUDY_DATE, VR::DA, "20230610"));
//! obj.put(DataElement::new(tags::INSTANCE_NUMBER, VR::IS, "5 "));
//!
//! let json = dcmcodec_json::to_string(&obj)?;
//!
//! assert_eq!(
//!     json,
//!     r#"{"00080020":{"vr":"DA","Value":["20230610"]},"00200013":{"vr":"IS","Value":["5"]}}"#
//! );
//!
//! Ok::<(), serde_json::Error>(())
//! ```
//!
//! [`DicomJson`] wraps a data set, an element or a tag
//! for use with any other Serde serializer.

mod ser;

pub use crate::ser::{to_string, to_string_pretty, to_value, to_vec, to_writer};

/// Text written in place of a floating point NaN.
pub const NAN: &str = "NaN";
/// Text written in place of positive infinity.
pub const INFINITY: &str = "inf";
/// Text written in place of negative infinity.
pub const NEG_INFINITY: &str = "-inf";

/// A wrapper for DICOM data
/// which serializes it in the DICOM JSON model.
#[derive(Debug, Clone, PartialEq)]
pub struct DicomJson<T>(T);

impl<T> DicomJson<T> {
    /// Unwrap the DICOM data.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Obtain a reference to the wrapped DICOM data.
    pub fn inner(&self) -> &T {
        &self.0
    }
}

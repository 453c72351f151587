#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmcodec containing the data structures
//! shared by every layer of the DICOM data set codec.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises the data types for DICOM element headers,
//!   including common definitions for DICOM tags and value representations,
//!   and the owned [`DataElement`] type.
//! - [`dictionary`] describes common behavior of DICOM data dictionaries,
//!   which translate tags to the attribute's typical value representation.
//! - [`value`] holds definitions for values in DICOM elements:
//!   primitive values and sequences of items,
//!   the latter being either nested data sets or pixel data fragments.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, DataElementHeader, HasLength, Header, Length, Tag, VR};
pub use value::{ItemElements, PrimitiveValue, SequenceItem, Value as DicomValue};

// re-export crates that are part of the public API
pub use smallvec;

#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the high-level abstraction of a DICOM data set:
//! a collection of data elements kept in memory,
//! together with the transfer syntax in which its content is encoded.
//!
//! # Examples
//!
//! Read a DICOM file, detecting the 128-byte preamble if present:
//!
//! ```no_run
//! use dcmcodec_object::open_file;
//! use dcmcodec_dictionary_std::tags;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//! let patient_name = obj.element(tags::PATIENT_NAME)?.to_str()?;
//! let modality = obj.element(tags::MODALITY)?.to_str()?;
//! # Ok(())
//! # }
//! ```
//!
//! Skip the pixel data when only the header is of interest:
//!
//! ```no_run
//! # use dcmcodec_object::OpenFileOptions;
//! let obj = OpenFileOptions::new()
//!     .load_pixel_data(false)
//!     .open_file("0002.dcm")?;
//! # Result::<(), Box<dyn std::error::Error>>::Ok(())
//! ```
//!
//! Build a data set and print it in a network transfer:
//!
//! ```
//! # use dcmcodec_core::{DataElement, PrimitiveValue, Tag, VR};
//! # use dcmcodec_object::DataSet;
//! # use dcmcodec_transfer_syntax_registry::entries;
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut obj = DataSet::new_empty();
//! obj.put(DataElement::new(Tag(0x0010, 0x0010), VR::PN, "Doe^John"));
//! obj.put(DataElement::new(Tag(0x0028, 0x0010), VR::US, PrimitiveValue::from(64_u16)));
//!
//! let mut serialized = Vec::new();
//! obj.write_stream(&mut serialized, &entries::EXPLICIT_VR_LITTLE_ENDIAN, true)?;
//! assert!(!serialized.is_empty());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Pixel data compression and decompression
//! go through the codecs of the data set's transfer syntax registry:
//! see the [`transcode`] module.
//! Identifying attributes can be replaced with salted hashes
//! through [`DataSet::anonymize`].
pub mod anonymize;
pub mod file;
pub mod mem;
pub mod meta;
pub mod transcode;

pub use crate::file::{from_reader, open_file, OpenFileOptions, ParseOptions, ReadPreamble};
pub use crate::mem::{default_registry, DataSet};
pub use dcmcodec_core::Tag;
pub use dcmcodec_dictionary_std::StandardDataDictionary;

use snafu::{Backtrace, Snafu};

/// The implementation class UID written to the file meta group
/// when the data set does not have one.
///
/// Generated as per the standard, part 5, section B.2.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.130984950029899771041107395941696826170";

/// The implementation version name written to the file meta group
/// when the data set does not have one.
pub const IMPLEMENTATION_VERSION_NAME: &str = "DCMCODEC 0.1";

/// An error which may occur when loading a DICOM data set
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Missing DICM magic code after the preamble"))]
    MissingMagicCode { backtrace: Backtrace },
    #[snafu(display("Could not parse data set"))]
    ParseDataSet {
        #[snafu(backtrace)]
        source: dcmcodec_parser::dataset::read::Error,
    },
}

/// An error which may occur when writing a DICOM data set
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not convert data set to the target transfer syntax"))]
    Transcode { source: transcode::Error },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: dcmcodec_parser::dataset::write::Error,
    },
}

/// An error which may occur when looking up a data set's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
}

/// An error which may occur when looking up a data set's attributes
/// by keyword instead of by tag.
///
/// These accesses incur a look-up at the data element dictionary,
/// which may fail if no such entry exists.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub(crate)))]
pub enum AccessByNameError {
    #[snafu(display("No such data element {} (with tag {})", alias, tag))]
    NoSuchDataElementAlias {
        tag: Tag,
        alias: String,
        backtrace: Backtrace,
    },

    /// Could not resolve attribute name from the data dictionary
    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

pub type Result<T, E = ReadError> = std::result::Result<T, E>;

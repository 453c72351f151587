#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate provides the middle layer of the DICOM data set codec:
//! decoding and encoding of element headers, values and items,
//! and the state machines reading and writing complete data sets.
//! All APIs are based on synchronous I/O.
//!
//! - [`stateful`] holds the element-level decoder and encoder,
//!   which track the byte order in effect and the stream position.
//! - [`dataset`] holds the data set reader and writer,
//!   which deal with transfer syntaxes, the file meta group,
//!   sequences and encapsulated pixel data.

pub mod dataset;
pub mod stateful;

pub use dataset::{DataSetReader, DataSetWriter, ParsedDataSet, ReadOptions};
pub use stateful::{StatefulDecoder, StatefulEncoder};

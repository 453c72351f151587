//! Reading and writing of whole DICOM data sets.
//!
//! A data set is handled as an ordered collection of owned data elements.
//! [`DataSetReader`] builds the collection from a byte source,
//! and [`DataSetWriter`] prints it back in a given transfer syntax.
pub mod read;
pub mod write;

pub use self::read::{DataSetReader, ParsedDataSet, ReadOptions};
pub use self::write::{encoded_len, group_lengths, DataSetWriter};

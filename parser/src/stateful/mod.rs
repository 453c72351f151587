//! Stateful decoding and encoding of DICOM data element parts.
//!
//! These types keep track of the byte order in effect
//! and of the stream position,
//! and are the building blocks of the data set reader and writer.

pub mod decode;
pub mod encode;

pub use self::decode::StatefulDecoder;
pub use self::encode::StatefulEncoder;

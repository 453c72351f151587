#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! DICOM encoding and decoding primitives.
//!
//! This crate provides the byte-order aware readers and writers
//! used to decode and encode DICOM data elements,
//! the text codec for textual values,
//! and the concept of [transfer syntax specifier].
//! Pixel data codecs which are not implemented natively
//! are plugged in through the [`adapters`] module.
//!
//! All APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/index.html

pub mod adapters;
pub mod decode;
pub mod encode;
pub mod text;
pub mod transfer_syntax;

pub use adapters::{CodecProvider, CompressionParams, FrameInfo, NoCodecs};
pub use byteordered;
pub use decode::SwappableReader;
pub use encode::SwappableWriter;
pub use transfer_syntax::{CompressionKind, Endianness, TransferSyntax, TransferSyntaxIndex};

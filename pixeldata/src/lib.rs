#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate holds the pixel data layer of the dcmcodec DICOM codec.
//!
//! - [`encapsulation`] converts between flat native pixel data,
//!   individual frames,
//!   and the encapsulated container of compressed pixel data
//!   (basic offset table followed by fragments).
//! - [`rle`] is the native RLE Lossless decoder.
//! - [`color`] holds color space conversions applied after decoding.
//!
//! Other compression kinds are handled by a
//! [`CodecProvider`](dcmcodec_encoding::CodecProvider).

pub mod color;
pub mod encapsulation;
pub mod rle;

pub use encapsulation::{encapsulate, frame_fragments, native_frames, offset_table, FrameFragments};

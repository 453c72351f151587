//! Core module for plugging in pixel data codecs.
//!
//! JPEG, JPEG 2000 and JPEG-LS are not implemented here.
//! Instead, a [`CodecProvider`] is handed compressed or native frames
//! together with a description of their geometry,
//! and returns an owned buffer with the converted frame.
//! The provider is chosen when the transfer syntax registry is built;
//! [`NoCodecs`] is used when none is given.

use crate::transfer_syntax::CompressionKind;
use snafu::Snafu;
use std::fmt;

/// The possible error conditions when decoding (reading) pixel data.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
///
/// When no suitable variant is available,
/// the [`Custom`](DecodeError::Custom) variant may be used.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum DecodeError {
    /// A custom error occurred when decoding,
    /// reported as a dynamic error value with a message.
    ///
    /// The [`whatever!`](snafu::whatever) macro can be used
    /// to easily create an error of this kind.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The provider has no decoder for this kind of compression.
    #[snafu(display("No decoder available for {}", kind))]
    Unsupported { kind: CompressionKind },

    /// The decoder ran but produced no data.
    NoData,
}

/// The possible error conditions when encoding (writing) pixel data.
///
/// Users of this type are free to handle errors based on their variant,
/// but should not make decisions based on the display message,
/// since that is not considered part of the API
/// and may change on any new release.
#[derive(Debug, Snafu)]
#[non_exhaustive]
#[snafu(visibility(pub), module)]
pub enum EncodeError {
    /// A custom error when encoding fails.
    /// Read the `message` and the underlying `source`
    /// for more details.
    #[snafu(whatever, display("{}", message))]
    Custom {
        /// The error message.
        message: String,
        /// The underlying error cause, if any.
        #[snafu(source(from(Box<dyn std::error::Error + Send + Sync + 'static>, Some)))]
        source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
    },

    /// The provider has no encoder for this kind of compression.
    #[snafu(display("No encoder available for {}", kind))]
    Unsupported { kind: CompressionKind },

    /// The encoder ran but produced no data.
    NoData,
}

/// The result of decoding (reading) pixel data
pub type DecodeResult<T, E = DecodeError> = Result<T, E>;

/// The result of encoding (writing) pixel data
pub type EncodeResult<T, E = EncodeError> = Result<T, E>;

/// The geometry of one image frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// _Bits Allocated_ per sample
    pub bits_allocated: u16,
    /// _Columns_
    pub columns: u16,
    /// _Rows_
    pub rows: u16,
    /// _Samples per Pixel_
    pub samples_per_pixel: u16,
    /// _Planar Configuration_: 0 for interleaved samples, 1 for planes
    pub planar_configuration: u16,
    /// Whether the photometric interpretation is a YBR full variant,
    /// in which case decoders should emit RGB
    pub ybr: bool,
}

impl FrameInfo {
    /// The number of bytes used by each sample.
    pub fn bytes_per_sample(&self) -> usize {
        (self.bits_allocated as usize + 7) / 8
    }

    /// The byte length of one native frame.
    pub fn frame_size(&self) -> usize {
        self.rows as usize
            * self.columns as usize
            * self.samples_per_pixel as usize
            * self.bytes_per_sample()
    }
}

/// Encoder settings derived from the target transfer syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompressionParams {
    /// No settings apply.
    None,
    /// JPEG process settings.
    Jpeg {
        /// 0 for baseline, 1 for extended, 4 for lossless
        mode: u8,
        /// lossless predictor selection value
        predictor: u8,
        /// lossless point transform
        point_transform: u8,
    },
    /// JPEG-LS settings.
    JpegLs {
        /// maximum absolute sample error, 0 for lossless
        allowed_error: u8,
    },
}

/// A source of pixel data codecs for the compression kinds
/// not implemented natively.
///
/// Buffers are borrowed for the duration of the call,
/// and the output is always a freshly owned buffer.
pub trait CodecProvider: fmt::Debug + Send + Sync {
    /// Whether frames of this kind can be decoded.
    fn supports_decode(&self, kind: CompressionKind) -> bool;

    /// Whether frames can be encoded into this kind.
    fn supports_encode(&self, kind: CompressionKind) -> bool;

    /// Decode one compressed frame into native pixel data.
    fn decode(&self, kind: CompressionKind, data: &[u8], info: &FrameInfo)
        -> DecodeResult<Vec<u8>>;

    /// Encode one native frame.
    fn encode(
        &self,
        kind: CompressionKind,
        data: &[u8],
        info: &FrameInfo,
        params: &CompressionParams,
    ) -> EncodeResult<Vec<u8>>;
}

/// A codec provider which supports nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoCodecs;

impl CodecProvider for NoCodecs {
    fn supports_decode(&self, _: CompressionKind) -> bool {
        false
    }

    fn supports_encode(&self, _: CompressionKind) -> bool {
        false
    }

    fn decode(&self, kind: CompressionKind, _: &[u8], _: &FrameInfo) -> DecodeResult<Vec<u8>> {
        decode_error::UnsupportedSnafu { kind }.fail()
    }

    fn encode(
        &self,
        kind: CompressionKind,
        _: &[u8],
        _: &FrameInfo,
        _: &CompressionParams,
    ) -> EncodeResult<Vec<u8>> {
        encode_error::UnsupportedSnafu { kind }.fail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_accounts_for_samples_and_bytes() {
        let info = FrameInfo {
            bits_allocated: 16,
            columns: 4,
            rows: 3,
            samples_per_pixel: 3,
            planar_configuration: 0,
            ybr: false,
        };
        assert_eq!(info.bytes_per_sample(), 2);
        assert_eq!(info.frame_size(), 72);
    }

    #[test]
    fn no_codecs_rejects_everything() {
        let info = FrameInfo {
            bits_allocated: 8,
            columns: 1,
            rows: 1,
            samples_per_pixel: 1,
            planar_configuration: 0,
            ybr: false,
        };
        assert!(!NoCodecs.supports_decode(CompressionKind::JpegLossless));
        assert!(matches!(
            NoCodecs.decode(CompressionKind::JpegLossless, &[0], &info),
            Err(DecodeError::Unsupported {
                kind: CompressionKind::JpegLossless
            })
        ));
    }
}

//! Module containing the DICOM Transfer Syntax data structure and related methods.
//!
//! A [`TransferSyntax`] describes how a data set is laid out on the wire:
//! whether value representations are explicit,
//! which byte order is used,
//! and which kind of compression, if any, applies to the pixel data.
//!
//! This crate does not host specific transfer syntaxes. Instead, they are
//! collected in a registry implementing [`TransferSyntaxIndex`].
//! For more information, please see the `dcmcodec-transfer-syntax-registry` crate.

use std::borrow::Cow;
use std::fmt;

pub use byteordered::Endianness;

/// The kind of pixel data compression declared by a transfer syntax.
///
/// Every transfer syntax resolves to exactly one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CompressionKind {
    /// Native (uncompressed) pixel data.
    None,
    /// Lossless JPEG (processes 14, 15, 28 and 29).
    JpegLossless,
    /// Lossy JPEG (baseline, extended, progressive and hierarchical).
    JpegLossy,
    /// JPEG 2000, lossless or lossy.
    Jpeg2000,
    /// Lossless JPEG-LS.
    JpegLsLossless,
    /// Near-lossless JPEG-LS.
    JpegLsLossy,
    /// JPIP referenced pixel data.
    Jpip,
    /// MPEG-2 video.
    Mpeg2,
    /// RLE Lossless.
    Rle,
}

impl CompressionKind {
    /// Whether pixel data of this kind is encapsulated.
    pub fn is_compressed(self) -> bool {
        self != CompressionKind::None
    }
}

impl fmt::Display for CompressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CompressionKind::None => "uncompressed",
            CompressionKind::JpegLossless => "JPEG lossless",
            CompressionKind::JpegLossy => "JPEG lossy",
            CompressionKind::Jpeg2000 => "JPEG 2000",
            CompressionKind::JpegLsLossless => "JPEG-LS lossless",
            CompressionKind::JpegLsLossy => "JPEG-LS lossy",
            CompressionKind::Jpip => "JPIP",
            CompressionKind::Mpeg2 => "MPEG-2",
            CompressionKind::Rle => "RLE lossless",
        };
        f.write_str(name)
    }
}

/// A DICOM transfer syntax specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The unique identifier of the transfer syntax.
    uid: Cow<'static, str>,
    /// The name of the transfer syntax.
    name: Cow<'static, str>,
    /// The byte order of data.
    byte_order: Endianness,
    /// Whether the transfer syntax mandates an explicit value representation,
    /// or the VR is implicit.
    explicit_vr: bool,
    /// The compression applied to the pixel data.
    compression: CompressionKind,
}

/// Trait for containers of transfer syntax specifiers.
///
/// Usually, only one implementation
/// of this trait is used for the entire program.
pub trait TransferSyntaxIndex {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Implementations of this method should be robust to the possible
    /// presence of trailing padding (`\0` or space) in `uid`.
    fn get(&self, uid: &str) -> Option<&TransferSyntax>;
}

impl<T: ?Sized> TransferSyntaxIndex for &T
where
    T: TransferSyntaxIndex,
{
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        (**self).get(uid)
    }
}

impl TransferSyntax {
    /// Create a new transfer syntax descriptor.
    pub const fn new(
        uid: &'static str,
        name: &'static str,
        byte_order: Endianness,
        explicit_vr: bool,
        compression: CompressionKind,
    ) -> Self {
        TransferSyntax {
            uid: Cow::Borrowed(uid),
            name: Cow::Borrowed(name),
            byte_order,
            explicit_vr,
            compression,
        }
    }

    /// Create a new descriptor
    /// for an explicit VR little endian transfer syntax.
    pub const fn new_ele(uid: &'static str, name: &'static str, compression: CompressionKind) -> Self {
        TransferSyntax::new(uid, name, Endianness::Little, true, compression)
    }

    /// Create the descriptor of a transfer syntax not known to the program.
    ///
    /// It is treated as implicit VR little endian with native pixel data,
    /// the default encoding of DICOM.
    pub fn unknown(uid: &str) -> Self {
        TransferSyntax {
            uid: Cow::Owned(uid.to_string()),
            name: Cow::Owned(format!("Unknown: {}", uid)),
            byte_order: Endianness::Little,
            explicit_vr: false,
            compression: CompressionKind::None,
        }
    }

    /// Obtain this transfer syntax' unique identifier.
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Obtain the name of this transfer syntax.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Obtain this transfer syntax' expected endianness.
    pub fn endianness(&self) -> Endianness {
        self.byte_order
    }

    /// Whether data is encoded in big endian,
    /// in which case readers and writers swap bytes
    /// outside of the file meta group.
    pub fn is_big_endian(&self) -> bool {
        self.byte_order == Endianness::Big
    }

    /// Check whether this transfer syntax uses explicit VR.
    pub fn explicit_vr(&self) -> bool {
        self.explicit_vr
    }

    /// The kind of pixel data compression.
    pub fn compression(&self) -> CompressionKind {
        self.compression
    }

    /// Whether pixel data in this transfer syntax is encapsulated.
    pub fn is_compressed(&self) -> bool {
        self.compression.is_compressed()
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_syntax_is_implicit_le() {
        let ts = TransferSyntax::unknown("1.2.3.4");
        assert_eq!(ts.uid(), "1.2.3.4");
        assert_eq!(ts.name(), "Unknown: 1.2.3.4");
        assert!(!ts.explicit_vr());
        assert!(!ts.is_big_endian());
        assert_eq!(ts.compression(), CompressionKind::None);
        assert!(!ts.is_compressed());
    }

    #[test]
    fn const_descriptor() {
        const RLE: TransferSyntax = TransferSyntax::new(
            "1.2.840.10008.1.2.5",
            "RLE Lossless",
            Endianness::Little,
            true,
            CompressionKind::Rle,
        );
        assert!(RLE.is_compressed());
        assert_eq!(RLE.to_string(), "RLE Lossless (1.2.840.10008.1.2.5)");
    }
}

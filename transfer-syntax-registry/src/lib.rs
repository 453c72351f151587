#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    unused_qualifications,
    unused_import_braces
)]
//! This crate contains the DICOM transfer syntax registry.
//!
//! The transfer syntax registry maps a DICOM UID of a transfer syntax into the
//! respective transfer syntax specifier,
//! and tells which pixel data compression kinds
//! can be decoded and encoded by the program.
//!
//! A registry is immutable once built.
//! It is meant to be constructed once, at program start,
//! and shared by reference counting:
//!
//! ```
//! # use std::sync::Arc;
//! use dcmcodec_transfer_syntax_registry::TransferSyntaxRegistry;
//!
//! let registry = Arc::new(TransferSyntaxRegistry::new());
//! let ts = registry.lookup("1.2.840.10008.1.2.1\0");
//! assert_eq!(ts.name(), "Explicit VR Little Endian");
//! ```
//!
//! RLE Lossless decoding is provided by the library.
//! Other compression kinds are delegated to a [`CodecProvider`],
//! which can be set with [`TransferSyntaxRegistry::with_codecs`].

pub mod entries;

use dcmcodec_encoding::adapters::{CodecProvider, NoCodecs};
use dcmcodec_encoding::transfer_syntax::{CompressionKind, TransferSyntax, TransferSyntaxIndex};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<String, TransferSyntax>,
    codecs: Arc<dyn CodecProvider>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> = self
            .m
            .iter()
            .map(|(uid, ts)| (uid.as_str(), ts.name()))
            .collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .field("codecs", &self.codecs)
            .finish()
    }
}

impl Default for TransferSyntaxRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferSyntaxRegistry {
    /// Build the registry of built-in transfer syntaxes,
    /// without any external pixel data codecs.
    pub fn new() -> Self {
        Self::with_codecs(Arc::new(NoCodecs))
    }

    /// Build the registry of built-in transfer syntaxes,
    /// delegating non-native compression kinds to the given provider.
    pub fn with_codecs(codecs: Arc<dyn CodecProvider>) -> Self {
        let m = entries::ALL
            .iter()
            .map(|ts| (ts.uid().to_string(), ts.clone()))
            .collect();
        TransferSyntaxRegistry { m, codecs }
    }

    /// Obtain a transfer syntax by its UID.
    ///
    /// Trailing null characters and spaces are ignored.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let uid = uid.as_ref().trim_end_matches(|c| c == '\0' || c == ' ');
        self.m.get(uid)
    }

    /// Obtain a transfer syntax by its UID,
    /// or a descriptor of an unknown transfer syntax
    /// with the default encoding (implicit VR little endian)
    /// if it is not registered.
    pub fn lookup<U: AsRef<str>>(&self, uid: U) -> TransferSyntax {
        match self.get(uid.as_ref()) {
            Some(ts) => ts.clone(),
            None => {
                let uid = uid.as_ref().trim_end_matches(|c| c == '\0' || c == ' ');
                debug!(uid, "Unknown transfer syntax");
                TransferSyntax::unknown(uid)
            }
        }
    }

    /// Iterate over all registered transfer syntaxes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &TransferSyntax> {
        self.m.values()
    }

    /// The provider of external pixel data codecs.
    pub fn codecs(&self) -> &dyn CodecProvider {
        &*self.codecs
    }

    /// Whether pixel data of this compression kind can be decompressed.
    pub fn supports_decompression(&self, kind: CompressionKind) -> bool {
        match kind {
            CompressionKind::None | CompressionKind::Rle => true,
            CompressionKind::Jpip | CompressionKind::Mpeg2 => false,
            kind => self.codecs.supports_decode(kind),
        }
    }

    /// Whether native pixel data can be compressed into this kind.
    ///
    /// Always false for RLE Lossless, which is only ever decoded.
    pub fn supports_compression(&self, kind: CompressionKind) -> bool {
        match kind {
            CompressionKind::None => true,
            CompressionKind::Rle | CompressionKind::Jpip | CompressionKind::Mpeg2 => false,
            kind => self.codecs.supports_encode(kind),
        }
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        TransferSyntaxRegistry::get(self, uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransferSyntaxRegistry>();
    }

    #[test]
    fn every_entry_is_indexed() {
        let registry = TransferSyntaxRegistry::new();
        assert_eq!(registry.iter().count(), entries::ALL.len());
        for ts in entries::ALL {
            assert_eq!(registry.get(ts.uid()), Some(ts));
        }
    }
}

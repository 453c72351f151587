//! Lookups and capability queries on the default registry.

use dcmcodec_encoding::adapters::{
    CodecProvider, CompressionParams, DecodeResult, EncodeResult, FrameInfo,
};
use dcmcodec_encoding::{CompressionKind, Endianness};
use dcmcodec_transfer_syntax_registry::{entries, TransferSyntaxRegistry};
use rstest::rstest;
use std::sync::Arc;

#[rstest]
#[case("1.2.840.10008.1.2", false, Endianness::Little, CompressionKind::None)]
#[case("1.2.840.10008.1.2.1", true, Endianness::Little, CompressionKind::None)]
#[case("1.2.840.10008.1.2.2", true, Endianness::Big, CompressionKind::None)]
#[case("1.2.840.10008.1.2.4.50", true, Endianness::Little, CompressionKind::JpegLossy)]
#[case("1.2.840.10008.1.2.4.57", true, Endianness::Little, CompressionKind::JpegLossless)]
#[case("1.2.840.10008.1.2.4.70", true, Endianness::Little, CompressionKind::JpegLossless)]
#[case("1.2.840.10008.1.2.4.81", true, Endianness::Little, CompressionKind::JpegLsLossy)]
#[case("1.2.840.10008.1.2.4.92", true, Endianness::Little, CompressionKind::Jpeg2000)]
#[case("1.2.840.10008.1.2.4.95", true, Endianness::Little, CompressionKind::Jpip)]
#[case("1.2.840.10008.1.2.4.101", true, Endianness::Little, CompressionKind::Mpeg2)]
#[case("1.2.840.10008.1.2.5", true, Endianness::Little, CompressionKind::Rle)]
fn built_in_syntaxes(
    #[case] uid: &str,
    #[case] explicit_vr: bool,
    #[case] endianness: Endianness,
    #[case] compression: CompressionKind,
) {
    let registry = TransferSyntaxRegistry::new();
    let ts = registry.get(uid).expect("transfer syntax should be registered");
    assert_eq!(ts.uid(), uid);
    assert_eq!(ts.explicit_vr(), explicit_vr);
    assert_eq!(ts.endianness(), endianness);
    assert_eq!(ts.compression(), compression);
}

#[test]
fn padding_is_ignored() {
    let registry = TransferSyntaxRegistry::new();
    assert_eq!(
        registry.get("1.2.840.10008.1.2.1\0"),
        Some(&entries::EXPLICIT_VR_LITTLE_ENDIAN)
    );
    assert_eq!(
        registry.get("1.2.840.10008.1.2.5 "),
        Some(&entries::RLE_LOSSLESS)
    );
}

#[test]
fn unknown_uid_falls_back_to_implicit_le() {
    let registry = TransferSyntaxRegistry::new();
    assert!(registry.get("1.2.3.4.5").is_none());
    let ts = registry.lookup("1.2.3.4.5\0");
    assert_eq!(ts.uid(), "1.2.3.4.5");
    assert_eq!(ts.name(), "Unknown: 1.2.3.4.5");
    assert!(!ts.explicit_vr());
    assert_eq!(ts.compression(), CompressionKind::None);
}

#[test]
fn native_capabilities() {
    let registry = TransferSyntaxRegistry::new();
    assert!(registry.supports_decompression(CompressionKind::None));
    assert!(registry.supports_decompression(CompressionKind::Rle));
    assert!(!registry.supports_decompression(CompressionKind::JpegLossless));
    assert!(registry.supports_compression(CompressionKind::None));
    assert!(!registry.supports_compression(CompressionKind::Rle));
    assert!(!registry.supports_compression(CompressionKind::JpegLossy));
}

/// Claims every kind, never called.
#[derive(Debug)]
struct EverythingProvider;

impl CodecProvider for EverythingProvider {
    fn supports_decode(&self, _: CompressionKind) -> bool {
        true
    }

    fn supports_encode(&self, _: CompressionKind) -> bool {
        true
    }

    fn decode(&self, _: CompressionKind, data: &[u8], _: &FrameInfo) -> DecodeResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn encode(
        &self,
        _: CompressionKind,
        data: &[u8],
        _: &FrameInfo,
        _: &CompressionParams,
    ) -> EncodeResult<Vec<u8>> {
        Ok(data.to_vec())
    }
}

#[test]
fn provider_capabilities_do_not_override_native_rules() {
    let registry = TransferSyntaxRegistry::with_codecs(Arc::new(EverythingProvider));
    assert!(registry.supports_decompression(CompressionKind::Jpeg2000));
    assert!(registry.supports_compression(CompressionKind::JpegLsLossless));
    // RLE is decode only, JPIP and MPEG-2 are never transcoded
    assert!(!registry.supports_compression(CompressionKind::Rle));
    assert!(!registry.supports_decompression(CompressionKind::Jpip));
    assert!(!registry.supports_compression(CompressionKind::Mpeg2));
}

//! A list of compiled transfer syntax specifiers.
//!
//! The constants exported here refer to the transfer syntaxes
//! known to the default registry.
//! Native pixel data and RLE Lossless decoding are handled by the library itself;
//! the remaining compression kinds depend on the registry's codec provider.

use byteordered::Endianness;
use dcmcodec_dictionary_std::uids;
use dcmcodec_encoding::transfer_syntax::{CompressionKind::*, TransferSyntax as Ts};

// -- the base transfer syntaxes, native pixel data --

/// Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    uids::IMPLICIT_VR_LITTLE_ENDIAN,
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    None,
);

/// Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    uids::EXPLICIT_VR_LITTLE_ENDIAN,
    "Explicit VR Little Endian",
    None,
);

/// Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    uids::EXPLICIT_VR_BIG_ENDIAN,
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    None,
);

/// Deflated Explicit VR Little Endian
///
/// Listed for identification only:
/// the deflated stream is not inflated by the parser.
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new_ele(
    uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    "Deflated Explicit VR Little Endian",
    None,
);

/// RFC 2557 MIME encapsulation (retired)
pub const RFC2557_MIME_ENCAPSULATION: Ts = Ts::new_ele(
    uids::RFC2557MIME_ENCAPSULATION,
    "RFC 2557 MIME encapsulation",
    None,
);

/// XML Encoding (retired)
pub const XML_ENCODING: Ts = Ts::new_ele(uids::XML_ENCODING, "XML Encoding", None);

// -- JPEG --

/// JPEG Baseline (Process 1)
pub const JPEG_BASELINE: Ts = Ts::new_ele(
    uids::JPEG_BASELINE8_BIT,
    "JPEG Baseline (Process 1)",
    JpegLossy,
);

/// JPEG Extended (Process 2 & 4)
pub const JPEG_EXTENDED: Ts = Ts::new_ele(
    uids::JPEG_EXTENDED12_BIT,
    "JPEG Extended (Process 2 & 4)",
    JpegLossy,
);

/// JPEG Extended (Process 3 & 5)
pub const JPEG_EXTENDED_35: Ts = Ts::new_ele(
    uids::JPEG_EXTENDED35,
    "JPEG Extended (Process 3 & 5)",
    JpegLossy,
);

/// JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)
pub const JPEG_SPECTRAL_SELECTION_68: Ts = Ts::new_ele(
    uids::JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL68,
    "JPEG Spectral Selection, Non-Hierarchical (Process 6 & 8)",
    JpegLossy,
);

/// JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9)
pub const JPEG_SPECTRAL_SELECTION_79: Ts = Ts::new_ele(
    uids::JPEG_SPECTRAL_SELECTION_NON_HIERARCHICAL79,
    "JPEG Spectral Selection, Non-Hierarchical (Process 7 & 9)",
    JpegLossy,
);

/// JPEG Full Progression, Non-Hierarchical (Process 10 & 12)
pub const JPEG_FULL_PROGRESSION_1012: Ts = Ts::new_ele(
    uids::JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1012,
    "JPEG Full Progression, Non-Hierarchical (Process 10 & 12)",
    JpegLossy,
);

/// JPEG Full Progression, Non-Hierarchical (Process 11 & 13)
pub const JPEG_FULL_PROGRESSION_1113: Ts = Ts::new_ele(
    uids::JPEG_FULL_PROGRESSION_NON_HIERARCHICAL1113,
    "JPEG Full Progression, Non-Hierarchical (Process 11 & 13)",
    JpegLossy,
);

/// JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = Ts::new_ele(
    uids::JPEG_LOSSLESS,
    "JPEG Lossless, Non-Hierarchical (Process 14)",
    JpegLossless,
);

/// JPEG Lossless, Non-Hierarchical (Process 15)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_15: Ts = Ts::new_ele(
    uids::JPEG_LOSSLESS_NON_HIERARCHICAL15,
    "JPEG Lossless, Non-Hierarchical (Process 15)",
    JpegLossless,
);

/// JPEG Extended, Hierarchical (Process 16 & 18)
pub const JPEG_EXTENDED_HIERARCHICAL_1618: Ts = Ts::new_ele(
    uids::JPEG_EXTENDED_HIERARCHICAL1618,
    "JPEG Extended, Hierarchical (Process 16 & 18)",
    JpegLossy,
);

/// JPEG Extended, Hierarchical (Process 17 & 19)
pub const JPEG_EXTENDED_HIERARCHICAL_1719: Ts = Ts::new_ele(
    uids::JPEG_EXTENDED_HIERARCHICAL1719,
    "JPEG Extended, Hierarchical (Process 17 & 19)",
    JpegLossy,
);

/// JPEG Spectral Selection, Hierarchical (Process 20 & 22)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2022: Ts = Ts::new_ele(
    uids::JPEG_SPECTRAL_SELECTION_HIERARCHICAL2022,
    "JPEG Spectral Selection, Hierarchical (Process 20 & 22)",
    JpegLossy,
);

/// JPEG Spectral Selection, Hierarchical (Process 21 & 23)
pub const JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2123: Ts = Ts::new_ele(
    uids::JPEG_SPECTRAL_SELECTION_HIERARCHICAL2123,
    "JPEG Spectral Selection, Hierarchical (Process 21 & 23)",
    JpegLossy,
);

/// JPEG Full Progression, Hierarchical (Process 24 & 26)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_2426: Ts = Ts::new_ele(
    uids::JPEG_FULL_PROGRESSION_HIERARCHICAL2426,
    "JPEG Full Progression, Hierarchical (Process 24 & 26)",
    JpegLossy,
);

/// JPEG Full Progression, Hierarchical (Process 25 & 27)
pub const JPEG_FULL_PROGRESSION_HIERARCHICAL_2527: Ts = Ts::new_ele(
    uids::JPEG_FULL_PROGRESSION_HIERARCHICAL2527,
    "JPEG Full Progression, Hierarchical (Process 25 & 27)",
    JpegLossy,
);

/// JPEG Lossless, Hierarchical (Process 28)
pub const JPEG_LOSSLESS_HIERARCHICAL_28: Ts = Ts::new_ele(
    uids::JPEG_LOSSLESS_HIERARCHICAL28,
    "JPEG Lossless, Hierarchical (Process 28)",
    JpegLossless,
);

/// JPEG Lossless, Hierarchical (Process 29)
pub const JPEG_LOSSLESS_HIERARCHICAL_29: Ts = Ts::new_ele(
    uids::JPEG_LOSSLESS_HIERARCHICAL29,
    "JPEG Lossless, Hierarchical (Process 29)",
    JpegLossless,
);

/// JPEG Lossless, Non-Hierarchical, First-Order Prediction
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = Ts::new_ele(
    uids::JPEG_LOSSLESS_SV1,
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
    JpegLossless,
);

// -- JPEG-LS --

/// JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: Ts = Ts::new_ele(
    uids::JPEGLS_LOSSLESS,
    "JPEG-LS Lossless Image Compression",
    JpegLsLossless,
);

/// JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: Ts = Ts::new_ele(
    uids::JPEGLS_NEAR_LOSSLESS,
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
    JpegLsLossy,
);

// -- JPEG 2000 --

/// JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = Ts::new_ele(
    uids::JPEG2000_LOSSLESS,
    "JPEG 2000 Image Compression (Lossless Only)",
    Jpeg2000,
);

/// JPEG 2000 Image Compression
pub const JPEG_2000_IMAGE_COMPRESSION: Ts = Ts::new_ele(
    uids::JPEG2000,
    "JPEG 2000 Image Compression",
    Jpeg2000,
);

/// JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)
pub const JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = Ts::new_ele(
    uids::JPEG2000MC_LOSSLESS,
    "JPEG 2000 Part 2 Multi-component Image Compression (Lossless Only)",
    Jpeg2000,
);

/// JPEG 2000 Part 2 Multi-component Image Compression
pub const JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION: Ts = Ts::new_ele(
    uids::JPEG2000MC,
    "JPEG 2000 Part 2 Multi-component Image Compression",
    Jpeg2000,
);

// -- JPIP and video --

/// JPIP Referenced
pub const JPIP_REFERENCED: Ts = Ts::new_ele(uids::JPIP_REFERENCED, "JPIP Referenced", Jpip);

/// JPIP Referenced Deflate
pub const JPIP_REFERENCED_DEFLATE: Ts = Ts::new_ele(
    uids::JPIP_REFERENCED_DEFLATE,
    "JPIP Referenced Deflate",
    Jpip,
);

/// MPEG2 Main Profile / Main Level
pub const MPEG2_MAIN_PROFILE_MAIN_LEVEL: Ts = Ts::new_ele(
    uids::MPEG2MPML,
    "MPEG2 Main Profile / Main Level",
    Mpeg2,
);

/// MPEG2 Main Profile / High Level
pub const MPEG2_MAIN_PROFILE_HIGH_LEVEL: Ts = Ts::new_ele(
    uids::MPEG2MPHL,
    "MPEG2 Main Profile / High Level",
    Mpeg2,
);

// -- RLE --

/// RLE Lossless
pub const RLE_LOSSLESS: Ts = Ts::new_ele(uids::RLE_LOSSLESS, "RLE Lossless", Rle);

/// All built-in transfer syntaxes.
pub(crate) const ALL: &[Ts] = &[
    IMPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_LITTLE_ENDIAN,
    EXPLICIT_VR_BIG_ENDIAN,
    DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN,
    RFC2557_MIME_ENCAPSULATION,
    XML_ENCODING,
    JPEG_BASELINE,
    JPEG_EXTENDED,
    JPEG_EXTENDED_35,
    JPEG_SPECTRAL_SELECTION_68,
    JPEG_SPECTRAL_SELECTION_79,
    JPEG_FULL_PROGRESSION_1012,
    JPEG_FULL_PROGRESSION_1113,
    JPEG_LOSSLESS_NON_HIERARCHICAL,
    JPEG_LOSSLESS_NON_HIERARCHICAL_15,
    JPEG_EXTENDED_HIERARCHICAL_1618,
    JPEG_EXTENDED_HIERARCHICAL_1719,
    JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2022,
    JPEG_SPECTRAL_SELECTION_HIERARCHICAL_2123,
    JPEG_FULL_PROGRESSION_HIERARCHICAL_2426,
    JPEG_FULL_PROGRESSION_HIERARCHICAL_2527,
    JPEG_LOSSLESS_HIERARCHICAL_28,
    JPEG_LOSSLESS_HIERARCHICAL_29,
    JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION,
    JPEG_LS_LOSSLESS_IMAGE_COMPRESSION,
    JPEG_LS_LOSSY_IMAGE_COMPRESSION,
    JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY,
    JPEG_2000_IMAGE_COMPRESSION,
    JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION_LOSSLESS_ONLY,
    JPEG_2000_PART2_MULTI_COMPONENT_IMAGE_COMPRESSION,
    JPIP_REFERENCED,
    JPIP_REFERENCED_DEFLATE,
    MPEG2_MAIN_PROFILE_MAIN_LEVEL,
    MPEG2_MAIN_PROFILE_HIGH_LEVEL,
    RLE_LOSSLESS,
];

//! Conversion of data sets between transfer syntaxes,
//! using a stand-in codec which wraps each frame in a marker.
use dcmcodec_core::value::{SequenceItem, Value};
use dcmcodec_core::{DataElement, PrimitiveValue, VR};
use dcmcodec_dictionary_std::tags;
use dcmcodec_encoding::adapters::{decode_error, encode_error, DecodeResult, EncodeResult};
use dcmcodec_encoding::{CodecProvider, CompressionKind, CompressionParams, FrameInfo};
use dcmcodec_object::transcode::ErrorKind;
use dcmcodec_object::{DataSet, OpenFileOptions, ParseOptions};
use dcmcodec_pixeldata::{encapsulate, offset_table};
use dcmcodec_transfer_syntax_registry::{entries, TransferSyntaxRegistry};
use snafu::whatever;
use std::io::Cursor;
use std::sync::Arc;

const MARK: [u8; 2] = [0xAB, 0xCD];

#[derive(Debug)]
struct MarkerCodec;

impl MarkerCodec {
    fn handles(kind: CompressionKind) -> bool {
        matches!(
            kind,
            CompressionKind::JpegLossless | CompressionKind::JpegLsLossless
        )
    }
}

impl CodecProvider for MarkerCodec {
    fn supports_decode(&self, kind: CompressionKind) -> bool {
        Self::handles(kind)
    }

    fn supports_encode(&self, kind: CompressionKind) -> bool {
        Self::handles(kind)
    }

    fn decode(&self, kind: CompressionKind, data: &[u8], info: &FrameInfo) -> DecodeResult<Vec<u8>> {
        if !Self::handles(kind) {
            return decode_error::UnsupportedSnafu { kind }.fail();
        }
        if !data.starts_with(&MARK) {
            whatever!("frame does not start with the marker");
        }
        let mut out = data[MARK.len()..].to_vec();
        out.resize(info.frame_size(), 0);
        Ok(out)
    }

    fn encode(
        &self,
        kind: CompressionKind,
        data: &[u8],
        _info: &FrameInfo,
        _params: &CompressionParams,
    ) -> EncodeResult<Vec<u8>> {
        if !Self::handles(kind) {
            return encode_error::UnsupportedSnafu { kind }.fail();
        }
        let mut out = MARK.to_vec();
        out.extend_from_slice(data);
        Ok(out)
    }
}

/// Decodes like [`MarkerCodec`] but refuses to produce JPEG-LS.
#[derive(Debug)]
struct NoJpegLsEncoder;

impl CodecProvider for NoJpegLsEncoder {
    fn supports_decode(&self, kind: CompressionKind) -> bool {
        MarkerCodec::handles(kind)
    }

    fn supports_encode(&self, kind: CompressionKind) -> bool {
        MarkerCodec::handles(kind)
    }

    fn decode(&self, kind: CompressionKind, data: &[u8], info: &FrameInfo) -> DecodeResult<Vec<u8>> {
        MarkerCodec.decode(kind, data, info)
    }

    fn encode(
        &self,
        kind: CompressionKind,
        data: &[u8],
        info: &FrameInfo,
        params: &CompressionParams,
    ) -> EncodeResult<Vec<u8>> {
        if kind == CompressionKind::JpegLsLossless {
            whatever!("encoder ran out of memory");
        }
        MarkerCodec.encode(kind, data, info, params)
    }
}

/// An RLE Lossless frame with the given segments.
fn rle_frame(segments: &[&[u8]]) -> Vec<u8> {
    let mut data = vec![0; 64];
    data[0..4].copy_from_slice(&(segments.len() as u32).to_le_bytes());
    for (i, segment) in segments.iter().enumerate() {
        let offset = data.len() as u32;
        data[4 + 4 * i..8 + 4 * i].copy_from_slice(&offset.to_le_bytes());
        data.extend_from_slice(segment);
    }
    data
}

fn registry() -> Arc<TransferSyntaxRegistry> {
    Arc::new(TransferSyntaxRegistry::with_codecs(Arc::new(MarkerCodec)))
}

/// A 2x2 monochrome 8-bit image in explicit VR little endian.
fn image(registry: Arc<TransferSyntaxRegistry>, frames: Option<u32>, pixels: Vec<u8>) -> DataSet {
    let mut obj = DataSet::new_empty_with_registry(registry);
    obj.put(DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7"));
    obj.put(DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.1234"));
    obj.put(DataElement::new(tags::MODALITY, VR::CS, "OT"));
    obj.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)));
    obj.put(DataElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "MONOCHROME2"));
    if let Some(frames) = frames {
        obj.put(DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, frames.to_string()));
    }
    obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(8_u16)));
    obj.put(DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(8_u16)));
    obj.put(DataElement::new(tags::HIGH_BIT, VR::US, PrimitiveValue::from(7_u16)));
    obj.put(DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, PrimitiveValue::from(0_u16)));
    obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, pixels));
    obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
    obj
}

fn pixel_bytes(obj: &DataSet) -> Vec<u8> {
    obj.element(tags::PIXEL_DATA)
        .unwrap()
        .to_bytes()
        .unwrap()
        .into_owned()
}

fn photometric(obj: &DataSet) -> String {
    obj.element(tags::PHOTOMETRIC_INTERPRETATION)
        .unwrap()
        .to_str()
        .unwrap()
        .trim()
        .to_string()
}

#[test]
fn three_frames_compress_into_four_items() {
    let pixels: Vec<u8> = (0..12).collect();
    let mut obj = image(registry(), Some(3), pixels.clone());
    let target = entries::JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION;

    assert!(obj.can_change_transfer_syntax(&target));
    obj.change_transfer_syntax(&target).unwrap();
    assert_eq!(obj.transfer_syntax(), target);

    let items = obj.element(tags::PIXEL_DATA).unwrap().items().unwrap().to_vec();
    assert_eq!(items.len(), 4);
    assert_eq!(offset_table(&items).unwrap(), vec![0, 6, 12]);
    assert_eq!(items[1].fragment(), Some(&[0xAB, 0xCD, 0, 1, 2, 3][..]));
    assert_eq!(items[3].fragment(), Some(&[0xAB, 0xCD, 8, 9, 10, 11][..]));
    assert_eq!(photometric(&obj), "MONOCHROME2");

    // lossless codecs bring back the original pixels
    obj.change_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN).unwrap();
    assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(pixel_bytes(&obj), pixels);

    // and compressing again gives the same fragments
    obj.change_transfer_syntax(&target).unwrap();
    let again = obj.element(tags::PIXEL_DATA).unwrap().items().unwrap().to_vec();
    assert_eq!(again, items);
}

#[test]
fn compressed_file_round_trip() {
    let pixels: Vec<u8> = (10..18).collect();
    let mut obj = image(registry(), Some(2), pixels.clone());
    obj.change_transfer_syntax(&entries::JPEG_LS_LOSSLESS_IMAGE_COMPRESSION)
        .unwrap();

    let mut file = Vec::new();
    obj.write_part10(&mut file).unwrap();

    let mut back = OpenFileOptions::new()
        .registry(registry())
        .from_reader(Cursor::new(&file))
        .unwrap();
    assert_eq!(
        back.transfer_syntax(),
        entries::JPEG_LS_LOSSLESS_IMAGE_COMPRESSION
    );
    let items = back.element(tags::PIXEL_DATA).unwrap().items().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(offset_table(items).unwrap(), vec![0, 6]);

    back.uncompress().unwrap();
    assert_eq!(back.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(pixel_bytes(&back), pixels);

    // without codecs, the same file can be read but not decoded
    let mut plain = dcmcodec_object::from_reader(Cursor::new(&file)).unwrap();
    assert!(!plain.can_change_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN));
    let err = plain.uncompress().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedCompression);
}

#[test]
fn write_stream_compresses_to_target() {
    let mut obj = image(registry(), Some(1), vec![1, 2, 3, 4]);
    let target = entries::JPEG_LOSSLESS_NON_HIERARCHICAL;
    let mut out = Vec::new();
    obj.write_stream(&mut out, &target, true).unwrap();
    assert_eq!(obj.transfer_syntax(), target);

    let back = DataSet::parse_with_registry(
        Cursor::new(&out),
        &target,
        ParseOptions::default(),
        registry(),
    )
    .unwrap();
    let items = back.element(tags::PIXEL_DATA).unwrap().items().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].fragment(), Some(&[0xAB, 0xCD, 1, 2, 3, 4][..]));
}

#[test]
fn rle_is_decoded_but_never_produced() {
    let pixels = vec![1, 2, 3, 4];
    let mut obj = image(registry(), Some(1), pixels.clone());
    let before = obj.clone();

    assert!(!obj.can_change_transfer_syntax(&entries::RLE_LOSSLESS));
    let err = obj
        .change_transfer_syntax(&entries::RLE_LOSSLESS)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedCompression);
    assert_eq!(obj, before);

    // RLE needs no external codec
    let mut obj = image(
        dcmcodec_object::default_registry(),
        Some(1),
        Vec::new(),
    );
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        encapsulate(vec![rle_frame(&[&[0x03, 1, 2, 3, 4]])]),
    ));
    obj.set_transfer_syntax(&entries::RLE_LOSSLESS);
    obj.change_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();
    assert_eq!(pixel_bytes(&obj), pixels);
}

#[test]
fn fragments_without_frame_count_form_one_frame() {
    let mut obj = image(registry(), None, Vec::new());
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        Value::from(vec![
            SequenceItem::Fragment(Vec::new()),
            SequenceItem::Fragment(vec![0xAB, 0xCD, 5, 6]),
            SequenceItem::Fragment(vec![7, 8]),
        ]),
    ));
    obj.set_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL);

    obj.uncompress().unwrap();
    assert_eq!(pixel_bytes(&obj), vec![5, 6, 7, 8]);
}

#[test]
fn failed_decoding_leaves_data_set_untouched() {
    let mut obj = image(registry(), Some(1), Vec::new());
    obj.put(DataElement::new(
        tags::PIXEL_DATA,
        VR::OB,
        encapsulate(vec![vec![0, 0, 1, 2, 3, 4]]),
    ));
    obj.set_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL);
    let before = obj.clone();

    let err = obj
        .change_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CodecFailure);
    assert_eq!(obj, before);

    obj.remove_element(tags::ROWS);
    let before = obj.clone();
    let err = obj.uncompress().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredTag);
    assert_eq!(obj, before);
}

#[test]
fn native_items_need_a_frame_count() {
    let items = vec![
        SequenceItem::Fragment(Vec::new()),
        SequenceItem::Fragment(vec![1, 2, 3, 4]),
        SequenceItem::Fragment(vec![5, 6, 7, 8]),
    ];
    let mut obj = image(registry(), None, Vec::new());
    obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, items));
    let err = obj
        .change_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

    obj.put(DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, "2"));
    obj.change_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL)
        .unwrap();
    let items = obj.element(tags::PIXEL_DATA).unwrap().items().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[2].fragment(), Some(&[0xAB, 0xCD, 5, 6, 7, 8][..]));
}

#[test]
fn color_model_follows_compression() {
    let pixels: Vec<u8> = (0..12).collect();
    let mut obj = image(registry(), Some(1), pixels.clone());
    obj.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(3_u16)));
    obj.put(DataElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "RGB"));

    obj.change_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL)
        .unwrap();
    assert_eq!(photometric(&obj), "YBR_FULL_422");

    obj.change_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN)
        .unwrap();
    assert_eq!(photometric(&obj), "RGB");
    assert_eq!(pixel_bytes(&obj), pixels);
}

#[test]
fn jpeg_without_codec_is_rejected() {
    let mut obj = image(registry(), Some(1), vec![1, 2, 3, 4]);
    assert!(!obj.can_change_transfer_syntax(&entries::JPEG_2000_IMAGE_COMPRESSION));
    let err = obj
        .change_transfer_syntax(&entries::JPEG_2000_IMAGE_COMPRESSION)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedCompression);
    assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
}

#[test]
fn rle_color_planes_come_out_interleaved() {
    let mut obj = image(dcmcodec_object::default_registry(), Some(1), Vec::new());
    obj.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(3_u16)));
    obj.put(DataElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "RGB"));
    obj.put(DataElement::new(tags::PLANAR_CONFIGURATION, VR::US, PrimitiveValue::from(1_u16)));
    obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(1_u16)));
    // one literal run of two bytes per color plane
    let frame = rle_frame(&[&[0x01, 10, 20], &[0x01, 30, 40], &[0x01, 50, 60]]);
    obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, encapsulate(vec![frame])));
    obj.set_transfer_syntax(&entries::RLE_LOSSLESS);

    obj.uncompress().unwrap();
    assert_eq!(pixel_bytes(&obj), vec![10, 30, 50, 20, 40, 60]);
    assert_eq!(
        obj.element(tags::PLANAR_CONFIGURATION).unwrap().to_int::<u16>().unwrap(),
        0
    );
    assert_eq!(photometric(&obj), "RGB");
}

#[test]
fn failed_encoding_leaves_native_pixel_data() {
    let registry = Arc::new(TransferSyntaxRegistry::with_codecs(Arc::new(NoJpegLsEncoder)));
    let pixels: Vec<u8> = (0..8).collect();
    let mut obj = image(Arc::clone(&registry), Some(2), pixels.clone());
    obj.change_transfer_syntax(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL)
        .unwrap();

    let target = entries::JPEG_LS_LOSSLESS_IMAGE_COMPRESSION;
    assert!(obj.can_change_transfer_syntax(&target));
    let err = obj.change_transfer_syntax(&target).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CodecFailure);

    // decompressed, but not compressed again
    assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
    assert!(obj.element(tags::PIXEL_DATA).unwrap().items().is_none());
    assert_eq!(pixel_bytes(&obj), pixels);
}

//! Reading and writing whole DICOM files.
use dcmcodec_core::value::{ItemElements, SequenceItem};
use dcmcodec_core::{DataElement, PrimitiveValue, Tag, VR};
use dcmcodec_dictionary_std::tags;
use dcmcodec_object::{open_file, DataSet, OpenFileOptions, ParseOptions, ReadPreamble};
use dcmcodec_transfer_syntax_registry::entries;
use std::io::Cursor;

fn sample() -> DataSet {
    let mut reference = ItemElements::new();
    reference.insert(
        tags::REFERENCED_SOP_CLASS_UID,
        DataElement::new(tags::REFERENCED_SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.2"),
    );

    let mut obj = DataSet::new_empty();
    obj.put(DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.840.10008.5.1.4.1.1.7"));
    obj.put(DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "2.25.9876"));
    obj.put(DataElement::new(tags::MODALITY, VR::CS, "OT"));
    obj.put(DataElement::new(
        tags::REFERENCED_IMAGE_SEQUENCE,
        VR::SQ,
        vec![SequenceItem::Elements(reference)],
    ));
    obj.put(DataElement::new(tags::PATIENT_NAME, VR::PN, "Doe^Jane"));
    obj.put(DataElement::new(tags::PATIENT_ID, VR::LO, "ID0001"));
    obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(2_u16)));
    obj.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(8_u16)));
    obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, vec![1_u8, 2, 3, 4]));
    obj
}

fn text(obj: &DataSet, tag: Tag) -> String {
    obj.element(tag).unwrap().to_str().unwrap().trim().to_string()
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("series").join("image.dcm");

    let mut obj = sample();
    obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
    obj.write_to_file(&path).unwrap();

    let back = open_file(&path).unwrap();
    assert_eq!(back.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
    assert_eq!(text(&back, tags::MEDIA_STORAGE_SOP_INSTANCE_UID), "2.25.9876");
    assert_eq!(text(&back, tags::PATIENT_NAME), "Doe^Jane");
    assert_eq!(text(&back, tags::MODALITY), "OT");

    let items = back
        .element(tags::REFERENCED_IMAGE_SEQUENCE)
        .unwrap()
        .items()
        .unwrap();
    assert_eq!(items.len(), 1);
    let nested = items[0].elements().unwrap();
    assert_eq!(
        nested[&tags::REFERENCED_SOP_CLASS_UID].to_str().unwrap(),
        "1.2.840.10008.5.1.4.1.1.2"
    );
    assert_eq!(
        back.element(tags::PIXEL_DATA).unwrap().to_bytes().unwrap().as_ref(),
        &[1_u8, 2, 3, 4][..]
    );
}

#[test]
fn big_endian_file_keeps_little_endian_meta_group() {
    let mut obj = sample();
    obj.set_transfer_syntax(&entries::EXPLICIT_VR_BIG_ENDIAN);
    let mut file = Vec::new();
    obj.write_part10(&mut file).unwrap();

    let meta_len = obj
        .element(tags::FILE_META_INFORMATION_GROUP_LENGTH)
        .unwrap()
        .to_int::<u32>()
        .unwrap() as usize;
    // (0002,0000) UL 4, then the group length itself
    let body = 132 + 12 + meta_len;
    // (0008,0000) UL, written big endian
    assert_eq!(&file[body..body + 8], &[0x00, 0x08, 0x00, 0x00, b'U', b'L', 0x00, 0x04]);

    let back = dcmcodec_object::from_reader(Cursor::new(&file)).unwrap();
    assert_eq!(back.transfer_syntax(), entries::EXPLICIT_VR_BIG_ENDIAN);
    assert_eq!(back.element(tags::ROWS).unwrap().to_int::<u16>().unwrap(), 2);
    assert_eq!(text(&back, tags::PATIENT_ID), "ID0001");
}

#[test]
fn header_only_read_skips_pixel_data() {
    let mut obj = sample();
    obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
    let mut file = Vec::new();
    obj.write_part10(&mut file).unwrap();

    let back = OpenFileOptions::new()
        .load_pixel_data(false)
        .read_preamble(ReadPreamble::Always)
        .from_reader(Cursor::new(&file))
        .unwrap();
    assert!(back.element_opt(tags::PIXEL_DATA).is_none());
    assert_eq!(back.element(tags::COLUMNS).unwrap().to_int::<u16>().unwrap(), 2);
}

#[test]
fn network_stream_leaves_out_meta_group() {
    let mut obj = sample();
    obj.set_transfer_syntax(&entries::EXPLICIT_VR_LITTLE_ENDIAN);
    obj.fill_meta_group();
    assert!(obj.element_opt(tags::TRANSFER_SYNTAX_UID).is_some());

    let mut out = Vec::new();
    obj.write_stream(&mut out, &entries::IMPLICIT_VR_LITTLE_ENDIAN, true)
        .unwrap();
    assert_eq!(obj.transfer_syntax(), entries::IMPLICIT_VR_LITTLE_ENDIAN);
    // starts with (0008,0000)
    assert_eq!(&out[..4], &[0x08, 0x00, 0x00, 0x00]);

    let back = DataSet::parse(
        Cursor::new(&out),
        &entries::IMPLICIT_VR_LITTLE_ENDIAN,
        ParseOptions::default(),
    )
    .unwrap();
    assert!(back.element_opt(tags::TRANSFER_SYNTAX_UID).is_none());
    assert_eq!(text(&back, tags::PATIENT_NAME), "Doe^Jane");
    assert_eq!(
        back.element(tags::REFERENCED_IMAGE_SEQUENCE)
            .unwrap()
            .items()
            .map(|items| items.len()),
        Some(1)
    );
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = open_file(dir.path().join("none.dcm")).unwrap_err();
    assert!(matches!(err, dcmcodec_object::ReadError::OpenFile { .. }));
    assert!(err.to_string().contains("none.dcm"));
}

#[test]
fn implicit_attributes_get_dictionary_vr_in_explicit_output() {
    #[rustfmt::skip]
    let implicit: Vec<u8> = vec![
        // (0008,0031) SeriesTime, 6 bytes
        0x08, 0x00, 0x31, 0x00, 0x06, 0x00, 0x00, 0x00,
        b'1', b'2', b'0', b'0', b'0', b'0',
        // (0018,0050) SliceThickness, 4 bytes
        0x18, 0x00, 0x50, 0x00, 0x04, 0x00, 0x00, 0x00,
        b'2', b'.', b'5', b' ',
        // (0020,0011) SeriesNumber, 2 bytes
        0x20, 0x00, 0x11, 0x00, 0x02, 0x00, 0x00, 0x00,
        b'7', b' ',
    ];
    let mut obj = DataSet::parse(
        Cursor::new(&implicit),
        &entries::IMPLICIT_VR_LITTLE_ENDIAN,
        ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(obj.element(tags::SERIES_TIME).unwrap().vr(), VR::TM);
    assert_eq!(obj.element(tags::SLICE_THICKNESS).unwrap().vr(), VR::DS);
    assert_eq!(obj.element(tags::SERIES_NUMBER).unwrap().vr(), VR::IS);

    let mut explicit = Vec::new();
    obj.write_stream(&mut explicit, &entries::EXPLICIT_VR_LITTLE_ENDIAN, true)
        .unwrap();
    let headers: [&[u8]; 3] = [
        &[0x08, 0x00, 0x31, 0x00, b'T', b'M', 0x06, 0x00],
        &[0x18, 0x00, 0x50, 0x00, b'D', b'S', 0x04, 0x00],
        &[0x20, 0x00, 0x11, 0x00, b'I', b'S', 0x02, 0x00],
    ];
    for header in headers {
        assert!(
            explicit.windows(header.len()).any(|w| w == header),
            "missing header {:02X?}",
            header
        );
    }

    let back = DataSet::parse(
        Cursor::new(&explicit),
        &entries::EXPLICIT_VR_LITTLE_ENDIAN,
        ParseOptions::default(),
    )
    .unwrap();
    assert_eq!(text(&back, tags::SERIES_TIME), "120000");
    assert_eq!(
        back.element_by_name("SliceThickness").unwrap().to_str().unwrap().trim(),
        "2.5"
    );
}

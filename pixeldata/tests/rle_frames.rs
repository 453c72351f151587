//! Decoding of encapsulated multi-frame RLE Lossless pixel data.
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmcodec_core::value::{SequenceItem, Value};
use dcmcodec_encoding::FrameInfo;
use dcmcodec_pixeldata::{encapsulate, frame_fragments, offset_table, rle};

fn rle_frame(segment: &[u8]) -> Vec<u8> {
    let mut data = vec![0; 64];
    LittleEndian::write_u32(&mut data[0..4], 1);
    LittleEndian::write_u32(&mut data[4..8], 64);
    data.extend_from_slice(segment);
    data
}

fn monochrome(rows: u16, columns: u16) -> FrameInfo {
    FrameInfo {
        bits_allocated: 8,
        columns,
        rows,
        samples_per_pixel: 1,
        planar_configuration: 0,
        ybr: false,
    }
}

#[test]
fn decode_each_frame() {
    let frames = vec![rle_frame(&[0xFD, 1]), rle_frame(&[0x03, 1, 2, 3, 4])];
    let first_len = frames[0].len() as u32;
    let items = encapsulate(frames);
    assert_eq!(offset_table(&items).unwrap(), vec![0, first_len]);

    let value = Value::from(items);
    let units = frame_fragments(&value, 2, true).unwrap().into_units();
    assert_eq!(units.len(), 2);

    let info = monochrome(2, 2);
    let native: Vec<u8> = units
        .iter()
        .flat_map(|unit| rle::decode_frame(unit, &info).unwrap())
        .collect();
    assert_eq!(native, vec![1, 1, 1, 1, 1, 2, 3, 4]);
}

#[test]
fn single_frame_split_across_fragments() {
    // one RLE frame cut in two fragments, no frame count declared
    let data = rle_frame(&[0x01, 7, 8]);
    let (a, b) = data.split_at(40);
    let value = Value::from(vec![
        SequenceItem::Fragment(vec![]),
        SequenceItem::Fragment(a.to_vec()),
        SequenceItem::Fragment(b.to_vec()),
    ]);
    let units = frame_fragments(&value, 1, false).unwrap().into_units();
    assert_eq!(units.len(), 1);
    let native = rle::decode_frame(&units[0], &monochrome(1, 2)).unwrap();
    assert_eq!(native, vec![7, 8]);
}

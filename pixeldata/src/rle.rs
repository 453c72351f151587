//! Support for RLE Lossless image decoding.
//!
//! An RLE frame starts with a header of 16 little endian `u32` values:
//! the number of segments, then the byte offset of each segment.
//! Each segment holds one byte plane of one sample,
//! most significant byte first,
//! compressed with the PackBits scheme.
//!
//! Decoded frames are interleaved (planar configuration 0)
//! and in little endian byte order.
//! RLE encoding is not provided.
use crate::color::ybr_full_to_rgb;
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmcodec_encoding::adapters::FrameInfo;
use snafu::{ensure, Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("Invalid RLE header: {}", reason))]
    InvalidHeader {
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Expected at least {} RLE segments, found {}", expected, found))]
    MissingSegments {
        expected: usize,
        found: usize,
        backtrace: Backtrace,
    },

    #[snafu(display("BitsAllocated {} is not supported by RLE Lossless", bits_allocated))]
    UnsupportedBitsAllocated {
        bits_allocated: u16,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Read the RLE header of a frame,
/// returning the start offset of each segment.
pub fn read_header(data: &[u8]) -> Result<Vec<u32>> {
    ensure!(
        data.len() >= 4,
        InvalidHeaderSnafu {
            reason: "frame is too short",
        }
    );
    let count = LittleEndian::read_u32(&data[0..4]) as usize;
    ensure!(
        count <= 15 && data.len() >= 4 * (count + 1),
        InvalidHeaderSnafu {
            reason: "bad number of segments",
        }
    );
    let mut offsets = vec![0; count];
    LittleEndian::read_u32_into(&data[4..4 * (count + 1)], &mut offsets);

    ensure!(
        offsets.iter().all(|&o| o as usize <= data.len())
            && offsets.windows(2).all(|w| w[0] <= w[1]),
        InvalidHeaderSnafu {
            reason: "segment offsets out of order or out of bounds",
        }
    );
    Ok(offsets)
}

/// Decompress one PackBits segment into exactly `len` bytes.
///
/// A control byte `n` in `0..=127` copies the next `n + 1` bytes,
/// `-127..=-1` repeats the next byte `1 - n` times,
/// and `-128` does nothing.
/// Output is truncated or zero padded to `len`,
/// as some encoders leave out trailing runs.
pub fn unpack_segment(segment: &[u8], len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let mut i = 0;
    while i < segment.len() && out.len() < len {
        let control = segment[i] as i8;
        i += 1;
        match control {
            -128 => {}
            0..=127 => {
                let end = (i + control as usize + 1).min(segment.len());
                out.extend_from_slice(&segment[i..end]);
                i = end;
            }
            _ => {
                if let Some(&byte) = segment.get(i) {
                    let count = (1 - isize::from(control)) as usize;
                    out.resize(out.len() + count, byte);
                }
                i += 1;
            }
        }
    }
    if out.len() < len {
        tracing::debug!(found = out.len(), expected = len, "Zero padding short RLE segment");
    }
    out.resize(len, 0);
    out
}

/// Decode one RLE Lossless frame into native pixel data.
///
/// When the frame is in a YBR full color space
/// with 3 samples of 8 bits,
/// the output is converted to RGB.
pub fn decode_frame(data: &[u8], info: &FrameInfo) -> Result<Vec<u8>> {
    let bits_allocated = info.bits_allocated;
    ensure!(
        bits_allocated == 8 || bits_allocated == 16,
        UnsupportedBitsAllocatedSnafu { bits_allocated }
    );
    let offsets = read_header(data)?;

    let bytes_per_sample = info.bytes_per_sample();
    let samples_per_pixel = usize::from(info.samples_per_pixel);
    let expected = samples_per_pixel * bytes_per_sample;
    ensure!(
        offsets.len() >= expected,
        MissingSegmentsSnafu {
            expected,
            found: offsets.len(),
        }
    );

    let pixels = usize::from(info.rows) * usize::from(info.columns);
    let stride = expected;
    let mut out = vec![0; pixels * stride];

    for sample in 0..samples_per_pixel {
        // segments hold the most significant byte first,
        // native data has it last
        for byte in 0..bytes_per_sample {
            let k = sample * bytes_per_sample + byte;
            let start = offsets[k] as usize;
            let end = offsets.get(k + 1).map_or(data.len(), |&o| o as usize);
            let plane = unpack_segment(&data[start..end], pixels);

            let first = sample * bytes_per_sample + (bytes_per_sample - 1 - byte);
            for (dst, src) in out[first..].iter_mut().step_by(stride).zip(plane) {
                *dst = src;
            }
        }
    }

    if info.ybr && samples_per_pixel == 3 && bytes_per_sample == 1 {
        ybr_full_to_rgb(&mut out);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn info(bits_allocated: u16, samples_per_pixel: u16, rows: u16, columns: u16) -> FrameInfo {
        FrameInfo {
            bits_allocated,
            columns,
            rows,
            samples_per_pixel,
            planar_configuration: 0,
            ybr: false,
        }
    }

    /// Build an RLE frame out of already compressed segments.
    fn frame(segments: &[&[u8]]) -> Vec<u8> {
        let mut header = vec![0_u8; 64];
        LittleEndian::write_u32(&mut header[0..4], segments.len() as u32);
        let mut offset = 64_u32;
        for (i, segment) in segments.iter().enumerate() {
            LittleEndian::write_u32(&mut header[4 + 4 * i..8 + 4 * i], offset);
            offset += segment.len() as u32;
        }
        let mut data = header;
        for segment in segments {
            data.extend_from_slice(segment);
        }
        data
    }

    #[test]
    fn packbits_control_bytes() {
        let encoded = [
            0xFE, 0xAA, 0x02, 0x80, 0x00, 0x2A, 0xFD, 0xAA, 0x03, 0x80, 0x00, 0x2A, 0x22, 0xF7,
            0xAA,
        ];
        let expected = vec![
            0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0xAA, 0xAA, 0xAA, 0xAA, 0x80, 0x00, 0x2A, 0x22,
            0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA, 0xAA,
        ];
        assert_eq!(unpack_segment(&encoded, 24), expected);
    }

    #[rstest]
    #[case::noop(&[0x80, 0x00, 0x07], 1, &[7])]
    #[case::short_segment_padded(&[0x00, 0x05], 4, &[5, 0, 0, 0])]
    #[case::literal_clamped(&[0x03, 1, 2], 4, &[1, 2, 0, 0])]
    #[case::dangling_repeat(&[0x00, 9, 0xFF], 3, &[9, 0, 0])]
    #[case::longer_than_needed(&[0xFD, 4], 2, &[4, 4])]
    fn packbits_edge_cases(#[case] segment: &[u8], #[case] len: usize, #[case] expected: &[u8]) {
        assert_eq!(unpack_segment(segment, len), expected);
    }

    #[test]
    fn decode_8bit_rgb() {
        // 2x1 image: red plane, green plane, blue plane
        let data = frame(&[&[0x01, 10, 20], &[0xFF, 30], &[0x00, 40]]);
        let out = decode_frame(&data, &info(8, 3, 1, 2)).unwrap();
        assert_eq!(out, vec![10, 30, 40, 20, 30, 0]);
    }

    #[test]
    fn decode_16bit_monochrome_is_little_endian() {
        // 3 pixels: 0x0102, 0x0304, 0x0506
        let data = frame(&[&[0x02, 0x01, 0x03, 0x05], &[0x02, 0x02, 0x04, 0x06]]);
        let out = decode_frame(&data, &info(16, 1, 3, 1)).unwrap();
        assert_eq!(out, vec![0x02, 0x01, 0x04, 0x03, 0x06, 0x05]);
    }

    #[test]
    fn decode_ybr_to_rgb() {
        let data = frame(&[&[0x00, 128], &[0x00, 128], &[0x00, 128]]);
        let mut info = info(8, 3, 1, 1);
        info.ybr = true;
        assert_eq!(decode_frame(&data, &info).unwrap(), vec![128, 128, 128]);
    }

    #[test]
    fn not_enough_segments() {
        let data = frame(&[&[0x00, 1]]);
        assert!(matches!(
            decode_frame(&data, &info(8, 3, 1, 1)),
            Err(Error::MissingSegments {
                expected: 3,
                found: 1,
                ..
            })
        ));
        assert!(matches!(
            decode_frame(&data, &info(32, 1, 1, 1)),
            Err(Error::UnsupportedBitsAllocated { .. })
        ));
    }

    #[test]
    fn corrupt_header() {
        assert!(read_header(&[1, 0]).is_err());
        // 2 segments declared, but only room for one offset
        assert!(read_header(&[2, 0, 0, 0, 12, 0, 0, 0]).is_err());
        // offset past the end
        assert!(read_header(&[1, 0, 0, 0, 200, 0, 0, 0]).is_err());
    }
}

//! DICOM pixel data encapsulation.
//!
//! Encapsulated pixel data is a sequence of items holding raw bytes.
//! The first item is the basic offset table,
//! with one 4-byte little endian offset per frame,
//! relative to the first fragment after the table.
//! The remaining items are the fragments.
//!
//! This module converts between flat pixel buffers, frames,
//! and that container, without any codec involvement.
use byteordered::byteorder::{ByteOrder, LittleEndian};
use dcmcodec_core::value::{SequenceItem, Value};
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::borrow::Cow;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The pixel data does not have the layout required for the operation.
    #[snafu(display("Unexpected pixel data shape: {}", reason))]
    ShapeMismatch {
        reason: &'static str,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Encapsulate the given frames, one fragment per frame.
///
/// The basic offset table is built from the byte length of each frame.
///
/// ```
/// # use dcmcodec_pixeldata::encapsulation::{encapsulate, offset_table};
/// let items = encapsulate(vec![vec![1, 2, 3], vec![4, 5]]);
/// assert_eq!(items.len(), 3);
/// assert_eq!(offset_table(&items).unwrap(), vec![0, 3]);
/// ```
pub fn encapsulate(frames: Vec<Vec<u8>>) -> Vec<SequenceItem> {
    let mut table = vec![0; 4 * frames.len()];
    let mut offset = 0_u32;
    for (i, frame) in frames.iter().enumerate() {
        LittleEndian::write_u32(&mut table[4 * i..4 * i + 4], offset);
        offset += frame.len() as u32;
    }

    std::iter::once(SequenceItem::Fragment(table))
        .chain(frames.into_iter().map(SequenceItem::Fragment))
        .collect()
}

/// Parse the basic offset table of an encapsulated pixel data sequence.
///
/// An empty table is valid and yields no offsets.
pub fn offset_table(items: &[SequenceItem]) -> Result<Vec<u32>> {
    let table = items
        .first()
        .and_then(|item| item.fragment())
        .context(ShapeMismatchSnafu {
            reason: "missing basic offset table",
        })?;
    ensure!(
        table.len() % 4 == 0,
        ShapeMismatchSnafu {
            reason: "basic offset table length is not a multiple of 4",
        }
    );
    let mut offsets = vec![0; table.len() / 4];
    LittleEndian::read_u32_into(table, &mut offsets);
    Ok(offsets)
}

/// The layout of compressed pixel data, as found in a data set.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameFragments<'a> {
    /// A flat buffer not encapsulated in a sequence, holding one frame.
    Flat(&'a [u8]),
    /// Several fragments without per-frame meaning,
    /// joined into one compressed unit.
    Concatenated(Vec<u8>),
    /// One fragment per frame.
    PerFrame(Vec<&'a [u8]>),
}

impl<'a> FrameFragments<'a> {
    /// The compressed units to decode, in frame order.
    pub fn into_units(self) -> Vec<Cow<'a, [u8]>> {
        match self {
            FrameFragments::Flat(data) => vec![Cow::Borrowed(data)],
            FrameFragments::Concatenated(data) => vec![Cow::Owned(data)],
            FrameFragments::PerFrame(frames) => frames.into_iter().map(Cow::Borrowed).collect(),
        }
    }
}

fn fragments(items: &[SequenceItem]) -> Result<Vec<&[u8]>> {
    items
        .iter()
        .skip(1)
        .map(|item| {
            item.fragment().context(ShapeMismatchSnafu {
                reason: "pixel data item is not a fragment",
            })
        })
        .collect()
}

/// Classify the compressed pixel data value
/// into the units which a codec should decode.
///
/// `frames` is the number of frames of the image,
/// and `has_frame_count` whether it was declared in the data set.
///
/// Without a declared frame count, or with a single frame,
/// a sequence of several fragments is taken to be
/// one image split across fragments.
pub fn frame_fragments(value: &Value, frames: u32, has_frame_count: bool) -> Result<FrameFragments<'_>> {
    let items = match value {
        Value::Primitive(v) => {
            let data = v.bytes().context(ShapeMismatchSnafu {
                reason: "pixel data is not a byte buffer",
            })?;
            return Ok(FrameFragments::Flat(data));
        }
        Value::Sequence(items) => items,
    };

    let fragments = fragments(items)?;
    ensure!(
        !fragments.is_empty(),
        ShapeMismatchSnafu {
            reason: "encapsulated pixel data has no fragments",
        }
    );

    if (!has_frame_count || frames <= 1) && fragments.len() > 1 {
        return Ok(FrameFragments::Concatenated(fragments.concat()));
    }

    ensure!(
        fragments.len() == frames.max(1) as usize,
        ShapeMismatchSnafu {
            reason: "number of fragments does not match the number of frames",
        }
    );
    Ok(FrameFragments::PerFrame(fragments))
}

/// Split native pixel data into its frames.
///
/// A flat buffer is sliced every `frame_size` bytes.
/// A sequence must hold an offset table item
/// followed by at least one item per frame.
pub fn native_frames(value: &Value, frames: u32, frame_size: usize) -> Result<Vec<&[u8]>> {
    let frames = frames.max(1) as usize;
    match value {
        Value::Primitive(v) => {
            let data = v.bytes().context(ShapeMismatchSnafu {
                reason: "pixel data is not a byte buffer",
            })?;
            ensure!(
                frame_size > 0 && data.len() >= frames * frame_size,
                ShapeMismatchSnafu {
                    reason: "pixel data is shorter than the declared frames",
                }
            );
            Ok(data.chunks_exact(frame_size).take(frames).collect())
        }
        Value::Sequence(items) => {
            ensure!(
                items.len() > frames,
                ShapeMismatchSnafu {
                    reason: "fewer pixel data items than frames",
                }
            );
            let fragments = fragments(&items[..=frames])?;
            Ok(fragments)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_core::value::PrimitiveValue;

    #[test]
    fn three_frames_make_four_items() {
        let items = encapsulate(vec![vec![1; 10], vec![2; 7], vec![3; 4]]);
        assert_eq!(items.len(), 4);
        let offsets = offset_table(&items).unwrap();
        assert_eq!(offsets, vec![0, 10, 17]);
        assert_eq!(items[0].fragment().map(|t| t.len()), Some(12));
        assert_eq!(items[2].fragment(), Some(&[2; 7][..]));
    }

    #[test]
    fn flat_buffer_is_one_unit() {
        let value = Value::from(vec![1_u8, 2, 3, 4]);
        let shape = frame_fragments(&value, 1, false).unwrap();
        assert_eq!(shape, FrameFragments::Flat(&[1, 2, 3, 4]));
        assert_eq!(shape.into_units().len(), 1);
    }

    #[test]
    fn several_fragments_of_one_frame_are_concatenated() {
        let value = Value::from(vec![
            SequenceItem::Fragment(vec![]),
            SequenceItem::Fragment(vec![1, 2]),
            SequenceItem::Fragment(vec![3, 4]),
        ]);
        // legacy heuristic: no declared frame count means one split image
        let shape = frame_fragments(&value, 1, false).unwrap();
        assert_eq!(shape, FrameFragments::Concatenated(vec![1, 2, 3, 4]));

        // with two declared frames, each fragment is a frame
        let shape = frame_fragments(&value, 2, true).unwrap();
        assert_eq!(
            shape,
            FrameFragments::PerFrame(vec![&[1_u8, 2][..], &[3, 4][..]])
        );
    }

    #[test]
    fn fragment_count_mismatch() {
        let value = Value::from(vec![
            SequenceItem::Fragment(vec![]),
            SequenceItem::Fragment(vec![1, 2]),
        ]);
        assert!(matches!(
            frame_fragments(&value, 3, true),
            Err(Error::ShapeMismatch { .. })
        ));
        let value = Value::from(vec![SequenceItem::Fragment(vec![])]);
        assert!(frame_fragments(&value, 1, false).is_err());
    }

    #[test]
    fn native_frames_from_flat_buffer() {
        let value = Value::from(vec![1_u8, 2, 3, 4, 5, 6, 7]);
        let frames = native_frames(&value, 3, 2).unwrap();
        assert_eq!(frames, vec![&[1_u8, 2][..], &[3, 4][..], &[5, 6][..]]);
        assert!(native_frames(&value, 4, 2).is_err());

        let value = Value::Primitive(PrimitiveValue::from("text"));
        assert!(native_frames(&value, 1, 2).is_err());
    }

    #[test]
    fn native_frames_from_sequence() {
        let value = Value::from(vec![
            SequenceItem::Fragment(vec![]),
            SequenceItem::Fragment(vec![1, 2]),
            SequenceItem::Fragment(vec![3, 4]),
        ]);
        assert_eq!(native_frames(&value, 2, 2).unwrap().len(), 2);
        assert!(native_frames(&value, 3, 2).is_err());
    }

    #[test]
    fn bad_offset_table() {
        let items = vec![SequenceItem::Fragment(vec![0, 0, 0])];
        assert!(offset_table(&items).is_err());
        assert!(offset_table(&[]).is_err());
    }
}

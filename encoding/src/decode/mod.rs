//! This module contains the byte-order aware reading primitives
//! on which all DICOM data element decoding is built.
//!
//! A [`SwappableReader`] reads in little endian by default.
//! Its swap flag can be toggled at any point of the stream,
//! after which every multi-byte value is read in big endian.
//! The file meta group is always little endian,
//! so a reader of a big endian data set toggles the flag
//! when crossing into and out of group 2.

use byteordered::{ByteOrdered, Endianness};
use snafu::{ensure, Backtrace, IntoError, Snafu};
use std::io::{self, Read};

/// Module-level error type:
/// for errors which may occur while reading primitive data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The stream ended before the requested data could be read.
    #[snafu(display("Unexpected end of data at position {}", position))]
    UnexpectedEof {
        position: u64,
        backtrace: Backtrace,
    },
    /// The underlying source failed.
    #[snafu(display("Could not read data at position {}", position))]
    ReadData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

fn read_error(e: io::Error, position: u64) -> Error {
    if e.kind() == io::ErrorKind::UnexpectedEof {
        UnexpectedEofSnafu { position }.build()
    } else {
        ReadDataSnafu { position }.into_error(e)
    }
}

macro_rules! impl_read {
    ($name: ident, $t: ty, $size: expr) => {
        #[doc = concat!("Read a single `", stringify!($t), "` in the current byte order.")]
        pub fn $name(&mut self) -> Result<$t> {
            let position = self.position;
            let endianness = self.endianness();
            let value = ByteOrdered::runtime(&mut self.inner, endianness)
                .$name()
                .map_err(|e| read_error(e, position))?;
            self.position += $size;
            Ok(value)
        }
    };
}

/// Buffers for declared lengths grow with the data actually read
/// past this many bytes.
const PREALLOCATION_LIMIT: usize = 1 << 16;

/// A byte source with a mutable byte order
/// and a running count of the bytes consumed.
#[derive(Debug)]
pub struct SwappableReader<R> {
    inner: R,
    swapped: bool,
    position: u64,
    /// stream position past the last byte, if known
    end: Option<u64>,
}

impl<R> SwappableReader<R>
where
    R: Read,
{
    /// Wrap a byte source, reading in little endian from position 0.
    pub fn new(inner: R) -> Self {
        SwappableReader {
            inner,
            swapped: false,
            position: 0,
            end: None,
        }
    }

    /// Wrap a byte source whose first byte is at the given position
    /// of the whole stream.
    pub fn with_position(inner: R, position: u64) -> Self {
        SwappableReader {
            inner,
            swapped: false,
            position,
            end: None,
        }
    }

    /// Whether multi-byte values are currently read in big endian.
    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// Flip the byte order of all subsequent reads.
    pub fn toggle_swapped(&mut self) {
        self.swapped = !self.swapped;
    }

    /// Set the byte order of all subsequent reads.
    pub fn set_swapped(&mut self, swapped: bool) {
        self.swapped = swapped;
    }

    /// The byte order currently in effect.
    pub fn endianness(&self) -> Endianness {
        if self.swapped {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// The number of bytes consumed so far,
    /// plus the initial position.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Declare the stream position at which the source ends,
    /// so that reads past it fail before consuming anything.
    pub fn set_end(&mut self, end: u64) {
        self.end = Some(end);
    }

    /// The number of bytes left in the source, if its end is known.
    pub fn remaining(&self) -> Option<u64> {
        self.end.map(|end| end.saturating_sub(self.position))
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    impl_read!(read_u16, u16, 2);
    impl_read!(read_i16, i16, 2);
    impl_read!(read_u32, u32, 4);
    impl_read!(read_i32, i32, 4);
    impl_read!(read_u64, u64, 8);
    impl_read!(read_i64, i64, 8);
    impl_read!(read_f32, f32, 4);
    impl_read!(read_f64, f64, 8);

    /// Fill the whole buffer with bytes from the source.
    /// Byte order does not apply.
    pub fn read_exact(&mut self, buf: &mut [u8]) -> Result<()> {
        let position = self.position;
        self.inner
            .read_exact(buf)
            .map_err(|e| read_error(e, position))?;
        self.position += buf.len() as u64;
        Ok(())
    }

    /// Read exactly `len` bytes.
    ///
    /// Memory is committed as the bytes arrive,
    /// so a length beyond the size of the source
    /// fails with [`Error::UnexpectedEof`] without a large allocation.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let position = self.position;
        if let Some(remaining) = self.remaining() {
            ensure!(len as u64 <= remaining, UnexpectedEofSnafu { position });
        }
        let mut buf = Vec::with_capacity(len.min(PREALLOCATION_LIMIT));
        let n = self
            .inner
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)
            .map_err(|e| read_error(e, position))?;
        ensure!(n == len, UnexpectedEofSnafu { position });
        self.position += n as u64;
        Ok(buf)
    }

    /// Read exactly `len` bytes of 16-bit words,
    /// returning them in little endian word order.
    /// When swapped, the bytes of each word are exchanged.
    /// A trailing odd byte is kept as is.
    pub fn read_words(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = self.read_bytes(len)?;
        if self.swapped {
            swap_words(&mut buf);
        }
        Ok(buf)
    }

    /// Read at most `len` bytes,
    /// stopping early without error if the stream ends.
    pub fn read_bytes_up_to(&mut self, len: u64) -> Result<Vec<u8>> {
        let position = self.position;
        let mut buf = Vec::new();
        let n = self
            .inner
            .by_ref()
            .take(len)
            .read_to_end(&mut buf)
            .map_err(|e| read_error(e, position))?;
        self.position += n as u64;
        Ok(buf)
    }

    /// Advance `len` bytes without keeping them.
    pub fn skip(&mut self, len: u64) -> Result<()> {
        let position = self.position;
        let n = io::copy(&mut self.inner.by_ref().take(len), &mut io::sink())
            .map_err(|e| read_error(e, position))?;
        self.position += n;
        if n < len {
            return UnexpectedEofSnafu {
                position: self.position,
            }
            .fail();
        }
        Ok(())
    }
}

/// Exchange the two bytes of every 16-bit word in place.
pub fn swap_words(data: &mut [u8]) {
    for word in data.chunks_exact_mut(2) {
        word.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_honour_swap_flag() {
        let data = [0x01, 0x02, 0x01, 0x02, 0x00, 0x00, 0x80, 0x3F];
        let mut reader = SwappableReader::new(Cursor::new(&data[..]));
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
        reader.toggle_swapped();
        assert!(reader.is_swapped());
        assert_eq!(reader.read_u16().unwrap(), 0x0102);
        reader.toggle_swapped();
        assert_eq!(reader.read_f32().unwrap(), 1.0);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn words_are_swapped_pairwise() {
        let data = [1, 2, 3, 4, 5];
        let mut reader = SwappableReader::new(Cursor::new(&data[..]));
        reader.set_swapped(true);
        assert_eq!(reader.read_words(5).unwrap(), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn reads_past_the_end_fail() {
        let data = [1, 2, 3];
        let mut reader = SwappableReader::new(Cursor::new(&data[..]));
        assert!(matches!(
            reader.read_u32(),
            Err(Error::UnexpectedEof { position: 0, .. })
        ));

        let mut reader = SwappableReader::with_position(Cursor::new(&data[..]), 128);
        assert!(matches!(
            reader.skip(4),
            Err(Error::UnexpectedEof { position: 131, .. })
        ));
    }

    #[test]
    fn oversized_lengths_fail_without_reading() {
        let data = [1, 2, 3, 4];
        // end of source not declared: fails once the data runs out
        let mut reader = SwappableReader::with_position(Cursor::new(&data[..]), 10);
        assert!(matches!(
            reader.read_bytes(0xFFFF_FFF0),
            Err(Error::UnexpectedEof { position: 10, .. })
        ));

        // end of source declared: fails up front, leaving the data in place
        let mut reader = SwappableReader::with_position(Cursor::new(&data[..]), 10);
        reader.set_end(14);
        assert_eq!(reader.remaining(), Some(4));
        assert!(matches!(
            reader.read_bytes(5),
            Err(Error::UnexpectedEof { position: 10, .. })
        ));
        assert_eq!(reader.position(), 10);
        assert_eq!(reader.read_bytes(4).unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(reader.remaining(), Some(0));
    }

    #[test]
    fn read_up_to_clamps() {
        let data = [1, 2, 3];
        let mut reader = SwappableReader::new(Cursor::new(&data[..]));
        reader.skip(1).unwrap();
        assert_eq!(reader.read_bytes_up_to(10).unwrap(), vec![2, 3]);
        assert_eq!(reader.position(), 3);
        assert_eq!(reader.read_bytes_up_to(10).unwrap(), Vec::<u8>::new());
    }
}

//! This module contains the byte-order aware writing primitives
//! on which all DICOM data element encoding is built.
//!
//! [`SwappableWriter`] mirrors [`SwappableReader`](crate::decode::SwappableReader):
//! little endian by default, big endian while swapped.

use byteordered::{ByteOrdered, Endianness};
use snafu::{Backtrace, ResultExt, Snafu};
use std::io::{self, Write};

/// Module-level error type:
/// for errors which may occur while writing primitive data.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The underlying sink failed.
    #[snafu(display("Could not write data at position {}", position))]
    WriteData {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

macro_rules! impl_write {
    ($name: ident, $t: ty, $size: expr) => {
        #[doc = concat!("Write a single `", stringify!($t), "` in the current byte order.")]
        pub fn $name(&mut self, value: $t) -> Result<()> {
            let position = self.position;
            let endianness = self.endianness();
            ByteOrdered::runtime(&mut self.inner, endianness)
                .$name(value)
                .context(WriteDataSnafu { position })?;
            self.position += $size;
            Ok(())
        }
    };
}

/// A byte sink with a mutable byte order
/// and a running count of the bytes written.
#[derive(Debug)]
pub struct SwappableWriter<W> {
    inner: W,
    swapped: bool,
    position: u64,
}

impl<W> SwappableWriter<W>
where
    W: Write,
{
    /// Wrap a byte sink, writing in little endian from position 0.
    pub fn new(inner: W) -> Self {
        SwappableWriter {
            inner,
            swapped: false,
            position: 0,
        }
    }

    /// Wrap a byte sink which already holds `position` bytes.
    pub fn with_position(inner: W, position: u64) -> Self {
        SwappableWriter {
            inner,
            swapped: false,
            position,
        }
    }

    pub fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// Flip the byte order of all subsequent writes.
    pub fn toggle_swapped(&mut self) {
        self.swapped = !self.swapped;
    }

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

    /// The number of bytes written so far,
    /// plus the initial position.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    impl_write!(write_u16, u16, 2);
    impl_write!(write_i16, i16, 2);
    impl_write!(write_u32, u32, 4);
    impl_write!(write_i32, i32, 4);
    impl_write!(write_u64, u64, 8);
    impl_write!(write_i64, i64, 8);
    impl_write!(write_f32, f32, 4);
    impl_write!(write_f64, f64, 8);

    /// Write the bytes as they are.
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let position = self.position;
        self.inner
            .write_all(data)
            .context(WriteDataSnafu { position })?;
        self.position += data.len() as u64;
        Ok(())
    }

    /// Write 16-bit words held in little endian word order,
    /// exchanging the bytes of each word when swapped.
    pub fn write_words(&mut self, data: &[u8]) -> Result<()> {
        if self.swapped {
            let mut data = data.to_vec();
            crate::decode::swap_words(&mut data);
            self.write_bytes(&data)
        } else {
            self.write_bytes(data)
        }
    }

    /// Write `count` copies of the given byte.
    pub fn write_padding(&mut self, byte: u8, count: usize) -> Result<()> {
        self.write_bytes(&vec![byte; count])
    }

    pub fn flush(&mut self) -> Result<()> {
        let position = self.position;
        self.inner.flush().context(WriteDataSnafu { position })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_honour_swap_flag() {
        let mut writer = SwappableWriter::new(Vec::new());
        writer.write_u16(0x0201).unwrap();
        writer.toggle_swapped();
        writer.write_u32(0x0102_0304).unwrap();
        writer.write_words(&[1, 2, 3, 4]).unwrap();
        writer.toggle_swapped();
        writer.write_padding(b' ', 1).unwrap();
        assert_eq!(writer.position(), 11);
        assert_eq!(
            writer.into_inner(),
            vec![0x01, 0x02, 0x01, 0x02, 0x03, 0x04, 2, 1, 4, 3, b' ']
        );
    }
}

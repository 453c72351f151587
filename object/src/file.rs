use crate::{
    DataSet, MissingMagicCodeSnafu, OpenFileSnafu, ParseDataSetSnafu, ReadPreambleBytesSnafu,
    Result, WriteError, WriteFileSnafu, WriteMagicCodeSnafu, WritePreambleSnafu,
};
use dcmcodec_encoding::TransferSyntax;
use dcmcodec_parser::dataset::DataSetReader;
use dcmcodec_transfer_syntax_registry::{entries, TransferSyntaxRegistry};
use snafu::{ensure, ResultExt};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;
use std::sync::Arc;

/// The options for parsing a data set from a byte stream.
pub use dcmcodec_parser::dataset::ReadOptions as ParseOptions;

/// The length of the file preamble and the magic code after it.
const PREAMBLE_LEN: u64 = 132;

/// Create a DICOM data set by reading from a byte source.
///
/// The preamble is detected as in [`ReadPreamble::Auto`].
pub fn from_reader<F>(file: F) -> Result<DataSet>
where
    F: Read + Seek,
{
    OpenFileOptions::new().from_reader(file)
}

/// Create a DICOM data set by reading from a file.
///
/// The file may start with the 128-byte preamble and the `DICM` code,
/// or directly with the data set.
pub fn open_file<P>(path: P) -> Result<DataSet>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// A builder type for opening a DICOM file with additional options.
///
/// This builder exposes additional properties
/// to configure the reading of a DICOM file.
///
/// # Example
///
/// Create a `OpenFileOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.open_file()`](OpenFileOptions::open_file).
///
/// ```no_run
/// # use dcmcodec_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .load_pixel_data(false)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions {
    registry: Option<Arc<TransferSyntaxRegistry>>,
    read_preamble: ReadPreamble,
    parse: ParseOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }

    /// Set the transfer syntax registry to use when reading the file,
    /// which is also kept by the resulting data set.
    pub fn registry(mut self, registry: Arc<TransferSyntaxRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set whether the pixel data is loaded.
    ///
    /// When false, the Pixel Data element is skipped
    /// and left out of the data set.
    pub fn load_pixel_data(mut self, load: bool) -> Self {
        self.parse = self.parse.load_pixel_data(load);
        self
    }

    /// Set whether the transfer syntax declared in the file meta group
    /// is used to read the rest of the data set.
    pub fn allow_syntax_change(mut self, allow: bool) -> Self {
        self.parse = self.parse.allow_syntax_change(allow);
        self
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DataSet>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).with_context(|_| OpenFileSnafu {
            filename: path.to_owned(),
        })?;
        self.from_reader(BufReader::new(file))
    }

    /// Obtain a DICOM data set by reading from a byte source.
    ///
    /// Reading starts in implicit VR little endian,
    /// until a transfer syntax is declared.
    pub fn from_reader<R>(self, mut from: R) -> Result<DataSet>
    where
        R: Read + Seek,
    {
        skip_preamble(&mut from, self.read_preamble)?;
        let registry = self
            .registry
            .unwrap_or_else(crate::mem::default_registry);
        DataSet::parse_with_registry(
            from,
            &entries::IMPLICIT_VR_LITTLE_ENDIAN,
            self.parse,
            registry,
        )
    }
}

/// An enumerate of supported options for
/// whether to read the 128-byte DICOM file preamble.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Skip the preamble if the `DICM` code is found right after it,
    /// otherwise read from the start of the source.
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// failing if the `DICM` code is not there.
    Always,
}

impl Default for ReadPreamble {
    fn default() -> Self {
        ReadPreamble::Auto
    }
}

fn skip_preamble<R>(from: &mut R, option: ReadPreamble) -> Result<()>
where
    R: Read + Seek,
{
    if option == ReadPreamble::Never {
        return Ok(());
    }
    let start = from.stream_position().context(ReadPreambleBytesSnafu)?;
    let mut buf = Vec::with_capacity(PREAMBLE_LEN as usize);
    from.by_ref()
        .take(PREAMBLE_LEN)
        .read_to_end(&mut buf)
        .context(ReadPreambleBytesSnafu)?;

    let found = buf.len() as u64 == PREAMBLE_LEN && &buf[128..] == b"DICM";
    ensure!(found || option == ReadPreamble::Auto, MissingMagicCodeSnafu);
    if !found {
        tracing::debug!("No DICM code after preamble, reading from the start");
        from.seek(SeekFrom::Start(start))
            .context(ReadPreambleBytesSnafu)?;
    }
    Ok(())
}

impl DataSet {
    /// Parse a data set from the current position of `stream`,
    /// starting in the given transfer syntax,
    /// with the default transfer syntax registry.
    pub fn parse<S>(stream: S, ts: &TransferSyntax, options: ParseOptions) -> Result<DataSet>
    where
        S: Read + Seek,
    {
        Self::parse_with_registry(stream, ts, options, crate::mem::default_registry())
    }

    /// Parse a data set from the current position of `stream`,
    /// starting in the given transfer syntax.
    ///
    /// The whole data set is read to the end of the stream.
    /// Any malformed element fails the operation.
    pub fn parse_with_registry<S>(
        stream: S,
        ts: &TransferSyntax,
        options: ParseOptions,
        registry: Arc<TransferSyntaxRegistry>,
    ) -> Result<DataSet>
    where
        S: Read + Seek,
    {
        let parsed = DataSetReader::new(stream, &registry, ts.clone(), options)
            .context(ParseDataSetSnafu)?
            .read()
            .context(ParseDataSetSnafu)?;
        Ok(DataSet::from_parts(
            parsed.elements,
            parsed.transfer_syntax,
            registry,
        ))
    }

    /// Write the data set as a DICOM file:
    /// a 128-byte preamble, the `DICM` code,
    /// and the data set in its current transfer syntax,
    /// with the file meta group filled in.
    pub fn write_part10<W>(&mut self, mut to: W) -> Result<(), WriteError>
    where
        W: Write,
    {
        to.write_all(&[0; 128]).context(WritePreambleSnafu)?;
        to.write_all(b"DICM").context(WriteMagicCodeSnafu)?;
        self.fill_meta_group();
        let ts = self.transfer_syntax();
        self.write_stream_at(to, &ts, false, PREAMBLE_LEN)
    }

    /// Write the data set as a DICOM file at the given path,
    /// replacing any existing file.
    pub fn write_to_file<P>(&mut self, path: P) -> Result<(), WriteError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|_| WriteFileSnafu {
                filename: path.to_owned(),
            })?;
        }
        let file = File::create(path).with_context(|_| WriteFileSnafu {
            filename: path.to_owned(),
        })?;
        let mut to = BufWriter::new(file);
        self.write_part10(&mut to)?;
        to.flush().with_context(|_| WriteFileSnafu {
            filename: path.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ReadError;
    use dcmcodec_core::{DataElement, VR};
    use dcmcodec_dictionary_std::tags;
    use std::io::Cursor;

    fn meta_and_rows() -> Vec<u8> {
        #[rustfmt::skip]
        let data: &[u8] = &[
            // (0002,0010) UI "1.2.840.10008.1.2.1\0"
            0x02, 0x00, 0x10, 0x00, b'U', b'I', 0x14, 0x00,
            b'1', b'.', b'2', b'.', b'8', b'4', b'0', b'.', b'1', b'0',
            b'0', b'0', b'8', b'.', b'1', b'.', b'2', b'.', b'1', 0x00,
            // (0028,0010) US 2 | 16
            0x28, 0x00, 0x10, 0x00, b'U', b'S', 0x02, 0x00, 0x10, 0x00,
        ];
        data.to_vec()
    }

    #[test]
    fn detects_preamble() {
        let mut data = vec![0; 128];
        data.extend_from_slice(b"DICM");
        data.extend(meta_and_rows());
        let obj = from_reader(Cursor::new(&data)).unwrap();
        assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_LITTLE_ENDIAN);
        let rows = obj.element(tags::ROWS).unwrap();
        assert_eq!(rows.to_int::<u16>().unwrap(), 16);
        assert_eq!(rows.read_position(), Some(132 + 28));
    }

    #[test]
    fn reads_without_preamble() {
        let data = meta_and_rows();
        let obj = from_reader(Cursor::new(&data)).unwrap();
        assert_eq!(obj.element(tags::ROWS).unwrap().read_position(), Some(28));

        let err = OpenFileOptions::new()
            .read_preamble(ReadPreamble::Always)
            .from_reader(Cursor::new(&data))
            .unwrap_err();
        assert!(matches!(err, ReadError::MissingMagicCode { .. }));
    }

    #[test]
    fn part10_header() {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::SOP_CLASS_UID, VR::UI, "1.2.3"));
        obj.put(DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, "4.5.6"));
        obj.set_transfer_syntax(&entries::EXPLICIT_VR_BIG_ENDIAN);
        let mut out = Vec::new();
        obj.write_part10(&mut out).unwrap();

        assert!(out[..128].iter().all(|&b| b == 0));
        assert_eq!(&out[128..132], b"DICM");
        // (0002,0000) UL, little endian in any transfer syntax
        assert_eq!(&out[132..140], &[0x02, 0x00, 0x00, 0x00, b'U', b'L', 0x04, 0x00]);
        assert_eq!(
            obj.element(tags::FILE_META_INFORMATION_GROUP_LENGTH)
                .unwrap()
                .write_position(),
            Some(132)
        );
        assert_eq!(
            obj.element(tags::MEDIA_STORAGE_SOP_INSTANCE_UID)
                .unwrap()
                .to_str()
                .unwrap(),
            "4.5.6"
        );

        let back = from_reader(Cursor::new(&out)).unwrap();
        assert_eq!(back.transfer_syntax(), entries::EXPLICIT_VR_BIG_ENDIAN);
        assert_eq!(back.element(tags::SOP_CLASS_UID).unwrap().to_str().unwrap(), "1.2.3");
    }
}

//! Conversion of a data set between transfer syntaxes.
//!
//! A data set moves between two transfer syntaxes
//! of the same compression kind by relabeling alone.
//! Otherwise, compressed pixel data is first decoded
//! into a flat native buffer in explicit VR little endian,
//! which is then compressed frame by frame
//! if the target transfer syntax is compressed.
//! Going from one compression kind to another
//! always passes through native pixel data.
//!
//! RLE Lossless is decoded natively.
//! Every other compression kind is delegated
//! to the codec provider of the data set's transfer syntax registry.
use crate::DataSet;
use dcmcodec_core::value::{ConvertValueError, Value};
use dcmcodec_core::{DataElement, PrimitiveValue, Tag, VR};
use dcmcodec_dictionary_std::{tags, uids};
use dcmcodec_encoding::adapters::{DecodeError, EncodeError};
use dcmcodec_encoding::{CompressionKind, CompressionParams, FrameInfo, TransferSyntax};
use dcmcodec_pixeldata::{encapsulate, encapsulation, frame_fragments, native_frames, rle};
use dcmcodec_transfer_syntax_registry::entries::EXPLICIT_VR_LITTLE_ENDIAN;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::borrow::Cow;

#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// An error occurred during the data set transcoding process.
#[derive(Debug, Snafu)]
pub(crate) enum InnerError {
    #[snafu(display("Cannot convert pixel data from {} to {}", from, to))]
    UnsupportedCompression {
        from: CompressionKind,
        to: CompressionKind,
        backtrace: Backtrace,
    },

    #[snafu(display("Missing required attribute {}", tag))]
    MissingRequiredTag { tag: Tag, backtrace: Backtrace },

    #[snafu(display("Invalid value for attribute {}", tag))]
    InvalidAttribute {
        tag: Tag,
        source: ConvertValueError,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not decode {} frame", kind))]
    DecodeFrame {
        kind: CompressionKind,
        source: DecodeError,
    },

    #[snafu(display("Could not encode {} frame", kind))]
    EncodeFrame {
        kind: CompressionKind,
        source: EncodeError,
    },

    #[snafu(display("Could not decode RLE Lossless frame"))]
    DecodeRle {
        #[snafu(backtrace)]
        source: rle::Error,
    },

    #[snafu(display("Unexpected pixel data shape: {}", reason))]
    ShapeMismatch {
        reason: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("Could not split pixel data into frames"))]
    Frames {
        #[snafu(backtrace)]
        source: encapsulation::Error,
    },
}

/// The category of a transcoding error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The source pixel data cannot be decompressed,
    /// or the target compression cannot be produced.
    UnsupportedCompression,
    /// An attribute describing the image is missing.
    MissingRequiredTag,
    /// An attribute describing the image has an unusable value.
    InvalidAttribute,
    /// A codec failed on a frame.
    CodecFailure,
    /// The pixel data is not laid out as its attributes say.
    ShapeMismatch,
}

impl Error {
    /// Obtain the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self.0 {
            InnerError::UnsupportedCompression { .. } => ErrorKind::UnsupportedCompression,
            InnerError::MissingRequiredTag { .. } => ErrorKind::MissingRequiredTag,
            InnerError::InvalidAttribute { .. } => ErrorKind::InvalidAttribute,
            InnerError::DecodeFrame { .. }
            | InnerError::EncodeFrame { .. }
            | InnerError::DecodeRle { .. } => ErrorKind::CodecFailure,
            InnerError::ShapeMismatch { .. } | InnerError::Frames { .. } => {
                ErrorKind::ShapeMismatch
            }
        }
    }
}

/// Alias for the result of transcoding a data set.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The image attributes needed to process pixel data.
#[derive(Debug, Clone, PartialEq)]
struct Geometry {
    info: FrameInfo,
    frames: u32,
    has_frame_count: bool,
    photometric_interpretation: String,
}

/// Determine the encoder settings for the given target transfer syntax.
pub fn compression_params(ts: &TransferSyntax) -> CompressionParams {
    match ts.compression() {
        CompressionKind::JpegLossless | CompressionKind::JpegLossy => {
            let mode = match ts.uid() {
                uids::JPEG_EXTENDED12_BIT => 1,
                uids::JPEG_LOSSLESS | uids::JPEG_LOSSLESS_SV1 => 4,
                _ => 0,
            };
            CompressionParams::Jpeg {
                mode,
                predictor: 1,
                point_transform: 0,
            }
        }
        CompressionKind::JpegLsLossless => CompressionParams::JpegLs { allowed_error: 0 },
        CompressionKind::JpegLsLossy => CompressionParams::JpegLs { allowed_error: 1 },
        _ => CompressionParams::None,
    }
}

impl DataSet {
    /// Check whether the pixel data can be moved
    /// from the current transfer syntax to `ts`:
    /// the current compression must be decodable
    /// and the target compression must be encodable.
    pub fn can_change_transfer_syntax(&self, ts: &TransferSyntax) -> bool {
        let current = self.transfer_syntax();
        self.registry()
            .supports_decompression(current.compression())
            && self.registry().supports_compression(ts.compression())
    }

    /// Convert the data set to the given transfer syntax,
    /// decompressing and compressing the pixel data as needed.
    ///
    /// If decompression fails, the data set is left untouched.
    /// If compression fails,
    /// the data set is left with native pixel data
    /// in explicit VR little endian.
    pub fn change_transfer_syntax(&mut self, ts: &TransferSyntax) -> Result<()> {
        let current = self.transfer_syntax();
        if current.uid() == ts.uid() {
            return Ok(());
        }
        ensure!(
            self.can_change_transfer_syntax(ts),
            UnsupportedCompressionSnafu {
                from: current.compression(),
                to: ts.compression(),
            }
        );

        if current.compression() == ts.compression() {
            tracing::debug!(from = current.uid(), to = ts.uid(), "Relabeling data set");
            self.set_transfer_syntax(ts);
            return Ok(());
        }

        if current.is_compressed() {
            self.uncompress()?;
        }
        if ts.is_compressed() {
            self.compress(ts)
        } else {
            self.set_transfer_syntax(ts);
            Ok(())
        }
    }

    /// Decompress the pixel data into one native buffer,
    /// changing the transfer syntax to explicit VR little endian.
    ///
    /// Does nothing if the data set is not compressed.
    /// On failure the data set is left untouched.
    pub fn uncompress(&mut self) -> Result<()> {
        let kind = self.transfer_syntax().compression();
        if !kind.is_compressed() {
            return Ok(());
        }
        ensure!(
            self.registry().supports_decompression(kind),
            UnsupportedCompressionSnafu {
                from: kind,
                to: CompressionKind::None,
            }
        );

        let geometry = self.geometry()?;
        let native = self.decode_frames(kind, &geometry)?;

        self.put(DataElement::new(tags::PIXEL_DATA, VR::OB, native));
        self.set_transfer_syntax(&EXPLICIT_VR_LITTLE_ENDIAN);
        // RLE planes come out interleaved
        if kind == CompressionKind::Rle
            && geometry.info.samples_per_pixel > 1
            && geometry.info.planar_configuration != 0
        {
            self.put(DataElement::new(
                tags::PLANAR_CONFIGURATION,
                VR::US,
                PrimitiveValue::from(0_u16),
            ));
        }
        if geometry.info.samples_per_pixel == 3 && geometry.info.ybr {
            self.put(DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                "RGB",
            ));
        }
        Ok(())
    }

    /// Compress native pixel data into the given transfer syntax,
    /// one fragment per frame.
    fn compress(&mut self, ts: &TransferSyntax) -> Result<()> {
        let current = self.transfer_syntax();
        let kind = ts.compression();
        ensure!(
            !current.is_compressed() && self.registry().supports_compression(kind),
            UnsupportedCompressionSnafu {
                from: current.compression(),
                to: kind,
            }
        );

        let geometry = self.geometry()?;
        let fragments = self.encode_frames(kind, &geometry, &compression_params(ts))?;

        self.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            encapsulate(fragments),
        ));
        self.set_transfer_syntax(ts);
        if geometry.info.samples_per_pixel == 3 && geometry.photometric_interpretation == "RGB" {
            self.put(DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                "YBR_FULL_422",
            ));
        }
        Ok(())
    }

    fn decode_frames(&self, kind: CompressionKind, geometry: &Geometry) -> Result<Vec<u8>> {
        let value = self.pixel_data_value()?;
        let units = frame_fragments(
            &value,
            geometry.frames,
            geometry.has_frame_count,
        )
        .context(FramesSnafu)?
        .into_units();

        let info = &geometry.info;
        let mut native = Vec::with_capacity(info.frame_size() * units.len());
        for unit in units {
            let frame = match kind {
                CompressionKind::Rle => rle::decode_frame(&unit, info).context(DecodeRleSnafu)?,
                kind => self
                    .registry()
                    .codecs()
                    .decode(kind, &unit, info)
                    .context(DecodeFrameSnafu { kind })?,
            };
            native.extend(frame);
        }
        Ok(native)
    }

    fn encode_frames(
        &self,
        kind: CompressionKind,
        geometry: &Geometry,
        params: &CompressionParams,
    ) -> Result<Vec<Vec<u8>>> {
        let value = self.pixel_data_value()?;
        ensure!(
            geometry.has_frame_count || value.primitive().is_some(),
            ShapeMismatchSnafu {
                reason: "native pixel data in items without a number of frames",
            }
        );

        let info = &geometry.info;
        let frames = native_frames(&value, geometry.frames, info.frame_size()).context(FramesSnafu)?;
        let mut fragments = Vec::with_capacity(frames.len());
        for frame in frames {
            let fragment = self
                .registry()
                .codecs()
                .encode(kind, frame, info, params)
                .context(EncodeFrameSnafu { kind })?;
            fragments.push(fragment);
        }
        Ok(fragments)
    }

    /// The pixel data value, with words flattened to little endian bytes.
    fn pixel_data_value(&self) -> Result<Cow<'_, Value>> {
        let pixel_data = self
            .element_opt(tags::PIXEL_DATA)
            .context(MissingRequiredTagSnafu {
                tag: tags::PIXEL_DATA,
            })?;
        match pixel_data.value() {
            Value::Primitive(v) if v.bytes().is_none() => {
                let bytes = v.to_bytes().context(InvalidAttributeSnafu {
                    tag: tags::PIXEL_DATA,
                })?;
                Ok(Cow::Owned(Value::from(bytes.into_owned())))
            }
            value => Ok(Cow::Borrowed(value)),
        }
    }

    fn geometry(&self) -> Result<Geometry> {
        let bits_allocated = self.required_u16(tags::BITS_ALLOCATED)?;
        let columns = self.required_u16(tags::COLUMNS)?;
        let rows = self.required_u16(tags::ROWS)?;

        let frame_count = self.element_opt(tags::NUMBER_OF_FRAMES);
        let frames = frame_count
            .and_then(|e| e.to_int::<u32>().ok())
            .unwrap_or(1);
        let samples_per_pixel = self.optional_u16(tags::SAMPLES_PER_PIXEL, 1);
        let planar_configuration = self.optional_u16(tags::PLANAR_CONFIGURATION, 0);
        let photometric_interpretation = self
            .element_opt(tags::PHOTOMETRIC_INTERPRETATION)
            .and_then(|e| e.to_str().ok())
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let ybr = photometric_interpretation == "YBR_FULL"
            || photometric_interpretation == "YBR_FULL_422";

        Ok(Geometry {
            info: FrameInfo {
                bits_allocated,
                columns,
                rows,
                samples_per_pixel,
                planar_configuration,
                ybr,
            },
            frames,
            has_frame_count: frame_count.is_some(),
            photometric_interpretation,
        })
    }

    fn required_u16(&self, tag: Tag) -> Result<u16> {
        let element = self
            .element_opt(tag)
            .context(MissingRequiredTagSnafu { tag })?;
        let value = element
            .to_int::<u16>()
            .context(InvalidAttributeSnafu { tag })?;
        Ok(value)
    }

    fn optional_u16(&self, tag: Tag, default: u16) -> u16 {
        self.element_opt(tag)
            .and_then(|e| e.to_int::<u16>().ok())
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmcodec_transfer_syntax_registry::entries;
    use rstest::rstest;

    #[rstest]
    #[case::baseline(&entries::JPEG_BASELINE, CompressionParams::Jpeg { mode: 0, predictor: 1, point_transform: 0 })]
    #[case::extended(&entries::JPEG_EXTENDED, CompressionParams::Jpeg { mode: 1, predictor: 1, point_transform: 0 })]
    #[case::lossless(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL, CompressionParams::Jpeg { mode: 4, predictor: 1, point_transform: 0 })]
    #[case::lossless_sv1(&entries::JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION, CompressionParams::Jpeg { mode: 4, predictor: 1, point_transform: 0 })]
    #[case::jpeg_ls_lossless(&entries::JPEG_LS_LOSSLESS_IMAGE_COMPRESSION, CompressionParams::JpegLs { allowed_error: 0 })]
    #[case::jpeg_ls_lossy(&entries::JPEG_LS_LOSSY_IMAGE_COMPRESSION, CompressionParams::JpegLs { allowed_error: 1 })]
    #[case::jpeg_2000(&entries::JPEG_2000_IMAGE_COMPRESSION, CompressionParams::None)]
    fn params_by_transfer_syntax(#[case] ts: &TransferSyntax, #[case] expected: CompressionParams) {
        assert_eq!(compression_params(ts), expected);
    }

    fn image() -> DataSet {
        let mut obj = DataSet::new_empty();
        obj.put(DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(8_u16)));
        obj.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(3_u16)));
        obj.put(DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)));
        obj
    }

    #[test]
    fn geometry_defaults() {
        let mut obj = image();
        let geometry = obj.geometry().unwrap();
        assert_eq!(geometry.frames, 1);
        assert!(!geometry.has_frame_count);
        assert_eq!(geometry.info.samples_per_pixel, 1);
        assert_eq!(geometry.info.planar_configuration, 0);
        assert!(!geometry.info.ybr);
        assert_eq!(geometry.info.frame_size(), 6);

        obj.put(DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, "4 "));
        obj.put(DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(3_u16)));
        obj.put(DataElement::new(tags::PHOTOMETRIC_INTERPRETATION, VR::CS, "YBR_FULL_422"));
        let geometry = obj.geometry().unwrap();
        assert_eq!(geometry.frames, 4);
        assert!(geometry.has_frame_count);
        assert!(geometry.info.ybr);
        assert_eq!(geometry.info.frame_size(), 18);
    }

    #[test]
    fn geometry_requires_image_size() {
        let mut obj = image();
        obj.remove_element(tags::COLUMNS);
        let err = obj.geometry().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredTag);

        obj.put(DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::Empty));
        let err = obj.geometry().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidAttribute);
    }

    #[test]
    fn relabel_between_native_syntaxes() {
        let mut obj = image();
        obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, vec![1_u8, 2, 3, 4, 5, 6]));
        obj.change_transfer_syntax(&entries::EXPLICIT_VR_BIG_ENDIAN).unwrap();
        assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_BIG_ENDIAN);
        assert_eq!(
            obj.element(tags::PIXEL_DATA).unwrap().to_bytes().unwrap().as_ref(),
            &[1_u8, 2, 3, 4, 5, 6][..]
        );
        // uncompressing native data does nothing
        obj.uncompress().unwrap();
        assert_eq!(obj.transfer_syntax(), entries::EXPLICIT_VR_BIG_ENDIAN);
    }

    #[test]
    fn no_codec_for_jpeg() {
        let mut obj = image();
        obj.put(DataElement::new(tags::PIXEL_DATA, VR::OB, vec![1_u8, 2, 3, 4, 5, 6]));
        assert!(!obj.can_change_transfer_syntax(&entries::JPEG_BASELINE));
        let err = obj.change_transfer_syntax(&entries::JPEG_BASELINE).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedCompression);
        assert_eq!(obj.transfer_syntax(), entries::IMPLICIT_VR_LITTLE_ENDIAN);
    }
}

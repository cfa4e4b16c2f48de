use crate::config::{
    Compression, CompressionRequest, EncoderOptions, EncodingMode, PhotometricInterpretation,
    Predictor,
};
use crate::tags::TagId;
use crate::value::{TagEntry, TagValue};

use super::EntriesCollector;

/// Populate the pixel-format-derived entries: samples per pixel, bits per
/// sample, compression, photometric interpretation and (when applicable) the
/// predictor.
///
/// Entries are upserted, so they win over anything collected earlier under
/// the same tag. A predictor entry is only emitted when the flag is set and
/// the encoding mode supports it; an existing predictor entry is never
/// removed here.
pub fn process_image_format(collector: &mut EntriesCollector, options: &EncoderOptions) {
    collector.add(TagEntry::new(
        TagId::SamplesPerPixel,
        TagValue::Long(samples_per_pixel(options)),
    ));
    collector.add(TagEntry::new(
        TagId::BitsPerSample,
        TagValue::ShortArray(bits_per_sample(options)),
    ));
    collector.add(TagEntry::new(
        TagId::Compression,
        TagValue::Short(compression_code(options).into()),
    ));
    collector.add(TagEntry::new(
        TagId::PhotometricInterpretation,
        TagValue::Short(options.photometric_interpretation.into()),
    ));

    if options.use_horizontal_predictor && supports_predictor(options.mode) {
        collector.add(TagEntry::new(
            TagId::Predictor,
            TagValue::Short(Predictor::Horizontal.into()),
        ));
    }
}

/// Number of samples per pixel for the configured photometric interpretation.
pub fn samples_per_pixel(options: &EncoderOptions) -> u32 {
    match options.photometric_interpretation {
        PhotometricInterpretation::Rgb => 3,
        PhotometricInterpretation::PaletteColor
        | PhotometricInterpretation::BlackIsZero
        | PhotometricInterpretation::WhiteIsZero => 1,
        other => {
            log::debug!("no samples-per-pixel rule for {other:?}, assuming RGB");
            3
        }
    }
}

/// Bits per sample for the configured photometric interpretation.
///
/// Grayscale drops to a single bit in bi-level mode.
pub fn bits_per_sample(options: &EncoderOptions) -> Vec<u16> {
    match options.photometric_interpretation {
        PhotometricInterpretation::PaletteColor => vec![8],
        PhotometricInterpretation::Rgb => vec![8, 8, 8],
        PhotometricInterpretation::WhiteIsZero | PhotometricInterpretation::BlackIsZero => {
            if options.mode == EncodingMode::BiColor {
                vec![1]
            } else {
                vec![8]
            }
        }
        other => {
            log::debug!("no bits-per-sample rule for {other:?}, assuming RGB");
            vec![8, 8, 8]
        }
    }
}

/// Compression wire code for the requested compression and encoding mode.
///
/// Requests that are invalid for the mode fall back to `Compression::None`
/// rather than failing.
pub fn compression_code(options: &EncoderOptions) -> Compression {
    match options.compression {
        // Deflate and PackBits are allowed for all modes
        CompressionRequest::Deflate => Compression::Deflate,
        CompressionRequest::PackBits => Compression::PackBits,
        CompressionRequest::Lzw
            if matches!(
                options.mode,
                EncodingMode::Rgb | EncodingMode::Gray | EncodingMode::ColorPalette
            ) =>
        {
            Compression::Lzw
        }
        CompressionRequest::CcittGroup3Fax if options.mode == EncodingMode::BiColor => {
            Compression::CcittGroup3Fax
        }
        CompressionRequest::ModifiedHuffman if options.mode == EncodingMode::BiColor => {
            Compression::Ccitt1D
        }
        CompressionRequest::None => Compression::None,
        request => {
            log::debug!(
                "{request:?} is not supported for encoding mode {:?}, storing uncompressed",
                options.mode
            );
            Compression::None
        }
    }
}

// Horizontal differencing only applies to the continuous-tone modes.
fn supports_predictor(mode: EncodingMode) -> bool {
    matches!(
        mode,
        EncodingMode::Rgb | EncodingMode::Gray | EncodingMode::ColorPalette
    )
}

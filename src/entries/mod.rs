//! Tag-entry assembly for the metadata directory.
//!
//! Two independent passes populate one [`EntriesCollector`]:
//!
//! - [`process_general`] — dimensions, software, reconciled resolution, and
//!   (optionally) preserved frame tags
//! - [`process_image_format`] — pixel-format-derived entries, upserted so
//!   they win over duplicates
//!
//! [`collect_entries`] runs both against a fresh collector and is what the
//! encoder core calls before serializing the directory.

mod collector;
mod format;
mod general;

pub use collector::EntriesCollector;
pub use format::{bits_per_sample, compression_code, process_image_format, samples_per_pixel};
pub use general::{process_general, synch_resolution, SOFTWARE};

use crate::config::EncoderOptions;
use crate::metadata::SourceImage;
use crate::tags::KnownTags;

/// Assemble the full entry set for one encode operation.
///
/// Runs the general pass (with the standard tag classification) and the
/// image-format pass against a fresh collector. Resolution reconciliation
/// mutates `image.frame`.
pub fn collect_entries(
    image: &mut SourceImage,
    options: &EncoderOptions,
    preserve_metadata: bool,
) -> EntriesCollector {
    let mut collector = EntriesCollector::new();
    process_general(&mut collector, image, preserve_metadata, &KnownTags);
    process_image_format(&mut collector, options);
    collector
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompressionRequest, EncodingMode, PhotometricInterpretation};
    use crate::metadata::{PixelResolutionUnit, ResolutionUnit};
    use crate::tags::TagId;
    use crate::value::{Rational, TagValue};

    #[test]
    fn end_to_end_pixels_per_meter() {
        let mut image = SourceImage::new(100, 50);
        image.metadata.resolution_units = PixelResolutionUnit::PixelsPerMeter;
        image.metadata.horizontal_resolution = 200.0;
        image.metadata.vertical_resolution = 300.0;

        let options = EncoderOptions::default();
        let collector = collect_entries(&mut image, &options, false);

        assert_eq!(image.frame.resolution_unit, ResolutionUnit::Centimeter);
        assert_eq!(image.frame.horizontal_resolution, 2.0);
        assert_eq!(image.frame.vertical_resolution, 3.0);

        assert_eq!(
            collector.get(TagId::ImageWidth).unwrap().value(),
            &TagValue::Long(100)
        );
        assert_eq!(
            collector.get(TagId::ImageLength).unwrap().value(),
            &TagValue::Long(50)
        );
        assert_eq!(
            collector.get(TagId::XResolution).unwrap().value(),
            &TagValue::Rational(Rational::new(2, 1))
        );
        assert_eq!(
            collector.get(TagId::YResolution).unwrap().value(),
            &TagValue::Rational(Rational::new(3, 1))
        );
    }

    #[test]
    fn both_passes_populate_one_unique_tag_set() {
        let mut image = SourceImage::new(640, 480);
        let options = EncoderOptions {
            photometric_interpretation: PhotometricInterpretation::Rgb,
            mode: EncodingMode::Rgb,
            compression: CompressionRequest::Deflate,
            use_horizontal_predictor: true,
        };

        let collector = collect_entries(&mut image, &options, false);

        // width, length, software, x/y resolution, resolution unit,
        // samples, bits, compression, photometric, predictor
        assert_eq!(collector.len(), 11);

        let mut tags: Vec<u16> = collector.entries().iter().map(|e| e.tag()).collect();
        let total = tags.len();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), total);
    }
}

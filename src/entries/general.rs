use crate::metadata::{FrameMetadata, ImageMetadata, PixelResolutionUnit, ResolutionUnit, SourceImage};
use crate::tags::{TagClassifier, TagGroup, TagId};
use crate::value::{DataType, Rational, TagEntry, TagValue};

use super::EntriesCollector;

/// Value written into the Software tag.
pub const SOFTWARE: &str = env!("CARGO_PKG_NAME");

/// Populate dimension, software, resolution and (optionally) preserved
/// frame-metadata entries.
///
/// Resolution reconciliation writes the resolved unit and values back into
/// `image.frame` before the resolution entries are read from it. All entries
/// added here are known fresh except preserved tags, which skip anything
/// already collected (first writer wins).
pub fn process_general(
    collector: &mut EntriesCollector,
    image: &mut SourceImage,
    preserve_metadata: bool,
    classifier: &dyn TagClassifier,
) {
    collector.add_unconditional(TagEntry::new(TagId::ImageWidth, TagValue::Long(image.width)));
    collector.add_unconditional(TagEntry::new(TagId::ImageLength, TagValue::Long(image.height)));
    collector.add_unconditional(TagEntry::new(
        TagId::Software,
        TagValue::Ascii(SOFTWARE.to_string()),
    ));

    process_resolution(collector, &image.metadata, &mut image.frame);

    if preserve_metadata {
        process_metadata(collector, &image.frame, classifier);
    }
}

fn process_resolution(
    collector: &mut EntriesCollector,
    image_metadata: &ImageMetadata,
    frame: &mut FrameMetadata,
) {
    synch_resolution(image_metadata, frame);

    collector.add_unconditional(TagEntry::new(
        TagId::XResolution,
        TagValue::Rational(Rational::approximate(frame.horizontal_resolution)),
    ));
    collector.add_unconditional(TagEntry::new(
        TagId::YResolution,
        TagValue::Rational(Rational::approximate(frame.vertical_resolution)),
    ));
    collector.add_unconditional(TagEntry::new(
        TagId::ResolutionUnit,
        TagValue::Short(frame.resolution_unit.into()),
    ));
}

/// Reconcile the image-wide resolution representation with the frame's.
///
/// Maps the pixel resolution unit onto a TIFF resolution unit and rescales
/// pixels-per-meter to pixels-per-centimeter, then writes unit and both
/// resolutions back into the frame metadata.
pub fn synch_resolution(image_metadata: &ImageMetadata, frame: &mut FrameMetadata) {
    let mut xres = image_metadata.horizontal_resolution;
    let mut yres = image_metadata.vertical_resolution;

    match image_metadata.resolution_units {
        PixelResolutionUnit::AspectRatio => frame.resolution_unit = ResolutionUnit::None,
        PixelResolutionUnit::PixelsPerInch => frame.resolution_unit = ResolutionUnit::Inch,
        PixelResolutionUnit::PixelsPerCentimeter => {
            frame.resolution_unit = ResolutionUnit::Centimeter
        }
        PixelResolutionUnit::PixelsPerMeter => {
            frame.resolution_unit = ResolutionUnit::Centimeter;
            xres = meter_to_cm(xres);
            yres = meter_to_cm(yres);
        }
    }

    frame.horizontal_resolution = xres;
    frame.vertical_resolution = yres;
}

// Pixels per meter -> pixels per centimeter (1 m = 100 cm).
fn meter_to_cm(value: f64) -> f64 {
    value / 100.0
}

fn process_metadata(
    collector: &mut EntriesCollector,
    frame: &FrameMetadata,
    classifier: &dyn TagClassifier,
) {
    for entry in &frame.tags {
        // Sub-IFD pointers would dangle in the rewritten directory
        if entry.data_type() == DataType::Ifd {
            continue;
        }

        match classifier.group_of(entry.tag()) {
            TagGroup::Exif | TagGroup::Gps => continue,
            TagGroup::Ifd => {
                if !is_preservable(entry.tag()) {
                    continue;
                }
            }
        }

        if !collector.contains(entry.tag()) {
            log::debug!("preserving frame tag {:#06x}", entry.tag());
            collector.add_unconditional(entry.clone());
        }
    }
}

/// Allow-list of descriptive/administrative general-image tags that survive
/// re-encoding. Everything else in the general group is dropped.
fn is_preservable(tag: u16) -> bool {
    matches!(
        TagId::try_from(tag),
        Ok(TagId::DocumentName
            | TagId::ImageDescription
            | TagId::Make
            | TagId::Model
            | TagId::Software
            | TagId::DateTime
            | TagId::Artist
            | TagId::HostComputer
            | TagId::TargetPrinter
            | TagId::Xmp
            | TagId::Rating
            | TagId::RatingPercent
            | TagId::ImageId
            | TagId::Copyright
            | TagId::MdLabName
            | TagId::MdSampleInfo
            | TagId::MdPrepDate
            | TagId::MdPrepTime
            | TagId::MdFileUnits
            | TagId::SemInfo
            | TagId::XpTitle
            | TagId::XpComment
            | TagId::XpAuthor
            | TagId::XpKeywords
            | TagId::XpSubject)
    )
}

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// TIFF/EXIF tag identifiers this crate emits or preserves.
///
/// Tag numbers follow the TIFF 6.0 baseline plus the EXIF extensions the
/// metadata-preservation allow-list needs (XMP, Windows XP* descriptors,
/// the MD* microscopy tags and SEMInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum TagId {
    ImageWidth = 0x0100,
    ImageLength = 0x0101,
    BitsPerSample = 0x0102,
    Compression = 0x0103,
    PhotometricInterpretation = 0x0106,
    DocumentName = 0x010D,
    ImageDescription = 0x010E,
    Make = 0x010F,
    Model = 0x0110,
    SamplesPerPixel = 0x0115,
    XResolution = 0x011A,
    YResolution = 0x011B,
    ResolutionUnit = 0x0128,
    Software = 0x0131,
    DateTime = 0x0132,
    Artist = 0x013B,
    HostComputer = 0x013C,
    Predictor = 0x013D,
    TargetPrinter = 0x0151,
    Xmp = 0x02BC,
    Rating = 0x4746,
    RatingPercent = 0x4749,
    ImageId = 0x800D,
    Copyright = 0x8298,
    MdLabName = 0x82A8,
    MdSampleInfo = 0x82A9,
    MdPrepDate = 0x82AA,
    MdPrepTime = 0x82AB,
    MdFileUnits = 0x82AC,
    SemInfo = 0x8546,
    ExifIfdPointer = 0x8769,
    GpsIfdPointer = 0x8825,
    XpTitle = 0x9C9B,
    XpComment = 0x9C9C,
    XpAuthor = 0x9C9D,
    XpKeywords = 0x9C9E,
    XpSubject = 0x9C9F,
}

/// Semantic group a tag belongs to.
///
/// Mirrors the three-way split between the baseline image directory, the
/// EXIF (exposure/camera) sub-directory and the GPS sub-directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagGroup {
    /// General image tags (IFD0).
    Ifd,
    /// Exposure/camera tags (EXIF sub-IFD).
    Exif,
    /// GPS tags (GPS sub-IFD).
    Gps,
}

/// Classifies tags into their semantic group.
///
/// Injected into the general processor so tests can swap in their own
/// partition; [`KnownTags`] is the standard one.
pub trait TagClassifier {
    fn group_of(&self, tag: u16) -> TagGroup;
}

/// Standard classification by the EXIF tag-number layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownTags;

impl TagClassifier for KnownTags {
    fn group_of(&self, tag: u16) -> TagGroup {
        match tag {
            // GPS sub-IFD: GPSVersionID through GPSHPositioningError
            0x0000..=0x001F => TagGroup::Gps,
            // Exposure/camera blocks of the EXIF sub-IFD
            0x829A | 0x829D | 0x8822 | 0x8824 | 0x8827 | 0x8828 => TagGroup::Exif,
            0x8830..=0x8835 => TagGroup::Exif,
            0x9000..=0x9299 => TagGroup::Exif,
            0xA000..=0xA4FF => TagGroup::Exif,
            _ => TagGroup::Ifd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_partition() {
        let tags = KnownTags;
        // GPSLatitude
        assert_eq!(tags.group_of(0x0002), TagGroup::Gps);
        // ExposureTime, ISOSpeedRatings, DateTimeOriginal, LensModel
        assert_eq!(tags.group_of(0x829A), TagGroup::Exif);
        assert_eq!(tags.group_of(0x8827), TagGroup::Exif);
        assert_eq!(tags.group_of(0x9003), TagGroup::Exif);
        assert_eq!(tags.group_of(0xA434), TagGroup::Exif);
        // Baseline and descriptive tags stay in the general group
        assert_eq!(tags.group_of(TagId::ImageWidth.into()), TagGroup::Ifd);
        assert_eq!(tags.group_of(TagId::Copyright.into()), TagGroup::Ifd);
        assert_eq!(tags.group_of(TagId::XpTitle.into()), TagGroup::Ifd);
        assert_eq!(tags.group_of(TagId::SemInfo.into()), TagGroup::Ifd);
    }

    #[test]
    fn tag_ids_round_trip() {
        assert_eq!(u16::from(TagId::Xmp), 700);
        assert_eq!(u16::from(TagId::Copyright), 33432);
        assert_eq!(TagId::try_from(0x013Du16), Ok(TagId::Predictor));
        assert!(TagId::try_from(0xFFFFu16).is_err());
    }
}

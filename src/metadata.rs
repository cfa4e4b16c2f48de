//! Image and frame metadata as the entry assembly consumes it.
//!
//! These are the narrow views of the encoder's collaborators: the image-wide
//! resolution metadata (read-only) and the root frame's TIFF metadata, which
//! resolution reconciliation writes back into.

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::value::TagEntry;

/// TIFF resolution unit, with its wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum ResolutionUnit {
    /// No absolute unit; resolutions only express an aspect ratio.
    None = 1,
    Inch = 2,
    Centimeter = 3,
}

/// Resolution unit of the image-wide metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelResolutionUnit {
    AspectRatio,
    PixelsPerInch,
    PixelsPerCentimeter,
    PixelsPerMeter,
}

/// Image-wide resolution metadata. Read-only to this crate.
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub horizontal_resolution: f64,
    pub vertical_resolution: f64,
    pub resolution_units: PixelResolutionUnit,
}

impl Default for ImageMetadata {
    fn default() -> Self {
        Self {
            horizontal_resolution: 96.0,
            vertical_resolution: 96.0,
            resolution_units: PixelResolutionUnit::PixelsPerInch,
        }
    }
}

/// TIFF metadata of the root frame.
///
/// Resolution fields are written back by the reconciliation pass; `tags`
/// holds the frame's pre-existing entries, available for selective copy when
/// metadata preservation is requested.
#[derive(Debug, Clone)]
pub struct FrameMetadata {
    pub horizontal_resolution: f64,
    pub vertical_resolution: f64,
    pub resolution_unit: ResolutionUnit,
    pub tags: Vec<TagEntry>,
}

impl Default for FrameMetadata {
    fn default() -> Self {
        Self {
            horizontal_resolution: 96.0,
            vertical_resolution: 96.0,
            resolution_unit: ResolutionUnit::Inch,
            tags: Vec::new(),
        }
    }
}

/// The in-memory image being encoded: dimensions plus both metadata views.
#[derive(Debug, Clone, Default)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    pub metadata: ImageMetadata,
    pub frame: FrameMetadata,
}

impl SourceImage {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_unit_codes() {
        assert_eq!(u16::from(ResolutionUnit::None), 1);
        assert_eq!(u16::from(ResolutionUnit::Inch), 2);
        assert_eq!(u16::from(ResolutionUnit::Centimeter), 3);
    }

    #[test]
    fn defaults_are_96_dpi() {
        let image = SourceImage::new(640, 480);
        assert_eq!(image.metadata.horizontal_resolution, 96.0);
        assert_eq!(
            image.metadata.resolution_units,
            PixelResolutionUnit::PixelsPerInch
        );
        assert_eq!(image.frame.resolution_unit, ResolutionUnit::Inch);
        assert!(image.frame.tags.is_empty());
    }
}

use anyhow::{Context, Result};
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Photometric interpretation: how sample values map to color/intensity.
///
/// Wire codes per TIFF 6.0. The encoder only produces the first four;
/// the rest exist so decoded metadata can round-trip through the options.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoPrimitive, TryFromPrimitive,
)]
#[repr(u16)]
pub enum PhotometricInterpretation {
    WhiteIsZero = 0,
    BlackIsZero = 1,
    Rgb = 2,
    PaletteColor = 3,
    TransparencyMask = 4,
    Separated = 5,
    YCbCr = 6,
}

/// How the encoder lays out pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EncodingMode {
    /// Let the encoder pick from the pixel format.
    Default,
    Rgb,
    Gray,
    ColorPalette,
    /// 1 bit per pixel black and white.
    BiColor,
}

/// Compression the caller asked for.
///
/// Not every method is valid for every encoding mode; the derivation in
/// [`crate::entries::compression_code`] falls back to `None` when the
/// combination is unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionRequest {
    None,
    Deflate,
    PackBits,
    Lzw,
    CcittGroup3Fax,
    ModifiedHuffman,
}

/// Compression wire codes written into the Compression tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Compression {
    None = 1,
    /// CCITT Group 3 1-dimensional modified Huffman run-length encoding.
    Ccitt1D = 2,
    CcittGroup3Fax = 3,
    Lzw = 5,
    Deflate = 8,
    PackBits = 32773,
}

/// Predictor wire codes written into the Predictor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum Predictor {
    None = 1,
    Horizontal = 2,
}

/// Encoder configuration the format processor derives tag entries from.
///
/// # Example
///
/// ```rust
/// use tiff_entries::config::{
///     CompressionRequest, EncoderOptions, EncodingMode, PhotometricInterpretation,
/// };
///
/// let options = EncoderOptions {
///     photometric_interpretation: PhotometricInterpretation::Rgb,
///     mode: EncodingMode::Rgb,
///     compression: CompressionRequest::Lzw,
///     use_horizontal_predictor: true,
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderOptions {
    /// How sample values map to color.
    pub photometric_interpretation: PhotometricInterpretation,
    /// Pixel layout the encoder writes.
    pub mode: EncodingMode,
    /// Requested compression; validated against `mode` during derivation.
    pub compression: CompressionRequest,
    /// Apply horizontal differencing before compression (continuous-tone modes only).
    pub use_horizontal_predictor: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            photometric_interpretation: PhotometricInterpretation::Rgb,
            mode: EncodingMode::Rgb,
            compression: CompressionRequest::None,
            use_horizontal_predictor: false,
        }
    }
}

impl EncoderOptions {
    /// Load options from a JSON file, falling back to defaults when missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!(
                "Options file not found at {}. Using defaults.",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(path).context("Failed to read options file")?;
        let options: EncoderOptions =
            serde_json::from_str(&contents).context("Failed to parse options file")?;
        Ok(options)
    }

    /// Save options as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize options")?;
        std::fs::write(path, contents).context("Failed to write options file")?;
        log::info!("Options saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_codes() {
        assert_eq!(u16::from(PhotometricInterpretation::WhiteIsZero), 0);
        assert_eq!(u16::from(PhotometricInterpretation::Rgb), 2);
        assert_eq!(u16::from(Compression::None), 1);
        assert_eq!(u16::from(Compression::Ccitt1D), 2);
        assert_eq!(u16::from(Compression::Lzw), 5);
        assert_eq!(u16::from(Compression::Deflate), 8);
        assert_eq!(u16::from(Compression::PackBits), 32773);
        assert_eq!(u16::from(Predictor::Horizontal), 2);
    }

    #[test]
    fn load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let options = EncoderOptions::load(&dir.path().join("missing.json")).unwrap();
        assert_eq!(
            options.photometric_interpretation,
            PhotometricInterpretation::Rgb
        );
        assert_eq!(options.compression, CompressionRequest::None);
        assert!(!options.use_horizontal_predictor);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");

        let options = EncoderOptions {
            photometric_interpretation: PhotometricInterpretation::BlackIsZero,
            mode: EncodingMode::BiColor,
            compression: CompressionRequest::CcittGroup3Fax,
            use_horizontal_predictor: false,
        };
        options.save(&path).unwrap();

        let loaded = EncoderOptions::load(&path).unwrap();
        assert_eq!(
            loaded.photometric_interpretation,
            PhotometricInterpretation::BlackIsZero
        );
        assert_eq!(loaded.mode, EncodingMode::BiColor);
        assert_eq!(loaded.compression, CompressionRequest::CcittGroup3Fax);
    }
}

//! # tiff-entries
//!
//! Tag-entry assembly for a TIFF-style image encoder: given an in-memory
//! image, its frame metadata, and encoder configuration, produce the ordered,
//! deduplicated set of typed tag entries the metadata directory is
//! serialized from.
//!
//! This crate derives the pixel-format-dependent values (samples per pixel,
//! bits per sample, compression code, photometric interpretation, predictor),
//! reconciles the two resolution representations, and selectively carries
//! descriptive metadata forward. It does not serialize the directory, encode
//! pixels, or own the pixel buffer — those stay with the encoder core.
//!
//! ## Quick Start
//!
//! ```rust
//! use tiff_entries::config::{CompressionRequest, EncoderOptions, EncodingMode, PhotometricInterpretation};
//! use tiff_entries::entries::collect_entries;
//! use tiff_entries::metadata::SourceImage;
//!
//! let mut image = SourceImage::new(640, 480);
//!
//! let options = EncoderOptions {
//!     photometric_interpretation: PhotometricInterpretation::Rgb,
//!     mode: EncodingMode::Rgb,
//!     compression: CompressionRequest::Lzw,
//!     use_horizontal_predictor: true,
//! };
//!
//! let collector = collect_entries(&mut image, &options, true);
//! for entry in collector.entries() {
//!     println!("{:#06x} -> {:?}", entry.tag(), entry.value());
//! }
//! ```
//!
//! ## Lower-Level Usage
//!
//! The two passes are independent and can run in either order against the
//! same collector; format-derived entries use upsert so they win over
//! duplicates regardless:
//!
//! ```rust
//! use tiff_entries::config::EncoderOptions;
//! use tiff_entries::entries::{process_general, process_image_format, EntriesCollector};
//! use tiff_entries::metadata::SourceImage;
//! use tiff_entries::tags::KnownTags;
//!
//! let mut image = SourceImage::new(100, 50);
//! let options = EncoderOptions::default();
//!
//! let mut collector = EntriesCollector::new();
//! process_general(&mut collector, &mut image, false, &KnownTags);
//! process_image_format(&mut collector, &options);
//! ```
//!
//! ## Modules
//!
//! - [`config`] — encoder options and the compression/photometric enums
//! - [`entries`] — the collector and both processing passes
//! - [`metadata`] — image/frame metadata views and resolution units
//! - [`tags`] — tag identifiers and semantic-group classification
//! - [`value`] — typed tag values, entries, and rationals

pub mod config;
pub mod entries;
pub mod metadata;
pub mod tags;
pub mod value;

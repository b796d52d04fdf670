//! High-level facade crate for the `moravec-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the core detector types
//! - (feature-gated) end-to-end helpers that run the Moravec detector on an
//!   `image::GrayImage` or a raw grayscale buffer
//! - JSON config/report I/O, the plain-text point sink, and an overlay
//!   renderer for visual inspection of the detections
//!
//! ## Quickstart
//!
//! ```no_run
//! use moravec::detect;
//! use moravec::MoravecParams;
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("lena.tif")?.decode()?.to_luma8();
//! let params = MoravecParams::default();
//!
//! let points = detect::detect_points(&img, &params)?;
//! println!("detected: {}", points.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `moravec::core`: core types (window, view, response engine).
//! - `moravec::detect` (feature `image`): end-to-end helpers from `image::GrayImage`.
//! - `moravec::io`: JSON config/report and the `col, row` text sink.
//! - `moravec::overlay` (feature `image`): detected points rendered on the source.

pub use moravec_core as core;

pub use moravec_core::{CornerPoint, MoravecParams, Window, WindowError};

#[cfg(feature = "image")]
pub mod detect;
pub mod io;
#[cfg(feature = "image")]
pub mod overlay;

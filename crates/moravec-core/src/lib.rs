//! Core primitives for Moravec interest-point detection.
//!
//! # Overview
//!
//! This crate exposes two main building blocks:
//!
//! - [`window`] – construction of the square sampling window as a set of
//!   integer offsets around a center pixel.
//! - [`detect`] – the per-pixel corner response: for every candidate center,
//!   the minimum over the window of the directional sum of squared intensity
//!   differences, thresholded into a list of interest points.
//!
//! The response follows Moravec's original scheme: a flat patch has some
//! direction with near-zero intensity variation, an edge has low variation
//! along the edge, and only a corner-like structure has no low-variation
//! direction. Thresholding the *minimum* over directions therefore keeps
//! corners and drops both flat regions and straight edges.
//!
//! # Features
//!
//! - `rayon` – parallelizes the scan over image columns using the `rayon`
//!   crate. This does not change results or their ordering, only performance
//!   on multi-core machines.
//! - `tracing` – instruments the detection entry point with `tracing` spans
//!   and provides [`logger::init_tracing`] for subscriber setup.

pub mod detect;
pub mod directions;
pub mod image;
pub mod logger;
pub mod window;

use serde::{Deserialize, Serialize};

pub use detect::{detect, find_points, min_response, CornerPoint};
pub use directions::DIRECTIONS;
pub use image::{GrayImage, GrayImageView};
pub use window::{generate_window, Window, WindowError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::init_with_level;

/// Tunable parameters for Moravec interest-point detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoravecParams {
    /// Side length of the square sampling window in pixels (odd, >= 3).
    pub window_size: u32,
    /// Minimum corner response; pixels whose minimum directional response
    /// reaches this value are reported.
    pub threshold: f32,
    /// Drop repeated window offsets before scanning.
    ///
    /// The window generator emits offsets independently per direction ray and
    /// never suppresses repeats, so a repeated offset probes (and therefore
    /// weighs) its pixel more than once. Deduplication gives every window
    /// pixel equal weight instead; results can differ only for direction sets
    /// that actually produce repeats.
    #[serde(default)]
    pub dedup_offsets: bool,
}

impl Default for MoravecParams {
    fn default() -> Self {
        Self {
            window_size: 3,
            threshold: 3500.0,
            dedup_offsets: false,
        }
    }
}

impl MoravecParams {
    /// Build the sampling window described by these parameters.
    pub fn build_window(&self) -> Result<Window, WindowError> {
        let window = generate_window(self.window_size, &DIRECTIONS)?;
        Ok(if self.dedup_offsets {
            window.deduplicated()
        } else {
            window
        })
    }
}

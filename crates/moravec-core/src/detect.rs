//! Corner-response evaluation over a grayscale grid.
//!
//! The scan visits columns left to right and rows top to bottom within each
//! column, and the output preserves that order. Window offsets that fall
//! outside the grid are skipped, as are out-of-grid direction probes, so
//! centers near the right and bottom borders are evaluated on the truncated
//! window rather than rejected.

use crate::directions::DIRECTIONS;
use crate::image::GrayImageView;
use crate::window::{Window, WindowError};
use crate::MoravecParams;

use serde::{Deserialize, Serialize};

#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A detected interest point, in image coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CornerPoint {
    pub col: u32,
    pub row: u32,
}

/// Scan the grid and collect every pixel whose minimum directional response
/// reaches `threshold`.
///
/// Centers closer than `window.radius` to the top or left border are not
/// evaluated; the right and bottom borders are handled by skipping
/// out-of-grid samples instead. The comparison is `>=`, and no threshold
/// validation is performed: with a non-positive threshold every scanned
/// pixel is reported.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(img, window), fields(width = img.width, height = img.height))
)]
pub fn detect(img: &GrayImageView<'_>, window: &Window, threshold: f32) -> Vec<CornerPoint> {
    let cols = window.radius..img.width as i32;

    #[cfg(feature = "rayon")]
    let columns: Vec<Vec<CornerPoint>> = cols
        .into_par_iter()
        .map(|col| scan_column(img, window, threshold, col))
        .collect();

    #[cfg(not(feature = "rayon"))]
    let columns: Vec<Vec<CornerPoint>> = cols
        .map(|col| scan_column(img, window, threshold, col))
        .collect();

    columns.into_iter().flatten().collect()
}

/// Build the window described by `params` and run [`detect`].
pub fn find_points(
    img: &GrayImageView<'_>,
    params: &MoravecParams,
) -> Result<Vec<CornerPoint>, WindowError> {
    let window = params.build_window()?;
    Ok(detect(img, &window, params.threshold))
}

fn scan_column(
    img: &GrayImageView<'_>,
    window: &Window,
    threshold: f32,
    col: i32,
) -> Vec<CornerPoint> {
    let mut out = Vec::new();
    for row in window.radius..img.height as i32 {
        let e_min = min_response(img, window, col, row);
        if e_min as f32 >= threshold {
            out.push(CornerPoint {
                col: col as u32,
                row: row as u32,
            });
        }
    }
    out
}

/// Minimum over the window of the directional sum of squared differences for
/// the window centered at `(col, row)`.
///
/// Window offsets outside the grid contribute no candidate sum. If no offset
/// lands inside the grid at all the result stays at `u32::MAX`; during a
/// scan this cannot happen because the center offset is always in bounds.
#[inline]
pub fn min_response(img: &GrayImageView<'_>, window: &Window, col: i32, row: i32) -> u32 {
    let mut e_min = u32::MAX;

    for &(dx, dy) in &window.offsets {
        let px = col + dx;
        let py = row + dy;
        let Some(center) = img.get(px, py) else {
            continue;
        };

        let sum = sum_sq_diff(img, px, py, center);
        if sum < e_min {
            e_min = sum;
        }
    }

    e_min
}

// Sum of squared intensity differences between (px, py) and its 8 neighbors;
// probes outside the grid contribute zero. Bounded by 8 * 255^2, well inside
// u32.
#[inline]
fn sum_sq_diff(img: &GrayImageView<'_>, px: i32, py: i32, center: u8) -> u32 {
    let c = center as i32;
    let mut sum = 0u32;

    for &(vx, vy) in &DIRECTIONS {
        let Some(probe) = img.get(px + vx, py + vy) else {
            continue;
        };
        let diff = probe as i32 - c;
        sum += (diff * diff) as u32;
    }

    sum
}

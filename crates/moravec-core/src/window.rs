//! Sampling-window construction for the Moravec response.

/// Errors raised while constructing a sampling window.
///
/// Both variants are fatal configuration errors: no partial window is ever
/// produced, and detection never starts with an invalid size.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowError {
    #[error("window size must be odd (got {0})")]
    EvenSize(u32),
    #[error("window size must be at least 3 (got {0})")]
    TooSmall(u32),
}

/// Square sampling window, centered on a candidate pixel.
///
/// `offsets` holds every sampled displacement including `(0, 0)`; `radius`
/// is the scan margin: pixels closer than `radius` to the top or left image
/// border are never evaluated as window centers.
#[derive(Clone, Debug)]
pub struct Window {
    pub offsets: Vec<(i32, i32)>,
    pub radius: i32,
}

impl Window {
    /// Drop repeated offsets, keeping the first occurrence of each and the
    /// original order otherwise.
    ///
    /// The generator never suppresses repeats itself, so a repeated offset
    /// probes its pixel more than once during detection. For the standard
    /// 8-direction set the generated window is already repeat-free at every
    /// size; this is the explicit opt-out for direction sets that do repeat.
    pub fn deduplicated(mut self) -> Self {
        let mut seen = std::collections::HashSet::new();
        self.offsets.retain(|off| seen.insert(*off));
        self
    }
}

/// Generate the full set of window offsets for an odd `window_size`.
///
/// Starting from the unit `directions` plus the center, each direction is
/// scaled by every multiplier `k` up to the window radius. Scaled diagonal
/// rays leave gaps between lattice points, so for diagonal directions the
/// off-ray sites `(vx*k, vy*i)` and `(vx*i, vy*k)` are added as well; the
/// result covers every integer point of the `window_size` x `window_size`
/// square around the origin.
pub fn generate_window(
    window_size: u32,
    directions: &[(i32, i32)],
) -> Result<Window, WindowError> {
    if window_size % 2 == 0 {
        return Err(WindowError::EvenSize(window_size));
    }
    if window_size < 3 {
        return Err(WindowError::TooSmall(window_size));
    }

    let radius = ((window_size + 1) / 2 - 1) as i32;

    let mut offsets: Vec<(i32, i32)> = directions.to_vec();
    offsets.push((0, 0));

    for k in 2..=radius {
        for &(vx, vy) in directions {
            offsets.push((vx * k, vy * k));
            if vx.abs() == vy.abs() {
                for i in 1..k {
                    offsets.push((vx * k, vy * i));
                    offsets.push((vx * i, vy * k));
                }
            }
        }
    }

    Ok(Window { offsets, radius })
}

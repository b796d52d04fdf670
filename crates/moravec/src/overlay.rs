//! Render detected points on top of the source image.

use std::path::Path;

use image::{Rgb, RgbImage};
use moravec_core::CornerPoint;

const MARK_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
const MARK_RADIUS: i64 = 1;

/// Render the grayscale source as RGB with a small red square stamped on
/// every detected point.
pub fn render_overlay(img: &image::GrayImage, points: &[CornerPoint]) -> RgbImage {
    let mut out = RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let v = img.get_pixel(x, y).0[0];
        Rgb([v, v, v])
    });

    for p in points {
        stamp(&mut out, p.col as i64, p.row as i64);
    }

    out
}

/// Render the overlay and save it in one step.
pub fn save_overlay(
    path: impl AsRef<Path>,
    img: &image::GrayImage,
    points: &[CornerPoint],
) -> Result<(), image::ImageError> {
    render_overlay(img, points).save(path)
}

fn stamp(img: &mut RgbImage, cx: i64, cy: i64) {
    for dy in -MARK_RADIUS..=MARK_RADIUS {
        for dx in -MARK_RADIUS..=MARK_RADIUS {
            set_pixel(img, cx + dx, cy + dy, MARK_COLOR);
        }
    }
}

// Bounds-checked pixel write; marks near the border are clipped.
#[inline]
fn set_pixel(img: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && x < img.width() as i64 && y >= 0 && y < img.height() as i64 {
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: u32, height: u32, value: u8) -> image::GrayImage {
        image::GrayImage::from_pixel(width, height, image::Luma([value]))
    }

    #[test]
    fn points_are_stamped_in_red() {
        let img = gray(9, 9, 120);
        let out = render_overlay(&img, &[CornerPoint { col: 4, row: 4 }]);

        assert_eq!(out.get_pixel(4, 4), &MARK_COLOR);
        assert_eq!(out.get_pixel(3, 5), &MARK_COLOR);
        // outside the mark the source intensity is preserved
        assert_eq!(out.get_pixel(0, 0), &Rgb([120, 120, 120]));
    }

    #[test]
    fn border_marks_are_clipped() {
        let img = gray(5, 5, 0);
        let out = render_overlay(&img, &[CornerPoint { col: 0, row: 4 }]);

        assert_eq!(out.get_pixel(0, 4), &MARK_COLOR);
        assert_eq!(out.dimensions(), (5, 5));
    }
}

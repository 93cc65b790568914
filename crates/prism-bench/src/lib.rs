//! Benchmark fixtures for prism.
//!
//! Run with: `cargo bench -p prism-bench`

use prism_core::RgbImage;

/// Deterministic test image with smooth gradients and saturated corners.
pub fn test_image(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let wx = (width.max(2) - 1) as f64;
    let hy = (height.max(2) - 1) as f64;
    for y in 0..height {
        for x in 0..width {
            let u = x as f64 / wx;
            let v = y as f64 / hy;
            img.set_pixel(
                x,
                y,
                [
                    (u * 255.0).round() as u8,
                    (v * 255.0).round() as u8,
                    ((1.0 - u * v) * 255.0).round() as u8,
                ],
            );
        }
    }
    img
}

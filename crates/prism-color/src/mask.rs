//! Gamut mask overlay.

use prism_core::pixel::MAGENTA;
use prism_core::{Error, GamutMask, Rgb8, RgbImage};

/// Sentinel written over out-of-gamut pixels by [`overlay_mask`].
pub const OVERLAY_COLOR: Rgb8 = MAGENTA;

/// Overwrites every flagged pixel of `image` with [`OVERLAY_COLOR`].
///
/// Returns the number of pixels painted.
///
/// # Errors
///
/// [`Error::DimensionMismatch`] if the mask and image differ in size.
///
/// # Example
///
/// ```rust
/// use prism_color::mask::{OVERLAY_COLOR, overlay_mask};
/// use prism_core::{GamutMask, RgbImage};
///
/// let mut img = RgbImage::filled(2, 1, [10, 20, 30]);
/// let mask = GamutMask::from_flags(2, 1, vec![false, true]).unwrap();
/// assert_eq!(overlay_mask(&mut img, &mask).unwrap(), 1);
/// assert_eq!(img.pixel(1, 0), OVERLAY_COLOR);
/// assert_eq!(img.pixel(0, 0), [10, 20, 30]);
/// ```
pub fn overlay_mask(image: &mut RgbImage, mask: &GamutMask) -> Result<usize, Error> {
    overlay_mask_with(image, mask, OVERLAY_COLOR)
}

/// [`overlay_mask`] with a caller-chosen color.
pub fn overlay_mask_with(
    image: &mut RgbImage,
    mask: &GamutMask,
    color: Rgb8,
) -> Result<usize, Error> {
    if image.dimensions() != mask.dimensions() {
        return Err(Error::dimension_mismatch(
            image.dimensions(),
            mask.dimensions(),
        ));
    }

    let mut painted = 0;
    for (px, _) in image
        .as_raw_mut()
        .chunks_exact_mut(3)
        .zip(mask.flags())
        .filter(|(_, flag)| **flag)
    {
        px.copy_from_slice(&color);
        painted += 1;
    }
    Ok(painted)
}

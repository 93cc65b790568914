//! Raster containers.
//!
//! - [`RgbImage`] - interleaved 8-bit RGB, row-major, top-to-bottom
//! - [`GamutMask`] - one out-of-gamut flag per pixel
//!
//! Both are plain owned buffers. Conversion never mutates its input; it
//! produces a fresh [`RgbImage`] of the same size.

use crate::error::{Error, Result};
use crate::pixel::{BLACK, Rgb8};

/// Number of channels in an [`RgbImage`] pixel.
pub const CHANNELS: usize = 3;

/// Computes `width * height * channels` without overflow.
fn buffer_len(width: u32, height: u32, channels: usize) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| Error::invalid_dimensions(width, height, "size overflows usize"))
}

/// An 8-bit interleaved RGB raster.
///
/// Pixel `(x, y)` occupies bytes `[(y * width + x) * 3 .. + 3]`.
///
/// # Example
///
/// ```rust
/// use prism_core::RgbImage;
///
/// let mut img = RgbImage::new(4, 2);
/// img.set_pixel(3, 1, [10, 20, 30]);
/// assert_eq!(img.pixel(3, 1), [10, 20, 30]);
/// assert_eq!(img.as_raw().len(), 4 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbImage {
    /// Creates a black image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, BLACK)
    }

    /// Creates an image with every pixel set to `px`.
    ///
    /// # Panics
    ///
    /// Panics if `width * height * 3` overflows `usize`.
    pub fn filled(width: u32, height: u32, px: Rgb8) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Wraps an existing interleaved buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = buffer_len(width, height, CHANNELS)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Builds an image from a row-major list of pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the pixel count is not
    /// `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb8]) -> Result<Self> {
        let data = pixels.iter().flatten().copied().collect();
        Self::from_raw(width, height, data)
    }

    /// Checks that the image has a non-zero area.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyImage`] when width or height is zero.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(Error::empty_image(self.width, self.height));
        }
        Ok(())
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if width or height is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length of one row in bytes.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb8 {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgb8) {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&px);
    }

    /// Iterates pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| [c[0], c[1], c[2]])
    }

    /// Returns row `y` as interleaved bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        let stride = self.row_stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    /// Interleaved pixel bytes.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Mutable interleaved pixel bytes.
    #[inline]
    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Per-pixel out-of-gamut flags, same size as the image they describe.
///
/// `true` means the converted pixel fell outside the target gamut. Rendered
/// as an 8-bit image, out-of-gamut pixels are white and in-gamut pixels are
/// black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GamutMask {
    width: u32,
    height: u32,
    flags: Vec<bool>,
}

impl GamutMask {
    /// Creates a mask with every pixel in gamut.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            flags: vec![false; width as usize * height as usize],
        }
    }

    /// Wraps a row-major flag buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `flags.len()` is not
    /// `width * height`.
    pub fn from_flags(width: u32, height: u32, flags: Vec<bool>) -> Result<Self> {
        let expected = buffer_len(width, height, 1)?;
        if flags.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} flags, got {}", expected, flags.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            flags,
        })
    }

    /// Mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the pixel at `(x, y)` is out of gamut.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn is_out_of_gamut(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height);
        self.flags[y as usize * self.width as usize + x as usize]
    }

    /// Row-major flags.
    #[inline]
    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Number of out-of-gamut pixels.
    pub fn count_out_of_gamut(&self) -> usize {
        self.flags.iter().filter(|&&f| f).count()
    }

    /// Fraction of pixels out of gamut, `0.0` for an empty mask.
    pub fn out_of_gamut_ratio(&self) -> f64 {
        if self.flags.is_empty() {
            0.0
        } else {
            self.count_out_of_gamut() as f64 / self.flags.len() as f64
        }
    }

    /// Renders the mask as single-channel bytes: 255 where out of gamut,
    /// 0 elsewhere.
    pub fn to_luma8(&self) -> Vec<u8> {
        self.flags.iter().map(|&f| if f { 255 } else { 0 }).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let img = RgbImage::new(3, 2);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.pixel_count(), 6);
        assert!(img.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_raw_validates_len() {
        assert!(RgbImage::from_raw(2, 2, vec![0; 12]).is_ok());
        let err = RgbImage::from_raw(2, 2, vec![0; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes"));
    }

    #[test]
    fn test_from_pixels() {
        let img = RgbImage::from_pixels(2, 1, &[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(img.as_raw(), &[1, 2, 3, 4, 5, 6]);
        assert!(RgbImage::from_pixels(2, 2, &[[0; 3]]).is_err());
    }

    #[test]
    fn test_pixel_access() {
        let mut img = RgbImage::new(4, 3);
        img.set_pixel(2, 1, [7, 8, 9]);
        assert_eq!(img.pixel(2, 1), [7, 8, 9]);
        assert_eq!(&img.row(1)[6..9], &[7, 8, 9]);
    }

    #[test]
    fn test_pixels_iter_row_major() {
        let img = RgbImage::from_pixels(2, 2, &[[1, 1, 1], [2, 2, 2], [3, 3, 3], [4, 4, 4]])
            .unwrap();
        let firsts: Vec<u8> = img.pixels().map(|p| p[0]).collect();
        assert_eq!(firsts, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_validate_empty() {
        assert!(matches!(
            RgbImage::new(0, 5).validate(),
            Err(Error::EmptyImage { width: 0, height: 5 })
        ));
        assert!(RgbImage::new(5, 0).validate().is_err());
        assert!(RgbImage::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_mask_counts() {
        assert_eq!(GamutMask::new(2, 2).count_out_of_gamut(), 0);
        let mask = GamutMask::from_flags(2, 2, vec![false, true, true, false]).unwrap();
        assert!(mask.is_out_of_gamut(1, 0));
        assert!(mask.is_out_of_gamut(0, 1));
        assert!(!mask.is_out_of_gamut(0, 0));
        assert_eq!(mask.count_out_of_gamut(), 2);
        assert_eq!(mask.out_of_gamut_ratio(), 0.5);
    }

    #[test]
    fn test_mask_render() {
        let mask = GamutMask::from_flags(2, 1, vec![true, false]).unwrap();
        assert_eq!(mask.to_luma8(), vec![255, 0]);
    }

    #[test]
    fn test_mask_from_flags_validates() {
        assert!(GamutMask::from_flags(3, 3, vec![false; 8]).is_err());
        assert_eq!(GamutMask::new(0, 0).out_of_gamut_ratio(), 0.0);
    }
}

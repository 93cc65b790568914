//! Conversion engine.
//!
//! Every intent reduces to one 3x3 matrix on linear RGB, built once per
//! call:
//!
//! ```text
//! Absolute:   T = target.from_xyz * source.to_xyz
//! Relative:   T = target.from_xyz * source.to_xyz * A      (A: Bradford on RGB)
//! Perceptual: T = target.from_xyz * S * source.to_xyz      (S: extents ratio)
//! Saturation: T as Absolute, then HSL saturation taken from the source pixel
//! ```
//!
//! The per-pixel loop decodes with the source gamma, applies `T`,
//! classifies the result against the target gamut, encodes with the target
//! gamma and quantizes. Rows are processed in parallel with rayon.

use prism_core::pixel::{normalize, quantize};
use prism_core::{GamutMask, Rgb8, RgbImage};
use prism_math::{Mat3, Vec3};
use prism_primaries::{ColorProfile, ProfileMatrices};
use prism_transfer::TransferPolicy;
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::adapt::white_adaptation;
use crate::error::{ColorError, ColorResult, ProfileRole};
use crate::gamut::{out_of_gamut, perceptual_scale};
use crate::hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
use crate::intent::RenderingIntent;

/// Per-call conversion settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// How both profiles' gammas are applied.
    pub transfer: TransferPolicy,
}

impl ConvertOptions {
    /// Options with a specific transfer policy.
    pub fn with_transfer(transfer: TransferPolicy) -> Self {
        Self { transfer }
    }
}

/// Output of a conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// Converted image, same size as the input.
    pub image: RgbImage,
    /// Out-of-gamut flags from the colorimetric classification. For
    /// Saturation these describe the absolute pass, before the HSL restore.
    pub gamut_mask: Option<GamutMask>,
}

impl ConversionResult {
    /// Number of out-of-gamut pixels, if a mask was produced.
    pub fn out_of_gamut_count(&self) -> Option<usize> {
        self.gamut_mask.as_ref().map(GamutMask::count_out_of_gamut)
    }
}

/// A validated source/target pair with its pixel transform precomputed.
///
/// Build once and [`apply`](Conversion::apply) to any number of images.
///
/// # Example
///
/// ```rust
/// use prism_color::{Conversion, ConvertOptions, RenderingIntent};
/// use prism_core::RgbImage;
/// use prism_primaries::{ADOBE_RGB, SRGB};
///
/// let conv = Conversion::new(
///     &SRGB,
///     &ADOBE_RGB,
///     RenderingIntent::AbsoluteColorimetric,
///     ConvertOptions::default(),
/// )
/// .unwrap();
/// let (px, out) = conv.convert_pixel([255, 255, 255]);
/// assert!(!out);
/// assert!(px.iter().all(|&c| c >= 254));
///
/// let result = conv.apply(&RgbImage::filled(4, 4, [10, 200, 30])).unwrap();
/// assert!(result.gamut_mask.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    intent: RenderingIntent,
    transfer: TransferPolicy,
    source_gamma: f64,
    target_gamma: f64,
    matrix: Mat3,
}

impl Conversion {
    /// Validates both profiles and derives the pixel transform.
    ///
    /// # Errors
    ///
    /// [`ColorError::DegenerateProfile`] naming the failing side. The source
    /// profile is checked first.
    pub fn new(
        source: &ColorProfile,
        target: &ColorProfile,
        intent: RenderingIntent,
        options: ConvertOptions,
    ) -> ColorResult<Self> {
        let src = ProfileMatrices::new(source)
            .map_err(|e| ColorError::degenerate(ProfileRole::Source, e))?;
        let dst = ProfileMatrices::new(target)
            .map_err(|e| ColorError::degenerate(ProfileRole::Target, e))?;

        let matrix = match intent {
            RenderingIntent::AbsoluteColorimetric | RenderingIntent::Saturation => {
                dst.from_xyz * src.to_xyz
            }
            RenderingIntent::RelativeColorimetric => {
                // Adaptation runs on linear RGB, before the RGB -> XYZ step.
                dst.from_xyz * src.to_xyz * white_adaptation(source, target)?
            }
            RenderingIntent::Perceptual => {
                dst.from_xyz * perceptual_scale(&src.to_xyz, &dst.to_xyz)? * src.to_xyz
            }
        };

        debug!(
            %intent,
            transfer = %options.transfer,
            source_gamma = source.gamma,
            target_gamma = target.gamma,
            ?matrix,
            "Built pixel transform"
        );

        Ok(Self {
            intent,
            transfer: options.transfer,
            source_gamma: source.gamma,
            target_gamma: target.gamma,
            matrix,
        })
    }

    /// Rendering intent this conversion was built for.
    pub fn intent(&self) -> RenderingIntent {
        self.intent
    }

    /// Combined linear-RGB transform.
    pub fn matrix(&self) -> &Mat3 {
        &self.matrix
    }

    /// Converts a single pixel.
    ///
    /// Returns the encoded output and whether the colorimetric result fell
    /// outside the target gamut.
    pub fn convert_pixel(&self, px: Rgb8) -> (Rgb8, bool) {
        let linear = Vec3::from_array(normalize(px))
            .map(|v| self.transfer.linearize(v, self.source_gamma));
        let target = self.matrix * linear;
        let flagged = out_of_gamut(target);
        let encoded = quantize(
            target
                .map(|v| self.transfer.delinearize(v, self.target_gamma))
                .to_array(),
        );

        match self.intent {
            RenderingIntent::Saturation => (restore_saturation(px, encoded), flagged),
            _ => (encoded, flagged),
        }
    }

    /// Converts a whole image.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidImage`] for a zero-area image.
    pub fn apply(&self, source: &RgbImage) -> ColorResult<ConversionResult> {
        source.validate()?;

        let (width, height) = source.dimensions();
        trace!(width, height, intent = %self.intent, "Conversion::apply");

        let stride = source.row_stride();
        let mut data = vec![0u8; source.as_raw().len()];
        let mut flags = vec![false; source.pixel_count()];

        data.par_chunks_mut(stride)
            .zip(flags.par_chunks_mut(width as usize))
            .enumerate()
            .for_each(|(y, (row, row_flags))| {
                let src_row = source.row(y as u32);
                for (x, flag) in row_flags.iter_mut().enumerate() {
                    let i = x * 3;
                    let px = [src_row[i], src_row[i + 1], src_row[i + 2]];
                    let (out, flagged) = self.convert_pixel(px);
                    row[i..i + 3].copy_from_slice(&out);
                    *flag = flagged;
                }
            });

        let result = ConversionResult {
            image: RgbImage::from_raw(width, height, data)?,
            gamut_mask: Some(GamutMask::from_flags(width, height, flags)?),
        };
        debug!(
            width,
            height,
            intent = %self.intent,
            out_of_gamut = ?result.out_of_gamut_count(),
            "Converted image"
        );
        Ok(result)
    }
}

/// Keeps hue and lightness of the converted pixel, takes saturation from
/// the source pixel. Both are read as encoded 8-bit values.
fn restore_saturation(source: Rgb8, converted: Rgb8) -> Rgb8 {
    let src = rgb_to_hsl(normalize(source));
    let dst = rgb_to_hsl(normalize(converted));
    quantize(hsl_to_rgb(Hsl {
        h: dst.h,
        s: src.s,
        l: dst.l,
    }))
}

/// Converts `source` from one working space to another with default
/// options (power-law gamma).
///
/// # Errors
///
/// - [`ColorError::DegenerateProfile`] if either profile is unusable
/// - [`ColorError::InvalidImage`] if the image has zero area
///
/// # Example
///
/// ```rust
/// use prism_color::{RenderingIntent, convert};
/// use prism_core::RgbImage;
/// use prism_primaries::SRGB;
///
/// let img = RgbImage::filled(2, 2, [120, 60, 200]);
/// let out = convert(&img, &SRGB, &SRGB, RenderingIntent::AbsoluteColorimetric).unwrap();
/// assert_eq!(out.image, img);
/// assert_eq!(out.out_of_gamut_count(), Some(0));
/// ```
pub fn convert(
    source: &RgbImage,
    source_profile: &ColorProfile,
    target_profile: &ColorProfile,
    intent: RenderingIntent,
) -> ColorResult<ConversionResult> {
    convert_with_options(
        source,
        source_profile,
        target_profile,
        intent,
        ConvertOptions::default(),
    )
}

/// [`convert`] with explicit [`ConvertOptions`].
pub fn convert_with_options(
    source: &RgbImage,
    source_profile: &ColorProfile,
    target_profile: &ColorProfile,
    intent: RenderingIntent,
    options: ConvertOptions,
) -> ColorResult<ConversionResult> {
    Conversion::new(source_profile, target_profile, intent, options)?.apply(source)
}

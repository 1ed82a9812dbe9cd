//! Raster-to-RGBA rendering and PNG output.

use std::path::Path;

use image::RgbaImage;

use crate::scheme::{evaluate, ColorScheme, Rgb};
use boxdim_core::raster::{Raster, RasterElement};
use boxdim_core::{Error, Result};

/// Parameters for colormap rendering.
#[derive(Debug, Clone)]
pub struct ColormapParams {
    /// Color scheme to use.
    pub scheme: ColorScheme,
    /// Minimum value for normalization. Values below this are clamped.
    pub min: f64,
    /// Maximum value for normalization. Values above this are clamped.
    pub max: f64,
    /// Flip rows so the origin renders at the lower-left.
    pub flip_vertical: bool,
}

impl ColormapParams {
    /// Params for a binary occupancy grid: range [0, 1], lower-left origin.
    pub fn binary_grid(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            min: 0.0,
            max: 1.0,
            flip_vertical: true,
        }
    }

    /// Params with explicit min/max range, no flip.
    pub fn with_range(scheme: ColorScheme, min: f64, max: f64) -> Self {
        Self {
            scheme,
            min,
            max,
            flip_vertical: false,
        }
    }
}

impl Default for ColormapParams {
    fn default() -> Self {
        Self::binary_grid(ColorScheme::Binary)
    }
}

/// Convert a raster to an RGBA pixel buffer.
///
/// Returns a `Vec<u8>` of length `rows * cols * 4`. Output rows run top to
/// bottom; with `flip_vertical` the raster's row 0 lands at the bottom of
/// the image (lower-left origin).
///
/// Non-finite values render as white.
pub fn raster_to_rgba<T: RasterElement>(raster: &Raster<T>, params: &ColormapParams) -> Vec<u8> {
    let rows = raster.rows();
    let cols = raster.cols();
    let range = params.max - params.min;
    let inv_range = if range.abs() > f64::EPSILON {
        1.0 / range
    } else {
        1.0
    };

    let mut rgba = vec![0u8; rows * cols * 4];

    for out_row in 0..rows {
        let src_row = if params.flip_vertical {
            rows - 1 - out_row
        } else {
            out_row
        };

        for col in 0..cols {
            // In bounds by construction
            let value = unsafe { raster.get_unchecked(src_row, col) };
            let offset = (out_row * cols + col) * 4;

            let color = match value.to_f64() {
                Some(v) if v.is_finite() => {
                    let t = (v - params.min) * inv_range;
                    evaluate(params.scheme, t)
                }
                _ => Rgb::WHITE,
            };

            rgba[offset] = color.r;
            rgba[offset + 1] = color.g;
            rgba[offset + 2] = color.b;
            rgba[offset + 3] = 255;
        }
    }

    rgba
}

/// Render a raster into an [`RgbaImage`]
pub fn render_image<T: RasterElement>(raster: &Raster<T>, params: &ColormapParams) -> Result<RgbaImage> {
    let (rows, cols) = raster.shape();
    let rgba = raster_to_rgba(raster, params);

    RgbaImage::from_raw(cols as u32, rows as u32, rgba).ok_or(Error::InvalidDimensions {
        width: cols,
        height: rows,
    })
}

/// Render a raster and write it as a PNG file
pub fn write_png<T: RasterElement, P: AsRef<Path>>(
    raster: &Raster<T>,
    path: P,
    params: &ColormapParams,
) -> Result<()> {
    let img = render_image(raster, params)?;
    img.save(path.as_ref())
        .map_err(|e| Error::Other(format!("Cannot write PNG: {}", e)))
}

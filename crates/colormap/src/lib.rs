//! # BoxDim Colormap
//!
//! Color mapping and raster rendering for BoxDim.
//!
//! Converts the binary occupancy grid produced by the fractal pipeline into
//! an RGBA buffer or a PNG artifact. The default presentation matches the
//! usual rasterized-boundary plot: black cells on a white background with
//! the origin at the lower-left.
//!
//! ## Usage
//!
//! ```ignore
//! use boxdim_colormap::{write_png, ColormapParams};
//!
//! write_png(&analysis.grid, "boundary.png", &ColormapParams::default())?;
//! ```

mod render;
mod scheme;

pub use render::{raster_to_rgba, render_image, write_png, ColormapParams};
pub use scheme::{evaluate, ColorScheme, ColorStop, Rgb};

//! # BoxDim Algorithms
//!
//! Fractal-dimension estimation algorithms for BoxDim.
//!
//! The main entry point is [`fractal::box_counting_dimension`], which runs
//! the full pipeline on a unified geometry: coordinate extraction,
//! rasterization with thickening, multi-scale box counting and the log-log
//! fit. The individual stages are exported for direct use and testing.

pub mod fractal;
pub mod geometry;
mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::fractal::{
        box_count, box_counting_dimension, box_counts, box_sizes, estimate_dimension,
        extract_points, extract_sequences, normalize, rasterize, BoxCountSample,
        BoxCountingDimension, DimensionFit, FitResult, FractalAnalysis, FractalParams,
        RasterizeParams,
    };
    pub use crate::geometry::{boundary_length, vertex_count};
    pub use boxdim_core::prelude::*;
}

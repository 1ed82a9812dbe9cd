//! Raster data structures and operations

mod element;
mod grid;
mod neighborhood;

pub use element::RasterElement;
pub use grid::Raster;
pub use neighborhood::Neighborhood;

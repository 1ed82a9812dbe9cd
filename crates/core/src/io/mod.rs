//! I/O operations for reading geospatial vector data

mod geojson_io;

pub use geojson_io::{read_geojson, read_geojson_from_buffer};

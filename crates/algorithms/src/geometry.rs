//! Geometry diagnostics: vertex counts and boundary length
//!
//! Used by reporting to describe the loaded boundary before rasterization.

use geo::{Euclidean, Geometry, Length};

/// Total number of vertices in a geometry, rings included
pub fn vertex_count(geom: &Geometry<f64>) -> usize {
    match geom {
        Geometry::Point(_) => 1,
        Geometry::Line(_) => 2,
        Geometry::LineString(ls) => ls.0.len(),
        Geometry::MultiPoint(mp) => mp.0.len(),
        Geometry::MultiLineString(mls) => mls.0.iter().map(|ls| ls.0.len()).sum(),
        Geometry::Polygon(p) => {
            p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>()
        }
        Geometry::MultiPolygon(mp) => mp.0.iter().map(|p| {
            p.exterior().0.len() + p.interiors().iter().map(|r| r.0.len()).sum::<usize>()
        }).sum(),
        Geometry::GeometryCollection(gc) => gc.0.iter().map(vertex_count).sum(),
        Geometry::Rect(_) => 4,
        Geometry::Triangle(_) => 3,
    }
}

/// Total boundary length of a geometry in CRS units.
///
/// Lines contribute their Euclidean length, polygons the length of exterior
/// and interior rings. Point-like geometries contribute 0.
pub fn boundary_length(geom: &Geometry<f64>) -> f64 {
    match geom {
        Geometry::Line(l) => {
            let dx = l.end.x - l.start.x;
            let dy = l.end.y - l.start.y;
            (dx * dx + dy * dy).sqrt()
        }
        Geometry::LineString(ls) => ls.length::<Euclidean>(),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().map(|ls| ls.length::<Euclidean>()).sum()
        }
        Geometry::Polygon(p) => {
            let ext = p.exterior().length::<Euclidean>();
            let int: f64 = p.interiors().iter().map(|r| r.length::<Euclidean>()).sum();
            ext + int
        }
        Geometry::MultiPolygon(mp) => {
            mp.0.iter()
                .map(|p| {
                    let ext = p.exterior().length::<Euclidean>();
                    let int: f64 = p.interiors().iter().map(|r| r.length::<Euclidean>()).sum();
                    ext + int
                })
                .sum()
        }
        Geometry::GeometryCollection(gc) => gc.0.iter().map(boundary_length).sum(),
        _ => 0.0,
    }
}

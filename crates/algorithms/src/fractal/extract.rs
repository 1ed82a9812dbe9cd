//! Coordinate extraction from heterogeneous geometries
//!
//! Flattens a unified geometry into the ordered point set the rasterizer
//! consumes. Rings keep their closure vertex; nothing is deduplicated.

use boxdim_core::vector::geometry_kind;
use boxdim_core::{Error, Result};
use geo_types::{Coord, Geometry};

/// Extract ordered coordinate sequences from a geometry.
///
/// One sequence per line or ring:
/// - `LineString`: its vertex list
/// - `MultiLineString`: one sequence per component line, in order
/// - `Polygon`: exterior ring first, then interior rings in given order
/// - `MultiPolygon`: per polygon, exterior then interiors
/// - `GeometryCollection`: recursive extraction, member order preserved
///
/// Any other variant fails with [`Error::UnsupportedGeometry`] naming the kind.
pub fn extract_sequences(geometry: &Geometry<f64>) -> Result<Vec<Vec<Coord<f64>>>> {
    let mut sequences = Vec::new();

    match geometry {
        Geometry::LineString(line) => {
            sequences.push(line.0.clone());
        }
        Geometry::MultiLineString(lines) => {
            for line in &lines.0 {
                sequences.push(line.0.clone());
            }
        }
        Geometry::Polygon(polygon) => {
            sequences.push(polygon.exterior().0.clone());
            for interior in polygon.interiors() {
                sequences.push(interior.0.clone());
            }
        }
        Geometry::MultiPolygon(polygons) => {
            for polygon in &polygons.0 {
                sequences.push(polygon.exterior().0.clone());
                for interior in polygon.interiors() {
                    sequences.push(interior.0.clone());
                }
            }
        }
        Geometry::GeometryCollection(collection) => {
            for member in &collection.0 {
                sequences.extend(extract_sequences(member)?);
            }
        }
        other => {
            return Err(Error::UnsupportedGeometry(geometry_kind(other).to_string()));
        }
    }

    Ok(sequences)
}

/// Concatenate coordinate sequences into one flat point set.
///
/// Fails with [`Error::EmptyInput`] when the sequences hold no points.
pub fn flatten_points(sequences: &[Vec<Coord<f64>>]) -> Result<Vec<Coord<f64>>> {
    let total: usize = sequences.iter().map(|s| s.len()).sum();
    if total == 0 {
        return Err(Error::EmptyInput);
    }

    let mut points = Vec::with_capacity(total);
    for sequence in sequences {
        points.extend_from_slice(sequence);
    }
    Ok(points)
}

/// Extract and flatten in one step
pub fn extract_points(geometry: &Geometry<f64>) -> Result<Vec<Coord<f64>>> {
    let sequences = extract_sequences(geometry)?;
    flatten_points(&sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::{
        GeometryCollection, LineString, MultiLineString, MultiPolygon, Point, Polygon,
    };

    fn line(coords: &[(f64, f64)]) -> LineString<f64> {
        LineString::new(coords.iter().map(|&(x, y)| Coord { x, y }).collect())
    }

    fn ring(coords: &[(f64, f64)]) -> LineString<f64> {
        line(coords)
    }

    #[test]
    fn linestring_yields_one_sequence() {
        let geom = Geometry::LineString(line(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 1.0)]));
        let sequences = extract_sequences(&geom).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].len(), 4);
        // Vertex order preserved
        assert_eq!(sequences[0][3], Coord { x: 3.0, y: 1.0 });
    }

    #[test]
    fn multilinestring_yields_one_per_component() {
        let geom = Geometry::MultiLineString(MultiLineString::new(vec![
            line(&[(0.0, 0.0), (1.0, 0.0)]),
            line(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0)]),
        ]));
        let sequences = extract_sequences(&geom).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].len(), 2);
        assert_eq!(sequences[1].len(), 3);
    }

    #[test]
    fn polygon_yields_exterior_then_holes() {
        let exterior = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
        let hole_a = ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
        let hole_b = ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]);
        let geom = Geometry::Polygon(Polygon::new(exterior, vec![hole_a, hole_b]));

        let sequences = extract_sequences(&geom).unwrap();
        assert_eq!(sequences.len(), 3);
        // Exterior first, ring closure vertex kept
        assert_eq!(sequences[0].len(), 5);
        assert_eq!(sequences[0][0], sequences[0][4]);
        // Holes in input order
        assert_eq!(sequences[1][0], Coord { x: 1.0, y: 1.0 });
        assert_eq!(sequences[2][0], Coord { x: 5.0, y: 5.0 });
    }

    #[test]
    fn polygon_without_holes_yields_exactly_one() {
        let geom = Geometry::Polygon(Polygon::new(
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![],
        ));
        assert_eq!(extract_sequences(&geom).unwrap().len(), 1);
    }

    #[test]
    fn multipolygon_ordering() {
        let poly_a = Polygon::new(
            ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]),
            vec![ring(&[(0.2, 0.2), (0.4, 0.2), (0.4, 0.4), (0.2, 0.2)])],
        );
        let poly_b = Polygon::new(
            ring(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)]),
            vec![],
        );
        let geom = Geometry::MultiPolygon(MultiPolygon::new(vec![poly_a, poly_b]));

        let sequences = extract_sequences(&geom).unwrap();
        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[0][0], Coord { x: 0.0, y: 0.0 });
        assert_eq!(sequences[1][0], Coord { x: 0.2, y: 0.2 });
        assert_eq!(sequences[2][0], Coord { x: 5.0, y: 5.0 });
    }

    #[test]
    fn collection_extraction_is_concatenation() {
        let a = Geometry::LineString(line(&[(0.0, 0.0), (1.0, 1.0)]));
        let b = Geometry::Polygon(Polygon::new(
            ring(&[(2.0, 2.0), (3.0, 2.0), (3.0, 3.0), (2.0, 2.0)]),
            vec![],
        ));

        let separate: Vec<_> = [&a, &b]
            .into_iter()
            .flat_map(|g| extract_sequences(g).unwrap())
            .collect();

        let collected = Geometry::GeometryCollection(GeometryCollection::from(vec![
            a.clone(),
            b.clone(),
        ]));
        let together = extract_sequences(&collected).unwrap();

        assert_eq!(together, separate);
    }

    #[test]
    fn nested_collections_flatten_in_order() {
        let inner = Geometry::GeometryCollection(GeometryCollection::from(vec![
            Geometry::LineString(line(&[(1.0, 1.0), (2.0, 2.0)])),
        ]));
        let outer = Geometry::GeometryCollection(GeometryCollection::from(vec![
            Geometry::LineString(line(&[(0.0, 0.0), (1.0, 0.0)])),
            inner,
            Geometry::LineString(line(&[(3.0, 3.0), (4.0, 4.0)])),
        ]));

        let sequences = extract_sequences(&outer).unwrap();
        assert_eq!(sequences.len(), 3);
        assert_eq!(sequences[0][0], Coord { x: 0.0, y: 0.0 });
        assert_eq!(sequences[1][0], Coord { x: 1.0, y: 1.0 });
        assert_eq!(sequences[2][0], Coord { x: 3.0, y: 3.0 });
    }

    #[test]
    fn point_is_unsupported() {
        let geom = Geometry::Point(Point::new(1.0, 2.0));
        match extract_sequences(&geom) {
            Err(Error::UnsupportedGeometry(kind)) => assert_eq!(kind, "Point"),
            other => panic!("expected UnsupportedGeometry, got {:?}", other),
        }
    }

    #[test]
    fn empty_collection_flattens_to_empty_input() {
        let geom = Geometry::GeometryCollection(GeometryCollection::from(Vec::<Geometry<f64>>::new()));
        let sequences = extract_sequences(&geom).unwrap();
        assert!(sequences.is_empty());
        assert!(matches!(flatten_points(&sequences), Err(Error::EmptyInput)));
    }
}

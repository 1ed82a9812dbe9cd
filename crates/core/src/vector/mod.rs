//! Vector features and geometry unification
//!
//! Features wrap `geo-types` geometries with attributes. `unify` merges a
//! feature collection into the single geometry the fractal pipeline consumes:
//! polygon inputs are dissolved with boolean union, line inputs are grouped
//! into a `MultiLineString`, mixed inputs fall back to a `GeometryCollection`.

use geo::BooleanOps;
use geo_types::{Geometry, LineString, MultiLineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Attribute value types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttributeValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl From<&serde_json::Value> for AttributeValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    AttributeValue::Int(i)
                } else {
                    AttributeValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => AttributeValue::String(s.clone()),
            // Arrays and objects are stored as their JSON text
            other => AttributeValue::String(other.to_string()),
        }
    }
}

/// A geographic feature with geometry and attributes
#[derive(Debug, Clone)]
pub struct Feature {
    /// Feature geometry
    pub geometry: Option<Geometry<f64>>,
    /// Feature attributes
    pub properties: HashMap<String, AttributeValue>,
    /// Optional feature ID
    pub id: Option<String>,
}

impl Feature {
    /// Create a new feature with geometry
    pub fn new(geometry: Geometry<f64>) -> Self {
        Self {
            geometry: Some(geometry),
            properties: HashMap::new(),
            id: None,
        }
    }

    /// Create a feature with no geometry
    pub fn empty() -> Self {
        Self {
            geometry: None,
            properties: HashMap::new(),
            id: None,
        }
    }

    /// Set an attribute
    pub fn set_property(&mut self, key: impl Into<String>, value: AttributeValue) {
        self.properties.insert(key.into(), value);
    }

    /// Get an attribute
    pub fn get_property(&self, key: &str) -> Option<&AttributeValue> {
        self.properties.get(key)
    }
}

/// Collection of features
#[derive(Debug, Clone, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self { features: Vec::new() }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Geometry kind of the first feature, if any
    pub fn first_geometry_kind(&self) -> Option<&'static str> {
        self.features
            .iter()
            .find_map(|f| f.geometry.as_ref())
            .map(geometry_kind)
    }
}

impl IntoIterator for FeatureCollection {
    type Item = Feature;
    type IntoIter = std::vec::IntoIter<Feature>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.into_iter()
    }
}

/// Human-readable name of a geometry variant
pub fn geometry_kind(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// Merge all feature geometries into a single geometry.
///
/// Polygonal inputs are dissolved with boolean union; a union collapsing to
/// one polygon is returned as `Polygon`, otherwise `MultiPolygon`. Pure line
/// inputs become one `MultiLineString` with components in feature order.
/// Anything mixed is wrapped in a `GeometryCollection` in feature order.
///
/// Fails with [`Error::EmptyInput`] when no feature carries a geometry.
pub fn unify(collection: &FeatureCollection) -> Result<Geometry<f64>> {
    let geometries: Vec<&Geometry<f64>> = collection
        .iter()
        .filter_map(|f| f.geometry.as_ref())
        .collect();

    if geometries.is_empty() {
        return Err(Error::EmptyInput);
    }
    if geometries.len() == 1 {
        return Ok(geometries[0].clone());
    }

    let all_polygonal = geometries
        .iter()
        .all(|g| matches!(g, Geometry::Polygon(_) | Geometry::MultiPolygon(_)));
    if all_polygonal {
        let polygons: Vec<Polygon<f64>> = geometries
            .iter()
            .flat_map(|g| match g {
                Geometry::Polygon(p) => vec![p.clone()],
                Geometry::MultiPolygon(mp) => mp.0.clone(),
                _ => vec![],
            })
            .collect();
        return Ok(union_polygons(polygons));
    }

    let all_linear = geometries
        .iter()
        .all(|g| matches!(g, Geometry::LineString(_) | Geometry::MultiLineString(_)));
    if all_linear {
        let lines: Vec<LineString<f64>> = geometries
            .iter()
            .flat_map(|g| match g {
                Geometry::LineString(ls) => vec![ls.clone()],
                Geometry::MultiLineString(mls) => mls.0.clone(),
                _ => vec![],
            })
            .collect();
        return Ok(Geometry::MultiLineString(MultiLineString::new(lines)));
    }

    Ok(Geometry::GeometryCollection(
        geometries.into_iter().cloned().collect(),
    ))
}

/// Dissolve polygons with pairwise boolean union
fn union_polygons(polygons: Vec<Polygon<f64>>) -> Geometry<f64> {
    let mut iter = polygons.into_iter();
    let first = match iter.next() {
        Some(p) => MultiPolygon::new(vec![p]),
        None => return Geometry::MultiPolygon(MultiPolygon::new(vec![])),
    };

    let mut merged = iter.fold(first, |acc, p| acc.union(&MultiPolygon::new(vec![p])));

    if merged.0.len() == 1 {
        Geometry::Polygon(merged.0.remove(0))
    } else {
        Geometry::MultiPolygon(merged)
    }
}

//! GeoJSON reading
//!
//! Decoding is delegated to the `geojson` crate; geometries are converted
//! into `geo-types` and wrapped in [`Feature`]/[`FeatureCollection`].
//! A bare `Feature` or `Geometry` document is treated as a collection of one.

use std::fs;
use std::path::Path;

use geojson::GeoJson;

use crate::error::{Error, Result};
use crate::vector::{AttributeValue, Feature, FeatureCollection};

/// Read a GeoJSON file into a [`FeatureCollection`]
pub fn read_geojson<P: AsRef<Path>>(path: P) -> Result<FeatureCollection> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_geojson(&text)
}

/// Read GeoJSON from an in-memory buffer
///
/// Same as `read_geojson` but operates on bytes instead of a file path.
/// Useful for WASM environments where filesystem access is not available.
pub fn read_geojson_from_buffer(data: &[u8]) -> Result<FeatureCollection> {
    let text = std::str::from_utf8(data)
        .map_err(|e| Error::Parse(format!("Input is not valid UTF-8: {}", e)))?;
    parse_geojson(text)
}

fn parse_geojson(text: &str) -> Result<FeatureCollection> {
    let geojson: GeoJson = text
        .parse()
        .map_err(|e: geojson::Error| Error::Parse(e.to_string()))?;

    let mut collection = FeatureCollection::new();

    match geojson {
        GeoJson::FeatureCollection(fc) => {
            for feature in fc.features {
                collection.push(convert_feature(feature)?);
            }
        }
        GeoJson::Feature(feature) => {
            collection.push(convert_feature(feature)?);
        }
        GeoJson::Geometry(geometry) => {
            collection.push(Feature::new(convert_geometry(geometry)?));
        }
    }

    Ok(collection)
}

fn convert_feature(feature: geojson::Feature) -> Result<Feature> {
    let mut out = match feature.geometry {
        Some(geometry) => Feature::new(convert_geometry(geometry)?),
        None => Feature::empty(),
    };

    if let Some(properties) = feature.properties {
        for (key, value) in &properties {
            out.set_property(key.clone(), AttributeValue::from(value));
        }
    }

    out.id = feature.id.map(|id| match id {
        geojson::feature::Id::String(s) => s,
        geojson::feature::Id::Number(n) => n.to_string(),
    });

    Ok(out)
}

fn convert_geometry(geometry: geojson::Geometry) -> Result<geo_types::Geometry<f64>> {
    geo_types::Geometry::<f64>::try_from(geometry)
        .map_err(|e| Error::Parse(e.to_string()))
}

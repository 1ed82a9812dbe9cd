//! End-to-end flow: GeoJSON file in, dimension estimate and PNG artifact out

use boxdim_algorithms::fractal::{box_counting_dimension, FractalParams};
use boxdim_colormap::{write_png, ColormapParams};
use boxdim_core::io::read_geojson;
use boxdim_core::vector::{geometry_kind, unify};

/// GeoJSON document with one dense zigzag LineString feature
fn zigzag_document(points: usize) -> String {
    let coords: Vec<String> = (0..points)
        .map(|i| {
            let t = i as f64 / (points - 1) as f64;
            let y = t + 0.05 * (t * 60.0).sin();
            format!("[{:.6},{:.6}]", t, y)
        })
        .collect();

    format!(
        r#"{{
            "type": "FeatureCollection",
            "features": [
                {{
                    "type": "Feature",
                    "properties": {{ "name": "zigzag" }},
                    "geometry": {{ "type": "LineString", "coordinates": [{}] }}
                }}
            ]
        }}"#,
        coords.join(",")
    )
}

#[test]
fn analyze_flow_produces_dimension_and_png() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("export.geojson");
    std::fs::write(&input, zigzag_document(4000)).unwrap();

    let collection = read_geojson(&input).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.first_geometry_kind(), Some("LineString"));

    let geometry = unify(&collection).unwrap();
    assert_eq!(geometry_kind(&geometry), "LineString");

    let analysis = box_counting_dimension(
        &geometry,
        &FractalParams {
            resolution: 256,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(analysis.total_points, 4000);
    assert!(analysis.filled_pixels > 0);
    // A gently wiggling curve is still one-dimensional
    assert!(
        analysis.dimension > 0.8 && analysis.dimension < 1.5,
        "unexpected dimension {:.4}",
        analysis.dimension
    );

    let output = dir.path().join("boundary.png");
    write_png(&analysis.grid, &output, &ColormapParams::default()).unwrap();

    let metadata = std::fs::metadata(&output).unwrap();
    assert!(metadata.len() > 0);
}

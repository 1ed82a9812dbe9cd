//! Example: Box-counting a Koch-like curve
//!
//! This example demonstrates the fractal pipeline on a synthetic boundary
//! with a known dimension:
//! 1. Build a Koch curve by repeated segment subdivision
//! 2. Run the box-counting pipeline
//! 3. Compare the estimate against the analytic value log(4)/log(3) ~ 1.262

use boxdim_algorithms::fractal::{box_counting_dimension, FractalParams};
use geo_types::{Coord, Geometry, LineString};

fn main() {
    let curve = koch_curve(6);
    println!("Koch curve with {} vertices", curve.len());

    let geom = Geometry::LineString(LineString::new(curve));
    let analysis = box_counting_dimension(&geom, &FractalParams::default()).unwrap();

    println!(
        "Grid: {} x {}, filled pixels: {} ({:.2}%)",
        analysis.resolution,
        analysis.resolution,
        analysis.filled_pixels,
        100.0 * analysis.filled_pixels as f64
            / (analysis.resolution * analysis.resolution) as f64
    );

    println!("\nBox Size | Box Count");
    for sample in &analysis.samples {
        println!("{:8} | {:8}", sample.size, sample.count);
    }

    let expected = 4.0_f64.ln() / 3.0_f64.ln();
    println!("\nEstimated dimension: {:.4}", analysis.dimension);
    println!("Analytic dimension:  {:.4}", expected);
}

/// Koch curve vertices after `depth` subdivision rounds
fn koch_curve(depth: usize) -> Vec<Coord<f64>> {
    let mut points = vec![Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 0.0 }];

    for _ in 0..depth {
        let mut next = Vec::with_capacity(points.len() * 4);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let dx = (b.x - a.x) / 3.0;
            let dy = (b.y - a.y) / 3.0;

            let p1 = Coord { x: a.x + dx, y: a.y + dy };
            let p3 = Coord { x: a.x + 2.0 * dx, y: a.y + 2.0 * dy };
            // Apex of the equilateral bump, rotated +60 degrees
            let p2 = Coord {
                x: p1.x + dx * 0.5 - dy * 0.866_025_403_784,
                y: p1.y + dy * 0.5 + dx * 0.866_025_403_784,
            };

            next.push(a);
            next.push(p1);
            next.push(p2);
            next.push(p3);
        }
        next.push(*points.last().unwrap());
        points = next;
    }

    points
}

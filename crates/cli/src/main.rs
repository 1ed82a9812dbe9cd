//! BoxDim CLI - Box-counting fractal dimension of boundary geometries

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use boxdim_algorithms::fractal::{box_counting_dimension, FractalParams};
use boxdim_algorithms::geometry::{boundary_length, vertex_count};
use boxdim_colormap::{write_png, ColorScheme, ColormapParams};
use boxdim_core::io::read_geojson;
use boxdim_core::vector::{geometry_kind, unify, FeatureCollection};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "boxdim")]
#[command(author, version, about = "Box-counting fractal dimension of boundary geometries", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the fractal dimension of a vector boundary
    Analyze {
        /// Input GeoJSON file
        #[arg(default_value = "export.geojson")]
        input: PathBuf,
        /// Output PNG of the rasterized grid
        #[arg(short, long, default_value = "boundary.png")]
        output: PathBuf,
        /// Grid resolution N (grid is N x N)
        #[arg(short = 'n', long, default_value = "2048")]
        resolution: usize,
        /// Color scheme: binary, grayscale, heat
        #[arg(short, long, default_value = "binary")]
        scheme: String,
        /// Skip writing the PNG artifact
        #[arg(long)]
        no_image: bool,
    },
    /// Show information about a vector file
    Info {
        /// Input GeoJSON file
        #[arg(default_value = "export.geojson")]
        input: PathBuf,
    },
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_features(path: &PathBuf) -> Result<FeatureCollection> {
    let pb = spinner("Reading vector file...");
    let collection = read_geojson(path).context("Failed to read vector file")?;
    pb.finish_and_clear();
    info!("Input: {} ({} features)", path.display(), collection.len());
    Ok(collection)
}

fn parse_scheme(s: &str) -> Result<ColorScheme> {
    match s.to_lowercase().as_str() {
        "binary" | "bw" => Ok(ColorScheme::Binary),
        "grayscale" | "gray" => Ok(ColorScheme::Grayscale),
        "heat" => Ok(ColorScheme::Heat),
        _ => anyhow::bail!("Unknown scheme: {}. Use binary, grayscale, or heat.", s),
    }
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        // ── Analyze ──────────────────────────────────────────────────
        Commands::Analyze {
            input,
            output,
            resolution,
            scheme,
            no_image,
        } => {
            let scheme = parse_scheme(&scheme)?;
            let collection = read_features(&input)?;

            println!("Loaded vector file:");
            println!("  - Number of features: {}", collection.len());
            println!(
                "  - Geometry type: {}",
                collection.first_geometry_kind().unwrap_or("none")
            );

            let geometry = unify(&collection).context("Failed to unify geometries")?;
            println!("  - Unified type: {}", geometry_kind(&geometry));

            let pb = spinner("Rasterizing and box counting...");
            let start = Instant::now();
            let analysis = box_counting_dimension(
                &geometry,
                &FractalParams {
                    resolution,
                    ..Default::default()
                },
            )
            .context("Failed to estimate fractal dimension")?;
            let elapsed = start.elapsed();
            pb.finish_and_clear();

            println!("  - Total coordinate points: {}", analysis.total_points);
            println!(
                "  - Filled pixels: {} ({:.2}% of grid)",
                analysis.filled_pixels,
                100.0 * analysis.filled_pixels as f64
                    / (analysis.resolution * analysis.resolution) as f64
            );

            println!("\nBox-counting results:");
            println!("Box Size | Box Count");
            println!("{}", "-".repeat(25));
            for sample in &analysis.samples {
                println!("{:8} | {:8}", sample.size, sample.count);
            }

            println!("\nLog-space data:");
            println!("log(size) | log(count)");
            println!("{}", "-".repeat(25));
            for (log_size, log_count) in &analysis.log_points {
                println!("{:9.4} | {:9.4}", log_size, log_count);
            }

            println!("\n{}", "=".repeat(40));
            println!("Fractal Dimension = {:.4}", analysis.dimension);
            println!("{}", "=".repeat(40));
            println!("  Processing time: {:.2?}", elapsed);

            if !no_image {
                let pb = spinner("Writing image...");
                write_png(&analysis.grid, &output, &ColormapParams::binary_grid(scheme))
                    .context("Failed to write PNG")?;
                pb.finish_and_clear();
                println!(
                    "Rasterized boundary (D = {:.4}) saved to: {}",
                    analysis.dimension,
                    output.display()
                );
            }
        }

        // ── Info ─────────────────────────────────────────────────────
        Commands::Info { input } => {
            let collection = read_features(&input)?;

            println!("File: {}", input.display());
            println!("Features: {}", collection.len());
            println!(
                "Geometry type: {}",
                collection.first_geometry_kind().unwrap_or("none")
            );

            let geometry = unify(&collection).context("Failed to unify geometries")?;
            println!("Unified type: {}", geometry_kind(&geometry));
            println!("Vertices: {}", vertex_count(&geometry));
            println!("Boundary length: {:.6} (CRS units)", boundary_length(&geometry));
        }
    }

    Ok(())
}

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use polyprep::config::FileConfig;
use polyprep::geometry::{Bounds, Rescaler, min_separation};
use polyprep::ingest::load_polygon_set;
use polyprep::poly::write_poly;

/// Canonicalize delimited polygon dumps into solver-ready .poly files
///
/// Examples:
///   # Convert a dump, writing real.poly in the current directory
///   polyprep polygons.txt
///
///   # Rescale into the integer domain and pick the output path
///   polyprep polygons.txt --rescale -o scaled.poly
///
///   # Print per-polygon robustness diagnostics
///   polyprep polygons.txt --stats
#[derive(Parser, Debug)]
#[command(name = "polyprep")]
#[command(version, about, long_about = None)]
struct Args {
    /// Input polygon dump
    input: PathBuf,

    /// Output .poly file path (defaults to real.poly)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Apply uniform coordinate rescaling before writing
    #[arg(long)]
    rescale: bool,

    /// Scale factor for --rescale (defaults to 1e9)
    #[arg(long, allow_hyphen_values = true)]
    scale: Option<f64>,

    /// Print per-polygon bounding ranges and minimum vertex separation
    #[arg(long)]
    stats: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = FileConfig::load().unwrap_or_default();

    let output = args.output.clone().unwrap_or(file_config.output);
    let rescaler = Rescaler::new(args.scale.unwrap_or(file_config.scale_factor));
    let rescale = args.rescale || file_config.rescale;
    let verbose = args.verbose || file_config.verbose;

    if !args.input.exists() {
        bail!("Input file not found: {:?}", args.input);
    }

    if verbose {
        println!("Configuration:");
        println!("  Input: {}", args.input.display());
        println!("  Output: {}", output.display());
        println!("  Rescale: {}", if rescale { "enabled" } else { "disabled" });
        if rescale {
            println!("  Scale factor: {:e}", rescaler.scale_factor());
        }
        println!();
    }

    let set = load_polygon_set(&args.input)
        .with_context(|| format!("Failed to parse polygon dump: {}", args.input.display()))?;
    println!(
        "Parsed {} canonical polygons ({} vertices total)",
        set.len(),
        set.iter().map(|p| p.len()).sum::<usize>()
    );

    if args.stats || verbose {
        print_stats(&set);
    }

    let set = if rescale {
        let scaled = rescaler.rescale(&set);
        println!("Rescaled coordinates by {:e}", rescaler.scale_factor());
        scaled
    } else {
        set
    };

    write_poly(&output, &set)
        .with_context(|| format!("Failed to write poly file: {}", output.display()))?;

    println!("Output: {}", output.display());

    Ok(())
}

fn print_stats(set: &polyprep::domain::PolygonSet) {
    println!("Robustness diagnostics:");
    for (i, polygon) in set.iter().enumerate() {
        let Some(bounds) = Bounds::from_polygon(polygon) else {
            continue;
        };
        let eps = min_separation(polygon);
        print!(
            "  [{}] {} vertices, x [{:.6}, {:.6}], y [{:.6}, {:.6}], span {:.6} x {:.6}",
            i,
            polygon.len(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            bounds.width(),
            bounds.height()
        );
        match eps {
            Some(e) => println!(", min separation {:e}", e),
            None => println!(),
        }
    }
    println!();
}

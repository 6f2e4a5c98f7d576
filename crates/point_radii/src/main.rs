//! Point cloud radius deriver.
//!
//! Reads a `latitude longitude elevation intensity` point file, normalizes it
//! into the unit cube, indexes it in an octree and derives a per-point radius
//! (half the distance to the nearest other point).

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use point_octree::{PointCloud, NO_NEIGHBOR_RADIUS};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use config::Config;

/// Per-point radius derivation for geodetic point clouds.
#[derive(Parser, Debug)]
#[command(name = "point_radii")]
#[command(about = "Derives nearest-neighbor radii for a point file")]
struct Args {
	/// Point file, one `latitude longitude elevation intensity` record per line.
	input: PathBuf,

	/// Path to configuration TOML file.
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Override the leaf capacity from the config file.
	#[arg(long)]
	max_points_per_leaf: Option<usize>,

	/// Derive radii on the calling thread only.
	#[arg(long)]
	sequential: bool,

	/// Write radii, one per line, to this file.
	#[arg(short, long)]
	output: Option<PathBuf>,

	/// Log construction phases.
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let level = if args.verbose {
		tracing::Level::DEBUG
	} else {
		tracing::Level::WARN
	};
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_writer(std::io::stderr)
		.init();

	let mut config = match &args.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};
	if let Some(max_points_per_leaf) = args.max_points_per_leaf {
		if max_points_per_leaf == 0 {
			anyhow::bail!("--max-points-per-leaf must be at least 1");
		}
		config.max_points_per_leaf = max_points_per_leaf;
	}
	if args.sequential {
		config.parallel = false;
	}

	println!("Loading points from: {}", args.input.display());
	let cloud = PointCloud::load(&args.input, &config.options())
		.with_context(|| format!("Failed to load point cloud: {}", args.input.display()))?;

	print_summary(&cloud);

	if let Some(output) = &args.output {
		write_radii(cloud.radii(), output)?;
		println!("\nRadii written to: {}", output.display());
	}

	Ok(())
}

fn print_summary(cloud: &PointCloud) {
	println!("Points: {}", cloud.len());

	if let Some(bounds) = cloud.geodetic_bounds() {
		println!(
			"  latitude  [{}, {}]\n  longitude [{}, {}]\n  elevation [{}, {}]",
			bounds.latitude.min,
			bounds.latitude.max,
			bounds.longitude.min,
			bounds.longitude.max,
			bounds.elevation.min,
			bounds.elevation.max,
		);
	}

	println!("Octree: {}", cloud.index().stats());

	match RadiusSummary::from_radii(cloud.radii()) {
		Some(summary) => println!(
			"Radius: min {:.6}, mean {:.6}, max {:.6} ({} isolated)",
			summary.min, summary.mean, summary.max, summary.isolated
		),
		None => println!("Radius: no point has a neighbor"),
	}

	let stats = cloud.load_stats();
	println!(
		"Timing: normalize {:.2?}, index {:.2?}, radii {:.2?}, total {:.2?}",
		stats.normalize_time,
		stats.index_time,
		stats.radius_time,
		stats.total()
	);
}

/// Min/mean/max over finite radii.
#[derive(Debug, PartialEq)]
struct RadiusSummary {
	min: f32,
	mean: f64,
	max: f32,
	isolated: usize,
}

impl RadiusSummary {
	fn from_radii(radii: &[f32]) -> Option<Self> {
		let mut min = f32::INFINITY;
		let mut max = 0.0f32;
		let mut sum = 0.0f64;
		let mut count = 0usize;

		for &radius in radii.iter().filter(|&&r| r != NO_NEIGHBOR_RADIUS) {
			min = min.min(radius);
			max = max.max(radius);
			sum += f64::from(radius);
			count += 1;
		}

		(count > 0).then(|| Self {
			min,
			mean: sum / count as f64,
			max,
			isolated: radii.len() - count,
		})
	}
}

fn write_radii(radii: &[f32], path: &Path) -> Result<()> {
	let file = std::fs::File::create(path)
		.with_context(|| format!("Failed to create output file: {}", path.display()))?;
	let mut writer = BufWriter::new(file);
	for radius in radii {
		writeln!(writer, "{}", radius).with_context(|| format!("Failed to write: {}", path.display()))?;
	}
	writer
		.flush()
		.with_context(|| format!("Failed to write: {}", path.display()))?;
	Ok(())
}

//! Configuration parsing for radius derivation.

use anyhow::{Context, Result};
use point_octree::{
	OctreeConfig, PointCloudOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_POINTS_PER_LEAF, MAX_DEPTH_LIMIT,
};
use serde::Deserialize;
use std::path::Path;

/// Root configuration. Every field is optional in the TOML file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Leaf capacity before a node is split.
	pub max_points_per_leaf: usize,
	/// Subdivision depth limit.
	pub max_depth: u32,
	/// Derive radii on all cores.
	pub parallel: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			max_points_per_leaf: DEFAULT_MAX_POINTS_PER_LEAF,
			max_depth: DEFAULT_MAX_DEPTH,
			parallel: true,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		Self::parse(&content)
	}

	/// Parse and validate configuration text.
	pub fn parse(content: &str) -> Result<Self> {
		let config: Config = toml::from_str(content).with_context(|| "Failed to parse config TOML")?;

		if config.max_points_per_leaf == 0 {
			anyhow::bail!("max_points_per_leaf must be at least 1");
		}
		if config.max_depth == 0 || config.max_depth > MAX_DEPTH_LIMIT {
			anyhow::bail!(
				"max_depth must be in 1..={}, got {}",
				MAX_DEPTH_LIMIT,
				config.max_depth
			);
		}

		Ok(config)
	}

	pub fn options(&self) -> PointCloudOptions {
		PointCloudOptions {
			octree: OctreeConfig::default()
				.with_max_points_per_leaf(self.max_points_per_leaf)
				.with_max_depth(self.max_depth),
			parallel_radii: self.parallel,
		}
	}
}

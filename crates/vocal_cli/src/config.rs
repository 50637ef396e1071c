//! Session configuration parsing.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use vocal_core::{Calibration, Color, EdgeRef, ImageDims, SceneConfig};

/// Root configuration for one measurement run.
#[derive(Debug, Deserialize)]
pub struct Config {
	/// Dimensions of the source image.
	pub image: ImageSection,
	/// Physical voxel spacing (default: uncalibrated).
	#[serde(default)]
	pub calibration: CalibrationSection,
	/// Scene construction parameters.
	#[serde(default)]
	pub scene: SceneSection,
	/// Color classes, created in order. The last one is current after setup.
	#[serde(default)]
	pub classes: Vec<ClassConfig>,
	/// Picks replayed against the ledger, in order.
	#[serde(default)]
	pub picks: Vec<PickConfig>,
	/// Optional slice window for the visibility report.
	#[serde(default)]
	pub view: Option<ViewSection>,
}

#[derive(Debug, Deserialize)]
pub struct ImageSection {
	pub width: u32,
	pub height: u32,
	pub depth: u32,
}

#[derive(Debug, Deserialize)]
pub struct CalibrationSection {
	#[serde(default = "default_spacing")]
	pub pixel_width: f64,
	#[serde(default = "default_spacing")]
	pub pixel_height: f64,
	#[serde(default = "default_spacing")]
	pub pixel_depth: f64,
	#[serde(default = "default_units")]
	pub units: String,
}

impl Default for CalibrationSection {
	fn default() -> Self {
		Self {
			pixel_width: default_spacing(),
			pixel_height: default_spacing(),
			pixel_depth: default_spacing(),
			units: default_units(),
		}
	}
}

#[derive(Debug, Deserialize)]
pub struct SceneSection {
	#[serde(default = "default_scale")]
	pub scale: f32,
	/// Unassigned edge color [R, G, B].
	#[serde(default = "default_edge_color")]
	pub edge_color: [u8; 3],
	#[serde(default = "default_thickness")]
	pub edge_thickness: f32,
	#[serde(default = "default_thickness")]
	pub vertex_thickness: f32,
}

impl Default for SceneSection {
	fn default() -> Self {
		Self {
			scale: default_scale(),
			edge_color: default_edge_color(),
			edge_thickness: default_thickness(),
			vertex_thickness: default_thickness(),
		}
	}
}

/// A named color class.
#[derive(Debug, Deserialize)]
pub struct ClassConfig {
	pub name: String,
	/// Class color [R, G, B]. Must be unique.
	pub color: [u8; 3],
}

/// One pick: select `class`, then toggle the edge.
#[derive(Debug, Deserialize)]
pub struct PickConfig {
	pub class: String,
	pub tree: usize,
	pub edge: usize,
	/// Voxel size of the edge (default: endpoints plus slabs).
	pub voxels: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ViewSection {
	/// Inclusive slice range [first, last].
	pub slices: [i32; 2],
}

fn default_spacing() -> f64 {
	1.0
}

fn default_units() -> String {
	"pixel".to_string()
}

fn default_scale() -> f32 {
	1.5
}

fn default_edge_color() -> [u8; 3] {
	[255, 255, 255]
}

fn default_thickness() -> f32 {
	2.0
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

		config.image_dims().validate()?;
		config.calibration().validate()?;
		config.scene_config().validate()?;

		let mut names = HashSet::new();
		let mut colors = HashSet::new();
		for class in &config.classes {
			if !names.insert(class.name.as_str()) {
				anyhow::bail!("Duplicate class name: {}", class.name);
			}
			if !colors.insert(class.color) {
				anyhow::bail!(
					"Class '{}' reuses color {}",
					class.name,
					Color::from(class.color)
				);
			}
		}
		for pick in &config.picks {
			if !names.contains(pick.class.as_str()) {
				anyhow::bail!("Pick of edge {}:{} names unknown class '{}'", pick.tree, pick.edge, pick.class);
			}
		}
		if let Some(view) = &config.view {
			if view.slices[0] > view.slices[1] {
				anyhow::bail!(
					"View slice range is reversed: {}..={}",
					view.slices[0],
					view.slices[1]
				);
			}
		}

		Ok(config)
	}

	pub fn image_dims(&self) -> ImageDims {
		ImageDims::new(self.image.width, self.image.height, self.image.depth)
	}

	pub fn calibration(&self) -> Calibration {
		let c = &self.calibration;
		Calibration::new(c.pixel_width, c.pixel_height, c.pixel_depth, c.units.clone())
	}

	pub fn scene_config(&self) -> SceneConfig {
		SceneConfig::new()
			.with_scale(self.scene.scale)
			.with_edge_color(Color::from(self.scene.edge_color))
			.with_edge_thickness(self.scene.edge_thickness)
			.with_vertex_thickness(self.scene.vertex_thickness)
	}
}

impl PickConfig {
	pub fn edge_ref(&self) -> EdgeRef {
		EdgeRef::new(self.tree, self.edge)
	}
}

//! Batch measurement: build the scene for a forest, replay picks, report volumes.

pub mod config;
pub mod forest_file;
pub mod report;

use anyhow::{Context, Result};
use std::collections::HashMap;
use tracing::{info, warn};
use vocal_core::{AnalyzedForest, ClassIndex, Color, Forest, SessionError, VolumeSession};

pub use config::Config;
pub use forest_file::ForestFile;
pub use report::{ClassSummary, Report};

/// Analyze `forest`, create the configured classes and apply every pick.
pub fn run(config: &Config, forest: Forest) -> Result<Report> {
	let analyzed = AnalyzedForest::new(forest, config.image_dims(), &config.scene_config())
		.context("Failed to build scene")?;
	let mut session = analyzed.session(&config.calibration());

	let mut class_ids: HashMap<&str, ClassIndex> = HashMap::new();
	for class in &config.classes {
		let index = session
			.ledger_mut()
			.add_class(Color::from(class.color))
			.with_context(|| format!("Failed to create class '{}'", class.name))?;
		class_ids.insert(class.name.as_str(), index);
	}

	let mut outcomes = Vec::with_capacity(config.picks.len());
	let mut skipped_picks = 0;
	for pick in &config.picks {
		let edge = pick.edge_ref();
		let Some(&class) = class_ids.get(pick.class.as_str()) else {
			anyhow::bail!("Pick of edge {edge} names unknown class '{}'", pick.class);
		};
		session.ledger_mut().set_current_class(class)?;

		let Some(voxels) = pick.voxels.or_else(|| analyzed.voxel_span(edge)) else {
			warn!(%edge, "pick names an edge that is not in the forest");
			skipped_picks += 1;
			continue;
		};
		match session.pick_edge(edge, voxels) {
			Ok(outcome) => outcomes.push(outcome),
			Err(SessionError::NoLeaf(_)) => {
				warn!(%edge, "edge has no polyline in the scene, pick skipped");
				skipped_picks += 1;
			}
			Err(err) => return Err(err).with_context(|| format!("Pick of edge {edge} failed")),
		}
	}

	let visible = config.view.as_ref().map(|view| {
		let range = view.slices[0]..=view.slices[1];
		let count = analyzed.slices().edges_in_range(range.clone()).len();
		(range, count)
	});

	info!(picks = outcomes.len(), skipped = skipped_picks, "picks replayed");
	Ok(build_report(&analyzed, &session, config, outcomes, skipped_picks, visible))
}

fn build_report(
	analyzed: &AnalyzedForest,
	session: &VolumeSession,
	config: &Config,
	outcomes: Vec<vocal_core::PickOutcome>,
	skipped_picks: usize,
	visible: Option<(std::ops::RangeInclusive<i32>, usize)>,
) -> Report {
	let ledger = session.ledger();
	let classes = config
		.classes
		.iter()
		.zip(ledger.classes())
		.map(|(named, (_, class))| ClassSummary {
			name: named.name.clone(),
			color: class.color,
			voxel_count: class.voxel_count,
			volume: class.volume,
		})
		.collect();

	Report {
		trees: analyzed.forest().trees.len(),
		edges: analyzed.forest().edge_count(),
		leaves: analyzed.scene().leaf_count(),
		slices: analyzed.slices().len(),
		stats: *analyzed.stats(),
		units: ledger.units().to_string(),
		multiplier: ledger.multiplier(),
		classes,
		outcomes,
		skipped_picks,
		visible,
	}
}

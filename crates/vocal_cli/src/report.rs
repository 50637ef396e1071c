//! Plain-text measurement report.

use std::fmt;
use std::ops::RangeInclusive;
use vocal_core::{Color, PickOutcome, TraversalStats};

/// Final state of one color class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary {
	pub name: String,
	pub color: Color,
	pub voxel_count: i64,
	pub volume: f64,
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct Report {
	pub trees: usize,
	pub edges: usize,
	pub leaves: usize,
	pub slices: usize,
	pub stats: TraversalStats,
	pub units: String,
	/// Volume of one voxel.
	pub multiplier: f64,
	pub classes: Vec<ClassSummary>,
	pub outcomes: Vec<PickOutcome>,
	/// Picks naming edges without a leaf (unreachable or unknown).
	pub skipped_picks: usize,
	pub visible: Option<(RangeInclusive<i32>, usize)>,
}

impl Report {
	pub fn class(&self, name: &str) -> Option<&ClassSummary> {
		self.classes.iter().find(|c| c.name == name)
	}

	pub fn total_volume(&self) -> f64 {
		self.classes.iter().map(|c| c.volume).sum()
	}
}

impl fmt::Display for Report {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Forest: {} trees, {} edges", self.trees, self.edges)?;
		writeln!(
			f,
			"Scene: {} polylines, {} back edges, {} duplicates suppressed",
			self.leaves, self.stats.back_edges, self.stats.duplicates_suppressed
		)?;
		writeln!(f, "Slices: {} occupied", self.slices)?;
		if let Some((range, count)) = &self.visible {
			writeln!(f, "  {} edges visible in slices {}..={}", count, range.start(), range.end())?;
		}
		writeln!(f, "Voxel volume: {} {}^3", self.multiplier, self.units)?;

		writeln!(f, "\nPicks: {} applied, {} skipped", self.outcomes.len(), self.skipped_picks)?;
		for outcome in &self.outcomes {
			match outcome {
				PickOutcome::Attributed { edge, class } => writeln!(f, "  + {edge} -> class {class}")?,
				PickOutcome::Released { edge, class } => writeln!(f, "  - {edge} <- class {class}")?,
				PickOutcome::Moved { edge, from, to } => writeln!(f, "  ~ {edge} class {from} -> {to}")?,
				PickOutcome::Ignored { edge } => writeln!(f, "  . {edge} (no class)")?,
			}
		}

		writeln!(f, "\nClasses:")?;
		for class in &self.classes {
			writeln!(
				f,
				"  {:<16} {}  {:>8} voxels  {:>12.4} {}^3",
				class.name, class.color, class.voxel_count, class.volume, self.units
			)?;
		}
		write!(f, "  {:<16} {:>7}  {:>8}         {:>12.4} {}^3", "total", "", "", self.total_volume(), self.units)
	}
}

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use vocal_cli::{run, Config, ForestFile};
use vocal_core::{EdgeRef, PickOutcome};

/// Tree 0: chain A-B-C. Tree 1: D-E plus a detached F-G the walk never reaches.
const FOREST: &str = r#"{
	"trees": [
		{
			"vertices": [
				{ "points": [[0, 0, 0]] },
				{ "points": [[2, 0, 1]] },
				{ "points": [[4, 0, 2]] }
			],
			"edges": [
				{ "v1": 0, "v2": 1, "slabs": [[1, 0, 0]] },
				{ "v1": 1, "v2": 2, "slabs": [[3, 0, 1]] }
			]
		},
		{
			"vertices": [
				{ "points": [[10, 10, 5]] },
				{ "points": [[12, 10, 5]] },
				{ "points": [[20, 20, 6]] },
				{ "points": [[22, 20, 6]] }
			],
			"edges": [
				{ "v1": 0, "v2": 1, "slabs": [[11, 10, 5]] },
				{ "v1": 2, "v2": 3, "slabs": [[21, 20, 6]] }
			]
		}
	]
}"#;

const CONFIG: &str = r#"
[image]
width = 32
height = 32
depth = 8

[calibration]
pixel_width = 0.5
pixel_height = 0.5
pixel_depth = 2.0
units = "um"

[[classes]]
name = "axon"
color = [255, 0, 0]

[[classes]]
name = "dendrite"
color = [0, 255, 0]

[[picks]]
class = "axon"
tree = 0
edge = 0

[[picks]]
class = "axon"
tree = 0
edge = 1

[[picks]]
class = "dendrite"
tree = 0
edge = 1

[[picks]]
class = "dendrite"
tree = 1
edge = 1

[[picks]]
class = "axon"
tree = 1
edge = 0
voxels = 10

[view]
slices = [5, 5]
"#;

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
	let forest = dir.join("forest.json");
	let config = dir.join("session.toml");
	std::fs::write(&forest, FOREST).unwrap();
	std::fs::write(&config, CONFIG).unwrap();
	(forest, config)
}

#[test]
fn test_run_replays_picks() {
	let dir = TempDir::new().unwrap();
	let (forest_path, config_path) = write_inputs(dir.path());

	let config = Config::load(&config_path).unwrap();
	let forest = ForestFile::load(&forest_path).unwrap().into_forest().unwrap();
	let report = run(&config, forest).unwrap();

	assert_eq!(report.trees, 2);
	assert_eq!(report.edges, 4);
	assert_eq!(report.leaves, 3);
	assert_eq!(report.slices, 5);
	assert_eq!(report.visible.as_ref().map(|(_, n)| *n), Some(1));
	assert_eq!(report.multiplier, 0.5);
	assert_eq!(report.skipped_picks, 1);
	assert_eq!(report.outcomes.len(), 4);
	assert!(matches!(
		report.outcomes[2],
		PickOutcome::Moved { edge, .. } if edge == EdgeRef::new(0, 1)
	));

	let axon = report.class("axon").unwrap();
	assert_eq!(axon.voxel_count, 13);
	assert_eq!(axon.volume, 6.5);
	let dendrite = report.class("dendrite").unwrap();
	assert_eq!(dendrite.voxel_count, 3);
	assert_eq!(dendrite.volume, 1.5);
	assert_eq!(report.total_volume(), 8.0);
}

#[test]
fn test_missing_config_file() {
	let dir = TempDir::new().unwrap();
	let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
	assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_malformed_forest_json() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("forest.json");
	std::fs::write(&path, "{ \"trees\": [ { \"edges\": [] } ] }").unwrap();
	let err = ForestFile::load(&path).unwrap_err();
	assert!(err.to_string().contains("Failed to parse forest JSON"));
}

#[test]
fn test_binary_prints_report() {
	let dir = TempDir::new().unwrap();
	let (forest_path, config_path) = write_inputs(dir.path());

	let output = Command::new(env!("CARGO_BIN_EXE_vocal"))
		.arg("--forest")
		.arg(&forest_path)
		.arg("--config")
		.arg(&config_path)
		.env("RUST_LOG", "warn")
		.output()
		.unwrap();

	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("axon"));
	assert!(stdout.contains("dendrite"));
	assert!(stdout.contains("Picks: 4 applied, 1 skipped"));
}

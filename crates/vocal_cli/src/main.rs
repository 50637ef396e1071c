//! Skeleton volume measurement.
//!
//! Loads a skeleton forest (JSON) and a session config (TOML), builds the
//! pickable scene, replays the configured picks against the volume ledger and
//! prints per-class volumes.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use vocal_cli::{run, Config, ForestFile};

/// Skeleton volume measurement.
#[derive(Parser, Debug)]
#[command(name = "vocal")]
#[command(about = "Measures calibrated skeleton volumes per color class")]
struct Args {
	/// Path to forest JSON file.
	#[arg(short, long)]
	forest: PathBuf,

	/// Path to session configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let args = Args::parse();

	println!("Loading config from: {}", args.config.display());
	let config = Config::load(&args.config)?;

	println!("Loading forest from: {}", args.forest.display());
	let forest = ForestFile::load(&args.forest)?.into_forest()?;

	let report = run(&config, forest)?;
	println!("\n{report}");

	Ok(())
}

//! Maze Background CLI Utility
//!
//! Paints the maze background from a layout grid and a rotation grid and saves
//! it as an image.
//!
//! # Usage
//!
//! ```bash
//! # Use the maze files named in the config
//! cargo run --example render_maze -- --config dogmaze.toml -o background.png
//!
//! # Explicit grid files, leaving 48 pixels for a score bar
//! cargo run --example render_maze -- maze1.txt maze1_rotation.txt -o background.png --y-offset 48
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dogmaze_rs::prelude::*;
use log::info;

#[derive(Parser)]
#[command(name = "render_maze")]
#[command(author = "dogmaze-rs project")]
#[command(version = "1.0")]
#[command(about = "Paint a maze background from grid files", long_about = None)]
struct Cli {
	/// Layout grid file (defaults to the config's maze)
	#[arg(value_name = "LAYOUT")]
	layout: Option<PathBuf>,

	/// Rotation grid file (defaults to the config's maze rotation)
	#[arg(value_name = "ROTATION")]
	rotation: Option<PathBuf>,

	/// Render configuration file
	#[arg(short, long, env = "DOGMAZE_CONFIG")]
	config: Option<PathBuf>,

	/// Output image path
	#[arg(short, long, default_value = "background.png")]
	output: PathBuf,

	/// Empty pixel rows above the maze
	#[arg(short, long, default_value_t = 0)]
	y_offset: u32,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = match &cli.config {
		Some(path) => RenderConfig::load(path)
			.with_context(|| format!("loading config {}", path.display()))?,
		None => RenderConfig::default(),
	};

	let layout = cli.layout.unwrap_or_else(|| config.assets.resolve(&config.assets.maze));
	let rotation =
		cli.rotation.unwrap_or_else(|| config.assets.resolve(&config.assets.maze_rotation));

	let maze = MazeSprites::open(&layout, &rotation, config.palette, config.tile)?;
	let (rows, cols) = maze.layout().shape();
	info!("Maze {}: {} rows x {} columns", layout.display(), rows, cols);

	let background = maze.background(cli.y_offset);
	background
		.save(&cli.output)
		.with_context(|| format!("saving {}", cli.output.display()))?;

	info!(
		"✓ Wrote {}x{} background to {}",
		background.width(),
		background.height(),
		cli.output.display()
	);
	Ok(())
}

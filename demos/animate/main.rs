//! Protagonist Animation Example
//!
//! Drives the protagonist sprites through a scripted sequence of moves and
//! writes every displayed frame into a contact sheet.
//!
//! Features demonstrated:
//! - Loading protagonist frames from the configured asset directory
//! - Sticky horizontal facing during vertical movement
//! - The single-shot death animation and `reset()`
//! - Life icon bookkeeping
//!
//! # Usage
//!
//! ```bash
//! cargo run --example animate -- --config dogmaze.toml -o frames.png
//! ```

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use dogmaze_rs::prelude::*;
use image::{RgbaImage, imageops};
use log::info;

#[derive(Parser)]
#[command(name = "animate")]
#[command(about = "Step the protagonist animation and save the frames", long_about = None)]
struct Cli {
	/// Render configuration file
	#[arg(short, long, env = "DOGMAZE_CONFIG")]
	config: Option<PathBuf>,

	/// Output contact sheet
	#[arg(short, long, default_value = "frames.png")]
	output: PathBuf,

	/// Simulated frame time in milliseconds
	#[arg(long, default_value_t = 16)]
	tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	let config = match &cli.config {
		Some(path) => RenderConfig::load(path)?,
		None => RenderConfig::default(),
	};

	let mut sprites = PacmanSprites::load(&config)?;
	let mut lives = LifeSprites::load(3, &config)?;
	let mut dog = Actor::new();
	sprites.attach(&mut dog);

	let tick = Duration::from_millis(cli.tick_ms);
	let script = [
		(Direction::Left, true, 20),
		(Direction::Up, true, 10),
		(Direction::Right, true, 20),
		(Direction::Down, true, 10),
		(Direction::Stop, true, 5),
		(Direction::Stop, false, 30),
	];

	let mut shown = Vec::new();
	for (direction, alive, ticks) in script {
		dog.direction = direction;
		dog.alive = alive;
		info!("{} (alive: {}) for {} ticks", direction, alive, ticks);
		for _ in 0..ticks {
			sprites.update(&mut dog, tick);
			if let Some(image) = &dog.image {
				shown.push(image.clone());
			}
		}
	}

	lives.remove_image();
	sprites.reset();
	info!("Respawned with {} lives left, facing {:?}", lives.len(), sprites.facing());

	let (width, height) = config.tile.entity_size();
	let columns = 16u32;
	let rows = (shown.len() as u32).div_ceil(columns);
	let mut sheet = RgbaImage::new(columns * width, rows * height);
	for (i, image) in shown.iter().enumerate() {
		let i = i as u32;
		imageops::overlay(
			&mut sheet,
			&**image,
			i64::from(i % columns * width),
			i64::from(i / columns * height),
		);
	}
	sheet.save(&cli.output)?;

	info!("✓ Wrote {} frames to {}", shown.len(), cli.output.display());
	Ok(())
}

//! Render configuration: tile geometry, animation timing, asset locations and maze colors.
//!
//! Every section has defaults matching the shipped assets, so an empty TOML file
//! (or no file at all) yields a usable configuration.
//!
//! # Examples
//!
//! ```
//! use dogmaze_sprites::config::RenderConfig;
//!
//! let config = RenderConfig::from_toml_str(
//!     r#"
//!     [tile]
//!     width = 24
//!     height = 24
//!
//!     [animation]
//!     frame_duration_ms = 80
//!     "#,
//! )?;
//!
//! assert_eq!(config.tile.width, 24);
//! assert_eq!(config.tile.base_width, 16);
//! # Ok::<(), dogmaze_sprites::SpriteError>(())
//! ```

use std::{
	path::{Path, PathBuf},
	time::Duration,
};

use image::Rgba;
use serde::Deserialize;

use crate::SpriteError;

/// Tile geometry shared by every component.
///
/// `base_*` is the cell size in the source artwork, `width`/`height` the
/// on-screen tile size. Assets are scaled by the ratio of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TileSize {
	/// Source asset cell width in pixels
	pub base_width: u32,
	/// Source asset cell height in pixels
	pub base_height: u32,
	/// On-screen tile width in pixels
	pub width: u32,
	/// On-screen tile height in pixels
	pub height: u32,
}

impl Default for TileSize {
	fn default() -> Self {
		Self {
			base_width: 16,
			base_height: 16,
			width: 16,
			height: 16,
		}
	}
}

impl TileSize {
	/// Creates a tile size where source and screen cells are identical.
	pub const fn square(size: u32) -> Self {
		Self {
			base_width: size,
			base_height: size,
			width: size,
			height: size,
		}
	}

	/// Fails when any dimension is zero.
	pub fn validate(&self) -> Result<(), SpriteError> {
		if self.width == 0 || self.height == 0 || self.base_width == 0 || self.base_height == 0 {
			return Err(SpriteError::InvalidTileSize {
				width: self.width,
				height: self.height,
				base_width: self.base_width,
				base_height: self.base_height,
			});
		}
		Ok(())
	}

	/// Converts a source-art size to its on-screen size.
	pub fn scale(&self, width: u32, height: u32) -> (u32, u32) {
		(
			(u64::from(width) * u64::from(self.width) / u64::from(self.base_width)) as u32,
			(u64::from(height) * u64::from(self.height) / u64::from(self.base_height)) as u32,
		)
	}

	/// Size of an entity sprite, which spans two tiles in each direction.
	pub fn entity_size(&self) -> (u32, u32) {
		(self.width * 2, self.height * 2)
	}
}

/// Animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
	/// Time each animation frame stays on screen
	pub frame_duration_ms: u64,
}

impl Default for AnimationConfig {
	fn default() -> Self {
		// 20 frames per second
		Self {
			frame_duration_ms: 50,
		}
	}
}

impl AnimationConfig {
	/// Frame duration as a [`Duration`].
	pub fn frame_duration(&self) -> Duration {
		Duration::from_millis(self.frame_duration_ms)
	}
}

/// Locations of the image and maze files, relative to `root`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
	/// Directory every other path is resolved against
	pub root: PathBuf,
	/// Tile sheet
	pub spritesheet: PathBuf,
	/// Protagonist frame file name, `{}` is replaced by the 1-based frame number
	pub protagonist_frame_pattern: String,
	/// Number of protagonist animation frames
	pub protagonist_frame_count: usize,
	/// Pursuer marker image
	pub ghost: PathBuf,
	/// Fruit bonus image
	pub fruit: PathBuf,
	/// Remaining-life icon
	pub life: PathBuf,
	/// Maze layout grid
	pub maze: PathBuf,
	/// Maze rotation grid
	pub maze_rotation: PathBuf,
}

impl Default for AssetPaths {
	fn default() -> Self {
		Self {
			root: PathBuf::from("."),
			spritesheet: PathBuf::from("spritesheet_mspacman.png"),
			protagonist_frame_pattern: "dog-grande-{}.png".to_string(),
			protagonist_frame_count: 7,
			ghost: PathBuf::from("coleira.png"),
			fruit: PathBuf::from("pipula.png"),
			life: PathBuf::from("dog-grande-1.png"),
			maze: PathBuf::from("maze1.txt"),
			maze_rotation: PathBuf::from("maze1_rotation.txt"),
		}
	}
}

impl AssetPaths {
	/// Resolves a path against the asset root.
	pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
		self.root.join(path)
	}

	/// Paths of the protagonist frames in animation order.
	pub fn protagonist_frames(&self) -> Vec<PathBuf> {
		(1..=self.protagonist_frame_count)
			.map(|n| self.resolve(self.protagonist_frame_pattern.replace("{}", &n.to_string())))
			.collect()
	}
}

/// Colors used when painting the maze background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MazePalette {
	/// Default fill and open areas
	pub ground: [u8; 3],
	/// Wall tiles
	pub wall: [u8; 3],
	/// Pursuer house interior
	pub ghost_house: [u8; 3],
	/// Corridor surface
	pub road: [u8; 3],
	/// Dashed lane marking
	pub lane: [u8; 3],
}

impl Default for MazePalette {
	fn default() -> Self {
		Self {
			ground: [0, 255, 0],
			wall: [64, 64, 64],
			ghost_house: [0, 0, 139],
			road: [128, 128, 128],
			lane: [255, 255, 0],
		}
	}
}

impl MazePalette {
	/// Converts an RGB triple to an opaque pixel.
	pub const fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
		Rgba([r, g, b, 255])
	}
}

/// Top level render configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
	/// Tile geometry
	pub tile: TileSize,
	/// Animation timing
	pub animation: AnimationConfig,
	/// Asset locations
	pub assets: AssetPaths,
	/// Maze colors
	pub palette: MazePalette,
}

impl RenderConfig {
	/// Loads a configuration file. The format is inferred from the extension.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or parsed, or if the tile
	/// size is invalid.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
		let path = path.as_ref();
		let config: Self = config::Config::builder()
			.add_source(config::File::from(path))
			.build()?
			.try_deserialize()?;
		config.tile.validate()?;
		log::debug!("Loaded render config from {}", path.display());
		Ok(config)
	}

	/// Parses a configuration from TOML text.
	///
	/// # Errors
	///
	/// Returns an error if the text cannot be parsed or the tile size is invalid.
	pub fn from_toml_str(source: &str) -> Result<Self, SpriteError> {
		let config: Self = config::Config::builder()
			.add_source(config::File::from_str(source, config::FileFormat::Toml))
			.build()?
			.try_deserialize()?;
		config.tile.validate()?;
		Ok(config)
	}
}

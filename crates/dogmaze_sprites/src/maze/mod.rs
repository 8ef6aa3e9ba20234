//! Maze background construction.
//!
//! A maze is described by two character grids of the same shape:
//!
//! - the **layout** grid, which decides what each tile looks like (see [`paint`]),
//! - the **rotation** grid, which holds a quarter-turn count for tiles whose
//!   artwork is drawn from the sheet in a rotated orientation.
//!
//! The background is painted once and reused for the whole session.
//!
//! # Examples
//!
//! ```
//! use dogmaze_sprites::prelude::*;
//!
//! let layout = MazeGrid::parse("X X X X\nX . . X\nX X X X")?;
//! let rotation = MazeGrid::parse("0 0 0 0\n0 0 0 0\n0 0 0 0")?;
//! let maze = MazeSprites::new(layout, rotation, MazePalette::default(), TileSize::square(16))?;
//!
//! let background = maze.background(0);
//! assert_eq!(background.dimensions(), (64, 48));
//! # Ok::<(), SpriteError>(())
//! ```

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::{
	SpriteError,
	config::{MazePalette, RenderConfig, TileSize},
};

pub mod grid;
pub mod paint;

pub use grid::MazeGrid;
pub use paint::{LaneMarking, TileVisual, decorate, paint_tile};

/// Counter-clockwise quarter turns applied to a tile image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
	/// Unrotated
	#[default]
	None,
	/// 90 degrees
	Quarter,
	/// 180 degrees
	Half,
	/// 270 degrees
	ThreeQuarters,
}

impl Rotation {
	/// Parses a rotation grid cell. Only `0`-`3` are rotations.
	pub fn from_cell(cell: char) -> Option<Self> {
		match cell {
			'0' => Some(Self::None),
			'1' => Some(Self::Quarter),
			'2' => Some(Self::Half),
			'3' => Some(Self::ThreeQuarters),
			_ => None,
		}
	}

	/// Rotates `image` counter-clockwise by this many quarter turns.
	pub fn apply(self, image: &RgbaImage) -> RgbaImage {
		match self {
			Self::None => image.clone(),
			Self::Quarter => imageops::rotate270(image),
			Self::Half => imageops::rotate180(image),
			Self::ThreeQuarters => imageops::rotate90(image),
		}
	}
}

/// Maze grids plus the settings needed to paint them.
#[derive(Debug, Clone)]
pub struct MazeSprites {
	layout: MazeGrid,
	rotation: MazeGrid,
	palette: MazePalette,
	tile: TileSize,
}

impl MazeSprites {
	/// Loads the layout and rotation grids.
	///
	/// # Errors
	///
	/// Returns an error if either file is unreadable or malformed, or if the
	/// grids differ in shape.
	pub fn open(
		layout: impl AsRef<Path>,
		rotation: impl AsRef<Path>,
		palette: MazePalette,
		tile: TileSize,
	) -> Result<Self, SpriteError> {
		let layout = MazeGrid::open(layout)?;
		let rotation = MazeGrid::open(rotation)?;
		Self::new(layout, rotation, palette, tile)
	}

	/// Loads the maze files named in `config.assets`.
	///
	/// # Errors
	///
	/// See [`open`](Self::open).
	pub fn load(config: &RenderConfig) -> Result<Self, SpriteError> {
		let assets = &config.assets;
		Self::open(
			assets.resolve(&assets.maze),
			assets.resolve(&assets.maze_rotation),
			config.palette,
			config.tile,
		)
	}

	/// Builds from already parsed grids.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::DimensionMismatch`] if the grids differ in shape,
	/// or [`SpriteError::InvalidTileSize`] for a zero tile size.
	pub fn new(
		layout: MazeGrid,
		rotation: MazeGrid,
		palette: MazePalette,
		tile: TileSize,
	) -> Result<Self, SpriteError> {
		tile.validate()?;
		if layout.shape() != rotation.shape() {
			return Err(SpriteError::DimensionMismatch {
				layout: layout.shape(),
				rotation: rotation.shape(),
			});
		}

		Ok(Self {
			layout,
			rotation,
			palette,
			tile,
		})
	}

	/// Paints the maze onto `target`, starting `y_offset` pixels from the top.
	///
	/// The whole target is first filled with the ground color; cells falling
	/// outside the target are clipped.
	pub fn construct_background(&self, mut target: RgbaImage, y_offset: u32) -> RgbaImage {
		let ground = MazePalette::opaque(self.palette.ground);
		for pixel in target.pixels_mut() {
			*pixel = ground;
		}

		for (row, col, _) in self.layout.cells() {
			let visual = decorate(&self.layout, row, col);
			let x = col as u32 * self.tile.width;
			let y = y_offset + row as u32 * self.tile.height;
			paint_tile(&mut target, visual, x, y, self.tile, &self.palette);
		}

		log::debug!(
			"Painted {}x{} maze background at y offset {}",
			self.layout.rows(),
			self.layout.cols(),
			y_offset
		);
		target
	}

	/// Allocates a buffer sized to the maze plus `y_offset` and paints it.
	pub fn background(&self, y_offset: u32) -> RgbaImage {
		let (width, height) = self.pixel_size();
		self.construct_background(RgbaImage::new(width, height + y_offset), y_offset)
	}

	/// Maze size in pixels.
	pub fn pixel_size(&self) -> (u32, u32) {
		(self.layout.cols() as u32 * self.tile.width, self.layout.rows() as u32 * self.tile.height)
	}

	/// Visual of a single cell.
	///
	/// # Panics
	///
	/// Panics if `(row, col)` is outside the maze.
	pub fn visual(&self, row: usize, col: usize) -> TileVisual {
		decorate(&self.layout, row, col)
	}

	/// Rotation of the cell at `(row, col)`, if the rotation grid holds one there.
	pub fn rotation(&self, row: usize, col: usize) -> Option<Rotation> {
		self.rotation.get(row, col).and_then(Rotation::from_cell)
	}

	/// The layout grid.
	pub fn layout(&self) -> &MazeGrid {
		&self.layout
	}

	/// The rotation grid.
	pub fn rotation_grid(&self) -> &MazeGrid {
		&self.rotation
	}
}

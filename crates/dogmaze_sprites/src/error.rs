//! Error types for sprite, animation and maze loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading assets or building sprite state
#[derive(Debug, Error)]
pub enum SpriteError {
	/// A file could not be read
	#[error("Failed to read {}: {source}", .path.display())]
	Io {
		/// Path of the file that failed
		path: PathBuf,
		/// Underlying IO error
		#[source]
		source: std::io::Error,
	},

	/// An image asset could not be decoded
	#[error("Failed to decode image {}: {source}", .path.display())]
	Image {
		/// Path of the image that failed
		path: PathBuf,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// An animation was given no frames
	#[error("Animation sequence must contain at least one frame")]
	EmptySequence,

	/// An animation references a frame the controller does not have
	#[error("Animation frame {frame} out of range (total frames: {frame_count})")]
	FrameOutOfRange {
		/// Frame index that was requested
		frame: usize,
		/// Number of frames available
		frame_count: usize,
	},

	/// Tile dimensions must be non-zero
	#[error("Invalid tile size: {width}x{height} (base {base_width}x{base_height})")]
	InvalidTileSize {
		/// On-screen tile width
		width: u32,
		/// On-screen tile height
		height: u32,
		/// Source asset tile width
		base_width: u32,
		/// Source asset tile height
		base_height: u32,
	},

	/// A maze file contained no rows
	#[error("Maze grid is empty")]
	EmptyGrid,

	/// A maze row has a different number of cells than the first row
	#[error("Ragged maze row {row}: expected {expected} cells, found {actual}")]
	RaggedRow {
		/// Zero-based row index
		row: usize,
		/// Number of cells in the first row
		expected: usize,
		/// Number of cells in this row
		actual: usize,
	},

	/// A whitespace-delimited maze token was longer than one character
	#[error("Invalid maze cell {token:?} at row {row}, column {col}")]
	InvalidCell {
		/// Zero-based row index
		row: usize,
		/// Zero-based column index
		col: usize,
		/// Offending token
		token: String,
	},

	/// Layout and rotation grids differ in shape
	#[error(
		"Maze dimension mismatch: layout is {}x{}, rotation is {}x{}",
		.layout.0, .layout.1, .rotation.0, .rotation.1
	)]
	DimensionMismatch {
		/// Layout grid shape as (rows, cols)
		layout: (usize, usize),
		/// Rotation grid shape as (rows, cols)
		rotation: (usize, usize),
	},

	/// Configuration could not be loaded
	#[error(transparent)]
	Config(#[from] config::ConfigError),
}

impl SpriteError {
	pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			source,
		}
	}

	pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
		Self::Image {
			path: path.into(),
			source,
		}
	}
}

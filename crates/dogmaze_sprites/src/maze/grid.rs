//! Character grid parsing.
//!
//! Maze files are plain text, one row per line:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! X X X X X
//! X . . + X
//! X X X X X
//! ```
//!
//! A line containing whitespace is split on whitespace and each token must be a
//! single character. A line without whitespace contributes one cell per
//! character, so `X..+X` and `X . . + X` describe the same row.

use std::{path::Path, str::FromStr};

use crate::SpriteError;

/// Rectangular grid of single-character cells.
///
/// # Examples
///
/// ```
/// use dogmaze_sprites::maze::MazeGrid;
///
/// let grid = MazeGrid::parse("X . X\nX + X\n")?;
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.get(1, 1), Some('+'));
/// assert_eq!(grid.get(2, 0), None);
/// # Ok::<(), dogmaze_sprites::SpriteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
	rows: usize,
	cols: usize,
	cells: Vec<char>,
}

impl MazeGrid {
	/// Reads and parses a grid file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be read or is malformed.
	pub fn open(path: impl AsRef<Path>) -> Result<Self, SpriteError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|err| SpriteError::io(path, err))?;
		let grid = Self::parse(&text)?;
		log::debug!("Loaded maze grid {} ({}x{})", path.display(), grid.rows, grid.cols);
		Ok(grid)
	}

	/// Parses grid text.
	///
	/// # Errors
	///
	/// - [`SpriteError::EmptyGrid`] if there are no rows
	/// - [`SpriteError::InvalidCell`] for a whitespace-delimited token longer than one character
	/// - [`SpriteError::RaggedRow`] if rows differ in length
	pub fn parse(text: &str) -> Result<Self, SpriteError> {
		let mut cells = Vec::new();
		let mut cols = 0;
		let mut rows = 0;

		for line in text.lines().map(str::trim) {
			if line.is_empty() || line.starts_with('#') {
				continue;
			}

			let row = parse_row(line, rows)?;
			if rows == 0 {
				cols = row.len();
			} else if row.len() != cols {
				return Err(SpriteError::RaggedRow {
					row: rows,
					expected: cols,
					actual: row.len(),
				});
			}

			cells.extend(row);
			rows += 1;
		}

		if rows == 0 {
			return Err(SpriteError::EmptyGrid);
		}

		Ok(Self {
			rows,
			cols,
			cells,
		})
	}

	/// Number of rows.
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// Number of columns.
	pub fn cols(&self) -> usize {
		self.cols
	}

	/// `(rows, cols)`.
	pub fn shape(&self) -> (usize, usize) {
		(self.rows, self.cols)
	}

	/// Cell at `(row, col)`, or `None` outside the grid.
	pub fn get(&self, row: usize, col: usize) -> Option<char> {
		if row < self.rows && col < self.cols {
			Some(self.cells[row * self.cols + col])
		} else {
			None
		}
	}

	/// Iterates over `(row, col, cell)` in row-major order.
	pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
		self.cells.iter().enumerate().map(|(i, &c)| (i / self.cols, i % self.cols, c))
	}
}

impl FromStr for MazeGrid {
	type Err = SpriteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl std::fmt::Display for MazeGrid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for row in self.cells.chunks(self.cols) {
			let line: String = row.iter().collect();
			writeln!(f, "{line}")?;
		}
		Ok(())
	}
}

fn parse_row(line: &str, row: usize) -> Result<Vec<char>, SpriteError> {
	if !line.contains(char::is_whitespace) {
		return Ok(line.chars().collect());
	}

	line.split_whitespace()
		.enumerate()
		.map(|(col, token)| {
			let mut chars = token.chars();
			match (chars.next(), chars.next()) {
				(Some(c), None) => Ok(c),
				_ => Err(SpriteError::InvalidCell {
					row,
					col,
					token: token.to_string(),
				}),
			}
		})
		.collect()
}

//! Benchmark helper utilities for dogmaze-rs
//!
//! This module provides generators for synthetic maze grids used by the
//! benchmark suite. The generated layouts mix walls, corridors, path markers and
//! a pursuer house so every painting rule is exercised.

/// Generates a layout grid of `rows` x `cols` cells.
///
/// The outer ring is wall, every fourth row and column is a dot corridor, path
/// markers sit where corridors meet walls, and a pursuer house fills the centre.
pub fn generate_layout(rows: usize, cols: usize) -> String {
	let mut text = String::with_capacity(rows * (cols * 2 + 1));
	let house_rows = rows / 2 - 1..=rows / 2 + 1;
	let house_cols = cols / 2 - 2..=cols / 2 + 2;

	for row in 0..rows {
		for col in 0..cols {
			let cell = if row == 0 || col == 0 || row == rows - 1 || col == cols - 1 {
				'2'
			} else if house_rows.contains(&row) && house_cols.contains(&col) {
				'8'
			} else if row % 4 == 1 && col % 4 == 1 {
				'+'
			} else if row % 4 == 1 || col % 4 == 1 {
				'.'
			} else if row % 4 == 2 && col % 4 == 2 {
				'-'
			} else {
				'X'
			};
			if col > 0 {
				text.push(' ');
			}
			text.push(cell);
		}
		text.push('\n');
	}

	text
}

/// Generates a rotation grid of `rows` x `cols` zeros.
pub fn generate_rotation(rows: usize, cols: usize) -> String {
	let row = vec!["0"; cols].join(" ");
	let mut text = String::with_capacity(rows * (row.len() + 1));
	for _ in 0..rows {
		text.push_str(&row);
		text.push('\n');
	}
	text
}

/// Common benchmark maze sizes as (rows, cols)
pub mod sizes {
	/// Small test maze
	pub const SMALL: (usize, usize) = (12, 12);
	/// Arcade maze: 36 rows x 28 columns
	pub const ARCADE: (usize, usize) = (36, 28);
	/// Large maze for stress testing
	pub const LARGE: (usize, usize) = (128, 128);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generate_layout_shape() {
		let layout = generate_layout(12, 16);
		let lines: Vec<_> = layout.lines().collect();
		assert_eq!(lines.len(), 12);
		assert!(lines.iter().all(|line| line.split_whitespace().count() == 16));
		assert!(layout.contains('8'));
		assert!(layout.contains('+'));
	}

	#[test]
	fn test_generate_rotation_shape() {
		let rotation = generate_rotation(3, 4);
		assert_eq!(rotation, "0 0 0 0\n0 0 0 0\n0 0 0 0\n");
	}
}

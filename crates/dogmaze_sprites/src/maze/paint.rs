//! Per-cell maze painting rules.
//!
//! | Cells               | Visual                                    |
//! |---------------------|-------------------------------------------|
//! | `2 3 4 5 9`         | wall                                      |
//! | `8`                 | pursuer house                             |
//! | `\| n - = P p`      | road, lane marking toward a dot corridor  |
//! | `X`                 | open ground                               |
//! | `. +`               | road (dot corridor), lane marking         |
//! | anything else       | nothing, the ground fill shows through    |
//!
//! Lane markings look at the four neighbours: a dot corridor to the left or
//! right gives horizontal dashes, otherwise one above or below gives vertical
//! dashes.

use image::{Rgba, RgbaImage};

use super::MazeGrid;
use crate::config::{MazePalette, TileSize};

/// Spacing between the starts of consecutive lane dashes.
pub const DASH_SPACING: u32 = 10;

/// Dash length measured between its end points.
pub const DASH_LENGTH: u32 = 5;

/// Lane marking thickness.
pub const DASH_THICKNESS: u32 = 2;

/// Orientation of a tile's dashed lane marking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneMarking {
	/// Dashes run left to right through the tile's vertical centre
	Horizontal,
	/// Dashes run top to bottom through the tile's horizontal centre
	Vertical,
}

/// What a single maze cell looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVisual {
	/// Nothing is drawn
	Blank,
	/// Solid wall color
	Wall,
	/// Solid pursuer-house color
	GhostHouse,
	/// Solid ground color
	Ground,
	/// Road surface with an optional lane marking
	Road(Option<LaneMarking>),
}

impl TileVisual {
	/// Fill color of the tile, if it has one.
	pub fn fill(self, palette: &MazePalette) -> Option<Rgba<u8>> {
		match self {
			Self::Blank => None,
			Self::Wall => Some(MazePalette::opaque(palette.wall)),
			Self::GhostHouse => Some(MazePalette::opaque(palette.ghost_house)),
			Self::Ground => Some(MazePalette::opaque(palette.ground)),
			Self::Road(_) => Some(MazePalette::opaque(palette.road)),
		}
	}
}

/// `true` for cells that carry collectibles.
pub fn is_dot_corridor(cell: char) -> bool {
	matches!(cell, '.' | '+')
}

/// Decides the visual for the cell at `(row, col)` from it and its neighbours.
///
/// # Panics
///
/// Panics if `(row, col)` is outside the grid.
pub fn decorate(grid: &MazeGrid, row: usize, col: usize) -> TileVisual {
	let Some(cell) = grid.get(row, col) else {
		panic!("cell ({row}, {col}) outside {}x{} maze", grid.rows(), grid.cols());
	};

	match cell {
		'2' | '3' | '4' | '5' | '9' => TileVisual::Wall,
		'8' => TileVisual::GhostHouse,
		'|' | 'n' | '-' | '=' | 'P' | 'p' | '.' | '+' => TileVisual::Road(lane_marking(grid, row, col)),
		'X' => TileVisual::Ground,
		_ => TileVisual::Blank,
	}
}

fn lane_marking(grid: &MazeGrid, row: usize, col: usize) -> Option<LaneMarking> {
	let corridor = |r: Option<usize>, c: Option<usize>| match (r, c) {
		(Some(r), Some(c)) => grid.get(r, c).is_some_and(is_dot_corridor),
		_ => false,
	};

	if corridor(Some(row), col.checked_sub(1)) || corridor(Some(row), col.checked_add(1)) {
		Some(LaneMarking::Horizontal)
	} else if corridor(row.checked_sub(1), Some(col)) || corridor(row.checked_add(1), Some(col)) {
		Some(LaneMarking::Vertical)
	} else {
		None
	}
}

/// Paints `visual` into the tile whose top-left pixel is `(x, y)`.
///
/// Everything drawn stays inside the tile and the target.
pub fn paint_tile(
	target: &mut RgbaImage,
	visual: TileVisual,
	x: u32,
	y: u32,
	tile: TileSize,
	palette: &MazePalette,
) {
	let clip = Rect::new(x, y, tile.width, tile.height);
	let Some(fill) = visual.fill(palette) else {
		return;
	};
	fill_rect(target, clip, clip, fill);

	let lane = MazePalette::opaque(palette.lane);
	match visual {
		TileVisual::Road(Some(LaneMarking::Horizontal)) => {
			let top = y + tile.height / 2;
			for offset in (0..tile.width).step_by(DASH_SPACING as usize) {
				let dash = Rect::new(x + offset, top, DASH_LENGTH + 1, DASH_THICKNESS);
				fill_rect(target, dash, clip, lane);
			}
		}
		TileVisual::Road(Some(LaneMarking::Vertical)) => {
			let left = x + tile.width / 2;
			for offset in (0..tile.height).step_by(DASH_SPACING as usize) {
				let dash = Rect::new(left, y + offset, DASH_THICKNESS, DASH_LENGTH + 1);
				fill_rect(target, dash, clip, lane);
			}
		}
		_ => {}
	}
}

#[derive(Debug, Clone, Copy)]
struct Rect {
	x: u32,
	y: u32,
	width: u32,
	height: u32,
}

impl Rect {
	fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}
}

/// Fills `rect` clipped to `clip` and the target bounds.
fn fill_rect(target: &mut RgbaImage, rect: Rect, clip: Rect, color: Rgba<u8>) {
	let x0 = rect.x.max(clip.x);
	let y0 = rect.y.max(clip.y);
	let x1 = (rect.x + rect.width).min(clip.x + clip.width).min(target.width());
	let y1 = (rect.y + rect.height).min(clip.y + clip.height).min(target.height());

	for py in y0..y1 {
		for px in x0..x1 {
			target.put_pixel(px, py, color);
		}
	}
}

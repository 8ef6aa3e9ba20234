//! Maze loading and background painting

use dogmaze_rs::prelude::*;
use image::Rgba;

use crate::scratch_dir;

const LAYOUT: &str = "\
# test maze
X X X X X X
X . . . . X
X . 2 2 | X
X + 8 8 . X
X X X X X X
";

const ROTATION: &str = "\
0 0 0 0 0 0
0 0 0 0 0 0
0 0 1 3 0 0
0 0 0 0 0 0
0 0 0 0 0 0
";

fn write_maze(name: &str, layout: &str, rotation: &str) -> RenderConfig {
	let dir = scratch_dir(name);
	std::fs::write(dir.join("maze1.txt"), layout).unwrap();
	std::fs::write(dir.join("maze1_rotation.txt"), rotation).unwrap();

	let mut config = RenderConfig::default();
	config.assets.root = dir;
	config
}

#[test_log::test]
fn test_load_and_paint() {
	let config = write_maze("paint", LAYOUT, ROTATION);
	let maze = MazeSprites::load(&config).unwrap();
	assert_eq!(maze.layout().shape(), (5, 6));
	assert_eq!(maze.pixel_size(), (96, 80));
	assert_eq!(maze.rotation(2, 2), Some(Rotation::Quarter));

	let background = maze.background(0);
	let palette = config.palette;
	let lane = MazePalette::opaque(palette.lane);
	let road = MazePalette::opaque(palette.road);

	// (1, 1) has a dot to its right: horizontal dashes through y = 8..=9
	assert_eq!(background.get_pixel(16, 24), &lane);
	assert_eq!(background.get_pixel(16, 25), &lane);
	assert_eq!(background.get_pixel(16, 23), &road);
	assert_eq!(background.get_pixel(16, 16), &road);

	// (2, 1) only has dots above and below: vertical dashes through x = 8..=9
	assert_eq!(background.get_pixel(24, 32), &lane);
	assert_eq!(background.get_pixel(25, 32), &lane);
	assert_eq!(background.get_pixel(23, 32), &road);
	assert_eq!(background.get_pixel(16, 40), &road);

	// (2, 4) is a path marker between walls with dots above and below
	assert_eq!(maze.visual(2, 4), TileVisual::Road(Some(LaneMarking::Vertical)));

	assert_eq!(background.get_pixel(40, 40), &MazePalette::opaque(palette.wall));
	assert_eq!(background.get_pixel(40, 56), &MazePalette::opaque(palette.ghost_house));
	assert_eq!(background.get_pixel(0, 0), &MazePalette::opaque(palette.ground));
}

#[test_log::test]
fn test_background_is_deterministic() {
	let config = write_maze("deterministic", LAYOUT, ROTATION);
	let maze = MazeSprites::load(&config).unwrap();

	let (width, height) = maze.pixel_size();
	let first = maze.construct_background(image::RgbaImage::new(width, height), 0);
	let second = maze.construct_background(
		image::RgbaImage::from_pixel(width, height, Rgba([9, 9, 9, 9])),
		0,
	);
	assert_eq!(first, second);
}

#[test_log::test]
fn test_dimension_mismatch_file() {
	let config = write_maze("mismatch", LAYOUT, "0 0 0\n0 0 0\n");
	let err = MazeSprites::load(&config).unwrap_err();
	assert!(matches!(
		err,
		SpriteError::DimensionMismatch {
			layout: (5, 6),
			rotation: (2, 3)
		}
	));
	assert!(err.to_string().starts_with("Maze dimension mismatch"));
}

#[test_log::test]
fn test_ragged_file() {
	let config = write_maze("ragged", "X X X\nX X\n", "0 0 0\n0 0\n");
	assert!(matches!(MazeSprites::load(&config), Err(SpriteError::RaggedRow { .. })));
}

#[test_log::test]
fn test_missing_rotation_file() {
	let config = write_maze("missing", LAYOUT, ROTATION);
	std::fs::remove_file(config.assets.resolve(&config.assets.maze_rotation)).unwrap();
	assert!(matches!(MazeSprites::load(&config), Err(SpriteError::Io { .. })));
}

#[test_log::test]
fn test_shipped_maze() {
	let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
	let mut config = RenderConfig::load(root.join("dogmaze.toml")).unwrap();
	config.assets.root = root.join(&config.assets.root);

	let maze = MazeSprites::load(&config).unwrap();
	assert_eq!(maze.layout().shape(), (15, 19));
	assert_eq!(maze.rotation(1, 9), Some(Rotation::Half));
	assert_eq!(maze.visual(7, 9), TileVisual::GhostHouse);
	assert_eq!(maze.background(0).dimensions(), (19 * 16, 15 * 16));
}

//! Prelude module for `dogmaze_sprites`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```
//! use dogmaze_sprites::prelude::*;
//!
//! let config = RenderConfig::default();
//! let mut dog = Actor::new();
//! dog.direction = Direction::Up;
//! assert_eq!(config.tile, TileSize::square(16));
//! ```

#[doc(inline)]
pub use crate::{
	// Errors
	SpriteError,

	Image,
	// Animation
	animation::{Animator, FrameSequence},

	// Config
	config::{AnimationConfig, AssetPaths, MazePalette, RenderConfig, TileSize},

	// Entities
	entity::{Actor, Direction, Entity},

	// Maze
	maze::{LaneMarking, MazeGrid, MazeSprites, Rotation, TileVisual, decorate},

	// Sheet
	sheet::Spritesheet,

	// Controllers
	sprites::{
		Facing, FruitSprites, GhostSprites, LifeSprites, PacmanSprites, SpriteController,
	},
};

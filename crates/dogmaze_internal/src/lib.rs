//! This module is separated into its own crate to enable simple dynamic linking for `dogmaze`, and should not be used directly.

/// `use dogmaze::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export dogmaze_sprites for convenience
pub use dogmaze_sprites;

// Re-export commonly used types at crate root
pub use dogmaze_sprites::{
	Image, SpriteError, Spritesheet,
	animation::{Animator, FrameSequence},
	config::RenderConfig,
	maze::{MazeGrid, MazeSprites},
	sprites::{FruitSprites, GhostSprites, LifeSprites, PacmanSprites, SpriteController},
};

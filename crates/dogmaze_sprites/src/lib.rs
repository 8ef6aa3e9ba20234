//! This crate provides the sprite and tile rendering layer for the `dogmaze-rs` project.
//!
//! # Components
//!
//! - **Animation**: frame sequences stepped through by elapsed time, looping or single-shot
//! - **Spritesheet**: color-keyed, tile-scaled sheet with cell extraction
//! - **Sprite controllers**: per-entity image selection (protagonist, pursuers, fruit, lives)
//! - **Maze**: procedural background painting from character grid files
//! - **Config**: tile geometry, timing, asset paths and colors
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use std::time::Duration;
//! use dogmaze_sprites::prelude::*;
//!
//! # fn main() -> Result<(), SpriteError> {
//! let config = RenderConfig::load("dogmaze.toml")?;
//!
//! let maze = MazeSprites::load(&config)?;
//! let background = maze.background(0);
//!
//! let mut dog = Actor::new();
//! let mut sprites = PacmanSprites::load(&config)?;
//! sprites.attach(&mut dog);
//!
//! dog.direction = Direction::Left;
//! sprites.update(&mut dog, Duration::from_millis(16));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use image::RgbaImage;

pub mod animation;
pub mod config;
pub mod entity;
mod error;
pub mod maze;
pub mod sheet;
pub mod sprites;

/// `use dogmaze_sprites::prelude::*;` to import commonly used items.
pub mod prelude;

pub use error::SpriteError;
pub use sheet::Spritesheet;

/// Shared, immutable RGBA image.
pub type Image = Arc<RgbaImage>;

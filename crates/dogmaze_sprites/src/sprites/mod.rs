//! Per-entity sprite controllers.
//!
//! Every controller implements [`SpriteController`]. The host calls
//! [`update`](SpriteController::update) once per frame with the entity it
//! belongs to; the controller writes the image to draw into the entity.
//!
//! - [`PacmanSprites`]: direction-aware animated protagonist with a death animation
//! - [`GhostSprites`], [`FruitSprites`]: a single fixed image
//! - [`LifeSprites`]: a fixed icon repeated once per remaining life

use std::time::Duration;

use crate::{Image, entity::Entity};

pub mod life;
pub mod marker;
pub mod pacman;

pub use life::LifeSprites;
pub use marker::{FruitSprites, GhostSprites};
pub use pacman::{Facing, PacmanSprites};

/// Shared interface of all sprite controllers.
pub trait SpriteController {
	/// Advances animation state by `elapsed` and writes the current image into `entity`.
	fn update(&mut self, entity: &mut dyn Entity, elapsed: Duration);

	/// Image shown before the first update.
	fn start_image(&self) -> Image;

	/// Most recently selected image.
	fn image(&self) -> Image;

	/// Returns every animation to its first frame.
	fn reset(&mut self) {}

	/// Writes the start image into `entity`.
	fn attach(&self, entity: &mut dyn Entity) {
		entity.set_image(self.start_image());
	}
}

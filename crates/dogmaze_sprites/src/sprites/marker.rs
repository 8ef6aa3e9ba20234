//! Single-image sprites for pursuers and fruit.

use std::{sync::Arc, time::Duration};

use image::RgbaImage;

use super::SpriteController;
use crate::{Image, SpriteError, config::RenderConfig, entity::Entity, sheet};

/// A fixed image scaled to entity size.
#[derive(Debug, Clone)]
struct StaticImage(Image);

impl StaticImage {
	fn load(path: &std::path::Path, config: &RenderConfig) -> Result<Self, SpriteError> {
		let (width, height) = config.tile.entity_size();
		sheet::load_scaled(path, width, height).map(Self)
	}

	fn from_image(image: &RgbaImage, config: &RenderConfig) -> Self {
		let (width, height) = config.tile.entity_size();
		Self(Arc::new(sheet::scale_to(image, width, height)))
	}
}

/// Pursuer sprite: the collar marker, never animated.
#[derive(Debug, Clone)]
pub struct GhostSprites {
	image: StaticImage,
}

impl GhostSprites {
	/// Loads the image named by `config.assets.ghost`.
	///
	/// # Errors
	///
	/// Returns an error if the image cannot be loaded.
	pub fn load(config: &RenderConfig) -> Result<Self, SpriteError> {
		let path = config.assets.resolve(&config.assets.ghost);
		Ok(Self {
			image: StaticImage::load(&path, config)?,
		})
	}

	/// Builds the sprite from an in-memory image.
	pub fn from_image(image: &RgbaImage, config: &RenderConfig) -> Self {
		Self {
			image: StaticImage::from_image(image, config),
		}
	}
}

impl SpriteController for GhostSprites {
	fn update(&mut self, _entity: &mut dyn Entity, _elapsed: Duration) {}

	fn start_image(&self) -> Image {
		self.image.0.clone()
	}

	fn image(&self) -> Image {
		self.image.0.clone()
	}
}

/// Fruit bonus sprite.
#[derive(Debug, Clone)]
pub struct FruitSprites {
	image: StaticImage,
}

impl FruitSprites {
	/// Loads the image named by `config.assets.fruit`.
	///
	/// # Errors
	///
	/// Returns an error if the image cannot be loaded.
	pub fn load(config: &RenderConfig) -> Result<Self, SpriteError> {
		let path = config.assets.resolve(&config.assets.fruit);
		Ok(Self {
			image: StaticImage::load(&path, config)?,
		})
	}

	/// Builds the sprite from an in-memory image.
	pub fn from_image(image: &RgbaImage, config: &RenderConfig) -> Self {
		Self {
			image: StaticImage::from_image(image, config),
		}
	}
}

impl SpriteController for FruitSprites {
	fn update(&mut self, _entity: &mut dyn Entity, _elapsed: Duration) {}

	fn start_image(&self) -> Image {
		self.image.0.clone()
	}

	fn image(&self) -> Image {
		self.image.0.clone()
	}
}

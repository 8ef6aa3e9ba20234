//! Remaining-lives icons.

use std::{collections::VecDeque, sync::Arc, time::Duration};

use image::RgbaImage;

use super::SpriteController;
use crate::{Image, SpriteError, config::RenderConfig, entity::Entity, sheet};

/// One icon per remaining life.
///
/// # Examples
///
/// ```
/// use dogmaze_sprites::prelude::*;
/// use image::{Rgba, RgbaImage};
///
/// let icon = RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255]));
/// let mut lives = LifeSprites::from_image(&icon, 3, &RenderConfig::default());
///
/// lives.remove_image();
/// assert_eq!(lives.len(), 2);
///
/// lives.reset_lives(5);
/// assert_eq!(lives.images().count(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct LifeSprites {
	image: Image,
	images: VecDeque<Image>,
}

impl LifeSprites {
	/// Loads the icon named by `config.assets.life` and shows `lives` copies.
	///
	/// # Errors
	///
	/// Returns an error if the icon cannot be loaded.
	pub fn load(lives: usize, config: &RenderConfig) -> Result<Self, SpriteError> {
		let (width, height) = config.tile.entity_size();
		let path = config.assets.resolve(&config.assets.life);
		let image = sheet::load_scaled(&path, width, height)?;
		Ok(Self::with_image(image, lives))
	}

	/// Builds the icons from an in-memory image.
	pub fn from_image(image: &RgbaImage, lives: usize, config: &RenderConfig) -> Self {
		let (width, height) = config.tile.entity_size();
		Self::with_image(Arc::new(sheet::scale_to(image, width, height)), lives)
	}

	fn with_image(image: Image, lives: usize) -> Self {
		let mut sprites = Self {
			image,
			images: VecDeque::new(),
		};
		sprites.reset_lives(lives);
		sprites
	}

	/// Drops one life icon. Does nothing when none are left.
	pub fn remove_image(&mut self) {
		self.images.pop_front();
	}

	/// Shows exactly `lives` icons.
	pub fn reset_lives(&mut self, lives: usize) {
		self.images.clear();
		self.images.extend(std::iter::repeat_n(self.image.clone(), lives));
	}

	/// Remaining life icons in display order.
	pub fn images(&self) -> impl Iterator<Item = &Image> {
		self.images.iter()
	}

	/// Number of icons shown.
	pub fn len(&self) -> usize {
		self.images.len()
	}

	/// `true` when no lives are left.
	pub fn is_empty(&self) -> bool {
		self.images.is_empty()
	}
}

impl SpriteController for LifeSprites {
	fn update(&mut self, _entity: &mut dyn Entity, _elapsed: Duration) {}

	fn start_image(&self) -> Image {
		self.image.clone()
	}

	fn image(&self) -> Image {
		self.image.clone()
	}
}

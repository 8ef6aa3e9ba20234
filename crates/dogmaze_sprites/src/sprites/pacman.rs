//! Animated protagonist sprites.
//!
//! The artwork only faces left. A mirrored copy of every frame is built at load
//! time for rightward movement. There is no separate up/down artwork: vertical
//! movement keeps whichever horizontal facing was last used.

use std::{sync::Arc, time::Duration};

use image::{RgbaImage, imageops};

use super::SpriteController;
use crate::{
	Image, SpriteError,
	animation::{Animator, FrameSequence},
	config::RenderConfig,
	entity::{Direction, Entity},
	sheet,
};

/// Horizontal orientation of the protagonist artwork.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Facing {
	/// Canonical artwork
	#[default]
	Left,
	/// Mirrored artwork
	Right,
}

/// One animator per movement direction plus the death animation.
#[derive(Debug, Clone)]
struct Animations {
	up: Animator,
	down: Animator,
	left: Animator,
	right: Animator,
	death: Animator,
}

impl Animations {
	fn new(sequence: &FrameSequence, frame_duration: Duration) -> Self {
		let moving = Animator::looping(sequence.clone(), frame_duration);
		Self {
			up: moving.clone(),
			down: moving.clone(),
			left: moving.clone(),
			right: moving,
			death: Animator::once(sequence.clone(), frame_duration),
		}
	}

	fn reset(&mut self) {
		for animator in [
			&mut self.up,
			&mut self.down,
			&mut self.left,
			&mut self.right,
			&mut self.death,
		] {
			animator.reset();
		}
	}
}

/// Sprite controller for the protagonist.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dogmaze_sprites::prelude::*;
/// use image::{Rgba, RgbaImage};
///
/// let frames = (0..3u8)
///     .map(|i| RgbaImage::from_pixel(32, 32, Rgba([i, 0, 0, 255])))
///     .collect();
/// let mut sprites = PacmanSprites::from_frames(frames, &RenderConfig::default())?;
///
/// let mut dog = Actor::new();
/// dog.direction = Direction::Right;
/// sprites.update(&mut dog, Duration::from_millis(50));
///
/// assert_eq!(sprites.facing(), Facing::Right);
/// assert_eq!(dog.image.unwrap().get_pixel(0, 0)[0], 1);
/// # Ok::<(), SpriteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PacmanSprites {
	frames: Vec<Image>,
	mirrored: Vec<Image>,
	animations: Animations,
	facing: Facing,
	stop_image: Image,
	current: Image,
}

impl PacmanSprites {
	/// Loads the numbered frame files named in `config.assets`.
	///
	/// # Errors
	///
	/// Returns an error if any frame cannot be loaded or there are no frames.
	pub fn load(config: &RenderConfig) -> Result<Self, SpriteError> {
		let frames = config
			.assets
			.protagonist_frames()
			.iter()
			.map(|path| sheet::load_image(path).map(image::DynamicImage::into_rgba8))
			.collect::<Result<Vec<_>, _>>()?;
		log::info!("Loaded {} protagonist frames", frames.len());
		Self::from_frames(frames, config)
	}

	/// Builds the controller from left-facing frames in animation order.
	///
	/// Frames are scaled to two tiles in each direction.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::EmptySequence`] if `frames` is empty.
	pub fn from_frames(frames: Vec<RgbaImage>, config: &RenderConfig) -> Result<Self, SpriteError> {
		let sequence = FrameSequence::ascending(frames.len())?;
		let (width, height) = config.tile.entity_size();

		let frames: Vec<Image> = frames
			.iter()
			.map(|frame| Arc::new(sheet::scale_to(frame, width, height)))
			.collect();
		let mirrored: Vec<Image> =
			frames.iter().map(|frame| Arc::new(imageops::flip_horizontal(&**frame))).collect();

		let stop_image = frames[0].clone();
		Ok(Self {
			animations: Animations::new(&sequence, config.animation.frame_duration()),
			current: stop_image.clone(),
			stop_image,
			frames,
			mirrored,
			facing: Facing::Left,
		})
	}

	/// Orientation used for vertical movement and the stop image.
	pub fn facing(&self) -> Facing {
		self.facing
	}

	/// Image shown while the entity is stationary.
	pub fn stop_image(&self) -> Image {
		self.stop_image.clone()
	}

	/// Canonical (left-facing) frames.
	pub fn frames(&self) -> &[Image] {
		&self.frames
	}

	/// Mirrored (right-facing) frames.
	pub fn mirrored_frames(&self) -> &[Image] {
		&self.mirrored
	}

	fn frames_facing(&self, facing: Facing) -> &[Image] {
		match facing {
			Facing::Left => &self.frames,
			Facing::Right => &self.mirrored,
		}
	}
}

impl SpriteController for PacmanSprites {
	fn update(&mut self, entity: &mut dyn Entity, elapsed: Duration) {
		if entity.is_alive() {
			let (animator, facing) = match entity.direction() {
				Direction::Stop => {
					self.current = self.stop_image.clone();
					entity.set_image(self.current.clone());
					return;
				}
				Direction::Left => (&mut self.animations.left, Facing::Left),
				Direction::Right => (&mut self.animations.right, Facing::Right),
				Direction::Up => (&mut self.animations.up, self.facing),
				Direction::Down => (&mut self.animations.down, self.facing),
			};

			let frame = animator.advance(elapsed);
			self.facing = facing;
			let frames = self.frames_facing(facing);
			let (current, stop_image) = (frames[frame].clone(), frames[0].clone());
			self.current = current;
			self.stop_image = stop_image;
		} else {
			let frame = self.animations.death.advance(elapsed);
			self.current = self.frames[frame].clone();
		}

		entity.set_image(self.current.clone());
	}

	fn start_image(&self) -> Image {
		self.frames[0].clone()
	}

	fn image(&self) -> Image {
		self.current.clone()
	}

	fn reset(&mut self) {
		self.animations.reset();
	}
}

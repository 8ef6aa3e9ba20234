//! The host-side view of a moving entity.
//!
//! Sprite controllers only need three things from the game's entities: which
//! way they move, whether they are alive, and somewhere to put the current
//! image. [`Entity`] captures that; [`Actor`] is a plain implementation for
//! hosts that do not have their own entity type.

use crate::Image;

/// Movement direction of an entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Moving up
	Up,
	/// Moving down
	Down,
	/// Moving left
	Left,
	/// Moving right
	Right,
	/// Not moving
	#[default]
	Stop,
}

impl Direction {
	/// `true` for [`Left`](Self::Left) and [`Right`](Self::Right).
	pub fn is_horizontal(self) -> bool {
		matches!(self, Self::Left | Self::Right)
	}

	/// `true` for [`Up`](Self::Up) and [`Down`](Self::Down).
	pub fn is_vertical(self) -> bool {
		matches!(self, Self::Up | Self::Down)
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Up => write!(f, "Up"),
			Self::Down => write!(f, "Down"),
			Self::Left => write!(f, "Left"),
			Self::Right => write!(f, "Right"),
			Self::Stop => write!(f, "Stop"),
		}
	}
}

/// State a sprite controller reads from and writes into.
pub trait Entity {
	/// Current movement direction.
	fn direction(&self) -> Direction;

	/// Whether the entity is alive.
	fn is_alive(&self) -> bool;

	/// Stores the image to draw this frame.
	fn set_image(&mut self, image: Image);
}

/// Minimal [`Entity`] implementation.
#[derive(Debug, Clone, Default)]
pub struct Actor {
	/// Current movement direction
	pub direction: Direction,
	/// Whether the actor is alive
	pub alive: bool,
	/// Image written by the controller
	pub image: Option<Image>,
}

impl Actor {
	/// Creates a living, stationary actor with no image.
	pub fn new() -> Self {
		Self {
			direction: Direction::Stop,
			alive: true,
			image: None,
		}
	}
}

impl Entity for Actor {
	fn direction(&self) -> Direction {
		self.direction
	}

	fn is_alive(&self) -> bool {
		self.alive
	}

	fn set_image(&mut self, image: Image) {
		self.image = Some(image);
	}
}

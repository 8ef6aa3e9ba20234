//! Frame sequence type.
//!
//! A `FrameSequence` is the ordered list of frame indices an [`Animator`] steps
//! through. Indices refer into whatever image set the owning controller holds.
//!
//! [`Animator`]: super::Animator

use crate::SpriteError;

/// Ordered, non-empty list of frame indices.
///
/// # Examples
///
/// ```
/// use dogmaze_sprites::animation::FrameSequence;
///
/// let seq = FrameSequence::new(vec![0, 1, 2, 1])?;
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.get(3), 1);
/// assert_eq!(seq.last(), 1);
/// # Ok::<(), dogmaze_sprites::SpriteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSequence {
	frames: Vec<usize>,
}

impl FrameSequence {
	/// Creates a sequence from frame indices.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::EmptySequence`] if `frames` is empty.
	pub fn new(frames: Vec<usize>) -> Result<Self, SpriteError> {
		if frames.is_empty() {
			return Err(SpriteError::EmptySequence);
		}
		Ok(Self {
			frames,
		})
	}

	/// Creates the sequence `0, 1, .., count - 1`.
	///
	/// # Errors
	///
	/// Returns [`SpriteError::EmptySequence`] if `count` is zero.
	pub fn ascending(count: usize) -> Result<Self, SpriteError> {
		Self::new((0..count).collect())
	}

	/// Fails if any index is not below `frame_count`.
	pub fn check_bounds(&self, frame_count: usize) -> Result<(), SpriteError> {
		match self.frames.iter().find(|&&frame| frame >= frame_count) {
			Some(&frame) => Err(SpriteError::FrameOutOfRange {
				frame,
				frame_count,
			}),
			None => Ok(()),
		}
	}

	/// Returns the frame index stored at `position`.
	///
	/// # Panics
	///
	/// Panics if `position >= self.len()`.
	pub fn get(&self, position: usize) -> usize {
		self.frames[position]
	}

	/// Returns the final frame index.
	pub fn last(&self) -> usize {
		self.frames[self.frames.len() - 1]
	}

	/// Number of positions in the sequence. Never zero.
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// The frame indices as a slice.
	pub fn frames(&self) -> &[usize] {
		&self.frames
	}
}

impl TryFrom<Vec<usize>> for FrameSequence {
	type Error = SpriteError;

	fn try_from(frames: Vec<usize>) -> Result<Self, Self::Error> {
		Self::new(frames)
	}
}

impl std::fmt::Display for FrameSequence {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "FrameSequence({} frames)", self.frames.len())
	}
}

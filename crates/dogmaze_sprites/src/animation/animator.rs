//! Time-driven frame animator.

use std::time::Duration;

use super::FrameSequence;

/// Steps through a [`FrameSequence`] as time elapses.
///
/// Elapsed time is accumulated against a fixed frame duration. Each whole
/// duration moves the position forward by one, with the remainder carried into
/// the next call. A looping animator wraps back to the first position; a
/// single-shot animator stops on the last position and ignores further time
/// until [`reset`](Self::reset).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dogmaze_sprites::animation::{Animator, FrameSequence};
///
/// let seq = FrameSequence::new(vec![4, 5, 6])?;
/// let mut anim = Animator::looping(seq, Duration::from_millis(50));
///
/// assert_eq!(anim.advance(Duration::from_millis(30)), 4);
/// assert_eq!(anim.advance(Duration::from_millis(30)), 5);
/// assert_eq!(anim.advance(Duration::from_millis(100)), 4);
/// # Ok::<(), dogmaze_sprites::SpriteError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animator {
	sequence: FrameSequence,
	position: usize,
	elapsed: Duration,
	frame_duration: Duration,
	looping: bool,
}

impl Animator {
	/// Creates an animator positioned on the first frame.
	///
	/// A zero `frame_duration` yields an animator that never advances.
	pub fn new(sequence: FrameSequence, frame_duration: Duration, looping: bool) -> Self {
		Self {
			sequence,
			position: 0,
			elapsed: Duration::ZERO,
			frame_duration,
			looping,
		}
	}

	/// Creates a looping animator.
	pub fn looping(sequence: FrameSequence, frame_duration: Duration) -> Self {
		Self::new(sequence, frame_duration, true)
	}

	/// Creates a single-shot animator that freezes on its last frame.
	pub fn once(sequence: FrameSequence, frame_duration: Duration) -> Self {
		Self::new(sequence, frame_duration, false)
	}

	/// Advances by `elapsed` and returns the current frame index.
	pub fn advance(&mut self, elapsed: Duration) -> usize {
		if self.frame_duration.is_zero() || self.is_finished() {
			return self.frame();
		}

		let total = self.elapsed.saturating_add(elapsed).as_nanos();
		let frame_nanos = self.frame_duration.as_nanos();
		let steps = total / frame_nanos;
		self.elapsed = duration_from_nanos(total % frame_nanos);

		let len = self.sequence.len();
		if self.looping {
			let steps = (steps % len as u128) as usize;
			self.position = (self.position + steps) % len;
		} else {
			let remaining = len - 1 - self.position;
			if steps >= remaining as u128 {
				self.position = len - 1;
				self.elapsed = Duration::ZERO;
			} else {
				self.position += steps as usize;
			}
		}

		self.frame()
	}

	/// Returns to the first frame and clears accumulated time.
	pub fn reset(&mut self) {
		self.position = 0;
		self.elapsed = Duration::ZERO;
	}

	/// Frame index at the current position.
	pub fn frame(&self) -> usize {
		self.sequence.get(self.position)
	}

	/// Current position within the sequence.
	pub fn position(&self) -> usize {
		self.position
	}

	/// Time accumulated toward the next frame.
	pub fn elapsed(&self) -> Duration {
		self.elapsed
	}

	/// `true` once a single-shot animator has reached its last frame.
	pub fn is_finished(&self) -> bool {
		!self.looping && self.position == self.sequence.len() - 1
	}

	/// Whether the animator wraps around.
	pub fn is_looping(&self) -> bool {
		self.looping
	}

	/// The owned frame sequence.
	pub fn sequence(&self) -> &FrameSequence {
		&self.sequence
	}

	/// Time each frame stays current.
	pub fn frame_duration(&self) -> Duration {
		self.frame_duration
	}
}

/// Builds a duration from a nanosecond count below `Duration::MAX`.
fn duration_from_nanos(nanos: u128) -> Duration {
	const NANOS_PER_SEC: u128 = 1_000_000_000;
	Duration::new((nanos / NANOS_PER_SEC) as u64, (nanos % NANOS_PER_SEC) as u32)
}

//! Frame animation.
//!
//! Animations are plain lists of frame indices stepped through by elapsed time.
//! Controllers own one [`Animator`] per movement direction and use the frame it
//! returns to pick an image from their own frame set.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use dogmaze_sprites::animation::{Animator, FrameSequence};
//!
//! let mut death = Animator::once(FrameSequence::ascending(3)?, Duration::from_millis(50));
//!
//! assert_eq!(death.advance(Duration::from_millis(500)), 2);
//! assert!(death.is_finished());
//!
//! death.reset();
//! assert_eq!(death.frame(), 0);
//! # Ok::<(), dogmaze_sprites::SpriteError>(())
//! ```

pub mod animator;
pub mod sequence;

pub use self::animator::Animator;
pub use self::sequence::FrameSequence;

//! Prelude module for `dogmaze_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use dogmaze_internal::prelude::*;
//!
//! let grid = MazeGrid::parse("X . X").unwrap();
//! assert_eq!(decorate(&grid, 0, 1), TileVisual::Road(None));
//! ```

// Re-export everything from dogmaze_sprites::prelude
#[doc(inline)]
pub use dogmaze_sprites::prelude::*;

// Re-export the entire dogmaze_sprites module for advanced usage
#[doc(inline)]
pub use dogmaze_sprites;

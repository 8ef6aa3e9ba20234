#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `dogmaze-rs` renders the sprites, animations and maze background of a
//! dog-themed maze chase game.
//!
pub use dogmaze_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use dogmaze_dylib;

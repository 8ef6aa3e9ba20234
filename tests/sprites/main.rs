//! Integration tests for `dogmaze-rs` asset loading and rendering

mod assets;
mod maze;

use std::path::PathBuf;

/// Creates an empty scratch directory for one test.
pub(crate) fn scratch_dir(name: &str) -> PathBuf {
	let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("sprites").join(name);
	if dir.exists() {
		std::fs::remove_dir_all(&dir).unwrap();
	}
	std::fs::create_dir_all(&dir).unwrap();
	dir
}

//! Loading sprite assets from disk

use std::{sync::Arc, time::Duration};

use dogmaze_rs::prelude::*;
use image::{Rgba, RgbaImage};

use crate::scratch_dir;

fn write_config(dir: &std::path::Path, extra: &str) -> RenderConfig {
	let path = dir.join("dogmaze.toml");
	let text = format!(
		"[assets]\nroot = {:?}\nprotagonist_frame_count = 3\n{extra}",
		dir.display().to_string()
	);
	std::fs::write(&path, text).unwrap();
	RenderConfig::load(&path).unwrap()
}

fn write_frames(dir: &std::path::Path, count: u8) {
	for i in 1..=count {
		// left half opaque, right half transparent, 16x16 source art
		let frame = RgbaImage::from_fn(16, 16, |x, _| {
			if x < 8 {
				Rgba([i * 40, 0, 0, 255])
			} else {
				Rgba([0, 0, 0, 0])
			}
		});
		frame.save(dir.join(format!("dog-grande-{i}.png"))).unwrap();
	}
}

#[test_log::test]
fn test_protagonist_from_disk() {
	let dir = scratch_dir("protagonist");
	write_frames(&dir, 3);
	let config = write_config(&dir, "");

	let mut sprites = PacmanSprites::load(&config).unwrap();
	assert_eq!(sprites.frames().len(), 3);
	assert_eq!(sprites.frames()[0].dimensions(), (32, 32));

	let mut dog = Actor::new();
	dog.direction = Direction::Right;
	sprites.update(&mut dog, Duration::from_millis(50));

	let image = dog.image.clone().unwrap();
	assert!(Arc::ptr_eq(&image, &sprites.mirrored_frames()[1]));
	assert_eq!(image.get_pixel(31, 0), &Rgba([80, 0, 0, 255]));
	assert_eq!(image.get_pixel(0, 0)[3], 0);
}

#[test_log::test]
fn test_missing_protagonist_frame_fails() {
	let dir = scratch_dir("protagonist_missing");
	write_frames(&dir, 2);
	let config = write_config(&dir, "");

	let err = PacmanSprites::load(&config).unwrap_err();
	match err {
		SpriteError::Io {
			path,
			..
		} => assert!(path.ends_with("dog-grande-3.png")),
		other => panic!("unexpected error: {other}"),
	}
}

#[test_log::test]
fn test_static_sprites_from_disk() {
	let dir = scratch_dir("static");
	write_frames(&dir, 1);
	RgbaImage::from_pixel(20, 20, Rgba([0, 0, 255, 255])).save(dir.join("coleira.png")).unwrap();
	RgbaImage::from_pixel(8, 8, Rgba([255, 0, 0, 255])).save(dir.join("pipula.png")).unwrap();
	let config = write_config(&dir, "[tile]\nwidth = 8\nheight = 8\n");

	let ghost = GhostSprites::load(&config).unwrap();
	let fruit = FruitSprites::load(&config).unwrap();
	let mut lives = LifeSprites::load(3, &config).unwrap();

	assert_eq!(ghost.image().dimensions(), (16, 16));
	assert_eq!(ghost.image().get_pixel(15, 15), &Rgba([0, 0, 255, 255]));
	assert_eq!(fruit.start_image().dimensions(), (16, 16));
	assert_eq!(lives.start_image().dimensions(), (16, 16));

	lives.remove_image();
	lives.remove_image();
	assert_eq!(lives.len(), 1);
	lives.remove_image();
	lives.remove_image();
	assert!(lives.is_empty());
}

#[test_log::test]
fn test_spritesheet_from_disk() {
	let dir = scratch_dir("sheet");
	let key = Rgba([0, 0, 0, 255]);
	let mut art = RgbaImage::from_pixel(32, 16, key);
	for y in 0..16 {
		for x in 16..32 {
			art.put_pixel(x, y, Rgba([255, 255, 0, 255]));
		}
	}
	let path = dir.join("spritesheet_mspacman.png");
	art.save(&path).unwrap();

	let tile = TileSize {
		base_width: 16,
		base_height: 16,
		width: 8,
		height: 8,
	};
	let sheet = Spritesheet::open(&path, tile).unwrap();
	assert_eq!((sheet.width(), sheet.height()), (16, 8));
	assert_eq!(sheet.color_key(), key);

	let blank = sheet.image(0, 0, 8, 8);
	assert!(blank.pixels().all(|p| p[3] == 0));
	let yellow = sheet.image(1, 0, 8, 8);
	assert!(yellow.pixels().all(|p| *p == Rgba([255, 255, 0, 255])));
}

#[test_log::test]
fn test_undecodable_image() {
	let dir = scratch_dir("corrupt");
	let path = dir.join("broken.png");
	std::fs::write(&path, b"not a png").unwrap();

	let err = Spritesheet::open(&path, TileSize::default()).unwrap_err();
	assert!(matches!(err, SpriteError::Image { .. }), "{err}");
}

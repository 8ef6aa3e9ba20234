//! Tile sheet loading and cell extraction.
//!
//! The sheet is keyed on its top-left pixel: every pixel with the same RGB value
//! becomes fully transparent. The whole sheet is then scaled so one source cell
//! (`TileSize::base_*`) covers exactly one on-screen tile.

use std::{path::Path, sync::Arc};

use image::{
	DynamicImage, Rgba, RgbaImage,
	imageops::{self, FilterType},
};

use crate::{Image, SpriteError, config::TileSize};

/// A scaled, color-keyed sprite sheet.
///
/// # Examples
///
/// ```
/// use dogmaze_sprites::{Spritesheet, config::TileSize};
/// use image::{Rgba, RgbaImage};
///
/// // 2x1 cells of 8px source art, shown as 16px tiles
/// let mut art = RgbaImage::from_pixel(16, 8, Rgba([0, 0, 0, 255]));
/// art.put_pixel(12, 4, Rgba([255, 0, 0, 255]));
///
/// let tile = TileSize { base_width: 8, base_height: 8, width: 16, height: 16 };
/// let sheet = Spritesheet::from_image(art.into(), tile)?;
/// assert_eq!((sheet.width(), sheet.height()), (32, 16));
///
/// let cell = sheet.image(1, 0, 16, 16);
/// assert_eq!(cell.get_pixel(0, 0)[3], 0);
/// assert_eq!(cell.get_pixel(8, 8), &Rgba([255, 0, 0, 255]));
/// # Ok::<(), dogmaze_sprites::SpriteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Spritesheet {
	sheet: RgbaImage,
	color_key: Rgba<u8>,
	tile: TileSize,
}

impl Spritesheet {
	/// Loads and prepares a sheet from an image file.
	///
	/// # Errors
	///
	/// Returns an error if the file cannot be decoded or the tile size is invalid.
	pub fn open(path: impl AsRef<Path>, tile: TileSize) -> Result<Self, SpriteError> {
		let path = path.as_ref();
		let source = load_image(path)?;
		let sheet = Self::from_image(source, tile)?;
		log::info!(
			"Loaded spritesheet {} ({}x{} scaled)",
			path.display(),
			sheet.width(),
			sheet.height()
		);
		Ok(sheet)
	}

	/// Prepares a sheet from an already decoded image.
	///
	/// # Errors
	///
	/// Returns an error if the tile size is invalid.
	pub fn from_image(source: DynamicImage, tile: TileSize) -> Result<Self, SpriteError> {
		tile.validate()?;

		let mut sheet = source.into_rgba8();
		let color_key = apply_color_key(&mut sheet);
		let (width, height) = tile.scale(sheet.width(), sheet.height());
		let sheet = imageops::resize(&sheet, width, height, FilterType::Nearest);

		Ok(Self {
			sheet,
			color_key,
			tile,
		})
	}

	/// Returns the `width` x `height` pixel region whose top-left corner is at
	/// tile `(cell_x, cell_y)`.
	///
	/// The region must lie inside the scaled sheet. Release builds clip the
	/// region to the sheet.
	///
	/// # Panics
	///
	/// Debug builds panic if the region is not inside the sheet.
	pub fn image(&self, cell_x: u32, cell_y: u32, width: u32, height: u32) -> Image {
		let x = cell_x.saturating_mul(self.tile.width);
		let y = cell_y.saturating_mul(self.tile.height);
		debug_assert!(
			x.saturating_add(width) <= self.sheet.width()
				&& y.saturating_add(height) <= self.sheet.height(),
			"cell ({cell_x}, {cell_y}) {width}x{height} outside {}x{} sheet",
			self.sheet.width(),
			self.sheet.height()
		);
		Arc::new(imageops::crop_imm(&self.sheet, x, y, width, height).to_image())
	}

	/// The color that was treated as transparent.
	pub fn color_key(&self) -> Rgba<u8> {
		self.color_key
	}

	/// Scaled sheet width in pixels.
	pub fn width(&self) -> u32 {
		self.sheet.width()
	}

	/// Scaled sheet height in pixels.
	pub fn height(&self) -> u32 {
		self.sheet.height()
	}

	/// Tile geometry used for cell addressing.
	pub fn tile(&self) -> TileSize {
		self.tile
	}
}

/// Decodes an image file, attaching the path to any error.
pub(crate) fn load_image(path: &Path) -> Result<DynamicImage, SpriteError> {
	image::open(path).map_err(|err| match err {
		image::ImageError::IoError(source) => SpriteError::io(path, source),
		other => SpriteError::image(path, other),
	})
}

/// Loads a standalone image and scales it to exactly `width` x `height`.
pub(crate) fn load_scaled(path: &Path, width: u32, height: u32) -> Result<Image, SpriteError> {
	let source = load_image(path)?.into_rgba8();
	log::debug!("Loaded {} ({}x{})", path.display(), source.width(), source.height());
	Ok(Arc::new(scale_to(&source, width, height)))
}

/// Scales an image to exactly `width` x `height`.
pub(crate) fn scale_to(source: &RgbaImage, width: u32, height: u32) -> RgbaImage {
	if source.dimensions() == (width, height) {
		return source.clone();
	}
	imageops::resize(source, width, height, FilterType::Nearest)
}

/// Makes every pixel matching the top-left pixel's RGB transparent and returns
/// the key color.
fn apply_color_key(image: &mut RgbaImage) -> Rgba<u8> {
	if image.width() == 0 || image.height() == 0 {
		return Rgba([0, 0, 0, 0]);
	}

	let key = *image.get_pixel(0, 0);
	for pixel in image.pixels_mut() {
		if pixel.0[..3] == key.0[..3] {
			pixel.0[3] = 0;
		}
	}
	key
}

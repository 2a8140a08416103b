
//////
//
// Imports
//

// Standard library
use std::path::Path;

// Image library
use image;

// Local imports
use crate::*;



//////
//
// Types
//

/// A baked RGBA8 lookup texture, ready for upload to the GPU.
pub type Texture = image::RgbaImage;



//////
//
// Constants
//

/// The widest 1D lookup texture that will be baked. Larger requests are clamped.
pub const MAX_TEXTURE_1D_WIDTH: u32 = 16384;

/// The largest edge length of a 2D lookup texture that will be baked (64 MiB of texels). Larger requests are clamped.
pub const MAX_TEXTURE_2D_SIZE: u32 = 4096;



//////
//
// Functions
//

/// Clamps a requested texture extent into `[1, max]`, warning if the request exceeded `max`.
pub fn clampExtent (requested: u32, max: u32) -> u32
{
	if requested > max {
		tracing::warn!("Requested lookup texture extent {requested} exceeds the maximum of {max}, clamping");
	}
	requested.clamp(1, max)
}

/// Bakes a 1-texel-high lookup texture by sampling `sample` at `width` evenly spaced points spanning `[lo, hi]`
/// inclusively. The width is [clamped](clampExtent) to `[1, MAX_TEXTURE_1D_WIDTH]`.
pub fn bake1D (width: u32, lo: f32, hi: f32, sample: impl Fn(f32)->Colour) -> Texture
{
	let width = clampExtent(width, MAX_TEXTURE_1D_WIDTH);
	let denom = (width-1).max(1) as f32;
	Texture::from_fn(width, 1, |x, _| {
		let value = util::math::lerp(lo, hi, x as f32 / denom);
		sample(value).toRgba8()
	})
}

/// Bakes a square lookup texture by sampling `sample` at the texel centres of a `size`×`size` grid over the unit
/// square. The x axis indexes the first argument of `sample`, the y axis the second. The size is
/// [clamped](clampExtent) to `[1, MAX_TEXTURE_2D_SIZE]`.
pub fn bake2D (size: u32, sample: impl Fn(f32, f32)->Colour) -> Texture
{
	let size = clampExtent(size, MAX_TEXTURE_2D_SIZE);
	let texelCentre = |i: u32| (i as f32 + 0.5) / size as f32;
	Texture::from_fn(size, size, |x, y| sample(texelCentre(x), texelCentre(y)).toRgba8())
}

/// Writes a baked texture to a PNG file.
pub fn savePng (texture: &Texture, filepath: impl AsRef<Path>) -> Result<()> {
	texture.save_with_format(filepath.as_ref(), image::ImageFormat::Png)?;
	tracing::debug!("Wrote lookup texture to {}", filepath.as_ref().display());
	Ok(())
}

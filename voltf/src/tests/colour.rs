
//////
//
// Imports
//

// Local imports
use crate::*;
use super::assertNear;



//////
//
// Tests
//

#[test]
fn test_mix() {
	let mid = Colour::BLACK.mix(&Colour::new(1., 0.5, 0.25, 0.), 0.5);
	assertNear(mid.r, 0.5);
	assertNear(mid.g, 0.25);
	assertNear(mid.b, 0.125);
	assertNear(mid.a, 0.5);
}

#[test]
fn test_glmConversion() {
	let colour = Colour::new(0.1, 0.2, 0.3, 0.4);
	let v: glm::Vec4 = colour.into();
	assert_eq!(v, glm::vec4(0.1, 0.2, 0.3, 0.4));
	assert_eq!(Colour::from(v), colour);
}

#[test]
fn test_toRgba8() {
	assert_eq!(Colour::WHITE.toRgba8(), image::Rgba([255, 255, 255, 255]));
	assert_eq!(Colour::CLEAR.toRgba8(), image::Rgba([0, 0, 0, 0]));
	assert_eq!(Colour::new(2., -1., 0.5, 1.).toRgba8(), image::Rgba([255, 0, 128, 255]));
}

#[test]
fn test_jsonMissingComponents() {
	let colour: Colour = serde_json::from_str(r#"{"r": 1.0, "b": 0.5}"#).unwrap();
	assert_eq!(colour, Colour::new(1., 0., 0.5, 0.));
}

#[test]
fn test_bake1D_endpoints()
{
	let tex = texture::bake1D(5, 0., 1., |v| Colour::new(v, 0., 0., 1.));
	assert_eq!(tex.dimensions(), (5, 1));
	assert_eq!(tex.get_pixel(0, 0)[0], 0);
	assert_eq!(tex.get_pixel(2, 0)[0], 128);
	assert_eq!(tex.get_pixel(4, 0)[0], 255);
}

#[test]
fn test_bake_degenerateSizes() {
	assert_eq!(texture::bake1D(0, 0., 1., |_| Colour::WHITE).dimensions(), (1, 1));
	assert_eq!(texture::bake2D(0, |_, _| Colour::WHITE).dimensions(), (1, 1));
}

#[test]
fn test_bake2D_axes()
{
	let tex = texture::bake2D(4, |value, gradient| Colour::new(value, gradient, 0., 1.));
	assert_eq!(tex.dimensions(), (4, 4));
	// texel centres are at 1/8, 3/8, 5/8, 7/8
	assert_eq!(tex.get_pixel(0, 3)[0], util::math::toUnorm8(0.125));
	assert_eq!(tex.get_pixel(0, 3)[1], util::math::toUnorm8(0.875));
}

#[test]
fn test_savePng()
{
	let dir = tempfile::tempdir().unwrap();
	let file = dir.path().join("lut.png");
	let tex = texture::bake1D(16, 0., 1., |v| Colour::new(v, v, v, 1.));
	texture::savePng(&tex, &file).unwrap();
	let reloaded = image::open(&file).unwrap().to_rgba8();
	assert_eq!(reloaded, tex);
}

#[test]
fn test_clampExtent() {
	assert_eq!(texture::clampExtent(0, 64), 1);
	assert_eq!(texture::clampExtent(64, 64), 64);
	assert_eq!(texture::clampExtent(100_000, texture::MAX_TEXTURE_2D_SIZE), texture::MAX_TEXTURE_2D_SIZE);
}

#[test]
fn test_bake1D_clampsWidth() {
	let tex = texture::bake1D(u32::MAX, 0., 1., |_| Colour::WHITE);
	assert_eq!(tex.dimensions(), (texture::MAX_TEXTURE_1D_WIDTH, 1));
}

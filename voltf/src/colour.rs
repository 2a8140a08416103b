
//////
//
// Imports
//

// GLM library
use glm;

// Serde framework
use serde;

// Local imports
use crate::*;



//////
//
// Structs
//

/// A linear RGBA colour with normalized floating point components.
///
/// The JSON form is `{"r": …, "g": …, "b": …, "a": …}`. Components missing from the JSON default to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Colour {
	pub r: f32,
	pub g: f32,
	pub b: f32,
	pub a: f32
}
impl Colour
{
	/// Opaque white.
	pub const WHITE: Colour = Colour::new(1., 1., 1., 1.);

	/// Opaque black.
	pub const BLACK: Colour = Colour::new(0., 0., 0., 1.);

	/// Fully transparent black.
	pub const CLEAR: Colour = Colour::new(0., 0., 0., 0.);

	#[inline(always)]
	pub const fn new (r: f32, g: f32, b: f32, a: f32) -> Self {
		Self { r, g, b, a }
	}

	/// Returns the same colour with its alpha component replaced.
	#[inline(always)]
	pub const fn withAlpha (&self, a: f32) -> Self {
		Self { a, ..*self }
	}

	/// Linearly interpolates all four components towards `other`.
	pub fn mix (&self, other: &Colour, t: f32) -> Colour {
		glm::mix(&glm::Vec4::from(*self), &glm::Vec4::from(*other), t).into()
	}

	/// Quantizes the colour into an 8-bit-per-channel texel, saturating out-of-range components.
	pub fn toRgba8 (&self) -> image::Rgba<u8> {
		use crate::util::math::toUnorm8;
		image::Rgba([toUnorm8(self.r), toUnorm8(self.g), toUnorm8(self.b), toUnorm8(self.a)])
	}
}
impl From<glm::Vec4> for Colour {
	#[inline(always)]
	fn from (v: glm::Vec4) -> Self {
		Self::new(v.x, v.y, v.z, v.w)
	}
}
impl From<Colour> for glm::Vec4 {
	#[inline(always)]
	fn from (c: Colour) -> Self {
		glm::vec4(c.r, c.g, c.b, c.a)
	}
}

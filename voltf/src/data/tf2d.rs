
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
use data::transferfunc::TransferFunctionEval;



//////
//
// Constants
//

/// The default edge length of the square lookup texture baked by [`TransferFunction2D::generateTexture`].
pub const TEXTURE_SIZE: u32 = runenv::DEFAULT_TEXTURE_2D_SIZE;



//////
//
// Structs
//

/// An axis-aligned rectangle, given by its minimum corner and its extent.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Rect {
	pub x: f32,
	pub y: f32,
	pub width: f32,
	pub height: f32
}
impl Rect
{
	#[inline(always)]
	pub fn new (x: f32, y: f32, width: f32, height: f32) -> Self {
		Self { x, y, width, height }
	}

	#[inline(always)]
	pub fn min (&self) -> glm::Vec2 {
		glm::vec2(self.x, self.y)
	}

	#[inline(always)]
	pub fn extent (&self) -> glm::Vec2 {
		glm::vec2(self.width, self.height)
	}

	#[inline(always)]
	pub fn centre (&self) -> glm::Vec2 {
		self.min() + self.extent()*0.5
	}

	/// Whether the point lies inside the rectangle (borders included). Rectangles with a non-positive extent along
	/// either axis contain nothing.
	pub fn contains (&self, point: &glm::Vec2) -> bool {
		   self.width > 0. && self.height > 0.
		&& point.x >= self.x && point.x <= self.x+self.width
		&& point.y >= self.y && point.y <= self.y+self.height
	}
}

/// A box of a [2D transfer function](TransferFunction2D): a rectangular region of (data value, gradient magnitude)
/// space with a uniform colour and an opacity that falls off from the centre towards the border.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TF2DBox {
	pub colour: Colour,
	pub rect: Rect,

	/// Opacity at the border of the box.
	pub minAlpha: f32,

	/// Opacity at the centre of the box.
	pub alpha: f32
}
impl TF2DBox
{
	/// The opacity this box contributes at the given point, or [`None`] if the point lies outside of it.
	pub fn alphaAt (&self, point: &glm::Vec2) -> Option<f32>
	{
		if !self.rect.contains(point) {
			return None;
		}
		// Normalized Chebyshev distance from the centre: 0 at the centre, 1 on the border
		let rel = glm::abs(&(point - self.rect.centre())).component_div(&(self.rect.extent()*0.5));
		let dist = glm::clamp_scalar(rel.x.max(rel.y), 0., 1.);
		Some(util::math::lerp(self.alpha, self.minAlpha, dist))
	}
}

/// A 2D transfer function over (data value, gradient magnitude) space, composed of [boxes](TF2DBox).
#[derive(Debug, Clone, Default)]
pub struct TransferFunction2D {
	pub boxes: Vec<TF2DBox>,
	texture: Option<Texture>
}
impl PartialEq for TransferFunction2D
{
	/// Compares the boxes only, the baked texture is ignored.
	fn eq (&self, other: &Self) -> bool {
		self.boxes == other.boxes
	}
}
impl TransferFunction2D
{
	/// Creates a transfer function without any boxes.
	pub fn new () -> Self {
		Self::default()
	}

	/// Creates a transfer function from the given boxes. No texture is baked.
	pub fn fromBoxes (boxes: Vec<TF2DBox>) -> Self {
		Self { boxes, texture: None }
	}

	/// Appends a box with the given placement, colour and central opacity. The opacity falls off to zero towards the
	/// border.
	pub fn addBox (&mut self, x: f32, y: f32, width: f32, height: f32, colour: Colour, alpha: f32) {
		self.boxes.push(TF2DBox {
			colour, rect: Rect::new(x, y, width, height), minAlpha: 0., alpha
		});
	}

	/// Colour and opacity at the given data value and gradient magnitude. Where boxes overlap, the one contributing
	/// the highest opacity wins, ties going to the box added first. Outside all boxes the result is
	/// [`Colour::CLEAR`].
	pub fn colourAt (&self, dataValue: f32, gradient: f32) -> Colour
	{
		let point = glm::vec2(dataValue, gradient);
		let mut result: Option<Colour> = None;
		for tfBox in &self.boxes {
			if let Some(alpha) = tfBox.alphaAt(&point)
				&& result.is_none_or(|best| alpha > best.a) {
				result = Some(tfBox.colour.withAlpha(alpha));
			}
		}
		result.unwrap_or(Colour::CLEAR)
	}

	/// Bakes the lookup texture at the default [size](TEXTURE_SIZE) and caches it. Must be called again after the
	/// boxes have been edited.
	pub fn generateTexture (&mut self) {
		self.generateTextureWithSize(TEXTURE_SIZE)
	}

	/// Bakes the square lookup texture with the given edge length and caches it.
	pub fn generateTextureWithSize (&mut self, size: u32) {
		let texture = texture::bake2D(size, |value, gradient| self.colourAt(value, gradient));
		tracing::trace!("Baked 2D transfer function texture ({}x{} texels)", texture.width(), texture.height());
		self.texture = Some(texture);
	}

	/// The most recently baked lookup texture, if any.
	#[inline]
	pub fn texture (&self) -> Option<&Texture> {
		self.texture.as_ref()
	}

	/// The cached lookup texture, baking it at the default size first if there is none yet.
	pub fn getTexture (&mut self) -> &Texture {
		let texture = match self.texture.take() {
			Some(texture) => texture,
			None => texture::bake2D(TEXTURE_SIZE, |value, gradient| self.colourAt(value, gradient))
		};
		self.texture.insert(texture)
	}
}
impl TransferFunctionEval<glm::Vec2, Colour> for TransferFunction2D
{
	/// Evaluate the transfer function for the given (data value, gradient magnitude) pair.
	fn eval (&self, input: &glm::Vec2) -> Colour {
		self.colourAt(input.x, input.y)
	}
}

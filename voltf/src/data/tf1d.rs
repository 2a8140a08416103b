
//////
//
// Imports
//

// Serde framework
use serde;

// Local imports
use crate::*;
use data::transferfunc::TransferFunctionEval;



//////
//
// Constants
//

/// The default width of the lookup texture baked by [`TransferFunction::generateTexture`].
pub const TEXTURE_WIDTH: u32 = runenv::DEFAULT_TEXTURE_1D_WIDTH;



//////
//
// Structs
//

/// A colour stop of a [1D transfer function](TransferFunction).
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ColourControlPoint {
	/// Position of the stop, either normalized or in data value space.
	pub dataValue: f32,

	/// The colour at this stop. Only the RGB part contributes to the transfer function, opacity comes from the
	/// [alpha control points](AlphaControlPoint).
	pub colourValue: Colour
}
impl ColourControlPoint {
	#[inline(always)]
	pub fn new (dataValue: f32, colourValue: Colour) -> Self {
		Self { dataValue, colourValue }
	}
}

/// An opacity stop of a [1D transfer function](TransferFunction).
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlphaControlPoint {
	pub dataValue: f32,
	pub alphaValue: f32
}
impl AlphaControlPoint {
	#[inline(always)]
	pub fn new (dataValue: f32, alphaValue: f32) -> Self {
		Self { dataValue, alphaValue }
	}
}

/// Shared access to the position of a control point, for sorting and interpolation.
trait ControlPoint: Copy {
	type Value;
	fn position (&self) -> f32;
	fn value (&self) -> Self::Value;
	fn mix (a: &Self::Value, b: &Self::Value, t: f32) -> Self::Value;
}
impl ControlPoint for ColourControlPoint
{
	type Value = Colour;

	#[inline(always)]
	fn position (&self) -> f32 { self.dataValue }

	#[inline(always)]
	fn value (&self) -> Colour { self.colourValue }

	#[inline(always)]
	fn mix (a: &Colour, b: &Colour, t: f32) -> Colour { a.mix(b, t) }
}
impl ControlPoint for AlphaControlPoint
{
	type Value = f32;

	#[inline(always)]
	fn position (&self) -> f32 { self.dataValue }

	#[inline(always)]
	fn value (&self) -> f32 { self.alphaValue }

	#[inline(always)]
	fn mix (a: &f32, b: &f32, t: f32) -> f32 { util::math::lerp(*a, *b, t) }
}

/// Returns a copy of the given control points, sorted by position. The input order is left untouched.
fn sortedByPosition<P: ControlPoint> (points: &[P]) -> Vec<P> {
	let mut sorted = points.to_vec();
	sorted.sort_by(|a, b| a.position().total_cmp(&b.position()));
	sorted
}

/// Piecewise linear interpolation over control points that are already sorted by position. Returns [`None`] iff there
/// are no points.
fn sampleSorted<P: ControlPoint> (sorted: &[P], at: f32) -> Option<P::Value>
{
	let (first, last) = (sorted.first()?, sorted.last()?);
	if at <= first.position() {
		return Some(first.value());
	}
	if at >= last.position() {
		return Some(last.value());
	}
	sorted.windows(2).find(|w| at <= w[1].position()).map(|w| {
		let t = util::math::inverseLerp(w[0].position(), w[1].position(), at);
		P::mix(&w[0].value(), &w[1].value(), t)
	})
}

/// A 1D transfer function, mapping scalar data values to colour and opacity through two independent sets of control
/// points.
///
/// The stored order of the control points is never changed. Evaluation sorts a private copy.
#[derive(Debug, Clone)]
pub struct TransferFunction
{
	/// The colour stops.
	pub colourControlPoints: Vec<ColourControlPoint>,

	/// The opacity stops.
	pub alphaControlPoints: Vec<AlphaControlPoint>,

	/// Lower bound of the data value domain the control points refer to.
	pub minDataValue: f32,

	/// Upper bound of the data value domain the control points refer to. Equal to
	/// [`minDataValue`](Self::minDataValue) iff the transfer function has no defined scale.
	pub maxDataValue: f32,

	texture: Option<Texture>
}
impl Default for TransferFunction {
	fn default () -> Self {
		Self::new()
	}
}
impl PartialEq for TransferFunction
{
	/// Compares the definition only, the baked texture is ignored.
	fn eq (&self, other: &Self) -> bool {
		   self.colourControlPoints == other.colourControlPoints
		&& self.alphaControlPoints == other.alphaControlPoints
		&& self.minDataValue == other.minDataValue
		&& self.maxDataValue == other.maxDataValue
	}
}
impl TransferFunction
{
	/// Creates an empty transfer function over the normalized domain `[0, 1]`.
	pub fn new () -> Self { Self {
		colourControlPoints: Vec::new(), alphaControlPoints: Vec::new(), minDataValue: 0., maxDataValue: 1.,
		texture: None
	}}

	/// Creates a transfer function from its parts. No texture is baked.
	pub fn fromParts (
		colourControlPoints: Vec<ColourControlPoint>, alphaControlPoints: Vec<AlphaControlPoint>,
		minDataValue: f32, maxDataValue: f32
	) -> Self { Self {
		colourControlPoints, alphaControlPoints, minDataValue, maxDataValue, texture: None
	}}

	/// Appends a colour stop.
	pub fn addColourPoint (&mut self, point: ColourControlPoint) {
		self.colourControlPoints.push(point);
	}

	/// Appends an opacity stop.
	pub fn addAlphaPoint (&mut self, point: AlphaControlPoint) {
		self.alphaControlPoints.push(point);
	}

	/// Whether the declared data value domain has non-zero extent.
	#[inline]
	pub fn hasDefinedScale (&self) -> bool {
		self.minDataValue != self.maxDataValue
	}

	/// The colour (RGB only, alpha is passed through from the colour stops) at the given data value. Without any
	/// colour stops this is white.
	pub fn colourAt (&self, dataValue: f32) -> Colour {
		sampleSorted(&sortedByPosition(&self.colourControlPoints), dataValue).unwrap_or(Colour::WHITE)
	}

	/// The opacity at the given data value. Without any opacity stops this is `1`.
	pub fn alphaAt (&self, dataValue: f32) -> f32 {
		sampleSorted(&sortedByPosition(&self.alphaControlPoints), dataValue).unwrap_or(1.)
	}

	/// The domain the lookup texture spans: the declared one if it is defined, the unit interval otherwise.
	pub fn textureDomain (&self) -> (f32, f32) {
		if self.hasDefinedScale() { (self.minDataValue, self.maxDataValue) } else { (0., 1.) }
	}

	/// Bakes the lookup texture at the default [width](TEXTURE_WIDTH) and caches it. Must be called again after the
	/// control points have been edited.
	pub fn generateTexture (&mut self) {
		self.generateTextureWithWidth(TEXTURE_WIDTH)
	}

	/// Bakes the lookup texture at the given width and caches it.
	pub fn generateTextureWithWidth (&mut self, width: u32) {
		let texture = self.bake(width);
		tracing::trace!("Baked 1D transfer function texture ({} texels)", texture.width());
		self.texture = Some(texture);
	}

	/// The most recently baked lookup texture, if any.
	#[inline]
	pub fn texture (&self) -> Option<&Texture> {
		self.texture.as_ref()
	}

	/// The cached lookup texture, baking it at the default width first if there is none yet.
	pub fn getTexture (&mut self) -> &Texture {
		let texture = match self.texture.take() {
			Some(texture) => texture,
			None => self.bake(TEXTURE_WIDTH)
		};
		self.texture.insert(texture)
	}

	fn bake (&self, width: u32) -> Texture
	{
		let colours = sortedByPosition(&self.colourControlPoints);
		let alphas = sortedByPosition(&self.alphaControlPoints);
		let (lo, hi) = self.textureDomain();
		texture::bake1D(width, lo, hi, |value| {
			let colour = sampleSorted(&colours, value).unwrap_or(Colour::WHITE);
			colour.withAlpha(sampleSorted(&alphas, value).unwrap_or(1.))
		})
	}
}
impl TransferFunctionEval<f32, Colour> for TransferFunction
{
	/// Evaluate the transfer function for the given data value: colour from the colour stops, opacity from the alpha
	/// stops.
	fn eval (&self, input: &f32) -> Colour {
		self.colourAt(*input).withAlpha(self.alphaAt(*input))
	}
}

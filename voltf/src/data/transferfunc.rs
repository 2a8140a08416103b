
//////
//
// Imports
//

// GLM library
use glm;

// Local imports
use crate::*;



//////
//
// Traits
//

/// An interface for an arbitrary transfer function.
pub trait TransferFunctionEval<SourceType, OutputType>
{
	fn eval (&self, input: &SourceType) -> OutputType;
}



//////
//
// Classes
//

/// A transfer function that linearly re-maps a scalar from one range into another. Inputs outside the source range
/// are clamped onto the nearest bound of the target range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarLinearRemap {
	inRange: glm::Vec2,
	outRange: glm::Vec2
}
impl ScalarLinearRemap
{
	pub fn new (inRange: &glm::Vec2, outRange: &glm::Vec2) -> Self { Self {
		inRange: *inRange, outRange: *outRange
	}}

	/// Whether the source range has non-zero extent. Remapping from an empty range sends every input to the lower
	/// bound of the target range.
	#[inline]
	pub fn isWellDefined (&self) -> bool {
		self.inRange.x != self.inRange.y
	}
}
impl TransferFunctionEval<f32, f32> for ScalarLinearRemap
{
	fn eval (&self, input: &f32) -> f32 {
		util::math::remap(*input, self.inRange.x, self.inRange.y, self.outRange.x, self.outRange.y)
	}
}


//////
//
// Imports
//

// GLM library
use nalgebra_glm as glm;



//////
//
// Functions
//

/// Linearly interpolates between `a` and `b`. The interpolation parameter `t` is clamped to the unit interval first,
/// so the result never leaves the range spanned by `a` and `b`.
///
/// # Arguments
///
/// * `a` – The value at `t = 0`.
/// * `b` – The value at `t = 1`.
/// * `t` – The interpolation parameter.
///
/// # Returns
///
/// The interpolated value.
#[inline]
pub fn lerp (a: f32, b: f32, t: f32) -> f32 {
	glm::mix_scalar(a, b, glm::clamp_scalar(t, 0., 1.))
}

/// Computes the parameter that [`lerp`] would need to produce `value` between `a` and `b`, clamped to the unit
/// interval. For the degenerate range `a == b` this returns `0`.
///
/// # Arguments
///
/// * `a` – The start of the range.
/// * `b` – The end of the range.
/// * `value` – The value to locate within the range.
///
/// # Returns
///
/// The relative position of `value` inside `[a, b]`, in `[0, 1]`.
#[inline]
pub fn inverseLerp (a: f32, b: f32, value: f32) -> f32
{
	if a == b {
		return 0.;
	}
	glm::clamp_scalar((value - a) / (b - a), 0., 1.)
}

/// Re-maps `value` from the range `[fromMin, fromMax]` into the range `[toMin, toMax]` via [`inverseLerp`] and
/// [`lerp`]. Values outside the source range end up on the nearest bound of the target range.
#[inline]
pub fn remap (value: f32, fromMin: f32, fromMax: f32, toMin: f32, toMax: f32) -> f32 {
	lerp(toMin, toMax, inverseLerp(fromMin, fromMax, value))
}

/// Quantizes a normalized scalar into an 8-bit unsigned normalized integer, saturating at the bounds.
#[inline]
pub fn toUnorm8 (value: f32) -> u8 {
	(glm::clamp_scalar(value, 0., 1.) * 255. + 0.5) as u8
}

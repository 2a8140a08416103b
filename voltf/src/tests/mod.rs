
//////
//
// Module definitions
//

/// Tests for the colour type and the lookup texture bakers.
mod colour;







//////
//
// Helpers shared by all tests
//

/// Asserts that two scalars agree up to a small tolerance, relative for magnitudes above one.
#[track_caller]
pub(crate) fn assertNear (actual: f32, expected: f32) {
	let tolerance = 1e-4 * expected.abs().max(1.);
	assert!((actual - expected).abs() <= tolerance, "expected {expected}, got {actual}");
}

/// Installs console logging so that log output shows up for failing tests.
pub(crate) fn setup () {
	crate::initTracing();
}

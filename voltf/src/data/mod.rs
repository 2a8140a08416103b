
//////
//
// Module definitions
//

/// The generic transfer function interface and simple scalar mappings.
pub mod transferfunc;

/// 1D transfer functions, driven by control points over the data value domain.
pub mod tf1d;

/// 2D transfer functions, built from boxes in (data value, gradient magnitude) space.
pub mod tf2d;

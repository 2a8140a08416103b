
//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]



//////
//
// Module definitions
//

/// Submodule providing operations on the file system.
pub mod fs;

/// Submodule providing assorted math utilities.
pub mod math;

/// Submodule providing operations on file system paths.
pub mod path;

/// Tests for the whole crate.
#[cfg(test)]
mod tests;


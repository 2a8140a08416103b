//////
//
// Language config
//

// Eff this convention. Probably the worst aspect of Rust after the lack of a standardized ABI
#![allow(non_snake_case)]



//////
//
// Module definitions
//

/// The module providing the RGBA colour type shared by all transfer functions.
pub mod colour;
pub use colour::Colour; // re-export

/// The module containing the transfer function data model.
pub mod data;
pub use data::{tf1d::*, tf2d::*}; // re-export

/// The module providing baked lookup textures.
pub mod texture;
pub use texture::Texture; // re-export

/// The module implementing creation, loading, saving and rescaling of transfer functions.
pub mod database;

/// The module implementing lookup of transfer function files along a configurable search path.
pub mod library;
pub use library::Library; // re-export

/// Make sure we can access glm functionality as such
pub extern crate nalgebra_glm as glm;

/// Re-export important 3rd party libraries/library components
pub use tracing;
pub use image;
pub use anyhow::Result as Result;
pub use anyhow::Error as Error;
pub use voltf_runenv as runenv;
pub use voltf_util as util;

// Crate-wide tests
#[cfg(test)]
mod tests;



//////
//
// Imports
//

// Tracing library
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};



//////
//
// Functions
//

/// Installs a `tracing` subscriber that prints to the console. The verbosity defaults to `DEBUG` for debug builds and
/// `INFO` otherwise and can be overridden via the `RUST_LOG` environment variable. Does nothing in case a global
/// subscriber has already been installed (by an earlier call or by the host application).
pub fn initTracing ()
{
	let mut envFilterBuilder = EnvFilter::builder();
	#[cfg(debug_assertions)] {
		envFilterBuilder = envFilterBuilder.with_default_directive(tracing::Level::DEBUG.into());
	}
	#[cfg(not(debug_assertions))] {
		envFilterBuilder = envFilterBuilder.with_default_directive(tracing::Level::INFO.into());
	}
	let envFilter = envFilterBuilder.from_env_lossy();

	let fmt_layer = tracing_subscriber::fmt::Layer::default();
	let _ = tracing_subscriber::registry().with(envFilter).with(fmt_layer).try_init();
}

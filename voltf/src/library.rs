
//////
//
// Imports
//

// Standard library
use std::{fs, fmt::Display, path::{Path, PathBuf}};

// Local imports
use crate::*;
use runenv::Environment;



//////
//
// Errors
//

/// An error resulting from attempting to store a transfer function under a relative name while the search path is
/// empty.
#[derive(Debug)]
pub struct EmptySearchPathError {
	name: PathBuf
}
impl Display for EmptySearchPathError {
	fn fmt (&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "EmptySearchPathError[`{}`]", self.name.display())
	}
}
impl std::error::Error for EmptySearchPathError {}



//////
//
// Classes
//

/// A collection of transfer function files, spread across the directories of the search path of an
/// [`Environment`]. Loaded transfer functions get their lookup textures baked at the resolutions the environment
/// asks for.
pub struct Library {
	environment: Environment
}
impl Library
{
	pub fn new (environment: Environment) -> Self {
		Self { environment }
	}

	/// Reads the runtime environment from a YAML file and creates a library over its search path.
	pub fn fromEnvironmentFile (filename: impl AsRef<Path>) -> Result<Self> {
		Ok(Self::new(Environment::fromFile(filename)?))
	}

	#[inline(always)]
	pub fn environment (&self) -> &Environment {
		&self.environment
	}

	/// Finds the file a transfer function `name` refers to. See [`util::path::findInSearchPath`] for the precedence
	/// rules.
	pub fn resolve (&self, name: impl AsRef<Path>) -> Option<PathBuf> {
		util::path::findInSearchPath(&self.environment.transferFunctionPath, name)
	}

	fn resolveOrLog (&self, name: &Path) -> Option<PathBuf> {
		let resolved = self.resolve(name);
		if resolved.is_none() {
			tracing::error!("Transfer function `{}` not found in search path", name.display());
		}
		resolved
	}

	/// Loads a 1D transfer function by name and bakes its lookup texture. Failures are logged.
	pub fn load1D (&self, name: impl AsRef<Path>) -> Option<TransferFunction>
	{
		let mut tf = database::loadTransferFunction(self.resolveOrLog(name.as_ref())?)?;
		tf.generateTextureWithWidth(self.environment.texture1DWidth);
		Some(tf)
	}

	/// Loads a 2D transfer function by name and bakes its lookup texture. Failures are logged.
	pub fn load2D (&self, name: impl AsRef<Path>) -> Option<TransferFunction2D>
	{
		let mut tf2D = database::loadTransferFunction2D(self.resolveOrLog(name.as_ref())?)?;
		tf2D.generateTextureWithSize(self.environment.texture2DSize);
		Some(tf2D)
	}

	/// Lists all transfer function files in the library. Directories are visited in search path order, and the files
	/// of each directory tree are sorted. Directories that cannot be read are skipped with a warning.
	pub fn list (&self) -> Vec<PathBuf>
	{
		let mut files = Vec::new();
		for dir in &self.environment.transferFunctionPath
		{
			if !dir.is_dir() {
				tracing::debug!("Skipping non-existent search path entry {}", dir.display());
				continue;
			}
			match util::fs::collectFilesWithExtension(dir, "json") {
				Ok(found) => files.extend(found),
				Err(err) => tracing::warn!("Could not scan {}: {err}", dir.display())
			}
		}
		files
	}

	/// Where a transfer function saved under `name` ends up: absolute names are used verbatim, relative ones go into
	/// the first search path directory. Creates missing parent directories.
	fn storagePath (&self, name: &Path) -> Result<PathBuf>
	{
		let path = if name.is_absolute() {
			util::path::normalize(name)
		} else {
			let dir = self.environment.transferFunctionPath.first().ok_or_else(
				|| EmptySearchPathError { name: name.to_owned() }
			)?;
			util::path::anchoredTo(dir, name)
		};
		if let Some(parent) = path.parent() {
			fs::create_dir_all(parent)?;
		}
		Ok(path)
	}

	/// Saves a 1D transfer function by name, returning the path of the written file.
	pub fn save1D (&self, tf: &TransferFunction, name: impl AsRef<Path>) -> Result<PathBuf> {
		let path = self.storagePath(name.as_ref())?;
		database::saveTransferFunction(tf, &path)?;
		Ok(path)
	}

	/// Saves a 2D transfer function by name, returning the path of the written file.
	pub fn save2D (&self, tf2D: &TransferFunction2D, name: impl AsRef<Path>) -> Result<PathBuf> {
		let path = self.storagePath(name.as_ref())?;
		database::saveTransferFunction2D(tf2D, &path)?;
		Ok(path)
	}
}

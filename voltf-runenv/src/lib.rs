//////
//
// Language config
//

// Eff this convention.
#![allow(non_snake_case)]



//////
//
// Imports
//

// Standard library
use std::{fs, path::{Path, PathBuf}};

// Serde framework
use serde;
use serde_yaml_ng;



//////
//
// Constants
//

/// The default width, in texels, of baked 1D transfer function lookup textures.
pub const DEFAULT_TEXTURE_1D_WIDTH: u32 = 512;

/// The default edge length, in texels, of baked 2D transfer function lookup textures.
pub const DEFAULT_TEXTURE_2D_SIZE: u32 = 512;



//////
//
// Structs
//

/// A struct storing runtime environment information (most notably, the transfer function search path) for
/// applications using *voltf*.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Environment {
	/// Array of directory paths to search whenever transfer function files are given by a relative path. New files
	/// given by a relative path are stored in the first one.
	pub transferFunctionPath: Vec<PathBuf>,

	/// Width of baked 1D lookup textures.
	pub texture1DWidth: u32,

	/// Edge length of the square baked 2D lookup textures.
	pub texture2DSize: u32
}
impl Default for Environment {
	fn default () -> Self { Self {
		transferFunctionPath: Vec::new(),
		texture1DWidth: DEFAULT_TEXTURE_1D_WIDTH,
		texture2DSize: DEFAULT_TEXTURE_2D_SIZE
	}}
}
impl Environment
{
	/// Creates a default environment that searches the given directories.
	pub fn withSearchPath<P: Into<PathBuf>> (dirs: impl IntoIterator<Item=P>) -> Self { Self {
		transferFunctionPath: dirs.into_iter().map(Into::into).collect(), ..Default::default()
	}}

	///
	pub fn serialize (&self) -> anyhow::Result<Vec<u8>> {
		let mut bytes = Vec::new();
		serde_yaml_ng::to_writer(&mut bytes, self)?;
		Ok(bytes)
	}

	///
	pub fn serializeToFile (&self, filename: impl AsRef<Path>) -> anyhow::Result<()> {
		Ok(fs::write(filename, self.serialize()?)?)
	}

	///
	pub fn deserialize (bytes: impl AsRef<[u8]>) -> Result<Self, serde_yaml_ng::Error> {
		serde_yaml_ng::from_slice(bytes.as_ref())
	}

	/// Reads and deserializes an environment from the given YAML file.
	pub fn fromFile (filename: impl AsRef<Path>) -> anyhow::Result<Self> {
		Ok(Self::deserialize(fs::read(filename)?)?)
	}
}



//////
//
// Tests
//

#[cfg(test)]
mod tests
{
	use super::*;

	#[test]
	fn test_defaults() {
		let env = Environment::default();
		assert!(env.transferFunctionPath.is_empty());
		assert_eq!(env.texture1DWidth, 512);
		assert_eq!(env.texture2DSize, 512);
	}

	#[test]
	fn test_missingFieldsDefault() {
		let env = Environment::deserialize("transferFunctionPath: [/data/tf]\n").unwrap();
		assert_eq!(env.transferFunctionPath, vec![PathBuf::from("/data/tf")]);
		assert_eq!(env.texture1DWidth, DEFAULT_TEXTURE_1D_WIDTH);
		assert_eq!(env.texture2DSize, DEFAULT_TEXTURE_2D_SIZE);
	}

	#[test]
	fn test_fileRoundtrip()
	{
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("voltf.yaml");
		let mut env = Environment::withSearchPath(["presets", "/usr/share/voltf"]);
		env.texture1DWidth = 256;
		env.serializeToFile(&file).unwrap();
		assert_eq!(Environment::fromFile(&file).unwrap(), env);
	}

	#[test]
	fn test_malformed() {
		assert!(Environment::deserialize("texture2DSize: [1, 2]").is_err());
		assert!(Environment::fromFile("/definitely/not/here.yaml").is_err());
	}
}

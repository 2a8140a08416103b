
//////
//
// Imports
//

// Standard library
use std::{fs, fmt::Display, path::{Path, PathBuf}};

// Anyhow library
use anyhow::Context;

// Serde framework
use serde;
use serde_json;

// Local imports
use crate::*;
use data::transferfunc::{TransferFunctionEval, ScalarLinearRemap};



//////
//
// Errors
//

/// An error resulting from attempting to load a transfer function from a file that does not exist.
#[derive(Debug)]
pub struct FileNotFoundError {
	pub path: PathBuf
}
impl Display for FileNotFoundError {
	fn fmt (&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "File does not exist: {}", self.path.display())
	}
}
impl std::error::Error for FileNotFoundError {}

/// An error resulting from attempting to save a transfer function containing a NaN or infinite value, which JSON
/// cannot represent.
#[derive(Debug)]
pub struct NonFiniteValueError {
	/// Location of the first offending value inside the file, e.g. `alphaPoints[2].dataValue`.
	pub field: String,
	pub value: f32
}
impl Display for NonFiniteValueError {
	fn fmt (&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(formatter, "NonFiniteValueError[`{}` = {}]", self.field, self.value)
	}
}
impl std::error::Error for NonFiniteValueError {}



//////
//
// Structs
//

/// The on-disk form of a [`TransferFunction`].
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(crate) struct TF1DSerialisationData {
	pub version: i32,
	pub colourPoints: Vec<ColourControlPoint>,
	pub alphaPoints: Vec<AlphaControlPoint>,
	pub minDataValue: f32,
	pub maxDataValue: f32
}
impl TF1DSerialisationData {
	pub const VERSION_ID: i32 = 2;
}
impl Record for TF1DSerialisationData
{
	fn scalars (&self) -> Vec<(String, f32)>
	{
		let mut scalars = vec![
			("minDataValue".to_owned(), self.minDataValue), ("maxDataValue".to_owned(), self.maxDataValue)
		];
		for (i, point) in self.colourPoints.iter().enumerate() {
			let field = format!("colourPoints[{i}]");
			scalars.push((format!("{field}.dataValue"), point.dataValue));
			scalars.extend(colourScalars(&format!("{field}.colourValue"), &point.colourValue));
		}
		for (i, point) in self.alphaPoints.iter().enumerate() {
			scalars.push((format!("alphaPoints[{i}].dataValue"), point.dataValue));
			scalars.push((format!("alphaPoints[{i}].alphaValue"), point.alphaValue));
		}
		scalars
	}
}

/// The on-disk form of a [`TransferFunction2D`].
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub(crate) struct TF2DSerialisationData {
	pub version: i32,
	pub boxes: Vec<TF2DBox>
}
impl TF2DSerialisationData {
	pub const VERSION_ID: i32 = 1;
}
impl Record for TF2DSerialisationData
{
	fn scalars (&self) -> Vec<(String, f32)>
	{
		let mut scalars = Vec::new();
		for (i, tfBox) in self.boxes.iter().enumerate() {
			let field = format!("boxes[{i}]");
			scalars.extend(colourScalars(&format!("{field}.colour"), &tfBox.colour));
			let rect = &tfBox.rect;
			scalars.push((format!("{field}.rect.x"), rect.x));
			scalars.push((format!("{field}.rect.y"), rect.y));
			scalars.push((format!("{field}.rect.width"), rect.width));
			scalars.push((format!("{field}.rect.height"), rect.height));
			scalars.push((format!("{field}.minAlpha"), tfBox.minAlpha));
			scalars.push((format!("{field}.alpha"), tfBox.alpha));
		}
		scalars
	}
}



//////
//
// Traits
//

/// A serialization record, able to enumerate all floating point values it would write.
pub(crate) trait Record: serde::Serialize
{
	/// Every floating point value of the record, labelled with its location in the JSON document.
	fn scalars (&self) -> Vec<(String, f32)>;

	/// Fails with a [`NonFiniteValueError`] on the first NaN or infinity, since `serde_json` would write those as
	/// `null` and the file could not be read back.
	fn ensureFinite (&self) -> std::result::Result<(), NonFiniteValueError> {
		match self.scalars().into_iter().find(|(_, value)| !value.is_finite()) {
			Some((field, value)) => Err(NonFiniteValueError { field, value }),
			None => Ok(())
		}
	}
}

fn colourScalars (field: &str, colour: &Colour) -> [(String, f32); 4] {[
	(format!("{field}.r"), colour.r), (format!("{field}.g"), colour.g),
	(format!("{field}.b"), colour.b), (format!("{field}.a"), colour.a)
]}



//////
//
// Functions
//

////
// Default presets

/// Creates the default 1D transfer function, a starter preset over the normalized domain, with its lookup texture
/// already baked.
pub fn createTransferFunction () -> TransferFunction
{
	let mut tf = TransferFunction::new();
	tf.addColourPoint(ColourControlPoint::new(0.0, Colour::new(0.11, 0.14, 0.13, 1.0)));
	tf.addColourPoint(ColourControlPoint::new(0.2415, Colour::new(0.469, 0.354, 0.223, 1.0)));
	tf.addColourPoint(ColourControlPoint::new(0.3253, Colour::WHITE));

	tf.addAlphaPoint(AlphaControlPoint::new(0.0, 0.0));
	tf.addAlphaPoint(AlphaControlPoint::new(0.1787, 0.0));
	tf.addAlphaPoint(AlphaControlPoint::new(0.2, 0.024));
	tf.addAlphaPoint(AlphaControlPoint::new(0.28, 0.03));
	tf.addAlphaPoint(AlphaControlPoint::new(0.4, 0.546));
	tf.addAlphaPoint(AlphaControlPoint::new(0.547, 0.5266));

	tf.generateTexture();
	tf
}

/// Creates the default 2D transfer function, a single white box, with its lookup texture already baked.
pub fn createTransferFunction2D () -> TransferFunction2D
{
	let mut tf2D = TransferFunction2D::new();
	tf2D.addBox(0.05, 0.1, 0.8, 0.7, Colour::WHITE, 0.4);
	tf2D.generateTexture();
	tf2D
}


////
// Loading

/// Reads and parses a serialization record, failing with a [`FileNotFoundError`] if there is no such file.
fn readRecord<R: serde::de::DeserializeOwned> (filepath: &Path) -> Result<R>
{
	if !filepath.is_file() {
		return Err(FileNotFoundError { path: filepath.to_owned() }.into());
	}
	let jsonstring = fs::read_to_string(filepath)
		.with_context(|| format!("Failed to read transfer function file: {}", filepath.display()))?;
	serde_json::from_str(&jsonstring)
		.with_context(|| format!("Failed to parse transfer function file: {}", filepath.display()))
}

/// The version field is only informational. Files from newer writers are still read on a best-effort basis.
fn checkVersion (filepath: &Path, version: i32, supported: i32) {
	if version > supported {
		tracing::warn!(
			"{} was written with format version {version}, newer than the supported version {supported}",
			filepath.display()
		);
	}
}

/// Loads a 1D transfer function from a JSON file.
///
/// # Arguments
///
/// * `filepath` – The file to load.
///
/// # Returns
///
/// The transfer function, without a baked texture, or an error. A missing file results in a
/// [`FileNotFoundError`].
pub fn tryLoadTransferFunction (filepath: impl AsRef<Path>) -> Result<TransferFunction>
{
	let filepath = filepath.as_ref();
	let data: TF1DSerialisationData = readRecord(filepath)?;
	checkVersion(filepath, data.version, TF1DSerialisationData::VERSION_ID);
	tracing::debug!(
		"Loaded 1D transfer function from {} ({} colour / {} alpha points)",
		filepath.display(), data.colourPoints.len(), data.alphaPoints.len()
	);
	Ok(TransferFunction::fromParts(data.colourPoints, data.alphaPoints, data.minDataValue, data.maxDataValue))
}

/// Loads a 2D transfer function from a JSON file. See [`tryLoadTransferFunction`].
pub fn tryLoadTransferFunction2D (filepath: impl AsRef<Path>) -> Result<TransferFunction2D>
{
	let filepath = filepath.as_ref();
	let data: TF2DSerialisationData = readRecord(filepath)?;
	checkVersion(filepath, data.version, TF2DSerialisationData::VERSION_ID);
	tracing::debug!("Loaded 2D transfer function from {} ({} boxes)", filepath.display(), data.boxes.len());
	Ok(TransferFunction2D::fromBoxes(data.boxes))
}

/// Loads a 1D transfer function from a JSON file, logging an error and returning [`None`] if that fails (most notably
/// if the file does not exist).
pub fn loadTransferFunction (filepath: impl AsRef<Path>) -> Option<TransferFunction> {
	tryLoadTransferFunction(filepath).inspect_err(|err| tracing::error!("{err:#}")).ok()
}

/// Loads a 2D transfer function from a JSON file, logging an error and returning [`None`] if that fails (most notably
/// if the file does not exist).
pub fn loadTransferFunction2D (filepath: impl AsRef<Path>) -> Option<TransferFunction2D> {
	tryLoadTransferFunction2D(filepath).inspect_err(|err| tracing::error!("{err:#}")).ok()
}


////
// Saving

/// Saves a 1D transfer function to a JSON file, overwriting whatever was there before.
pub fn saveTransferFunction (tf: &TransferFunction, filepath: impl AsRef<Path>) -> Result<()>
{
	let data = TF1DSerialisationData {
		version: TF1DSerialisationData::VERSION_ID,
		colourPoints: tf.colourControlPoints.clone(),
		alphaPoints: tf.alphaControlPoints.clone(),
		minDataValue: tf.minDataValue,
		maxDataValue: tf.maxDataValue
	};
	writeRecord(&data, filepath.as_ref())
}

/// Saves a 2D transfer function to a JSON file, overwriting whatever was there before.
pub fn saveTransferFunction2D (tf2D: &TransferFunction2D, filepath: impl AsRef<Path>) -> Result<()>
{
	let data = TF2DSerialisationData {
		version: TF2DSerialisationData::VERSION_ID, boxes: tf2D.boxes.clone()
	};
	writeRecord(&data, filepath.as_ref())
}

/// Writes a record as JSON. Nothing is written if the record contains a value JSON cannot represent.
fn writeRecord<R: Record> (data: &R, filepath: &Path) -> Result<()>
{
	data.ensureFinite().with_context(
		|| format!("Refusing to write transfer function file: {}", filepath.display())
	)?;
	let jsonstring = serde_json::to_string(data)?;
	fs::write(filepath, jsonstring)
		.with_context(|| format!("Failed to write transfer function file: {}", filepath.display()))?;
	tracing::debug!("Saved transfer function to {}", filepath.display());
	Ok(())
}


////
// Rescaling

/// Re-maps the data values of all control points of the given transfer function from its declared
/// `[minDataValue, maxDataValue]` domain to the new domain `[newMinValue, newMaxValue]`.
///
/// Points outside the declared domain end up on the nearest new bound. The declared domain itself is not updated. If
/// the transfer function has no defined scale, nothing happens.
pub fn convertTransferFunctionToScale (tf: &mut TransferFunction, newMinValue: f32, newMaxValue: f32)
{
	if !tf.hasDefinedScale() {
		tracing::info!("Transfer function does not have a defined data value scale.");
		return;
	}

	let remap = ScalarLinearRemap::new(
		&glm::vec2(tf.minDataValue, tf.maxDataValue), &glm::vec2(newMinValue, newMaxValue)
	);
	for point in tf.alphaControlPoints.iter_mut() {
		point.dataValue = remap.eval(&point.dataValue);
	}
	for point in tf.colourControlPoints.iter_mut() {
		point.dataValue = remap.eval(&point.dataValue);
	}
}

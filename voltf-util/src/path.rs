
//////
//
// Imports
//

// Standard library
use std::path::*;

// Normalize-path library
use normalize_path::NormalizePath;



//////
//
// Functions
//

/// Normalizes the given path, i.e. resolves/collapses any and all `..` and `.` contained within.
pub fn normalize<PathRef: AsRef<Path>> (path: PathRef) -> PathBuf {
	path.as_ref().normalize()
}

/// Looks up the given *path* in an ordered list of directories.
///
/// Absolute paths are not searched for, they are returned normalized iff they point to an existing file. Relative
/// paths are first checked against the current working directory, then joined onto each directory of the search path
/// in turn. The first hit wins.
///
/// # Arguments
///
/// * `searchPath` – The directories to look in, in order of precedence.
/// * `path` – The file to look for.
///
/// # Returns
///
/// The normalized path of the first existing match, or [`None`] if there was none.
pub fn findInSearchPath<DirRef: AsRef<Path>, PathRef: AsRef<Path>> (searchPath: &[DirRef], path: PathRef)
	-> Option<PathBuf>
{
	let path = path.as_ref();
	if path.is_absolute() || path.is_file() {
		return path.is_file().then(|| path.normalize());
	}
	searchPath.iter()
		.map(|dir| dir.as_ref().join(path).normalize())
		.find(|candidate| candidate.is_file())
}

/// Makes the given *path* absolute relative to the given *anchor*, **iff** *path* is relative. If it is not, it will
/// just be normalized.
pub fn anchoredTo<AnchorRef: AsRef<Path>, PathRef: AsRef<Path>> (anchor: AnchorRef, path: PathRef) -> PathBuf
{
	if path.as_ref().is_relative() {
		anchor.as_ref().join(path).normalize()
	}
	else {
		path.as_ref().normalize()
	}
}

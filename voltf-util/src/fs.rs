
//////
//
// Imports
//

// Standard library
use std::{fs, collections::HashSet, path::{Path, PathBuf}};

// Anyhow library
use anyhow::Result;

// Tracing library
use tracing;



/// Recursively run a closure on every regular file inside an entire directory tree.
///
/// Symbolic links are followed, both to files and to directories. Directories reachable along several routes (e.g.
/// via a link cycle) are only visited once. Only an unreadable `baseDirectory` is an error: entries and
/// subdirectories inside the tree that cannot be read are logged and skipped. Errors returned by `action` abort the
/// walk.
pub fn forEachFile<PathRef: AsRef<Path>, Action: FnMut(&Path)->Result<()>> (baseDirectory: PathRef, mut action: Action)
	-> Result<()>
{
	// The actual recursive worker
	fn recurse<Action: FnMut(&Path)->Result<()>> (dir: &Path, visited: &mut HashSet<PathBuf>, action: &mut Action)
		-> Result<()>
	{
		let entries = match fs::read_dir(dir) {
			Ok(entries) => entries,
			Err(err) => {
				tracing::warn!("Skipping unreadable directory {}: {err}", dir.display());
				return Ok(());
			}
		};
		for entry in entries
		{
			let path = match entry {
				Ok(entry) => entry.path(),
				Err(err) => {
					tracing::warn!("Skipping unreadable entry in {}: {err}", dir.display());
					continue;
				}
			};
			// fs::metadata follows symlinks, unlike DirEntry::file_type
			let metadata = match fs::metadata(&path) {
				Ok(metadata) => metadata,
				Err(err) => {
					tracing::debug!("Skipping {}: {err}", path.display());
					continue;
				}
			};
			if metadata.is_dir() {
				if markVisited(&path, visited) {
					recurse(&path, visited, action)?;
				}
			} else if metadata.is_file() {
				action(&path)?;
			}
		}
		Ok(())
	}

	// Dispatch
	let base = baseDirectory.as_ref();
	if !fs::metadata(base)?.is_dir() {
		return Ok(());
	}
	let mut visited = HashSet::new();
	markVisited(base, &mut visited);
	recurse(base, &mut visited, &mut action)
}

/// Records the canonical form of `dir`, returning whether it had not been seen before. Directories whose canonical
/// form cannot be determined are never entered.
fn markVisited (dir: &Path, visited: &mut HashSet<PathBuf>) -> bool
{
	match fs::canonicalize(dir) {
		Ok(canonical) => visited.insert(canonical),
		Err(err) => {
			tracing::warn!("Skipping directory {}: {err}", dir.display());
			false
		}
	}
}

/// Collects all files with the given extension (compared case-insensitively, without the leading dot) inside an
/// entire directory tree, sorted by path.
pub fn collectFilesWithExtension<PathRef: AsRef<Path>> (baseDirectory: PathRef, extension: &str)
	-> Result<Vec<PathBuf>>
{
	let mut files = Vec::new();
	forEachFile(baseDirectory, |path| {
		let matches = path.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
		if matches {
			files.push(path.to_owned());
		}
		Ok(())
	})?;
	files.sort();
	Ok(files)
}

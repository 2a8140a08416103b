
//////
//
// Tests for the `math` module
//

mod math
{
	////
	// Imports

	// Local imports
	use crate::math::*;


	////
	// Tests

	#[test]
	fn test_lerp() {
		assert_eq!(lerp(2., 4., 0.), 2.);
		assert_eq!(lerp(2., 4., 1.), 4.);
		assert_eq!(lerp(2., 4., 0.5), 3.);
		assert_eq!(lerp(2., 4., 1.5), 4.); // t is clamped
	}

	#[test]
	fn test_inverseLerp() {
		assert_eq!(inverseLerp(10., 20., 15.), 0.5);
		assert_eq!(inverseLerp(10., 20., 5.), 0.);
		assert_eq!(inverseLerp(10., 20., 25.), 1.);
		assert_eq!(inverseLerp(20., 10., 12.5), 0.75);
	}

	#[test]
	fn test_inverseLerp_degenerate() {
		assert_eq!(inverseLerp(3., 3., 3.), 0.);
		assert_eq!(inverseLerp(3., 3., 100.), 0.);
	}

	#[test]
	fn test_remap()
	{
		assert_eq!(remap(0.25, 0., 1., 0., 100.), 25.);
		assert_eq!(remap(-1000., -1000., 3000., 0., 1.), 0.);
		assert_eq!(remap(3000., -1000., 3000., 0., 1.), 1.);
		assert_eq!(remap(1000., -1000., 3000., 0., 1.), 0.5);
	}

	#[test]
	fn test_toUnorm8() {
		assert_eq!(toUnorm8(0.), 0);
		assert_eq!(toUnorm8(1.), 255);
		assert_eq!(toUnorm8(0.5), 128);
		assert_eq!(toUnorm8(-2.), 0);
		assert_eq!(toUnorm8(7.), 255);
	}
}



//////
//
// Tests for the `path` and `fs` modules
//

mod files
{
	////
	// Imports

	// Standard library
	use std::{fs, path::Path};

	// Local imports
	use crate::{path, fs as vfs};


	////
	// Tests

	#[test]
	fn test_normalize() {
		assert_eq!(path::normalize("a/b/../c/./d.json"), Path::new("a/c/d.json"));
	}

	#[test]
	fn test_anchoredTo() {
		assert_eq!(path::anchoredTo("/base", "sub/../tf.json"), Path::new("/base/tf.json"));
		assert_eq!(path::anchoredTo("/base", "/other/./tf.json"), Path::new("/other/tf.json"));
	}

	#[test]
	fn test_findInSearchPath()
	{
		let first = tempfile::tempdir().unwrap();
		let second = tempfile::tempdir().unwrap();
		fs::write(second.path().join("ct.json"), "{}").unwrap();
		fs::write(first.path().join("both.json"), "{}").unwrap();
		fs::write(second.path().join("both.json"), "{}").unwrap();

		let searchPath = [first.path(), second.path()];
		assert_eq!(
			path::findInSearchPath(&searchPath, "ct.json"), Some(second.path().join("ct.json"))
		);
		assert_eq!(
			path::findInSearchPath(&searchPath, "both.json"), Some(first.path().join("both.json"))
		);
		assert_eq!(path::findInSearchPath(&searchPath, "missing.json"), None);

		let absolute = second.path().join("ct.json");
		assert_eq!(path::findInSearchPath::<&Path, _>(&[], &absolute), Some(absolute.clone()));
		assert_eq!(path::findInSearchPath(&searchPath, first.path().join("nope.json")), None);
	}

	#[test]
	fn test_collectFilesWithExtension()
	{
		let root = tempfile::tempdir().unwrap();
		fs::create_dir_all(root.path().join("nested/deeper")).unwrap();
		fs::write(root.path().join("b.json"), "{}").unwrap();
		fs::write(root.path().join("a.JSON"), "{}").unwrap();
		fs::write(root.path().join("notes.txt"), "").unwrap();
		fs::write(root.path().join("nested/deeper/c.json"), "{}").unwrap();

		let files = vfs::collectFilesWithExtension(root.path(), "json").unwrap();
		assert_eq!(files, vec![
			root.path().join("a.JSON"), root.path().join("b.json"), root.path().join("nested/deeper/c.json")
		]);
	}

	#[test]
	fn test_collectFilesWithExtension_notADirectory()
	{
		let root = tempfile::tempdir().unwrap();
		let file = root.path().join("single.json");
		fs::write(&file, "{}").unwrap();
		assert!(vfs::collectFilesWithExtension(&file, "json").unwrap().is_empty());
		assert!(vfs::collectFilesWithExtension(root.path().join("missing"), "json").is_err());
	}

	#[cfg(unix)]
	#[test]
	fn test_collectFilesWithExtension_symlinks()
	{
		use std::os::unix::fs::symlink;

		let root = tempfile::tempdir().unwrap();
		let elsewhere = tempfile::tempdir().unwrap();
		fs::create_dir_all(elsewhere.path().join("shared")).unwrap();
		fs::write(elsewhere.path().join("shared/deep.json"), "{}").unwrap();
		fs::write(elsewhere.path().join("target.json"), "{}").unwrap();

		symlink(elsewhere.path().join("target.json"), root.path().join("linked.json")).unwrap();
		symlink(elsewhere.path().join("shared"), root.path().join("shared")).unwrap();
		symlink(root.path(), root.path().join("loop")).unwrap();
		symlink(root.path().join("gone.json"), root.path().join("dangling.json")).unwrap();

		let files = vfs::collectFilesWithExtension(root.path(), "json").unwrap();
		assert_eq!(files, vec![root.path().join("linked.json"), root.path().join("shared/deep.json")]);
	}

	#[cfg(unix)]
	#[test]
	fn test_collectFilesWithExtension_unreadableSubdirectory()
	{
		use std::os::unix::fs::PermissionsExt;

		let root = tempfile::tempdir().unwrap();
		let locked = root.path().join("locked");
		fs::create_dir_all(&locked).unwrap();
		fs::write(locked.join("hidden.json"), "{}").unwrap();
		fs::write(root.path().join("top.json"), "{}").unwrap();
		fs::write(root.path().join("zz.json"), "{}").unwrap();
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

		let files = vfs::collectFilesWithExtension(root.path(), "json");
		let lockedIsReadable = fs::read_dir(&locked).is_ok(); // e.g. when running as root
		fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

		let files = files.unwrap();
		assert!(files.contains(&root.path().join("top.json")));
		assert!(files.contains(&root.path().join("zz.json")));
		assert_eq!(files.contains(&locked.join("hidden.json")), lockedIsReadable);
	}
}

use anyhow::{Context, Result, anyhow};
use std::{
    fs,
    path::{Path, PathBuf},
};

const CACHE_DIRECTORY: &str = "hark";
const IMPORT_DIRECTORY: &str = "imports";

/// Duplicate a picked audiobook into the app-private cache so the
/// session can own the copy and the original can be released right
/// after the pick.
pub fn stage_audiobook(source: &Path) -> Result<PathBuf> {
    let import_dir = dirs::cache_dir()
        .ok_or_else(|| anyhow!("Could not determine cache directory!"))?
        .join(CACHE_DIRECTORY)
        .join(IMPORT_DIRECTORY);

    stage_into(source, &import_dir)
}

/// A failed directory creation or copy is reported to the caller, not
/// fatal; the running session is unaffected. Same-name imports
/// overwrite the previous copy.
pub(crate) fn stage_into(source: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| anyhow!("Not a file: {}", source.display()))?;

    fs::create_dir_all(dest_dir).with_context(|| {
        format!(
            "Could not create import directory: {}",
            dest_dir.display()
        )
    })?;

    let dest = dest_dir.join(file_name);
    fs::copy(source, &dest)
        .with_context(|| format!("Could not import: {}", source.display()))?;

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_file(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn staging_copies_into_a_fresh_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("book.mp3");
        write_file(&source, "audio bytes");

        let dest_dir = tmp.path().join("cache").join("imports");
        let staged = stage_into(&source, &dest_dir).unwrap();

        assert_eq!(staged, dest_dir.join("book.mp3"));
        assert_eq!(fs::read_to_string(&staged).unwrap(), "audio bytes");
        // The pick's handle on the original is released; deleting it
        // must not disturb the staged copy.
        fs::remove_file(&source).unwrap();
        assert!(staged.exists());
    }

    #[test]
    fn staging_overwrites_a_same_name_import() {
        let tmp = tempfile::tempdir().unwrap();
        let dest_dir = tmp.path().join("imports");

        let first = tmp.path().join("book.mp3");
        write_file(&first, "first edition");
        stage_into(&first, &dest_dir).unwrap();

        let second_dir = tmp.path().join("elsewhere");
        fs::create_dir_all(&second_dir).unwrap();
        let second = second_dir.join("book.mp3");
        write_file(&second, "second edition");
        let staged = stage_into(&second, &dest_dir).unwrap();

        assert_eq!(fs::read_to_string(&staged).unwrap(), "second edition");
    }

    #[test]
    fn staging_a_missing_source_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("ghost.mp3");

        let err = stage_into(&missing, &tmp.path().join("imports")).unwrap_err();
        assert!(err.to_string().contains("Could not import"));
    }

    #[test]
    fn staging_rejects_a_bare_root() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(stage_into(Path::new("/"), tmp.path()).is_err());
    }
}

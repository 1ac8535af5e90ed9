//! Atomic file replacement
//!
//! Content goes to a temporary file in the target's directory, which is then
//! renamed over the target. Readers see either the old file or the complete
//! new one. An uncommitted writer removes its temporary file on drop.
//!
//! The replacement keeps the permissions of the file it replaces; a new file
//! gets the usual `0o666` minus the process umask.

use crate::{CopyCodeError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writer that replaces `target` only when committed
pub struct AtomicWriter {
    target: PathBuf,
    temp: NamedTempFile,
}

impl AtomicWriter {
    /// Create a temporary file next to `target`
    pub fn create(target: impl AsRef<Path>) -> Result<Self> {
        let target = target.as_ref().to_path_buf();
        let dir = parent_dir(&target);

        let mut builder = tempfile::Builder::new();
        builder.prefix(".copycode-").suffix(".tmp");
        if let Some(permissions) = new_file_permissions() {
            builder.permissions(permissions);
        }

        let temp = builder
            .tempfile_in(dir)
            .map_err(|e| CopyCodeError::write_failure(&target, e))?;

        if let Ok(existing) = fs::metadata(&target) {
            temp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| CopyCodeError::write_failure(&target, e))?;
        }

        tracing::debug!(
            target = %target.display(),
            temp = %temp.path().display(),
            "Opened temporary output file"
        );

        Ok(Self { target, temp })
    }

    /// Write the whole of `contents`
    pub fn write_str(&mut self, contents: &str) -> Result<()> {
        self.temp
            .write_all(contents.as_bytes())
            .map_err(|e| CopyCodeError::write_failure(&self.target, e))
    }

    /// Flush, sync and rename the temporary file over the target
    pub fn commit(mut self) -> Result<PathBuf> {
        self.temp
            .flush()
            .and_then(|_| self.temp.as_file().sync_all())
            .map_err(|e| CopyCodeError::write_failure(&self.target, e))?;

        let target = self.target;
        self.temp
            .persist(&target)
            .map_err(|e| CopyCodeError::write_failure(&target, e.error))?;

        tracing::debug!(target = %target.display(), "Replaced output file");
        Ok(target)
    }
}

/// Atomically replace `path` with `contents` (convenience function)
pub fn write_atomic(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let mut writer = AtomicWriter::create(path)?;
    writer.write_str(contents)?;
    writer.commit()?;
    Ok(())
}

/// Mode requested for a fresh output file; the OS applies the umask.
#[cfg(unix)]
fn new_file_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o666))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<fs::Permissions> {
    None
}

/// Directory that will hold the temporary file; a bare file name means the
/// working directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_write_atomic_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");

        write_atomic(&path, "hello").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert_eq!(dir_entries(temp_dir.path()), vec!["out.txt"]);
    }

    #[test]
    fn test_write_atomic_overwrites_not_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "a much longer previous content").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_uncommitted_writer_leaves_target_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();

        {
            let mut writer = AtomicWriter::create(&path).unwrap();
            writer.write_str("partial").unwrap();
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
        assert_eq!(dir_entries(temp_dir.path()), vec!["out.txt"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_replacement_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

        write_atomic(&path, "new").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode_matches_plain_create() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let reference = temp_dir.path().join("reference.txt");
        fs::write(&reference, "").unwrap();
        let path = temp_dir.path().join("out.txt");

        write_atomic(&path, "new").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&reference));
    }

    #[test]
    fn test_missing_parent_is_write_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("no/such/dir/out.txt");

        let err = write_atomic(&path, "x").unwrap_err();
        assert!(matches!(err, CopyCodeError::WriteFailure { .. }));
    }

    #[test]
    fn test_parent_dir_of_bare_name() {
        assert_eq!(parent_dir(Path::new("all.txt")), Path::new("."));
        assert_eq!(parent_dir(Path::new("out/all.txt")), Path::new("out"));
    }
}

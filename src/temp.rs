//! Conversion-unit temporary files.
//!
//! Every manifest document is materialized on disk for the external converter,
//! and the converter's intermediate output is itself a file. Both live only for
//! the duration of one conversion, so they are wrapped in [`ScopedTempFile`],
//! which removes the file on every exit path.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Kube2Cdk8sError, Result};

/// Returns a directory path suitable for creating temporary files.
/// Never returns a relative path, so temp files are never created under the
/// current working directory (avoids repo/tmp when TMPDIR=tmp and cwd is the repo).
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// A uniquely named temporary file owned by one conversion unit.
///
/// The file is removed when [`release`](Self::release) is called, or on drop if
/// the owner bails out early. An explicit release of a file that has already
/// vanished is surfaced as an error rather than ignored, so lifecycle bugs stay
/// visible in tests.
#[derive(Debug)]
pub struct ScopedTempFile {
    path: PathBuf,
    released: bool,
}

impl ScopedTempFile {
    /// Create a uniquely named file under [`temp_dir_base`] holding `contents`.
    pub fn create(contents: &[u8]) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("kube2cdk8s-")
            .suffix(".yaml")
            .tempfile_in(temp_dir_base())
            .map_err(|e| Kube2Cdk8sError::TempFileCreateFailed {
                reason: e.to_string(),
            })?;

        file.write_all(contents)
            .map_err(|e| Kube2Cdk8sError::TempFileCreateFailed {
                reason: e.to_string(),
            })?;

        // Detach from NamedTempFile's own auto-delete; lifecycle is ours now.
        let (handle, path) =
            file.keep()
                .map_err(|e| Kube2Cdk8sError::TempFileCreateFailed {
                    reason: e.to_string(),
                })?;
        drop(handle);

        Ok(Self {
            path,
            released: false,
        })
    }

    /// Take ownership of an existing file (e.g. the external converter's
    /// intermediate output) so it follows the same removal discipline.
    pub fn adopt(path: PathBuf) -> Self {
        Self {
            path,
            released: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the file. Consumes the handle; a file that is already gone is an
    /// error so external deletion (or a double-release bug) is observable.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        fs::remove_file(&self.path).map_err(|e| Kube2Cdk8sError::TempFileReleaseFailed {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl Drop for ScopedTempFile {
    fn drop(&mut self) {
        // Error-path cleanup; an explicit release has already cleared the flag.
        if !self.released {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_base_is_absolute() {
        assert!(temp_dir_base().is_absolute());
    }

    #[test]
    fn test_create_writes_contents() {
        let file = ScopedTempFile::create(b"kind: ServiceAccount\n").unwrap();
        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "kind: ServiceAccount\n");
        file.release().unwrap();
    }

    #[test]
    fn test_release_removes_file() {
        let file = ScopedTempFile::create(b"a: b\n").unwrap();
        let path = file.path().to_path_buf();
        assert!(path.exists());
        file.release().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_release_of_vanished_file_is_an_error() {
        let file = ScopedTempFile::create(b"a: b\n").unwrap();
        fs::remove_file(file.path()).unwrap();
        let result = file.release();
        assert!(matches!(
            result,
            Err(Kube2Cdk8sError::TempFileReleaseFailed { .. })
        ));
    }

    #[test]
    fn test_drop_removes_unreleased_file() {
        let path = {
            let file = ScopedTempFile::create(b"a: b\n").unwrap();
            file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_adopted_file_is_removed_on_drop() {
        let original = ScopedTempFile::create(b"a: b\n").unwrap();
        let path = original.path().to_path_buf();
        // Simulate handing the file to a fresh owner.
        std::mem::forget(original);
        {
            let _adopted = ScopedTempFile::adopt(path.clone());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_unique_names_across_creates() {
        let a = ScopedTempFile::create(b"a\n").unwrap();
        let b = ScopedTempFile::create(b"b\n").unwrap();
        assert_ne!(a.path(), b.path());
        a.release().unwrap();
        b.release().unwrap();
    }
}

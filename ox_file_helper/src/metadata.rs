//! Metadata queries
//!
//! Thin wrappers over `stat`-style calls. None of them fail: an unreachable
//! path answers `false`, `0` or `""`.

use std::fs;
use std::path::{Path, PathBuf};

/// Text after the last `.` of the final path component, or `""`.
///
/// A leading-dot name such as `.bashrc` yields `"bashrc"`.
pub fn get_ext(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .map(|name| name.to_string_lossy())
        .and_then(|name| name.rsplit_once('.').map(|(_, ext)| ext.to_string()))
        .unwrap_or_default()
}

/// Size in bytes, or 0 when the path cannot be stat'ed.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

pub fn is_exist(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Whether the current process may read the path.
#[cfg(unix)]
pub fn is_readable(path: impl AsRef<Path>) -> bool {
    access(path.as_ref(), libc::R_OK)
}

#[cfg(not(unix))]
pub fn is_readable(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if path.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    }
}

/// Whether the current process may write the path.
#[cfg(unix)]
pub fn is_writable(path: impl AsRef<Path>) -> bool {
    access(path.as_ref(), libc::W_OK)
}

#[cfg(not(unix))]
pub fn is_writable(path: impl AsRef<Path>) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(unix)]
fn access(path: &Path, mode: libc::c_int) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: `c_path` is a valid NUL-terminated string that outlives the call.
    unsafe { libc::access(c_path.as_ptr(), mode) == 0 }
}

/// A regular file (symlinks are followed).
pub fn is_file(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

pub fn is_dir(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Absolute form of `path` relative to the working directory. The path is
/// not required to exist; on failure the input is returned unchanged.
pub fn abs_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_get_ext() {
        assert_eq!(get_ext("./file.go"), "go");
        assert_eq!(get_ext("/tmp/archive.tar.gz"), "gz");
        assert_eq!(get_ext("README"), "");
        assert_eq!(get_ext("some.dir/README"), "");
        assert_eq!(get_ext(".bashrc"), "bashrc");
    }

    #[test]
    fn test_file_size() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();
        assert_eq!(file_size(file.path()), 11);
        assert_eq!(file_size("/definitely/not/here"), 0);
    }

    #[test]
    fn test_existence_and_kind() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "x").unwrap();

        assert!(is_exist(&file));
        assert!(is_file(&file));
        assert!(!is_dir(&file));
        assert!(is_dir(dir.path()));
        assert!(!is_file(dir.path()));
        assert!(!is_exist(dir.path().join("missing")));
    }

    #[test]
    fn test_permissions() {
        let file = NamedTempFile::new().unwrap();
        assert!(is_readable(file.path()));
        assert!(is_writable(file.path()));
        assert!(!is_readable("/definitely/not/here"));
        assert!(!is_writable("/definitely/not/here"));
    }

    #[test]
    fn test_abs_path() {
        let abs = abs_path("Cargo.toml");
        assert!(abs.is_absolute());
        assert!(is_exist(&abs));
    }
}

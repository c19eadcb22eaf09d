//! File copies
//!
//! [`copy_file`] streams through a fixed buffer; [`fast_copy`] hands the
//! open handles to [`std::io::copy`], which uses the platform's in-kernel
//! copy where one exists. Both return the number of bytes written.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::FileError;
use crate::options::OverwritePolicy;

const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Copy `src` to `dst` with a read/write loop.
///
/// Under [`OverwritePolicy::Deny`] the destination is opened with
/// `create_new`, so an existing file is never touched.
pub fn copy_file(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    policy: OverwritePolicy,
) -> Result<u64, FileError> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_endpoints(src, dst, policy)?;

    let mut reader = File::open(src).map_err(|source| FileError::SourceUnreadable {
        path: src.to_path_buf(),
        source,
    })?;

    let file = open_destination(dst, policy)?;
    let mut writer = BufWriter::new(file);

    let transfer_failed = |source| FileError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    let mut buf = vec![0u8; COPY_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(transfer_failed(e)),
        };
        writer.write_all(&buf[..n]).map_err(transfer_failed)?;
        total += n as u64;
    }
    writer.flush().map_err(transfer_failed)?;

    debug!("copied {} bytes from {} to {}", total, src.display(), dst.display());
    Ok(total)
}

/// Copy `src` to `dst` using [`std::io::copy`].
///
/// The destination is opened the same way as in [`copy_file`], so `Deny`
/// never replaces a file that appears after the existence check.
pub fn fast_copy(
    src: impl AsRef<Path>,
    dst: impl AsRef<Path>,
    policy: OverwritePolicy,
) -> Result<u64, FileError> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    check_endpoints(src, dst, policy)?;

    let mut reader = File::open(src).map_err(|source| FileError::SourceUnreadable {
        path: src.to_path_buf(),
        source,
    })?;
    let mut writer = open_destination(dst, policy)?;

    let total = io::copy(&mut reader, &mut writer).map_err(|source| FileError::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    })?;

    debug!("fast-copied {} bytes from {} to {}", total, src.display(), dst.display());
    Ok(total)
}

/// Validate both ends of a copy and create the destination's parent
/// directories.
fn check_endpoints(src: &Path, dst: &Path, policy: OverwritePolicy) -> Result<(), FileError> {
    let meta = fs::metadata(src).map_err(|source| FileError::SourceUnreadable {
        path: src.to_path_buf(),
        source,
    })?;
    if !meta.is_file() {
        return Err(FileError::NotAFile(src.to_path_buf()));
    }

    if dst.exists() {
        if same_file(src, dst) {
            return Err(FileError::SameFile(dst.to_path_buf()));
        }
        if policy == OverwritePolicy::Deny {
            warn!("refusing to overwrite existing file {}", dst.display());
            return Err(FileError::DestinationExists(dst.to_path_buf()));
        }
    }

    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FileError::DestinationUnwritable {
            path: dst.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Under `Deny` the file is created with `create_new`, so an existing file is
/// never opened for writing.
fn open_destination(dst: &Path, policy: OverwritePolicy) -> Result<File, FileError> {
    let mut options = OpenOptions::new();
    options.write(true);
    match policy {
        OverwritePolicy::Deny => options.create_new(true),
        OverwritePolicy::Allow => options.create(true).truncate(true),
    };
    options.open(dst).map_err(|source| {
        if source.kind() == io::ErrorKind::AlreadyExists {
            FileError::DestinationExists(dst.to_path_buf())
        } else {
            FileError::DestinationUnwritable {
                path: dst.to_path_buf(),
                source,
            }
        }
    })
}

/// Same underlying file, including hard links to one inode.
#[cfg(unix)]
fn same_file(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

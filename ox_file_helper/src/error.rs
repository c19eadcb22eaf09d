use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Faults reported by the copy operations.
#[derive(Debug, Error)]
pub enum FileError {
    /// The source is missing or cannot be opened for reading.
    #[error("cannot read source file {}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source exists but is a directory or another non-regular file.
    #[error("source {} is not a regular file", .0.display())]
    NotAFile(PathBuf),

    /// The destination exists and the overwrite policy forbids replacing it.
    #[error("destination {} already exists", .0.display())]
    DestinationExists(PathBuf),

    /// The destination (or one of its parent directories) cannot be created.
    #[error("cannot create destination file {}", .path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source and destination are the same file: {}", .0.display())]
    SameFile(PathBuf),

    /// Reading or writing failed part-way through the transfer.
    #[error("copy from {} to {} failed", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

use core::fmt;
use std::io;
use std::path::PathBuf;

use crate::merkle::MerkleError;

/// Errors surfaced by the block layer.
#[derive(Debug)]
pub enum BlockError {
    /// The supplied path does not point at a directory.
    NotADirectory(PathBuf),
    /// A file exceeds the per-file size limit.
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },
    /// The folder holds more files than one block may carry.
    TooManyFiles { count: usize, limit: usize },
    /// The folder holds no files at all; an empty block has no root.
    EmptyBlock(PathBuf),
    /// A record was requested for a file index outside the block.
    UnknownFile { index: usize, count: usize },
    /// The supplied limits failed validation.
    InvalidLimits { reason: &'static str },
    /// Error bubbled up from the Merkle engine.
    Merkle(MerkleError),
    /// Filesystem failure while discovering or reading block contents.
    Io(io::Error),
    /// Manifest (de)serialisation failure.
    Json(serde_json::Error),
}

impl fmt::Display for BlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockError::NotADirectory(path) => {
                write!(f, "path is not a directory: {}", path.display())
            }
            BlockError::FileTooLarge { path, size, limit } => write!(
                f,
                "file is too big ({} bytes, limit {}): {}",
                size,
                limit,
                path.display()
            ),
            BlockError::TooManyFiles { count, limit } => {
                write!(f, "too many files, max. {}: {}", limit, count)
            }
            BlockError::EmptyBlock(path) => {
                write!(f, "no files to seal under {}", path.display())
            }
            BlockError::UnknownFile { index, count } => {
                write!(f, "file index {} not in block (file count {})", index, count)
            }
            BlockError::InvalidLimits { reason } => {
                write!(f, "invalid block limits: {}", reason)
            }
            BlockError::Merkle(err) => write!(f, "merkle engine: {}", err),
            BlockError::Io(err) => write!(f, "io: {}", err),
            BlockError::Json(err) => write!(f, "manifest json: {}", err),
        }
    }
}

impl std::error::Error for BlockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BlockError::Merkle(err) => Some(err),
            BlockError::Io(err) => Some(err),
            BlockError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MerkleError> for BlockError {
    fn from(err: MerkleError) -> Self {
        BlockError::Merkle(err)
    }
}

impl From<io::Error> for BlockError {
    fn from(err: io::Error) -> Self {
        BlockError::Io(err)
    }
}

impl From<serde_json::Error> for BlockError {
    fn from(err: serde_json::Error) -> Self {
        BlockError::Json(err)
    }
}

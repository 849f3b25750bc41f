use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::merkle::{verify, Digest, MerkleProof, MerkleTree, TreeHasher};

use super::config::BlockLimits;
use super::error::BlockError;
use super::files::collect_files;

/// Number of hex characters in a block's short identifier.
const SHORT_ID_LEN: usize = 8;

/// Per-file record persisted inside a block manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub size: u64,
    pub index: usize,
    pub proof: MerkleProof,
}

/// Durable description of a sealed block.
///
/// Holds everything a later verifier needs: the root, and per file its stable
/// index plus sibling path. File bytes themselves are not stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockManifest {
    pub root: Digest,
    pub file_count: usize,
    pub created_at: DateTime<Utc>,
    pub files: Vec<FileRecord>,
}

impl BlockManifest {
    /// First eight hex characters of the root, used to name blocks on disk.
    pub fn short_id(&self) -> String {
        let mut hex = self.root.to_hex().to_string();
        hex.truncate(SHORT_ID_LEN);
        hex
    }

    /// Checks one re-fetched file against the sealed root.
    ///
    /// `Ok(false)` is the tamper outcome; errors are reserved for caller
    /// misuse such as an out-of-range index.
    pub fn verify_file<H: TreeHasher>(&self, index: usize, bytes: &[u8]) -> Result<bool, BlockError> {
        let record = self.files.get(index).ok_or(BlockError::UnknownFile {
            index,
            count: self.file_count,
        })?;
        Ok(verify::<H>(bytes, &self.root, &record.proof))
    }

    /// Serialises the manifest as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BlockError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a manifest back from its JSON rendering.
    pub fn from_json(text: &str) -> Result<Self, BlockError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Seals every file under `dir` into a block manifest.
///
/// Discovery is recursive and path-sorted; each file becomes one leaf in that
/// order. The tree is built once as a pyramid and every file's proof is read
/// out of it.
pub fn seal_block<H: TreeHasher>(dir: &Path, limits: &BlockLimits) -> Result<BlockManifest, BlockError> {
    limits.validate()?;
    let paths = collect_files(dir)?;
    if paths.is_empty() {
        return Err(BlockError::EmptyBlock(dir.to_path_buf()));
    }
    if paths.len() > limits.max_files {
        return Err(BlockError::TooManyFiles {
            count: paths.len(),
            limit: limits.max_files,
        });
    }

    let mut contents = Vec::with_capacity(paths.len());
    for path in &paths {
        let metadata = fs::metadata(path)?;
        if metadata.len() > limits.max_file_bytes {
            return Err(BlockError::FileTooLarge {
                path: path.clone(),
                size: metadata.len(),
                limit: limits.max_file_bytes,
            });
        }
        contents.push(fs::read(path)?);
    }

    let tree = MerkleTree::<H>::from_leaves(&contents)?;
    let mut files = Vec::with_capacity(paths.len());
    for (index, (path, bytes)) in paths.iter().zip(&contents).enumerate() {
        files.push(FileRecord {
            filename: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            size: bytes.len() as u64,
            index,
            proof: tree.proof(index)?,
        });
    }

    Ok(BlockManifest {
        root: tree.root(),
        file_count: files.len(),
        created_at: Utc::now(),
        files,
    })
}

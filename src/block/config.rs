use serde::{Deserialize, Serialize};

use super::error::BlockError;

/// Per-file size ceiling applied while sealing, in bytes.
pub const DEFAULT_MAX_FILE_BYTES: u64 = 1024 * 1024;

/// Maximum number of files one block may carry.
pub const DEFAULT_MAX_FILES: usize = 50;

/// Limits applied while sealing a block.
///
/// The defaults mirror the distribution tooling's expectations: blocks carry
/// at most 50 potentially small files of up to 1 MiB each. Trees stay well
/// within memory either way; the limits bound transfer units, not the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLimits {
    pub max_file_bytes: u64,
    pub max_files: usize,
}

impl Default for BlockLimits {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl BlockLimits {
    /// Rejects limit combinations that can never seal a block.
    pub fn validate(&self) -> Result<(), BlockError> {
        if self.max_file_bytes == 0 {
            return Err(BlockError::InvalidLimits {
                reason: "max_file_bytes must be non-zero",
            });
        }
        if self.max_files == 0 {
            return Err(BlockError::InvalidLimits {
                reason: "max_files must be non-zero",
            });
        }
        Ok(())
    }
}

//! Content-block layer: seals a folder of files into a verifiable block.
//!
//! A block is the unit the surrounding distribution tooling ships around: an
//! ordered list of files, their Merkle root and one proof per file. The
//! [`BlockManifest`] is the only durable artifact; file bytes are re-read
//! later, possibly on a different machine, and checked against the sealed
//! root with nothing but the manifest in hand.
//!
//! Files are collected recursively and sorted by path, so the leaf order and
//! therefore the root are reproducible regardless of filesystem enumeration
//! order.

mod config;
mod error;
mod files;
mod manifest;

pub use config::BlockLimits;
pub use error::BlockError;
pub use files::collect_files;
pub use manifest::{seal_block, BlockManifest, FileRecord};

//! Merkle-tree integrity engine for verified content blocks.
//!
//! `canopy` builds a single root digest over an ordered sequence of byte
//! items and produces, for any one item, a compact sibling path proving that
//! the item belongs to the sequence summarised by that root. A verifier
//! holding only the item, the root and the path confirms membership and
//! position without seeing the other items.
//!
//! The [`merkle`] module is the engine proper; [`block`] is the thin caller
//! layer that seals a folder of files into a manifest carrying the root and
//! one proof per file. Every engine operation is a pure, synchronous function
//! over immutable inputs. With the `parallel` feature enabled, leaf hashing
//! and level reduction fan out through rayon without changing any output.

pub mod block;
pub mod hash;
pub mod merkle;
pub mod utils;

pub use block::{seal_block, BlockError, BlockLimits, BlockManifest, FileRecord};
pub use merkle::{
    compute_root, generate_proof, verify, Blake2sTreeHasher, Digest, MerkleError, MerkleProof,
    MerkleTree, ProofEntry, TreeHasher,
};

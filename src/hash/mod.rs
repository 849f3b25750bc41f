//! Byte-oriented hashing primitive backing the Merkle engine.
//!
//! The engine fixes a single 256-bit primitive, BLAKE2s. [`Hasher`] exposes
//! the incremental state, [`hash`] is the one-shot helper used for leaf
//! digests, and [`HexOutput`] renders a digest as lowercase hexadecimal
//! without allocating. Hashing is deterministic and side-effect-free; there
//! are no error conditions for well-formed byte input.

mod blake2s;

pub use blake2s::{hash, Hasher, HexOutput, DIGEST_SIZE};

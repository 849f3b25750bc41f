//! Binary Merkle commitment layer for `canopy`.
//!
//! The module fixes the following protocol knobs:
//!
//! * **Arity:** binary. Each level is reduced by combining consecutive pairs
//!   `(0,1), (2,3), …` in original order; an odd-length level pairs its last
//!   digest with itself, so every level reduces cleanly without a sentinel
//!   value.
//! * **Domain separation:** every pair combination is prefixed with a one
//!   byte node tag: [`LEAF_DOMAIN_TAG`] (`0x00`) for the first reduction
//!   directly above the raw leaves, [`NODE_DOMAIN_TAG`] (`0x01`) for every
//!   reduction above it. A valid two-leaf subtree root can therefore never be
//!   replayed as a forged internal-node hash.
//! * **Single leaf:** a one-element sequence short-circuits; its root is the
//!   leaf digest itself and no tag is ever applied.
//! * **Hash backend:** the [`TreeHasher`] trait abstracts the primitive;
//!   [`Blake2sTreeHasher`] is the single configured production backend.
//!
//! Roots and proofs are the only durable outputs. Proof generation re-derives
//! each ascending level from the leaf digests instead of caching; callers
//! needing many proofs for one tree build a [`MerkleTree`] pyramid once and
//! read every path out of it.

mod hasher;
mod proof;
pub mod traits;
mod tree;
mod types;

pub use hasher::Blake2sTreeHasher;
pub use proof::{generate_proof, verify};
pub use traits::{TreeHasher, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG};
pub use tree::{compute_root, reduce_level, MerkleTree};
pub use types::{Digest, MerkleError, MerkleProof, ProofEntry};

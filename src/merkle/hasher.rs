use crate::hash::{hash, Hasher};

use super::traits::{TreeHasher, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG};
use super::types::Digest;

/// BLAKE2s-backed hasher, the single configured 256-bit primitive.
///
/// Leaves hash as `BLAKE2s(item)`; pairs hash as
/// `BLAKE2s(tag || left || right)`.
pub struct Blake2sTreeHasher;

impl TreeHasher for Blake2sTreeHasher {
    fn hash_leaf(item: &[u8]) -> Digest {
        Digest::from_bytes(hash(item))
    }

    fn combine(tag: u8, left: &Digest, right: &Digest) -> Digest {
        let mut hasher = Hasher::new();
        hasher.update(&[tag]);
        hasher.update(left.as_bytes());
        hasher.update(right.as_bytes());
        Digest::from_bytes(hasher.finalize())
    }
}

impl Blake2sTreeHasher {
    /// Canonical leaf-level domain separation tag.
    pub const fn leaf_domain_tag() -> u8 {
        LEAF_DOMAIN_TAG
    }

    /// Canonical internal-node domain separation tag.
    pub const fn node_domain_tag() -> u8 {
        NODE_DOMAIN_TAG
    }
}

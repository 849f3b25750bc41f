use super::types::Digest;

/// Domain tag prefixed when combining two leaf-level digests.
pub const LEAF_DOMAIN_TAG: u8 = 0x00;

/// Domain tag prefixed when combining two internal-node digests.
pub const NODE_DOMAIN_TAG: u8 = 0x01;

/// Hash abstraction used by the tree builder, proof generator and verifier.
///
/// Implementations must be deterministic and side-effect-free: the same input
/// always yields the same fixed-width digest. Build and verify paths share
/// one implementation, otherwise no proof will check out.
pub trait TreeHasher {
    /// Digests one raw leaf item.
    fn hash_leaf(item: &[u8]) -> Digest;

    /// Combines an ordered pair of child digests under `tag`.
    ///
    /// `tag` is [`LEAF_DOMAIN_TAG`] for the reduction directly above the raw
    /// leaves and [`NODE_DOMAIN_TAG`] for every level above it.
    fn combine(tag: u8, left: &Digest, right: &Digest) -> Digest;
}

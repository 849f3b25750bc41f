use super::traits::{TreeHasher, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG};
use super::tree::{hash_leaves, reduce_level};
use super::types::{Digest, MerkleError, MerkleProof, ProofEntry};

/// Reads the sibling of `position` out of `level`.
///
/// When an odd-length level leaves the last element without a partner, the
/// element itself is recorded at its own position, mirroring the reducer's
/// self-duplication rule.
pub(crate) fn sibling_at(level: &[Digest], position: usize) -> ProofEntry {
    let sibling = if position % 2 == 0 {
        position + 1
    } else {
        position - 1
    };
    match level.get(sibling) {
        Some(digest) => ProofEntry {
            digest: *digest,
            position: sibling as u32,
        },
        None => ProofEntry {
            digest: level[position],
            position: position as u32,
        },
    }
}

/// Produces the sibling path for the leaf at `index`.
///
/// Levels above the leaves are re-derived on every call rather than cached,
/// so one proof costs the same as one root computation. Callers needing
/// proofs for many indices of the same tree should build a
/// [`MerkleTree`](super::MerkleTree) instead.
pub fn generate_proof<H, B>(leaves: &[B], index: usize) -> Result<MerkleProof, MerkleError>
where
    H: TreeHasher,
    B: AsRef<[u8]> + Sync,
{
    if leaves.is_empty() {
        return Err(MerkleError::EmptyLeaves);
    }
    if index >= leaves.len() {
        return Err(MerkleError::IndexOutOfRange {
            index,
            len: leaves.len(),
        });
    }
    let mut level = hash_leaves::<H, B>(leaves);
    // A single leaf is its own root; the path is empty.
    if level.len() == 1 {
        return Ok(MerkleProof::default());
    }

    let mut entries = vec![sibling_at(&level, index)];
    let mut position = index;
    let mut is_leaf_level = true;
    while level.len() != 2 {
        level = reduce_level::<H>(&level, is_leaf_level);
        is_leaf_level = false;
        position /= 2;
        entries.push(sibling_at(&level, position));
    }
    Ok(MerkleProof::new(entries))
}

/// Replays the combination rule against `leaf` and reports whether the path
/// reproduces `root`.
///
/// The sibling's recorded position dictates operand order: an odd position
/// puts the sibling on the right, an even position on the left, so the pair
/// is always recombined in ascending-index order. A mismatch (tampered data,
/// wrong proof or wrong root) is a normal outcome, never an error.
pub fn verify<H: TreeHasher>(leaf: &[u8], root: &Digest, proof: &MerkleProof) -> bool {
    let mut running = H::hash_leaf(leaf);
    for (depth, entry) in proof.entries().iter().enumerate() {
        let tag = if depth == 0 {
            LEAF_DOMAIN_TAG
        } else {
            NODE_DOMAIN_TAG
        };
        running = if entry.is_right() {
            H::combine(tag, &running, &entry.digest)
        } else {
            H::combine(tag, &entry.digest, &running)
        };
    }
    running == *root
}

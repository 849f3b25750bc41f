use core::marker::PhantomData;

use super::proof::sibling_at;
use super::traits::{TreeHasher, LEAF_DOMAIN_TAG, NODE_DOMAIN_TAG};
use super::types::{Digest, MerkleError, MerkleProof};

/// Digests every raw item into the leaf level, in original order.
pub(crate) fn hash_leaves<H, B>(items: &[B]) -> Vec<Digest>
where
    H: TreeHasher,
    B: AsRef<[u8]> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if crate::utils::parallelism_enabled() {
            use rayon::prelude::*;
            let chunk = crate::utils::preferred_chunk_size(items.len());
            return items
                .par_iter()
                .with_min_len(chunk)
                .with_max_len(chunk)
                .map(|item| H::hash_leaf(item.as_ref()))
                .collect();
        }
    }
    items.iter().map(|item| H::hash_leaf(item.as_ref())).collect()
}

/// Reduces one level to its parent level by combining consecutive pairs.
///
/// A single-element level is already the root and comes back unchanged. An
/// odd-length level pairs its last digest with itself, so every level reduces
/// cleanly to `ceil(len / 2)` parents. `is_leaf_level` selects the domain tag
/// for this reduction and must be true exactly once per tree, for the
/// reduction directly above the raw leaves.
pub fn reduce_level<H: TreeHasher>(level: &[Digest], is_leaf_level: bool) -> Vec<Digest> {
    if level.len() == 1 {
        return level.to_vec();
    }
    let tag = if is_leaf_level {
        LEAF_DOMAIN_TAG
    } else {
        NODE_DOMAIN_TAG
    };
    #[cfg(feature = "parallel")]
    {
        if crate::utils::parallelism_enabled() {
            use rayon::prelude::*;
            let chunk = crate::utils::preferred_chunk_size(level.len().div_ceil(2));
            return level
                .par_chunks(2)
                .with_min_len(chunk)
                .with_max_len(chunk)
                .map(|pair| combine_pair::<H>(tag, pair))
                .collect();
        }
    }
    level.chunks(2).map(|pair| combine_pair::<H>(tag, pair)).collect()
}

fn combine_pair<H: TreeHasher>(tag: u8, pair: &[Digest]) -> Digest {
    let left = &pair[0];
    let right = pair.get(1).unwrap_or(left);
    H::combine(tag, left, right)
}

/// Computes the root digest over an ordered sequence of raw items.
///
/// A one-item sequence short-circuits to that item's own digest. The same
/// sequence in the same order always yields the same root.
pub fn compute_root<H, B>(leaves: &[B]) -> Result<Digest, MerkleError>
where
    H: TreeHasher,
    B: AsRef<[u8]> + Sync,
{
    let mut level = hash_leaves::<H, B>(leaves);
    if level.is_empty() {
        return Err(MerkleError::EmptyLeaves);
    }
    let mut is_leaf_level = true;
    while level.len() > 1 {
        level = reduce_level::<H>(&level, is_leaf_level);
        is_leaf_level = false;
    }
    Ok(level[0])
}

/// Level pyramid retained after one build.
///
/// [`generate_proof`](super::generate_proof) re-derives every level per call;
/// proving all `n` leaves that way costs O(n²). The pyramid keeps each level
/// from one reduction pass and reads every sibling path straight out of it,
/// producing proofs byte-identical to the re-deriving path.
pub struct MerkleTree<H: TreeHasher> {
    levels: Vec<Vec<Digest>>,
    marker: PhantomData<H>,
}

impl<H: TreeHasher> MerkleTree<H> {
    /// Builds the full pyramid from raw items.
    pub fn from_leaves<B>(leaves: &[B]) -> Result<Self, MerkleError>
    where
        B: AsRef<[u8]> + Sync,
    {
        let hashed = hash_leaves::<H, B>(leaves);
        if hashed.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }
        let mut levels = Vec::new();
        levels.push(hashed.clone());
        let mut current = hashed;
        let mut is_leaf_level = true;
        while current.len() > 1 {
            let next = reduce_level::<H>(&current, is_leaf_level);
            levels.push(next.clone());
            current = next;
            is_leaf_level = false;
        }
        Ok(Self {
            levels,
            marker: PhantomData,
        })
    }

    /// Root digest of the committed sequence.
    pub fn root(&self) -> Digest {
        // The pyramid always ends in a single-digest level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves committed.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels, leaf level and root level included.
    pub fn height(&self) -> usize {
        self.levels.len()
    }

    /// Reads the sibling path for `index` out of the stored levels.
    pub fn proof(&self, index: usize) -> Result<MerkleProof, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange {
                index,
                len: leaf_count,
            });
        }
        let mut entries = Vec::new();
        let mut position = index;
        for level in &self.levels {
            if level.len() == 1 {
                break;
            }
            entries.push(sibling_at(level, position));
            position /= 2;
        }
        Ok(MerkleProof::new(entries))
    }
}

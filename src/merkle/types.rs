use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hash::{HexOutput, DIGEST_SIZE};

/// Canonical digest flowing through levels, proofs and manifests.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Constructs a digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the canonical byte representation.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub const fn to_hex(&self) -> HexOutput {
        HexOutput(self.0)
    }

    /// Parses a 64-character hexadecimal rendering back into a digest.
    pub fn from_hex(text: &str) -> Option<Self> {
        let raw = text.as_bytes();
        if raw.len() != DIGEST_SIZE * 2 {
            return None;
        }
        let mut bytes = [0u8; DIGEST_SIZE];
        for (slot, pair) in bytes.iter_mut().zip(raw.chunks_exact(2)) {
            *slot = hex_value(pair[0])? << 4 | hex_value(pair[1])?;
        }
        Some(Self(bytes))
    }
}

fn hex_value(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest(0x{})", self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl Visitor<'_> for HexVisitor {
            type Value = Digest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a {}-character hexadecimal digest", DIGEST_SIZE * 2)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Digest, E> {
                Digest::from_hex(value)
                    .ok_or_else(|| E::custom(format!("malformed hex digest: {value:?}")))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// One sibling digest together with its position inside the level it was
/// read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofEntry {
    pub digest: Digest,
    pub position: u32,
}

impl ProofEntry {
    /// Whether the sibling sits on the right-hand side of its pair.
    pub const fn is_right(&self) -> bool {
        self.position % 2 == 1
    }
}

/// Ordered sibling path from the leaf level up to just below the root.
///
/// Together with the root and the leaf's own bytes this is everything a
/// verifier needs; a single-leaf tree carries an empty path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    entries: Vec<ProofEntry>,
}

impl MerkleProof {
    /// Wraps an ordered list of sibling entries.
    pub fn new(entries: Vec<ProofEntry>) -> Self {
        Self { entries }
    }

    /// Sibling entries ordered from the leaf level upward.
    pub fn entries(&self) -> &[ProofEntry] {
        &self.entries
    }

    /// Mutable access to the entries.
    pub fn entries_mut(&mut self) -> &mut [ProofEntry] {
        &mut self.entries
    }

    /// Number of levels the path climbs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the path is empty (single-leaf tree).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Errors emitted by the Merkle engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MerkleError {
    /// No leaves were supplied; the empty sequence has no root.
    EmptyLeaves,
    /// A proof was requested for a leaf position outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for MerkleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MerkleError::EmptyLeaves => write!(f, "no leaves supplied"),
            MerkleError::IndexOutOfRange { index, len } => {
                write!(f, "leaf index {} out of range (leaf count {})", index, len)
            }
        }
    }
}

impl std::error::Error for MerkleError {}

use core::fmt;

use blake2::{Blake2s256, Digest};

/// Size in bytes of every digest emitted by the engine.
pub const DIGEST_SIZE: usize = 32;

/// Incremental BLAKE2s-256 hasher.
pub struct Hasher {
    state: Blake2s256,
}

impl Hasher {
    /// Creates a fresh hasher state.
    pub fn new() -> Self {
        Self {
            state: Blake2s256::new(),
        }
    }

    /// Absorbs additional bytes into the state.
    pub fn update(&mut self, bytes: &[u8]) {
        Digest::update(&mut self.state, bytes);
    }

    /// Finalises the state and returns the 32-byte digest.
    pub fn finalize(self) -> [u8; DIGEST_SIZE] {
        self.state.finalize().into()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot digest of `bytes`.
pub fn hash(bytes: &[u8]) -> [u8; DIGEST_SIZE] {
    let mut hasher = Hasher::new();
    hasher.update(bytes);
    hasher.finalize()
}

/// Lowercase hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput(pub [u8; DIGEST_SIZE]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

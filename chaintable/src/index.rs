//! Slot derivation for the table. A key is hashed with SHA-256 and the first
//! two digest bytes, read big-endian, select one of the `CAPACITY` slots. The
//! 16-bit prefix spans the slot range exactly, so no modulo is applied.

use sha2::{Digest, Sha256};

/// Number of slots in every table. Fixed at `2^16` to match the 16-bit digest prefix.
pub const CAPACITY: usize = 1 << 16;

/// Produces a raw SHA-256 digest of the provided bytes.
pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Returns the hexadecimal representation of a SHA-256 digest.
pub fn sha256_hex(data: &[u8]) -> String {
    let digest = sha256_digest(data);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Maps a key to its slot in `[0, CAPACITY)`.
/// Pure function of the key bytes: identical across calls and table instances.
pub fn slot_index(key: &str) -> usize {
    let digest = sha256_digest(key.as_bytes());
    usize::from(u16::from_be_bytes([digest[0], digest[1]]))
}

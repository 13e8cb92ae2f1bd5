//! 32-bit FNV-1a over the leading characters of the input.

/// FNV-1a offset basis.
const OFFSET_BASIS: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
const PRIME: u32 = 0x0100_0193;
/// Only this many leading characters contribute to the hash. Data-URI
/// payloads differ well within this prefix.
const MAX_HASHED_CHARS: usize = 2048;

/// Hashes a string to a deterministic 32-bit seed.
///
/// Inputs sharing their first [`MAX_HASHED_CHARS`] characters hash
/// identically. The empty string hashes to the offset basis.
pub fn fnv1a(input: &str) -> u32 {
    let mut hash = OFFSET_BASIS;
    for c in input.chars().take(MAX_HASHED_CHARS) {
        hash ^= c as u32;
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

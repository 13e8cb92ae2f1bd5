//! Seed expansion: one xorshift32 round per draw, normalized to `[0, 1]`.

/// Stand-in for an all-zero seed, which xorshift never leaves.
const ZERO_SEED_FALLBACK: u32 = 123_456_789;
/// XOR mask applied to the seed for the second, decorrelated draw.
const SECOND_DRAW_MASK: u32 = 0x9e37_79b9;

/// Expands a 32-bit seed into a uniform value in `[0, 1]`.
///
/// One xorshift32 round (shifts 13, 17, 5), then division by `u32::MAX`.
pub fn uniform01(seed: u32) -> f64 {
    let mut x = if seed == 0 { ZERO_SEED_FALLBACK } else { seed };
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    f64::from(x) / f64::from(u32::MAX)
}

/// Two decorrelated draws from one hash: the raw seed and the seed XORed
/// with [`SECOND_DRAW_MASK`].
pub fn draw_pair(hash: u32) -> (f64, f64) {
    (uniform01(hash), uniform01(hash ^ SECOND_DRAW_MASK))
}

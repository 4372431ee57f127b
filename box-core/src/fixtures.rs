//! Shared test fixtures: known byte content and the digests it must produce.
//!
//! The `SMALL_FILE_*` constants are cross-checked against an independent
//! reference scanner's recorded output for the same bytes, so they double as
//! a portability check on the digest construction, not just a round-trip.
//! The large-file scenarios from that reference run depend on a seeded PRNG
//! stream that isn't reproducible bit-for-bit from Rust, so they aren't
//! carried over here; chunking behavior on larger inputs is instead covered
//! by property tests over locally generated byte sequences.

pub const SMALL_FILE_CONTENTS: &[u8] = b"i'm small";
pub const SMALL_FILE_PART_SHA1_HEX: &str = "a67316b4de11d37d722e7da5768d7d22220c2b89";
pub const SMALL_FILE_SHA1_HEX: &str = "e025982956d87909188cd8b76699711478347de6";

pub const EMPTY_FILE_CONTENTS: &[u8] = b"";
pub const EMPTY_FILE_SHA1_HEX: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// Directory digests for a tree containing only `a/b/small_file`, i.e. the
/// subtree of the reference scenario that doesn't touch the PRNG-derived
/// large file and so can still be checked exactly.
pub const SMALL_FILE_DIR_B_SHA1_HEX: &str = "104c9da6a7654229304fd77f4479751070453613";
pub const SMALL_FILE_DIR_A_SHA1_HEX: &str = "8b2a5d310e80ad144819786e36ca4733e26939c9";

/// A small deterministic byte generator for property tests that need
/// reproducible "random-looking" input without depending on any platform
/// RNG. Not intended to resemble a particular algorithm's output.
pub fn lcg_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as u8
        })
        .collect()
}

//! Deterministic pseudorandom fill for segments B and D.
//!
//! The generator is ChaCha8 seeded with the SHA-256 digest of the seed text,
//! so the same user id and registration instant always yield the same
//! pattern on every platform running this implementation.

use chrono::{DateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

pub const PATTERN_LEN: usize = 12;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Drawn at every fourth position. Tier separators (`-`, `:`) are left out so an
/// issued key always splits into exactly five parts under its own separator.
pub const SPECIAL_CHARS: &[u8] = b"!@#$%^&*~=_+[]{}|;,./<>?";

/// Seed text: the user id followed by the registration instant as fractional
/// seconds since the epoch (e.g. `alice1231710460800.0`).
pub fn seed_text(user_id: &str, registered_at: &DateTime<Utc>) -> String {
    let seconds = registered_at.timestamp_micros() as f64 / 1_000_000.0;
    format!("{}{:?}", user_id, seconds)
}

/// Generate the 12-character unique pattern for a seed.
///
/// Positions 3, 7 and 11 hold a special character; every other position is
/// an uppercase letter or digit.
pub fn unique_pattern(seed: &str) -> String {
    let mut seed_bytes = [0u8; 32];
    seed_bytes.copy_from_slice(&Sha256::digest(seed.as_bytes()));
    let mut rng = ChaCha8Rng::from_seed(seed_bytes);

    (0..PATTERN_LEN)
        .map(|i| {
            let alphabet = if i % 4 == 3 {
                SPECIAL_CHARS
            } else {
                ALPHANUMERIC
            };
            char::from(alphabet[rng.gen_range(0..alphabet.len())])
        })
        .collect()
}

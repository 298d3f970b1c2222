use sha2::{Digest, Sha256};

/// Length of the user hash fragment derived for every key.
pub const FRAGMENT_LEN: usize = 6;

/// Calculate the user hash fragment from a user id using SHA256
///
/// Uppercase hex, first six digits. This fragment is the only link from a key
/// back to the id it was issued for, and the link is one-way.
pub fn user_hash_fragment(user_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(user_id.as_bytes());
    let digest = format!("{:X}", hasher.finalize());
    digest[..FRAGMENT_LEN].to_string()
}

use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 bytes of `input`, as 64 lowercase hex characters.
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

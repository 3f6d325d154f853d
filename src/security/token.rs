use argon2::password_hash::rand_core::{OsRng, RngCore};

const TOKEN_PREFIX: &str = "admin_";
const TOKEN_BYTES: usize = 40;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Opaque bearer token for an admin session. The prefix makes session
/// tokens recognizable in logs; the rest is OS randomness mapped onto an
/// alphanumeric alphabet.
pub fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);

    let suffix: String = bytes
        .iter()
        .map(|b| ALPHABET[(*b as usize) % ALPHABET.len()] as char)
        .collect();

    format!("{}{}", TOKEN_PREFIX, suffix)
}

//! Repeating-key XOR obfuscation for the player list, carried as base64 text.
//!
//! This hides a bundled roster from casual reading. It is not encryption in
//! any security sense: there is no integrity check, so a wrong password
//! decrypts to garbage instead of failing.
use crate::base64;
use crate::error::{Result, RosterError};

/// Password bytes used as the XOR key
fn derive_key(password: &str) -> Result<&[u8]> {
    if password.is_empty() {
        return Err(RosterError::invalid_argument("password cannot be empty"));
    }
    Ok(password.as_bytes())
}

/// XORs each byte with `key[i % key.len()]`. Applying it twice with the same
/// key gives back the input.
pub fn xor_with_key(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }

    data.iter()
        .zip(key.iter().cycle())
        .map(|(&b, &k)| b ^ k)
        .collect()
}

/// Encrypts UTF-8 text with the password and returns base64
pub fn encrypt(plaintext: &str, password: &str) -> Result<String> {
    let key = derive_key(password)?;
    let cipher = xor_with_key(plaintext.as_bytes(), key);
    Ok(base64::encode(&cipher))
}

/// Decrypts base64 text produced by [`encrypt`].
///
/// The text must consist only of base64 characters. Bytes that don't form
/// valid UTF-8 after decryption are replaced with U+FFFD; that usually
/// means the password was wrong.
pub fn decrypt(ciphertext: &str, password: &str) -> Result<String> {
    let key = derive_key(password)?;

    if !base64::is_base64_text(ciphertext) {
        return Err(RosterError::invalid_argument("invalid base64 format"));
    }

    let plain = xor_with_key(&base64::decode(ciphertext), key);

    match String::from_utf8(plain) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(
                valid_up_to = e.utf8_error().valid_up_to(),
                "decrypted player list is not valid UTF-8, wrong password?"
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

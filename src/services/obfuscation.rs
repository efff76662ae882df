//! Obfuscation Codec for Keyhaven.
//!
//! Vault secrets are XORed against a keystream cycled from the owning
//! account's identifier, then base64-armored for storage. This is
//! obfuscation, not encryption: anyone holding the blob and the account id
//! can invert it. It only keeps stored secrets from being literal plaintext.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use zeroize::Zeroize;

use crate::types::errors::ObfuscationError;

/// XOR keystream derived from an account identifier.
///
/// Derivation maps each code point of the identifier to one keystream byte,
/// so it only accepts identifiers within U+0000..=U+00FF. Key bytes are
/// zeroized on drop.
pub struct ObfuscationKey {
    bytes: Vec<u8>,
}

impl ObfuscationKey {
    /// Derives a keystream from a stable account identifier. Fails on an
    /// empty identifier (the keystream would have no bytes to cycle) and on
    /// identifiers the byte-wise codec cannot map.
    pub fn derive(account_id: &str) -> Result<Self, ObfuscationError> {
        if account_id.is_empty() {
            return Err(ObfuscationError::InvalidKey(
                "account id is empty".to_string(),
            ));
        }
        Ok(Self {
            bytes: codec_bytes(account_id)?,
        })
    }

    /// Keystream length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    fn byte_at(&self, index: usize) -> u8 {
        self.bytes[index % self.bytes.len()]
    }
}

impl Drop for ObfuscationKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Maps a string to one byte per character. Code points above U+00FF have no
/// byte form in this codec and are rejected.
fn codec_bytes(input: &str) -> Result<Vec<u8>, ObfuscationError> {
    input
        .chars()
        .map(|c| {
            let code_point = c as u32;
            if code_point > 0xFF {
                Err(ObfuscationError::UnsupportedCharacter(c))
            } else {
                Ok(code_point as u8)
            }
        })
        .collect()
}

/// XORs data against the cycled keystream. Involutory: applying it twice
/// with the same key returns the input.
fn xor_mask(data: &[u8], key: &ObfuscationKey) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(index, byte)| byte ^ key.byte_at(index))
        .collect()
}

/// Masks a secret with the key and armors the result as base64 text.
pub fn obfuscate(secret: &str, key: &ObfuscationKey) -> Result<String, ObfuscationError> {
    let bytes = codec_bytes(secret)?;
    Ok(BASE64.encode(xor_mask(&bytes, key)))
}

/// Inverse of [`obfuscate`] for the same key. A blob that is not valid
/// base64 fails with a decode error instead of producing corrupt plaintext.
pub fn deobfuscate(blob: &str, key: &ObfuscationKey) -> Result<String, ObfuscationError> {
    let masked = BASE64
        .decode(blob)
        .map_err(|e| ObfuscationError::DecodeError(e.to_string()))?;
    Ok(xor_mask(&masked, key)
        .into_iter()
        .map(|byte| byte as char)
        .collect())
}

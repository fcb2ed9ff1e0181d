//! Reversible obfuscation of the bearer token held in session storage.
//!
//! The secret ships with the client, so this only keeps the token from being
//! readable at a glance in storage. It is not a security boundary: token
//! protection has to come from the backend (short-lived tokens, HTTPS-only
//! transport, httpOnly cookies).
//!
//! Format: base64(nonce_12bytes || ciphertext || tag_16bytes)

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// AES-256-GCM codec keyed by a shared secret.
#[derive(Clone)]
pub struct CredentialCodec {
    key: [u8; KEY_LEN],
}

impl Drop for CredentialCodec {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl std::fmt::Debug for CredentialCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialCodec").finish_non_exhaustive()
    }
}

impl CredentialCodec {
    /// Derive the cipher key from an arbitrary-length secret.
    pub fn new(secret: &str) -> Self {
        let digest = Sha256::digest(secret.as_bytes());
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&digest);
        Self { key }
    }

    /// Encode a plaintext token. A fresh nonce is drawn for every call, so
    /// encoding the same token twice yields different output.
    ///
    /// Returns an empty string if encryption fails, which downstream reads
    /// treat as "no valid token".
    pub fn encode(&self, token: &str) -> String {
        match self.try_encode(token) {
            Ok(encoded) => encoded,
            Err(reason) => {
                log::error!("Token encoding failed: {}", reason);
                String::new()
            }
        }
    }

    /// Inverse of [`encode`](Self::encode). Malformed input, a different
    /// secret, or tampered data all yield an empty string; this never panics.
    pub fn decode(&self, encoded: &str) -> String {
        if encoded.is_empty() {
            return String::new();
        }
        match self.try_decode(encoded) {
            Ok(token) => token,
            Err(reason) => {
                log::warn!("Token decoding failed: {}", reason);
                String::new()
            }
        }
    }

    fn cipher(&self) -> Result<Aes256Gcm, &'static str> {
        Aes256Gcm::new_from_slice(&self.key).map_err(|_| "Invalid key")
    }

    fn try_encode(&self, token: &str) -> Result<String, &'static str> {
        let cipher = self.cipher()?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, token.as_bytes())
            .map_err(|_| "Encryption failed")?;

        // nonce || ciphertext (includes tag)
        let mut result = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        result.extend_from_slice(&nonce);
        result.extend_from_slice(&ciphertext);

        Ok(base64::engine::general_purpose::STANDARD.encode(&result))
    }

    fn try_decode(&self, encoded: &str) -> Result<String, &'static str> {
        let data = base64::engine::general_purpose::STANDARD
            .decode(encoded.trim())
            .map_err(|_| "Invalid base64")?;

        if data.len() < NONCE_LEN + TAG_LEN {
            return Err("Ciphertext too short");
        }

        let (nonce, ciphertext) = data.split_at(NONCE_LEN);
        let plaintext = self
            .cipher()?
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| "Decryption failed (wrong key or tampered data)")?;

        String::from_utf8(plaintext).map_err(|_| "Decrypted data is not valid UTF-8")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let codec = CredentialCodec::new("console-secret");
        for token in ["a", "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhZG1pbiJ9.sig", "ümlaut token"] {
            assert_eq!(codec.decode(&codec.encode(token)), token);
        }
    }

    #[test]
    fn test_encoding_is_randomized() {
        let codec = CredentialCodec::new("console-secret");
        let first = codec.encode("same-token");
        let second = codec.encode("same-token");
        assert_ne!(first, second);
        assert_eq!(codec.decode(&first), codec.decode(&second));
    }

    #[test]
    fn test_garbage_decodes_to_empty() {
        let codec = CredentialCodec::new("console-secret");
        assert_eq!(codec.decode(""), "");
        assert_eq!(codec.decode("not base64 at all!"), "");
        assert_eq!(codec.decode("c2hvcnQ="), "");
        assert_eq!(codec.decode(&"A".repeat(80)), "");
    }

    #[test]
    fn test_wrong_secret_decodes_to_empty() {
        let encoded = CredentialCodec::new("one").encode("token");
        assert_eq!(CredentialCodec::new("two").decode(&encoded), "");
    }
}

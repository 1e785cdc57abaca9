//! Sealed box encryption for secret values.
//!
//! GitHub expects secret values encrypted with libsodium's `crypto_box_seal`
//! construction: an ephemeral X25519 keypair is generated per message, a
//! shared secret is derived against the repository public key, and the
//! plaintext is encrypted with XSalsa20-Poly1305. The ephemeral public key is
//! prepended to the ciphertext so the holder of the matching private key can
//! decrypt without any sender identity.

use base64::{engine::general_purpose::STANDARD, Engine};
use crypto_box::PublicKey;
use rand::rngs::OsRng;

use crate::error::CryptoError;

/// Expected length of a Curve25519 public key in bytes
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Anonymous sealed-box encryption capability
///
/// Implemented by [`SealedBoxSealer`] in production; tests may substitute a
/// deterministic fake to observe what the client does with the ciphertext.
pub trait Sealer: Send + Sync {
    /// Seal `plaintext` to the recipient public key, returning raw ciphertext
    fn seal(
        &self,
        public_key: &[u8; PUBLIC_KEY_LENGTH],
        plaintext: &[u8],
    ) -> std::result::Result<Vec<u8>, CryptoError>;
}

/// Production sealer backed by the `crypto_box` sealed-box implementation
///
/// Fresh randomness is drawn from the OS per call; sealing the same plaintext
/// twice yields different ciphertexts, both of which unseal to the plaintext.
#[derive(Debug, Default, Clone, Copy)]
pub struct SealedBoxSealer;

impl Sealer for SealedBoxSealer {
    fn seal(
        &self,
        public_key: &[u8; PUBLIC_KEY_LENGTH],
        plaintext: &[u8],
    ) -> std::result::Result<Vec<u8>, CryptoError> {
        let recipient = PublicKey::from(*public_key);
        recipient
            .seal(&mut OsRng, plaintext)
            .map_err(|_| CryptoError::SealFailed)
    }
}

/// Decode a base64-encoded public key into its 32 raw bytes
///
/// Rejects keys of any other length; a short key is never padded and a long
/// key is never truncated.
pub fn decode_public_key(key: &str) -> std::result::Result<[u8; PUBLIC_KEY_LENGTH], CryptoError> {
    let bytes = STANDARD.decode(key)?;
    let length = bytes.len();
    bytes
        .try_into()
        .map_err(|_| CryptoError::InvalidKeyLength { length })
}

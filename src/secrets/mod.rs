use serde::{Deserialize, Serialize};

/// Public key returned by the secrets public-key endpoint
///
/// The `key` field is the base64 encoding of a 32-byte Curve25519 public key.
/// The response is consumed immediately to seal a value and never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    pub key_id: String,
    pub key: String,
}

/// Sealed secret payload submitted to the secrets endpoint
///
/// `encrypted_value` is the base64 encoding of the sealed-box ciphertext and
/// `key_id` echoes the identifier of the public key it was sealed against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedSecret {
    pub encrypted_value: String,
    pub key_id: String,
}

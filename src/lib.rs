//! GitHub Sealed Secrets
//!
//! A client for setting encrypted GitHub Actions and Dependabot secrets at
//! repository or organization scope. Secret values are sealed client-side
//! with anonymous sealed-box encryption against the store's public key, so
//! plaintext never travels to the API.

pub mod client;
pub mod crypto;
pub mod error;
pub mod secrets;

pub use client::{Scope, SecretCategory, SecretClient};
pub use crypto::{SealedBoxSealer, Sealer};
pub use secrets::{EncryptedSecret, PublicKeyResponse};

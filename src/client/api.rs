use crate::crypto::{self, SealedBoxSealer, Sealer};
use crate::error::ClientError;
use crate::secrets::{EncryptedSecret, PublicKeyResponse};
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{header::ACCEPT, Client, StatusCode};
use std::time::Duration;

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Whether a secret store belongs to a single repository or an organization
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    Repository,
    Organization,
}

impl Scope {
    /// Leading path segment of every secrets route for this scope
    fn base_segment(self) -> &'static str {
        match self {
            Scope::Organization => "orgs",
            Scope::Repository => "repos",
        }
    }
}

/// Which of the two independent secret stores a key or value belongs to
///
/// GitHub keeps Actions and Dependabot secrets in separate stores with
/// separate public keys; a value sealed against one store's key cannot be
/// decrypted by the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SecretCategory {
    #[default]
    Standard,
    DependencyBot,
}

impl SecretCategory {
    /// Route path segment selecting this category's secret store
    fn route_segment(self) -> &'static str {
        match self {
            SecretCategory::Standard => "actions",
            SecretCategory::DependencyBot => "dependabot",
        }
    }
}

/// GitHub secrets client over an optimized HTTP client
///
/// Holds the auth token, repository or organization identifier, and the
/// construction-time scope and category defaults. Each operation is an
/// independent request/response exchange; the client caches nothing and
/// never retries. Both `fetch_public_key` and `set_secret` take the category
/// per call, so a caller may address either store regardless of the
/// construction-time default - keeping the fetched key and the submitted
/// secret in the same category is the caller's responsibility.
pub struct SecretClient {
    client: Client,
    base_url: String,
    token: String,
    repository: String,
    scope: Scope,
    category: SecretCategory,
    sealer: Box<dyn Sealer>,
}

impl SecretClient {
    /// Create a client against the public GitHub API
    ///
    /// No validation is performed on `repository`; a malformed identifier is
    /// rejected by the remote API, not locally.
    pub fn new(token: &str, repository: &str, scope: Scope, category: SecretCategory) -> Self {
        Self::new_with_base_url(token, repository, scope, category, GITHUB_API_BASE)
    }

    /// Create a client against a custom API base URL (used by tests)
    pub fn new_with_base_url(
        token: &str,
        repository: &str,
        scope: Scope,
        category: SecretCategory,
        base_url: &str,
    ) -> Self {
        Self {
            client: Self::create_optimized_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            repository: repository.to_string(),
            scope,
            category,
            sealer: Box::new(SealedBoxSealer),
        }
    }

    /// Replace the sealed-box implementation (used by tests)
    pub fn with_sealer(mut self, sealer: Box<dyn Sealer>) -> Self {
        self.sealer = sealer;
        self
    }

    /// Create an optimized HTTP client with connection pooling
    fn create_optimized_client() -> Client {
        Client::builder()
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .tcp_keepalive(Duration::from_secs(60))
            .user_agent(concat!("github-sealed-secrets/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create HTTP client")
    }

    fn secrets_url(&self, category: SecretCategory, trailing: &str) -> String {
        format!(
            "{}/{}/{}/{}/secrets/{}",
            self.base_url,
            self.scope.base_segment(),
            self.repository,
            category.route_segment(),
            trailing
        )
    }

    /// Fetch the public key of one of the two secret stores
    ///
    /// The category is independent of the construction-time default; callers
    /// may query either store. The returned key must be threaded through to
    /// [`encrypt_secret`](Self::encrypt_secret) manually - it is not cached.
    ///
    /// # Errors
    /// * `ClientError::RequestFailed` - network-level failure
    /// * `ClientError::ApiError` - any non-success status (401, 404, 429, ...)
    pub async fn fetch_public_key(
        &self,
        category: SecretCategory,
    ) -> Result<PublicKeyResponse, ClientError> {
        let response = self
            .client
            .get(self.secrets_url(category, "public-key"))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ApiError {
                status: response.status(),
            });
        }

        Ok(response.json().await?)
    }

    /// Seal a secret value against a fetched public key
    ///
    /// Pure of `(key, value)` plus internal randomness; performs no network
    /// call. `key_id` is echoed back unmodified and unvalidated. `name` is
    /// accepted for interface symmetry with [`set_secret`](Self::set_secret)
    /// and plays no part in the encryption itself.
    ///
    /// # Errors
    /// * `CryptoError::InvalidBase64` - `key` is not valid base64
    /// * `CryptoError::InvalidKeyLength` - `key` does not decode to 32 bytes
    /// * `CryptoError::SealFailed` - the underlying primitive failed
    pub fn encrypt_secret(
        &self,
        key_id: &str,
        key: &str,
        _name: &str,
        value: &str,
    ) -> Result<EncryptedSecret, ClientError> {
        let public_key = crypto::decode_public_key(key).map_err(ClientError::Crypto)?;
        let ciphertext = self
            .sealer
            .seal(&public_key, value.as_bytes())
            .map_err(ClientError::Crypto)?;

        Ok(EncryptedSecret {
            encrypted_value: STANDARD.encode(ciphertext),
            key_id: key_id.to_string(),
        })
    }

    /// Store a sealed secret under `name` in the selected store
    ///
    /// `name` becomes a path segment and is sent as-is; no local
    /// sanitization. The caller must pass the same category the public key
    /// was fetched for, or the server ends up with an undecryptable secret.
    ///
    /// # Errors
    /// * `ClientError::RequestFailed` - network-level failure
    /// * `ClientError::ApiError` - any non-success status
    pub async fn set_secret(
        &self,
        secret: &EncryptedSecret,
        name: &str,
        category: SecretCategory,
    ) -> Result<StatusCode, ClientError> {
        let response = self
            .client
            .put(self.secrets_url(category, name))
            .bearer_auth(&self.token)
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(secret)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::ApiError {
                status: response.status(),
            });
        }

        Ok(response.status())
    }

    /// Whether this client targets an organization-level secret store
    pub fn is_organization(&self) -> bool {
        self.scope == Scope::Organization
    }

    /// Whether this client was constructed to target Dependabot secrets
    pub fn should_target_dependabot(&self) -> bool {
        self.category == SecretCategory::DependencyBot
    }

    /// Construction-time default category for this client
    pub fn category(&self) -> SecretCategory {
        self.category
    }
}

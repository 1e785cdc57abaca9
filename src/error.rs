use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    #[error("encryption error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the GitHub API client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("api returned error status: {status}")]
    ApiError { status: reqwest::StatusCode },

    #[error("encryption error: {0}")]
    Crypto(#[from] CryptoError),
}

impl ClientError {
    /// Get a user-friendly error message for common HTTP status codes
    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::ApiError { status } => match status.as_u16() {
                401 => "unauthorized - bad or expired credentials".to_string(),
                403 => "forbidden - token lacks permission for this secret store".to_string(),
                404 => "not found - repository or organization does not exist, or the token cannot see it".to_string(),
                422 => "validation failed - the api rejected the secret payload".to_string(),
                429 => "rate limited - too many requests, please try again later".to_string(),
                500 => "server error - github encountered an internal error".to_string(),
                502 | 503 => "service unavailable - github is temporarily unavailable".to_string(),
                _ => format!("api error - server returned status {status}"),
            },
            ClientError::RequestFailed(e) => {
                // Check for common connection errors
                let error_str = e.to_string().to_lowercase();
                if error_str.contains("connection refused") {
                    "connection refused - could not reach the api endpoint".to_string()
                } else if error_str.contains("timeout") {
                    "request timeout - the server did not respond in time".to_string()
                } else if error_str.contains("dns") || error_str.contains("name resolution") {
                    "DNS error - could not resolve api hostname".to_string()
                } else {
                    format!("network error - {e}")
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Sealed-box encryption input and operation errors
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("public key is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("public key must be exactly 32 bytes, got {length}")]
    InvalidKeyLength { length: usize },

    #[error("sealed box encryption failed")]
    SealFailed,
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, AppError>;

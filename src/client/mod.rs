pub mod api;

pub use api::{Scope, SecretCategory, SecretClient};

use crate::error::AppError;
use tracing::info;

/// Configuration for the `set` command
pub struct SetConfig {
    pub token: String,
    pub repository: String,
    pub scope: Scope,
    pub category: SecretCategory,
    pub name: String,
    /// Secret value; read from stdin when not provided
    pub value: Option<String>,
}

/// Fetch the store's public key, seal the value, and submit the secret
///
/// The value is never logged; only the secret name and the resulting HTTP
/// status appear in output.
pub async fn handle_set_command(config: SetConfig) -> Result<(), AppError> {
    let value = match config.value {
        Some(value) => value,
        None => read_value_from_stdin()?,
    };

    let client = SecretClient::new(
        &config.token,
        &config.repository,
        config.scope,
        config.category,
    );

    let result = async {
        let public_key = client.fetch_public_key(config.category).await?;
        let sealed = client.encrypt_secret(&public_key.key_id, &public_key.key, &config.name, &value)?;
        client.set_secret(&sealed, &config.name, config.category).await
    }
    .await;

    match result {
        Ok(status) => {
            info!(secret = %config.name, %status, "secret stored");
            println!("secret '{}' set ({})", config.name, status);
            Ok(())
        }
        Err(client_error) => {
            eprintln!("Error: {}", client_error.user_friendly_message());
            std::process::exit(1);
        }
    }
}

/// Configuration for the `public-key` command
pub struct PublicKeyConfig {
    pub token: String,
    pub repository: String,
    pub scope: Scope,
    pub category: SecretCategory,
}

/// Fetch and print a secret store's public key as JSON
pub async fn handle_public_key_command(config: PublicKeyConfig) -> Result<(), AppError> {
    let client = SecretClient::new(
        &config.token,
        &config.repository,
        config.scope,
        config.category,
    );

    match client.fetch_public_key(config.category).await {
        Ok(public_key) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&public_key)
                    .unwrap_or_else(|_| "{}".to_string())
            );
            Ok(())
        }
        Err(client_error) => {
            eprintln!("Error: {}", client_error.user_friendly_message());
            std::process::exit(1);
        }
    }
}

/// Read a secret value from stdin, dropping one trailing newline
fn read_value_from_stdin() -> Result<String, AppError> {
    use std::io::Read;

    let mut value = String::new();
    std::io::stdin().read_to_string(&mut value)?;
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    Ok(value)
}

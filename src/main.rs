use clap::Parser;
use github_sealed_secrets::{
    client::{
        handle_public_key_command, handle_set_command, PublicKeyConfig, Scope, SecretCategory,
        SetConfig,
    },
    error::AppError,
};

#[derive(Parser)]
#[command(name = "github-sealed-secrets")]
#[command(about = "Set encrypted GitHub Actions and Dependabot secrets")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub enum Cli {
    /// Encrypt a value and store it as a secret
    Set {
        /// GitHub API token
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,
        /// Repository in the format "owner/repo", or organization name with --org
        #[arg(short, long, env = "GITHUB_REPOSITORY")]
        repository: String,
        /// Target an organization-level secret store
        #[arg(long)]
        org: bool,
        /// Target the Dependabot secret store instead of Actions
        #[arg(long)]
        dependabot: bool,
        /// Secret name
        name: String,
        /// Secret value; read from stdin when omitted
        value: Option<String>,
    },
    /// Fetch the public key of a secret store
    PublicKey {
        /// GitHub API token
        #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,
        /// Repository in the format "owner/repo", or organization name with --org
        #[arg(short, long, env = "GITHUB_REPOSITORY")]
        repository: String,
        /// Target an organization-level secret store
        #[arg(long)]
        org: bool,
        /// Target the Dependabot secret store instead of Actions
        #[arg(long)]
        dependabot: bool,
    },
}

fn scope_from_flag(org: bool) -> Scope {
    if org {
        Scope::Organization
    } else {
        Scope::Repository
    }
}

fn category_from_flag(dependabot: bool) -> SecretCategory {
    if dependabot {
        SecretCategory::DependencyBot
    } else {
        SecretCategory::Standard
    }
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("github_sealed_secrets=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    match cli {
        Cli::Set {
            token,
            repository,
            org,
            dependabot,
            name,
            value,
        } => {
            handle_set_command(SetConfig {
                token,
                repository,
                scope: scope_from_flag(org),
                category: category_from_flag(dependabot),
                name,
                value,
            })
            .await
        }
        Cli::PublicKey {
            token,
            repository,
            org,
            dependabot,
        } => {
            handle_public_key_command(PublicKeyConfig {
                token,
                repository,
                scope: scope_from_flag(org),
                category: category_from_flag(dependabot),
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_mapping_matches_defaults() {
        assert_eq!(scope_from_flag(false), Scope::Repository);
        assert_eq!(scope_from_flag(true), Scope::Organization);
        assert_eq!(category_from_flag(false), SecretCategory::Standard);
        assert_eq!(category_from_flag(true), SecretCategory::DependencyBot);
    }

    #[test]
    fn test_cli_parses_set_command() {
        let cli = Cli::try_parse_from([
            "github-sealed-secrets",
            "set",
            "--token",
            "t",
            "--repository",
            "octocat/hello-world",
            "DEPLOY_TOKEN",
            "value",
        ])
        .unwrap();

        match cli {
            Cli::Set {
                repository,
                org,
                dependabot,
                name,
                value,
                ..
            } => {
                assert_eq!(repository, "octocat/hello-world");
                assert!(!org);
                assert!(!dependabot);
                assert_eq!(name, "DEPLOY_TOKEN");
                assert_eq!(value.as_deref(), Some("value"));
            }
            _ => panic!("expected set command"),
        }
    }

    #[test]
    fn test_cli_parses_public_key_with_store_flags() {
        let cli = Cli::try_parse_from([
            "github-sealed-secrets",
            "public-key",
            "--token",
            "t",
            "--repository",
            "acme",
            "--org",
            "--dependabot",
        ])
        .unwrap();

        match cli {
            Cli::PublicKey {
                org, dependabot, ..
            } => {
                assert!(org);
                assert!(dependabot);
            }
            _ => panic!("expected public-key command"),
        }
    }
}

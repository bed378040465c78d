//! GitHub ledger configuration, loaded from the environment.

/// Default path of the ledger file inside the repository.
pub const DEFAULT_LEDGER_FILE: &str = "orders.csv";

/// Errors raised when the GitHub environment is incomplete.
///
/// Not recoverable without operator intervention; callers surface it
/// to HTTP clients as a generic persistence failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    #[error("GITHUB_REPO is not set")]
    MissingRepo,
}

/// Connection settings for the ledger repository.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// Bearer token for the contents API.
    pub token: String,
    /// Target repository in `owner/name` form.
    pub repo: String,
    /// Path of the ledger file inside the repository.
    pub path: String,
}

impl GithubConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var        | Default      |
    /// |----------------|--------------|
    /// | `GITHUB_TOKEN` | (required)   |
    /// | `GITHUB_REPO`  | (required)   |
    /// | `GITHUB_FILE`  | `orders.csv` |
    ///
    /// Fails before any network call is attempted if the token or
    /// repository is absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = non_empty_var("GITHUB_TOKEN").ok_or(ConfigError::MissingToken)?;
        let repo = non_empty_var("GITHUB_REPO").ok_or(ConfigError::MissingRepo)?;
        let path =
            non_empty_var("GITHUB_FILE").unwrap_or_else(|| DEFAULT_LEDGER_FILE.to_string());

        Ok(Self { token, repo, path })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

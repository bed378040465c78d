//! The ledger trait and its GitHub-backed implementation.

use async_trait::async_trait;

use nrl_core::csv::CSV_HEADER;

use crate::api::{ContentsApi, LedgerError};
use crate::config::GithubConfig;

/// Destination for order rows.
///
/// The HTTP handler depends on this trait rather than on the GitHub
/// client directly, so tests can substitute a recording double.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// Append one CSV row (already sanitized, `\n`-terminated) to the
    /// ledger file. Each call is independent and stateless.
    async fn append_line(&self, line: &str) -> Result<(), LedgerError>;
}

/// Ledger stored as a CSV file in a GitHub repository.
pub struct GithubLedger {
    api: ContentsApi,
}

impl GithubLedger {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            api: ContentsApi::new(config),
        }
    }
}

#[async_trait]
impl Ledger for GithubLedger {
    /// Two-phase read-modify-write. Phase one fetches the current
    /// file (or decides to create it); phase two writes the merged
    /// content back, conditioned on the revision token from phase
    /// one. The phases are not atomic; see the crate docs for the
    /// conflict behavior.
    async fn append_line(&self, line: &str) -> Result<(), LedgerError> {
        let remote = self.api.fetch_file().await?;

        let (content, sha) = match remote {
            Some(file) => {
                let merged = merge_content(&file.content, line);
                (merged, Some(file.sha))
            }
            None => {
                tracing::info!("ledger file absent, creating with header row");
                (format!("{CSV_HEADER}\n{line}"), None)
            }
        };

        self.api.put_file(&content, sha.as_deref()).await
    }
}

/// Append `line` to the existing file content, normalizing a missing
/// trailing newline first so prior rows are preserved unchanged.
pub fn merge_content(existing: &str, line: &str) -> String {
    let mut merged = existing.to_string();
    if !merged.ends_with('\n') {
        merged.push('\n');
    }
    merged.push_str(line);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_appends_after_trailing_newline() {
        let merged = merge_content("header\nrow1\n", "row2\n");
        assert_eq!(merged, "header\nrow1\nrow2\n");
    }

    #[test]
    fn merge_normalizes_missing_trailing_newline() {
        let merged = merge_content("header\nrow1", "row2\n");
        assert_eq!(merged, "header\nrow1\nrow2\n");
    }

    #[test]
    fn merge_preserves_prior_rows() {
        let existing = "header\nrow1\nrow2\n";
        let merged = merge_content(existing, "row3\n");
        assert!(merged.starts_with(existing));
        assert_eq!(merged.lines().count(), 4);
    }

    #[test]
    fn first_write_content_is_header_plus_row() {
        // Shape of the content synthesized when the file is absent.
        let content = format!("{CSV_HEADER}\n{}", "t;;;;;;me@x;\n");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.next(), Some("t;;;;;;me@x;"));
        assert_eq!(lines.next(), None);
    }
}

//! REST client for the GitHub contents API.
//!
//! Wraps the two endpoints the ledger needs — fetch a file
//! (`GET /repos/{repo}/contents/{path}`) and write a file
//! (`PUT` to the same URL) — using [`reqwest`].

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Deserialize;

use crate::config::GithubConfig;

/// Errors from the contents API layer.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// GitHub returned an unexpected status code. Covers the stale
    /// revision token conflict on write (422/409), which is not
    /// retried.
    #[error("GitHub API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The fetched file content was not valid base64.
    #[error("invalid base64 in file content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The fetched file content was not valid UTF-8.
    #[error("file content is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Current state of the remote file, as returned by a fetch.
#[derive(Debug)]
pub struct RemoteFile {
    /// Decoded file content.
    pub content: String,
    /// Opaque revision token, required to overwrite this version.
    pub sha: String,
}

/// Wire format of a successful contents GET response (fields we use).
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

/// HTTP client for the ledger file in one repository.
pub struct ContentsApi {
    client: reqwest::Client,
    config: GithubConfig,
}

impl ContentsApi {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Fetch the current file content and revision token.
    ///
    /// Returns `Ok(None)` when the file does not exist yet (404), so
    /// the caller can create it with a header row.
    pub async fn fetch_file(&self) -> Result<Option<RemoteFile>, LedgerError> {
        let response = self
            .request(reqwest::Method::GET)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = Self::ensure_success(response).await?;
        let parsed: ContentsResponse = response.json().await?;
        Ok(Some(RemoteFile {
            content: decode_content(&parsed.content)?,
            sha: parsed.sha,
        }))
    }

    /// Write the full file content back, creating the file if `sha`
    /// is `None`. GitHub rejects the write if `sha` no longer matches
    /// the current revision.
    pub async fn put_file(&self, content: &str, sha: Option<&str>) -> Result<(), LedgerError> {
        let payload = write_payload(content, sha);

        let response = self
            .request(reqwest::Method::PUT)
            .json(&payload)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn url(&self) -> String {
        format!(
            "https://api.github.com/repos/{}/contents/{}",
            self.config.repo, self.config.path
        )
    }

    /// Start a request against the contents URL with the headers
    /// GitHub requires (bearer auth, API media type, User-Agent).
    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.url())
            .bearer_auth(&self.config.token)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .header(reqwest::header::USER_AGENT, "nrl-landing")
    }

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`LedgerError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, LedgerError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(LedgerError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

/// Decode the base64 content field of a contents GET response.
///
/// GitHub wraps the base64 text with embedded newlines, which a strict
/// decoder rejects, so whitespace is stripped first.
pub fn decode_content(b64: &str) -> Result<String, LedgerError> {
    let compact: String = b64.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = BASE64.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// Build the JSON body for a contents PUT request.
///
/// The `sha` is attached only when overwriting an existing file; a
/// create request must omit it.
pub fn write_payload(content: &str, sha: Option<&str>) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "message": "add order from landing",
        "content": BASE64.encode(content.as_bytes()),
    });
    if let Some(sha) = sha {
        payload["sha"] = serde_json::Value::String(sha.to_string());
    }
    payload
}

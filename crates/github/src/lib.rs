//! Remote order ledger backed by the GitHub contents API.
//!
//! The ledger is a semicolon-delimited CSV file in a (private) GitHub
//! repository. Appending a row is a two-phase read-modify-write:
//! fetch the current file content and its `sha` revision token, splice
//! the new row onto the end, and write the whole file back with the
//! token as an optimistic-concurrency precondition.
//!
//! The two phases are NOT atomic. Two concurrent appends can read the
//! same `sha`; GitHub accepts one write and rejects the other with a
//! conflict, which surfaces here as [`LedgerError::Api`]. There is no
//! retry loop — the losing request fails.

pub mod api;
pub mod config;
pub mod ledger;

pub use api::LedgerError;
pub use config::{ConfigError, GithubConfig};
pub use ledger::{GithubLedger, Ledger};

//! Semicolon-delimited CSV encoding for the order ledger.
//!
//! The ledger file is a header row followed by one data row per order,
//! fields delimited by `;`. The encoder's contract is that a field
//! value never contains the delimiter or a line break, so every row
//! has exactly [`FIELD_COUNT`] fields and occupies exactly one line.

/// Fixed header row of the ledger file (no trailing newline).
pub const CSV_HEADER: &str =
    "timestamp;budget_min;budget_max;floor;rooms;analysis_type;contact;comment";

/// Number of fields in every ledger row.
pub const FIELD_COUNT: usize = 8;

/// Make a field value safe to embed in a ledger row.
///
/// Replaces every `;` with `,` and every `\n`/`\r` with a single
/// space. Idempotent: sanitizing twice yields the same string.
pub fn sanitize_field(value: &str) -> String {
    value
        .replace(';', ",")
        .replace('\n', " ")
        .replace('\r', " ")
}

/// Join sanitized fields into a single ledger row terminated by `\n`.
///
/// The caller supplies exactly [`FIELD_COUNT`] fields; each is
/// sanitized here, so raw user input may be passed directly.
pub fn encode_row(fields: &[&str; FIELD_COUNT]) -> String {
    let mut row = fields
        .iter()
        .map(|f| sanitize_field(f))
        .collect::<Vec<_>>()
        .join(";");
    row.push('\n');
    row
}

//! The order value object and its construction from a form payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::csv::{self, FIELD_COUNT};
use crate::error::ValidationError;

/// Raw form payload as submitted by the landing page.
///
/// Every field is optional; missing or extra JSON keys are tolerated
/// and absent fields default to the empty string.
#[derive(Debug, Default, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub budget_min: String,
    #[serde(default)]
    pub budget_max: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub rooms: String,
    #[serde(default)]
    pub analysis_type: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub comment: String,
}

/// One validated order, destined for exactly one ledger row.
///
/// Never mutated after construction; discarded once serialized.
#[derive(Debug)]
pub struct Order {
    /// Server-side receipt time, ISO-8601 UTC. Never client-supplied,
    /// so ledger rows are immune to client clock skew.
    pub timestamp: String,
    pub budget_min: String,
    pub budget_max: String,
    pub floor: String,
    pub rooms: String,
    pub analysis_type: String,
    pub contact: String,
    pub comment: String,
}

impl Order {
    /// Validate a form payload into an order.
    ///
    /// Trims every field and rejects a blank `contact`. The receipt
    /// time is passed in so callers (and tests) control the clock.
    pub fn from_form(form: OrderForm, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let contact = form.contact.trim().to_string();
        if contact.is_empty() {
            return Err(ValidationError::ContactRequired);
        }

        Ok(Self {
            timestamp: now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
            budget_min: form.budget_min.trim().to_string(),
            budget_max: form.budget_max.trim().to_string(),
            floor: form.floor.trim().to_string(),
            rooms: form.rooms.trim().to_string(),
            analysis_type: form.analysis_type.trim().to_string(),
            contact,
            comment: form.comment.trim().to_string(),
        })
    }

    /// Encode this order as one sanitized ledger row (trailing `\n`).
    pub fn to_csv_row(&self) -> String {
        let fields: [&str; FIELD_COUNT] = [
            &self.timestamp,
            &self.budget_min,
            &self.budget_max,
            &self.floor,
            &self.rooms,
            &self.analysis_type,
            &self.contact,
            &self.comment,
        ];
        csv::encode_row(&fields)
    }
}

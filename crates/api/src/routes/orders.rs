use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use nrl_core::{Order, OrderForm};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/order -- validate the form payload, encode it as one CSV
/// row, and append the row to the remote ledger.
///
/// The body is read raw and parsed here rather than through the
/// `Json` extractor, so a malformed body maps to the same
/// `{"ok": false, "error": "invalid JSON"}` response whatever its
/// content type.
async fn submit_order(State(state): State<AppState>, body: Bytes) -> AppResult<Json<Value>> {
    let form: OrderForm = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;
    let order = Order::from_form(form, Utc::now())?;

    let ledger = state.ledger.as_ref().ok_or(AppError::LedgerNotConfigured)?;
    ledger.append_line(&order.to_csv_row()).await?;

    tracing::info!("order appended to ledger");
    Ok(Json(json!({ "ok": true })))
}

/// Mount the order submission route.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/order", post(submit_order))
}

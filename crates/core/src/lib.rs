//! Domain types and pure logic for the landing-page order backend.
//!
//! No I/O lives here: everything in this crate is synchronous and
//! unit-testable without a server or network.

pub mod csv;
pub mod error;
pub mod order;

pub use error::ValidationError;
pub use order::{Order, OrderForm};

//! Route registration.
//!
//! Route tree:
//!
//! ```text
//! /                  landing page
//! /analyzer.html     analyzer page
//! /sample.csv        sample data download
//! /trend             rent trend chart
//! /astana/dec        alias for the trend chart
//! /health            service health JSON
//! /api/order         order submission (POST)
//! ```
//!
//! Anything else falls through to axum's default 404.

pub mod health;
pub mod orders;
pub mod pages;

//! Fixed static routes for the landing-page assets.
//!
//! Each route maps to one named file under the configured static
//! directory and returns its bytes verbatim with the content type
//! inferred from the file extension. A missing file produces a 404.

use std::path::Path;

use axum::Router;
use tower_http::services::ServeFile;

use crate::config::ServerConfig;
use crate::state::AppState;

/// File behind both `/trend` and its short alias `/astana/dec`.
const TREND_PAGE: &str = "astana_dec_plotly_cdn_v3.html";

/// Mount the fixed page routes.
pub fn router(config: &ServerConfig) -> Router<AppState> {
    let dir = Path::new(&config.static_dir);
    let page = |name: &str| ServeFile::new(dir.join(name));

    Router::new()
        .route_service("/", page("index.html"))
        .route_service("/analyzer.html", page("analyzer.html"))
        .route_service("/sample.csv", page("sample.csv"))
        .route_service("/trend", page(TREND_PAGE))
        .route_service("/astana/dec", page(TREND_PAGE))
}

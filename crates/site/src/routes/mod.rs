//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /calendar               - Events grouped by month
//! GET  /fundraisers            - Fundraiser list
//! GET  /sports                 - Sports schedule
//! GET  /store?q=...            - Store (q replaces the search query)
//! GET  /contact                - Contact details
//! GET  /health                 - Health check
//! GET  /static/site.css        - Stylesheet
//!
//! # Cart
//! POST /cart/add               - Add one unit (form: product_id)
//! POST /cart/remove            - Remove one unit (form: product_id)
//! POST /cart/open              - Open the cart overlay
//! POST /cart/close             - Close the cart overlay
//! ```
//!
//! Cart actions redirect to the current page with `?stay`; without it a page
//! request selects the page and closes the cart overlay.

pub mod cart;
pub mod layout;
pub mod pages;
pub mod store;

use axum::{
    Router,
    http::{Uri, header},
    response::IntoResponse,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/open", post(cart::open))
        .route("/close", post(cart::close))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/calendar", get(pages::calendar))
        .route("/fundraisers", get(pages::fundraisers))
        .route("/sports", get(pages::sports))
        .route("/store", get(store::index))
        .route("/contact", get(pages::contact))
        .route("/static/site.css", get(stylesheet))
        .nest("/cart", cart_routes())
        .fallback(not_found)
}

/// Site stylesheet, compiled into the binary.
async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        include_str!("../../static/site.css"),
    )
}

/// Unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

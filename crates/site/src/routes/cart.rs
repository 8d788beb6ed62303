//! Cart route handlers.
//!
//! Cart actions are plain form posts answered with a redirect back to the
//! page the visitor is on. The redirect carries the `stay` marker so that
//! page re-renders with the cart overlay as the action left it.

use axum::{Form, extract::State, response::Redirect};
use rockets_hub_core::{ProductId, SiteSession};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, add_breadcrumb};
use crate::models::{load_site_session, store_site_session};
use crate::routes::pages::STAY_MARKER;
use crate::state::AppState;

/// Cart action form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: String,
}

/// Redirect back to the visitor's current page without reselecting it.
fn back_to_page(site: &SiteSession) -> Redirect {
    Redirect::to(&format!("{}?{STAY_MARKER}", site.page().path()))
}

/// Add one unit of a product to the cart.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartItemForm>,
) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let mut site = load_site_session(&session).await?;

    if site.add_to_cart(state.catalog(), &product_id) {
        add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product_id.as_str())]));
        store_site_session(&session, &site).await?;
    } else {
        tracing::debug!(product_id = %product_id, "Ignoring add of unknown product");
    }

    Ok(back_to_page(&site))
}

/// Remove one unit of a product from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<CartItemForm>) -> Result<Redirect> {
    let product_id = ProductId::new(form.product_id);
    let mut site = load_site_session(&session).await?;

    if site.remove_from_cart(&product_id) {
        add_breadcrumb(
            "cart",
            "Removed from cart",
            Some(&[("product_id", product_id.as_str())]),
        );
        store_site_session(&session, &site).await?;
    } else {
        tracing::debug!(product_id = %product_id, "Ignoring remove of product not in cart");
    }

    Ok(back_to_page(&site))
}

/// Open the cart overlay on the current page.
#[instrument(skip(session))]
pub async fn open(session: Session) -> Result<Redirect> {
    let mut site = load_site_session(&session).await?;
    site.open_cart_overlay();
    store_site_session(&session, &site).await?;
    Ok(back_to_page(&site))
}

/// Close the cart overlay.
#[instrument(skip(session))]
pub async fn close(session: Session) -> Result<Redirect> {
    let mut site = load_site_session(&session).await?;
    site.close_cart_overlay();
    store_site_session(&session, &site).await?;
    Ok(back_to_page(&site))
}

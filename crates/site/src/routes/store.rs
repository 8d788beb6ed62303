//! Store route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use rockets_hub_core::{Page, Product, SiteSession};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::{load_site_session, store_site_session};
use crate::routes::layout::LayoutView;
use crate::routes::pages::select_page;
use crate::state::AppState;

/// Store query parameters.
#[derive(Debug, Deserialize)]
pub struct StoreQuery {
    /// Search text; when present it replaces the session's query.
    pub q: Option<String>,
    /// Present on redirects back from a cart action.
    pub stay: Option<String>,
}

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub tag: String,
    pub description: String,
    pub in_cart: u32,
}

impl ProductView {
    fn new(product: &Product, site: &SiteSession) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.display(),
            tag: product.tag.clone(),
            description: product.description.clone(),
            in_cart: site.cart().quantity_of(&product.id),
        }
    }
}

/// Store page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/store.html")]
pub struct StoreTemplate {
    pub layout: LayoutView,
    pub query: String,
    pub products: Vec<ProductView>,
}

/// Display the store, filtered by the visitor's search query.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<StoreQuery>,
) -> Result<StoreTemplate> {
    let mut site = load_site_session(&session).await?;
    select_page(&mut site, Page::Store, params.stay.is_some());
    if let Some(q) = params.q {
        site.set_search_query(q);
    }
    store_site_session(&session, &site).await?;

    let content = state.content();
    let products: Vec<ProductView> = site
        .visible_products(&content.catalog)
        .into_iter()
        .map(|p| ProductView::new(p, &site))
        .collect();
    tracing::debug!(
        query = site.search_query(),
        results = products.len(),
        "Store listing"
    );

    Ok(StoreTemplate {
        layout: LayoutView::new(content, &site),
        query: site.search_query().to_string(),
        products,
    })
}

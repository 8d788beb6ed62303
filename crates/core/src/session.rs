//! Per-visitor session state.
//!
//! [`SiteSession`] is the only mutable state in the site. It owns the cart,
//! the selected page, the cart overlay flag, and the store search query, and
//! every change goes through one of its methods.

use serde::{Deserialize, Serialize};

use crate::cart::{CartLine, CartState};
use crate::catalog::{Catalog, Product};
use crate::router::{CartOverlay, Page, ViewRouter};
use crate::search::filter_products;
use crate::types::{Price, ProductId};

/// State for one visitor, created empty and discarded when the visit ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSession {
    cart: CartState,
    router: ViewRouter,
    overlay: CartOverlay,
    search_query: String,
}

impl SiteSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product to the cart. Unknown products are ignored.
    pub fn add_to_cart(&mut self, catalog: &Catalog, product_id: &ProductId) -> bool {
        self.cart.add(catalog, product_id)
    }

    /// Remove one unit of a product from the cart.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Select a page. Navigating always closes the cart overlay.
    pub const fn set_page(&mut self, page: Page) {
        self.router.select(page);
        self.overlay.close();
    }

    /// Replace the store search query. The raw text is kept as typed.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub const fn open_cart_overlay(&mut self) {
        self.overlay.open();
    }

    pub const fn close_cart_overlay(&mut self) {
        self.overlay.close();
    }

    #[must_use]
    pub const fn cart(&self) -> &CartState {
        &self.cart
    }

    #[must_use]
    pub const fn page(&self) -> Page {
        self.router.current()
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.overlay.is_open()
    }

    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.total_count()
    }

    #[must_use]
    pub fn cart_lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.cart.lines(catalog)
    }

    #[must_use]
    pub fn cart_subtotal(&self, catalog: &Catalog) -> Price {
        self.cart.subtotal(catalog)
    }

    /// Store listing filtered by the current search query.
    #[must_use]
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        filter_products(catalog, &self.search_query)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_new_session_defaults() {
        let catalog = Catalog::sample().unwrap();
        let session = SiteSession::new();
        assert_eq!(session.page(), Page::Home);
        assert!(!session.is_cart_open());
        assert_eq!(session.cart_count(), 0);
        assert_eq!(session.search_query(), "");
        assert_eq!(session.visible_products(&catalog).len(), 4);
    }

    #[test]
    fn test_set_page_closes_overlay() {
        let mut session = SiteSession::new();
        session.open_cart_overlay();
        assert!(session.is_cart_open());

        session.set_page(Page::Sports);
        assert_eq!(session.page(), Page::Sports);
        assert!(!session.is_cart_open());
    }

    #[test]
    fn test_reselecting_same_page_still_closes_overlay() {
        let mut session = SiteSession::new();
        session.set_page(Page::Store);
        session.open_cart_overlay();
        session.set_page(Page::Store);
        assert!(!session.is_cart_open());
    }

    #[test]
    fn test_overlay_independent_of_cart_changes() {
        let catalog = Catalog::sample().unwrap();
        let mut session = SiteSession::new();
        session.open_cart_overlay();
        session.add_to_cart(&catalog, &id("p1"));
        session.remove_from_cart(&id("p1"));
        assert!(session.is_cart_open());
        session.close_cart_overlay();
        assert!(!session.is_cart_open());
    }

    #[test]
    fn test_cart_operations_through_session() {
        let catalog = Catalog::sample().unwrap();
        let mut session = SiteSession::new();
        session.add_to_cart(&catalog, &id("p1"));
        session.add_to_cart(&catalog, &id("p1"));
        session.add_to_cart(&catalog, &id("p3"));
        assert!(!session.add_to_cart(&catalog, &id("missing")));

        assert_eq!(session.cart_count(), 3);
        assert_eq!(session.cart_lines(&catalog).len(), 2);
        assert_eq!(session.cart_subtotal(&catalog).amount, Decimal::new(122, 0));
        assert_eq!(session.cart().quantity_of(&id("p1")), 2);
    }

    #[test]
    fn test_search_query_filters_visible_products() {
        let catalog = Catalog::sample().unwrap();
        let mut session = SiteSession::new();
        session.set_search_query("Hoodie");
        let visible = session.visible_products(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, id("p1"));

        session.set_search_query("  ");
        assert_eq!(session.search_query(), "  ");
        assert_eq!(session.visible_products(&catalog).len(), 4);
    }

    #[test]
    fn test_session_survives_serialization() {
        let catalog = Catalog::sample().unwrap();
        let mut session = SiteSession::new();
        session.add_to_cart(&catalog, &id("p2"));
        session.set_page(Page::Calendar);
        session.set_search_query("pin");
        session.open_cart_overlay();

        let json = serde_json::to_value(&session).unwrap();
        let restored: SiteSession = serde_json::from_value(json).unwrap();
        assert_eq!(restored, session);
    }
}

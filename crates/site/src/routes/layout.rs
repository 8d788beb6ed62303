//! Display data shared by every page: navigation, branding, and the cart
//! overlay.

use rockets_hub_core::{Catalog, CartLine, Page, SiteContent, SiteSession};

/// One entry in the navigation bar.
#[derive(Clone)]
pub struct NavLink {
    pub key: &'static str,
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine<'_>> for CartItemView {
    fn from(line: &CartLine<'_>) -> Self {
        Self {
            id: line.product.id.to_string(),
            name: line.product.name.clone(),
            tag: line.product.tag.clone(),
            quantity: line.quantity,
            price: line.product.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Cart overlay display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u32,
    pub open: bool,
}

impl CartView {
    /// Build the cart view from the visitor session.
    #[must_use]
    pub fn new(site: &SiteSession, catalog: &Catalog) -> Self {
        Self {
            items: site
                .cart_lines(catalog)
                .iter()
                .map(CartItemView::from)
                .collect(),
            subtotal: site.cart_subtotal(catalog).display(),
            item_count: site.cart_count(),
            open: site.is_cart_open(),
        }
    }
}

/// Everything `base.html` renders around a page.
#[derive(Clone)]
pub struct LayoutView {
    pub school_name: String,
    pub short_name: String,
    pub title: &'static str,
    pub current_path: &'static str,
    pub nav: Vec<NavLink>,
    pub cart: CartView,
}

impl LayoutView {
    #[must_use]
    pub fn new(content: &SiteContent, site: &SiteSession) -> Self {
        let current = site.page();
        Self {
            school_name: content.profile.school_name.clone(),
            short_name: content.profile.short_name.clone(),
            title: current.label(),
            current_path: current.path(),
            nav: Page::ALL
                .into_iter()
                .map(|page| NavLink {
                    key: page.key(),
                    label: page.label(),
                    path: page.path(),
                    active: page == current,
                })
                .collect(),
            cart: CartView::new(site, &content.catalog),
        }
    }
}

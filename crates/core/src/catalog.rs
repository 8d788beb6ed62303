//! The store catalog: the fixed list of purchasable products.
//!
//! The catalog is loaded once at startup and never changes afterwards. Order
//! is significant: store listings and search results follow catalog order.

use serde::{Deserialize, Serialize};

use crate::content::ContentError;
use crate::types::{Price, ProductId};

const SAMPLE_PRODUCTS: &str = include_str!("../content/products.json");

/// A product offered in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub tag: String,
    pub description: String,
}

/// Immutable, ordered collection of products with unique IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, checking its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::DuplicateId`] if two products share an ID and
    /// [`ContentError::NegativePrice`] if any price is below zero.
    pub fn new(products: Vec<Product>) -> Result<Self, ContentError> {
        for (i, product) in products.iter().enumerate() {
            if product.price.amount.is_sign_negative() && !product.price.amount.is_zero() {
                return Err(ContentError::NegativePrice(product.id.to_string()));
            }
            if products
                .iter()
                .take(i)
                .any(|earlier| earlier.id == product.id)
            {
                return Err(ContentError::DuplicateId(product.id.to_string()));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the products violate the
    /// catalog invariants.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| ContentError::Parse("products", e))?;
        Self::new(products)
    }

    /// The sample catalog bundled with the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is invalid.
    pub fn sample() -> Result<Self, ContentError> {
        Self::from_json(SAMPLE_PRODUCTS)
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Whether the catalog has a product with this ID.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

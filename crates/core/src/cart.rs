//! Shopping cart state.
//!
//! The cart maps product IDs to held quantities, in the order products were
//! first added. An entry never holds a zero quantity: decrementing the last
//! unit deletes the entry.
//!
//! The cart stores only IDs. Product details are joined in from the
//! [`Catalog`] when lines or totals are derived, so a cart that somehow holds
//! an ID missing from the catalog simply skips it.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Product};
use crate::types::{Price, ProductId};

/// One held product and its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CartEntry {
    product_id: ProductId,
    quantity: u32,
}

/// The cart held by a single visitor session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    entries: Vec<CartEntry>,
}

/// A product joined with its held quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

impl CartLine<'_> {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price * self.quantity
    }
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of a product.
    ///
    /// Products missing from the catalog are ignored. Returns `true` if the
    /// cart changed.
    pub fn add(&mut self, catalog: &Catalog, product_id: &ProductId) -> bool {
        if !catalog.contains(product_id) {
            return false;
        }

        match self.entries.iter_mut().find(|e| &e.product_id == product_id) {
            Some(entry) => entry.quantity = entry.quantity.saturating_add(1),
            None => self.entries.push(CartEntry {
                product_id: product_id.clone(),
                quantity: 1,
            }),
        }
        true
    }

    /// Remove one unit of a product, deleting the entry at zero.
    ///
    /// Returns `true` if the cart changed; removing a product that is not in
    /// the cart is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let Some(pos) = self.entries.iter().position(|e| &e.product_id == product_id) else {
            return false;
        };

        let remaining = self
            .entries
            .get(pos)
            .map_or(0, |e| e.quantity.saturating_sub(1));
        if remaining == 0 {
            self.entries.remove(pos);
        } else if let Some(entry) = self.entries.get_mut(pos) {
            entry.quantity = remaining;
        }
        true
    }

    /// Quantity held for a product (0 if absent).
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.product_id == product_id)
            .map_or(0, |e| e.quantity)
    }

    /// Sum of all held quantities.
    #[must_use]
    pub fn total_count(&self) -> u32 {
        self.entries
            .iter()
            .fold(0, |acc, e| acc.saturating_add(e.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<CartLine<'a>> {
        self.entries
            .iter()
            .filter(|e| e.quantity > 0)
            .filter_map(|e| {
                catalog.get(&e.product_id).map(|product| CartLine {
                    product,
                    quantity: e.quantity,
                })
            })
            .collect()
    }

    /// Exact sum of `price * quantity` over all lines.
    #[must_use]
    pub fn subtotal(&self, catalog: &Catalog) -> Price {
        self.lines(catalog).iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::tests::product;

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    fn sample() -> Catalog {
        Catalog::sample().unwrap()
    }

    #[test]
    fn test_empty_cart() {
        let catalog = sample();
        let cart = CartState::new();
        assert_eq!(cart.total_count(), 0);
        assert!(cart.lines(&catalog).is_empty());
        assert!(cart.subtotal(&catalog).amount.is_zero());
    }

    #[test]
    fn test_scenario_two_hoodies_and_pins() {
        let catalog = sample();
        let mut cart = CartState::new();
        cart.add(&catalog, &id("p1"));
        cart.add(&catalog, &id("p1"));
        cart.add(&catalog, &id("p3"));

        assert_eq!(cart.total_count(), 3);

        let lines = cart.lines(&catalog);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].product.id, id("p1"));
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].product.id, id("p3"));
        assert_eq!(lines[1].quantity, 1);

        let subtotal = cart.subtotal(&catalog);
        assert_eq!(subtotal.amount, Decimal::new(122, 0));
        assert_eq!(subtotal.display(), "$122.00");
    }

    #[test]
    fn test_remove_decrements_then_deletes() {
        let catalog = sample();
        let mut cart = CartState::new();
        cart.add(&catalog, &id("p2"));
        cart.add(&catalog, &id("p2"));

        assert!(cart.remove(&id("p2")));
        assert_eq!(cart.quantity_of(&id("p2")), 1);

        assert!(cart.remove(&id("p2")));
        assert_eq!(cart.quantity_of(&id("p2")), 0);
        assert!(cart.is_empty());
        assert!(cart.lines(&catalog).is_empty());
    }

    #[test]
    fn test_remove_absent_product_leaves_state_unchanged() {
        let catalog = sample();
        let mut cart = CartState::new();
        cart.add(&catalog, &id("p1"));
        let before = cart.clone();

        assert!(!cart.remove(&id("p4")));
        assert!(!cart.remove(&id("nope")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_add_unknown_product_is_noop() {
        let catalog = sample();
        let mut cart = CartState::new();
        assert!(!cart.add(&catalog, &id("p99")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_remove_round_trip_restores_state() {
        let catalog = sample();
        let mut cart = CartState::new();
        cart.add(&catalog, &id("p4"));
        let before = cart.clone();

        for _ in 0..3 {
            cart.add(&catalog, &id("p1"));
            cart.add(&catalog, &id("p4"));
        }
        for _ in 0..3 {
            cart.remove(&id("p1"));
            cart.remove(&id("p4"));
        }
        assert_eq!(cart, before);
    }

    #[test]
    fn test_total_count_tracks_net_increments_per_product() {
        let catalog = sample();
        let mut cart = CartState::new();
        // (op, product): true = add, false = remove
        let ops = [
            (false, "p1"),
            (true, "p1"),
            (true, "p2"),
            (false, "p1"),
            (false, "p1"),
            (true, "p2"),
            (true, "p3"),
            (false, "p2"),
            (true, "p1"),
        ];

        let mut expected: std::collections::HashMap<&str, u32> = std::collections::HashMap::new();
        for (is_add, pid) in ops {
            let held = expected.entry(pid).or_insert(0);
            if is_add {
                cart.add(&catalog, &id(pid));
                *held += 1;
            } else {
                cart.remove(&id(pid));
                *held = held.saturating_sub(1);
            }
        }

        assert_eq!(cart.total_count(), expected.values().sum::<u32>());
        for (pid, qty) in expected {
            assert_eq!(cart.quantity_of(&id(pid)), qty, "quantity of {pid}");
        }
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let catalog = sample();
        let mut cart = CartState::new();
        for pid in ["p3", "p1", "p4", "p1"] {
            cart.add(&catalog, &id(pid));
        }
        let order: Vec<&str> = cart
            .lines(&catalog)
            .iter()
            .map(|l| l.product.id.as_str())
            .collect();
        assert_eq!(order, ["p3", "p1", "p4"]);
    }

    #[test]
    fn test_subtotal_matches_sum_of_lines_with_fractional_prices() {
        let catalog = Catalog::new(vec![
            product("a", "Pencil", 33),
            product("b", "Folder", 1999),
        ])
        .unwrap();
        let mut cart = CartState::new();
        for _ in 0..3 {
            cart.add(&catalog, &id("a"));
        }
        cart.add(&catalog, &id("b"));

        let by_hand: Decimal = cart
            .lines(&catalog)
            .iter()
            .map(|l| l.product.price.amount * Decimal::from(l.quantity))
            .sum();
        let subtotal = cart.subtotal(&catalog);
        assert_eq!(subtotal.amount, by_hand);
        assert_eq!(subtotal.display(), "$20.98");
    }

    #[test]
    fn test_lines_skip_products_missing_from_catalog() {
        let full = sample();
        let mut cart = CartState::new();
        cart.add(&full, &id("p1"));
        cart.add(&full, &id("p2"));

        let reduced = Catalog::new(vec![full.get(&id("p2")).cloned().unwrap()]).unwrap();
        let lines = cart.lines(&reduced);
        assert_eq!(lines.len(), 1);
        assert_eq!(cart.subtotal(&reduced).amount, Decimal::new(45, 0));
    }

    #[test]
    fn test_cart_serde_round_trip_keeps_order() {
        let catalog = sample();
        let mut cart = CartState::new();
        cart.add(&catalog, &id("p2"));
        cart.add(&catalog, &id("p1"));
        let json = serde_json::to_string(&cart).unwrap();
        let restored: CartState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
    }
}

//! Store search: case-insensitive substring filter over the catalog.

use crate::catalog::{Catalog, Product};

/// Whether a product matches an already-lowercased needle.
fn matches(product: &Product, needle: &str) -> bool {
    [&product.name, &product.tag, &product.description]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter the catalog by a free-text query.
///
/// The query is trimmed; a blank query returns every product. Otherwise a
/// product matches when its name, tag, or description contains the query,
/// ignoring case. Results are always in catalog order.
#[must_use]
pub fn filter_products<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.iter().collect();
    }
    catalog.iter().filter(|p| matches(p, &needle)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_hoodie_matches_by_name() {
        let catalog = Catalog::sample().unwrap();
        let results = filter_products(&catalog, "hoodie");
        assert_eq!(ids(&results), ["p1"]);
        assert!(results[0].name.contains("Hoodie"));
    }

    #[test]
    fn test_blank_queries_return_full_catalog() {
        let catalog = Catalog::sample().unwrap();
        for query in ["", "   ", "\t\n"] {
            assert_eq!(ids(&filter_products(&catalog, query)), ["p1", "p2", "p3", "p4"]);
        }
    }

    #[test]
    fn test_query_is_trimmed_and_case_insensitive() {
        let catalog = Catalog::sample().unwrap();
        assert_eq!(ids(&filter_products(&catalog, "  HOODIE ")), ["p1"]);
    }

    #[test]
    fn test_matches_tag_and_description() {
        let catalog = Catalog::sample().unwrap();
        // "Limited" is p2's tag
        assert_eq!(ids(&filter_products(&catalog, "limited")), ["p2"]);
        // "enamel" only appears in p3's description
        assert_eq!(ids(&filter_products(&catalog, "enamel")), ["p3"]);
    }

    #[test]
    fn test_multiple_matches_keep_catalog_order() {
        let catalog = Catalog::sample().unwrap();
        // p1, p3, and p4 all say "rocket" somewhere
        assert_eq!(ids(&filter_products(&catalog, "rocket")), ["p1", "p3", "p4"]);
    }

    #[test]
    fn test_no_matches() {
        let catalog = Catalog::sample().unwrap();
        assert!(filter_products(&catalog, "lanyard").is_empty());
    }
}

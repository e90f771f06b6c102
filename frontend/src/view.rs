//! Pure derivations over the product mirror.
//!
//! Facets, the filtered list, and the aggregate stats are recomputed from
//! the full mirror whenever it or the filter inputs change; none of them is
//! patched incrementally, which rules out staleness at this data scale.

use crate::product::Product;

/// Sentinel category matching every product.
pub const ALL_CATEGORIES: &str = "All";

/// Quantity below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Quantity at which stock is considered good.
pub const GOOD_STOCK_THRESHOLD: i32 = 20;

/// Display-only stock classification; recomputed from quantity, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLevel {
    /// Fewer than [`LOW_STOCK_THRESHOLD`] units.
    Low,
    /// At least [`LOW_STOCK_THRESHOLD`] but fewer than
    /// [`GOOD_STOCK_THRESHOLD`] units.
    Medium,
    /// At least [`GOOD_STOCK_THRESHOLD`] units.
    Good,
}

impl StockLevel {
    /// Badge label shown next to the quantity.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Stock",
            Self::Medium => "Medium",
            Self::Good => "In Stock",
        }
    }
}

/// Classify a quantity.
///
/// ```
/// use frontend::view::{StockLevel, stock_level};
///
/// assert_eq!(stock_level(4), StockLevel::Low);
/// assert_eq!(stock_level(5), StockLevel::Medium);
/// assert_eq!(stock_level(20), StockLevel::Good);
/// ```
#[must_use]
pub const fn stock_level(quantity: i32) -> StockLevel {
    if quantity < LOW_STOCK_THRESHOLD {
        StockLevel::Low
    } else if quantity < GOOD_STOCK_THRESHOLD {
        StockLevel::Medium
    } else {
        StockLevel::Good
    }
}

/// The category facet list: [`ALL_CATEGORIES`] followed by the sorted
/// distinct categories present in the mirror.
#[must_use]
pub fn category_facets(products: &[Product]) -> Vec<String> {
    let mut categories: Vec<String> = products.iter().map(|p| p.category.clone()).collect();
    categories.sort_unstable();
    categories.dedup();
    let mut facets = Vec::with_capacity(categories.len() + 1);
    facets.push(ALL_CATEGORIES.to_owned());
    facets.extend(categories);
    facets
}

/// Active filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFilter {
    /// Selected category facet; [`ALL_CATEGORIES`] matches everything.
    pub category: String,
    /// Search text; empty matches everything.
    pub search: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_owned(),
            search: String::new(),
        }
    }
}

impl CatalogFilter {
    /// True when the product passes both predicates: the category matches
    /// (or the facet is "All") and the search text is a case-insensitive
    /// substring of the name, SKU, or description (or is empty).
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.category != ALL_CATEGORIES && product.category != self.category {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&product.name, &product.sku, &product.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Products passing the filter, in mirror order.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], filter: &CatalogFilter) -> Vec<&'a Product> {
    products.iter().filter(|p| filter.matches(p)).collect()
}

/// Aggregate statistics over the unfiltered mirror.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    /// Count of all products, ignoring any filter.
    pub total: usize,
    /// Count of products below [`LOW_STOCK_THRESHOLD`].
    pub low_stock: usize,
    /// Sum of price times quantity over all products.
    pub total_value: f64,
}

/// Compute the header statistics.
#[must_use]
pub fn catalog_stats(products: &[Product]) -> CatalogStats {
    CatalogStats {
        total: products.len(),
        low_stock: products
            .iter()
            .filter(|p| p.quantity < LOW_STOCK_THRESHOLD)
            .count(),
        total_value: products
            .iter()
            .map(|p| p.price * f64::from(p.quantity))
            .sum(),
    }
}

#[cfg(test)]
mod tests {
    //! Derivation rules pinned by the client contract.

    use rstest::rstest;

    use super::*;

    fn product(name: &str, category: &str, sku: &str, description: &str) -> Product {
        Product {
            id: 0,
            name: name.to_owned(),
            category: category.to_owned(),
            price: 1.0,
            quantity: 10,
            description: description.to_owned(),
            sku: sku.to_owned(),
        }
    }

    fn sample_pair() -> Vec<Product> {
        vec![
            product(
                "iPhone 15 Pro",
                "Electronics",
                "ELEC-001",
                "Latest Apple smartphone",
            ),
            product("Atomic Habits", "Books", "BOOK-002", "Build good habits"),
        ]
    }

    #[rstest]
    #[case(0, StockLevel::Low)]
    #[case(4, StockLevel::Low)]
    #[case(5, StockLevel::Medium)]
    #[case(19, StockLevel::Medium)]
    #[case(20, StockLevel::Good)]
    #[case(1_000, StockLevel::Good)]
    fn stock_level_thresholds(#[case] quantity: i32, #[case] expected: StockLevel) {
        assert_eq!(stock_level(quantity), expected);
    }

    #[test]
    fn facets_are_all_then_sorted_distinct_categories() {
        let products = vec![
            product("a", "Home", "H-1", ""),
            product("b", "Books", "B-1", ""),
            product("c", "Home", "H-2", ""),
        ];

        assert_eq!(category_facets(&products), vec!["All", "Books", "Home"]);
    }

    #[test]
    fn facets_of_an_empty_mirror_still_offer_all() {
        assert_eq!(category_facets(&[]), vec!["All"]);
    }

    #[test]
    fn search_matches_across_name_sku_and_description_case_insensitively() {
        let products = sample_pair();
        let filter = CatalogFilter {
            search: "atomic".to_owned(),
            ..CatalogFilter::default()
        };

        let hits = filter_products(&products, &filter);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|p| p.name.as_str()), Some("Atomic Habits"));
    }

    #[rstest]
    #[case("elec-001", "iPhone 15 Pro")]
    #[case("SMARTPHONE", "iPhone 15 Pro")]
    #[case("habits", "Atomic Habits")]
    fn each_searchable_field_participates(#[case] needle: &str, #[case] expected: &str) {
        let products = sample_pair();
        let filter = CatalogFilter {
            search: needle.to_owned(),
            ..CatalogFilter::default()
        };

        let hits = filter_products(&products, &filter);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|p| p.name.as_str()), Some(expected));
    }

    #[test]
    fn category_facet_alone_narrows_the_list() {
        let products = sample_pair();
        let filter = CatalogFilter {
            category: "Electronics".to_owned(),
            search: String::new(),
        };

        let hits = filter_products(&products, &filter);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits.first().map(|p| p.name.as_str()), Some("iPhone 15 Pro"));
    }

    #[test]
    fn both_predicates_must_hold() {
        let products = sample_pair();
        let filter = CatalogFilter {
            category: "Books".to_owned(),
            search: "iphone".to_owned(),
        };

        assert!(filter_products(&products, &filter).is_empty());
    }

    #[test]
    fn stats_count_everything_regardless_of_filters() {
        let mut products = sample_pair();
        if let Some(first) = products.get_mut(0) {
            first.price = 10.0;
            first.quantity = 2;
        }
        if let Some(second) = products.get_mut(1) {
            second.price = 5.0;
            second.quantity = 3;
        }

        let stats = catalog_stats(&products);

        assert_eq!(stats.total, 2);
        assert_eq!(stats.low_stock, 2);
        assert!((stats.total_value - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn stats_of_an_empty_mirror_are_zero() {
        let stats = catalog_stats(&[]);

        assert_eq!(stats.total, 0);
        assert_eq!(stats.low_stock, 0);
        assert!((stats.total_value).abs() < f64::EPSILON);
    }
}

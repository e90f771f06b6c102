//! Fixed reference product dataset for bootstrapping an empty catalog.
//!
//! The backend inserts this dataset once, when it finds the product table
//! completely empty, so a fresh deployment is usable without prior setup.
//! The crate is independent of backend domain types to avoid circular
//! dependencies; consumers convert [`SeedProduct`] into their own row or
//! request types.
//!
//! It also exports [`RECOMMENDED_CATEGORIES`], the category list offered by
//! product entry forms. The list is advisory: the store accepts any
//! non-empty category text.

mod dataset;

pub use dataset::reference_catalog;

/// Categories offered by the product entry form.
///
/// Advisory only; stored products may carry any non-empty category text.
pub const RECOMMENDED_CATEGORIES: [&str; 9] = [
    "Electronics",
    "Clothing",
    "Food",
    "Furniture",
    "Sports",
    "Home",
    "Books",
    "Beauty",
    "Other",
];

/// One product of the reference dataset.
///
/// Field semantics match the catalog's persisted model, minus the
/// store-assigned id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeedProduct {
    /// Display name.
    pub name: &'static str,
    /// Category label, drawn from [`RECOMMENDED_CATEGORIES`].
    pub category: &'static str,
    /// Unit price in currency units.
    pub price: f64,
    /// Units on hand.
    pub quantity: i32,
    /// Free-text description.
    pub description: &'static str,
    /// Unique stock keeping unit.
    pub sku: &'static str,
}

#[cfg(test)]
mod tests {
    //! Shape checks for the reference dataset.
    #![expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]

    use std::collections::HashSet;

    use rstest::rstest;

    use super::{RECOMMENDED_CATEGORIES, reference_catalog};

    #[test]
    fn dataset_holds_twenty_products() {
        assert_eq!(reference_catalog().len(), 20);
    }

    #[test]
    fn skus_are_unique() {
        let skus: HashSet<&str> = reference_catalog().iter().map(|p| p.sku).collect();
        assert_eq!(skus.len(), reference_catalog().len());
    }

    #[test]
    fn categories_come_from_the_recommended_list() {
        for product in reference_catalog() {
            assert!(
                RECOMMENDED_CATEGORIES.contains(&product.category),
                "unexpected category '{}' on {}",
                product.category,
                product.sku
            );
        }
    }

    #[test]
    fn dataset_spans_eight_categories() {
        let categories: HashSet<&str> = reference_catalog().iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), 8);
    }

    #[rstest]
    #[case("ELEC-001", "iPhone 15 Pro")]
    #[case("BOOK-002", "Atomic Habits")]
    #[case("BEAU-001", "Skincare Starter Kit")]
    fn well_known_entries_are_present(#[case] sku: &str, #[case] name: &str) {
        let product = reference_catalog()
            .iter()
            .find(|p| p.sku == sku)
            .expect("sku present in dataset");
        assert_eq!(product.name, name);
    }

    #[test]
    fn fields_satisfy_catalog_invariants() {
        for product in reference_catalog() {
            assert!(!product.name.is_empty());
            assert!(!product.category.is_empty());
            assert!(!product.sku.is_empty());
            assert!(product.price >= 0.0, "negative price on {}", product.sku);
            assert!(product.quantity >= 0, "negative quantity on {}", product.sku);
        }
    }
}

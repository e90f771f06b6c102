//! Local mirror of the server-side catalog.

use crate::product::Product;

/// The client's copy of the full product list.
///
/// Mutations land here only after the server confirmed them; an optimistic
/// update could diverge from persisted truth on failure. Derived views are
/// recomputed from this list and never patched independently of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogMirror {
    products: Vec<Product>,
}

impl CatalogMirror {
    /// Create an empty mirror.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole mirror with a fresh server snapshot.
    pub fn replace_all(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Append a product the server just created.
    pub fn apply_created(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Drop the product the server just deleted.
    pub fn apply_deleted(&mut self, id: i32) {
        self.products.retain(|p| p.id != id);
    }

    /// Replace the matching product with the server's returned
    /// representation, not merely the requested change; this guards against
    /// server-side derivation drift.
    pub fn apply_updated(&mut self, product: Product) {
        if let Some(slot) = self.products.iter_mut().find(|p| p.id == product.id) {
            *slot = product;
        }
    }

    /// The mirrored products in server order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: i32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    //! Reconciliation contract coverage.
    #![expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]

    use super::*;

    fn product(id: i32, name: &str, quantity: i32) -> Product {
        Product {
            id,
            name: name.to_owned(),
            category: "Books".to_owned(),
            price: 2.5,
            quantity,
            description: String::new(),
            sku: format!("BOOK-{id:03}"),
        }
    }

    #[test]
    fn created_products_are_appended() {
        let mut mirror = CatalogMirror::new();
        mirror.replace_all(vec![product(1, "First", 1)]);

        mirror.apply_created(product(2, "Second", 0));

        let names: Vec<&str> = mirror.products().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn deleted_products_are_removed_by_id() {
        let mut mirror = CatalogMirror::new();
        mirror.replace_all(vec![product(1, "Keep", 1), product(2, "Drop", 1)]);

        mirror.apply_deleted(2);

        assert_eq!(mirror.products().len(), 1);
        assert!(mirror.find(2).is_none());
        assert!(mirror.find(1).is_some());
    }

    #[test]
    fn updates_replace_the_whole_server_representation() {
        let mut mirror = CatalogMirror::new();
        mirror.replace_all(vec![product(1, "Stale", 1)]);

        // The server may return more than the field the client asked to
        // change; all of it must win.
        let mut fresh = product(1, "Renamed upstream", 9);
        fresh.price = 99.0;
        mirror.apply_updated(fresh.clone());

        assert_eq!(mirror.find(1), Some(&fresh));
    }

    #[test]
    fn updates_for_unknown_ids_leave_the_mirror_unchanged() {
        let mut mirror = CatalogMirror::new();
        mirror.replace_all(vec![product(1, "Only", 1)]);
        let before = mirror.clone();

        mirror.apply_updated(product(7, "Ghost", 3));

        assert_eq!(mirror, before);
    }

    #[test]
    fn replace_all_discards_previous_state() {
        let mut mirror = CatalogMirror::new();
        mirror.replace_all(vec![product(1, "Old", 1)]);

        mirror.replace_all(vec![product(2, "New", 2)]);

        assert!(mirror.find(1).is_none());
        let only = mirror.products().first().expect("one product");
        assert_eq!(only.name, "New");
    }
}

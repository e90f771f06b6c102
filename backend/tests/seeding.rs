//! Seed-on-empty behaviour against a real SQLite store.
#![expect(clippy::expect_used, reason = "tests fail loudly on bad fixtures")]

mod support;

use backend::domain::bootstrap::ensure_reference_catalog;
use backend::domain::ports::ProductStore;
use support::fresh_store;

#[test]
fn an_empty_store_is_seeded_with_the_reference_catalog() {
    let (store, _dir) = fresh_store();

    let inserted = ensure_reference_catalog(&store).expect("seed succeeds");

    assert_eq!(inserted, 20);
    assert_eq!(store.count().expect("count succeeds"), 20);
}

#[test]
fn seeding_a_populated_store_is_a_no_op() {
    let (store, _dir) = fresh_store();
    ensure_reference_catalog(&store).expect("first seed succeeds");

    let inserted = ensure_reference_catalog(&store).expect("second call succeeds");

    assert_eq!(inserted, 0);
    assert_eq!(store.count().expect("count succeeds"), 20);
}

#[test]
fn seeded_products_list_in_category_name_order() {
    let (store, _dir) = fresh_store();
    ensure_reference_catalog(&store).expect("seed succeeds");

    let listed = store.list().expect("list succeeds");

    // "Beauty" sorts first among the seeded categories.
    let first = listed.first().expect("non-empty catalog");
    assert_eq!(first.sku, "BEAU-001");
    assert_eq!(first.name, "Skincare Starter Kit");
    let mut ordering: Vec<(&str, &str)> = listed
        .iter()
        .map(|p| (p.category.as_str(), p.name.as_str()))
        .collect();
    let sorted = {
        let mut copy = ordering.clone();
        copy.sort_unstable();
        copy
    };
    assert_eq!(ordering, sorted);
    ordering.dedup();
    assert_eq!(ordering.len(), 20, "no duplicate category/name pairs");
}

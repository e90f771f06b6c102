//! Plain-text rendering of the derived views.
//!
//! Pure string producers so the console output is testable without
//! capturing stdout.

use crate::product::Product;
use crate::view::{CatalogStats, stock_level};

const NAME_WIDTH: usize = 28;
const CATEGORY_WIDTH: usize = 12;

/// Render the stats header line.
#[must_use]
pub fn render_stats(stats: &CatalogStats) -> String {
    format!(
        "Total Products: {}  |  Low Stock Alerts: {}  |  Total Inventory Value: ${:.2}",
        stats.total, stats.low_stock, stats.total_value
    )
}

/// Render the facet strip, marking the active selection.
#[must_use]
pub fn render_facets(facets: &[String], active: &str) -> String {
    facets
        .iter()
        .map(|facet| {
            if facet == active {
                format!("[{facet}]")
            } else {
                facet.clone()
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the product table, or the empty-state message.
#[must_use]
pub fn render_table(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products found. Try adjusting your search or add a new product.".to_owned();
    }
    let mut out = format!(
        "{:<NAME_WIDTH$}  {:<CATEGORY_WIDTH$}  {:<10}  {:>10}  {:>5}  {}\n",
        "PRODUCT", "CATEGORY", "SKU", "PRICE", "QTY", "STATUS"
    );
    for product in products {
        let price = format!("${:.2}", product.price);
        out.push_str(&format!(
            "{:<NAME_WIDTH$}  {:<CATEGORY_WIDTH$}  {:<10}  {:>10}  {:>5}  {}\n",
            clip(&product.name, NAME_WIDTH),
            clip(&product.category, CATEGORY_WIDTH),
            product.sku,
            price,
            product.quantity,
            stock_level(product.quantity).label()
        ));
    }
    out
}

/// Render the "Showing X of Y" footer.
#[must_use]
pub fn render_footer(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} products")
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_owned()
    } else {
        let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
        clipped.push('…');
        clipped
    }
}

#[cfg(test)]
mod tests {
    //! Rendering output shape.

    use super::*;
    use crate::view::catalog_stats;

    fn product(name: &str, quantity: i32) -> Product {
        Product {
            id: 1,
            name: name.to_owned(),
            category: "Sports".to_owned(),
            price: 34.99,
            quantity,
            description: String::new(),
            sku: "SPRT-001".to_owned(),
        }
    }

    #[test]
    fn stats_line_uses_two_decimal_currency() {
        let products = vec![product("Yoga Mat", 2)];
        let line = render_stats(&catalog_stats(&products));

        assert_eq!(
            line,
            "Total Products: 1  |  Low Stock Alerts: 1  |  Total Inventory Value: $69.98"
        );
    }

    #[test]
    fn table_rows_carry_the_stock_badge_label() {
        let low = product("Yoga Mat", 2);
        let good = product("Resistance Bands", 50);
        let table = render_table(&[&low, &good]);

        assert!(table.contains("Yoga Mat"));
        assert!(table.contains("Low Stock"));
        assert!(table.contains("In Stock"));
        assert!(table.contains("$34.99"));
    }

    #[test]
    fn empty_lists_render_the_empty_state() {
        assert!(render_table(&[]).starts_with("No products found"));
    }

    #[test]
    fn active_facet_is_highlighted() {
        let facets = vec!["All".to_owned(), "Books".to_owned()];

        assert_eq!(render_facets(&facets, "Books"), "All  [Books]");
    }

    #[test]
    fn long_names_are_clipped_not_wrapped() {
        let long = product(
            "An exceedingly long product name that will not fit",
            7,
        );
        let table = render_table(&[&long]);

        assert!(table.contains('…'));
        assert!(!table.contains("will not fit"));
    }
}

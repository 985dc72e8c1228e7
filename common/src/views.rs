//! Derived views over a loaded product collection.
//!
//! All functions are pure: they borrow the collection, never reorder it, and
//! are recomputed whenever the collection changes.

use crate::category::CategoryId;
use crate::product::Product;

pub const FEATURED_COUNT: usize = 4;
pub const LATEST_COUNT: usize = 4;

/// The first [`FEATURED_COUNT`] products in received order.
pub fn featured(products: &[Product]) -> &[Product] {
    &products[..products.len().min(FEATURED_COUNT)]
}

/// The [`LATEST_COUNT`] most recently created products, newest first.
/// Equal timestamps keep their received order.
pub fn latest(products: &[Product]) -> Vec<&Product> {
    let mut sorted: Vec<&Product> = products.iter().collect();
    // sort_by is stable
    sorted.sort_by(|a, b| b.creation_at.cmp(&a.creation_at));
    sorted.truncate(LATEST_COUNT);
    sorted
}

/// Products whose category copy carries `category`, in received order.
pub fn by_category(products: &[Product], category: CategoryId) -> Vec<&Product> {
    products
        .iter()
        .filter(|p| p.category_id() == Some(category))
        .collect()
}

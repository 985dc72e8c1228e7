use dioxus::prelude::*;

use catalog_common::category::CategoryId;
use catalog_common::product::Product;

use super::app::Route;
use super::product_card::ProductCard;
use super::shared_state::{use_catalog, use_categories_on_mount, use_products_on_mount};

/// Product grid. `category` is the raw `?category=` query value; anything
/// that isn't an id shows the whole page.
#[component]
pub fn ProductsView(category: String) -> Element {
    use_products_on_mount();
    use_categories_on_mount();
    let catalog = use_catalog();

    let selected: Option<CategoryId> = category.parse().ok();

    let catalog = catalog.read();
    if catalog.products().is_pending() {
        return rsx! {
            p { class: "loading", "Loading products..." }
        };
    }
    let error = catalog.products().error().map(ToString::to_string);
    let heading = selected
        .and_then(|id| catalog.category(id))
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Products".to_string());
    let products: Vec<Product> = match selected {
        Some(id) => catalog.by_category(id).into_iter().cloned().collect(),
        None => catalog.products().items().to_vec(),
    };
    drop(catalog);

    rsx! {
        div { class: "products-view",
            div { class: "section-heading",
                div {
                    h1 { "{heading}" }
                    p { "Manage your product catalog" }
                }
                Link { class: "button", to: Route::ProductNew {}, "+ Add product" }
            }
            if let Some(err) = error {
                p { class: "error-state", "Couldn't load products: {err}" }
            }
            if selected.is_some() {
                Link { to: Route::all_products(), "Show all products" }
            }
            if products.is_empty() {
                p { class: "empty-state", "No products found." }
            } else {
                div { class: "product-grid",
                    {products.into_iter().map(|product| rsx! {
                        ProductCard { key: "{product.id}", product }
                    })}
                }
            }
        }
    }
}

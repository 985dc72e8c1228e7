use dioxus::prelude::*;

use super::app::Route;
use super::product_card::ProductCard;
use super::shared_state::{use_catalog, use_categories_on_mount, use_products_on_mount};

#[component]
pub fn HomeView() -> Element {
    use_categories_on_mount();
    use_products_on_mount();
    let catalog = use_catalog();

    let catalog = catalog.read();
    let loading_products = catalog.products().is_pending();
    let featured = catalog.featured().to_vec();
    let latest: Vec<_> = catalog.latest().into_iter().cloned().collect();
    let categories = catalog.categories().items().to_vec();
    let category_error = catalog.categories().error().map(ToString::to_string);
    drop(catalog);

    rsx! {
        div { class: "home-view",
            section { class: "hero",
                span { class: "badge", "New arrivals" }
                h1 { "Discover products you'll love" }
                p { "Browse categories, view the latest items, and add your own products." }
                Link { class: "button", to: Route::all_products(), "Explore products" }
            }

            section { class: "featured",
                div { class: "section-heading",
                    h2 { "Featured products" }
                    Link { to: Route::all_products(), "View all" }
                }
                if loading_products {
                    p { class: "loading", "Loading products..." }
                } else if featured.is_empty() {
                    p { class: "empty-state", "No products to show." }
                } else {
                    div { class: "product-grid",
                        {featured.into_iter().map(|product| rsx! {
                            ProductCard { key: "{product.id}", product }
                        })}
                    }
                }
            }

            section { class: "categories",
                h2 { "Categories" }
                if let Some(err) = category_error {
                    p { class: "error-state", "Couldn't load categories: {err}" }
                }
                div { class: "category-grid",
                    {categories.into_iter().map(|category| {
                        let route = Route::Products { category: category.id.to_string() };
                        rsx! {
                            Link { class: "category-card", key: "{category.id}", to: route,
                                img { src: "{category.image}", alt: "{category.name}", loading: "lazy" }
                                div { class: "category-name", "{category.name}" }
                                div { class: "hint", "Tap to browse" }
                            }
                        }
                    })}
                }
            }

            section { class: "latest",
                div { class: "section-heading",
                    h2 { "Latest products" }
                    Link { to: Route::all_products(), "View all" }
                }
                div { class: "product-list",
                    {latest.into_iter().map(|product| rsx! {
                        ProductCard { key: "{product.id}", product, show_description: false }
                    })}
                }
            }
        }
    }
}

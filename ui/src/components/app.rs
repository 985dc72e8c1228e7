use dioxus::prelude::*;

use catalog_common::catalog::Catalog;
use catalog_common::remote::HttpCatalogClient;
use catalog_common::CatalogConfig;

use super::home_view::HomeView;
use super::product_detail::ProductDetailView;
use super::product_form::NewProductForm;
use super::products_view::ProductsView;
use super::shared_state::ClientSlot;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/products?:category")]
    Products { category: String },
    #[route("/products/new")]
    ProductNew {},
    #[route("/products/:id")]
    ProductDetail { id: u64 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Product listing without a category filter.
    pub fn all_products() -> Self {
        Route::Products {
            category: String::new(),
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_hook(CatalogConfig::from_env);
    use_context_provider({
        let config = config.clone();
        move || Signal::new(Catalog::new(&config))
    });
    let client = use_context_provider(move || -> ClientSlot { HttpCatalogClient::new(config) });

    if let Err(err) = client {
        tracing::error!(error = %err, "catalog client unavailable");
        return rsx! {
            div { class: "catalog-app",
                p { class: "error-state", "Catalog unavailable: {err}" }
            }
        };
    }

    rsx! { Router::<Route> {} }
}

#[component]
fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "catalog-app",
            header { class: "app-header",
                h1 { "Catalog" }
                nav {
                    button {
                        onclick: move |_| { nav.push(Route::Home {}); },
                        "Home"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::all_products()); },
                        "Products"
                    }
                    button {
                        onclick: move |_| { nav.push(Route::ProductNew {}); },
                        "Add product"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

/// Route component: landing page.
#[component]
fn Home() -> Element {
    rsx! { HomeView {} }
}

/// Route component: product grid, optionally filtered by `?category=<id>`.
#[component]
fn Products(category: String) -> Element {
    rsx! { ProductsView { category } }
}

/// Route component: creation form.
#[component]
fn ProductNew() -> Element {
    rsx! { NewProductForm {} }
}

/// Route component: single product by id.
#[component]
fn ProductDetail(id: u64) -> Element {
    rsx! { ProductDetailView { id } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "catalog-app",
            div { class: "not-found",
                h1 { "Page not found" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Home {}, "Back to the catalog" }
            }
        }
    }
}

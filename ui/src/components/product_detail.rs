use dioxus::prelude::*;

use catalog_common::product::ProductId;
use catalog_common::CatalogApi;

use super::app::Route;
use super::product_card::format_price;
use super::shared_state::use_catalog_client;

#[component]
pub fn ProductDetailView(id: u64) -> Element {
    let client = use_catalog_client();
    let product = use_resource(use_reactive((&id,), move |(id,)| {
        let client = client.clone();
        async move {
            match client {
                Some(client) => Some(client.fetch_product(ProductId(id)).await),
                None => None,
            }
        }
    }));

    let body = match &*product.read() {
        None => rsx! { p { class: "loading", "Loading product..." } },
        Some(None) => rsx! { p { class: "error-state", "Catalog unavailable." } },
        Some(Some(Err(err))) => rsx! {
            p { class: "error-state", "Couldn't load product #{id}: {err}" }
        },
        Some(Some(Ok(product))) => {
            let price = format_price(product.price);
            let category = product.category_name().to_string();
            let cover = product.cover_image().to_string();
            rsx! {
                div { class: "product-detail",
                    div { class: "gallery",
                        if product.images.is_empty() {
                            img { src: "{cover}", alt: "{product.title}" }
                        }
                        {product.images.iter().map(|url| rsx! {
                            img { key: "{url}", src: "{url}", alt: "{product.title}" }
                        })}
                    }
                    h1 { "{product.title}" }
                    p { class: "category", "{category}" }
                    p { class: "price", "{price}" }
                    p { "{product.description}" }
                }
            }
        }
    };

    rsx! {
        div { class: "product-detail-view",
            Link { to: Route::all_products(), "Back to products" }
            {body}
        }
    }
}

use dioxus::prelude::*;

use catalog_common::product::Product;

use super::app::Route;

/// Whole-dollar prices print without decimals, like the service sends them.
pub fn format_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("${price:.0}")
    } else {
        format!("${price:.2}")
    }
}

/// Clickable product tile linking to the detail page.
#[component]
pub fn ProductCard(product: Product, #[props(default = true)] show_description: bool) -> Element {
    let price = format_price(product.price);
    let category = product.category_name().to_string();
    let cover = product.cover_image().to_string();

    rsx! {
        Link {
            class: "product-card",
            to: Route::ProductDetail { id: product.id.0 },
            img {
                class: "product-image",
                src: "{cover}",
                alt: "{product.title}",
                loading: "lazy",
            }
            div { class: "product-card-body",
                div { class: "product-header",
                    div {
                        div { class: "product-title", "{product.title}" }
                        div { class: "category", "{category}" }
                    }
                    div { class: "price", "{price}" }
                }
                if show_description {
                    p { class: "product-description", "{product.description}" }
                }
            }
        }
    }
}

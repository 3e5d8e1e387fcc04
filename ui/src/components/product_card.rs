#![allow(non_snake_case)]

use dioxus::prelude::*;

use api::product::Product;

use crate::Route;

/// "$"-prefixed, two-decimal price label.
pub fn price_label(price: f64) -> String {
    format!("${price:.2}")
}

/// One tile in the product grid. The whole card links to the detail screen.
#[component]
pub fn ProductCard(product: Product) -> Element {
    let price = price_label(product.price);
    let detail = Route::ProductDetails {
        product_id: product.product_id,
    };

    rsx! {
        article {
            class: "product-card",
            Link {
                to: detail.clone(),
                img {
                    class: "product-card-image",
                    src: "{product.image_url}",
                    alt: "{product.name}",
                    loading: "lazy",
                }
            }
            div {
                class: "product-card-body",
                h4 { "{product.name}" }
                p { "{product.description}" }
                Link {
                    to: detail,
                    role: "button",
                    class: "price-tag",
                    "{price}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_label_prefixes_dollar_and_pads_cents() {
        assert_eq!(price_label(4.99), "$4.99");
        assert_eq!(price_label(3.5), "$3.50");
        assert_eq!(price_label(0.0), "$0.00");
    }
}

//=============================================================================
// File: src/screens/product_details.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::components::pico::Card;
use crate::components::product_card::price_label;
use crate::Route;

/// Product detail view, fetched by id so links stay shareable.
#[component]
pub fn ProductDetails(product_id: ReadSignal<u32>) -> Element {
    let mut product = use_resource(move || {
        let product_id = product_id();
        async move { api::product(product_id).await }
    });

    rsx! {
        match &*product.read() {
            None => rsx! {
                Card {
                    p { "Loading product..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load product: {e}" }
                    button { onclick: move |_| product.restart(), "Retry" }
                }
            },
            Some(Ok(None)) => rsx! {
                EmptyState {
                    title: "Product Not Found",
                    description: "The product you're looking for doesn't exist or the link is invalid.",
                    primary_action: rsx! {
                        Link {
                            to: Route::Home {},
                            role: "button",
                            "← Back to Home"
                        }
                    },
                }
            },
            Some(Ok(Some(p))) => {
                let price = price_label(p.price);
                rsx! {
                    nav {
                        class: "detail-breadcrumb",
                        Link { to: Route::Home {}, "← Back to products" }
                    }
                    article {
                        class: "product-detail",
                        div {
                            class: "grid",
                            img {
                                class: "product-detail-image",
                                src: "{p.image_url}",
                                alt: "{p.name}",
                            }
                            div {
                                h2 { "{p.name}" }
                                p { "{p.description}" }
                                p {
                                    class: "product-detail-price",
                                    strong { "{price}" }
                                }
                                p {
                                    small { "Popularity rank: {p.popularity}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

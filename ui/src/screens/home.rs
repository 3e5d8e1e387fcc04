//=============================================================================
// File: src/screens/home.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::dropdown::Dropdown;
use crate::components::empty_state::EmptyState;
use crate::components::page_heading::PageHeading;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::product_card::ProductCard;
use crate::components::search_box::SearchBox;
use crate::listing_query::filter_and_sort;
use crate::listing_query::SortKey;

/// The product listings screen: search box, sort dropdown, results count
/// and the card grid.
#[component]
pub fn Home() -> Element {
    let mut products = use_resource(move || async move { api::products().await });

    // The two query inputs. Created empty on mount, dropped on unmount.
    let mut search_term = use_signal(String::new);
    let sort_key = use_signal(SortKey::default);

    // The derived view. Recomputed only when the catalog, the search term or
    // the sort key changes.
    let results = use_memo(move || {
        let catalog = match &*products.read() {
            Some(Ok(catalog)) => catalog.clone(),
            _ => Vec::new(),
        };
        filter_and_sort(&catalog, &search_term.read(), sort_key())
    });

    rsx! {
        match &*products.read() {
            None => rsx! {
                Card {
                    h3 { "Products" }
                    p { "Loading products..." }
                    progress {}
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    h3 { "Error" }
                    p { "Failed to load products: {e}" }
                    button { onclick: move |_| products.restart(), "Retry" }
                }
            },
            Some(Ok(catalog)) => {
                let total = catalog.len();
                let shown = results();
                let term = search_term.read().trim().to_string();
                let count_line = if term.is_empty() {
                    format!("Showing {} of {} products", shown.len(), total)
                } else {
                    format!("Showing {} of {} products matching \"{}\"", shown.len(), total, term)
                };

                rsx! {
                    PageHeading {
                        title: "Eazy Stickers",
                        "Creative stickers that bring joy and personality to everything you touch."
                    }
                    div {
                        class: "listing-controls",
                        SearchBox {
                            label: "Search Stickers",
                            placeholder: "Search by name or description...",
                            value: search_term,
                        }
                        Dropdown {
                            label: "Sort By",
                            options: SortKey::OPTIONS.to_vec(),
                            value: sort_key,
                            placeholder: "Sort Options",
                        }
                    }
                    p {
                        class: "results-count",
                        "{count_line}"
                    }
                    if shown.is_empty() && term.is_empty() {
                        EmptyState {
                            title: "No products found",
                            icon: rsx! { "🔍" },
                        }
                    } else if shown.is_empty() {
                        EmptyState {
                            title: "No products found",
                            description: Some(format!("No results for \"{term}\"")),
                            icon: rsx! { "🔍" },
                            primary_action: Some(rsx! {
                                Button {
                                    on_click: move |_| search_term.set(String::new()),
                                    "Clear Search"
                                }
                            }),
                        }
                    } else {
                        div {
                            class: "product-grid",
                            for product in shown {
                                ProductCard {
                                    key: "{product.product_id}",
                                    product,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

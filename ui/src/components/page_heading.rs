#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Centered page title with a short lede underneath.
#[component]
pub fn PageHeading(title: String, children: Element) -> Element {
    rsx! {
        div {
            class: "page-heading",
            h1 { "{title}" }
            p { {children} }
        }
    }
}

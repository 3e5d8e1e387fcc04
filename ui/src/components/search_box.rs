#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct SearchBoxProps {
    pub label: String,
    #[props(optional)]
    pub placeholder: Option<String>,
    /// The search-term signal owned by the listing screen.
    pub value: Signal<String>,
}

/// A labeled free-text search input bound to the listing's search term.
pub fn SearchBox(mut props: SearchBoxProps) -> Element {
    rsx! {
        div {
            class: "search-box",
            label {
                "{props.label}"
                input {
                    r#type: "search",
                    placeholder: "{props.placeholder.as_deref().unwrap_or(\"\")}",
                    value: "{props.value}",
                    oninput: move |evt| props.value.set(evt.value()),
                }
            }
        }
    }
}

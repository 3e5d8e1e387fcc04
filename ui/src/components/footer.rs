#![allow(non_snake_case)]

use chrono::Datelike;
use chrono::Utc;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Utc::now().year();

    rsx! {
        footer {
            class: "store-footer",
            small {
                "© {year} Eazy Stickers · Built with ♥ by the Eazy Bytes team"
            }
        }
    }
}

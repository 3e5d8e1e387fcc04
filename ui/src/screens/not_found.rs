//=============================================================================
// File: src/screens/not_found.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::empty_state::EmptyState;
use crate::Route;

/// Fallback for any path the router doesn't recognize.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main {
            class: "container",
            EmptyState {
                title: "Page Not Found",
                description: Some(format!("Nothing lives at \"{path}\".")),
                icon: rsx! { "🧭" },
                primary_action: rsx! {
                    Link {
                        to: Route::Home {},
                        role: "button",
                        "← Back to Home"
                    }
                },
            }
        }
    }
}

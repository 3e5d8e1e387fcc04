#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::listing_query::SortKey;

#[derive(Props, PartialEq, Clone)]
pub struct DropdownProps {
    pub label: String,
    /// The selectable options, in display order.
    pub options: Vec<SortKey>,
    /// A signal holding the currently selected option.
    pub value: Signal<SortKey>,
    /// Shown while nothing is selected.
    #[props(default = "Choose an option...".to_string())]
    pub placeholder: String,
}

/// A single-select dropdown.
///
/// The menu is `closed` until the trigger is activated, and closes again on
/// selection or on an outside click. Outside-click detection belongs to the
/// backdrop element, not the menu: the menu only ever hears "dismiss".
pub fn Dropdown(mut props: DropdownProps) -> Element {
    let mut is_open = use_signal(|| false);

    let selected = (props.value)();
    let display_text = if selected == SortKey::None {
        props.placeholder.clone()
    } else {
        selected.label().to_string()
    };
    let arrow = if is_open() { "▴" } else { "▾" };

    rsx! {
        div {
            class: "dropdown",
            label { "{props.label}" }
            div {
                style: "position: relative;",
                button {
                    class: "secondary outline dropdown-trigger",
                    onclick: move |_| is_open.toggle(),
                    span { "{display_text}" }
                    span { class: "dropdown-arrow", "{arrow}" }
                }
                if is_open() {
                    // Backdrop to catch clicks outside the menu.
                    div {
                        class: "dropdown-backdrop",
                        onclick: move |_| is_open.set(false),
                    }
                    ul {
                        role: "listbox",
                        class: "dropdown-menu",
                        // Stop propagation so a click inside the menu never
                        // reaches the backdrop.
                        onclick: |e| e.stop_propagation(),
                        for option in props.options.clone() {
                            li {
                                key: "{option}",
                                role: "option",
                                class: if selected == option { "dropdown-item selected" } else { "dropdown-item" },
                                onclick: move |_| {
                                    props.value.set(option);
                                    is_open.set(false);
                                },
                                span {
                                    class: if selected == option { "check" } else { "check check-hidden" },
                                    "✓"
                                }
                                span { "{option.label()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// File: src/screens/login.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;

/// The sign-in form. Presentational only: the storefront has no
/// authentication backend, so submitting surfaces a notice instead.
#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut notice = use_signal::<Option<&'static str>>(|| None);

    rsx! {
        div {
            class: "login-panel",
            Card {
                h2 { "Sign In" }
                Input {
                    label: "Email address",
                    name: "email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    on_input: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    label: "Password",
                    name: "password",
                    input_type: "password",
                    placeholder: "••••••••",
                    value: "{password}",
                    on_input: move |evt: FormEvent| password.set(evt.value()),
                }
                div {
                    class: "login-options",
                    label {
                        input {
                            r#type: "checkbox",
                            checked: "{remember_me}",
                            oninput: move |evt| remember_me.set(evt.value() == "true"),
                        }
                        "Remember me"
                    }
                }
                if let Some(msg) = notice() {
                    small { class: "field-error", "{msg}" }
                }
                footer {
                    Button {
                        on_click: move |_| {
                            notice.set(Some("Sign-in is not available yet."));
                        },
                        "Sign In"
                    }
                }
                p {
                    small {
                        "By signing in you agree to our Terms of Service and Privacy Policy."
                    }
                }
            }
        }
    }
}

//=============================================================================
// File: src/screens/contact.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use api::contact::ContactDto;

use crate::components::page_heading::PageHeading;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Input;

/// The contact form: controlled fields, client-side validation mirroring the
/// server's, and a submission panel once the backend has accepted it.
#[component]
pub fn Contact() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile_number = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut error = use_signal::<Option<String>>(|| None);
    let mut saved = use_signal::<Option<ContactDto>>(|| None);

    let mut reset_form = move || {
        name.set(String::new());
        email.set(String::new());
        mobile_number.set(String::new());
        message.set(String::new());
        error.set(None);
        saved.set(None);
    };

    let submit = move |_: MouseEvent| {
        let contact = ContactDto {
            name: name(),
            email: email(),
            mobile_number: mobile_number(),
            message: message(),
            ..ContactDto::default()
        };
        // Same validation the server runs, so the round trip is only made
        // for submissions that can succeed.
        if let Err(e) = contact.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        spawn(async move {
            match api::create_contact(contact).await {
                Ok(record) => saved.set(Some(record)),
                Err(e) => error.set(Some(format!("Submission failed: {e}"))),
            }
        });
    };

    rsx! {
        PageHeading {
            title: "Contact Us",
            "Questions, custom orders, wholesale - we'd love to hear from you."
        }
        if let Some(record) = saved() {
            Card {
                h3 { "Message received!" }
                p { "Thanks, {record.name}. We'll get back to you at {record.email}." }
                if let (Some(id), Some(at)) = (record.contact_id, record.created_at) {
                    p {
                        small {
                            {format!("Reference #{id}, received {}.", at.format("%Y-%m-%d %H:%M UTC"))}
                        }
                    }
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| reset_form(),
                    "Send Another Message"
                }
            }
        } else {
            Card {
                Input {
                    label: "Name",
                    name: "name",
                    placeholder: "Your full name",
                    value: "{name}",
                    on_input: move |evt: FormEvent| name.set(evt.value()),
                }
                Input {
                    label: "Email",
                    name: "email",
                    input_type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    on_input: move |evt: FormEvent| email.set(evt.value()),
                }
                Input {
                    label: "Mobile Number",
                    name: "mobile_number",
                    input_type: "tel",
                    placeholder: "555-0100",
                    value: "{mobile_number}",
                    on_input: move |evt: FormEvent| mobile_number.set(evt.value()),
                }
                label {
                    "Message"
                    textarea {
                        name: "message",
                        rows: 5,
                        placeholder: "How can we help?",
                        value: "{message}",
                        oninput: move |evt| message.set(evt.value()),
                    }
                }
                if let Some(err) = error() {
                    small { class: "field-error", "{err}" }
                }
                footer {
                    Button {
                        button_type: ButtonType::Primary,
                        on_click: submit,
                        "Send Message"
                    }
                }
            }
        }
    }
}

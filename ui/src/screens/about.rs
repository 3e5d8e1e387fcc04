//=============================================================================
// File: src/screens/about.rs
//=============================================================================
#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::components::page_heading::PageHeading;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::Route;

/// Static marketing copy: the story, values and call to action.
#[component]
pub fn About() -> Element {
    rsx! {
        PageHeading {
            title: "About Eazy Store",
            "Your one-stop destination for creative stickers that bring joy and "
            "personality to everything you touch."
        }

        section {
            h2 { "Our Story" }
            Grid {
                div {
                    p {
                        "Founded in 2024, Eazy Store began with a simple mission: to make "
                        "everyday items extraordinary. What started as a small collection of "
                        "hand-designed stickers has grown into a vibrant community of creative "
                        "enthusiasts who believe that the little details matter."
                    }
                    p {
                        "Stickers are more than decorations. They're expressions of "
                        "personality, creativity and individuality, which is why we've curated "
                        "a diverse collection that speaks to different tastes and styles."
                    }
                }
                Card {
                    h3 { "10K+" }
                    p { "Happy Customers" }
                    h3 { "500+" }
                    p { "Unique Designs" }
                    h3 { "50+" }
                    p { "Countries Served" }
                }
            }
        }

        section {
            h2 { "Our Values" }
            Grid {
                Card {
                    h4 { "🎨 Creativity First" }
                    p {
                        "We celebrate originality and encourage self-expression through "
                        "unique, artist-designed stickers."
                    }
                }
                Card {
                    h4 { "✨ Quality Matters" }
                    p {
                        "Every sticker is printed on premium vinyl with a weather-resistant "
                        "coating, so your designs stay vibrant and durable."
                    }
                }
                Card {
                    h4 { "🌍 Sustainability" }
                    p {
                        "We're committed to eco-friendly practices, using recyclable "
                        "materials and sustainable packaging."
                    }
                }
            }
        }

        section {
            h2 { "Why Choose Eazy Store?" }
            Grid {
                div {
                    h5 { "✓ Fast Shipping" }
                    p { "Orders processed within 24 hours with tracking included." }
                    h5 { "✓ Satisfaction Guaranteed" }
                    p { "30-day money-back guarantee on all products." }
                }
                div {
                    h5 { "✓ Exclusive Designs" }
                    p { "We work with talented artists to bring you one-of-a-kind stickers." }
                    h5 { "✓ Customer Support" }
                    p { "A friendly support team ready to help with any question." }
                }
            }
        }

        section {
            class: "about-cta",
            h2 { "Ready to Start Your Collection?" }
            p { "Browse our latest designs and find the perfect stickers for you." }
            div {
                class: "about-cta-links",
                Link { to: Route::Home {}, role: "button", "Shop Now" }
                Link {
                    to: Route::Contact {},
                    role: "button",
                    class: "secondary",
                    "Contact Us"
                }
            }
        }
    }
}

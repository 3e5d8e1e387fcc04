#![allow(non_snake_case)]

use dioxus::logger::tracing;
use dioxus::prelude::*;

use api::prefs::theme::Theme;
use api::prefs::user_prefs::UserPrefs;

use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::Route;

/// The sticky storefront header: brand link, theme toggle and navigation.
#[component]
pub fn Header() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let theme = (app_state_mut.theme)();
    let toggle_icon = match theme {
        Theme::Light => "☀",
        Theme::Dark => "☾",
    };

    rsx! {
        header {
            class: "store-header",
            nav {
                ul {
                    li {
                        Link {
                            to: Route::Home {},
                            class: "brand",
                            strong { "Eazy Stickers" }
                        }
                    }
                }
                ul {
                    li {
                        Button {
                            button_type: ButtonType::Contrast,
                            outline: true,
                            on_click: move |_| {
                                let next = app_state_mut.theme.peek().toggled();
                                app_state_mut.theme.set(next);
                                // Persist in the background; the toggle itself
                                // never waits on the store.
                                spawn(async move {
                                    if let Err(e) =
                                        api::save_user_prefs(UserPrefs::new(next)).await
                                    {
                                        tracing::warn!("failed to save theme preference: {e}");
                                    }
                                });
                            },
                            "{toggle_icon}"
                        }
                    }
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::About {}, "About" } }
                    li { Link { to: Route::Contact {}, "Contact" } }
                    li { Link { to: Route::Login {}, "Login" } }
                }
            }
        }
    }
}

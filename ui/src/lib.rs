// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state_mut;
mod components;
pub mod listing_query;
mod screens;

use api::prefs::user_prefs::UserPrefs;
use app_state_mut::AppStateMut;
use components::footer::Footer;
use components::header::Header;
use components::pico::Container;
use screens::about::About;
use screens::contact::Contact;
use screens::home::Home;
use screens::login::Login;
use screens::not_found::NotFound;
use screens::product_details::ProductDetails;

/// Client-side routes. Every screen renders inside the `StoreFrame` layout;
/// unknown paths fall through to `NotFound`.
#[derive(Clone, PartialEq, Debug, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(StoreFrame)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/contact")]
        Contact {},
        #[route("/login")]
        Login {},
        #[route("/products/:product_id")]
        ProductDetails { product_id: u32 },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Layout component: header and footer chrome around the routed screen.
#[component]
fn StoreFrame() -> Element {
    rsx! {
        Header {}
        Container {
            Outlet::<Route> {}
        }
        Footer {}
    }
}

const STORE_CSS: &str = r#"
    .store-header {
        position: sticky;
        top: 0;
        z-index: 20;
        padding: 0 1rem;
        border-bottom: 1px solid var(--pico-muted-border-color);
        background-color: var(--pico-card-background-color);
    }
    .store-header .brand { text-decoration: none; font-size: 1.25rem; }
    .store-header button { padding: 0.25rem 0.6rem; }

    main.container { min-height: 70vh; padding-top: 1.5rem; }

    .store-footer {
        display: flex;
        justify-content: center;
        padding: 1.5rem 0;
        border-top: 1px solid var(--pico-muted-border-color);
    }

    .page-heading { text-align: center; max-width: 42rem; margin: 0 auto 2rem auto; }

    .listing-controls {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        align-items: flex-end;
        justify-content: space-between;
        margin-bottom: 1rem;
    }
    .listing-controls .search-box { flex: 1 1 18rem; }
    .results-count { color: var(--pico-muted-color); font-size: 0.875rem; }

    .product-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
        gap: 1.5rem;
        padding: 1rem 0 3rem 0;
    }
    .product-card { margin: 0; overflow: hidden; }
    .product-card-image { width: 100%; aspect-ratio: 1; object-fit: cover; }
    .product-card-body p { color: var(--pico-muted-color); font-size: 0.875rem; }
    .price-tag { display: inline-block; }

    .dropdown { min-width: 14rem; }
    .dropdown-trigger { display: flex; justify-content: space-between; width: 100%; }
    .dropdown-backdrop {
        position: fixed;
        top: 0; left: 0;
        width: 100vw; height: 100vh;
        z-index: 9;
        background: transparent;
    }
    .dropdown-menu {
        position: absolute;
        min-width: 100%;
        z-index: 10;
        list-style: none;
        margin: 0.25rem 0 0 0;
        padding: 0.25rem;
        max-height: 250px;
        overflow-y: auto;
        background-color: var(--pico-card-background-color);
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
    }
    .dropdown-item {
        display: flex;
        align-items: center;
        gap: 0.25rem;
        padding: 0.4rem 0.6rem;
        cursor: pointer;
        white-space: nowrap;
        border-radius: var(--pico-border-radius);
    }
    .dropdown-item:hover { background-color: var(--pico-secondary-focus); }
    .dropdown-item.selected { font-weight: bold; }
    .check { width: 1.25rem; }
    .check-hidden { visibility: hidden; }

    .empty-state {
        display: flex;
        flex-direction: column;
        align-items: center;
        padding: 3rem 2rem;
        text-align: center;
        color: var(--pico-muted-color);
        border: 2px dashed var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        margin: 1rem 0;
    }
    .empty-state-icon { font-size: 3rem; margin-bottom: 0.5rem; }

    .detail-breadcrumb { margin-bottom: 1rem; }
    .product-detail-image {
        width: 100%;
        border-radius: var(--pico-border-radius);
        object-fit: cover;
    }
    .product-detail-price { font-size: 1.5rem; }

    .login-panel { max-width: 26rem; margin: 0 auto; }
    .login-options { margin-bottom: 1rem; }
    .field-error { color: var(--pico-del-color); display: block; margin-bottom: 1rem; }

    .about-cta { text-align: center; padding: 2rem 0 3rem 0; }
    .about-cta-links { display: flex; gap: 1rem; justify-content: center; }
"#;

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2.0.6/css/pico.min.css",
        }
        style { "{STORE_CSS}" }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Processed on the server before the initial page is delivered.
    let prefs_future = use_server_future(move || async move { api::get_user_prefs().await })?;

    // Read from the future so it is polled during SSR.
    let body = match &*prefs_future.read() {
        Some(Ok(user_prefs)) => rsx! {
            LoadedStore {
                user_prefs: *user_prefs,
            }
        },
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// Holds the main app state and only runs once the prefs are ready.
#[component]
fn LoadedStore(user_prefs: UserPrefs) -> Element {
    // Create the theme signal at the top level and share it via context.
    let theme_signal = use_signal(|| user_prefs.theme());
    use_context_provider(|| AppStateMut {
        theme: theme_signal,
    });

    rsx! {
        div {
            class: "store-shell",
            "data-theme": "{theme_signal()}",
            Router::<Route> {}
        }
    }
}

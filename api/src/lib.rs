//! This crate contains all shared fullstack server functions.

pub mod catalog;
pub mod contact;
pub mod prefs;
pub mod product;

use dioxus::prelude::*;

use contact::ContactDto;
use prefs::user_prefs::UserPrefs;
use product::Product;

pub type ApiError = anyhow::Error;

/// Returns the full product catalog in canonical order.
#[get("/api/products")]
pub async fn products() -> Result<Vec<Product>, ApiError> {
    Ok(catalog::products())
}

/// Looks up a single product. `None` means the id is unknown, not an error.
#[post("/api/product")]
pub async fn product(product_id: u32) -> Result<Option<Product>, ApiError> {
    Ok(catalog::products()
        .into_iter()
        .find(|p| p.product_id == product_id))
}

/// Validates and stores one contact-form submission, assigning its id and
/// creation timestamp. Returns the record as saved.
#[post("/api/v1/contacts")]
pub async fn create_contact(contact: ContactDto) -> Result<ContactDto, ApiError> {
    contact.validate()?;
    let saved = contact_store::save(contact)?;
    dioxus::logger::tracing::info!("saved contact #{:?}", saved.contact_id);
    Ok(saved)
}

/// All contact submissions received so far, in insertion order.
#[get("/api/v1/contacts")]
pub async fn contacts() -> Result<Vec<ContactDto>, ApiError> {
    contact_store::all()
}

/// Retrieves the user's preferences.
///
/// Reads the prefs file if one was written before, otherwise falls back to
/// environment variables and the built-in default.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    prefs_store::load().await
}

/// Persists the user's preferences so the next launch starts from them.
#[post("/api/save_user_prefs")]
pub async fn save_user_prefs(user_prefs: UserPrefs) -> Result<(), ApiError> {
    prefs_store::store(user_prefs).await
}

/// In-memory contact store. The storefront keeps no database; submissions
/// live for the lifetime of the server process.
#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod contact_store {
    use std::sync::Mutex;
    use std::sync::OnceLock;

    use anyhow::anyhow;
    use chrono::Utc;

    use crate::contact::ContactDto;

    static STORE: OnceLock<Mutex<Vec<ContactDto>>> = OnceLock::new();

    fn store() -> &'static Mutex<Vec<ContactDto>> {
        STORE.get_or_init(|| Mutex::new(Vec::new()))
    }

    pub fn save(mut contact: ContactDto) -> anyhow::Result<ContactDto> {
        let mut records = store()
            .lock()
            .map_err(|_| anyhow!("contact store poisoned"))?;
        contact.contact_id = Some(records.len() as u64 + 1);
        contact.created_at = Some(Utc::now());
        records.push(contact.clone());
        Ok(contact)
    }

    pub fn all() -> anyhow::Result<Vec<ContactDto>> {
        Ok(store()
            .lock()
            .map_err(|_| anyhow!("contact store poisoned"))?
            .clone())
    }
}

/// File-backed prefs store. The UI never touches platform storage directly;
/// these two functions are the injected preference-store capability.
#[cfg(not(target_arch = "wasm32"))]
#[allow(dead_code)]
mod prefs_store {
    use std::io::ErrorKind;
    use std::path::PathBuf;

    use anyhow::Context;

    use crate::prefs::user_prefs::UserPrefs;

    fn prefs_path() -> PathBuf {
        std::env::var("EAZYSTORE_PREFS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("eazystore-prefs.json"))
    }

    pub async fn load() -> anyhow::Result<UserPrefs> {
        let path = prefs_path();
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("malformed prefs file {}", path.display())),
            // First launch: nothing saved yet.
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UserPrefs::default()),
            Err(e) => {
                Err(e).with_context(|| format!("reading prefs file {}", path.display()))
            }
        }
    }

    pub async fn store(prefs: UserPrefs) -> anyhow::Result<()> {
        let path = prefs_path();
        let json = serde_json::to_string_pretty(&prefs)?;
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("writing prefs file {}", path.display()))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::prefs::theme::Theme;

    fn submission(name: &str) -> ContactDto {
        ContactDto {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile_number: "555-0100".to_string(),
            message: "Do you ship holographic stickers?".to_string(),
            ..ContactDto::default()
        }
    }

    // The store is process-global, so everything it asserts lives in one test.
    #[test]
    fn contact_store_assigns_ids_and_timestamps_in_insertion_order() {
        let first = contact_store::save(submission("Ada")).unwrap();
        let second = contact_store::save(submission("Grace")).unwrap();

        assert_eq!(first.contact_id, Some(1));
        assert_eq!(second.contact_id, Some(2));
        assert!(first.created_at.is_some());
        assert!(second.created_at.is_some());

        let all = contact_store::all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Ada");
        assert_eq!(all[1].name, "Grace");
        assert_eq!(all[0], first);
        assert_eq!(all[1], second);
    }

    #[tokio::test]
    async fn prefs_store_defaults_when_missing_and_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "eazystore-prefs-test-{}.json",
            std::process::id()
        ));
        std::env::set_var("EAZYSTORE_PREFS_PATH", &path);
        let _ = tokio::fs::remove_file(&path).await;

        // First launch: no file yet.
        assert_eq!(prefs_store::load().await.unwrap(), UserPrefs::default());

        prefs_store::store(UserPrefs::new(Theme::Dark)).await.unwrap();
        assert_eq!(prefs_store::load().await.unwrap().theme(), Theme::Dark);

        let _ = tokio::fs::remove_file(&path).await;
    }
}

use serde::Deserialize;
use serde::Serialize;

/// One catalog record. `product_id` is the identity key for display lists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: u32,
    pub name: String,
    pub description: String,
    /// Non-negative, currency-agnostic amount. The display layer prefixes "$".
    pub price: f64,
    /// Higher means more popular.
    pub popularity: u32,
    pub image_url: String,
}

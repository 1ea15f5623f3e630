use serde::{Deserialize, Serialize};

/// Store-assigned product identifier. Starts at 1 and is never reused.
pub type ProductId = i64;

/// Everything a client supplies when creating a product.
///
/// Attributes missing from a request body take their zero value, so `{}`
/// decodes to an empty product. A field with the wrong JSON type is a decode
/// error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributes {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// Calendar date as `YYYY-MM-DD`; stored verbatim.
    pub expiration: String,
    pub price: f64,
}

/// A catalog entry as stored and as returned on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(flatten)]
    pub attributes: ProductAttributes,
}

impl Product {
    pub fn new(id: ProductId, attributes: ProductAttributes) -> Self {
        Self { id, attributes }
    }

    pub fn price(&self) -> f64 {
        self.attributes.price
    }
}

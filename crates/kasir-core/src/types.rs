//! # Domain Types
//!
//! The catalog has exactly one entity.
//!
//! ```text
//! ┌─────────────────────────────┐        ┌─────────────────────────────┐
//! │        ProductInput         │        │          Product            │
//! │  ─────────────────────────  │  id    │  ─────────────────────────  │
//! │  nama  (name)               │ ─────► │  id    (store assigned)     │
//! │  harga (price)              │        │  nama  / harga / stok       │
//! │  stok  (stock)              │        │                             │
//! └─────────────────────────────┘        └─────────────────────────────┘
//! ```
//!
//! The wire keys are Indonesian (`nama`, `harga`, `stok`); the Rust fields
//! are not. Prices are integers in the smallest currency unit.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier. Never changes after creation.
    pub id: i64,

    /// Display label.
    #[serde(rename = "nama")]
    pub name: String,

    /// Price in the smallest currency unit.
    #[serde(rename = "harga")]
    pub price: i64,

    /// Quantity on hand.
    #[serde(rename = "stok")]
    pub stock: i64,
}

impl Product {
    /// Replaces every mutable field, keeping `id`.
    pub fn apply(&mut self, input: ProductInput) {
        self.name = input.name;
        self.price = input.price;
        self.stock = input.stock;
    }
}

// =============================================================================
// Product Input
// =============================================================================

/// Request payload for create and update.
///
/// Missing keys decode to zero values and unknown keys are ignored. Keys
/// match case-insensitively (`"NAMA"` fills `nama`). An `id` key is accepted
/// so that a full product can be posted back, but it is never used: the
/// store owns identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    #[serde(default, skip_serializing)]
    pub id: Option<i64>,

    #[serde(rename = "nama", default)]
    pub name: String,

    #[serde(rename = "harga", default)]
    pub price: i64,

    #[serde(rename = "stok", default)]
    pub stock: i64,
}

impl ProductInput {
    /// Creates an input with the given fields.
    pub fn new(name: impl Into<String>, price: i64, stock: i64) -> Self {
        ProductInput {
            id: None,
            name: name.into(),
            price,
            stock,
        }
    }

    /// Decodes a request body.
    ///
    /// Only the first JSON value is read; trailing bytes are ignored. A
    /// literal `null` yields an all-zero input. An empty body, invalid JSON,
    /// a top-level value other than an object, or a wrongly typed field is
    /// an error.
    pub fn from_json(body: &[u8]) -> CoreResult<Self> {
        let mut stream = serde_json::Deserializer::from_slice(body).into_iter::<Value>();

        match stream.next() {
            Some(Ok(Value::Null)) => Ok(Self::default()),
            Some(Ok(Value::Object(fields))) => {
                Self::deserialize(Value::Object(fold_keys(fields)))
                    .map_err(|e| CoreError::InvalidPayload(e.to_string()))
            }
            Some(Ok(other)) => Err(CoreError::InvalidPayload(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
            Some(Err(e)) => Err(CoreError::InvalidPayload(e.to_string())),
            None => Err(CoreError::InvalidPayload("empty body".to_string())),
        }
    }

    /// Builds the stored product, discarding any client-supplied id.
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Wire keys of [`ProductInput`].
const INPUT_KEYS: [&str; 4] = ["id", "nama", "harga", "stok"];

/// Renames keys that differ from a wire key only by case. An exact key wins
/// over a case-folded one.
fn fold_keys(fields: Map<String, Value>) -> Map<String, Value> {
    let mut folded = Map::new();
    let mut inexact = Vec::new();

    for (key, value) in fields {
        match INPUT_KEYS.iter().find(|known| known.eq_ignore_ascii_case(&key)) {
            Some(known) if *known != key => inexact.push((known.to_string(), value)),
            _ => {
                folded.insert(key, value);
            }
        }
    }

    for (key, value) in inexact {
        folded.entry(key).or_insert(value);
    }

    folded
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Identifiers
// =============================================================================

/// Parses the trailing path segment of `/api/produk/{id}`.
///
/// Accepts an optional sign followed by decimal digits. Anything else,
/// including an empty or nested segment, is rejected.
pub fn parse_product_id(raw: &str) -> CoreResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| CoreError::InvalidProductId(raw.to_string()))
}

// =============================================================================
// Seed Catalog
// =============================================================================

/// Starter products loaded into a fresh store.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        ProductInput::new("Indomie Godog", 3500, 10).into_product(1),
        ProductInput::new("Vit 1000ml", 3000, 40).into_product(2),
        ProductInput::new("Kecap", 12000, 20).into_product(3),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================

// web_app/model/mod.rs - Shared data models for client and server
//
// These structs travel between the catalog backend, the server functions and
// the hydrated client, so they must stay serializable on both sides.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product record from the catalog backend
///
/// Every field except the identifier is display-only. Records are decoded
/// leniently through [`RawProduct`]: a missing or malformed field never
/// rejects the record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawProduct")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_path: String,
    pub price: Option<f64>,
    pub description: String,
    pub discount_percentage: Option<f64>,
    pub is_featured_product: bool,
    pub stock_level: Option<i64>,
    pub category: String,
}

impl Product {
    /// Text shown as the grid cell heading.
    ///
    /// The storefront has always titled cells with the description rather
    /// than `name`; kept as-is until product owners decide otherwise.
    pub fn card_title(&self) -> &str {
        &self.description
    }

    /// Price as a bare number, no currency symbol or fixed decimals.
    pub fn price_label(&self) -> String {
        self.price.map(format_number).unwrap_or_default()
    }

    pub fn discount_label(&self) -> Option<String> {
        self.discount_percentage
            .filter(|d| *d > 0.0)
            .map(|d| format!("-{}%", format_number(d)))
    }
}

/// Renders a number the way the catalog stores it: `12`, `12.5`.
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Untyped view of a catalog document, accepting whatever shape arrives.
///
/// Sanity documents carry `_id`; records seeded from JSON may carry `id`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawProduct {
    id: Option<Value>,
    #[serde(rename = "_id")]
    document_id: Option<Value>,
    name: Option<Value>,
    image_path: Option<Value>,
    price: Option<Value>,
    description: Option<Value>,
    discount_percentage: Option<Value>,
    is_featured_product: Option<Value>,
    stock_level: Option<Value>,
    category: Option<Value>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let id = Some(text(raw.id))
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| text(raw.document_id));

        Product {
            id,
            name: text(raw.name),
            image_path: text(raw.image_path),
            price: number(raw.price),
            description: text(raw.description),
            discount_percentage: number(raw.discount_percentage),
            is_featured_product: flag(raw.is_featured_product),
            stock_level: number(raw.stock_level).map(|n| n.trunc() as i64),
            category: text(raw.category),
        }
    }
}

fn text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn number(value: Option<Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn flag(value: Option<Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Lifecycle of one catalog fetch as seen by the storefront view
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed(String),
}

impl CatalogState {
    /// Maps an optional (still pending) fetch outcome onto the view state.
    pub fn from_pending<E: std::fmt::Display>(outcome: Option<Result<Vec<Product>, E>>) -> Self {
        outcome.map(Self::from).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            _ => &[],
        }
    }
}

impl<E: std::fmt::Display> From<Result<Vec<Product>, E>> for CatalogState {
    fn from(outcome: Result<Vec<Product>, E>) -> Self {
        match outcome {
            Ok(products) => CatalogState::Loaded(products),
            Err(e) => CatalogState::Failed(e.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Write payload for `POST /items/` and `PUT /items/{id}`.
///
/// `name` and `price` are required; the optional fields deserialize to
/// `None` when absent or `null`. Updates replace every field, so an omitted
/// optional field clears the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    pub fn into_record(self, id: i64) -> ItemRecord {
        ItemRecord {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            tax: self.tax,
        }
    }
}

/// Read model returned by `GET /items/` and `GET /items/{id}`.
///
/// `id` is the position in the in-memory store and the primary key in
/// PostgreSQL; the two schemes are not interchangeable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl ItemRecord {
    pub fn into_item(self) -> Item {
        Item {
            name: self.name,
            description: self.description,
            price: self.price,
            tax: self.tax,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

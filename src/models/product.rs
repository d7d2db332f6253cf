use chrono::{DateTime, Duration, SubsecRound, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Stored exactly; written to JSON as an `f64`.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body accepted by the create and update endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub description: String,
    pub price: Decimal,
}

impl Product {
    pub fn new(req: ProductRequest) -> Self {
        let now = now();

        Self {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            description: req.description,
            price: req.price,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrites the mutable fields and refreshes `updated_at`.
    pub fn apply(&mut self, req: ProductRequest) {
        self.name = req.name;
        self.description = req.description;
        self.price = req.price;
        self.touch();
    }

    pub fn touch(&mut self) {
        let now = now();

        // keep updated_at strictly increasing even within one microsecond
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

// Postgres stores microseconds; truncate so returned values match stored ones.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

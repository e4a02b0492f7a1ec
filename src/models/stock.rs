use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Stock {
    pub id: i64,
    pub name: String,
    #[serde(with = "price")]
    pub price: Decimal,
    pub company: String,
}

/// Body of create and update requests. The id always comes from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStock {
    pub name: String,
    #[serde(with = "price")]
    pub price: Decimal,
    pub company: String,
}

impl NewStock {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.company.trim().is_empty() {
            return Err("company must not be empty".into());
        }
        Ok(())
    }

    pub fn into_stock(self, id: i64) -> Stock {
        Stock {
            id,
            name: self.name,
            price: self.price,
            company: self.company,
        }
    }
}

/// Price is a JSON number both ways; quoted numbers are rejected.
mod price {
    use super::*;

    pub use rust_decimal::serde::float::serialize;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let number = serde_json::Number::deserialize(deserializer)?;
        let text = number.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| de::Error::custom(format!("price {text} is out of range")))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockResponse {
    pub id: i64,
    pub message: String,
}

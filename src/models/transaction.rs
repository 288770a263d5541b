use crate::models::datetime_utils::{deserialize_datetime, serialize_datetime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Outcome,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Outcome => write!(f, "outcome"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    pub description: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    pub price: f64,
    pub category: String,
    #[serde(
        serialize_with = "serialize_datetime",
        deserialize_with = "deserialize_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.description.to_lowercase().contains(&query)
            || self.category.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub description: String,
    pub price: f64,
    pub category: String,
    pub type_: TransactionType,
}

impl NewTransaction {
    pub fn into_transaction(self, id: u64, created_at: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            description: self.description,
            type_: self.type_,
            price: self.price,
            category: self.category,
            created_at,
        }
    }
}
